use std::io;

fn main() {
    robot_holdem_cli::logging::init_logging();
    let code = robot_holdem_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
