//! # Play Command
//!
//! Runs a robot session: resolves the configuration, seats the robots,
//! plays until the hand limit or until one robot holds every chip, and
//! prints the final standings.
//!
//! ## Features
//!
//! - Robot table from `--robots` / `ROBOT_HOLDEM_ROBOTS` / config file
//! - LLM seats backed by the OpenAI chat-completions API
//! - Console commentary through [`ConsoleBroadcaster`] (`--quiet` hides hole cards and actions)
//! - Optional JSONL hand history (`--history FILE`)

use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use robot_holdem_ai::llm::LlmBackend;
use robot_holdem_ai::personality::Personality;
use robot_holdem_ai::{create_bot, Bot};
use robot_holdem_engine::decision::Robot;
use robot_holdem_engine::engine::Engine;
use robot_holdem_engine::logger::HandLogger;
use tracing::info;

use crate::broadcast::ConsoleBroadcaster;
use crate::config::{self, Config, ConfigResolved, Overrides};
use crate::error::CliError;
use crate::openai::OpenAiBackend;
use crate::ui;

/// Flags of the `play` command.
#[derive(Debug, Clone, Default)]
pub struct PlayArgs {
    pub overrides: Overrides,
    pub history: Option<PathBuf>,
}

/// Handle the play command.
///
/// # Errors
///
/// * `CliError::Config` for invalid settings or LLM seats without an API key
/// * `CliError::InvalidInput` for unknown robot names or personalities
/// * `CliError::Io` when the history file or the output stream fails
/// * `CliError::Engine` when the session aborts on an engine invariant
pub fn handle_play_command(
    args: &PlayArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let resolved = config::load_with_sources()?;
    if let Some(path) = &args.history
        && path.exists()
    {
        ui::display_warning(
            err,
            &format!("appending to existing history file {}", path.display()),
        )?;
    }
    run_session(resolved, args, out)
}

pub(crate) fn run_session(
    resolved: ConfigResolved,
    args: &PlayArgs,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut config = resolved.apply(&args.overrides)?.config;
    let seed = config.seed.unwrap_or_else(rand::random);
    config.seed = Some(seed);

    let mut robots = build_robots(&config, seed)?;
    let names: Vec<String> = robots.iter().map(|r| r.name().to_string()).collect();
    let mut engine = Engine::new(config.session(), &names)?;

    writeln!(
        out,
        "play: robots={} hands={} stack={} blinds={}/{} seed={}",
        names.len(),
        config.hands,
        config.starting_stack,
        config.small_blind,
        config.big_blind,
        seed
    )?;
    for (seat, name) in names.iter().enumerate() {
        writeln!(out, "Seat {}: {}", seat, name)?;
    }

    let mut logger = match &args.history {
        Some(path) => Some(HandLogger::create(path)?),
        None => None,
    };
    let mut log_error = None;

    let mut sink = ConsoleBroadcaster::new(out, config.broadcast);
    let result = engine.run_while(&mut robots, &mut sink, |hand| {
        if let Some(l) = logger.as_mut()
            && let Err(e) = l.write(&hand.record)
        {
            log_error = Some(e);
            return false;
        }
        true
    });
    sink.finish()?;
    let summary = result?;
    if let Some(e) = log_error {
        return Err(e.into());
    }
    info!(hands = summary.hands_played, "session finished");

    writeln!(out)?;
    writeln!(out, "Hands played: {}", summary.hands_played)?;
    writeln!(out, "Final standings:")?;
    for (rank, s) in summary.standings.iter().enumerate() {
        writeln!(out, "{}. {} - {} chips", rank + 1, s.name, s.stack)?;
    }
    if let Some(l) = &logger {
        writeln!(out, "History: {} hands written", l.records_written())?;
    }
    Ok(())
}

/// Builds one robot per entry of `config.robots`.
///
/// Entries are `random`, `conservative`, `aggressive`, `tight`, `llm` or
/// `llm:<personality>`. Robot `i` is seeded from `seed + i + 1`. Repeated
/// display names get a ` #n` suffix.
pub fn build_robots(config: &Config, seed: u64) -> Result<Vec<Bot>, CliError> {
    let timeout = Duration::from_millis(config.llm_timeout_ms);
    let mut backend: Option<Arc<dyn LlmBackend>> = None;
    let mut bots = Vec::with_capacity(config.robots.len());

    for (i, entry) in config.robots.iter().enumerate() {
        let (kind, rest) = match entry.split_once(':') {
            Some((k, r)) => (k.trim(), Some(r)),
            None => (entry.trim(), None),
        };
        if kind.eq_ignore_ascii_case("llm") {
            let personality = rest
                .map(str::parse::<Personality>)
                .transpose()?
                .unwrap_or_default();
            let backend = match &backend {
                Some(b) => Arc::clone(b),
                None => {
                    let key = config.api_key.as_deref().ok_or_else(|| {
                        CliError::Config(format!("robot '{}' needs OPENAI_API_KEY", entry))
                    })?;
                    let openai = OpenAiBackend::new(key, config.model.clone(), timeout);
                    info!(model = openai.model(), "llm seats use the OpenAI backend");
                    let b: Arc<dyn LlmBackend> = Arc::new(openai);
                    backend = Some(Arc::clone(&b));
                    b
                }
            };
            bots.push(Bot::llm(personality, backend, timeout));
        } else {
            bots.push(create_bot(entry, seed.wrapping_add(i as u64 + 1))?);
        }
    }

    let mut totals: HashMap<String, usize> = HashMap::new();
    for b in &bots {
        *totals.entry(b.name().to_string()).or_default() += 1;
    }
    let mut seen: HashMap<String, usize> = HashMap::new();
    Ok(bots
        .into_iter()
        .map(|b| {
            let name = b.name().to_string();
            if totals.get(&name).copied().unwrap_or(0) < 2 {
                return b;
            }
            let n = seen.entry(name.clone()).or_default();
            *n += 1;
            let label = format!("{} #{}", name, n);
            b.rename(label)
        })
        .collect())
}
