//! Layered session configuration.
//!
//! Values are resolved from defaults, then the TOML file named by
//! `ROBOT_HOLDEM_CONFIG`, then environment variables, then `play` flags.
//! Each value remembers which layer set it ([`ValueSource`]).

use serde::{Deserialize, Serialize};
use std::fs;

use robot_holdem_engine::config::{BIG_BLIND, NUM_HANDS, SMALL_BLIND, STARTING_STACK, SessionConfig};
use robot_holdem_engine::player::MAX_SEATS;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_LLM_TIMEOUT_MS: u64 = 15_000;

/// Table used when an OpenAI key is available.
pub const DEFAULT_LLM_ROBOTS: [&str; 5] = [
    "llm:strategic",
    "llm:aggressive",
    "llm:conservative",
    "llm:mathematical",
    "llm:unpredictable",
];

/// Table used without an OpenAI key.
pub const DEFAULT_OFFLINE_ROBOTS: [&str; 4] = ["random", "conservative", "aggressive", "tight"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub hands: u32,
    pub broadcast: bool,
    pub seed: Option<u64>,
    pub model: String,
    pub api_key: Option<String>,
    pub llm_timeout_ms: u64,
    pub robots: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_stack: STARTING_STACK,
            small_blind: SMALL_BLIND,
            big_blind: BIG_BLIND,
            hands: NUM_HANDS,
            broadcast: true,
            seed: None,
            model: DEFAULT_MODEL.into(),
            api_key: None,
            llm_timeout_ms: DEFAULT_LLM_TIMEOUT_MS,
            robots: DEFAULT_OFFLINE_ROBOTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    pub fn session(&self) -> SessionConfig {
        SessionConfig {
            starting_stack: self.starting_stack,
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            hands: self.hands,
            broadcast: self.broadcast,
            seed: self.seed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSources {
    pub starting_stack: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub hands: ValueSource,
    pub broadcast: ValueSource,
    pub seed: ValueSource,
    pub model: ValueSource,
    pub api_key: ValueSource,
    pub llm_timeout_ms: ValueSource,
    pub robots: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_stack: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            hands: ValueSource::Default,
            broadcast: ValueSource::Default,
            seed: ValueSource::Default,
            model: ValueSource::Default,
            api_key: ValueSource::Default,
            llm_timeout_ms: ValueSource::Default,
            robots: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

/// Values given as `play` flags; `None` leaves the lower layers in place.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub hands: Option<u32>,
    pub seed: Option<u64>,
    pub starting_stack: Option<u32>,
    pub small_blind: Option<u32>,
    pub big_blind: Option<u32>,
    pub robots: Option<Vec<String>>,
    pub quiet: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

/// Resolves the configuration from the process environment.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    resolve(|key| std::env::var(key).ok())
}

/// Resolves defaults, file and environment layers, reading variables through `env`.
pub fn resolve<F>(env: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| env(key).filter(|v| !v.trim().is_empty());
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = var("ROBOT_HOLDEM_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.hands {
            cfg.hands = v;
            sources.hands = ValueSource::File;
        }
        if let Some(v) = f.broadcast {
            cfg.broadcast = v;
            sources.broadcast = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.model {
            cfg.model = v;
            sources.model = ValueSource::File;
        }
        if let Some(v) = f.llm_timeout_ms {
            cfg.llm_timeout_ms = v;
            sources.llm_timeout_ms = ValueSource::File;
        }
        if let Some(v) = f.robots {
            cfg.robots = v;
            sources.robots = ValueSource::File;
        }
    }

    if let Some(v) = var("STARTING_STACK") {
        cfg.starting_stack = parse_num(&v, "STARTING_STACK")?;
        sources.starting_stack = ValueSource::Env;
    }
    if let Some(v) = var("SMALL_BLIND") {
        cfg.small_blind = parse_num(&v, "SMALL_BLIND")?;
        sources.small_blind = ValueSource::Env;
    }
    if let Some(v) = var("BIG_BLIND") {
        cfg.big_blind = parse_num(&v, "BIG_BLIND")?;
        sources.big_blind = ValueSource::Env;
    }
    if let Some(v) = var("NUM_HANDS") {
        cfg.hands = parse_num(&v, "NUM_HANDS")?;
        sources.hands = ValueSource::Env;
    }
    if let Some(v) = var("BROADCAST_MODE") {
        cfg.broadcast = parse_bool(&v)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid BROADCAST_MODE: {}", v)))?;
        sources.broadcast = ValueSource::Env;
    }
    if let Some(v) = var("ROBOT_HOLDEM_SEED") {
        cfg.seed = Some(parse_num(&v, "ROBOT_HOLDEM_SEED")?);
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = var("OPENAI_MODEL") {
        cfg.model = v;
        sources.model = ValueSource::Env;
    }
    if let Some(v) = var("OPENAI_API_KEY") {
        cfg.api_key = Some(v);
        sources.api_key = ValueSource::Env;
    }
    if let Some(v) = var("LLM_TIMEOUT_MS") {
        cfg.llm_timeout_ms = parse_num(&v, "LLM_TIMEOUT_MS")?;
        sources.llm_timeout_ms = ValueSource::Env;
    }
    if let Some(v) = var("ROBOT_HOLDEM_ROBOTS") {
        cfg.robots = split_list(&v);
        sources.robots = ValueSource::Env;
    }

    if sources.robots == ValueSource::Default && cfg.api_key.is_some() {
        cfg.robots = DEFAULT_LLM_ROBOTS.iter().map(|s| s.to_string()).collect();
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

impl ConfigResolved {
    /// Applies `play` flags on top of the resolved layers and re-validates.
    pub fn apply(mut self, o: &Overrides) -> Result<Self, ConfigError> {
        let (cfg, src) = (&mut self.config, &mut self.sources);
        if let Some(v) = o.hands {
            cfg.hands = v;
            src.hands = ValueSource::Cli;
        }
        if let Some(v) = o.seed {
            cfg.seed = Some(v);
            src.seed = ValueSource::Cli;
        }
        if let Some(v) = o.starting_stack {
            cfg.starting_stack = v;
            src.starting_stack = ValueSource::Cli;
        }
        if let Some(v) = o.small_blind {
            cfg.small_blind = v;
            src.small_blind = ValueSource::Cli;
        }
        if let Some(v) = o.big_blind {
            cfg.big_blind = v;
            src.big_blind = ValueSource::Cli;
        }
        if let Some(v) = &o.robots {
            cfg.robots = v.clone();
            src.robots = ValueSource::Cli;
        }
        if o.quiet {
            cfg.broadcast = false;
            src.broadcast = ValueSource::Cli;
        }
        validate(&self.config)?;
        Ok(self)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    hands: Option<u32>,
    #[serde(default)]
    broadcast: Option<bool>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    llm_timeout_ms: Option<u64>,
    #[serde(default)]
    robots: Option<Vec<String>>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    cfg.session()
        .validate()
        .map_err(|e| ConfigError::Invalid(e.to_string()))?;
    if cfg.robots.len() < 2 {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: at least 2 robots required, got {}",
            cfg.robots.len()
        )));
    }
    if cfg.robots.len() > MAX_SEATS {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: at most {} robots allowed, got {}",
            MAX_SEATS,
            cfg.robots.len()
        )));
    }
    if cfg.llm_timeout_ms == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: llm_timeout_ms must be >0".into(),
        ));
    }
    Ok(())
}

fn parse_num<T: std::str::FromStr>(s: &str, key: &str) -> Result<T, ConfigError> {
    s.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", key, s)))
}

pub fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|x| !x.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let r = resolve(env(&[])).unwrap();
        assert_eq!(r.config, Config::default());
        assert_eq!(r.sources, ConfigSources::default());
        assert_eq!(r.config.robots.len(), 4);
    }

    #[test]
    fn api_key_switches_default_table_to_llm_seats() {
        let r = resolve(env(&[("OPENAI_API_KEY", "sk-test")])).unwrap();
        assert_eq!(r.config.robots[0], "llm:strategic");
        assert_eq!(r.config.robots.len(), 5);
        assert_eq!(r.sources.api_key, ValueSource::Env);
        assert_eq!(r.sources.robots, ValueSource::Default);
    }

    #[test]
    fn environment_overrides_defaults() {
        let r = resolve(env(&[
            ("STARTING_STACK", "500"),
            ("NUM_HANDS", "7"),
            ("BROADCAST_MODE", "off"),
            ("ROBOT_HOLDEM_ROBOTS", "random, tight"),
        ]))
        .unwrap();
        assert_eq!(r.config.starting_stack, 500);
        assert_eq!(r.config.hands, 7);
        assert!(!r.config.broadcast);
        assert_eq!(r.config.robots, vec!["random", "tight"]);
        assert_eq!(r.sources.hands, ValueSource::Env);
        assert_eq!(r.sources.small_blind, ValueSource::Default);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            resolve(env(&[("NUM_HANDS", "many")])),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            resolve(env(&[("BROADCAST_MODE", "maybe")])),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            resolve(env(&[("SMALL_BLIND", "20"), ("BIG_BLIND", "10")])),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            resolve(env(&[("ROBOT_HOLDEM_ROBOTS", "random")])),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn flags_win_over_environment() {
        let r = resolve(env(&[("NUM_HANDS", "7")])).unwrap();
        let r = r
            .apply(&Overrides {
                hands: Some(2),
                quiet: true,
                ..Overrides::default()
            })
            .unwrap();
        assert_eq!(r.config.hands, 2);
        assert_eq!(r.sources.hands, ValueSource::Cli);
        assert!(!r.config.broadcast);
    }

    #[test]
    fn flags_are_validated() {
        let r = resolve(env(&[])).unwrap();
        assert!(r
            .apply(&Overrides {
                starting_stack: Some(0),
                ..Overrides::default()
            })
            .is_err());
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        for t in ["1", "true", "ON", "yes"] {
            assert_eq!(parse_bool(t), Some(true));
        }
        for f in ["0", "false", "off", "No"] {
            assert_eq!(parse_bool(f), Some(false));
        }
        assert_eq!(parse_bool("2"), None);
    }
}
