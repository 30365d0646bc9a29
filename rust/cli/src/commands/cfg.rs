//! Configuration command handler.
//!
//! Prints the resolved configuration as JSON, one `{ "value", "source" }`
//! object per setting. The OpenAI key is masked.
//!
//! # Example Output
//!
//! ```json
//! {
//!   "starting_stack": {
//!     "value": 1000,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config::{self, ConfigResolved};
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources()?;
    write_config(&resolved, out)
}

pub(crate) fn write_config(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "starting_stack": { "value": config.starting_stack, "source": sources.starting_stack },
        "small_blind": { "value": config.small_blind, "source": sources.small_blind },
        "big_blind": { "value": config.big_blind, "source": sources.big_blind },
        "hands": { "value": config.hands, "source": sources.hands },
        "broadcast": { "value": config.broadcast, "source": sources.broadcast },
        "seed": { "value": config.seed, "source": sources.seed },
        "model": { "value": config.model, "source": sources.model },
        "api_key": { "value": config.api_key.as_deref().map(mask), "source": sources.api_key },
        "llm_timeout_ms": { "value": config.llm_timeout_ms, "source": sources.llm_timeout_ms },
        "robots": { "value": config.robots, "source": sources.robots },
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

// Keeps the last four characters of long keys.
fn mask(key: &str) -> String {
    let n = key.chars().count();
    if n <= 8 {
        "****".to_string()
    } else {
        let tail: String = key.chars().skip(n - 4).collect();
        format!("****{}", tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::resolve;

    #[test]
    fn test_cfg_writes_every_setting_with_source() {
        let resolved = resolve(|_| None).unwrap();
        let mut out = Vec::new();
        write_config(&resolved, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        for key in [
            "starting_stack",
            "small_blind",
            "big_blind",
            "hands",
            "broadcast",
            "seed",
            "model",
            "api_key",
            "llm_timeout_ms",
            "robots",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
            assert_eq!(json[key]["source"], "default", "{key}");
        }
        assert_eq!(json["starting_stack"]["value"], 1000);
    }

    #[test]
    fn test_cfg_masks_api_key() {
        let resolved = resolve(|k| (k == "OPENAI_API_KEY").then(|| "sk-secret-123456".to_string())).unwrap();
        let mut out = Vec::new();
        write_config(&resolved, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(!output.contains("sk-secret"));
        assert!(output.contains("****3456"));
        assert!(output.contains("\"env\""));
    }
}
