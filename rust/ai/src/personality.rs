use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AiError;

/// Playing style given to an LLM robot as part of its prompt.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Personality {
    #[default]
    Strategic,
    Aggressive,
    Conservative,
    Unpredictable,
    Mathematical,
    Observant,
    Custom(String),
}

impl Personality {
    pub const PREDEFINED: [Personality; 6] = [
        Personality::Strategic,
        Personality::Aggressive,
        Personality::Conservative,
        Personality::Unpredictable,
        Personality::Mathematical,
        Personality::Observant,
    ];

    pub fn name(&self) -> &str {
        match self {
            Personality::Strategic => "strategic",
            Personality::Aggressive => "aggressive",
            Personality::Conservative => "conservative",
            Personality::Unpredictable => "unpredictable",
            Personality::Mathematical => "mathematical",
            Personality::Observant => "observant",
            Personality::Custom(_) => "custom",
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Personality::Strategic => {
                "You are a strategic poker player who makes calculated decisions based on hand strength, \
                 position, and opponent behavior. You're willing to bluff occasionally but prefer solid \
                 mathematical plays."
            }
            Personality::Aggressive => {
                "You are an aggressive poker player who likes to put pressure on opponents. \
                 You frequently bet and raise to force opponents to make difficult decisions. \
                 You're not afraid to bluff and will often represent strong hands."
            }
            Personality::Conservative => {
                "You are a conservative poker player who prioritizes minimizing risk. \
                 You typically only play premium hands and avoid marginal situations. \
                 You rarely bluff and prefer to fold when facing significant aggression unless \
                 you have a very strong hand."
            }
            Personality::Unpredictable => {
                "You are an unpredictable poker player who constantly changes your strategy. \
                 You mix bluffs with value bets in unexpected ways to confuse opponents. \
                 You sometimes make unconventional plays to throw opponents off balance."
            }
            Personality::Mathematical => {
                "You are a mathematical poker player who makes decisions based strictly on pot odds, \
                 expected value, and probabilities. You calculate the mathematical correctness of each \
                 decision and ignore psychological factors. You only bluff when the math suggests it's +EV."
            }
            Personality::Observant => {
                "You are an observant poker player who focuses on reading opponents and adapting to their \
                 tendencies. You pay close attention to betting patterns and adjust your strategy accordingly. \
                 You're willing to make exploitative plays based on opponent weaknesses."
            }
            Personality::Custom(text) => text,
        }
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the predefined names (any case) and `custom:<description>`.
impl FromStr for Personality {
    type Err = AiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some((head, text)) = trimmed.split_once(':') {
            if head.trim().eq_ignore_ascii_case("custom") {
                let text = text.trim();
                if text.is_empty() {
                    return Err(AiError::MissingCustomPersonality);
                }
                return Ok(Personality::Custom(text.to_string()));
            }
        }
        if trimmed.eq_ignore_ascii_case("custom") {
            return Err(AiError::MissingCustomPersonality);
        }
        Personality::PREDEFINED
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(trimmed))
            .cloned()
            .ok_or_else(|| AiError::UnknownPersonality(trimmed.to_string()))
    }
}
