//! LLM-backed robot.
//!
//! The robot describes its [`Observation`] in plain text, hands the prompt
//! to an [`LlmBackend`] on a helper thread and waits at most its timeout for
//! the answer. Whatever goes wrong (transport error, timeout, an answer that
//! does not parse or is not legal) the robot falls back to
//! [`safe_default`] and records why in its decision history.

use std::fmt::Write as _;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use robot_holdem_engine::cards::Card;
use robot_holdem_engine::decision::{safe_default, ActionKind, Observation, Robot};
use robot_holdem_engine::hand::best_hand;
use robot_holdem_engine::logger::Street;
use robot_holdem_engine::player::{PlayerAction, PlayerStatus};
use robot_holdem_engine::rules::validate_action;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{trace, warn};

use crate::personality::Personality;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LlmError {
    #[error("LLM transport error: {0}")]
    Transport(String),
    #[error("LLM did not answer within {0:?}")]
    Timeout(Duration),
    #[error("LLM response unusable: {0}")]
    BadResponse(String),
}

/// Text completion service used by [`LlmBot`].
pub trait LlmBackend: Send + Sync {
    fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

/// One entry of an [`LlmBot`]'s decision history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub street: Street,
    pub prompt: String,
    /// Raw backend answer, when one arrived in time
    pub response: Option<String>,
    pub reasoning: Option<String>,
    pub action: PlayerAction,
    /// Why the safe default was used instead of the backend's choice
    pub fallback: Option<String>,
}

pub struct LlmBot {
    name: String,
    personality: Personality,
    backend: Arc<dyn LlmBackend>,
    timeout: Duration,
    history: Vec<Decision>,
}

impl std::fmt::Debug for LlmBot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmBot")
            .field("name", &self.name)
            .field("personality", &self.personality)
            .field("timeout", &self.timeout)
            .field("decisions", &self.history.len())
            .finish()
    }
}

impl LlmBot {
    pub fn new(personality: Personality, backend: Arc<dyn LlmBackend>, timeout: Duration) -> Self {
        Self {
            name: format!("LLM ({})", personality.name()),
            personality,
            backend,
            timeout,
            history: Vec::new(),
        }
    }

    pub fn personality(&self) -> &Personality {
        &self.personality
    }

    pub fn history(&self) -> &[Decision] {
        &self.history
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    // Runs the backend on a helper thread; a late answer is dropped with the channel.
    fn ask(&self, prompt: String) -> Result<String, LlmError> {
        let (tx, rx) = mpsc::channel();
        let backend = Arc::clone(&self.backend);
        thread::spawn(move || {
            let _ = tx.send(backend.complete(&prompt));
        });
        match rx.recv_timeout(self.timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => Err(LlmError::Timeout(self.timeout)),
            Err(RecvTimeoutError::Disconnected) => Err(LlmError::Transport(
                "backend worker exited without answering".into(),
            )),
        }
    }
}

impl Robot for LlmBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide(&mut self, view: &Observation) -> PlayerAction {
        let prompt = build_prompt(view, &self.personality);
        trace!(robot = %self.name, %prompt, "llm prompt");

        let mut decision = Decision {
            street: view.street,
            prompt: prompt.clone(),
            response: None,
            reasoning: None,
            action: safe_default(view.to_call),
            fallback: None,
        };
        match self.ask(prompt) {
            Ok(text) => {
                let parsed = parse_response(&text);
                decision.response = Some(text);
                match parsed {
                    Some(reply) => {
                        decision.reasoning = reply.reasoning;
                        match validate_action(view.stack, view.to_call, view.min_raise, reply.action.clone()) {
                            Ok(_) => decision.action = reply.action,
                            Err(e) => {
                                warn!(robot = %self.name, action = ?reply.action, error = %e, "llm chose an illegal action");
                                decision.fallback = Some(e.to_string());
                            }
                        }
                    }
                    None => {
                        warn!(robot = %self.name, "llm response could not be parsed");
                        decision.fallback = Some("unparseable response".into());
                    }
                }
            }
            Err(e) => {
                warn!(robot = %self.name, error = %e, "llm decision failed");
                decision.fallback = Some(e.to_string());
            }
        }
        let action = decision.action.clone();
        self.history.push(decision);
        action
    }
}

/// A parsed backend answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub action: PlayerAction,
    pub reasoning: Option<String>,
}

/// Reads `{"ACTION": "...", "REASONING": "..."}` (keys in any case, possibly
/// wrapped in other text) or, failing that, a bare action such as `RAISE $100`.
pub fn parse_response(text: &str) -> Option<Reply> {
    if let Some(obj) = extract_json(text) {
        let field = |key: &str| {
            obj.iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .and_then(|(_, v)| v.as_str())
                .map(str::to_string)
        };
        if let Some(action) = field("ACTION").as_deref().and_then(parse_action) {
            return Some(Reply {
                action,
                reasoning: field("REASONING"),
            });
        }
    }
    parse_action(text).map(|action| Reply {
        action,
        reasoning: None,
    })
}

fn extract_json(text: &str) -> Option<serde_json::Map<String, serde_json::Value>> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    match serde_json::from_str(&text[start..=end]).ok()? {
        serde_json::Value::Object(map) => Some(map),
        _ => None,
    }
}

/// Parses an action phrase. Bets and raises need an amount; `$` and
/// thousands separators are ignored.
pub fn parse_action(text: &str) -> Option<PlayerAction> {
    let upper = text.to_ascii_uppercase().replace(['-', '_'], " ");
    let words: Vec<&str> = upper
        .split(|c: char| c.is_whitespace() || c == ':' || c == '"')
        .filter(|w| !w.is_empty())
        .collect();
    let amount = |from: usize| {
        words[from..].iter().find_map(|w| {
            let digits: String = w.chars().filter(|c| *c != '$' && *c != ',').collect();
            digits.parse::<u32>().ok()
        })
    };
    for (i, w) in words.iter().enumerate() {
        match *w {
            "FOLD" | "FOLDS" => return Some(PlayerAction::Fold),
            "CHECK" | "CHECKS" => return Some(PlayerAction::Check),
            "CALL" | "CALLS" => return Some(PlayerAction::Call),
            "ALLIN" | "SHOVE" => return Some(PlayerAction::AllIn),
            "ALL" if words.get(i + 1) == Some(&"IN") => return Some(PlayerAction::AllIn),
            "BET" | "BETS" => return amount(i + 1).map(PlayerAction::Bet),
            "RAISE" | "RAISES" => return amount(i + 1).map(PlayerAction::Raise),
            _ => {}
        }
    }
    None
}

fn card_text(card: &Card) -> String {
    card.to_string()
}

fn cards_text(cards: &[Card]) -> String {
    if cards.is_empty() {
        "None".to_string()
    } else {
        cards.iter().map(card_text).collect::<Vec<_>>().join(", ")
    }
}

fn position(view: &Observation) -> &'static str {
    let n = view.opponents.len() + 1;
    let relative = (view.seat + n - view.button % n) % n;
    match (relative * 3) / n {
        0 => "Early",
        1 => "Middle",
        _ => "Late",
    }
}

/// Prompt text describing the spot, the legal actions and the personality.
pub fn build_prompt(view: &Observation, personality: &Personality) -> String {
    let mut p = String::new();
    let _ = writeln!(
        p,
        "You are an AI poker player in a no-limit Texas Hold'em cash game. Decide your next action."
    );
    let _ = writeln!(p);
    let _ = writeln!(p, "Current game state:");
    let _ = writeln!(p, "- Your hole cards: {}", cards_text(&view.hole_cards));
    let _ = writeln!(p, "- Community cards: {}", cards_text(&view.community));
    let _ = writeln!(p, "- Betting round: {}", view.street);
    let _ = writeln!(p, "- Your position: {}", position(view));
    let _ = writeln!(p, "- Your stack: ${}", view.stack);
    let _ = writeln!(p, "- Current pot: ${}", view.pot);
    let _ = writeln!(p, "- Current highest bet: ${}", view.current_bet);
    let _ = writeln!(p, "- Amount to call: ${}", view.to_call);
    let _ = writeln!(p, "- Big blind: ${}", view.big_blind);
    let _ = writeln!(p, "- Players still in the hand: {}", view.players_in_hand());

    let mut cards = view.hole_cards.to_vec();
    cards.extend_from_slice(&view.community);
    let (strength, best) = best_hand(&cards);
    let _ = writeln!(p);
    let _ = writeln!(p, "Your current hand: {} ({})", strength, cards_text(&best));

    let _ = writeln!(p);
    let _ = writeln!(p, "Other players:");
    for o in &view.opponents {
        let status = match o.status {
            PlayerStatus::Active => "Active",
            PlayerStatus::Folded => "Folded",
            PlayerStatus::AllIn => "All-in",
            PlayerStatus::SittingOut => "Sitting out",
        };
        let _ = writeln!(
            p,
            "- {}: Stack ${}, Current bet ${}, Status: {}",
            o.name, o.stack, o.street_bet, status
        );
    }

    let _ = writeln!(p);
    let _ = writeln!(p, "Available actions:");
    for kind in view.legal_actions() {
        let line = match kind {
            ActionKind::Fold => "FOLD - Give up your hand and forfeit any bets made so far".to_string(),
            ActionKind::Check => "CHECK - Pass without betting".to_string(),
            ActionKind::Call => format!("CALL - Match the current bet by putting in ${}", view.to_call.min(view.stack)),
            ActionKind::Bet => format!(
                "BET <amount> - Open the betting with at least ${} and at most ${}",
                view.min_raise.min(view.stack),
                view.stack
            ),
            ActionKind::Raise => format!(
                "RAISE <amount> - Raise the current bet by at least ${}; you can add at most ${} beyond the call",
                view.min_raise.min(view.stack - view.to_call),
                view.stack - view.to_call
            ),
            ActionKind::AllIn => format!("ALL-IN - Put your whole stack of ${} in", view.stack),
        };
        let _ = writeln!(p, "{line}");
    }
    if view.to_call > view.stack {
        let _ = writeln!(
            p,
            "IMPORTANT: You only have ${} which is not enough to call ${}. Your only options are FOLD or ALL-IN.",
            view.stack, view.to_call
        );
    }

    let _ = writeln!(p);
    let _ = writeln!(p, "Your personality: {}", personality.description());
    let _ = writeln!(p);
    let _ = writeln!(
        p,
        "Respond with a JSON object containing your decision and reasoning in the following format:"
    );
    let _ = writeln!(p, "{{\"ACTION\": \"<action>\", \"REASONING\": \"<your reasoning>\"}}");
    let _ = writeln!(
        p,
        "Use ONLY ONE of the available actions. For BET or RAISE include the amount, e.g. \"BET $50\" or \"RAISE $100\"."
    );
    p
}
