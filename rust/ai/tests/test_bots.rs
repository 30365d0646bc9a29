use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use robot_holdem_ai::llm::{LlmBackend, LlmError};
use robot_holdem_ai::personality::Personality;
use robot_holdem_ai::{create_bot, Bot};
use robot_holdem_engine::config::SessionConfig;
use robot_holdem_engine::decision::Robot;
use robot_holdem_engine::engine::Engine;
use robot_holdem_engine::events::GameEvent;

fn config(hands: u32, seed: u64) -> SessionConfig {
    SessionConfig {
        hands,
        seed: Some(seed),
        ..SessionConfig::default()
    }
}

fn names(robots: &[Bot]) -> Vec<String> {
    robots.iter().map(|r| r.name().to_string()).collect()
}

#[test]
fn heuristic_table_never_triggers_rejections() {
    let mut robots: Vec<Bot> = ["conservative", "aggressive", "tight", "random"]
        .iter()
        .enumerate()
        .map(|(i, k)| create_bot(k, i as u64).unwrap())
        .collect();
    let mut engine = Engine::new(config(40, 2024), names(&robots)).unwrap();
    let total = engine.total_chips();
    let mut events: Vec<GameEvent> = Vec::new();

    let summary = engine.run(&mut robots, &mut events).unwrap();

    assert!(summary.hands_played >= 1 && summary.hands_played <= 40);
    let after: u64 = summary.standings.iter().map(|s| u64::from(s.stack)).sum();
    assert_eq!(after, total);
    assert!(
        !events
            .iter()
            .any(|e| matches!(e, GameEvent::ActionRejected { .. })),
        "robots size their actions legally"
    );
}

#[test]
fn seeded_robots_replay_the_same_session() {
    let play = || {
        let mut robots = vec![
            create_bot("random", 1).unwrap(),
            create_bot("aggressive", 2).unwrap(),
            create_bot("tight", 3).unwrap(),
        ];
        let mut engine = Engine::new(config(15, 99), names(&robots)).unwrap();
        let mut events: Vec<GameEvent> = Vec::new();
        engine.run(&mut robots, &mut events).unwrap();
        events
            .into_iter()
            .filter(|e| !matches!(e, GameEvent::HandStarted { .. }))
            .collect::<Vec<_>>()
    };
    assert_eq!(play(), play());
}

struct AlwaysCall(AtomicUsize);

impl LlmBackend for AlwaysCall {
    fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(r#"{"ACTION": "CALL", "REASONING": "keep it simple"}"#.into())
    }
}

struct Offline;

impl LlmBackend for Offline {
    fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
        Err(LlmError::Transport("offline".into()))
    }
}

#[test]
fn llm_robots_play_through_the_engine() {
    let backend = Arc::new(AlwaysCall(AtomicUsize::new(0)));
    let mut robots = vec![
        Bot::llm(Personality::Observant, backend.clone(), Duration::from_secs(5)),
        Bot::llm(Personality::Strategic, Arc::new(Offline), Duration::from_secs(5))
            .rename("Offline"),
        create_bot("conservative", 4).unwrap(),
    ];
    let mut engine = Engine::new(config(3, 8), names(&robots)).unwrap();
    let summary = engine
        .run(&mut robots, &mut robot_holdem_engine::events::NullSink)
        .unwrap();

    assert_eq!(summary.hands_played, 3);
    assert!(backend.0.load(Ordering::SeqCst) > 0);
    match &robots[1] {
        Bot::Llm(b) => {
            assert!(!b.history().is_empty());
            assert!(b.history().iter().all(|d| d.fallback.is_some()));
        }
        other => panic!("expected an LLM robot, got {other:?}"),
    }
}
