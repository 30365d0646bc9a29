use std::fs;
use std::path::PathBuf;

use robot_holdem_engine::config::SessionConfig;
use robot_holdem_engine::decision::{Observation, Robot};
use robot_holdem_engine::engine::Engine;
use robot_holdem_engine::events::NullSink;
use robot_holdem_engine::logger::{HandLogger, HandRecord};
use robot_holdem_engine::player::PlayerAction;

fn tmp_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("target");
    p.push(format!("{}_{}.jsonl", name, std::process::id()));
    p
}

struct Checker;

impl Robot for Checker {
    fn name(&self) -> &str {
        "checker"
    }
    fn decide(&mut self, _view: &Observation) -> PlayerAction {
        PlayerAction::Call
    }
}

fn played_records(hands: u32) -> Vec<HandRecord> {
    let config = SessionConfig {
        hands,
        seed: Some(11),
        ..SessionConfig::default()
    };
    let mut engine = Engine::new(config, ["a", "b"]).unwrap();
    let mut robots = [Checker, Checker];
    let mut out = Vec::new();
    engine
        .run_while(&mut robots, &mut NullSink, |s| {
            out.push(s.record.clone());
            true
        })
        .unwrap();
    out
}

#[test]
fn writes_jsonl_with_lf_only() {
    let path = tmp_path("handlog");
    let _ = fs::remove_file(&path);
    let mut logger = HandLogger::create(&path).expect("create logger");
    for rec in played_records(2) {
        logger.write(&rec).expect("write");
    }
    assert_eq!(logger.records_written(), 2);
    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
    let text = String::from_utf8(bytes).unwrap();
    for line in text.lines() {
        let back: HandRecord = serde_json::from_str(line).expect("each line is a record");
        assert_eq!(back.board.len(), 5, "calling robots always reach the river");
    }
    let _ = fs::remove_file(&path);
}

#[test]
fn ts_is_generated_when_missing_and_preserved_when_present() {
    let path = tmp_path("handlog_ts");
    let _ = fs::remove_file(&path);
    let mut logger = HandLogger::create(&path).expect("create logger");
    let rec = played_records(1).remove(0);
    assert!(rec.ts.is_none());
    logger.write(&rec).expect("write");
    let line = fs::read_to_string(&path).unwrap();
    assert!(line.contains("\"ts\":\""), "ts should be injected");

    let preset = "2030-01-01T00:00:00Z".to_string();
    let rec2 = HandRecord {
        ts: Some(preset.clone()),
        ..rec
    };
    logger.write(&rec2).expect("write2");
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains(&preset), "preset ts must be kept");
    let _ = fs::remove_file(&path);
}

#[test]
fn records_carry_sequential_hand_ids_and_closing_stacks() {
    let records = played_records(3);
    assert_eq!(records.len(), 3);
    for (i, rec) in records.iter().enumerate() {
        assert!(rec.hand_id.ends_with(&format!("-{:06}", i + 1)));
        assert_eq!(rec.stacks.iter().sum::<u32>(), 2000);
        assert_eq!(rec.blinds.len(), 2);
    }
    assert_eq!(records[0].button, 0);
    assert_eq!(records[1].button, 1);
}
