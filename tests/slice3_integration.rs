//! Integration tests for Slice 3
//!
//! Tests the full loop: JSON frame feed → GameSession → display + CSV history

use rps_vision::core::{
    CsvHistory, GameSession, HistorySink, JsonFeed, ManualClock, OpponentPredictor, RoundStateMachine,
};
use rps_vision::types::{
    Digit, FrameView, Gesture, HandPoseSample, Landmark, Laterality, RoundOutcome, RoundRecord,
    THUMB_IP, THUMB_TIP,
};
use rps_vision::{HISTORY_HEADER, LANDMARK_COUNT};
use serde_json::json;
use std::path::PathBuf;
use std::time::Duration;

fn scissors() -> HandPoseSample {
    let mut landmarks = vec![Landmark::new(0.5, 0.5); LANDMARK_COUNT];
    for digit in Digit::FINGERS {
        let tip_y = if matches!(digit, Digit::Index | Digit::Middle) { 0.3 } else { 0.7 };
        landmarks[digit.tip()] = Landmark::new(0.5, tip_y);
    }
    landmarks[THUMB_IP] = Landmark::new(0.4, 0.5);
    landmarks[THUMB_TIP] = Landmark::new(0.5, 0.5);
    HandPoseSample::new(Laterality::Right, landmarks)
}

fn feed_line(t: f64, hand: Option<&HandPoseSample>, key: Option<&str>) -> String {
    json!({ "t": t, "hand": hand, "key": key }).to_string()
}

fn temp_log(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("rps_slice3_{}_{}.csv", name, std::process::id()));
    let _ = std::fs::remove_file(&path);
    path
}

/// Scripted game: two rounds, start spam, a bad line, then quit
#[test]
fn test_scripted_session() {
    let hand = scissors();
    let mut lines = vec![feed_line(0.0, Some(&hand), Some("space"))];
    // Start spam during the countdown is ignored
    lines.push(feed_line(1.0, Some(&hand), Some("start-round")));
    lines.push(feed_line(2.0, None, None));
    lines.push(feed_line(3.1, None, None)); // resolves with cached scissors
    lines.push(feed_line(4.0, None, Some("space")));
    lines.push("garbage".to_string());
    lines.push(feed_line(7.5, None, None)); // second round resolves
    lines.push(feed_line(8.0, None, Some("quit")));
    lines.push(feed_line(9.0, None, Some("space"))); // never read
    let input = lines.join("\n");

    let clock = ManualClock::new();
    let mut feed = JsonFeed::replay(input.as_bytes(), clock.clone(), Duration::from_millis(33));
    let machine = RoundStateMachine::new(clock, OpponentPredictor::seeded(77));
    let history: Vec<RoundRecord> = Vec::new();
    let mut session = GameSession::new(machine, Vec::<FrameView>::new(), Some(Box::new(history)));

    let summary = session.run(&mut feed);

    assert_eq!(summary.rounds, 2);
    assert_eq!(summary.missed_frames, 1);
    assert_eq!(summary.frames, 7);
    assert_eq!(summary.score.rounds(), 2);

    let views = session.display();
    assert_eq!(views[0].detected, Gesture::Scissors);
    assert_eq!(views[1].countdown, Some(2));
    assert_eq!(views[2].countdown, Some(1));
    let first = views[3].last_round.as_ref().expect("first round shown");
    assert_eq!(first.player, Gesture::Scissors);
    assert_eq!(session.machine().frequencies().scissors, 2);
}

#[test]
fn test_reset_key_zeroes_score() {
    let input = [
        feed_line(0.0, None, Some("space")),
        feed_line(3.0, None, Some("r")),
        feed_line(3.5, None, None),
    ]
    .join("\n");
    let clock = ManualClock::new();
    let mut feed = JsonFeed::replay(input.as_bytes(), clock.clone(), Duration::from_millis(33));
    let machine = RoundStateMachine::new(clock, OpponentPredictor::seeded(1));
    let mut session = GameSession::new(machine, Vec::<FrameView>::new(), None);

    let summary = session.run(&mut feed);
    assert_eq!(summary.rounds, 1);
    assert_eq!(summary.score.rounds(), 0);
    // Round resolved on the reset frame shows a score of one before the reset applies
    assert_eq!(session.display()[1].score.rounds(), 1);
    assert_eq!(session.display()[2].score.rounds(), 0);
}

#[test]
fn test_low_confidence_hand_ignored() {
    let mut hand = scissors();
    hand.confidence = Some(0.2);
    let input = [
        feed_line(0.0, Some(&hand), Some("space")),
        feed_line(3.0, Some(&hand), None),
    ]
    .join("\n");
    let clock = ManualClock::new();
    let mut feed = JsonFeed::replay(input.as_bytes(), clock.clone(), Duration::from_millis(33));
    let machine = RoundStateMachine::new(clock, OpponentPredictor::seeded(1));
    let mut session = GameSession::new(machine, Vec::<FrameView>::new(), None);

    session.run(&mut feed);
    let record = session.machine().last_record().expect("round resolved");
    assert_eq!(record.player, Gesture::Rock);
    assert_eq!(session.display()[0].detected, Gesture::Unknown);
}

/// Records land in the CSV log in resolution order
#[test]
fn test_csv_history_end_to_end() {
    let path = temp_log("e2e");
    let hand = scissors();
    let input = [
        feed_line(0.0, Some(&hand), Some("space")),
        feed_line(3.0, None, None),
        feed_line(3.5, None, Some("space")),
        feed_line(6.5, None, None),
    ]
    .join("\n");

    {
        let clock = ManualClock::new();
        let mut feed = JsonFeed::replay(input.as_bytes(), clock.clone(), Duration::from_millis(33));
        let machine = RoundStateMachine::new(clock, OpponentPredictor::seeded(3));
        let history: Box<dyn HistorySink> = Box::new(CsvHistory::open(&path).unwrap());
        let mut session = GameSession::new(machine, Vec::<FrameView>::new(), Some(history));
        let summary = session.run(&mut feed);
        assert_eq!(summary.rounds, 2);
        assert!(session.history_enabled());
    }

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], HISTORY_HEADER);
    for line in &lines[1..] {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[1], "scissors");
        assert!(["rock", "paper", "scissors"].contains(&fields[2]));
        let outcome: RoundOutcome = serde_json::from_value(json!(fields[3])).unwrap();
        let ai: Gesture = serde_json::from_value(json!(fields[2])).unwrap();
        let expected = if ai == Gesture::Scissors {
            RoundOutcome::Tie
        } else if ai == Gesture::Paper {
            RoundOutcome::PlayerWin
        } else {
            RoundOutcome::AiWin
        };
        assert_eq!(outcome, expected);
    }
    let _ = std::fs::remove_file(&path);
}

/// Out-of-range timestamps are skipped over instead of ending the game
#[test]
fn test_session_survives_huge_timestamp() {
    let input = "{\"t\":1e20}\n{\"t\":1e300,\"key\":\"space\"}\n{\"key\":\"quit\"}\n";
    let clock = ManualClock::new();
    let mut feed = JsonFeed::replay(input.as_bytes(), clock.clone(), Duration::from_millis(33));
    let machine = RoundStateMachine::new(clock.clone(), OpponentPredictor::seeded(5));
    let mut session = GameSession::new(machine, Vec::<FrameView>::new(), None);

    let summary = session.run(&mut feed);
    assert_eq!(summary.frames, 3);
    assert_eq!(clock.elapsed(), Duration::from_millis(99));
    assert!(session.machine().is_counting());
}

/// A piped feed runs to completion and exits cleanly
#[test]
fn test_binary_plays_piped_feed() {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let mut child = Command::new(env!("CARGO_BIN_EXE_rps-vision"))
        .args(["--no-history", "--no-color", "--seed", "4"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    let feed = [
        feed_line(0.0, Some(&scissors()), Some("space")),
        feed_line(3.0, None, None),
        feed_line(3.1, None, Some("quit")),
    ]
    .join("\n");
    child.stdin.take().unwrap().write_all(feed.as_bytes()).unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("scissors"));
}
