//! Integration test: score persistence
//!
//! Exercises the JSON score store on real files and the way a session
//! reports to it at startup and at the end of each round.

use flappy::core::constants::{BIRD_HEIGHT, GROUND_Y};
use flappy::scores::{JsonScoreStore, ScoreStore, StoreError};
use flappy::{GameInput, GameLoop, Phase};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// A score file path inside a fresh temp directory.
fn temp_scores_path() -> PathBuf {
    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);
    let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir()
        .join(format!("flappy-it-{}-{}", std::process::id(), id))
        .join("scores.json")
}

fn cleanup(path: &Path) {
    if let Some(dir) = path.parent() {
        fs::remove_dir_all(dir).ok();
    }
}

/// Start flying and tick until the bird lands.
fn crash_round<S: ScoreStore>(game: &mut GameLoop<S>, rng: &mut ChaCha8Rng) {
    if game.session().phase == Phase::Idle {
        game.handle_input(GameInput::PointerDown);
        game.handle_input(GameInput::PointerUp);
    }
    for tick in 1..=600u64 {
        game.tick(tick * 16, rng);
        if game.session().phase == Phase::GameOver {
            return;
        }
    }
    panic!("round did not end");
}

#[test]
fn test_high_score_never_decreases() {
    let path = temp_scores_path();
    let mut store = JsonScoreStore::new(&path);

    assert_eq!(store.update_score("alice", 5).unwrap(), 5);
    assert_eq!(store.update_score("alice", 3).unwrap(), 5);
    assert_eq!(store.update_score("alice", 8).unwrap(), 8);
    assert_eq!(store.update_score("alice", 0).unwrap(), 8);

    let book = store.load().unwrap();
    let record = &book["alice"];
    assert_eq!(record.high_score, 8);
    assert_eq!(record.history, vec![5, 3, 8, 0]);
    cleanup(&path);
}

#[test]
fn test_missing_store_starts_at_zero() {
    let path = temp_scores_path();
    let game = GameLoop::start("newcomer", JsonScoreStore::new(&path)).unwrap();
    assert_eq!(game.session().high_score, 0);
    assert!(game.notice().is_none());
    assert!(!path.exists(), "starting a session must not write");
}

#[test]
fn test_rounds_are_persisted_across_sessions() {
    let path = temp_scores_path();
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    {
        let mut game = GameLoop::start("alice", JsonScoreStore::new(&path)).unwrap();
        crash_round(&mut game, &mut rng);
        game.handle_input(GameInput::Restart);
        crash_round(&mut game, &mut rng);
    }

    let store = JsonScoreStore::new(&path);
    let book = store.load().unwrap();
    assert_eq!(book["alice"].history.len(), 2);

    // A later session picks the high score back up
    fs::write(
        &path,
        r#"{ "alice": { "high_score": 17, "history": [17] } }"#,
    )
    .unwrap();
    let game = GameLoop::start("alice", JsonScoreStore::new(&path)).unwrap();
    assert_eq!(game.session().high_score, 17);
    cleanup(&path);
}

#[test]
fn test_corrupt_store_strict_start_fails() {
    let path = temp_scores_path();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{ broken").unwrap();

    let result = GameLoop::start("alice", JsonScoreStore::new(&path));
    assert!(matches!(result, Err(StoreError::Corrupt { .. })));
    cleanup(&path);
}

#[test]
fn test_corrupt_store_lenient_start_keeps_playing() {
    let path = temp_scores_path();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "[1, 2, 3]").unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let mut game = GameLoop::start_or_default("alice", JsonScoreStore::new(&path));
    assert_eq!(game.session().high_score, 0);
    assert!(game.notice().unwrap().starts_with("Scores unavailable"));

    crash_round(&mut game, &mut rng);
    assert_eq!(game.session().phase, Phase::GameOver);
    assert!(game.notice().unwrap().starts_with("Score not saved"));

    // The unreadable file is left exactly as it was
    assert_eq!(fs::read_to_string(&path).unwrap(), "[1, 2, 3]");
    cleanup(&path);
}

#[test]
fn test_crashed_round_lands_in_file() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let path = temp_scores_path();
    let mut game = GameLoop::start("zoe", JsonScoreStore::new(&path)).unwrap();
    crash_round(&mut game, &mut rng);
    assert!(game.session().bird.y + BIRD_HEIGHT >= GROUND_Y);

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["zoe"]["high_score"], 0);
    assert_eq!(raw["zoe"]["history"], serde_json::json!([0]));
    cleanup(&path);
}
