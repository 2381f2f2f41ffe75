//! High score persistence through the run session.

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tui_flappy::engine::RunSession;
use tui_flappy::store::{
    FileStore, KeyValueStore, MemoryStore, Result as StoreResult, ScoreWriter, StoreError,
};
use tui_flappy::types::{GameAction, GameConfig, RunPhase, HIGH_SCORE_KEY};

/// Obstacles never block: the gap spans the whole field.
fn open_sky() -> GameConfig {
    GameConfig {
        gap_size: 800.0,
        gap_margin: 0.0,
        start_gate: false,
        ..GameConfig::default()
    }
}

/// Hover around mid-field until `target` points, then stop flapping and fall.
fn play_to(session: &mut RunSession, target: u32) {
    assert_eq!(session.phase(), RunPhase::Active);
    for _ in 0..100_000 {
        if session.score() < target && session.game().bird().y > 400.0 {
            session.handle(GameAction::Flap);
        }
        session.tick();
        if session.phase().is_over() {
            assert_eq!(session.score(), target);
            return;
        }
    }
    panic!("run never ended");
}

struct BrokenStore {
    writes: AtomicUsize,
}

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Err(StoreError::Io(io::Error::new(io::ErrorKind::Other, "disk gone")))
    }

    fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Io(io::Error::new(io::ErrorKind::Other, "disk gone")))
    }
}

#[test]
fn test_new_best_persists_and_lower_score_does_not() {
    let store = Arc::new(MemoryStore::new());
    let writer = ScoreWriter::inline(store.clone());
    let mut session = RunSession::new(open_sky(), 11, &*store, writer);
    assert_eq!(session.high_score(), 0);

    play_to(&mut session, 7);
    assert!(session.new_best());
    assert_eq!(session.high_score(), 7);
    assert_eq!(store.get(HIGH_SCORE_KEY).unwrap().as_deref(), Some("7"));

    assert!(session.handle(GameAction::Restart));
    assert!(!session.new_best());
    play_to(&mut session, 3);
    assert!(!session.new_best());
    assert_eq!(session.high_score(), 7);
    assert_eq!(store.get(HIGH_SCORE_KEY).unwrap().as_deref(), Some("7"));
}

#[test]
fn test_malformed_value_reads_as_zero() {
    let store = Arc::new(MemoryStore::with_entry(HIGH_SCORE_KEY, "seven"));
    let writer = ScoreWriter::inline(store.clone());
    let mut session = RunSession::new(open_sky(), 1, &*store, writer);
    assert_eq!(session.high_score(), 0);

    play_to(&mut session, 1);
    assert_eq!(store.get(HIGH_SCORE_KEY).unwrap().as_deref(), Some("1"));
}

#[test]
fn test_store_failures_are_not_fatal() {
    let store = Arc::new(BrokenStore {
        writes: AtomicUsize::new(0),
    });
    let writer = ScoreWriter::inline(store.clone());
    let mut session = RunSession::new(open_sky(), 1, &*store, writer);
    assert_eq!(session.high_score(), 0);

    play_to(&mut session, 2);
    // The write was attempted, failed, and the in-memory best still moved.
    assert_eq!(store.writes.load(Ordering::SeqCst), 1);
    assert_eq!(session.high_score(), 2);
    assert!(session.new_best());

    assert!(session.handle(GameAction::Restart));
    assert_eq!(session.phase(), RunPhase::Active);
}

#[test]
fn test_background_writer_survives_restart_of_process() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highscore.json");

    {
        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(&path));
        let writer = ScoreWriter::background(store.clone()).unwrap();
        let mut session = RunSession::new(open_sky(), 5, store.as_ref(), writer);
        play_to(&mut session, 2);
        session.shutdown();
    }

    // A fresh session reading the same file sees the saved best.
    let store = Arc::new(FileStore::new(&path));
    let writer = ScoreWriter::inline(store.clone());
    let session = RunSession::new(GameConfig::default(), 5, &*store, writer);
    assert_eq!(session.high_score(), 2);
    assert_eq!(session.phase(), RunPhase::Ready);
}

#[test]
fn test_corrupt_file_is_replaced_by_next_best() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highscore.json");
    std::fs::write(&path, "garbage{").unwrap();

    let store = Arc::new(FileStore::new(&path));
    let writer = ScoreWriter::inline(store.clone());
    let mut session = RunSession::new(open_sky(), 3, &*store, writer);
    assert_eq!(session.high_score(), 0);

    play_to(&mut session, 2);
    assert!(session.new_best());
    assert_eq!(store.get(HIGH_SCORE_KEY).unwrap().as_deref(), Some("2"));

    let reopened = FileStore::new(&path);
    assert_eq!(reopened.get(HIGH_SCORE_KEY).unwrap().as_deref(), Some("2"));
}
