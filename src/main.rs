//! Terminal flappy runner (default binary).
//!
//! crossterm for input, the framebuffer renderer for output, and a fixed-step
//! clock driving the session at `TICK_MS`.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use tui_flappy::config::{AppConfig, StoreKind};
use tui_flappy::core::{FixedStep, GameSnapshot};
use tui_flappy::engine::RunSession;
use tui_flappy::input::{handle_key_event, handle_mouse_event, should_quit};
use tui_flappy::logging;
use tui_flappy::store::{FileStore, KeyValueStore, MemoryStore, ScoreWriter};
use tui_flappy::term::{
    snapshot_fingerprint, FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport,
};
use tui_flappy::types::{GameAction, TICK_MS};

/// Heartbeat for screens where nothing moves.
const STATIC_FRAME_MS: u64 = 250;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    if let Some(path) = config.log_path.clone().or_else(logging::default_log_path) {
        logging::init(&path);
    }
    info!("starting: seed={} store={:?}", config.seed, config.store);

    let store = open_store(&config);
    let writer = ScoreWriter::background(Arc::clone(&store)).unwrap_or_else(|e| {
        warn!("background score writer unavailable ({e}); writing inline");
        ScoreWriter::inline(Arc::clone(&store))
    });
    let mut session = RunSession::new(config.game, config.seed, store.as_ref(), writer);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    session.shutdown();
    info!("exit: high_score={}", session.high_score());
    result
}

fn open_store(config: &AppConfig) -> Arc<dyn KeyValueStore> {
    match (config.store, &config.store_path) {
        (StoreKind::Memory, _) => Arc::new(MemoryStore::new()),
        (StoreKind::File, Some(path)) => Arc::new(FileStore::new(path.clone())),
        (StoreKind::File, None) => match FileStore::open_default() {
            Ok(store) => {
                info!("high score file: {}", store.path().display());
                Arc::new(store)
            }
            Err(e) => {
                warn!("{e}; high score will not persist");
                Arc::new(MemoryStore::new())
            }
        },
    }
}

fn run(term: &mut TerminalRenderer, session: &mut RunSession) -> Result<()> {
    let view = GameView::default();
    let mut clock = FixedStep::from_millis(TICK_MS);
    let mut throttle = RenderThrottle::new(STATIC_FRAME_MS);
    let mut snap = GameSnapshot::default();

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let mut fb = FrameBuffer::new(w, h);

    let started = Instant::now();
    let mut last = started;

    loop {
        // Render.
        session.snapshot_into(&mut snap);
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, snapshot_fingerprint(&snap), snap.is_static()) {
            view.render_into(&snap, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        if event::poll(clock.until_next())? {
            let action = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    handle_key_event(key)
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse),
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                    throttle.reset();
                    None
                }
                // Terminal auto-repeat would turn a held key into a stream of flaps.
                _ => None,
            };

            if let Some(action) = action {
                let was_active = session.phase().is_active();
                if session.handle(action) && !was_active && action != GameAction::Flap {
                    // A fresh run starts on a clean tick boundary.
                    clock.reset();
                    last = Instant::now();
                }
            }
        }

        // Tick.
        let now = Instant::now();
        let steps = clock.advance(now.duration_since(last));
        last = now;
        for _ in 0..steps {
            session.tick();
        }
    }
}
