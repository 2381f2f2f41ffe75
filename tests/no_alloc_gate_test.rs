use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_flappy::core::{GameSnapshot, GameState};
use tui_flappy::term::{FrameBuffer, GameView, Viewport};
use tui_flappy::types::{GameAction, GameConfig};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

/// Gap spans the whole field, so a hovering bird flies forever.
fn endless() -> GameConfig {
    GameConfig {
        gap_size: 800.0,
        gap_margin: 0.0,
        start_gate: false,
        ..GameConfig::default()
    }
}

fn hover_tick(gs: &mut GameState) {
    if gs.bird().y > 400.0 {
        let _ = gs.apply_action(GameAction::Flap);
    }
    let _ = gs.tick();
}

#[test]
fn tick_and_snapshot_do_not_allocate() {
    let mut gs = GameState::new(endless(), 1);
    gs.start();
    let mut snap = GameSnapshot::default();

    // Warm-up: both world buffers grow to the steady-state obstacle count.
    for _ in 0..1_000 {
        hover_tick(&mut gs);
        gs.snapshot_into(&mut snap);
    }

    let allocs = with_alloc_counting(|| {
        for _ in 0..2_000 {
            hover_tick(&mut gs);
            gs.snapshot_into(&mut snap);
        }
    });

    assert!(gs.is_active());
    assert!(gs.score() > 0);
    assert_eq!(allocs, 0);
}

#[test]
fn game_view_render_is_allocation_free_after_warmup() {
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    let mut gs = GameState::new(endless(), 1);
    gs.start();
    let mut snap = GameSnapshot::default();
    for _ in 0..1_000 {
        hover_tick(&mut gs);
    }
    gs.snapshot_into(&mut snap);
    view.render_into(&snap, viewport, &mut fb);

    let allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            hover_tick(&mut gs);
            gs.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut fb);
        }
    });

    assert_eq!(allocs, 0);
}
