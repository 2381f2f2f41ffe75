use tui_flappy::core::{GameState, ObstacleSnapshot};
use tui_flappy::term::{AnchorY, FrameBuffer, GameView, Viewport, BIRD_GLYPH, PIPE_GLYPH};
use tui_flappy::types::{GameConfig, RunPhase};

fn text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    all
}

fn ready_snapshot() -> tui_flappy::core::GameSnapshot {
    let mut gs = GameState::new(GameConfig::default(), 1);
    gs.arm();
    gs.snapshot()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = ready_snapshot();
    let view = GameView::default();

    // Default scale maps the 400x800 field to 20x20 cells; plus border => 22x22.
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_bird_at_scaled_position() {
    let mut snap = ready_snapshot();
    snap.phase = RunPhase::Active;
    snap.obstacles.clear();

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Bird spans x 175..225 => cols 8..12, y 400..464 => rows 10..12 (inside border +1).
    for (col, row) in [(8, 10), (11, 10), (8, 11), (11, 11)] {
        assert_eq!(fb.get(1 + col, 1 + row).unwrap().ch, BIRD_GLYPH, "({col},{row})");
    }
    assert_ne!(fb.get(1 + 7, 1 + 10).unwrap().ch, BIRD_GLYPH);
    assert_ne!(fb.get(1 + 8, 1 + 12).unwrap().ch, BIRD_GLYPH);
}

#[test]
fn term_view_draws_both_obstacle_bodies_and_leaves_the_gap() {
    let mut snap = ready_snapshot();
    snap.phase = RunPhase::Active;
    snap.obstacles.clear();
    // Cols 0..3 (x 0..50 at 20 units per col), gap rows 5..12 (y 200..500).
    snap.obstacles.push(ObstacleSnapshot {
        x: 0.0,
        gap_height: 200.0,
        passed: true,
    });

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    let at = |col: u16, row: u16| fb.get(1 + col, 1 + row).unwrap().ch;

    assert_eq!(at(0, 0), PIPE_GLYPH);
    assert_eq!(at(2, 4), PIPE_GLYPH);
    assert_eq!(at(1, 5), ' ');
    assert_eq!(at(1, 11), ' ');
    assert_eq!(at(1, 12), PIPE_GLYPH);
    assert_eq!(at(1, 17), PIPE_GLYPH);
    // Ground band starts at row 18 (y 720).
    assert_eq!(at(1, 18), '▀');
    assert_eq!(at(3, 0), ' ');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = ready_snapshot();
    snap.score = 1234;
    snap.high_score = 5678;

    let fb = GameView::default().render(&snap, Viewport::new(60, 22));
    let all = text(&fb);
    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("BEST"));
    assert!(all.contains("5678"));
    assert!(all.contains("READY"));
}

#[test]
fn term_view_shows_start_prompt_behind_gate() {
    let fb = GameView::default().render(&ready_snapshot(), Viewport::new(22, 22));
    assert!(text(&fb).contains("PRESS ENTER"));
}

#[test]
fn term_view_shows_game_over_and_new_best() {
    let mut snap = ready_snapshot();
    snap.phase = RunPhase::Over;
    snap.score = 12;
    snap.new_best = true;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    let all = text(&fb);
    assert!(all.contains("GAME OVER"));
    assert!(all.contains("SCORE 12"));
    assert!(all.contains("NEW BEST!"));
    assert!(all.contains("R TO RESTART"));

    snap.new_best = false;
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    assert!(!text(&fb).contains("NEW BEST!"));
}

#[test]
fn term_view_centers_field_on_tall_viewports() {
    let snap = ready_snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 30));
    // start_y = (30 - 22) / 2 = 4.
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');

    let top = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(22, 30));
    assert_eq!(top.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_marks_bird_above_the_field() {
    let mut snap = ready_snapshot();
    snap.phase = RunPhase::Active;
    snap.bird_y = -200.0;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    let top_row: String = (1..21).map(|x| fb.get(x, 1).unwrap().ch).collect();
    assert!(top_row.contains('^'), "{top_row:?}");
}
