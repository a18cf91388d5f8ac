use blockfall::core::{Board, GameState};
use blockfall::term::{piece_color, FrameBuffer, GameView, Viewport};
use blockfall::types::{GameStatus, PieceKind};

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();

    // cell_w=2, cell_h=1: 20x20 board plus border => 22x22
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut board = Board::new();
    board.set(0, 19, Some(PieceKind::L));
    let snap = GameState::from_parts(board, PieceKind::O, PieceKind::O, 1).snapshot();

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    let (x0, y0) = (1, 1 + 19);
    for x in [x0, x0 + 1] {
        let cell = fb.get(x, y0).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, piece_color(PieceKind::L));
    }
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, ' ');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = GameState::from_parts(Board::new(), PieceKind::T, PieceKind::I, 1).snapshot();
    snap.score = 1234;
    snap.lines = 56;

    let fb = GameView::default().render(&snap, Viewport::new(60, 22));
    let all = screen_text(&fb);

    for label in ["BLOCKFALL", "NEXT", "R to reset", "LINES", "SCORE", "1234", "56"] {
        assert!(all.contains(label), "missing {label:?}");
    }
    assert!(!all.contains("GAME OVER"));
}

#[test]
fn term_view_previews_next_piece_in_spawn_orientation() {
    let snap = GameState::from_parts(Board::new(), PieceKind::T, PieceKind::I, 1).snapshot();

    // Board frame starts at x=(60-38)/2=11; the panel starts two columns past it.
    let fb = GameView::default().render(&snap, Viewport::new(60, 22));
    let (px, py) = (11 + 22 + 2, 3);

    for x in px..px + 8 {
        let cell = fb.get(x, py).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, piece_color(PieceKind::I));
    }
    assert_eq!(fb.get(px, py + 1).unwrap().ch, ' ');
}

#[test]
fn term_view_shows_game_over() {
    let mut snap = GameState::new(1).snapshot();
    snap.status = GameStatus::GameOver;

    let fb = GameView::default().render(&snap, Viewport::new(60, 22));
    assert!(screen_text(&fb).contains("GAME OVER"));
}

#[test]
fn term_view_centers_board_on_tall_viewports() {
    let snap = GameState::new(1).snapshot();

    // start_y = (30 - 22) / 2 = 4
    let fb = GameView::default().render(&snap, Viewport::new(22, 30));
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}
