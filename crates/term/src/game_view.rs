//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure: no I/O, so layout can be unit-tested.

use crate::core::{get_shape, GameSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Columns reserved right of the board for title, preview and counters.
const PANEL_W: u16 = 14;
/// Blank columns between the board frame and the panel.
const PANEL_GAP: u16 = 2;

const BLOCK: char = '█';
const PLAYFIELD_BG: Rgb = Rgb::new(64, 64, 64);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Fill color for each piece kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(160, 32, 240),
        PieceKind::J => Rgb::new(255, 255, 0),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::O => Rgb::new(0, 0, 255),
        PieceKind::S => Rgb::new(255, 0, 255),
        PieceKind::T => Rgb::new(0, 255, 0),
        PieceKind::Z => Rgb::new(255, 0, 0),
    }
}

/// Screen position of the board frame's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Origin {
    x: u16,
    y: u16,
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps blocks roughly square in most fonts.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render a snapshot into an existing framebuffer, resizing it to the
    /// viewport. Reuse one framebuffer across frames.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.frame_size();
        let origin = Origin {
            x: viewport.width.saturating_sub(frame_w + PANEL_GAP + PANEL_W) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
        };

        fb.fill_rect(
            origin.x + 1,
            origin.y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::new(Rgb::WHITE, PLAYFIELD_BG),
        );
        draw_border(fb, origin.x, origin.y, frame_w, frame_h, CellStyle::default());

        for (y, row) in snap.board.iter().enumerate() {
            for x in 0..row.len() {
                if let Some(kind) = snap.cell_kind(x, y) {
                    self.draw_board_cell(fb, origin, x as i8, y as i8, kind);
                }
            }
        }

        let active = snap.active;
        for (dx, dy) in get_shape(active.kind, active.rotation).minos() {
            self.draw_board_cell(fb, origin, active.x + dx, active.y + dy, active.kind);
        }

        self.draw_panel(fb, snap, origin, frame_w);

        if snap.is_game_over() {
            let text = "GAME OVER";
            let text_w = text.chars().count() as u16;
            fb.put_str(
                origin.x + frame_w.saturating_sub(text_w) / 2,
                origin.y + frame_h / 2,
                text,
                CellStyle::default().bold(),
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Paint one board cell; cells off the board (above the top) are skipped.
    fn draw_board_cell(&self, fb: &mut FrameBuffer, origin: Origin, x: i8, y: i8, kind: PieceKind) {
        if !(0..BOARD_WIDTH as i8).contains(&x) || !(0..BOARD_HEIGHT as i8).contains(&y) {
            return;
        }
        fb.fill_rect(
            origin.x + 1 + x as u16 * self.cell_w,
            origin.y + 1 + y as u16 * self.cell_h,
            self.cell_w,
            self.cell_h,
            BLOCK,
            CellStyle::new(piece_color(kind), PLAYFIELD_BG),
        );
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, origin: Origin, frame_w: u16) {
        let x = origin.x + frame_w + PANEL_GAP;
        if x >= fb.width() {
            return;
        }
        let label = CellStyle::default().bold();
        let value = CellStyle::default();
        let mut y = origin.y;

        fb.put_str(x, y, "BLOCKFALL", label);
        y += 2;

        fb.put_str(x, y, "NEXT", label);
        y += 1;
        // Preview box is four cells tall; rotation 0 of every shape fits.
        for (dx, dy) in get_shape(snap.next, 0).minos() {
            fb.fill_rect(
                x + dx as u16 * self.cell_w,
                y + dy as u16 * self.cell_h,
                self.cell_w,
                self.cell_h,
                BLOCK,
                CellStyle::new(piece_color(snap.next), Rgb::BLACK),
            );
        }
        y += 4 * self.cell_h + 1;

        fb.put_str(x, y, "R to reset", value);
        y += 2;

        fb.put_str(x, y, "LINES", label);
        fb.put_u32(x, y + 1, snap.lines, value);
        y += 3;

        fb.put_str(x, y, "SCORE", label);
        fb.put_u32(x, y + 1, snap.score, value);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    let (right, bottom) = (x + w - 1, y + h - 1);

    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
    for cx in x + 1..right {
        fb.put_char(cx, y, '─', style);
        fb.put_char(cx, bottom, '─', style);
    }
    for cy in y + 1..bottom {
        fb.put_char(x, cy, '│', style);
        fb.put_char(right, cy, '│', style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ActiveSnapshot, GameSnapshot};
    use crate::types::GameStatus;

    fn snapshot_with_active(kind: PieceKind, x: i8, y: i8) -> GameSnapshot {
        GameSnapshot {
            active: ActiveSnapshot {
                kind,
                rotation: 0,
                x,
                y,
            },
            ..GameSnapshot::default()
        }
    }

    fn text(fb: &FrameBuffer) -> String {
        (0..fb.height())
            .map(|y| fb.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn active_piece_drawn_in_its_color() {
        let snap = snapshot_with_active(PieceKind::O, 0, 18);
        let fb = GameView::default().render(&snap, Viewport::new(22, 22));
        let cell = fb.get(1, 19).unwrap();
        assert_eq!(cell.ch, BLOCK);
        assert_eq!(cell.style.fg, piece_color(PieceKind::O));
        assert_eq!(fb.get(4, 20).unwrap().ch, BLOCK);
        assert_eq!(fb.get(5, 20).unwrap().ch, ' ');
    }

    #[test]
    fn cells_above_board_are_not_drawn() {
        let snap = snapshot_with_active(PieceKind::O, 0, -1);
        let fb = GameView::default().render(&snap, Viewport::new(22, 22));
        // Top border survives; only the lower row of the O shows.
        assert_eq!(fb.get(1, 0).unwrap().ch, '─');
        assert_eq!(fb.get(1, 1).unwrap().ch, BLOCK);
    }

    #[test]
    fn game_over_overlay() {
        let mut snap = GameSnapshot::default();
        assert!(!text(&GameView::default().render(&snap, Viewport::new(40, 22))).contains("GAME OVER"));
        snap.status = GameStatus::GameOver;
        let fb = GameView::default().render(&snap, Viewport::new(40, 22));
        assert!(text(&fb).contains("GAME OVER"));
    }

    #[test]
    fn panel_skipped_when_narrow() {
        let fb = GameView::default().render(&GameSnapshot::default(), Viewport::new(22, 22));
        assert!(!text(&fb).contains("SCORE"));
    }
}
