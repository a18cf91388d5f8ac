use crate::game_state::ActivePiece;
use crate::types::{GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

/// Plain-data view of a game for renderers
///
/// Board cells are encoded as 0 for empty and `kind.index() + 1` for filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: ActiveSnapshot,
    pub next: PieceKind,
    pub status: GameStatus,
    pub score: u32,
    pub lines: u32,
    pub episode_id: u32,
    pub seed: u64,
}

impl GameSnapshot {
    pub fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }

    /// Piece kind stored in a board cell, if any
    pub fn cell_kind(&self, x: usize, y: usize) -> Option<PieceKind> {
        let v = *self.board.get(y)?.get(x)?;
        v.checked_sub(1).and_then(|i| PieceKind::from_index(i as usize))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: ActivePiece::spawn(PieceKind::I).into(),
            next: PieceKind::I,
            status: GameStatus::Running,
            score: 0,
            lines: 0,
            episode_id: 0,
            seed: 0,
        }
    }
}
