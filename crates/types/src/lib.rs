//! Shared types and constants
//!
//! Pure data definitions used by every other crate in the workspace: the
//! engine, the key mapping and the terminal view. Nothing here depends on
//! I/O or on the game rules themselves.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn position**: (4, 0), horizontally centered, flush with row 0
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 500 | Default simulation step (two gravity steps per second) |
//! | `FRAME_RATE` | 30 | Default render rate of the terminal driver |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = PieceKind::T;
//! assert_eq!(PieceKind::from_index(kind.index()), Some(PieceKind::T));
//! assert!(GameStatus::default().is_running());
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Column of a freshly spawned piece's top-left cell
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 1;

/// Row of a freshly spawned piece's top-left cell
pub const SPAWN_Y: i8 = 0;

/// Points awarded per cleared row. Rows score independently; there is no
/// multi-row bonus.
pub const LINE_CLEAR_POINTS: u32 = 10;

/// Default simulation step in milliseconds
pub const TICK_MS: u32 = 500;

/// Default render rate in frames per second
pub const FRAME_RATE: u32 = 30;


/// The seven tetromino piece kinds, in catalog order
///
/// The discriminant order (I, J, L, O, S, T, Z) is the kind index used by
/// the shape catalog and by the renderer's color table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Number of piece kinds
    pub const COUNT: usize = 7;

    /// Every kind in catalog order
    pub const ALL: [PieceKind; Self::COUNT] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Catalog index (0..7)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Kind for a catalog index, or `None` past the last kind
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Commands an input layer may issue against the game
///
/// Every action is atomic. Actions that would push the piece into a wall or
/// the stack are rejected without changing anything; they are not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Move piece to the lowest free row (locks on the next tick)
    HardDrop,
    /// Advance to the next precomputed rotation state
    Rotate,
    /// Start a new game, valid in any state
    Reset,
}

/// Lifecycle of a game
///
/// `GameOver` is terminal: only a reset returns to `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Running,
    GameOver,
}

impl GameStatus {
    pub fn is_running(self) -> bool {
        self == GameStatus::Running
    }

    pub fn is_game_over(self) -> bool {
        self == GameStatus::GameOver
    }
}

/// Transition emitted by the engine for observers (audio cues, logging)
///
/// Events are buffered by the game state and drained by the driver; reading
/// them never feeds back into the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A new game started
    Reset,
    /// The active piece was written into the board
    PieceLocked { kind: PieceKind },
    /// Full rows were removed during a tick
    RowsCleared { rows: u32 },
    /// The next piece could not spawn
    GameOver { score: u32, lines: u32 },
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;
