//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the rules of the game and nothing else. It does no I/O
//! and knows nothing about terminals or key codes, so the same state machine
//! runs under the interactive driver, in tests and in benchmarks.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with collision tests and row clearing
//! - [`pieces`]: the seven shapes and their rotation states
//! - [`rng`]: seeded uniform piece selection
//! - [`game_state`]: active piece, preview piece, score and status
//! - [`snapshot`]: plain-data read model for renderers
//! - [`clock`]: fixed-timestep accumulator for the driver loop
//!
//! # Game Rules
//!
//! - Gravity moves the active piece down one row per tick
//! - A piece that cannot fall locks on the next tick, even after a hard drop
//! - Rotation cycles through the shape's states with no wall kicks
//! - Every cleared row is worth 10 points
//! - The game ends when the next piece cannot spawn
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//! game.tick();
//!
//! assert_eq!(game.board().cells().iter().filter(|c| c.is_some()).count(), 4);
//! ```

pub mod board;
pub mod clock;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::Board;
pub use clock::FixedTimestep;
pub use game_state::{ActivePiece, GameState};
pub use pieces::{get_shape, next_rotation, rotation_count, rotations, Shape};
pub use rng::PieceRandomizer;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
