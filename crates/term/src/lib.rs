//! Terminal rendering.
//!
//! Renders into a plain framebuffer instead of using a widget toolkit, then
//! flushes the framebuffer to the terminal with run-length diffs.
//!
//! - [`fb`]: styled character grid
//! - [`game_view`]: snapshot to framebuffer layout (pure)
//! - [`renderer`]: framebuffer to terminal output

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
