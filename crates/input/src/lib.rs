//! Terminal input mapping.
//!
//! Turns `crossterm` key events into [`crate::types::GameAction`]s. Only
//! fresh key presses count: auto-repeat and key-release events are dropped,
//! so holding a key moves the piece once.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, is_fresh_press, should_quit};
