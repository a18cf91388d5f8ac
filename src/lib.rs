//! blockfall (workspace facade crate).
//!
//! Re-exports the crates under `crates/` as `blockfall::{core,input,term,types}`
//! and hosts the terminal driver used by the binary.

pub mod app;
pub mod config;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
