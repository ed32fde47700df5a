//! Terminal input module (engine-facing).
//!
//! Independent of any rendering code: maps `crossterm` key events onto
//! [`crate::types::GameAction`] and recognizes the quit keys. Each key press
//! is one discrete action, so auto-repeat events are filtered out here.

pub mod map;

pub use tui_2048_types as types;

pub use map::{action_for_event, handle_key_event, should_quit};
