//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay. It avoids widget toolkits
//! and renders into a plain framebuffer that is diffed and flushed with
//! crossterm.
//!
//! The renderer keeps its own [`TileLayer`] and feeds it the events each push
//! produces, so it never needs to inspect the engine's grid directly.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod tiles;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{level_color, GameView, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
pub use tiles::{Tile, TileFx, TileLayer};
