//! # Connect Four
//!
//! The classic drop-a-piece game for two players, played in the terminal
//! with a Ratatui UI. The rules engine is a standalone module with an
//! explicit state machine and is usable without the UI.
//!
//! ## Modules
//!
//! - [`game`]: core game logic (board, player, win detection, state machine)
//! - [`ui`]: terminal UI (board view, input handling)
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
