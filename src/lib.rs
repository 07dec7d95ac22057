//! # Connect Four
//!
//! Two-player Connect Four on the console: players take turns dropping Red
//! and Yellow pieces into a 7x6 board until one of them lines up four.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, win detection, turn state machine
//! - [`console`] — Line-based input/output, colored rendering, game loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod console;
pub mod error;
pub mod game;
