//! # Connect Four
//!
//! A two-player Connect Four game played on a 6x7 grid in the terminal.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board engine, players, turn controller
//! - [`ui`] — Terminal front end: console input, board rendering, app wiring
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
