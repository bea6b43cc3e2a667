//! # Connect-M
//!
//! A generalized Connect Four: R rows by C columns, won by K pieces in a row,
//! column, or diagonal, with bots and a bot-vs-bot simulation harness.
//!
//! ## Modules
//!
//! - [`game`] — Board engine: grid, players, state machine, test doubles
//! - [`bot`] — Bot trait, random and one-ply win-or-block bots
//! - [`simulation`] — Game driver and repeated-match statistics
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod bot;
pub mod config;
pub mod error;
pub mod game;
pub mod simulation;
