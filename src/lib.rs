//! # Knucklebones
//!
//! A two-player Knucklebones dice game for the terminal: place each rolled
//! die in one of three columns, cluster matching faces for quadratic score
//! bonuses, and knock the same face out of the opponent's matching column.
//! Features a Ratatui front end and a three-tier rule-based computer
//! opponent.
//!
//! ## Modules
//!
//! - [`game`]: Core rules: board, dice, players, turn state machine
//! - [`ai`]: Agent trait and the easy/medium/hard column policies
//! - [`ui`]: Terminal UI: menus, match screen, results panel
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
