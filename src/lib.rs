//! # Connect Four vs. Computer
//!
//! Connect Four in the terminal against a computer opponent that looks one
//! move ahead: it takes an immediate win, otherwise blocks the human's
//! immediate win, otherwise plays a random column.
//!
//! ## Modules
//!
//! - [`game`] — Board engine: column drops, undo, four-direction win detection
//! - [`ai`] — Agent trait, the win/block move selector, random fallback
//! - [`session`] — One match: turn order, scores, game events
//! - [`ui`] — Terminal UI with turn pacing and notifications
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — File-backed `tracing` subscriber
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod session;
pub mod ui;
