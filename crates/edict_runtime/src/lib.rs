//! Order console, batch checker, and session state for edict.
//!
//! This crate provides:
//! - [`Repl`] - Interactive order console
//! - [`Session`] - One order sheet with its store and token stream
//! - [`init_logging`] - `tracing` subscriber setup for the binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod highlight;
pub mod logging;
pub mod repl;
pub mod session;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use logging::init_logging;
pub use repl::{Reply, Repl};
pub use session::{PhaseReport, Session, SessionStats};
