//! Integration tests across all layers
//!
//! End-to-end flows: typing a sheet of orders, reading parameters through
//! the token stream, and rolling a phase over.

mod bridge;
mod console;
mod phases;
