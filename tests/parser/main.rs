//! Integration tests for Layer 2: Parser
//!
//! Tests for tokenizing, parsing, building and formatting orders.

mod build;
mod format;
mod parse;
mod properties;
mod tokenizer;
