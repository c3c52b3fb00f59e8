//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Keyword, Skill, Locale, BoundedWriter, base 36 and Error.

mod base36;
