//! Bounded text output.
//!
//! Order text is rendered into buffers of a caller-chosen capacity. A
//! [`BoundedWriter`] never grows past that capacity, never splits a UTF-8
//! sequence, and can stamp a truncation marker over its tail.

use std::fmt;

/// Marker written over the tail of text that did not fit.
pub const ELLIPSIS: &str = "[...]";

/// Returns the largest char boundary in `text` that is `<= index`.
#[must_use]
pub fn floor_char_boundary(text: &str, index: usize) -> usize {
    if index >= text.len() {
        return text.len();
    }
    let mut boundary = index;
    while !text.is_char_boundary(boundary) {
        boundary -= 1;
    }
    boundary
}

/// Returns the longest prefix of `text` that fits in `max_len` bytes
/// without splitting a character.
#[must_use]
pub fn truncate_str(text: &str, max_len: usize) -> &str {
    &text[..floor_char_boundary(text, max_len)]
}

/// A string buffer with a hard byte capacity.
///
/// The capacity counts a terminator slot the way fixed C buffers do, so a
/// writer of capacity `n` holds at most `n - 1` bytes of text and a writer
/// of capacity 0 holds nothing.
#[derive(Clone, Debug)]
pub struct BoundedWriter {
    buf: String,
    capacity: usize,
    truncated: bool,
}

impl BoundedWriter {
    /// Creates an empty writer.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity.min(1024)),
            capacity,
            truncated: false,
        }
    }

    /// Returns the capacity this writer was created with.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn limit(&self) -> usize {
        self.capacity.saturating_sub(1)
    }

    /// Returns how many more bytes of text fit.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.limit() - self.buf.len()
    }

    /// Returns true if writing `text` now would lose part of it.
    #[must_use]
    pub fn would_truncate(&self, text: &str) -> bool {
        text.len() > self.remaining()
    }

    /// Appends as much of `text` as fits.
    ///
    /// Returns false, and marks the writer truncated, if anything was cut.
    pub fn push_str(&mut self, text: &str) -> bool {
        if !self.would_truncate(text) {
            self.buf.push_str(text);
            return true;
        }
        let fitting = truncate_str(text, self.remaining());
        self.buf.push_str(fitting);
        self.truncated = true;
        false
    }

    /// Appends a single character if it fits.
    pub fn push(&mut self, c: char) -> bool {
        let mut encoded = [0; 4];
        self.push_str(c.encode_utf8(&mut encoded))
    }

    /// Overwrites the tail of the buffer with `marker`.
    ///
    /// Backs up over whole characters only. Returns false, leaving the text
    /// as is, when the capacity cannot hold the marker at all.
    pub fn mark_truncated(&mut self, marker: &str) -> bool {
        self.truncated = true;
        if marker.len() > self.limit() {
            return false;
        }
        let keep = floor_char_boundary(&self.buf, self.limit() - marker.len());
        self.buf.truncate(keep);
        self.buf.push_str(marker);
        true
    }

    /// Returns true if any write was cut short.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Returns the text written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Returns the number of bytes written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consumes the writer, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

impl fmt::Write for BoundedWriter {
    /// Truncation is recorded on the writer, not reported as an error, so
    /// `write!` into a full buffer still succeeds.
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}
