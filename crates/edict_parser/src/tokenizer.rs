//! Order text tokenization.
//!
//! Splits an order line into whitespace-separated tokens. Single or double
//! quotes group words into one token and a backslash escapes the next
//! character. Tokens that need no unescaping are borrowed from the input.

use std::borrow::Cow;

/// A cursor over the tokens of one line.
#[derive(Clone, Debug)]
pub struct TokenCursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    /// Creates a cursor at the start of `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Creates a cursor that resumes at byte offset `pos`, clamped to the
    /// nearest character boundary at or before it.
    #[must_use]
    pub fn resume(input: &'a str, pos: usize) -> Self {
        Self {
            input,
            pos: edict_foundation::floor_char_boundary(input, pos),
        }
    }

    /// Returns the byte offset of the cursor.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the whole input.
    #[must_use]
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Returns true if only whitespace remains.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.input[self.pos..].trim_start().is_empty()
    }

    /// Returns the unconsumed text, including leading whitespace.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Moves the cursor back to the start.
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Returns the next token without consuming it.
    #[must_use]
    pub fn peek_token(&self) -> Option<Cow<'a, str>> {
        scan(self.input, self.pos).map(|(token, _)| token)
    }

    /// Consumes and returns the next token.
    pub fn next_token(&mut self) -> Option<Cow<'a, str>> {
        let (token, end) = scan(self.input, self.pos)?;
        self.pos = end;
        Some(token)
    }
}

impl<'a> Iterator for TokenCursor<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Reads one token starting at byte `from`; returns it and the end offset.
fn scan(input: &str, from: usize) -> Option<(Cow<'_, str>, usize)> {
    let rest = &input[from..];
    let skipped = rest.len() - rest.trim_start().len();
    let start = from + skipped;
    if start >= input.len() {
        return None;
    }

    // Built lazily: stays `None` while the token is a plain slice.
    let mut owned: Option<String> = None;
    let mut quote: Option<char> = None;
    let mut chars = input[start..].char_indices();
    let mut end = input.len();

    while let Some((offset, c)) = chars.next() {
        let at = start + offset;
        match c {
            '\\' => {
                let buf = owned.get_or_insert_with(|| input[start..at].to_string());
                if let Some((_, escaped)) = chars.next() {
                    buf.push(escaped);
                }
            }
            '"' | '\'' if quote.is_none() => {
                owned.get_or_insert_with(|| input[start..at].to_string());
                quote = Some(c);
            }
            c if Some(c) == quote => {
                quote = None;
            }
            c if c.is_whitespace() && quote.is_none() => {
                end = at;
                break;
            }
            c => {
                if let Some(buf) = owned.as_mut() {
                    buf.push(c);
                }
            }
        }
    }

    let token = match owned {
        Some(buf) => Cow::Owned(buf),
        None => Cow::Borrowed(&input[start..end]),
    };
    Some((token, end))
}
