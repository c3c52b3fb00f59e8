//! Syntax highlighting for the order console.

use std::borrow::Cow;

/// Highlighter for order lines and console commands.
pub struct OrderHighlighter {}

impl OrderHighlighter {
    /// Creates a new highlighter.
    pub const fn new() -> Self {
        Self {}
    }

    /// Highlight a line of input.
    #[allow(clippy::unused_self)]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let body = line.trim_start();
        if body.is_empty() {
            return Cow::Borrowed(line);
        }
        let indent = &line[..line.len() - body.len()];

        // Console commands - cyan
        if body.starts_with(':') {
            return Cow::Owned(format!("{indent}\x1b[36m{body}\x1b[0m"));
        }

        // Comments - dim italic
        if body.starts_with("//") {
            return Cow::Owned(format!("{indent}\x1b[2;3m{body}\x1b[0m"));
        }

        let mut result = String::with_capacity(line.len() * 2);
        result.push_str(indent);

        // Flag prefixes: quiet red, persist blue
        let mut chars = body.char_indices().peekable();
        while let Some(&(_, c)) = chars.peek() {
            match c {
                '!' => result.push_str("\x1b[31m!\x1b[0m"),
                '@' => result.push_str("\x1b[34m@\x1b[0m"),
                _ => break,
            }
            chars.next();
        }

        // Keyword - bold green
        let start = chars.peek().map_or(body.len(), |&(i, _)| i);
        let end = body[start..]
            .find(char::is_whitespace)
            .map_or(body.len(), |i| start + i);
        if end > start {
            result.push_str("\x1b[1;32m");
            result.push_str(&body[start..end]);
            result.push_str("\x1b[0m");
        }

        highlight_params(&body[end..], &mut result);
        Cow::Owned(result)
    }
}

/// Colors quoted text yellow and numbers magenta.
fn highlight_params(params: &str, result: &mut String) {
    let mut quote: Option<char> = None;
    let mut chars = params.chars().peekable();
    let mut at_word_start = true;

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                result.push(c);
                if let Some(next) = chars.next() {
                    result.push(next);
                }
            }
            '"' | '\'' if quote.is_none() => {
                quote = Some(c);
                result.push_str("\x1b[33m");
                result.push(c);
            }
            c if Some(c) == quote => {
                result.push(c);
                result.push_str("\x1b[0m");
                quote = None;
            }
            c if quote.is_none() && at_word_start && (c.is_ascii_digit() || c == '-') => {
                let mut word = String::from(c);
                while let Some(&next) = chars.peek() {
                    if next.is_whitespace() {
                        break;
                    }
                    word.push(next);
                    chars.next();
                }
                if word.parse::<i64>().is_ok() {
                    result.push_str("\x1b[35m");
                    result.push_str(&word);
                    result.push_str("\x1b[0m");
                } else {
                    result.push_str(&word);
                }
            }
            c => result.push(c),
        }
        at_word_start = c.is_whitespace();
    }

    if quote.is_some() {
        result.push_str("\x1b[0m");
    }
}

impl Default for OrderHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
