//! Error types for edict.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::keyword::Keyword;

/// The main error type for order operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an empty order error.
    #[must_use]
    pub fn empty_order() -> Self {
        Self::new(ErrorKind::EmptyOrder)
    }

    /// Creates an unknown keyword error.
    #[must_use]
    pub fn unknown_keyword(word: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownKeyword(word.into()))
    }

    /// Creates a disabled keyword error.
    #[must_use]
    pub fn disabled_keyword(keyword: Keyword) -> Self {
        Self::new(ErrorKind::DisabledKeyword(keyword))
    }

    /// Creates an inline skill mismatch error.
    #[must_use]
    pub fn inline_skill_mismatch(keyword: Option<Keyword>) -> Self {
        Self::new(ErrorKind::InlineSkillMismatch { keyword })
    }

    /// Creates a usage error for malformed console input.
    #[must_use]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Usage(message.into()))
    }

    /// Creates a stale payload error.
    #[must_use]
    pub fn stale_payload(index: u32, epoch: u32) -> Self {
        Self::new(ErrorKind::StalePayload { index, epoch })
    }

    /// Returns true if this error means the line simply is not an order
    /// (empty, unknown or disabled keyword).
    #[must_use]
    pub fn is_unparseable(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::EmptyOrder | ErrorKind::UnknownKeyword(_) | ErrorKind::DisabledKeyword(_)
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err.to_string()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The line holds no order at all.
    #[error("empty order")]
    EmptyOrder,

    /// The first word is not a keyword in the active locale.
    #[error("unknown keyword: {0}")]
    UnknownKeyword(String),

    /// The keyword is known but switched off.
    #[error("disabled keyword: {0}")]
    DisabledKeyword(Keyword),

    /// An inline skill payload on an order that is not a study order.
    #[error("inline skill payload on {}", .keyword.map_or("free text", Keyword::name))]
    InlineSkillMismatch {
        /// The keyword the payload was attached to.
        keyword: Option<Keyword>,
    },

    /// A payload handle from a store generation that has been torn down.
    #[error("stale payload handle {index} (epoch {epoch})")]
    StalePayload {
        /// Slot index of the handle.
        index: u32,
        /// Store epoch the handle was issued in.
        epoch: u32,
    },

    /// Reading order input failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// Malformed console or command-line input.
    #[error("{0}")]
    Usage(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file or order block name.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
    /// Column number in source.
    pub column: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let (Some(line), Some(col)) = (self.line, self.column) {
                write!(f, ":{line}:{col}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias for order operations.
pub type Result<T> = std::result::Result<T, Error>;
