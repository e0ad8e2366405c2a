//! Error types for template compilation and rendering.
//!
//! Failures fall into three distinguishable groups:
//!
//! - **Parse errors**: the template itself is malformed. Reported by
//!   [`crate::compile`]; a malformed template never yields a usable
//!   [`crate::Template`].
//! - **Spec errors**: a field's format specification is malformed, or is
//!   illegal for the type of the argument it was applied to. These surface
//!   while rendering, not while compiling, because the same spec text can be
//!   legal for one argument type and illegal for another when a template is
//!   reused.
//! - **Reference errors**: a field names a positional index or argument name
//!   that was never bound.
//!
//! ## Examples
//!
//! ```rust
//! use textfmt::{args, format, Error};
//!
//! // Sign flags are meaningless for strings, so this fails at render time.
//! let result = format("{:+}", args!["x"]);
//! assert!(matches!(result, Err(Error::Spec { .. })));
//! ```

use thiserror::Error;

use crate::template::ArgRef;

/// Represents all possible errors that can occur while compiling a template
/// or rendering it against bound arguments.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The template text violates the field grammar.
    #[error("parse error at byte {pos}: {msg}")]
    Parse { pos: usize, msg: String },

    /// A format specification is malformed or illegal for the argument's type.
    #[error("bad format spec: {msg}")]
    Spec { msg: String },

    /// A field referenced an argument that was never bound.
    #[error("missing argument: {0}")]
    Reference(ArgRef),

    /// Failure in the writer bridge ([`crate::Bound::to_writer`]).
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates a parse error at a byte offset into the template.
    pub fn parse(pos: usize, msg: impl Into<String>) -> Self {
        Error::Parse {
            pos,
            msg: msg.into(),
        }
    }

    /// Creates a format specification error.
    pub fn spec(msg: impl Into<String>) -> Self {
        Error::Spec { msg: msg.into() }
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` if this is a template grammar error.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }

    /// Returns `true` if this is a format specification error.
    #[must_use]
    pub fn is_spec(&self) -> bool {
        matches!(self, Error::Spec { .. })
    }

    /// Returns `true` if this is a missing-argument error.
    #[must_use]
    pub fn is_reference(&self) -> bool {
        matches!(self, Error::Reference(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
