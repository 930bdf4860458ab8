use jsift_types::LookupError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TemplateError>;

/// Compile-time failures. All of them abort the compilation attempt; a
/// non-matching candidate at evaluation time is never an error.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// A required token or delimiter was not found at the expected position.
    #[error("expected {expected} at offset {offset}: {remainder:?}")]
    Syntax {
        expected: String,
        offset: usize,
        remainder: String,
    },

    /// Ran past the end of the template text.
    #[error("unexpected end of template")]
    UnexpectedEof,

    /// A quoted name rule is not a valid regular expression.
    #[error("invalid name pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },

    /// A type named by the template is unknown to the pool.
    #[error(transparent)]
    UnknownType(#[from] LookupError),
}
