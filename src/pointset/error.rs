use thiserror::Error;

/// Errors raised while loading or validating a point set.
///
/// Any malformed record invalidates the entire input; there is no partial
/// acceptance.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line}: expected {expected} fields, found {found}")]
    ArityMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: cannot parse '{field}' as a number")]
    BadField { line: usize, field: String },

    #[error("Line {line}: non-finite coordinate")]
    NonFinite { line: usize },

    #[error("Input contains no data points")]
    Empty,
}
