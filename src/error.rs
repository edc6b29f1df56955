use std::io;
use std::num::ParseIntError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("missing header line `n m`")]
    MissingHeader,

    #[error("expected {expected} integers, found {found}")]
    TokenCount { expected: usize, found: usize },

    #[error("invalid integer `{token}`: {source}")]
    InvalidInteger {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{what} must not be negative, got {value}")]
    NegativeCount { what: &'static str, value: i64 },

    #[error("{what} {value} is too large")]
    TooLarge { what: &'static str, value: u64 },

    #[error("node {node} is outside of [0, {node_count})")]
    NodeOutOfRange { node: i64, node_count: usize },

    #[error("expected {expected} edge lines, found only {found}")]
    Truncated { expected: usize, found: usize },

    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn at_line(self, line: usize) -> Self {
        Error::AtLine {
            line,
            source: Box::new(self),
        }
    }
}
