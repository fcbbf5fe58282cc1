//! Core error types.

use std::fmt;

use thiserror::Error;

/// Response codes reported back to the client of a query.
///
/// The numeric values are part of the wire protocol and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    /// Request processed.
    Ok,
    /// A request header (e.g. a `Filter:` line) could not be parsed.
    InvalidHeader,
    /// The request as a whole is malformed.
    InvalidRequest,
}

impl ResponseCode {
    /// Numeric code as sent on the wire.
    pub fn as_u16(self) -> u16 {
        match self {
            ResponseCode::Ok => 200,
            ResponseCode::InvalidHeader => 400,
            ResponseCode::InvalidRequest => 451,
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}

/// Errors raised while building a filter from a header line.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// The pattern contains `{` or `}`, which are rejected before compiling.
    #[error("disallowed regular expression '{argument}': must not contain {{ or }}")]
    DisallowedRegex {
        /// The filter argument as supplied by the client.
        argument: String,
    },

    /// The pattern failed to compile.
    #[error("invalid regular expression '{argument}'")]
    InvalidRegex {
        /// The filter argument as supplied by the client.
        argument: String,
        /// Compiler diagnostic.
        reason: String,
    },

    /// Operator token not recognized.
    #[error("invalid operator '{0}'")]
    UnknownOperator(String),
}

impl FilterError {
    /// Response code to report this error with.
    pub fn code(&self) -> ResponseCode {
        match self {
            FilterError::DisallowedRegex { .. }
            | FilterError::InvalidRegex { .. }
            | FilterError::UnknownOperator(_) => ResponseCode::InvalidHeader,
        }
    }
}

/// Core errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Filter construction error.
    #[error("filter error: {0}")]
    Filter(#[from] FilterError),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Response code to report this error with.
    pub fn code(&self) -> ResponseCode {
        match self {
            Error::Filter(e) => e.code(),
            Error::Config(_) => ResponseCode::InvalidRequest,
        }
    }
}
