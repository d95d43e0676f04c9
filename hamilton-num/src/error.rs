// hamilton-num - Error types for numeric operations
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Error types for the numeric tower.

use std::fmt;

/// Result type for numeric operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during a numeric operation.
///
/// Every operation either returns a value or fails synchronously with one
/// of these; there is no partial failure and nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Division (or reciprocal, or a negative power of zero) by an
    /// algebraically zero value
    DivisionByZero,
    /// The operation is undefined at the given value (e.g. the argument
    /// of zero, the logarithm of zero)
    DomainError {
        function: &'static str,
        message: String,
    },
    /// Type error - wrong kind of value for an operation
    TypeError {
        expected: &'static str,
        got: &'static str,
        context: Option<String>,
    },
    /// Element counts of two vectors do not line up
    ShapeMismatch { left: usize, right: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DivisionByZero => {
                write!(f, "Division by zero")
            }
            Error::DomainError { function, message } => {
                write!(f, "{}: {}", function, message)
            }
            Error::TypeError {
                expected,
                got,
                context,
            } => {
                if let Some(ctx) = context {
                    write!(f, "{}: expected {}, got {}", ctx, expected, got)
                } else {
                    write!(f, "Type error: expected {}, got {}", expected, got)
                }
            }
            Error::ShapeMismatch { left, right } => {
                write!(
                    f,
                    "Shape mismatch: {} elements against {}",
                    left, right
                )
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Create a type error.
    pub fn type_error(expected: &'static str, got: &'static str) -> Self {
        Error::TypeError {
            expected,
            got,
            context: None,
        }
    }

    /// Create a type error with context.
    pub fn type_error_in(
        context: impl Into<String>,
        expected: &'static str,
        got: &'static str,
    ) -> Self {
        Error::TypeError {
            expected,
            got,
            context: Some(context.into()),
        }
    }

    /// Create a domain error.
    pub fn domain(function: &'static str, message: impl Into<String>) -> Self {
        Error::DomainError {
            function,
            message: message.into(),
        }
    }
}
