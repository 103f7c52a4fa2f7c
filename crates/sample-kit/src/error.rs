//! Error types for the sample-kit crate.
//!
//! This module defines semantic error enums for arithmetic helpers and user
//! record processing, following the project's error handling conventions
//! with `thiserror`.

use thiserror::Error;

/// Errors raised by the arithmetic helpers.
///
/// These cover the division guard and the Fibonacci index checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// The divisor was exactly zero.
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// A negative index was requested from the Fibonacci sequence.
    #[error("n must be non-negative, got {n}")]
    InvalidArgument {
        /// The rejected index.
        n: i64,
    },

    /// The requested Fibonacci term does not fit in a `u64`.
    #[error("fibonacci({n}) overflows a 64-bit unsigned integer")]
    Overflow {
        /// The index whose term overflowed.
        n: i64,
    },

    /// A calculator operation produced a value outside its operand type.
    #[error("{expression} overflows the operand type")]
    CalculationOverflow {
        /// The operation as it would appear in the history, without result.
        expression: String,
    },
}

/// Errors raised while validating and formatting a user record.
///
/// Required fields are checked in the canonical order `name`, `email`,
/// `age`; only the first missing field is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserDataError {
    /// The record was not a JSON object.
    #[error("user data must be a mapping, found {found}")]
    TypeMismatch {
        /// JSON type name of the rejected input.
        found: &'static str,
    },

    /// A required key was absent from the record.
    #[error("Missing required field: {field}")]
    MissingField {
        /// Name of the first missing key.
        field: &'static str,
    },

    /// A required key held a value of the wrong JSON type.
    #[error("field '{field}' must be {expected}")]
    InvalidFieldType {
        /// Name of the offending key.
        field: &'static str,
        /// Human-readable description of the accepted type.
        expected: &'static str,
    },

    /// The email address has no `@`, so no domain can be extracted.
    #[error("email '{email}' has no domain part")]
    MissingEmailDomain {
        /// The email address as supplied.
        email: String,
    },
}
