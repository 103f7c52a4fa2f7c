//! Small validation helpers and a history-tracking calculator.
//!
//! # Overview
//!
//! The crate provides:
//!
//! - Arithmetic helpers: [`add`], guarded [`divide`], and [`fibonacci`]
//! - Greeting and user-list URL formatting
//! - [`process_user_data`], which validates a JSON user record and derives a
//!   [`FormattedUser`]
//! - [`validate_email`], an anchored syntactic email check
//! - [`Calculator`], which records every operation it performs
//!
//! A thin command-line front end lives in [`cli`].
//!
//! # Example
//!
//! ```
//! use sample_kit::{Calculator, divide, validate_email};
//!
//! let mut calculator = Calculator::new();
//! assert_eq!(calculator.add(3, 4), Ok(7));
//! assert_eq!(calculator.history(), ["3 + 4 = 7"]);
//!
//! assert!(divide(1.0, 0.0).is_err());
//! assert!(validate_email("test@example.com"));
//! ```

mod arithmetic;
mod calculator;
pub mod cli;
mod error;
mod greeting;
mod settings;
mod user_data;
mod validation;

pub use arithmetic::{FIBONACCI_MAX_INDEX, add, divide, fibonacci};
pub use calculator::{Calculator, Operand, Operator};
pub use error::{ArithmeticError, UserDataError};
pub use greeting::{
    DEFAULT_API_BASE_URL, DEFAULT_PAGE, DEFAULT_PER_PAGE, build_user_list_url, default_greeting,
    format_greeting, user_list_url,
};
pub use settings::UserApiSettings;
pub use user_data::{
    ADULT_AGE, AgeGroup, FormattedUser, REQUIRED_FIELDS, process_user_data, title_case,
};
pub use validation::validate_email;
