//! User record validation and formatting.
//!
//! Records arrive as loosely typed JSON so that "not a mapping" and "missing
//! key" are both representable failures. Required keys are checked in the
//! canonical order given by [`REQUIRED_FIELDS`].

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::UserDataError;

/// Required keys, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 3] = ["name", "email", "age"];

/// Minimum age classed as [`AgeGroup::Adult`].
pub const ADULT_AGE: f64 = 18.0;

/// Coarse age classification of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    /// Aged 18 or over.
    Adult,
    /// Younger than 18.
    Minor,
}

impl AgeGroup {
    /// Classifies an age.
    #[must_use]
    pub fn from_age(age: f64) -> Self {
        if age >= ADULT_AGE {
            Self::Adult
        } else {
            Self::Minor
        }
    }

    /// Returns the lowercase label used in serialised output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adult => "adult",
            Self::Minor => "minor",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation-ready view of a validated user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedUser {
    /// The name in title case.
    pub formatted_name: String,
    /// Everything after the first `@` of the email address.
    pub email_domain: String,
    /// Whether the user is an adult or a minor.
    pub age_group: AgeGroup,
}

/// Validates a user record and derives its formatted view.
///
/// # Errors
///
/// - [`UserDataError::TypeMismatch`] when `user_data` is not a JSON object.
/// - [`UserDataError::MissingField`] naming the first absent key of
///   [`REQUIRED_FIELDS`].
/// - [`UserDataError::InvalidFieldType`] when `name` or `email` is not a
///   string, or `age` is not a number.
/// - [`UserDataError::MissingEmailDomain`] when `email` contains no `@`.
///
/// # Examples
///
/// ```
/// use sample_kit::{AgeGroup, process_user_data};
/// use serde_json::json;
///
/// let user = process_user_data(&json!({
///     "name": "john doe",
///     "email": "john.doe@example.com",
///     "age": 25
/// }))
/// .expect("valid record");
///
/// assert_eq!(user.formatted_name, "John Doe");
/// assert_eq!(user.email_domain, "example.com");
/// assert_eq!(user.age_group, AgeGroup::Adult);
/// ```
pub fn process_user_data(user_data: &Value) -> Result<FormattedUser, UserDataError> {
    let record = user_data
        .as_object()
        .ok_or_else(|| UserDataError::TypeMismatch {
            found: json_type_name(user_data),
        })?;

    if let Some(field) = first_missing_field(record) {
        return Err(UserDataError::MissingField { field });
    }

    let name = string_field(record, "name")?;
    let email = string_field(record, "email")?;
    let age = record
        .get("age")
        .and_then(Value::as_f64)
        .ok_or(UserDataError::InvalidFieldType {
            field: "age",
            expected: "a number",
        })?;

    let (_, domain) = email
        .split_once('@')
        .ok_or_else(|| UserDataError::MissingEmailDomain {
            email: email.to_owned(),
        })?;

    Ok(FormattedUser {
        formatted_name: title_case(name),
        email_domain: domain.to_owned(),
        age_group: AgeGroup::from_age(age),
    })
}

/// Capitalises the first letter of each whitespace-separated word and
/// lowercases the rest. Whitespace runs are preserved as-is.
///
/// # Examples
///
/// ```
/// use sample_kit::title_case;
///
/// assert_eq!(title_case("jOHN doe"), "John Doe");
/// ```
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            output.push(c);
            at_word_start = true;
        } else if at_word_start {
            output.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            output.extend(c.to_lowercase());
        }
    }
    output
}

fn first_missing_field(record: &Map<String, Value>) -> Option<&'static str> {
    REQUIRED_FIELDS
        .into_iter()
        .find(|field| !record.contains_key(*field))
}

fn string_field<'a>(
    record: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, UserDataError> {
    record
        .get(field)
        .and_then(Value::as_str)
        .ok_or(UserDataError::InvalidFieldType {
            field,
            expected: "a string",
        })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
