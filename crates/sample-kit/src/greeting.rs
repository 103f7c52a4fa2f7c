//! Greeting templates and user-list URL construction.
//!
//! Nothing here performs I/O; the URL helpers only build strings for a
//! caller that issues the request itself.

/// Base URL of the public user-listing API.
pub const DEFAULT_API_BASE_URL: &str = "https://reqres.in/api";

/// Page requested when the caller does not choose one.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size requested when the caller does not choose one.
pub const DEFAULT_PER_PAGE: u32 = 6;

/// Returns `"Hello, {name}!"`.
///
/// # Examples
///
/// ```
/// use sample_kit::format_greeting;
///
/// assert_eq!(format_greeting("Alice"), "Hello, Alice!");
/// ```
#[must_use]
pub fn format_greeting(name: &str) -> String {
    format!("Hello, {name}!")
}

/// Returns the greeting addressed to the world.
#[must_use]
pub fn default_greeting() -> String {
    format_greeting("World")
}

/// Builds the user-list URL against [`DEFAULT_API_BASE_URL`].
///
/// Pass [`DEFAULT_PAGE`] and [`DEFAULT_PER_PAGE`] for the defaults.
///
/// # Examples
///
/// ```
/// use sample_kit::{DEFAULT_PAGE, DEFAULT_PER_PAGE, build_user_list_url};
///
/// assert_eq!(
///     build_user_list_url(DEFAULT_PAGE, DEFAULT_PER_PAGE),
///     "https://reqres.in/api/users?page=1&per_page=6"
/// );
/// ```
#[must_use]
pub fn build_user_list_url(page: u32, per_page: u32) -> String {
    user_list_url(DEFAULT_API_BASE_URL, page, per_page)
}

/// Builds the user-list URL against an arbitrary base.
#[must_use]
pub fn user_list_url(base_url: &str, page: u32, per_page: u32) -> String {
    format!("{base_url}/users?page={page}&per_page={per_page}")
}
