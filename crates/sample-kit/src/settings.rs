//! User-list API settings loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::greeting::{DEFAULT_API_BASE_URL, DEFAULT_PER_PAGE};

/// Configuration for building user-list URLs.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SAMPLE_KIT")]
pub struct UserApiSettings {
    /// Base URL the user-list path is appended to.
    pub base_url: Option<String>,
    /// Page size used when a request does not name one.
    pub per_page: Option<u32>,
}

impl UserApiSettings {
    /// Return the configured base URL, falling back to the public API.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    /// Return the configured page size, falling back to the default.
    #[must_use]
    pub fn per_page(&self) -> u32 {
        self.per_page.unwrap_or(DEFAULT_PER_PAGE)
    }
}
