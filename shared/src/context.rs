//! Read-only application context injected into API clients and stores
//!
//! Replaces ambient lookups of the auth token and theme: everything that needs
//! them receives an `AppContext` at construction time.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::{SharedError, SharedResult};

/// UI theme preference carried alongside the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl std::str::FromStr for Theme {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(SharedError::InvalidConfig {
                field: "theme".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Immutable session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    api_base: Url,
    auth_token: Option<String>,
    theme: Theme,
}

impl AppContext {
    /// Create a context for the given API base URL
    pub fn new(api_base: &str) -> SharedResult<Self> {
        let mut api_base = Url::parse(api_base).map_err(|_| SharedError::InvalidUrl {
            input: api_base.to_string(),
        })?;

        // Directory form; route() pops the empty trailing segment
        if !api_base.path().ends_with('/') {
            let path = format!("{}/", api_base.path());
            api_base.set_path(&path);
        }

        Ok(Self {
            api_base,
            auth_token: None,
            theme: Theme::default(),
        })
    }

    /// Attach a bearer token
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.auth_token = if token.trim().is_empty() { None } else { Some(token) };
        self
    }

    /// Set the theme preference
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Resolve path segments against the base URL, percent-encoding each one
    pub fn route(&self, segments: &[&str]) -> SharedResult<Url> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| SharedError::InvalidUrl {
                input: self.api_base.to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
