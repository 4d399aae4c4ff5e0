//! Client configuration
//!
//! Values come from command line flags first, then from the environment
//! (`.env` is loaded by the binary before this runs).

use std::time::Duration;

use crate::error::{ClientError, ClientResult};
use crate::notification_store::{DEFAULT_DISMISS_DELAY, StoreConfig};
use shared::{AppContext, Theme};

pub const API_URL_ENV: &str = "PITCHBRIDGE_API_URL";
pub const TOKEN_ENV: &str = "PITCHBRIDGE_TOKEN";
pub const THEME_ENV: &str = "PITCHBRIDGE_THEME";
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub token: Option<String>,
    pub theme: Theme,
    pub dismiss_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            theme: Theme::default(),
            dismiss_delay: DEFAULT_DISMISS_DELAY,
        }
    }
}

impl ClientConfig {
    /// Merge explicit values over the environment over the defaults
    pub fn resolve(api_url: Option<String>, token: Option<String>) -> ClientResult<Self> {
        Self::resolve_with(api_url, token, |key| std::env::var(key).ok())
    }

    /// `resolve` with an injectable environment lookup
    pub fn resolve_with<F>(api_url: Option<String>, token: Option<String>, env: F) -> ClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let theme = match env(THEME_ENV) {
            Some(value) => value.parse::<Theme>()?,
            None => defaults.theme,
        };

        let config = Self {
            api_url: api_url.or_else(|| env(API_URL_ENV)).unwrap_or(defaults.api_url),
            token: token.or_else(|| env(TOKEN_ENV)),
            theme,
            dismiss_delay: defaults.dismiss_delay,
        };

        if config.api_url.trim().is_empty() {
            return Err(ClientError::Config {
                message: format!("{API_URL_ENV} is empty"),
            });
        }

        Ok(config)
    }

    /// Read-only context handed to the API clients
    pub fn app_context(&self) -> ClientResult<AppContext> {
        let mut context = AppContext::new(&self.api_url)?.with_theme(self.theme);
        if let Some(token) = &self.token {
            context = context.with_auth_token(token.clone());
        }
        Ok(context)
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            dismiss_delay: self.dismiss_delay,
        }
    }
}
