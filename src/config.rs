//! Client configuration.
//!
//! Values come from a lookup function (process environment on native
//! targets, `option_env!` in the browser build) and fall back to the
//! defaults below.

use tracing::{debug, info};

// =========================================================
// 动态运行时配置 (Runtime Configuration)
// =========================================================

pub const DEFAULT_API_URL: &str = "http://localhost:3001/api";
pub const DEFAULT_TOKEN_KEY: &str = "proyectalia_token";
pub const DEFAULT_USER_KEY: &str = "proyectalia_user";

pub const ENV_API_URL: &str = "PROYECTALIA_API_URL";
pub const ENV_TOKEN_KEY: &str = "PROYECTALIA_TOKEN_KEY";
pub const ENV_USER_KEY: &str = "PROYECTALIA_USER_KEY";

/// Local-storage keys holding the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    /// Bearer token, stored as a plain string.
    pub token: String,
    /// User record, stored as JSON.
    pub user: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            token: DEFAULT_TOKEN_KEY.to_string(),
            user: DEFAULT_USER_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, without trailing slash.
    pub base_url: String,
    pub storage_keys: StorageKeys,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Self {
            base_url,
            storage_keys: StorageKeys::default(),
        }
    }

    /// Reads every setting through `lookup`, using the default for anything
    /// missing or blank.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| -> String {
            match lookup(key).filter(|v| !v.trim().is_empty()) {
                Some(value) => {
                    debug!("{key} = {value}");
                    value
                }
                None => {
                    info!("{key} not set, using default: {default}");
                    default.to_string()
                }
            }
        };

        let mut config = Self::new(var(ENV_API_URL, DEFAULT_API_URL));
        config.storage_keys = StorageKeys {
            token: var(ENV_TOKEN_KEY, DEFAULT_TOKEN_KEY),
            user: var(ENV_USER_KEY, DEFAULT_USER_KEY),
        };
        config
    }

    /// Process environment; only meaningful off the browser.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_match_the_backend_dev_setup() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:3001/api");
        assert_eq!(config.storage_keys.token, "proyectalia_token");
        assert_eq!(config.storage_keys.user, "proyectalia_user");
    }

    #[test]
    fn lookup_overrides_and_trims_trailing_slash() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_API_URL, "https://api.proyectalia.dev/api/"),
            (ENV_USER_KEY, "   "),
        ]);
        let config = ClientConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.base_url, "https://api.proyectalia.dev/api");
        assert_eq!(config.storage_keys.user, DEFAULT_USER_KEY);
        assert_eq!(config.storage_keys.token, DEFAULT_TOKEN_KEY);
    }
}
