//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// Populated once at startup and handed to the [`Server`](crate::server::Server);
/// handlers never read the environment themselves.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Deployment environment name reported by `/` (`ENV`).
    #[serde(default = "default_env")]
    pub env: String,

    /// HTTP server port (`PORT`).
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_env() -> String {
    "production".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Load configuration from an explicit set of variables.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        envy::from_iter(vars.into_iter().map(|(k, v)| (k.into(), v.into())))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            env: default_env(),
            port: default_port(),
        }
    }
}
