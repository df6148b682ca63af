//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Path serving queries, mutations and the subscription upgrade.
    pub graphql_path: String,
    /// Serve GraphiQL on plain `GET <graphql_path>`.
    pub graphiql_enabled: bool,
    /// JSON seed file; the built-in seed is used when unset.
    pub seed_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4000,
            graphql_path: "/graphql".to_string(),
            graphiql_enabled: true,
            seed_file: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT").unwrap_or(defaults.port),
            graphql_path: env::var("GRAPHQL_PATH")
                .ok()
                .map(|p| normalize_path(&p))
                .unwrap_or(defaults.graphql_path),
            graphiql_enabled: env::var("GRAPHIQL_ENABLED")
                .ok()
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.graphiql_enabled),
            seed_file: env::var("SEED_FILE")
                .ok()
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
        }
    }

    /// Public URL of the GraphQL endpoint, for the startup banner.
    pub fn graphql_url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.graphql_path)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
