//! Configuration for timescope endpoints.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (TIMESCOPE_ALMANAC_URL, TIMESCOPE_SUMMARY_URL,
//!    TIMESCOPE_RELAY_URL, TIMESCOPE_USER_AGENT, TIMESCOPE_TIMEOUT_SECS)
//! 2. Config file (.timescope/config.yaml)
//! 3. Built-in defaults
//!
//! Config file discovery:
//! - Searches current directory and parents for .timescope/config.yaml
//! - Falls back to ~/.timescope/config.yaml

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

pub const DEFAULT_ALMANAC_URL: &str =
    "https://api.wikimedia.org/feed/v1/wikipedia/en/onthisday/all";
pub const DEFAULT_SUMMARY_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/summary";
pub const DEFAULT_RELAY_URL: &str = "https://api.allorigins.win/get";
pub const DEFAULT_USER_AGENT: &str =
    "TimeScope/1.0 (https://timescope.app) Educational Purpose";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub endpoints: EndpointsConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EndpointsConfig {
    /// Day-indexed almanac feed base URL
    pub almanac: Option<String>,
    /// Encyclopedia summary base URL
    pub summary: Option<String>,
    /// CORS relay URL the summary lookups go through
    pub relay: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpConfig {
    pub user_agent: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Resolved configuration with every setting filled in
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub almanac_url: String,
    pub summary_url: String,
    pub relay_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

/// Find config file by searching current directory and parents, then the
/// home directory.
fn find_config_file() -> Option<PathBuf> {
    if let Ok(mut current) = std::env::current_dir() {
        loop {
            let config_path = current.join(".timescope").join("config.yaml");
            if config_path.exists() {
                return Some(config_path);
            }

            if !current.pop() {
                break;
            }
        }
    }

    let home_config = dirs::home_dir()?.join(".timescope").join("config.yaml");
    if home_config.exists() {
        Some(home_config)
    } else {
        None
    }
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

fn env_or(var: &str, file_value: Option<String>, default: &str) -> String {
    std::env::var(var)
        .ok()
        .or(file_value)
        .unwrap_or_else(|| default.to_string())
}

/// Resolve settings from a parsed file (or nothing) plus the environment.
fn resolve(config_file: Option<PathBuf>, file: Option<ConfigFile>) -> Result<ResolvedConfig> {
    let endpoints = file
        .as_ref()
        .map(|f| f.endpoints.clone())
        .unwrap_or_default();
    let http = file.as_ref().map(|f| f.http.clone()).unwrap_or_default();

    let timeout_secs = match std::env::var("TIMESCOPE_TIMEOUT_SECS") {
        Ok(value) => value
            .parse()
            .context("TIMESCOPE_TIMEOUT_SECS must be an integer")?,
        Err(_) => http.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
    };

    Ok(ResolvedConfig {
        almanac_url: env_or("TIMESCOPE_ALMANAC_URL", endpoints.almanac, DEFAULT_ALMANAC_URL),
        summary_url: env_or("TIMESCOPE_SUMMARY_URL", endpoints.summary, DEFAULT_SUMMARY_URL),
        relay_url: env_or("TIMESCOPE_RELAY_URL", endpoints.relay, DEFAULT_RELAY_URL),
        user_agent: env_or("TIMESCOPE_USER_AGENT", http.user_agent, DEFAULT_USER_AGENT),
        timeout_secs,
        config_file,
    })
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let config_file = find_config_file();

    let file = match &config_file {
        Some(path) => Some(load_config_file(path)?),
        None => None,
    };

    resolve(config_file, file)
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let config = resolve(None, None).unwrap();

        assert_eq!(config.almanac_url, DEFAULT_ALMANAC_URL);
        assert_eq!(config.summary_url, DEFAULT_SUMMARY_URL);
        assert_eq!(config.relay_url, DEFAULT_RELAY_URL);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.config_file.is_none());
    }

    #[test]
    fn test_config_file_parsing() {
        let temp = TempDir::new().unwrap();
        let timescope_dir = temp.path().join(".timescope");
        std::fs::create_dir_all(&timescope_dir).unwrap();

        let config_path = timescope_dir.join("config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(
            file,
            r#"
version: "1.0"
endpoints:
  almanac: https://almanac.test/onthisday
  relay: https://relay.test/get
http:
  timeout_secs: 3
"#
        )
        .unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(
            config.endpoints.almanac.as_deref(),
            Some("https://almanac.test/onthisday")
        );
        assert!(config.endpoints.summary.is_none());
        assert_eq!(config.http.timeout_secs, Some(3));
    }

    #[test]
    fn test_file_values_override_defaults() {
        let file = ConfigFile {
            version: "1.0".to_string(),
            endpoints: EndpointsConfig {
                almanac: Some("https://almanac.test/onthisday".to_string()),
                summary: None,
                relay: None,
            },
            http: HttpConfig {
                user_agent: Some("test-agent/0.1".to_string()),
                timeout_secs: Some(3),
            },
        };

        let config = resolve(None, Some(file)).unwrap();
        assert_eq!(config.almanac_url, "https://almanac.test/onthisday");
        assert_eq!(config.summary_url, DEFAULT_SUMMARY_URL);
        assert_eq!(config.user_agent, "test-agent/0.1");
        assert_eq!(config.timeout_secs, 3);
    }
}
