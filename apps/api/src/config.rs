use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every field has a default, so the service starts with an empty environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// JSON file overriding the built-in skill taxonomy.
    pub skill_taxonomy_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            skill_taxonomy_path: std::env::var("SKILL_TAXONOMY_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            skill_taxonomy_path: None,
        }
    }
}

const DEFAULT_PORT: u16 = 5000;

fn parse_port(raw: Option<&str>) -> Result<u16> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse::<u16>()
            .context("PORT must be a valid port number"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_defaults_to_5000() {
        assert_eq!(parse_port(None).unwrap(), 5000);
    }

    #[test]
    fn test_port_parses_value() {
        assert_eq!(parse_port(Some("8081")).unwrap(), 8081);
        assert_eq!(parse_port(Some(" 9000 ")).unwrap(), 9000);
    }

    #[test]
    fn test_invalid_port_is_error() {
        let err = parse_port(Some("not-a-port")).unwrap_err();
        assert!(err.to_string().contains("PORT"));
        assert!(parse_port(Some("70000")).is_err());
    }

    #[test]
    fn test_default_config_binds_all_interfaces() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert!(config.skill_taxonomy_path.is_none());
    }
}
