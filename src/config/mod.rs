// config/mod.rs — Service configuration.
//
// Loaded from an optional TOML file, then overridden by CLI flags / env
// vars. Every field has a default so `partyd` runs with no config at all.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::treats::Treat;

const DEFAULT_PORT: u16 = 4310;

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_log() -> String {
    "info".to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("could not parse config file '{path}': {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("treat '{name}' has an empty kind — every treat needs a category")]
    EmptyTreatKind { name: String },
}

// ─── PartyDetails ────────────────────────────────────────────────────────────

/// What, when, and where (`[party]` in config.toml). Shown to guests only
/// after an accepted RSVP.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PartyDetails {
    pub title: String,
    pub when: String,
    pub r#where: String,
}

impl Default for PartyDetails {
    fn default() -> Self {
        Self {
            title: "Balloonicorn's Party".to_string(),
            when: "Saturday, 8pm until late".to_string(),
            r#where: "Balloonicorn's Treehouse".to_string(),
        }
    }
}

// ─── PartyConfig ─────────────────────────────────────────────────────────────

/// Top-level configuration for the RSVP service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PartyConfig {
    /// HTTP port (default: 4310).
    #[serde(default = "default_port")]
    pub port: u16,
    /// Bind address (default: 127.0.0.1; use 0.0.0.0 for LAN access).
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Log level filter (trace, debug, info, warn, error).
    #[serde(default = "default_log")]
    pub log: String,
    /// Party details rendered in the confirmation view.
    pub party: PartyDetails,
    /// The treat menu (`[[treats]]` in config.toml).
    pub treats: Vec<Treat>,
}

impl Default for PartyConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_address: default_bind_address(),
            log: default_log(),
            party: PartyDetails::default(),
            treats: default_menu(),
        }
    }
}

/// Menu served when no config file provides one.
fn default_menu() -> Vec<Treat> {
    let items = [
        ("Watermelon gazpacho", "appetizer"),
        ("Melon skewers", "appetizer"),
        ("Cantaloupe agua fresca", "drink"),
        ("Honeydew sorbet", "dessert"),
        ("Melon ball sundae", "dessert"),
    ];
    items
        .iter()
        .map(|&(name, kind)| Treat {
            name: name.to_string(),
            kind: kind.to_string(),
        })
        .collect()
}

impl PartyConfig {
    /// Load from a TOML file, or defaults when `path` is None.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.display().to_string(),
                    source,
                })?;
                toml::from_str(&text).map_err(|source| ConfigError::Parse {
                    path: path.display().to_string(),
                    source,
                })?
            }
            None => PartyConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Apply CLI/env overrides on top of the file values.
    pub fn with_overrides(
        mut self,
        port: Option<u16>,
        bind_address: Option<String>,
        log: Option<String>,
    ) -> Self {
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(bind) = bind_address {
            self.bind_address = bind;
        }
        if let Some(log) = log {
            self.log = log;
        }
        self
    }

    /// Reject menus that would silently skew the frequency tally.
    fn validate(&self) -> Result<(), ConfigError> {
        for treat in &self.treats {
            if treat.kind.trim().is_empty() {
                return Err(ConfigError::EmptyTreatKind {
                    name: treat.name.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_usable() {
        let config = PartyConfig::default();
        assert_eq!(config.port, 4310);
        assert_eq!(config.bind_address, "127.0.0.1");
        assert!(!config.treats.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_without_file_uses_defaults() {
        let config = PartyConfig::load(None).unwrap();
        assert_eq!(config.port, 4310);
    }

    #[test]
    fn overrides_win_over_defaults() {
        let config = PartyConfig::default().with_overrides(
            Some(9999),
            Some("0.0.0.0".to_string()),
            Some("debug".to_string()),
        );
        assert_eq!(config.port, 9999);
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.log, "debug");
    }

    #[test]
    fn parses_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
port = 8080

[party]
title = "Office Party"
when = "Friday 6pm"
where = "Roof"

[[treats]]
name = "Punch"
kind = "drink"
"#
        )
        .unwrap();

        let config = PartyConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.party.title, "Office Party");
        assert_eq!(config.treats.len(), 1);
        assert_eq!(config.treats[0].kind, "drink");
    }

    #[test]
    fn rejects_empty_treat_kind() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[treats]]
name = "Mystery platter"
kind = "  "
"#
        )
        .unwrap();

        let err = PartyConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyTreatKind { .. }));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = PartyConfig::load(Some(Path::new("/nonexistent/party.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
