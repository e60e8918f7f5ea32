//! Config file loading and flag precedence
//!
//! The config file is a nested YAML mapping keyed by command path:
//!
//! ```yaml
//! access-token: nbp_v1_...
//! output: text
//! servers:
//!   list:
//!     output: json
//! ```
//!
//! Effective values resolve last-write-wins: built-in default < config
//! file < environment variable < command-line flag. The file itself is
//! resolved most-specific-path-first, so `servers.list.output` beats the
//! top-level `output`.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde_yml::Value;

use crate::config::credentials;
use crate::error::{Error, Result};

/// Parsed config file, queried by command path
#[derive(Debug, Clone, Default)]
pub struct Settings {
    root: Option<Value>,
}

impl Settings {
    /// Load from an explicit path, or the default location when `None`.
    ///
    /// A missing file is an empty config; an unreadable or unparseable
    /// file at an explicitly given path is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::default_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if explicit => {
                return Err(Error::Config(format!(
                    "could not read config file {}: {}",
                    path.display(),
                    e
                )))
            }
            Err(_) => {
                debug!("No config file at {}", path.display());
                return Ok(Self::default());
            }
        };

        let root: Value = serde_yml::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "could not parse config file {}: {}",
                path.display(),
                e
            ))
        })?;
        debug!("Loaded config file {}", path.display());
        Ok(Self { root: Some(root) })
    }

    /// Build settings from an already-parsed document
    pub fn from_value(root: Value) -> Self {
        Self { root: Some(root) }
    }

    /// Default config file location (`~/.config/nimbusctl/config.yaml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(credentials::CONFIG_FILE_NAME))
    }

    /// Look up `key` for a command path, most specific mapping first.
    ///
    /// For path `["servers", "list"]` the probe order is
    /// `servers.list.key`, `servers.key`, `key`.
    pub fn get(&self, command_path: &[&str], key: &str) -> Option<String> {
        let root = self.root.as_ref()?;
        for depth in (0..=command_path.len()).rev() {
            let mut node = root;
            let mut valid = true;
            for segment in &command_path[..depth] {
                match node.get(*segment) {
                    Some(child) => node = child,
                    None => {
                        valid = false;
                        break;
                    }
                }
            }
            if !valid {
                continue;
            }
            if let Some(value) = node.get(key).and_then(scalar_to_string) {
                return Some(value);
            }
        }
        None
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Resolve one effective value: flag beats env beats config file beats default
pub fn resolve_value(
    flag: Option<&str>,
    env_var: Option<&str>,
    settings: &Settings,
    command_path: &[&str],
    key: &str,
    default: Option<&str>,
) -> Option<String> {
    if let Some(v) = flag {
        return Some(v.to_string());
    }
    if let Some(var) = env_var {
        if let Ok(v) = std::env::var(var) {
            if !v.is_empty() {
                return Some(v);
            }
        }
    }
    if let Some(v) = settings.get(command_path, key) {
        return Some(v);
    }
    default.map(|v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn settings_from(yaml: &str) -> Settings {
        Settings {
            root: Some(serde_yml::from_str(yaml).unwrap()),
        }
    }

    #[test]
    fn test_top_level_lookup() {
        let settings = settings_from("output: json\naccess-token: tok-1\n");
        assert_eq!(settings.get(&[], "output").as_deref(), Some("json"));
        assert_eq!(settings.get(&[], "access-token").as_deref(), Some("tok-1"));
        assert!(settings.get(&[], "missing").is_none());
    }

    #[test]
    fn test_most_specific_path_wins() {
        let settings = settings_from(
            "output: text\nservers:\n  output: json\n  list:\n    output: text\n",
        );
        assert_eq!(
            settings.get(&["servers", "list"], "output").as_deref(),
            Some("text")
        );
        assert_eq!(settings.get(&["servers"], "output").as_deref(), Some("json"));
        assert_eq!(settings.get(&["domains"], "output").as_deref(), Some("text"));
    }

    #[test]
    fn test_fallback_walks_up_the_path() {
        let settings = settings_from("no-header: true\nservers: {}\n");
        assert_eq!(
            settings.get(&["servers", "list"], "no-header").as_deref(),
            Some("true")
        );
    }

    #[test]
    fn test_numeric_scalar_stringified() {
        let settings = settings_from("per-page: 50\n");
        assert_eq!(settings.get(&[], "per-page").as_deref(), Some("50"));
    }

    #[test]
    fn test_empty_settings() {
        let settings = Settings::default();
        assert!(settings.get(&["servers"], "output").is_none());
    }

    #[test]
    fn test_load_missing_default_is_empty() {
        // Explicit path that does not exist is an error
        let missing = Path::new("/nonexistent/nimbusctl/config.yaml");
        assert!(Settings::load(Some(missing)).is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api-url: https://mock.nimbus.test/v2").unwrap();
        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(
            settings.get(&[], "api-url").as_deref(),
            Some("https://mock.nimbus.test/v2")
        );
    }

    #[test]
    fn test_load_unparseable_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "access-token: [unterminated").unwrap();
        match Settings::load(Some(file.path())) {
            Err(Error::Config(msg)) => assert!(msg.contains("parse")),
            other => panic!("Expected Error::Config, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_resolve_value_precedence() {
        let settings = settings_from("output: json\n");

        // Flag wins over everything
        assert_eq!(
            resolve_value(Some("text"), None, &settings, &[], "output", Some("text")).as_deref(),
            Some("text")
        );
        // Config file wins over default
        assert_eq!(
            resolve_value(None, None, &settings, &[], "output", Some("text")).as_deref(),
            Some("json")
        );
        // Default when nothing else matches
        assert_eq!(
            resolve_value(None, None, &settings, &[], "missing", Some("fallback")).as_deref(),
            Some("fallback")
        );
        assert!(resolve_value(None, None, &settings, &[], "missing", None).is_none());
    }
}
