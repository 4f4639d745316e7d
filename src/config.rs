use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;

/// Configuration document, loaded from `~/.ioutil/config.toml` by default.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    /// Filter used when neither `RUST_LOG` nor `-v` is given.
    pub log_level: Option<String>,
    /// Paths `ioutil delete` refuses to touch, along with all of their ancestors.
    #[serde(default)]
    pub protected: Vec<Utf8PathBuf>,
}

impl IoConfig {
    /// Whether deleting `path` would remove a protected entry, either because
    /// it is one or because one lives below it.
    pub fn is_protected(&self, path: &Path) -> bool {
        let path = absolute(path);
        self.protected
            .iter()
            .any(|p| absolute(p.as_std_path()).starts_with(&path))
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_owned())
}

/// Load a configuration file from disk and deserialize it.
pub fn load_from_path(path: &Utf8Path) -> Result<IoConfig> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading config {}", path))?;
    parse(&raw).with_context(|| format!("parsing config {}", path))
}

fn parse(raw: &str) -> Result<IoConfig> {
    Ok(toml::from_str(raw)?)
}

pub fn format_summary(config: &IoConfig) -> String {
    let mut out = String::new();
    let log_level = config.log_level.as_deref().unwrap_or("<default>");

    let _ = writeln!(out, "Log level: {}", log_level);
    if config.protected.is_empty() {
        let _ = writeln!(out, "Protected paths: none");
    } else {
        let _ = writeln!(out, "Protected paths:");
        for path in &config.protected {
            let _ = writeln!(out, "  - {}", path);
        }
    }

    out
}
