use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::state::{default_categories_path, ensure_sotay_home};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub categories: CategoriesSection,
    pub chat: ChatSection,
    pub log: LogSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CategoriesSection {
    /// Categories JSON (default: ~/.sotay/categories.json)
    pub file: Option<PathBuf>,
    /// Reorder into listing order (specific first, then by name) before matching
    pub sort: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatSection {
    /// Append each accepted draft to ~/.sotay/journal/YYYY-MM-DD.jsonl
    pub journal: bool,
}

impl Default for ChatSection {
    fn default() -> Self {
        Self { journal: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// tracing filter used when RUST_LOG is unset
    pub filter: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn categories_path(&self) -> Result<PathBuf> {
        match &self.categories.file {
            Some(p) => Ok(p.clone()),
            None => default_categories_path(),
        }
    }

    /// Config stored at `path`; every section keeps its defaults when the
    /// file, or a key in it, is absent
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(s) => toml::from_str(&s).with_context(|| format!("parse {}", path.display())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err).with_context(|| format!("read {}", path.display())),
        }
    }

    /// Write a default config to `path` unless one is already there.
    /// Returns whether a file was created.
    pub fn create_default(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        let s = toml::to_string_pretty(&Self::default()).context("serialize config")?;
        fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
        Ok(true)
    }
}

/// ~/.sotay/config.toml
pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_sotay_home()?.join("config.toml"))
}
