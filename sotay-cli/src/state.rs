use anyhow::{Context, Result};
use sotay_core::{Category, TransactionDraft, default_categories};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn sotay_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".sotay"))
}

pub fn ensure_sotay_home() -> Result<PathBuf> {
    let dir = sotay_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn default_categories_path() -> Result<PathBuf> {
    Ok(ensure_sotay_home()?.join("categories.json"))
}

/// Categories from a JSON file; the built-in seed when the file is missing
pub fn load_categories(path: &Path) -> Result<Vec<Category>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no categories file, using defaults");
        return Ok(default_categories());
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&s).with_context(|| format!("parse {}", path.display()))
}

pub fn write_categories(path: &Path, categories: &[Category]) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let json = serde_json::to_string_pretty(categories)?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Daily journal of saved drafts, one JSON object per line
pub struct Journal {
    path: PathBuf,
}

impl Journal {
    pub fn open_today() -> Result<Self> {
        let dir = ensure_sotay_home()?.join("journal");
        fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        Ok(Self {
            path: dir.join(format!("{today}.jsonl")),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&mut self, draft: &TransactionDraft) -> Result<()> {
        let mut f = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("open {}", self.path.display()))?;
        writeln!(f, "{}", serde_json::to_string(draft)?)?;
        Ok(())
    }
}
