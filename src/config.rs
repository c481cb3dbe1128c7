use crate::error::{Error, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Everything a host chooses when opening an editing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorOptions {
    /// Initial text. Lines are separated by `\n`.
    pub text: String,
    /// Shown above the text area together with the quick help. Empty for none.
    pub title: String,
    /// Top-left corner of the widget as (row, col).
    pub location: (u16, u16),
    /// Requested text area as (rows, cols); clamped to the screen.
    pub size: (u16, u16),
    /// Draw a border around the widget.
    pub boxed: bool,
    /// Maximum wrapped rows, 0 for unlimited. Raised to fit the initial text.
    pub max_rows: usize,
    /// Never echo the text (passwords).
    pub password: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            text: String::new(),
            title: String::new(),
            location: (0, 0),
            size: (20, 80),
            boxed: true,
            max_rows: 0,
            password: false,
        }
    }
}

impl EditorOptions {
    pub fn validate(&self) -> Result<()> {
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(Error::Config(format!(
                "size must be at least 1x1, got {}x{}",
                self.size.0, self.size.1
            )));
        }
        Ok(())
    }
}

/// User defaults read from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rows: u16,
    pub cols: u16,
    pub boxed: bool,
    pub row: u16,
    pub col: u16,
}

impl Default for Config {
    fn default() -> Self {
        let options = EditorOptions::default();
        Self {
            rows: options.size.0,
            cols: options.size.1,
            boxed: options.boxed,
            row: options.location.0,
            col: options.location.1,
        }
    }
}

impl Config {
    /// `<config dir>/wrapedit/config.toml`, if the platform has a config dir.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wrapedit").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Session options seeded from these defaults.
    #[must_use]
    pub fn editor_options(&self) -> EditorOptions {
        EditorOptions {
            location: (self.row, self.col),
            size: (self.rows, self.cols),
            boxed: self.boxed,
            ..EditorOptions::default()
        }
    }
}
