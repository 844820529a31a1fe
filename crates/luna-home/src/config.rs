//! Palette overrides loaded from JSON.
//!
//! ```json
//! { "dark": { "primary": "#000000", "highlight": "#F472B6" } }
//! ```
//!
//! Omitted schemes and fields keep the built-in palette.

use std::path::{Path, PathBuf};

use luna_core::{Color, Palette, Theme, UiError};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed palette config: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Color(#[from] UiError),
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteOverride {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub text: Option<String>,
    pub subtext: Option<String>,
    pub highlight: Option<String>,
}

impl PaletteOverride {
    pub fn apply(&self, base: Palette) -> Result<Palette, ConfigError> {
        let pick = |value: &Option<String>, fallback: Color| -> Result<Color, ConfigError> {
            match value {
                Some(hex) => Ok(Color::try_from_hex(hex)?),
                None => Ok(fallback),
            }
        };
        Ok(Palette {
            primary: pick(&self.primary, base.primary)?,
            secondary: pick(&self.secondary, base.secondary)?,
            text: pick(&self.text, base.text)?,
            subtext: pick(&self.subtext, base.subtext)?,
            highlight: pick(&self.highlight, base.highlight)?,
        })
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub light: PaletteOverride,
    pub dark: PaletteOverride,
}

impl ThemeConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded palette config from {}", path.display());
        Self::from_json_str(&raw)
    }

    /// Theme for the given scheme with overrides applied.
    pub fn theme(&self, is_dark: bool) -> Result<Theme, ConfigError> {
        let base = if is_dark { Theme::dark() } else { Theme::light() };
        let over = if is_dark { &self.dark } else { &self.light };
        Ok(Theme {
            is_dark,
            palette: over.apply(base.palette)?,
        })
    }
}
