// SPDX-License-Identifier: MPL-2.0
//! This module handles the lightbox configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[gallery]` - Which page elements form the gallery, caption text
//! - `[overlay]` - Class names toggled on the overlay and the page body
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path (the CLI `--config`)
//! 2. Pass a directory to `load_with_override()` (the CLI `--config-dir`)
//! 3. Set `FOLIO_LENS_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use folio_lens::config::{self, CaptionMode};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load_with_override(None);
//!
//! config.gallery.caption_source = Some(CaptionMode::Title);
//! config::save_with_override(&config, None).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::gallery::CaptionSource;
use crate::error::{Error, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums
// =============================================================================

/// Caption text shown under the enlarged image.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CaptionMode {
    #[default]
    Alt,
    Title,
    TitleAndDescription,
}

impl From<CaptionMode> for CaptionSource {
    fn from(mode: CaptionMode) -> Self {
        match mode {
            CaptionMode::Alt => CaptionSource::Alt,
            CaptionMode::Title => CaptionSource::Title,
            CaptionMode::TitleAndDescription => CaptionSource::TitleAndDescription,
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// Gallery collection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// CSS selector for gallery-eligible elements.
    #[serde(default = "default_selector", skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,

    /// Which text becomes the overlay caption.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_source: Option<CaptionMode>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            selector: default_selector(),
            caption_source: Some(CaptionMode::default()),
        }
    }
}

impl GalleryConfig {
    /// Selector to use, falling back to [`DEFAULT_GALLERY_SELECTOR`].
    #[must_use]
    pub fn selector(&self) -> &str {
        self.selector
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_GALLERY_SELECTOR)
    }

    /// Caption source to hand to the navigator.
    #[must_use]
    pub fn caption_source(&self) -> CaptionSource {
        self.caption_source.unwrap_or_default().into()
    }
}

/// Overlay adapter settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverlayConfig {
    /// Class added to the overlay while visible.
    #[serde(
        default = "default_visible_class",
        skip_serializing_if = "Option::is_none"
    )]
    pub visible_class: Option<String>,

    /// Class added to `<body>` while scrolling is locked.
    #[serde(
        default = "default_scroll_lock_class",
        skip_serializing_if = "Option::is_none"
    )]
    pub scroll_lock_class: Option<String>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            visible_class: default_visible_class(),
            scroll_lock_class: default_scroll_lock_class(),
        }
    }
}

impl OverlayConfig {
    #[must_use]
    pub fn visible_class(&self) -> &str {
        self.visible_class
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_VISIBLE_CLASS)
    }

    #[must_use]
    pub fn scroll_lock_class(&self) -> &str {
        self.scroll_lock_class
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_SCROLL_LOCK_CLASS)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Lightbox configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub overlay: OverlayConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_selector() -> Option<String> {
    Some(DEFAULT_GALLERY_SELECTOR.to_string())
}

fn default_visible_class() -> Option<String> {
    Some(DEFAULT_VISIBLE_CLASS.to_string())
}

fn default_scroll_lock_class() -> Option<String> {
    Some(DEFAULT_SCROLL_LOCK_CLASS.to_string())
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from a custom directory, or the default one when
/// `base_dir` is `None`.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!(
                            "could not load {}: {err}; using defaults",
                            path.display()
                        )),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to a custom directory, or the default one when
/// `base_dir` is `None`. Returns the path written.
///
/// # Errors
///
/// Returns an error if no config directory can be determined or the file
/// cannot be written.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<PathBuf> {
    let path = get_config_path_with_override(base_dir)
        .ok_or_else(|| Error::Config("could not determine config directory".to_string()))?;
    save_to_path(config, &path)?;
    Ok(path)
}

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
