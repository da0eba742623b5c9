// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[viewer]` - Zoom factor, auto-hide delays, URL strategy
//! - `[gestures]` - Tap/swipe thresholds and wheel factors
//! - `[device]` - Mobile breakpoint and orientation debounce
//! - `[preload]` - Neighbour preloading
//! - `[gallery]` - Page size, view mode and grid URL strategy
//! - `[source]` - Which listing backend the photo source reads
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `GALLERY_LENS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use gallery_lens::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.preload.depth = 1;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::photo::PhotoRecord;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "GalleryLens";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "GALLERY_LENS_CONFIG_DIR";

// =============================================================================
// Enums (shared between sections)
// =============================================================================

/// Which rendition of a photo a surface displays.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum UrlStrategy {
    /// Full-resolution display URL.
    #[default]
    Full,
    /// Thumbnail URL.
    Thumbnail,
}

impl UrlStrategy {
    /// Picks the URL of `photo` matching this strategy.
    #[must_use]
    pub fn select(self, photo: &PhotoRecord) -> &str {
        match self {
            UrlStrategy::Full => &photo.display_url,
            UrlStrategy::Thumbnail => &photo.thumbnail_url,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Listing backend read by the photo source.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// Object-storage bucket listing.
    #[default]
    ObjectStorage,
    /// File-server resources listing.
    FileServer,
}

// =============================================================================
// Section Structs
// =============================================================================

/// Image viewer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    /// Multiplicative zoom step.
    pub zoom_factor: f32,
    /// Chrome auto-hide delay on pointer devices (ms).
    pub desktop_hide_delay_ms: u64,
    /// Chrome auto-hide delay on touch devices (ms).
    pub touch_hide_delay_ms: u64,
    /// Rendition shown in the viewer.
    pub url_strategy: UrlStrategy,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            desktop_hide_delay_ms: DEFAULT_DESKTOP_HIDE_DELAY_MS,
            touch_hide_delay_ms: DEFAULT_TOUCH_HIDE_DELAY_MS,
            url_strategy: UrlStrategy::Full,
        }
    }
}

/// Gesture recognition settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GestureConfig {
    pub tap_slop_px: f32,
    pub swipe_threshold_px: f32,
    pub wheel_zoom_out: f32,
    pub wheel_zoom_in: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            tap_slop_px: DEFAULT_TAP_SLOP_PX,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
            wheel_zoom_out: DEFAULT_WHEEL_ZOOM_OUT,
            wheel_zoom_in: DEFAULT_WHEEL_ZOOM_IN,
        }
    }
}

/// Device detection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DeviceConfig {
    pub mobile_max_width_px: f32,
    pub orientation_debounce_ms: u64,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            mobile_max_width_px: DEFAULT_MOBILE_MAX_WIDTH_PX,
            orientation_debounce_ms: DEFAULT_ORIENTATION_DEBOUNCE_MS,
        }
    }
}

/// Neighbour preloading settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PreloadSection {
    pub enabled: bool,
    /// Neighbours warmed in each direction.
    pub depth: usize,
    /// Maximum warm URLs remembered before LRU eviction.
    pub capacity: usize,
}

impl Default for PreloadSection {
    fn default() -> Self {
        Self {
            enabled: true,
            depth: DEFAULT_PRELOAD_DEPTH,
            capacity: DEFAULT_PRELOAD_CAPACITY,
        }
    }
}

/// Gallery grid/list settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GalleryConfig {
    pub page_size: usize,
    pub view_mode: ViewMode,
    /// Rendition shown in the grid.
    pub url_strategy: UrlStrategy,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            view_mode: ViewMode::Grid,
            url_strategy: UrlStrategy::Thumbnail,
        }
    }
}

/// Photo source settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct SourceConfig {
    pub kind: SourceKind,
    /// Bucket URL (object storage) or server URL (file server).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Bucket name (object storage only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    /// Public share id (file server only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_id: Option<String>,
    /// Folder listed on startup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
}

// =============================================================================
// Main Config
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub viewer: ViewerConfig,
    pub gestures: GestureConfig,
    pub device: DeviceConfig,
    pub preload: PreloadSection,
    pub gallery: GalleryConfig,
    pub source: SourceConfig,
}

// =============================================================================
// Load / Save
// =============================================================================

/// Returns the config directory, honoring `GALLERY_LENS_CONFIG_DIR`.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|path| path.join(APP_NAME))
}

fn get_default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration from the default location.
///
/// Never fails: a missing file yields defaults, an unreadable or malformed
/// file yields defaults plus a warning message for the caller to surface.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    match get_default_config_path() {
        Some(path) if path.exists() => load_with_warning(&path),
        _ => (Config::default(), None),
    }
}

/// Loads the settings file inside `dir`, like [`load`] does for the
/// default directory.
#[must_use]
pub fn load_from_dir(dir: &Path) -> (Config, Option<String>) {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        load_with_warning(&path)
    } else {
        (Config::default(), None)
    }
}

/// Loads from `path`, falling back to defaults with a warning on error.
#[must_use]
pub fn load_with_warning(path: &Path) -> (Config, Option<String>) {
    match load_from_path(path) {
        Ok(config) => (config, None),
        Err(err) => {
            log::warn!("using default settings: {err}");
            (Config::default(), Some(err.to_string()))
        }
    }
}

/// Saves the configuration to the default location.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads the configuration from an explicit path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| Error::Config(format!("{}: {e}", path.display())))
}

/// Saves the configuration to an explicit path, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(|e| Error::Config(e.to_string()))?;
    fs::write(path, content)?;
    Ok(())
}
