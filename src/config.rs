/// Application settings
///
/// Read once at startup from `settings.json` in the user's config directory:
/// - Linux: ~/.config/image-gallery/settings.json
/// - macOS: ~/Library/Application Support/image-gallery/settings.json
/// - Windows: %APPDATA%\image-gallery\settings.json
///
/// Every field is optional in the file. Gallery contents are never written
/// back; the settings only shape a fresh session.
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::{GalleryError, Result};
use crate::state::data::LayoutMode;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Records per page when the gallery starts
    pub page_size: usize,
    /// Choices offered by the page-size picker
    pub page_size_options: Vec<usize>,
    /// Layout used when the gallery starts
    pub default_layout: LayoutMode,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: 2,
            page_size_options: vec![2, 4, 8, 12],
            default_layout: LayoutMode::Column,
            window_width: 960.0,
            window_height: 720.0,
        }
    }
}

impl Settings {
    /// Where the settings file is expected
    pub fn path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("image-gallery");
        path.push("settings.json");
        Some(path)
    }

    /// Load settings from `path`.
    ///
    /// A missing file yields the defaults. A file that cannot be read or
    /// parsed, or that asks for a zero page size, is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(GalleryError::Settings {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
        };

        let settings: Settings =
            serde_json::from_str(&json).map_err(|e| GalleryError::Settings {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        settings.validated(path)
    }

    /// Load from the default location, falling back to defaults on any error
    pub fn load_or_default() -> Self {
        let Some(path) = Self::path() else {
            warn!("No config directory; using default settings");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(settings) => {
                info!(path = %path.display(), page_size = settings.page_size, "Loaded settings");
                settings
            }
            Err(e) => {
                warn!(error = %e, "Using default settings");
                Self::default()
            }
        }
    }

    fn validated(mut self, path: &Path) -> Result<Self> {
        if self.page_size == 0 {
            return Err(GalleryError::Settings {
                path: path.to_path_buf(),
                message: "page_size must be at least 1".to_string(),
            });
        }

        // The picker must always be able to show the active size
        self.page_size_options.retain(|&size| size > 0);
        self.page_size_options.push(self.page_size);
        self.page_size_options.sort_unstable();
        self.page_size_options.dedup();

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "page_size": 6, "default_layout": "grid" }"#).unwrap();

        let settings = Settings::load_from(&path).unwrap();

        assert_eq!(settings.page_size, 6);
        assert_eq!(settings.default_layout, LayoutMode::Grid);
        assert_eq!(settings.page_size_options, vec![2, 4, 6, 8, 12]);
        assert_eq!(settings.window_width, 960.0);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "page_size": 0 }"#).unwrap();

        let err = Settings::load_from(&path).unwrap_err();
        assert!(matches!(err, GalleryError::Settings { .. }));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ page_size: ").unwrap();

        assert!(Settings::load_from(&path).is_err());
    }

    #[test]
    fn zero_options_are_dropped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "page_size_options": [0, 3, 3] }"#).unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.page_size_options, vec![2, 3]);
    }
}
