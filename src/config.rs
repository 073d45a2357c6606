// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Global configuration loaded from a JSON file with per-field defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constant::{
    BRIGHTNESS_THRESHOLD, CONFIG_DIR, CONFIG_FILE, DEFAULT_CROP_RATIO, DETECTION_MARGIN,
    DETECTION_STRIDE, HANDLE_HIT_SIZE, JPEG_QUALITY, MIN_CROP_SIZE, MIN_DETECTED_EXTENT,
    OUTPUT_FILE_NAME,
};

/// Tuning for the bright-region detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionParams {
    /// Sampling step in pixels.
    pub stride: u32,
    /// Brightness a sample must exceed.
    pub threshold: u8,
    /// Minimum bright box extent on both axes.
    pub min_extent: u32,
    /// Margin added around the bright box.
    pub margin: u32,
}

impl Default for DetectionParams {
    fn default() -> Self {
        Self {
            stride: DETECTION_STRIDE,
            threshold: BRIGHTNESS_THRESHOLD,
            min_extent: MIN_DETECTED_EXTENT,
            margin: DETECTION_MARGIN,
        }
    }
}

/// Global configuration for the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory the CLI writes crops to when no output path is given.
    pub default_output_dir: Option<PathBuf>,
    /// File name of the exported crop.
    pub output_file_name: String,
    /// JPEG quality (0-100).
    pub jpeg_quality: u8,
    /// Hit zone size around each corner handle, in image pixels.
    pub handle_hit_size: f32,
    /// Minimum width/height a resize may produce.
    pub min_crop_size: f32,
    /// Fraction of the image covered by the fallback crop.
    pub default_crop_ratio: f32,
    /// Bright-region detector tuning.
    pub detection: DetectionParams,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_output_dir: dirs::picture_dir().or_else(dirs::home_dir),
            output_file_name: OUTPUT_FILE_NAME.to_string(),
            jpeg_quality: JPEG_QUALITY,
            handle_hit_size: HANDLE_HIT_SIZE,
            min_crop_size: MIN_CROP_SIZE,
            default_crop_ratio: DEFAULT_CROP_RATIO,
            detection: DetectionParams::default(),
        }
    }
}

impl AppConfig {
    /// Platform location of the config file, if the platform has a config dir.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Parse a config from JSON text. Missing fields keep their defaults.
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        Ok(config.sanitized())
    }

    /// Load from `path`, or from the platform location when `path` is `None`.
    ///
    /// A missing file yields the defaults. An unreadable or malformed file is
    /// logged and also yields the defaults.
    #[must_use]
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::default_path) else {
            return Self::default();
        };

        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match fs::read_to_string(&path)
            .map_err(anyhow::Error::from)
            .and_then(|text| Self::from_json(&text))
        {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Failed to load config {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Replace out-of-range values with their defaults.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.jpeg_quality == 0 || self.jpeg_quality > 100 {
            self.jpeg_quality = defaults.jpeg_quality;
        }
        if !(1.0..).contains(&self.min_crop_size) {
            self.min_crop_size = defaults.min_crop_size;
        }
        if self.handle_hit_size.is_nan() || self.handle_hit_size <= 0.0 {
            self.handle_hit_size = defaults.handle_hit_size;
        }
        if self.default_crop_ratio <= 0.0 || !(0.0..=1.0).contains(&self.default_crop_ratio) {
            self.default_crop_ratio = defaults.default_crop_ratio;
        }
        if self.detection.stride == 0 {
            self.detection.stride = defaults.detection.stride;
        }
        self
    }
}
