// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

/// Sampling step in pixels for the bright-region scan (both axes).
pub const DETECTION_STRIDE: u32 = 10;

/// Mean RGB value a sample must exceed to count as paper.
pub const BRIGHTNESS_THRESHOLD: u8 = 180;

/// Bright bounding box must be wider and taller than this to be accepted.
pub const MIN_DETECTED_EXTENT: u32 = 100;

/// Margin added around the detected bright box on every side.
pub const DETECTION_MARGIN: u32 = 20;

/// Fraction of each image dimension covered by the fallback crop.
pub const DEFAULT_CROP_RATIO: f32 = 0.8;

/// Smallest width/height a resize may produce, in image pixels.
pub const MIN_CROP_SIZE: f32 = 1.0;

/// Side length of the square hit zone centered on each corner handle.
pub const HANDLE_HIT_SIZE: f32 = 28.0;

/// Side length of the drawn corner handle.
pub const HANDLE_SIZE: f32 = 14.0;

/// JPEG quality for the exported crop (0-100).
pub const JPEG_QUALITY: u8 = 90;

/// File name handed to the upload collaborator.
pub const OUTPUT_FILE_NAME: &str = "captured_receipt.jpg";

/// Config directory name below the platform config dir.
pub const CONFIG_DIR: &str = "receipt-crop";

/// Config file name inside `CONFIG_DIR`.
pub const CONFIG_FILE: &str = "config.json";
