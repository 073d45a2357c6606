// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/operations/mod.rs
//
// Operations on a captured frame: region detection and crop.

pub mod crop;
pub mod detect;

pub use crop::{CropRegion, crop_pixels, crop_rect};
pub use detect::{Proposal, default_region, detect_bright_region, propose_region};
