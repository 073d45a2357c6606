// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/document/mod.rs
//
// Document module root: loading captured frames and exporting crops.

pub mod orientation;
pub mod raster;

pub use orientation::Orientation;
pub use raster::{RasterDocument, encode_jpeg, write_file};
