// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Pure domain layer: geometry, detection and crop operations. No I/O.

pub mod document;
pub mod geometry;
