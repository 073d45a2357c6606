// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/mod.rs
//
// Document operations on decoded pixel buffers.

pub mod operations;

/// Result type shared by document operations.
pub type DocResult<T> = anyhow::Result<T>;
