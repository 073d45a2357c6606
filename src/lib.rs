// SPDX-License-Identifier: GPL-3.0-or-later
// src/lib.rs
//
// Receipt capture crop selector: proposes a crop over a captured frame,
// lets the user move and resize it, and exports the result.

pub mod app;
pub mod config;
pub mod constant;
pub mod domain;
