// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/mod.rs
//
// View state for the capture form.

pub mod crop;
