// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// Application layer: frame loading, crop selector state and message handling.

pub mod document;
pub mod message;
pub mod model;
pub mod selector;
pub mod update;
pub mod view;

pub use message::AppMessage;
pub use model::{AppModel, CapturedReceipt};
pub use selector::{CropSelector, PointerOutcome, PointerResponse};
pub use update::{UpdateOutcome, update};
