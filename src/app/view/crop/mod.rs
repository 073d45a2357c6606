// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/mod.rs
//
// Crop selection module: selection state, overlay geometry and input.

mod input;
mod overlay;
mod selection;

pub use input::{InputEvent, PointerEvent};
pub use overlay::{Viewport, handle_rects, hit_test, shade_rects};
pub use selection::{CropSelection, DragHandle, DragMode, DragSession};
