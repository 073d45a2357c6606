// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/geometry.rs
//
// Plain numeric geometry in image-pixel coordinates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A position in image-pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset from `origin` to `self`.
    pub fn delta_from(self, origin: Point) -> (f32, f32) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// Axis-aligned rectangle in image-pixel coordinates.
///
/// Live crop geometry. Position may leave the image while the user drags;
/// only the committed `CropRegion` is guaranteed to be in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.right(), self.y),
            Point::new(self.x, self.bottom()),
            Point::new(self.right(), self.bottom()),
        ]
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Square of side `size` centered on `center`.
    pub fn centered_square(center: Point, size: f32) -> Self {
        let half = size / 2.0;
        Self::new(center.x - half, center.y - half, size, size)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{x: {}, y: {}, width: {}, height: {}}}",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Parses `x,y,width,height`. Width and height must be positive.
impl FromStr for Rect {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split(',')
            .map(|part| part.trim().parse::<f32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| anyhow::anyhow!("Invalid rectangle '{s}': {e}"))?;

        let [x, y, width, height] = parts[..] else {
            anyhow::bail!("Invalid rectangle '{s}': expected x,y,width,height");
        };

        if !(width > 0.0 && height > 0.0) {
            anyhow::bail!("Invalid rectangle '{s}': width and height must be positive");
        }

        Ok(Self::new(x, y, width, height))
    }
}
