use serde::{Deserialize, Serialize};

/// A rectangle in logical window pixels, as sent by hosted content.
///
/// Width and height are signed because they arrive from script; negative
/// sizes are clamped to zero when applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Geometry {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Width clamped to a non-negative value.
    pub fn clamped_width(&self) -> u32 {
        self.width.max(0) as u32
    }

    /// Height clamped to a non-negative value.
    pub fn clamped_height(&self) -> u32 {
        self.height.max(0) as u32
    }
}
