//! Integer geometry of the track and the thumb.

/// Axis-aligned integer rectangle in track coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl IntRect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Integer vertical center, rounded towards negative infinity.
    pub fn center_y(&self) -> i32 {
        ((self.top as i64 + self.bottom as i64) >> 1) as i32
    }

    /// Strict interior test: points on the border are outside.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x > self.left as f32 && x < self.right as f32 && y > self.top as f32 && y < self.bottom as f32
    }
}

/// Sizes of the track (from the host measure pass) and of the thumb.
///
/// `thumb_width`/`thumb_height` are the configured outer sizes; the padding
/// is removed on both sides to obtain the effective thumb. All derived
/// values saturate instead of overflowing, whatever the setters were given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Geometry {
    pub track_width: i32,
    pub track_height: i32,
    pub thumb_width: i32,
    pub thumb_height: i32,
    pub thumb_padding: i32,
}

impl Geometry {
    /// Effective thumb width (configured width minus padding on both sides).
    pub fn thumb_w(&self) -> i32 {
        self.thumb_width
            .saturating_sub(self.thumb_padding.saturating_mul(2))
            .max(0)
    }

    /// Effective thumb height.
    pub fn thumb_h(&self) -> i32 {
        self.thumb_height
            .saturating_sub(self.thumb_padding.saturating_mul(2))
            .max(0)
    }

    /// Largest reachable drag offset, never negative.
    pub fn max_drag(&self) -> i32 {
        self.track_width
            .saturating_sub(self.thumb_w())
            .saturating_sub(self.thumb_padding)
            .max(0)
    }

    /// A zero-width track or thumb disables interaction.
    pub fn is_degenerate(&self) -> bool {
        self.track_width <= 0 || self.thumb_w() <= 0
    }

    /// Thumb rectangle for the given drag offset, vertically centered.
    pub fn thumb_rect(&self, drag_x: i32) -> IntRect {
        let left = drag_x.saturating_add(self.thumb_padding);
        let top = self.track_height.saturating_sub(self.thumb_h()) / 2;
        IntRect::new(
            left,
            top,
            left.saturating_add(self.thumb_w()),
            top.saturating_add(self.thumb_h()),
        )
    }

    /// Full track bounds, where the background is painted.
    pub fn track_rect(&self) -> IntRect {
        IntRect::from_size(self.track_width, self.track_height)
    }
}
