//! Rectangle primitives for watermark placement.
//!
//! Two flavors are needed:
//!
//! - [`Rect`] - An unsigned rectangle, always inside an image. Used for
//!   the watermark crop box, which is clamped to image bounds.
//! - [`Box2`] - A signed corner box. Used for the circle bounding box
//!   re-based into crop-local coordinates, which may extend past the crop
//!   edges when the circle hangs off the image.
//!
//! # Coordinate System
//!
//! Origin (0, 0) at the top-left corner, X increasing to the right,
//! Y increasing downward. Right/bottom edges are exclusive.

/// A rectangle defined by origin (x, y) and dimensions (width, height).
///
/// A rectangle with zero width or height is considered empty.
///
/// # Example
///
/// ```rust
/// use stamp_core::Rect;
///
/// let rect = Rect::new(10, 20, 100, 50);
/// assert_eq!(rect.right(), 110);
/// assert_eq!(rect.bottom(), 70);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate of the left edge (inclusive)
    pub x: u32,
    /// Y coordinate of the top edge (inclusive)
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Creates a new rectangle with the given origin and dimensions.
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from origin (0, 0) with given dimensions.
    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Returns the X coordinate of the right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Returns the Y coordinate of the bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Returns the rectangle dimensions as (width, height).
    #[inline]
    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns `true` if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns `true` if the point (px, py) is inside this rectangle.
    ///
    /// Inclusive on the left/top edges, exclusive on the right/bottom.
    #[inline]
    pub const fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rect({}, {}, {}x{})",
            self.x, self.y, self.width, self.height
        )
    }
}

/// A signed box defined by two corners, (x0, y0) top-left and (x1, y1)
/// bottom-right exclusive.
///
/// Unlike [`Rect`], coordinates may be negative and the box may be
/// inverted (x1 < x0). The circle bounding box re-based into crop-local
/// coordinates uses this: a circle clipped at the image's left edge has
/// `x0 < 0` locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Box2 {
    /// Left edge
    pub x0: i64,
    /// Top edge
    pub y0: i64,
    /// Right edge (exclusive)
    pub x1: i64,
    /// Bottom edge (exclusive)
    pub y1: i64,
}

impl Box2 {
    /// Creates a box from two corners.
    #[inline]
    pub const fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Returns the box width (may be negative for an inverted box).
    #[inline]
    pub const fn width(&self) -> i64 {
        self.x1 - self.x0
    }

    /// Returns the box height (may be negative for an inverted box).
    #[inline]
    pub const fn height(&self) -> i64 {
        self.y1 - self.y0
    }

    /// Returns this box with both corners scaled by an integer factor.
    #[inline]
    pub const fn scaled(&self, factor: i64) -> Box2 {
        Box2::new(
            self.x0 * factor,
            self.y0 * factor,
            self.x1 * factor,
            self.y1 * factor,
        )
    }

    /// Returns the box center as floating point coordinates.
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (
            (self.x0 + self.x1) as f64 / 2.0,
            (self.y0 + self.y1) as f64 / 2.0,
        )
    }
}

impl std::fmt::Display for Box2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Box2({}, {})..({}, {})", self.x0, self.y0, self.x1, self.y1)
    }
}
