//! Coordinate primitives.
//!
//! Connector geometry is exact: every coordinate is a whole number of
//! device-independent pixels, so outlines never accumulate rounding error.

use glam::IVec2;

/// Length or coordinate in device-independent pixels.
pub type Dip = i32;

/// A point in outline space. `x` grows rightward, `y` grows downward.
pub type Point = IVec2;

/// Shorthand for building a [`Point`].
#[inline]
pub const fn pt(x: Dip, y: Dip) -> Point {
    IVec2::new(x, y)
}
