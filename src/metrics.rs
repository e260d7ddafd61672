//! Connector sizing.
//!
//! [`ConnectorMetrics::DEFAULT`] carries the sizes from [`crate::constants`].
//! Custom metrics are validated once at construction so the drawing
//! operations themselves stay total.

use crate::constants::{OFFSET_FROM_CORNER, SIZE_PARALLEL, SIZE_PERPENDICULAR};
use crate::errors::MetricsError;
use crate::types::Dip;

/// The three base sizes every connector shape is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectorMetrics {
    offset_from_corner: Dip,
    size_perpendicular: Dip,
    size_parallel: Dip,
}

impl ConnectorMetrics {
    pub const DEFAULT: ConnectorMetrics = ConnectorMetrics {
        offset_from_corner: OFFSET_FROM_CORNER,
        size_perpendicular: SIZE_PERPENDICULAR,
        size_parallel: SIZE_PARALLEL,
    };

    /// Create metrics with validation (every size must be at least 1 dip).
    pub fn new(
        offset_from_corner: Dip,
        size_perpendicular: Dip,
        size_parallel: Dip,
    ) -> Result<Self, MetricsError> {
        Ok(Self {
            offset_from_corner: positive("offset_from_corner", offset_from_corner)?,
            size_perpendicular: positive("size_perpendicular", size_perpendicular)?,
            size_parallel: positive("size_parallel", size_parallel)?,
        })
    }

    /// Distance between a connector and the closest block corner.
    #[inline]
    pub fn offset_from_corner(self) -> Dip {
        self.offset_from_corner
    }

    /// Depth of a connector, measured perpendicular to the block edge.
    #[inline]
    pub fn size_perpendicular(self) -> Dip {
        self.size_perpendicular
    }

    /// Extent of a connector, measured along the block edge.
    #[inline]
    pub fn size_parallel(self) -> Dip {
        self.size_parallel
    }

    /// Minimum width of a statement input to the right of its fields.
    pub fn statement_input_indent_width(self) -> Dip {
        self.size_parallel.wrapping_mul(4)
    }

    /// Thickness of the bottom arm of a C-shaped statement input.
    pub fn statement_input_bottom_height(self) -> Dip {
        self.size_perpendicular
    }
}

impl Default for ConnectorMetrics {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn positive(field: &'static str, value: Dip) -> Result<Dip, MetricsError> {
    if value > 0 {
        Ok(value)
    } else {
        Err(MetricsError::NonPositive { field, value })
    }
}
