//! Connector sizes, in device-independent pixels (dips).

use crate::types::Dip;

/// Distance between a connector and the closest block corner.
pub const OFFSET_FROM_CORNER: Dip = 20;
/// Size of a connector perpendicular to the block boundary.
pub const SIZE_PERPENDICULAR: Dip = 20;
/// Size of a connector parallel to the block boundary.
pub const SIZE_PARALLEL: Dip = 40;

/// Minimum width of a statement input to the right of its fields.
pub const STATEMENT_INPUT_INDENT_WIDTH: Dip = 4 * SIZE_PARALLEL;
/// Thickness of the bottom arm of a C-shaped statement input.
pub const STATEMENT_INPUT_BOTTOM_HEIGHT: Dip = SIZE_PERPENDICULAR;

// Reserved for open inline value inputs; nothing in this crate draws them.
pub const OPEN_INLINE_CONNECTOR_WIDTH: Dip = 80;
pub const OPEN_INLINE_CONNECTOR_HEIGHT: Dip = 80;
