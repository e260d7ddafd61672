//! Outline geometry for the connectors that let visual programming blocks
//! snap together.
//!
//! A block's silhouette is drawn as one closed contour. Wherever another
//! block can attach, the contour takes a small rectangular detour:
//!
//! - a **previous** notch on the top edge and a **next** tab on the bottom
//!   edge link statement blocks into vertical stacks,
//! - a **value input** socket on the right edge accepts a value block,
//! - a C-shaped **statement input** socket wraps a nested stack,
//! - an **output** plug on the left edge lets the block itself fill a value
//!   input.
//!
//! The functions in [`connector`] append one such detour to a caller-owned
//! path, continuing from its current point. Layout, painting and
//! right-to-left mirroring belong to the caller.
//!
//! ```
//! use blocknotch::{Outline, PathSink, add_next_connector, add_previous_connector, pt};
//!
//! let mut outline = Outline::starting_at(pt(0, 0));
//! add_previous_connector(&mut outline, 0, 0);
//! outline.line_to(pt(200, 0));
//! outline.line_to(pt(200, 100));
//! add_next_connector(&mut outline, 0, 100);
//! outline.line_to(pt(0, 100));
//! outline.close();
//!
//! assert_eq!(
//!     outline.to_svg_path_data(),
//!     "M0,0 L20,0 L20,20 L60,20 L60,0 L200,0 L200,100 \
//!      L60,100 L60,120 L20,120 L20,100 L0,100 Z"
//! );
//! ```

pub mod connector;
pub mod constants;
pub mod errors;
pub mod log;
pub mod metrics;
pub mod path;
pub mod types;

pub use connector::{
    Connector, add_next_connector, add_output_connector, add_previous_connector,
    add_statement_input_connector, add_value_input_connector,
};
pub use constants::*;
pub use errors::MetricsError;
pub use metrics::ConnectorMetrics;
pub use path::{Outline, PathCommand, PathSink};
pub use types::{Dip, Point, pt};
