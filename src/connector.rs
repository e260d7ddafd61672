//! Connector outlines.
//!
//! Each operation appends the silhouette of exactly one connector to a path,
//! continuing from the path's current point. A connector is a rectangular
//! notch (or plug) offset from a block corner and drawn as a short detour:
//! in, across and back out to the edge it started on.
//!
//! Callers invoke the operations in clockwise outline order (top edge left to
//! right, right edge top to bottom, bottom edge right to left, left edge
//! bottom to top) so a whole block becomes one closed contour.
//!
//! # Entry and exit
//!
//! No operation moves the pen. The first appended point is joined to
//! whatever the current point was, and each operation documents where it
//! leaves the current point. The next edge segment drawn by the caller starts
//! from there.
//!
//! All coordinates assume a left-to-right frame. For right-to-left layouts
//! the caller mirrors coordinates before calling.
//!
//! Inputs are not validated. Inconsistent coordinates produce odd geometry,
//! never a panic or an error.

use crate::log::debug;
use crate::metrics::ConnectorMetrics;
use crate::path::PathSink;
use crate::types::{Dip, Point, pt};

/// Add a "previous" notch to the top edge of a block.
///
/// Appends `(l+O, t)`, `(l+O, t+P)`, `(l+O+S, t+P)`, `(l+O+S, t)` where `O`,
/// `P` and `S` are the offset, perpendicular and parallel sizes.
///
/// Exit: `(block_left + OFFSET_FROM_CORNER + SIZE_PARALLEL, block_top)`.
pub fn add_previous_connector<P: PathSink + ?Sized>(path: &mut P, block_left: Dip, block_top: Dip) {
    ConnectorMetrics::DEFAULT.add_previous_connector(path, block_left, block_top);
}

/// Add a "next" tab to the bottom edge of a block, traversed right to left.
///
/// Exit: `(block_left + OFFSET_FROM_CORNER, block_bottom)`.
pub fn add_next_connector<P: PathSink + ?Sized>(path: &mut P, block_left: Dip, block_bottom: Dip) {
    ConnectorMetrics::DEFAULT.add_next_connector(path, block_left, block_bottom);
}

/// Add a value input socket to the right edge of a block, traversed top to
/// bottom.
///
/// Exit: `(block_right, input_top + OFFSET_FROM_CORNER + SIZE_PARALLEL)`.
pub fn add_value_input_connector<P: PathSink + ?Sized>(
    path: &mut P,
    block_right: Dip,
    input_top: Dip,
) {
    ConnectorMetrics::DEFAULT.add_value_input_connector(path, block_right, input_top);
}

/// Add the C-shaped socket that wraps a nested statement stack.
///
/// Exit: `(block_right, input_top + input_height)`.
pub fn add_statement_input_connector<P: PathSink + ?Sized>(
    path: &mut P,
    block_right: Dip,
    input_top: Dip,
    x_offset: Dip,
    input_height: Dip,
) {
    ConnectorMetrics::DEFAULT.add_statement_input_connector(
        path,
        block_right,
        input_top,
        x_offset,
        input_height,
    );
}

/// Add an output plug to the left edge of a block, traversed bottom to top.
///
/// Exit: `(block_left, block_bottom + OFFSET_FROM_CORNER)`.
pub fn add_output_connector<P: PathSink + ?Sized>(
    path: &mut P,
    block_left: Dip,
    block_bottom: Dip,
) {
    ConnectorMetrics::DEFAULT.add_output_connector(path, block_left, block_bottom);
}

impl ConnectorMetrics {
    /// Add a "previous" notch using these metrics.
    ///
    /// The notch starts `offset_from_corner` right of `block_left`, drops
    /// `size_perpendicular` below the top edge, runs `size_parallel` to the
    /// right and climbs back to `block_top`.
    pub fn add_previous_connector<P: PathSink + ?Sized>(
        self,
        path: &mut P,
        block_left: Dip,
        block_top: Dip,
    ) {
        draw(path, "previous", self.previous_points(block_left, block_top));
    }

    /// Add a "next" tab using these metrics.
    ///
    /// Mirror image of the previous notch, hanging `size_perpendicular` below
    /// `block_bottom` and drawn from its right side to its left side.
    pub fn add_next_connector<P: PathSink + ?Sized>(
        self,
        path: &mut P,
        block_left: Dip,
        block_bottom: Dip,
    ) {
        draw(path, "next", self.next_points(block_left, block_bottom));
    }

    /// Add a value input socket using these metrics.
    ///
    /// The socket begins `offset_from_corner` below `input_top` and cuts
    /// `size_perpendicular` into the block, spanning `size_parallel`
    /// vertically.
    pub fn add_value_input_connector<P: PathSink + ?Sized>(
        self,
        path: &mut P,
        block_right: Dip,
        input_top: Dip,
    ) {
        draw(path, "value input", self.value_input_points(block_right, input_top));
    }

    /// Add a statement input socket using these metrics.
    ///
    /// Path: `(block_right, input_top)`, then leftward along the top of the
    /// socket through a notch at `x_offset + offset_from_corner` (where the
    /// nested stack's own previous connector sits), on to
    /// `(x_offset, input_top)`, down the socket wall to
    /// `(x_offset, input_top + input_height)` and right along the bottom to
    /// `(block_right, input_top + input_height)`.
    pub fn add_statement_input_connector<P: PathSink + ?Sized>(
        self,
        path: &mut P,
        block_right: Dip,
        input_top: Dip,
        x_offset: Dip,
        input_height: Dip,
    ) {
        let points = self.statement_input_points(block_right, input_top, x_offset, input_height);
        draw(path, "statement input", points);
    }

    /// Add an output plug using these metrics.
    ///
    /// The plug sticks `size_perpendicular` out to the left of `block_left`
    /// and spans from `block_bottom + offset_from_corner + size_parallel` up
    /// to `block_bottom + offset_from_corner`.
    pub fn add_output_connector<P: PathSink + ?Sized>(
        self,
        path: &mut P,
        block_left: Dip,
        block_bottom: Dip,
    ) {
        draw(path, "output", self.output_points(block_left, block_bottom));
    }

    // Coordinates wrap on i32 overflow, so extreme inputs give odd geometry
    // instead of a panic.

    fn previous_points(self, block_left: Dip, block_top: Dip) -> [Point; 4] {
        let x = block_left.wrapping_add(self.offset_from_corner());
        self.top_notch(x, x.wrapping_add(self.size_parallel()), block_top)
    }

    fn next_points(self, block_left: Dip, block_bottom: Dip) -> [Point; 4] {
        let x = block_left.wrapping_add(self.offset_from_corner());
        self.top_notch(x.wrapping_add(self.size_parallel()), x, block_bottom)
    }

    fn value_input_points(self, block_right: Dip, input_top: Dip) -> [Point; 4] {
        let y = input_top.wrapping_add(self.offset_from_corner());
        let far_y = y.wrapping_add(self.size_parallel());
        let inner = block_right.wrapping_sub(self.size_perpendicular());
        [
            pt(block_right, y),
            pt(inner, y),
            pt(inner, far_y),
            pt(block_right, far_y),
        ]
    }

    fn statement_input_points(
        self,
        block_right: Dip,
        input_top: Dip,
        x_offset: Dip,
        input_height: Dip,
    ) -> [Point; 8] {
        let bottom = input_top.wrapping_add(input_height);
        let x = x_offset.wrapping_add(self.offset_from_corner());
        let [a, b, c, d] = self.top_notch(x.wrapping_add(self.size_parallel()), x, input_top);
        [
            pt(block_right, input_top),
            a,
            b,
            c,
            d,
            pt(x_offset, input_top),
            pt(x_offset, bottom),
            pt(block_right, bottom),
        ]
    }

    fn output_points(self, block_left: Dip, block_bottom: Dip) -> [Point; 4] {
        let y = block_bottom.wrapping_add(self.offset_from_corner());
        let far_y = y.wrapping_add(self.size_parallel());
        let outer = block_left.wrapping_sub(self.size_perpendicular());
        [
            pt(block_left, far_y),
            pt(outer, far_y),
            pt(outer, y),
            pt(block_left, y),
        ]
    }

    /// Horizontal notch hanging below `edge_y`, entered at `from_x` and left
    /// at `to_x`.
    fn top_notch(self, from_x: Dip, to_x: Dip, edge_y: Dip) -> [Point; 4] {
        let depth = edge_y.wrapping_add(self.size_perpendicular());
        [
            pt(from_x, edge_y),
            pt(from_x, depth),
            pt(to_x, depth),
            pt(to_x, edge_y),
        ]
    }
}

/// Append `points` in order and log where the connector left the pen.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn draw<P: PathSink + ?Sized, const N: usize>(
    path: &mut P,
    kind: &'static str,
    points: [Point; N],
) {
    for point in points {
        path.line_to(point);
    }
    if let Some(exit) = points.last() {
        debug!(kind, exit_x = exit.x, exit_y = exit.y, "connector drawn");
    }
}

/// One connector call, captured as a value.
///
/// Useful when a layout pass collects the connectors of a block first and
/// draws them later, or needs to know where a connector will leave the pen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connector {
    Previous {
        block_left: Dip,
        block_top: Dip,
    },
    Next {
        block_left: Dip,
        block_bottom: Dip,
    },
    ValueInput {
        block_right: Dip,
        input_top: Dip,
    },
    StatementInput {
        block_right: Dip,
        input_top: Dip,
        x_offset: Dip,
        input_height: Dip,
    },
    Output {
        block_left: Dip,
        block_bottom: Dip,
    },
}

impl Connector {
    /// Append this connector to `path`.
    pub fn append_to<P: PathSink + ?Sized>(self, metrics: ConnectorMetrics, path: &mut P) {
        match self {
            Connector::Previous {
                block_left,
                block_top,
            } => metrics.add_previous_connector(path, block_left, block_top),
            Connector::Next {
                block_left,
                block_bottom,
            } => metrics.add_next_connector(path, block_left, block_bottom),
            Connector::ValueInput {
                block_right,
                input_top,
            } => metrics.add_value_input_connector(path, block_right, input_top),
            Connector::StatementInput {
                block_right,
                input_top,
                x_offset,
                input_height,
            } => metrics.add_statement_input_connector(
                path,
                block_right,
                input_top,
                x_offset,
                input_height,
            ),
            Connector::Output {
                block_left,
                block_bottom,
            } => metrics.add_output_connector(path, block_left, block_bottom),
        }
    }

    /// Where the path's current point is left after [`Connector::append_to`].
    pub fn exit_point(self, metrics: ConnectorMetrics) -> Point {
        match self {
            Connector::Previous {
                block_left,
                block_top,
            } => {
                let [.., exit] = metrics.previous_points(block_left, block_top);
                exit
            }
            Connector::Next {
                block_left,
                block_bottom,
            } => {
                let [.., exit] = metrics.next_points(block_left, block_bottom);
                exit
            }
            Connector::ValueInput {
                block_right,
                input_top,
            } => {
                let [.., exit] = metrics.value_input_points(block_right, input_top);
                exit
            }
            Connector::StatementInput {
                block_right,
                input_top,
                input_height,
                ..
            } => pt(block_right, input_top.wrapping_add(input_height)),
            Connector::Output {
                block_left,
                block_bottom,
            } => {
                let [.., exit] = metrics.output_points(block_left, block_bottom);
                exit
            }
        }
    }

    /// Short name, the same `kind` the drawing operations log.
    pub fn kind_name(self) -> &'static str {
        match self {
            Connector::Previous { .. } => "previous",
            Connector::Next { .. } => "next",
            Connector::ValueInput { .. } => "value input",
            Connector::StatementInput { .. } => "statement input",
            Connector::Output { .. } => "output",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{OFFSET_FROM_CORNER, SIZE_PARALLEL, SIZE_PERPENDICULAR};
    use crate::path::Outline;

    fn points_of(f: impl FnOnce(&mut Vec<Point>)) -> Vec<Point> {
        let mut points = Vec::new();
        f(&mut points);
        points
    }

    #[test]
    fn test_previous_connector_at_origin() {
        let points = points_of(|p| add_previous_connector(p, 0, 0));
        assert_eq!(points, vec![pt(20, 0), pt(20, 20), pt(60, 20), pt(60, 0)]);
    }

    #[test]
    fn test_previous_connector_returns_to_top_edge() {
        let points = points_of(|p| add_previous_connector(p, 37, -12));
        let entry = points[0];
        let exit = *points.last().unwrap();
        assert_eq!(entry, pt(37 + OFFSET_FROM_CORNER, -12));
        assert_eq!(exit.x - entry.x, SIZE_PARALLEL);
        assert_eq!(exit.y, entry.y);
    }

    #[test]
    fn test_next_connector_mirrors_previous() {
        let prev = points_of(|p| add_previous_connector(p, 10, 50));
        let next = points_of(|p| add_next_connector(p, 10, 50));
        assert_eq!(prev.len(), 4);
        assert_eq!(next.len(), 4);

        let prev_xs: Vec<_> = prev.iter().map(|p| p.x).collect();
        let mut next_xs: Vec<_> = next.iter().map(|p| p.x).collect();
        next_xs.reverse();
        assert_eq!(prev_xs, next_xs);

        assert_eq!(next, vec![pt(70, 50), pt(70, 70), pt(30, 70), pt(30, 50)]);
    }

    #[test]
    fn test_value_input_connector() {
        let points = points_of(|p| add_value_input_connector(p, 200, 40));
        assert_eq!(points, vec![pt(200, 60), pt(180, 60), pt(180, 100), pt(200, 100)]);
    }

    #[test]
    fn test_output_connector() {
        let points = points_of(|p| add_output_connector(p, 100, 50));
        assert_eq!(points, vec![pt(100, 110), pt(80, 110), pt(80, 70), pt(100, 70)]);
    }

    #[test]
    fn test_side_connectors_share_notch_shape() {
        let value = points_of(|p| add_value_input_connector(p, 0, 0));
        let output = points_of(|p| add_output_connector(p, 0, 0));
        for points in [&value, &output] {
            assert_eq!(points.len(), 4);
            let xs: Vec<_> = points.iter().map(|p| p.x).collect();
            let ys: Vec<_> = points.iter().map(|p| p.y).collect();
            let span_x = xs.iter().max().unwrap() - xs.iter().min().unwrap();
            let span_y = ys.iter().max().unwrap() - ys.iter().min().unwrap();
            assert_eq!(span_x, SIZE_PERPENDICULAR);
            assert_eq!(span_y, SIZE_PARALLEL);
        }
    }

    #[test]
    fn test_statement_input_connector() {
        let points = points_of(|p| add_statement_input_connector(p, 200, 40, 40, 80));
        assert_eq!(
            points,
            vec![
                pt(200, 40),
                pt(100, 40),
                pt(100, 60),
                pt(60, 60),
                pt(60, 40),
                pt(40, 40),
                pt(40, 120),
                pt(200, 120),
            ]
        );
    }

    #[test]
    fn test_statement_input_with_zero_height_still_emits_all_points() {
        let points = points_of(|p| add_statement_input_connector(p, 100, 10, 20, 0));
        assert_eq!(points.len(), 8);
        assert_eq!(*points.last().unwrap(), pt(100, 10));
    }

    #[test]
    fn test_operations_are_repeatable() {
        let first = points_of(|p| add_statement_input_connector(p, 180, 30, 24, 64));
        let second = points_of(|p| add_statement_input_connector(p, 180, 30, 24, 64));
        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_inputs_do_not_panic() {
        let points = points_of(|p| add_statement_input_connector(p, -50, 10, 300, -90));
        assert_eq!(*points.last().unwrap(), pt(-50, -80));
    }

    #[test]
    fn test_previous_connector_wraps_near_i32_max() {
        let points = points_of(|p| add_previous_connector(p, i32::MAX - 30, 0));
        assert_eq!(points[0], pt(i32::MAX - 10, 0));
        assert_eq!(points[3], pt(i32::MIN + 29, 0));
    }

    #[test]
    fn test_extreme_coordinates_keep_exit_point_contract() {
        let metrics = ConnectorMetrics::DEFAULT;
        for edge in [i32::MAX, i32::MAX - 30, i32::MIN, i32::MIN + 5] {
            let connectors = [
                Connector::Previous {
                    block_left: edge,
                    block_top: edge,
                },
                Connector::Next {
                    block_left: edge,
                    block_bottom: edge,
                },
                Connector::ValueInput {
                    block_right: edge,
                    input_top: edge,
                },
                Connector::StatementInput {
                    block_right: edge,
                    input_top: edge,
                    x_offset: edge,
                    input_height: edge,
                },
                Connector::Output {
                    block_left: edge,
                    block_bottom: edge,
                },
            ];
            for connector in connectors {
                let mut outline = Outline::new();
                connector.append_to(metrics, &mut outline);
                assert_eq!(
                    outline.current_point(),
                    connector.exit_point(metrics),
                    "{} connector at {edge}",
                    connector.kind_name()
                );
            }
        }
    }

    #[test]
    fn test_custom_metrics() {
        let metrics = ConnectorMetrics::new(4, 3, 8).unwrap();
        let points = points_of(|p| metrics.add_previous_connector(p, 0, 0));
        assert_eq!(points, vec![pt(4, 0), pt(4, 3), pt(12, 3), pt(12, 0)]);
    }

    #[test]
    fn test_exit_point_matches_outline_end() {
        let metrics = ConnectorMetrics::DEFAULT;
        let connectors = [
            Connector::Previous {
                block_left: 5,
                block_top: 7,
            },
            Connector::Next {
                block_left: 5,
                block_bottom: 90,
            },
            Connector::ValueInput {
                block_right: 150,
                input_top: 12,
            },
            Connector::StatementInput {
                block_right: 150,
                input_top: 40,
                x_offset: 30,
                input_height: 70,
            },
            Connector::Output {
                block_left: 5,
                block_bottom: 7,
            },
        ];
        for connector in connectors {
            let mut outline = Outline::starting_at(pt(0, 0));
            connector.append_to(metrics, &mut outline);
            assert_eq!(
                outline.current_point(),
                connector.exit_point(metrics),
                "{} connector",
                connector.kind_name()
            );
        }
    }

    #[test]
    fn test_append_to_matches_free_function() {
        let via_enum = points_of(|p| {
            Connector::Output {
                block_left: 100,
                block_bottom: 50,
            }
            .append_to(ConnectorMetrics::DEFAULT, p)
        });
        let direct = points_of(|p| add_output_connector(p, 100, 50));
        assert_eq!(via_enum, direct);
    }
}
