//! Path accumulators that connector outlines are drawn into.
//!
//! # Key Concepts
//!
//! - **Current point**: the end of the last appended segment. Every
//!   `line_to` draws from the current point to the new point and then
//!   advances it.
//! - **Caller ownership**: connector operations never create, move or close a
//!   path. They only append line segments through [`PathSink`], so a block
//!   outline is one continuous contour assembled by the caller.
//!
//! [`Outline`] is a ready-made accumulator for callers that do not bring
//! their own path type. `Vec<Point>` also implements [`PathSink`] and simply
//! records the appended points.

use std::fmt;

use crate::log::trace;
use crate::types::{Point, pt};

/// Origin of the outline coordinate space.
pub const ORIGIN: Point = pt(0, 0);

/// Anything a connector can be drawn into.
pub trait PathSink {
    /// Draw a straight segment from the current point to `point`, which
    /// becomes the new current point.
    fn line_to(&mut self, point: Point);
}

impl<T: PathSink + ?Sized> PathSink for &mut T {
    fn line_to(&mut self, point: Point) {
        (**self).line_to(point);
    }
}

impl PathSink for Vec<Point> {
    fn line_to(&mut self, point: Point) {
        self.push(point);
    }
}

/// A single drawing command in an [`Outline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

/// Closed block outline built from straight segments.
///
/// # Example
///
/// ```
/// use blocknotch::{Outline, PathSink, pt};
///
/// let mut outline = Outline::starting_at(pt(0, 0));
/// outline.line_to(pt(10, 0));
/// outline.line_to(pt(10, 10));
/// outline.close();
///
/// assert_eq!(outline.to_svg_path_data(), "M0,0 L10,0 L10,10 Z");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outline {
    commands: Vec<PathCommand>,
    /// End of the last segment; `(0, 0)` until something is drawn
    current: Point,
    /// Where the open contour began, for `close`
    contour_start: Point,
}

impl Outline {
    /// Create an empty outline whose current point is the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an outline that begins a contour at `start`.
    pub fn starting_at(start: Point) -> Self {
        let mut outline = Self::new();
        outline.move_to(start);
        outline
    }

    /// Begin a new contour at `point` without drawing.
    pub fn move_to(&mut self, point: Point) {
        trace!(x = point.x, y = point.y, "outline move_to");
        self.commands.push(PathCommand::MoveTo(point));
        self.current = point;
        self.contour_start = point;
    }

    /// Close the current contour with a segment back to its start.
    pub fn close(&mut self) {
        trace!(
            x = self.contour_start.x,
            y = self.contour_start.y,
            "outline close"
        );
        self.commands.push(PathCommand::Close);
        self.current = self.contour_start;
    }

    /// The point the next segment will be drawn from.
    pub fn current_point(&self) -> Point {
        self.current
    }

    /// All commands, in drawing order.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// The explicit points of the outline (move and line targets), in order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(|cmd| match *cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::Close => None,
        })
    }

    /// Number of commands recorded so far.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Get the first explicit point of the outline, if any.
    pub fn start(&self) -> Option<Point> {
        self.points().next()
    }

    /// Get the end point of the outline (same as the current point).
    pub fn end(&self) -> Point {
        self.current
    }

    /// Render the outline as SVG path data (the `d` attribute).
    pub fn to_svg_path_data(&self) -> String {
        self.to_string()
    }
}

impl PathSink for Outline {
    fn line_to(&mut self, point: Point) {
        self.commands.push(PathCommand::LineTo(point));
        self.current = point;
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(p) => write!(f, "M{},{}", p.x, p.y),
            PathCommand::LineTo(p) => write!(f, "L{},{}", p.x, p.y),
            PathCommand::Close => f.write_str("Z"),
        }
    }
}

impl fmt::Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{cmd}")?;
        }
        Ok(())
    }
}

impl Extend<Point> for Outline {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for point in iter {
            self.line_to(point);
        }
    }
}
