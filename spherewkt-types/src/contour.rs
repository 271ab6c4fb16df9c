//! Contour is a sequence of points.
//!
//! Contours can be:
//! * **open** - the first and the last points of the contour are not connected. A
//!   [`Polyline`](crate::Polyline) is an open contour.
//! * **closed** - the first and the last points of the contour are connected by an edge. A [`Loop`](crate::Loop)
//!   is a closed contour.
//!
//! Both open and closed contours are represented by the [`Contour`] trait, but there is also a separate
//! [`ClosedContour`] trait for situations when only a closed contour makes sense. All closed contours also
//! implement the `Contour` trait automatically.
//!
//! # Contour vs OGC LineString
//!
//! In WKT, a ring is closed when the first and the last points in the sequence are exactly the same. A closed
//! `Contour` keeps its points as they were given: when the closing point is duplicated, the closing edge simply
//! has zero length.

use crate::segment::Segment;

/// Sequence of points. See module level documentation for details.
pub trait Contour {
    /// Type of the points the contour is consisted of.
    type Point;

    /// Whether the contour is closed.
    ///
    /// A closed contour has a segment connecting the last and the first points.
    fn is_closed(&self) -> bool;

    /// Iterate over the points of the contour.
    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point>;

    /// Same as [`Contour::iter_points`] but for closed contours repeats the first point again at the end of the
    /// iterator.
    fn iter_points_closing(&self) -> impl Iterator<Item = &Self::Point> {
        let closing = if self.is_closed() {
            self.iter_points().next()
        } else {
            None
        };
        self.iter_points().chain(closing)
    }

    /// Iterates over segments of the contour. For closed contours this includes the segment between the last and
    /// the first points of the contour.
    fn iter_segments(&self) -> impl Iterator<Item = Segment<'_, Self::Point>> {
        self.iter_points_closing()
            .zip(self.iter_points_closing().skip(1))
            .map(|(from, to)| Segment(from, to))
    }
}

/// A closed contour. See module documentation for details.
pub trait ClosedContour {
    /// Type of the points the contour is consisted of.
    type Point;

    /// Iterate over the points of the contour.
    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point>;
}

impl<P, T: ClosedContour<Point = P>> Contour for T {
    type Point = P;

    fn is_closed(&self) -> bool {
        true
    }

    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point> {
        ClosedContour::iter_points(self)
    }
}
