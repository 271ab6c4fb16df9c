//! Geometries on the surface of a unit sphere.
//!
//! Every point is stored as a unit vector ([`SpherePoint`]), and lines, loops and polygons are built from such
//! points. Geographic coordinates (see [`geo`]) are only used at the boundaries: when a point is created from a
//! longitude/latitude pair, or when the pair is recovered back from a point.
//!
//! Edges between consecutive points are great circle arcs. Distances are angles in radians, unless a
//! [`Datum`](geo::Datum) is given to scale them into metres.

pub mod contour;
pub use contour::{ClosedContour, Contour};

pub mod error;
pub mod geo;

mod segment;
pub use segment::Segment;

pub mod sphere;
pub use sphere::{Loop, Polyline, SpherePoint, SpherePolygon};

#[cfg(feature = "geo-types")]
mod geo_types;
