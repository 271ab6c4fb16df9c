//! Geometries on the unit sphere.

mod point;
mod polygon;
mod polyline;
mod sphere_loop;

pub use point::SpherePoint;
pub use polygon::SpherePolygon;
pub use polyline::Polyline;
pub use sphere_loop::Loop;
