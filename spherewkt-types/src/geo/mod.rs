//! Points in geographic coordinates (latitude and longitude in degrees), see [`GeoPoint`], and the reference
//! [`Datum`] used to turn angular distances into metres.

mod datum;
mod point;

pub use datum::Datum;
pub use point::{GeoPoint, GeoPoint2d, NewGeoPoint};
