use approx::AbsDiffEq;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::SphereTypesError;
use crate::geo::{Datum, GeoPoint, GeoPoint2d, NewGeoPoint};

/// Point on the unit sphere.
///
/// The point is stored as a unit vector in a right-handed frame where `x` points to (lon 0, lat 0), `y` to
/// (lon 90, lat 0) and `z` to the north pole.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SpherePoint(Vector3<f64>);

impl SpherePoint {
    /// Creates a point from longitude and latitude in degrees.
    ///
    /// Note the argument order: longitude comes first, as in WKT and GeoJSON. Values outside of the valid ranges
    /// are not rejected; they are wrapped around the sphere by the trigonometric functions.
    pub fn from_lonlat_degrees(lon: f64, lat: f64) -> Self {
        let (lat_sin, lat_cos) = lat.to_radians().sin_cos();
        let (lon_sin, lon_cos) = lon.to_radians().sin_cos();
        Self(Vector3::new(lat_cos * lon_cos, lat_cos * lon_sin, lat_sin))
    }

    /// Creates a point from any geographic point.
    pub fn from_geo(point: &impl GeoPoint<Num = f64>) -> Self {
        Self::from_lonlat_degrees(point.lon(), point.lat())
    }

    /// Creates a point from a direction vector. The vector is normalized.
    pub fn from_vector(vector: Vector3<f64>) -> Result<Self, SphereTypesError> {
        match vector.try_normalize(f64::EPSILON) {
            Some(unit) if unit.iter().all(|v| v.is_finite()) => Ok(Self(unit)),
            _ => Err(SphereTypesError::Degenerate(vector.x, vector.y, vector.z)),
        }
    }

    /// Unit vector of the point.
    pub fn vector(&self) -> &Vector3<f64> {
        &self.0
    }

    /// Longitude in degrees, in the range `[-180, 180]`.
    pub fn lon(&self) -> f64 {
        self.0.y.atan2(self.0.x).to_degrees()
    }

    /// Latitude in degrees, in the range `[-90, 90]`.
    pub fn lat(&self) -> f64 {
        self.0.z.atan2(self.0.x.hypot(self.0.y)).to_degrees()
    }

    /// Converts the point back into geographic coordinates.
    pub fn to_geo(&self) -> GeoPoint2d {
        GeoPoint2d::latlon(self.lat(), self.lon())
    }

    /// Angle between the two points as seen from the center of the sphere, in radians.
    pub fn angle_to(&self, other: &SpherePoint) -> f64 {
        self.0.cross(&other.0).norm().atan2(self.0.dot(&other.0))
    }

    /// Great circle distance in metres on the mean-radius sphere of the `datum`.
    pub fn distance(&self, other: &SpherePoint, datum: &Datum) -> f64 {
        self.angle_to(other) * datum.mean_radius()
    }
}

impl GeoPoint for SpherePoint {
    type Num = f64;

    fn lat(&self) -> f64 {
        SpherePoint::lat(self)
    }

    fn lon(&self) -> f64 {
        SpherePoint::lon(self)
    }
}

impl NewGeoPoint<f64> for SpherePoint {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self::from_lonlat_degrees(lon, lat)
    }
}

impl From<GeoPoint2d> for SpherePoint {
    fn from(value: GeoPoint2d) -> Self {
        Self::from_geo(&value)
    }
}

impl AbsDiffEq for SpherePoint {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}
