//! Conversions from [`geo_types`] geometries. Coordinates are read as `x` = longitude, `y` = latitude.

use geo_types::{Coord, CoordFloat, LineString, Point, Polygon};

use crate::geo::{GeoPoint, NewGeoPoint};
use crate::sphere::{Loop, Polyline, SpherePoint, SpherePolygon};

impl<T: CoordFloat> GeoPoint for Coord<T> {
    type Num = T;

    fn lat(&self) -> Self::Num {
        self.y
    }

    fn lon(&self) -> Self::Num {
        self.x
    }
}

impl<T: CoordFloat> NewGeoPoint<T> for Coord<T> {
    fn latlon(lat: T, lon: T) -> Self {
        Coord { x: lon, y: lat }
    }
}

impl<T: CoordFloat> GeoPoint for Point<T> {
    type Num = T;

    fn lat(&self) -> Self::Num {
        self.y()
    }

    fn lon(&self) -> Self::Num {
        self.x()
    }
}

impl From<Coord<f64>> for SpherePoint {
    fn from(value: Coord<f64>) -> Self {
        SpherePoint::from_lonlat_degrees(value.x, value.y)
    }
}

impl From<Point<f64>> for SpherePoint {
    fn from(value: Point<f64>) -> Self {
        value.0.into()
    }
}

impl From<&LineString<f64>> for Polyline {
    fn from(value: &LineString<f64>) -> Self {
        value.coords().map(|c| SpherePoint::from(*c)).collect()
    }
}

impl From<&LineString<f64>> for Loop {
    fn from(value: &LineString<f64>) -> Self {
        value.coords().map(|c| SpherePoint::from(*c)).collect()
    }
}

impl From<&Polygon<f64>> for SpherePolygon {
    fn from(value: &Polygon<f64>) -> Self {
        SpherePolygon::from_loops(
            std::iter::once(value.exterior())
                .chain(value.interiors())
                .map(Loop::from)
                .collect(),
        )
    }
}
