use serde::{Deserialize, Serialize};

use crate::contour::Contour;
use crate::sphere::SpherePoint;

/// Open sequence of points connected by great circle arcs.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Polyline {
    points: Vec<SpherePoint>,
}

impl std::ops::Deref for Polyline {
    type Target = [SpherePoint];

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl Polyline {
    /// Creates a new polyline. Points are kept in the given order, including repeated ones.
    pub fn new(points: Vec<SpherePoint>) -> Self {
        Self { points }
    }

    /// Points of the polyline.
    pub fn points(&self) -> &[SpherePoint] {
        &self.points
    }

    /// Consumes the polyline, returning its points.
    pub fn into_points(self) -> Vec<SpherePoint> {
        self.points
    }

    /// Total length of the polyline in radians.
    pub fn length(&self) -> f64 {
        self.iter_segments().map(|segment| segment.length()).sum()
    }

    /// Shortest angular distance from the point to the polyline, or `None` for an empty polyline.
    pub fn distance_to_point(&self, point: &SpherePoint) -> Option<f64> {
        match self.points.as_slice() {
            [] => None,
            [single] => Some(single.angle_to(point)),
            _ => self
                .iter_segments()
                .map(|segment| segment.distance_to_point(point))
                .reduce(f64::min),
        }
    }

    /// Returns true if any edge of this polyline has a common point with any edge of the `other` one.
    pub fn intersects(&self, other: &Polyline) -> bool {
        self.iter_segments()
            .any(|segment| other.iter_segments().any(|o| segment.intersects(&o)))
    }
}

impl From<Vec<SpherePoint>> for Polyline {
    fn from(points: Vec<SpherePoint>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<SpherePoint> for Polyline {
    fn from_iter<T: IntoIterator<Item = SpherePoint>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Contour for Polyline {
    type Point = SpherePoint;

    fn is_closed(&self) -> bool {
        false
    }

    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point> {
        self.points.iter()
    }
}
