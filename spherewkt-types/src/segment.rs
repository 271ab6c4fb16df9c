use crate::sphere::SpherePoint;

/// Great circle arc between two points.
///
/// The arc is the shorter of the two arcs connecting the points. Arcs between antipodal points are ambiguous and
/// are not handled specially.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, Point>(pub &'a Point, pub &'a Point);

impl<'a> Segment<'a, SpherePoint> {
    /// Length of the arc in radians.
    pub fn length(&self) -> f64 {
        self.0.angle_to(self.1)
    }

    /// Shortest angular distance (in radians) between a point and the arc:
    ///
    /// * if the closest point of the great circle through the arc lies inside the arc, the returned value is the
    ///   angle between the point and the great circle
    /// * otherwise the returned value is the smaller one of the angles between the point and the arc's endpoints
    pub fn distance_to_point(&self, point: &SpherePoint) -> f64 {
        let a = self.0.vector();
        let b = self.1.vector();
        let p = point.vector();

        let normal = a.cross(b);
        let normal_len = normal.norm();
        if normal_len <= f64::EPSILON {
            return self.0.angle_to(point).min(self.1.angle_to(point));
        }
        let normal = normal / normal_len;

        let projected = p - normal * normal.dot(p);
        let projected_len = projected.norm();
        let inside = projected_len > f64::EPSILON
            && a.cross(&projected).dot(&normal) >= 0.0
            && projected.cross(b).dot(&normal) >= 0.0;

        if inside {
            normal.dot(p).abs().atan2(projected_len)
        } else {
            self.0.angle_to(point).min(self.1.angle_to(point))
        }
    }

    /// Returns true, if the segment has at least one common point with the `other` segment.
    pub fn intersects(&self, other: &Segment<SpherePoint>) -> bool {
        let acb = -orientation(self.0, self.1, other.0);
        let bda = orientation(self.0, self.1, other.1);
        let cbd = -orientation(other.0, other.1, self.1);
        let dac = orientation(other.0, other.1, self.0);

        if acb != 0 && bda != 0 && cbd != 0 && dac != 0 {
            return acb == bda && bda == cbd && cbd == dac;
        }

        // At least one endpoint lies on the great circle of the other arc.
        const TOUCH_TOLERANCE: f64 = 1e-12;
        self.distance_to_point(other.0) <= TOUCH_TOLERANCE
            || self.distance_to_point(other.1) <= TOUCH_TOLERANCE
            || other.distance_to_point(self.0) <= TOUCH_TOLERANCE
            || other.distance_to_point(self.1) <= TOUCH_TOLERANCE
    }
}

/// Sign of the triple product `(a x b) . c`: `1` when the points are counterclockwise, `-1` when clockwise, `0`
/// when they lie on one great circle.
fn orientation(a: &SpherePoint, b: &SpherePoint, c: &SpherePoint) -> i8 {
    let det = a.vector().cross(b.vector()).dot(c.vector());
    if det > 0.0 {
        1
    } else if det < 0.0 {
        -1
    } else {
        0
    }
}
