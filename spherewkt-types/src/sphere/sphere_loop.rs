use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::contour::ClosedContour;
use crate::sphere::SpherePoint;

/// Closed sequence of points bounding a shell or a hole of a [`SpherePolygon`](super::SpherePolygon).
///
/// The vertices are stored exactly as given. The loop is implicitly closed by an arc from the last vertex back to
/// the first one, so a ring whose last vertex repeats the first one is also a valid loop (its closing arc is
/// empty). Winding order is not interpreted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Loop {
    vertices: Vec<SpherePoint>,
}

impl Loop {
    /// Creates a new loop from its vertices.
    pub fn new(vertices: Vec<SpherePoint>) -> Self {
        Self { vertices }
    }

    /// Vertices of the loop.
    pub fn vertices(&self) -> &[SpherePoint] {
        &self.vertices
    }

    /// Number of vertices, including a repeated closing vertex if there is one.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the loop has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns true if the loop has at least 4 vertices and the last vertex equals the first one, as required for
    /// WKT rings.
    pub fn is_explicitly_closed(&self) -> bool {
        self.vertices.len() >= 4 && self.vertices.first() == self.vertices.last()
    }

    /// Consumes the loop, returning its vertices.
    pub fn into_vertices(self) -> Vec<SpherePoint> {
        self.vertices
    }

    /// Returns true if the point is inside the loop.
    ///
    /// The inside of the loop is the smaller of the two regions it divides the sphere into, whatever the winding
    /// order of the vertices. Points exactly on the boundary may be reported either way.
    pub fn contains_point(&self, point: &SpherePoint) -> bool {
        let vertices = self.distinct_vertices();
        if vertices.len() < 3 {
            return false;
        }

        let p = point.vector();
        let winding: f64 = (0..vertices.len())
            .map(|i| {
                let a = vertices[i].vector();
                let b = vertices[(i + 1) % vertices.len()].vector();
                let sin = p.dot(&a.cross(b));
                let cos = a.dot(b) - p.dot(a) * p.dot(b);
                sin.atan2(cos)
            })
            .sum();

        // The winding number only tells whether the loop goes around the axis through the point. The turning
        // direction of the loop tells on which end of the axis the interior is.
        winding.abs() > PI && winding.signum() == Self::turning(&vertices).signum()
    }

    /// Vertices without consecutive repetitions and without the explicit closing vertex.
    fn distinct_vertices(&self) -> Vec<SpherePoint> {
        let mut vertices: Vec<SpherePoint> = Vec::with_capacity(self.vertices.len());
        for vertex in &self.vertices {
            if vertices.last() != Some(vertex) {
                vertices.push(*vertex);
            }
        }

        while vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }

        vertices
    }

    /// Sum of the signed turning angles at the vertices. Positive when the smaller region is on the left.
    fn turning(vertices: &[SpherePoint]) -> f64 {
        let count = vertices.len();
        (0..count)
            .map(|i| {
                let a = vertices[(i + count - 1) % count].vector();
                let b = vertices[i].vector();
                let c = vertices[(i + 1) % count].vector();
                let incoming = a.cross(b);
                let outgoing = b.cross(c);
                b.dot(&incoming.cross(&outgoing)).atan2(incoming.dot(&outgoing))
            })
            .sum()
    }
}

impl From<Vec<SpherePoint>> for Loop {
    fn from(vertices: Vec<SpherePoint>) -> Self {
        Self::new(vertices)
    }
}

impl FromIterator<SpherePoint> for Loop {
    fn from_iter<T: IntoIterator<Item = SpherePoint>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl ClosedContour for Loop {
    type Point = SpherePoint;

    fn iter_points(&self) -> impl Iterator<Item = &'_ SpherePoint> {
        self.vertices.iter()
    }
}
