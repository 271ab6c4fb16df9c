use serde::{Deserialize, Serialize};

use crate::sphere::{Loop, SpherePoint};

/// Polygon on the sphere. Polygon consists of an ordered list of loops: the first loop is the shell, all the other
/// loops are holes.
///
/// A polygon without loops is empty and contains no points.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SpherePolygon {
    loops: Vec<Loop>,
}

impl SpherePolygon {
    /// Creates a new polygon from the list of loops, shell first.
    pub fn from_loops(loops: Vec<Loop>) -> Self {
        Self { loops }
    }

    /// All loops of the polygon starting with the shell.
    pub fn loops(&self) -> &[Loop] {
        &self.loops
    }

    /// Number of loops, including the shell.
    pub fn num_loops(&self) -> usize {
        self.loops.len()
    }

    /// Whether the polygon has no loops.
    pub fn is_empty(&self) -> bool {
        self.loops.is_empty()
    }

    /// Outer loop of the polygon.
    pub fn shell(&self) -> Option<&Loop> {
        self.loops.first()
    }

    /// Iterates over the holes of the polygon.
    pub fn holes(&self) -> impl Iterator<Item = &'_ Loop> {
        self.loops.iter().skip(1)
    }

    /// Consumes the polygon, returning its loops.
    pub fn into_loops(self) -> Vec<Loop> {
        self.loops
    }

    /// Returns true if the point is inside the shell and outside of every hole.
    pub fn contains_point(&self, point: &SpherePoint) -> bool {
        match self.shell() {
            Some(shell) => {
                shell.contains_point(point) && !self.holes().any(|hole| hole.contains_point(point))
            }
            None => false,
        }
    }
}

impl From<Loop> for SpherePolygon {
    fn from(shell: Loop) -> Self {
        Self { loops: vec![shell] }
    }
}
