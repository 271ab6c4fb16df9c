use serde::{Deserialize, Serialize};

/// Reference ellipsoid of a celestial body.
///
/// Geometries of this crate live on a sphere, so only the mean radius of the ellipsoid is used for metric values.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Datum {
    semimajor: f64,
    inv_flattening: f64,
}

impl Datum {
    /// WGS84 ellipsoid.
    pub const WGS84: Self = Datum {
        semimajor: 6_378_137.0,
        inv_flattening: 298.257223563,
    };

    /// Creates a new datum from the semimajor axis (in metres) and the inverse flattening.
    pub fn new(semimajor: f64, inv_flattening: f64) -> Self {
        Self {
            semimajor,
            inv_flattening,
        }
    }

    /// Semimajor axis in metres.
    pub fn semimajor(&self) -> f64 {
        self.semimajor
    }

    /// Inverse flattening of the ellipsoid.
    pub fn inv_flattening(&self) -> f64 {
        self.inv_flattening
    }

    /// Semiminor axis in metres. Equals the semimajor axis for a datum with zero flattening.
    pub fn semiminor(&self) -> f64 {
        if self.inv_flattening == 0.0 {
            return self.semimajor;
        }

        self.semimajor * (1.0 - 1.0 / self.inv_flattening)
    }

    /// Arithmetic mean radius `(2a + b) / 3` in metres.
    pub fn mean_radius(&self) -> f64 {
        (2.0 * self.semimajor + self.semiminor()) / 3.0
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::WGS84
    }
}
