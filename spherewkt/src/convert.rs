//! Conversion of a [`GeometryAst`] into spherical geometries.

use spherewkt_types::{Loop, Polyline, SpherePoint, SpherePolygon};

use crate::ast::{AstLineString, AstPoint, AstPolygon, GeometryAst, GeometryKind};
use crate::error::DecodeError;
use crate::options::{DecoderOptions, RingPolicy};

/// Geometry decoded into spherical coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedGeometry {
    /// Single point.
    Point(SpherePoint),
    /// Polyline, from a line string.
    Polyline(Polyline),
    /// Polygon.
    Polygon(SpherePolygon),
    /// Points of a multipoint, in order.
    MultiPoint(Vec<SpherePoint>),
    /// Polylines of a multi line string, in order.
    MultiPolyline(Vec<Polyline>),
    /// Polygons of a multipolygon, in order.
    MultiPolygon(Vec<SpherePolygon>),
}

impl DecodedGeometry {
    /// Kind of the geometry this value was decoded from.
    pub fn kind(&self) -> GeometryKind {
        match self {
            DecodedGeometry::Point(_) => GeometryKind::Point,
            DecodedGeometry::Polyline(_) => GeometryKind::LineString,
            DecodedGeometry::Polygon(_) => GeometryKind::Polygon,
            DecodedGeometry::MultiPoint(_) => GeometryKind::MultiPoint,
            DecodedGeometry::MultiPolyline(_) => GeometryKind::MultiLineString,
            DecodedGeometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
        }
    }

    /// Points of a polyline, loops of a polygon or members of a multi-geometry. A single point counts as one.
    fn num_members(&self) -> usize {
        match self {
            DecodedGeometry::Point(_) => 1,
            DecodedGeometry::Polyline(line) => line.len(),
            DecodedGeometry::Polygon(polygon) => polygon.num_loops(),
            DecodedGeometry::MultiPoint(points) => points.len(),
            DecodedGeometry::MultiPolyline(lines) => lines.len(),
            DecodedGeometry::MultiPolygon(polygons) => polygons.len(),
        }
    }

    fn mismatch(&self, requested: GeometryKind) -> DecodeError {
        DecodeError::GeometryKindMismatch {
            requested,
            actual: self.kind(),
        }
    }

    /// Returns the point, or [`DecodeError::GeometryKindMismatch`] for any other geometry.
    pub fn into_point(self) -> Result<SpherePoint, DecodeError> {
        match self {
            DecodedGeometry::Point(v) => Ok(v),
            other => Err(other.mismatch(GeometryKind::Point)),
        }
    }

    /// Returns the polyline, or [`DecodeError::GeometryKindMismatch`] for any other geometry.
    pub fn into_polyline(self) -> Result<Polyline, DecodeError> {
        match self {
            DecodedGeometry::Polyline(v) => Ok(v),
            other => Err(other.mismatch(GeometryKind::LineString)),
        }
    }

    /// Returns the polygon, or [`DecodeError::GeometryKindMismatch`] for any other geometry.
    pub fn into_polygon(self) -> Result<SpherePolygon, DecodeError> {
        match self {
            DecodedGeometry::Polygon(v) => Ok(v),
            other => Err(other.mismatch(GeometryKind::Polygon)),
        }
    }

    /// Returns the points of a multipoint, or [`DecodeError::GeometryKindMismatch`] for any other geometry.
    pub fn into_multi_point(self) -> Result<Vec<SpherePoint>, DecodeError> {
        match self {
            DecodedGeometry::MultiPoint(v) => Ok(v),
            other => Err(other.mismatch(GeometryKind::MultiPoint)),
        }
    }

    /// Returns the polylines of a multi line string, or [`DecodeError::GeometryKindMismatch`] for any other
    /// geometry.
    pub fn into_multi_polyline(self) -> Result<Vec<Polyline>, DecodeError> {
        match self {
            DecodedGeometry::MultiPolyline(v) => Ok(v),
            other => Err(other.mismatch(GeometryKind::MultiLineString)),
        }
    }

    /// Returns the polygons of a multipolygon, or [`DecodeError::GeometryKindMismatch`] for any other geometry.
    pub fn into_multi_polygon(self) -> Result<Vec<SpherePolygon>, DecodeError> {
        match self {
            DecodedGeometry::MultiPolygon(v) => Ok(v),
            other => Err(other.mismatch(GeometryKind::MultiPolygon)),
        }
    }
}

/// Converts geometry trees into spherical geometries.
///
/// Every ordinate pair is read as `x` = longitude, `y` = latitude, in degrees. The structure of the tree is kept
/// as is: no points are reordered, merged or dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    options: DecoderOptions,
}

impl Converter {
    /// Creates a converter with the given options.
    pub fn new(options: DecoderOptions) -> Self {
        Self { options }
    }

    /// Options of the converter.
    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }

    /// Converts one geometry.
    ///
    /// Circular strings, undefined and unrecognized geometries fail with
    /// [`DecodeError::UnsupportedGeometryKind`].
    pub fn convert(&self, node: &GeometryAst) -> Result<DecodedGeometry, DecodeError> {
        let geometry = match node {
            GeometryAst::Point(point) => DecodedGeometry::Point(self.point(point)?),
            GeometryAst::LineString(line) => DecodedGeometry::Polyline(self.polyline(line)?),
            GeometryAst::Polygon(polygon) => DecodedGeometry::Polygon(self.polygon(polygon, 0)?),
            GeometryAst::MultiPoint(points) => DecodedGeometry::MultiPoint(
                points
                    .iter()
                    .map(|p| self.point(p))
                    .collect::<Result<_, _>>()?,
            ),
            GeometryAst::MultiLineString(lines) => DecodedGeometry::MultiPolyline(
                lines
                    .iter()
                    .map(|line| self.polyline(line))
                    .collect::<Result<_, _>>()?,
            ),
            GeometryAst::MultiPolygon(polygons) => DecodedGeometry::MultiPolygon(
                polygons
                    .iter()
                    .enumerate()
                    .map(|(index, polygon)| self.polygon(polygon, index))
                    .collect::<Result<_, _>>()?,
            ),
            GeometryAst::Undefined
            | GeometryAst::CircularString(_)
            | GeometryAst::Unrecognized(_) => {
                return Err(DecodeError::UnsupportedGeometryKind(node.kind()))
            }
        };

        log::trace!(
            "Converted {} geometry with {} members",
            geometry.kind(),
            geometry.num_members()
        );
        Ok(geometry)
    }

    fn point(&self, point: &AstPoint) -> Result<SpherePoint, DecodeError> {
        let (lon, lat) = (point.x, point.y);
        let in_range = if self.options.check_ranges() {
            (-180.0..=180.0).contains(&lon) && (-90.0..=90.0).contains(&lat)
        } else {
            lon.is_finite() && lat.is_finite()
        };
        if !in_range {
            return Err(DecodeError::CoordinateOutOfRange { lon, lat });
        }

        Ok(SpherePoint::from_lonlat_degrees(lon, lat))
    }

    fn points(&self, points: &[AstPoint]) -> Result<Vec<SpherePoint>, DecodeError> {
        points.iter().map(|p| self.point(p)).collect()
    }

    fn polyline(&self, line: &AstLineString) -> Result<Polyline, DecodeError> {
        Ok(Polyline::new(self.points(&line.points)?))
    }

    fn polygon(&self, polygon: &AstPolygon, index: usize) -> Result<SpherePolygon, DecodeError> {
        let mut loops = Vec::with_capacity(polygon.rings.len());
        for (ring_index, ring) in polygon.rings.iter().enumerate() {
            let ring_loop = Loop::new(self.points(&ring.points)?);
            if self.options.ring_policy() == RingPolicy::RequireClosed
                && !ring_loop.is_explicitly_closed()
            {
                return Err(DecodeError::UnclosedRing {
                    polygon: index,
                    ring: ring_index,
                });
            }

            loops.push(ring_loop);
        }

        Ok(SpherePolygon::from_loops(loops))
    }
}

/// Converts one geometry with the default options. See [`Converter::convert`].
pub fn convert(node: &GeometryAst) -> Result<DecodedGeometry, DecodeError> {
    Converter::default().convert(node)
}
