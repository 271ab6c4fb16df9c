//! Geometry tree produced by a [`WktParser`](crate::WktParser).
//!
//! All ordinates are raw numbers as they appear in the text: `x` is the longitude and `y` is the latitude, both in
//! degrees. No validation of values or ring closure is done at this level.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// One ordinate pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct AstPoint {
    /// Longitude in degrees.
    pub x: f64,
    /// Latitude in degrees.
    pub y: f64,
}

impl AstPoint {
    /// Creates a new point from longitude (`x`) and latitude (`y`).
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Ordered list of vertices. Not implicitly closed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AstLineString {
    /// Vertices in the order they appear in the text.
    pub points: Vec<AstPoint>,
}

impl AstLineString {
    /// Creates a new line string.
    pub fn new(points: Vec<AstPoint>) -> Self {
        Self { points }
    }
}

/// Polygon as a list of rings. The first ring is the shell, the rest are holes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AstPolygon {
    /// Rings in the order they appear in the text.
    pub rings: Vec<AstLineString>,
}

impl AstPolygon {
    /// Creates a new polygon.
    pub fn new(rings: Vec<AstLineString>) -> Self {
        Self { rings }
    }
}

/// Parsed geometry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum GeometryAst {
    /// Geometry of undefined type.
    Undefined,
    /// Single point.
    Point(AstPoint),
    /// Line string.
    LineString(AstLineString),
    /// Circular string. The vertices are kept, but the arcs between them are not straight lines.
    CircularString(AstLineString),
    /// Polygon.
    Polygon(AstPolygon),
    /// Collection of points.
    MultiPoint(Vec<AstPoint>),
    /// Collection of line strings.
    MultiLineString(Vec<AstLineString>),
    /// Collection of polygons.
    MultiPolygon(Vec<AstPolygon>),
    /// Geometry with a type code unknown to this crate.
    Unrecognized(u32),
}

impl GeometryAst {
    /// Type tag of the node.
    pub fn kind(&self) -> GeometryKind {
        match self {
            GeometryAst::Undefined => GeometryKind::Undefined,
            GeometryAst::Point(_) => GeometryKind::Point,
            GeometryAst::LineString(_) => GeometryKind::LineString,
            GeometryAst::CircularString(_) => GeometryKind::CircularString,
            GeometryAst::Polygon(_) => GeometryKind::Polygon,
            GeometryAst::MultiPoint(_) => GeometryKind::MultiPoint,
            GeometryAst::MultiLineString(_) => GeometryKind::MultiLineString,
            GeometryAst::MultiPolygon(_) => GeometryKind::MultiPolygon,
            GeometryAst::Unrecognized(code) => GeometryKind::from_code(*code),
        }
    }
}

/// Type of a geometry.
///
/// The `Display` implementation gives the name used in error messages. Codes without a known type are displayed
/// as their decimal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum GeometryKind {
    /// Undefined geometry.
    Undefined,
    /// Point.
    Point,
    /// Multipoint.
    MultiPoint,
    /// Line string.
    LineString,
    /// Circular string.
    CircularString,
    /// Multi line string.
    MultiLineString,
    /// Polygon.
    Polygon,
    /// Multipolygon.
    MultiPolygon,
    /// Unknown type code.
    Unknown(u32),
}

impl GeometryKind {
    /// Returns the kind for the given numeric type code.
    pub fn from_code(code: u32) -> Self {
        match code {
            0 => GeometryKind::Undefined,
            1 => GeometryKind::Point,
            2 => GeometryKind::MultiPoint,
            3 => GeometryKind::LineString,
            4 => GeometryKind::CircularString,
            5 => GeometryKind::MultiLineString,
            6 => GeometryKind::Polygon,
            7 => GeometryKind::MultiPolygon,
            other => GeometryKind::Unknown(other),
        }
    }

    /// Numeric type code of the kind.
    pub fn code(&self) -> u32 {
        match self {
            GeometryKind::Undefined => 0,
            GeometryKind::Point => 1,
            GeometryKind::MultiPoint => 2,
            GeometryKind::LineString => 3,
            GeometryKind::CircularString => 4,
            GeometryKind::MultiLineString => 5,
            GeometryKind::Polygon => 6,
            GeometryKind::MultiPolygon => 7,
            GeometryKind::Unknown(code) => *code,
        }
    }
}

impl Display for GeometryKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryKind::Undefined => write!(f, "Undefined"),
            GeometryKind::Point => write!(f, "Point"),
            GeometryKind::MultiPoint => write!(f, "Multipoint"),
            GeometryKind::LineString => write!(f, "Linestring"),
            GeometryKind::CircularString => write!(f, "CircularLinestring"),
            GeometryKind::MultiLineString => write!(f, "MultiLineString"),
            GeometryKind::Polygon => write!(f, "Polygon"),
            GeometryKind::MultiPolygon => write!(f, "MultiPolygon"),
            GeometryKind::Unknown(code) => write!(f, "{code}"),
        }
    }
}
