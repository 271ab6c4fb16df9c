//! Error types used by the crate.

use thiserror::Error;

use crate::ast::GeometryKind;

/// Error returned by a [`WktParser`](crate::WktParser).
#[derive(Debug, Error)]
pub enum ParseError {
    /// No input stream was given.
    #[error("no input to parse")]
    MissingInput,
    /// The input contains no text.
    #[error("input is empty")]
    EmptyInput,
    /// Failed to read the input stream.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    /// The input is not valid UTF-8.
    #[error("input is not valid UTF-8")]
    Encoding,
    /// The text is not valid WKT.
    #[error("invalid WKT: {0}")]
    Syntax(String),
    /// The geometry has Z or M ordinates.
    #[error("Z and M ordinates are not supported")]
    UnsupportedOrdinates,
    /// `POINT EMPTY` was found where a point with coordinates is required.
    #[error("empty points are not supported")]
    EmptyPoint,
    /// The text describes a geometry collection.
    #[error("geometry collections are not supported")]
    UnsupportedCollection,
}

/// Error returned when decoding a geometry.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The parser failed. The parser error is kept as is.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The geometry has no spherical equivalent.
    #[error("unimplemented geometry type: {0}")]
    UnsupportedGeometryKind(GeometryKind),
    /// The geometry was decoded, but it is not of the requested kind.
    #[error("expected {requested} geometry, but found {actual}")]
    GeometryKindMismatch {
        /// Kind requested by the caller.
        requested: GeometryKind,
        /// Kind of the decoded geometry.
        actual: GeometryKind,
    },
    /// A polygon ring is not closed. Only returned with
    /// [`RingPolicy::RequireClosed`](crate::RingPolicy::RequireClosed).
    #[error("ring {ring} of polygon {polygon} is not closed")]
    UnclosedRing {
        /// Index of the polygon in a multipolygon, `0` for a single polygon.
        polygon: usize,
        /// Index of the ring in the polygon, `0` for the shell.
        ring: usize,
    },
    /// Longitude or latitude out of the valid range. Only returned when range checks are enabled with
    /// [`DecoderOptions::with_range_check`](crate::DecoderOptions::with_range_check).
    #[error("coordinates out of range: lon {lon}, lat {lat}")]
    CoordinateOutOfRange {
        /// Longitude in degrees.
        lon: f64,
        /// Latitude in degrees.
        lat: f64,
    },
}
