//! Reader of Well-Known Text geometries into geometries on a sphere.
//!
//! The text is parsed into a [`GeometryAst`] by a [`WktParser`] ([`TextParser`] by default), and the tree is
//! converted into the types of [`spherewkt_types`] by a [`Converter`]. The [`Decoder`] combines both steps and
//! offers one accessor per geometry kind:
//!
//! ```
//! use spherewkt::{DecodeError, Decoder};
//!
//! let decoder = Decoder::new();
//!
//! let point = decoder.as_point("POINT(138.5199401149407 -34.97629388791155)").unwrap();
//! assert!((point.lon() - 138.5199401149407).abs() < 1e-9);
//!
//! let error = decoder.as_polygon("POINT(1 2)").unwrap_err();
//! assert!(matches!(error, DecodeError::GeometryKindMismatch { .. }));
//! ```
//!
//! # Coordinate order
//!
//! WKT ordinates are read as `x` = longitude and `y` = latitude, both in degrees. No projection or datum
//! transformation is applied.

pub mod ast;
mod convert;
mod decoder;
pub mod error;
mod options;
pub mod parser;

pub use ast::{GeometryAst, GeometryKind};
pub use convert::{convert, Converter, DecodedGeometry};
pub use decoder::Decoder;
pub use error::{DecodeError, ParseError};
pub use options::{DecoderOptions, RingPolicy};
pub use parser::{TextParser, WktParser, WktSource};
pub use spherewkt_types;
