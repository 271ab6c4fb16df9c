//! Parsing of WKT text into a [`GeometryAst`].

use std::io::Read;
use std::str::FromStr;

use wkt::types::{Coord, LineString, Point, Polygon};
use wkt::Wkt;

use crate::ast::{AstLineString, AstPoint, AstPolygon, GeometryAst};
use crate::error::ParseError;

/// Parser that turns a byte stream into a geometry tree.
///
/// The decoder calls the parser exactly once per decoded geometry. `None` input means that the caller did not
/// provide a stream at all; a parser must return an error in this case.
pub trait WktParser {
    /// Parses one geometry from the input.
    fn parse(&self, input: Option<&mut dyn Read>) -> Result<GeometryAst, ParseError>;
}

impl<T: WktParser + ?Sized> WktParser for &T {
    fn parse(&self, input: Option<&mut dyn Read>) -> Result<GeometryAst, ParseError> {
        (**self).parse(input)
    }
}

/// Input accepted by the [`Decoder`](crate::Decoder).
///
/// Implemented for strings, byte slices, mutable references to readers, and `Option` of any of these, where
/// `None` stands for an absent stream.
pub trait WktSource {
    /// Calls `f` with a reader over the input, or with `None` if there is no input.
    fn with_reader<T>(self, f: impl FnOnce(Option<&mut dyn Read>) -> T) -> T;
}

impl WktSource for &str {
    fn with_reader<T>(self, f: impl FnOnce(Option<&mut dyn Read>) -> T) -> T {
        self.as_bytes().with_reader(f)
    }
}

impl WktSource for &[u8] {
    fn with_reader<T>(self, f: impl FnOnce(Option<&mut dyn Read>) -> T) -> T {
        let mut bytes = self;
        f(Some(&mut bytes))
    }
}

impl<R: Read> WktSource for &mut R {
    fn with_reader<T>(self, f: impl FnOnce(Option<&mut dyn Read>) -> T) -> T {
        f(Some(self))
    }
}

impl<S: WktSource> WktSource for Option<S> {
    fn with_reader<T>(self, f: impl FnOnce(Option<&mut dyn Read>) -> T) -> T {
        match self {
            Some(source) => source.with_reader(f),
            None => f(None),
        }
    }
}

/// WKT text parser backed by the [`wkt`] crate.
///
/// Only two-dimensional geometries are accepted. The whole input must contain exactly one geometry; leading and
/// trailing whitespace is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextParser;

impl TextParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses WKT text.
    pub fn parse_str(&self, text: &str) -> Result<GeometryAst, ParseError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        ensure_single_geometry(text)?;
        let parsed = Wkt::<f64>::from_str(text).map_err(|e| ParseError::Syntax(e.to_string()))?;
        Ok(match parsed {
            Wkt::Point(point) => GeometryAst::Point(convert_point(&point)?),
            Wkt::LineString(line) => GeometryAst::LineString(convert_line(&line)?),
            Wkt::Polygon(polygon) => GeometryAst::Polygon(convert_polygon(&polygon)?),
            Wkt::MultiPoint(multi_point) => GeometryAst::MultiPoint(
                multi_point
                    .0
                    .iter()
                    .map(convert_point)
                    .collect::<Result<_, _>>()?,
            ),
            Wkt::MultiLineString(multi_line) => GeometryAst::MultiLineString(
                multi_line
                    .0
                    .iter()
                    .map(convert_line)
                    .collect::<Result<_, _>>()?,
            ),
            Wkt::MultiPolygon(multi_polygon) => GeometryAst::MultiPolygon(
                multi_polygon
                    .0
                    .iter()
                    .map(convert_polygon)
                    .collect::<Result<_, _>>()?,
            ),
            Wkt::GeometryCollection(_) => return Err(ParseError::UnsupportedCollection),
        })
    }
}

impl WktParser for TextParser {
    fn parse(&self, input: Option<&mut dyn Read>) -> Result<GeometryAst, ParseError> {
        let input = input.ok_or(ParseError::MissingInput)?;

        let mut bytes = vec![];
        input.read_to_end(&mut bytes)?;
        log::debug!("Parsing {} bytes of WKT", bytes.len());

        let text = String::from_utf8(bytes).map_err(|_| ParseError::Encoding)?;
        self.parse_str(&text)
    }
}

/// Checks that nothing but whitespace follows the first geometry of the text. The `wkt` parser stops after one
/// geometry and ignores the rest of the input.
fn ensure_single_geometry(text: &str) -> Result<(), ParseError> {
    let head_end = text.find('(').unwrap_or(text.len());
    if let Some(empty) = text[..head_end].to_ascii_uppercase().find("EMPTY") {
        return ensure_nothing_after(&text[empty + "EMPTY".len()..]);
    }

    let mut depth = 0usize;
    for (index, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| ParseError::Syntax("unbalanced parentheses".into()))?;
                if depth == 0 {
                    return ensure_nothing_after(&text[index + 1..]);
                }
            }
            _ => {}
        }
    }

    if depth > 0 {
        return Err(ParseError::Syntax("unbalanced parentheses".into()));
    }

    Ok(())
}

fn ensure_nothing_after(rest: &str) -> Result<(), ParseError> {
    let rest = rest.trim();
    if rest.is_empty() {
        Ok(())
    } else {
        Err(ParseError::Syntax(format!(
            "unexpected text after geometry: {rest}"
        )))
    }
}

fn convert_coord(coord: &Coord<f64>) -> Result<AstPoint, ParseError> {
    if coord.z.is_some() || coord.m.is_some() {
        return Err(ParseError::UnsupportedOrdinates);
    }

    Ok(AstPoint::new(coord.x, coord.y))
}

fn convert_point(point: &Point<f64>) -> Result<AstPoint, ParseError> {
    match &point.0 {
        Some(coord) => convert_coord(coord),
        None => Err(ParseError::EmptyPoint),
    }
}

fn convert_line(line: &LineString<f64>) -> Result<AstLineString, ParseError> {
    Ok(AstLineString::new(
        line.0.iter().map(convert_coord).collect::<Result<_, _>>()?,
    ))
}

fn convert_polygon(polygon: &Polygon<f64>) -> Result<AstPolygon, ParseError> {
    Ok(AstPolygon::new(
        polygon
            .0
            .iter()
            .map(convert_line)
            .collect::<Result<_, _>>()?,
    ))
}
