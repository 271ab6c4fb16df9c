use spherewkt_types::{Polyline, SpherePoint, SpherePolygon};

use crate::convert::{Converter, DecodedGeometry};
use crate::error::DecodeError;
use crate::options::DecoderOptions;
use crate::parser::{TextParser, WktParser, WktSource};

/// Decodes WKT input into spherical geometries.
///
/// Every call parses the input once, converts the parsed geometry and, for the typed accessors, checks that the
/// result is of the requested kind. The decoder keeps no state between calls and can be shared between threads.
///
/// ```
/// use spherewkt::Decoder;
///
/// let decoder = Decoder::new();
/// let line = decoder.as_linestring("LINESTRING (30 10, 10 30, 40 40)").unwrap();
/// assert_eq!(line.len(), 3);
/// assert!((line[0].lon() - 30.0).abs() < 1e-9);
/// assert!((line[0].lat() - 10.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Decoder<P = TextParser> {
    parser: P,
    converter: Converter,
}

impl Decoder {
    /// Creates a decoder with the default WKT text parser and default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a decoder with the default WKT text parser.
    pub fn with_options(options: DecoderOptions) -> Self {
        Self::with_parser(TextParser::new(), options)
    }
}

impl<P: WktParser> Decoder<P> {
    /// Creates a decoder with a custom parser.
    pub fn with_parser(parser: P, options: DecoderOptions) -> Self {
        Self {
            parser,
            converter: Converter::new(options),
        }
    }

    /// Options of the decoder.
    pub fn options(&self) -> &DecoderOptions {
        self.converter.options()
    }

    /// Decodes one geometry of any supported kind.
    pub fn decode(&self, input: impl WktSource) -> Result<DecodedGeometry, DecodeError> {
        let ast = input.with_reader(|reader| self.parser.parse(reader))?;
        self.converter.convert(&ast)
    }

    /// Decodes a `POINT`.
    pub fn as_point(&self, input: impl WktSource) -> Result<SpherePoint, DecodeError> {
        self.decode(input)?.into_point()
    }

    /// Decodes a `LINESTRING` into a polyline.
    pub fn as_linestring(&self, input: impl WktSource) -> Result<Polyline, DecodeError> {
        self.decode(input)?.into_polyline()
    }

    /// Decodes a `POLYGON`.
    pub fn as_polygon(&self, input: impl WktSource) -> Result<SpherePolygon, DecodeError> {
        self.decode(input)?.into_polygon()
    }

    /// Decodes a `MULTIPOINT`.
    pub fn as_multi_point(&self, input: impl WktSource) -> Result<Vec<SpherePoint>, DecodeError> {
        self.decode(input)?.into_multi_point()
    }

    /// Decodes a `MULTILINESTRING` into a list of polylines.
    pub fn as_multi_linestring(&self, input: impl WktSource) -> Result<Vec<Polyline>, DecodeError> {
        self.decode(input)?.into_multi_polyline()
    }

    /// Decodes a `MULTIPOLYGON`.
    pub fn as_multi_polygon(
        &self,
        input: impl WktSource,
    ) -> Result<Vec<SpherePolygon>, DecodeError> {
        self.decode(input)?.into_multi_polygon()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::io::Read;

    use super::*;
    use crate::ast::{AstLineString, AstPoint, AstPolygon, GeometryAst, GeometryKind};
    use crate::error::ParseError;
    use crate::options::RingPolicy;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    /// Parser returning a fixed tree, counting its calls.
    struct FixedParser {
        ast: GeometryAst,
        calls: Cell<usize>,
    }

    impl FixedParser {
        fn new(ast: GeometryAst) -> Self {
            Self {
                ast,
                calls: Cell::new(0),
            }
        }
    }

    impl WktParser for FixedParser {
        fn parse(&self, _input: Option<&mut dyn Read>) -> Result<GeometryAst, ParseError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.ast.clone())
        }
    }

    #[test]
    fn point() {
        let point = Decoder::new()
            .as_point("POINT(138.5199401149407 -34.97629388791155)")
            .expect("valid point");

        assert_abs_diff_eq!(point.lon(), 138.5199401149407, epsilon = 1e-9);
        assert_abs_diff_eq!(point.lat(), -34.97629388791155, epsilon = 1e-9);
    }

    #[test]
    fn point_round_trip_grid() {
        let decoder = Decoder::new();
        for lon in [-180.0f64, -120.25, -0.5, 0.0, 33.3, 179.75, 180.0] {
            for lat in [-90.0f64, -45.125, 0.0, 12.0, 89.0, 90.0] {
                let point = decoder
                    .as_point(format!("POINT({lon} {lat})").as_str())
                    .expect("valid point");
                assert_abs_diff_eq!(point.lat(), lat, epsilon = 1e-9);
                if lat.abs() < 90.0 {
                    assert_abs_diff_eq!(point.lon().abs(), lon.abs(), epsilon = 1e-9);
                    if lon.abs() < 180.0 {
                        assert_abs_diff_eq!(point.lon(), lon, epsilon = 1e-9);
                    }
                }
            }
        }
    }

    #[test]
    fn linestring() {
        let line = Decoder::new()
            .as_linestring("LINESTRING (30 10, 10 30, 40 40)")
            .expect("valid linestring");

        assert_eq!(line.len(), 3);
        assert_abs_diff_eq!(line[0].lon(), 30.0, epsilon = 1e-9);
        assert_abs_diff_eq!(line[0].lat(), 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(line[2].lon(), 40.0, epsilon = 1e-9);
        assert_abs_diff_eq!(line[2].lat(), 40.0, epsilon = 1e-9);
    }

    #[test]
    fn empty_linestring() {
        let line = Decoder::new()
            .as_linestring("LINESTRING EMPTY")
            .expect("valid linestring");
        assert!(line.is_empty());
    }

    #[test]
    fn real_world_linestrings() {
        let lines = [
            "LINESTRING (151.23941 -33.82436, 151.239761 -33.824387, 151.239913 -33.824402, 151.240036 -33.824418, 151.240097 -33.824425, 151.240158 -33.824433, 151.240417 -33.824463, 151.240692 -33.824482, 151.240798 -33.824471, 151.240921 -33.824437, 151.241012 -33.824387, 151.24118 -33.824276, 151.24147 -33.824055, 151.241958 -33.823746)",
            "LINESTRING (151.058837 -33.95028, 151.059005 -33.950257, 151.059005 -33.95023, 151.05902 -33.950207, 151.059036 -33.950192, 151.059036 -33.950192, 151.059051 -33.950184, 151.059066 -33.950173, 151.059097 -33.950165, 151.059127 -33.950165, 151.059158 -33.950177, 151.059188 -33.950196, 151.059204 -33.950223, 151.059219 -33.950249, 151.059326 -33.95023, 151.059326 -33.95023, 151.059631 -33.950177)",
            "LINESTRING (151.238677 -33.824341, 151.238922 -33.824341, 151.239242 -33.824345, 151.239761 -33.824387, 151.239913 -33.824402, 151.240036 -33.824418, 151.240097 -33.824425, 151.240158 -33.824433, 151.240417 -33.824463, 151.240692 -33.824482, 151.240798 -33.824471, 151.240921 -33.824437, 151.241012 -33.824387, 151.24118 -33.824276, 151.24147 -33.824055, 151.241836 -33.823826)",
            "LINESTRING (151.238769 -33.824341, 151.238922 -33.824341, 151.239242 -33.824345, 151.239761 -33.824387, 151.239913 -33.824402, 151.240036 -33.824418, 151.240097 -33.824425, 151.240158 -33.824433, 151.240417 -33.824463, 151.240692 -33.824482, 151.240798 -33.824471, 151.240921 -33.824437, 151.240997 -33.824566, 151.241058 -33.824616, 151.241134 -33.824643, 151.241226 -33.824681, 151.241561 -33.824841, 151.241897 -33.82499)",
        ];
        let expected_lengths = [14, 17, 16, 18];

        let decoder = Decoder::new();
        for (text, expected) in lines.iter().zip(expected_lengths) {
            let line = decoder.as_linestring(*text).expect("valid linestring");
            assert_eq!(line.len(), expected);
        }
    }

    #[test]
    fn polygon() {
        let polygon = Decoder::new()
            .as_polygon("POLYGON ((35 10, 45 45, 15 40, 10 20, 35 10), (20 30, 35 35, 30 20, 20 30))")
            .expect("valid polygon");

        assert_eq!(polygon.num_loops(), 2);
        assert_eq!(polygon.loops()[0].num_vertices(), 5);
        assert_eq!(polygon.loops()[1].num_vertices(), 4);
        assert!(polygon.contains_point(&SpherePoint::from_lonlat_degrees(20.0, 20.0)));
        assert!(!polygon.contains_point(&SpherePoint::from_lonlat_degrees(28.0, 29.0)));
    }

    #[test]
    fn polygon_excludes_far_side() {
        let polygon = Decoder::new()
            .as_polygon("POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0))")
            .expect("valid polygon");

        assert!(polygon.contains_point(&SpherePoint::from_lonlat_degrees(5.0, 5.0)));
        assert!(!polygon.contains_point(&SpherePoint::from_lonlat_degrees(-175.0, -5.0)));
        assert!(!polygon.contains_point(&SpherePoint::from_lonlat_degrees(-100.0, -40.0)));

        let reversed = Decoder::new()
            .as_polygon("POLYGON ((0 0, 0 10, 10 10, 10 0, 0 0))")
            .expect("valid polygon");
        assert!(reversed.contains_point(&SpherePoint::from_lonlat_degrees(5.0, 5.0)));
        assert!(!reversed.contains_point(&SpherePoint::from_lonlat_degrees(-175.0, -5.0)));
    }

    #[test]
    fn trailing_input() {
        let decoder = Decoder::new();
        assert_matches!(
            decoder.as_point("POINT (1 2) POINT (3 4)"),
            Err(DecodeError::Parse(ParseError::Syntax(_)))
        );
        assert_matches!(
            decoder.as_point("POINT(1 2) garbage"),
            Err(DecodeError::Parse(ParseError::Syntax(_)))
        );
        assert_matches!(
            decoder.as_point("POINT(1 2))"),
            Err(DecodeError::Parse(ParseError::Syntax(_)))
        );
    }

    #[test]
    fn non_finite_point() {
        assert_matches!(
            Decoder::new().as_point("POINT(1e400 0)"),
            Err(DecodeError::CoordinateOutOfRange { .. })
        );
    }

    #[test]
    fn multi_geometries() {
        let decoder = Decoder::new();

        let points = decoder
            .as_multi_point("MULTIPOINT ((10 40), (40 30), (20 20), (30 10))")
            .expect("valid multipoint");
        assert_eq!(points.len(), 4);
        assert_abs_diff_eq!(points[3].lon(), 30.0, epsilon = 1e-9);

        let lines = decoder
            .as_multi_linestring("MULTILINESTRING ((10 10, 20 20, 10 40), (40 40, 30 30, 40 20, 30 10))")
            .expect("valid multilinestring");
        assert_eq!(lines.iter().map(|l| l.len()).collect::<Vec<_>>(), vec![3, 4]);

        let polygons = decoder
            .as_multi_polygon(
                "MULTIPOLYGON (((30 20, 45 40, 10 40, 30 20)), ((15 5, 40 10, 10 20, 5 10, 15 5)))",
            )
            .expect("valid multipolygon");
        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[0].loops()[0].num_vertices(), 4);
        assert_eq!(polygons[1].loops()[0].num_vertices(), 5);
    }

    #[test]
    fn kind_mismatch() {
        let decoder = Decoder::new();

        assert_matches!(
            decoder.as_polygon("POINT (1 2)"),
            Err(DecodeError::GeometryKindMismatch {
                requested: GeometryKind::Polygon,
                actual: GeometryKind::Point,
            })
        );
        assert_matches!(
            decoder.as_polygon("LINESTRING (1 2, 3 4)"),
            Err(DecodeError::GeometryKindMismatch {
                requested: GeometryKind::Polygon,
                actual: GeometryKind::LineString,
            })
        );
        assert_matches!(
            decoder.as_point("MULTIPOINT ((1 2))"),
            Err(DecodeError::GeometryKindMismatch {
                requested: GeometryKind::Point,
                actual: GeometryKind::MultiPoint,
            })
        );

        let err = decoder
            .as_multi_polygon("POLYGON ((0 0, 1 0, 1 1, 0 0))")
            .expect_err("not a multipolygon");
        assert_eq!(
            err.to_string(),
            "expected MultiPolygon geometry, but found Polygon"
        );
    }

    #[test]
    fn absent_input() {
        let decoder = Decoder::new();
        assert_matches!(
            decoder.as_linestring(None::<&str>),
            Err(DecodeError::Parse(ParseError::MissingInput))
        );
        assert_matches!(
            decoder.as_point(None::<&mut std::fs::File>),
            Err(DecodeError::Parse(ParseError::MissingInput))
        );
    }

    #[test]
    fn empty_input() {
        let decoder = Decoder::new();
        assert_matches!(
            decoder.as_linestring(""),
            Err(DecodeError::Parse(ParseError::EmptyInput))
        );
        assert_matches!(
            decoder.as_multi_polygon(&b""[..]),
            Err(DecodeError::Parse(ParseError::EmptyInput))
        );
    }

    #[test]
    fn parse_errors_propagated() {
        assert_matches!(
            Decoder::new().as_point("POINT (1 2"),
            Err(DecodeError::Parse(ParseError::Syntax(_)))
        );
    }

    #[test]
    fn reader_input() {
        let mut reader = std::io::Cursor::new("POINT (10 20)");
        let point = Decoder::new().as_point(&mut reader).expect("valid point");
        assert_abs_diff_eq!(point.lon(), 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(point.lat(), 20.0, epsilon = 1e-9);
    }

    #[test]
    fn custom_parser_circular_string() {
        let parser = FixedParser::new(GeometryAst::CircularString(AstLineString::new(vec![
            AstPoint::new(0.0, 0.0),
            AstPoint::new(1.0, 1.0),
            AstPoint::new(2.0, 0.0),
        ])));
        let decoder = Decoder::with_parser(&parser, DecoderOptions::default());

        let err = decoder.as_linestring("ignored").expect_err("unsupported");
        assert_matches!(
            err,
            DecodeError::UnsupportedGeometryKind(GeometryKind::CircularString)
        );
        assert!(err.to_string().contains("CircularLinestring"));
        assert_eq!(parser.calls.get(), 1);
    }

    #[test]
    fn custom_parser_multi_polygon() {
        let ring = |x: f64| {
            AstPolygon::new(vec![AstLineString::new(vec![
                AstPoint::new(x, 0.0),
                AstPoint::new(x + 1.0, 0.0),
                AstPoint::new(x + 1.0, 1.0),
                AstPoint::new(x, 0.0),
            ])])
        };
        let parser = FixedParser::new(GeometryAst::MultiPolygon(vec![ring(10.0), ring(20.0)]));
        let decoder = Decoder::with_parser(parser, DecoderOptions::default());

        let polygons = decoder.as_multi_polygon("ignored").expect("valid multipolygon");
        assert_eq!(polygons.len(), 2);
        for (polygon, lon) in polygons.iter().zip([10.0, 20.0]) {
            assert_eq!(polygon.num_loops(), 1);
            assert_eq!(polygon.loops()[0].num_vertices(), 4);
            assert_abs_diff_eq!(polygon.loops()[0].vertices()[0].lon(), lon, epsilon = 1e-9);
        }
    }

    #[test]
    fn options_applied() {
        let decoder = Decoder::with_options(
            DecoderOptions::default()
                .with_ring_policy(RingPolicy::RequireClosed)
                .with_range_check(true),
        );
        assert_eq!(decoder.options().ring_policy(), RingPolicy::RequireClosed);

        assert_matches!(
            decoder.as_polygon("POLYGON ((0 0, 1 0, 1 1))"),
            Err(DecodeError::UnclosedRing { polygon: 0, ring: 0 })
        );
        assert_matches!(
            decoder.as_point("POINT (200 10)"),
            Err(DecodeError::CoordinateOutOfRange { .. })
        );
        assert_matches!(
            decoder.as_polygon("POLYGON ((0 0, 1 0, 1 1, 0 0))"),
            Ok(polygon) if polygon.num_loops() == 1
        );
    }

    #[test]
    fn shared_between_threads() {
        let decoder = Decoder::new();
        std::thread::scope(|scope| {
            for i in 0..4 {
                let decoder = &decoder;
                scope.spawn(move || {
                    let point = decoder
                        .as_point(format!("POINT ({i} {i})").as_str())
                        .expect("valid point");
                    assert_abs_diff_eq!(point.lon(), i as f64, epsilon = 1e-9);
                });
            }
        });
    }
}
