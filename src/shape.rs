//! Silhouettes and the positions they hand out to words.
//!
//! Every shape is centred on the canvas and sized from its shorter side.
//! Circle and spiral are sampled by angle; the polygonal and curved
//! outlines are turned into a [`ClosedPolyline`] and sampled by arc length.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::path::ClosedPolyline;
use crate::Error;

// =============================================================================
// Geometry Primitives
// =============================================================================

/// Smallest width or height a canvas may have.
pub const MIN_CANVAS_DIMENSION: u32 = 100;

/// Integer pixel coordinate on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        dx.hypot(dy)
    }
}

/// Canvas dimensions in pixels. Both sides are at least
/// [`MIN_CANVAS_DIMENSION`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanvasSize {
    width: u32,
    height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Result<Self, Error> {
        if width < MIN_CANVAS_DIMENSION || height < MIN_CANVAS_DIMENSION {
            return Err(Error::Input(format!(
                "minimum image size is {MIN_CANVAS_DIMENSION} by {MIN_CANVAS_DIMENSION} pixels, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn center(&self) -> Point {
        Point::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    fn min_dimension(&self) -> i32 {
        self.width.min(self.height) as i32
    }
}

// =============================================================================
// Shapes
// =============================================================================

const CIRCLE_RADIUS_RATIO: f64 = 0.33;
const SPIRAL_INNER_RATIO: f64 = 0.4;
const SPIRAL_GROWTH_RATIO: f64 = 0.7;
const TRIANGLE_BASE_RATIO: f64 = 1.5;
const HEART_RESOLUTION: usize = 200;
// Half-width of the parametric heart curve in its own units.
const HEART_CURVE_EXTENT: f64 = 17.0;
const STAR_VERTICES: usize = 10;

/// Silhouette the words are arranged along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Shape {
    #[default]
    Spiral,
    Circle,
    Square,
    Triangle,
    Heart,
    Star,
}

impl Shape {
    pub const ALL: [Shape; 6] = [
        Shape::Spiral,
        Shape::Circle,
        Shape::Square,
        Shape::Triangle,
        Shape::Heart,
        Shape::Star,
    ];

    /// Lenient lookup: case-insensitive, anything unrecognised becomes
    /// [`Shape::Spiral`].
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Shape::Spiral => "spiral",
            Shape::Circle => "circle",
            Shape::Square => "square",
            Shape::Triangle => "triangle",
            Shape::Heart => "heart",
            Shape::Star => "star",
        }
    }

    /// Maximum number of words the shape places.
    pub const fn capacity(self) -> usize {
        match self {
            Shape::Spiral => 50,
            Shape::Circle => 40,
            Shape::Square => 40,
            Shape::Triangle => 36,
            Shape::Heart => 48,
            Shape::Star => 50,
        }
    }

    pub const fn base_font_size(self) -> u32 {
        match self {
            Shape::Spiral | Shape::Circle => 14,
            Shape::Square | Shape::Triangle | Shape::Heart | Shape::Star => 12,
        }
    }

    /// Weight of the frequency-dependent part of the font size.
    pub const fn font_multiplier(self) -> u32 {
        match self {
            Shape::Spiral => 16,
            Shape::Circle | Shape::Heart | Shape::Star => 18,
            Shape::Square | Shape::Triangle => 20,
        }
    }

    /// Produces `min(count, capacity)` positions along the shape.
    pub fn sample_positions(self, size: CanvasSize, count: usize) -> Vec<Point> {
        let count = count.min(self.capacity());
        if count == 0 {
            return Vec::new();
        }

        match self {
            Shape::Spiral => spiral(size, count),
            Shape::Circle => circle(size, count),
            Shape::Square | Shape::Triangle | Shape::Heart | Shape::Star => self
                .outline(size)
                .map(|outline| {
                    outline
                        .sample_equidistant(count)
                        .into_iter()
                        .map(|sample| sample.point)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    /// Closed outline for the arc-length sampled shapes.
    pub fn outline(self, size: CanvasSize) -> Option<ClosedPolyline> {
        let vertices = match self {
            Shape::Spiral | Shape::Circle => return None,
            Shape::Square => square_vertices(size),
            Shape::Triangle => triangle_vertices(size),
            Shape::Heart => heart_vertices(size),
            Shape::Star => star_vertices(size),
        };
        Some(ClosedPolyline::new(vertices))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shape::ALL
            .into_iter()
            .find(|shape| shape.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownShape(s.to_string()))
    }
}

// =============================================================================
// Angular Samplers
// =============================================================================

fn circle_radius(size: CanvasSize) -> i32 {
    (f64::from(size.min_dimension()) * CIRCLE_RADIUS_RATIO) as i32
}

fn polar(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + (radius * angle.cos()) as i32,
        center.y + (radius * angle.sin()) as i32,
    )
}

fn circle(size: CanvasSize, count: usize) -> Vec<Point> {
    let center = size.center();
    let radius = f64::from(circle_radius(size));

    (0..count)
        .map(|i| polar(center, radius, 2.0 * PI * i as f64 / count as f64))
        .collect()
}

/// Two turns, radius growing linearly from `0.4 R` towards `1.1 R`.
fn spiral(size: CanvasSize, count: usize) -> Vec<Point> {
    let center = size.center();
    let radius = f64::from(circle_radius(size));

    (0..count)
        .map(|i| {
            let progress = i as f64 / count as f64;
            let angle = 4.0 * PI * progress;
            let r = radius * (SPIRAL_INNER_RATIO + SPIRAL_GROWTH_RATIO * progress);
            polar(center, r, angle)
        })
        .collect()
}

// =============================================================================
// Outlines
// =============================================================================

/// Clockwise from the top-left corner.
fn square_vertices(size: CanvasSize) -> Vec<Point> {
    let side = size.min_dimension() * 2 / 3;
    let left = (size.width() as i32 - side) / 2;
    let top = (size.height() as i32 - side) / 2;
    let right = left + side;
    let bottom = top + side;

    vec![
        Point::new(left, top),
        Point::new(right, top),
        Point::new(right, bottom),
        Point::new(left, bottom),
    ]
}

/// Apex, bottom-right, bottom-left.
fn triangle_vertices(size: CanvasSize) -> Vec<Point> {
    let center = size.center();
    let height = size.min_dimension() / 2;
    let base = (f64::from(height) * TRIANGLE_BASE_RATIO) as i32;

    vec![
        Point::new(center.x, center.y - height / 2),
        Point::new(center.x + base / 2, center.y + height / 2),
        Point::new(center.x - base / 2, center.y + height / 2),
    ]
}

fn heart_vertices(size: CanvasSize) -> Vec<Point> {
    let center = size.center();
    let scale = f64::from(size.min_dimension() / 3) / HEART_CURVE_EXTENT;

    let mut vertices: Vec<Point> = (0..HEART_RESOLUTION)
        .map(|i| {
            let t = 2.0 * PI * i as f64 / HEART_RESOLUTION as f64;
            let x = 16.0 * t.sin().powi(3);
            let y = 13.0 * t.cos()
                - 5.0 * (2.0 * t).cos()
                - 2.0 * (3.0 * t).cos()
                - (4.0 * t).cos();
            // Screen y grows downwards.
            Point::new(center.x + (x * scale) as i32, center.y - (y * scale) as i32)
        })
        .collect();

    // Start a quarter of the way round, on the right lobe.
    let quarter = vertices.len() / 4;
    vertices.rotate_left(quarter);
    vertices
}

/// Five points, alternating outer and inner radius, first vertex straight up.
fn star_vertices(size: CanvasSize) -> Vec<Point> {
    let center = size.center();
    let outer = size.min_dimension() / 3;
    let inner = outer / 2;

    (0..STAR_VERTICES)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / STAR_VERTICES as f64 - PI / 2.0;
            let radius = if i % 2 == 0 { outer } else { inner };
            polar(center, f64::from(radius), angle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(width: u32, height: u32) -> CanvasSize {
        CanvasSize::new(width, height).unwrap()
    }

    #[test]
    fn rejects_tiny_canvas() {
        assert!(CanvasSize::new(99, 400).is_err());
        assert!(CanvasSize::new(400, 99).is_err());
        assert!(CanvasSize::new(100, 100).is_ok());
    }

    #[test]
    fn lenient_lookup_falls_back_to_spiral() {
        assert_eq!(Shape::from_name("HEART"), Shape::Heart);
        assert_eq!(Shape::from_name("Star"), Shape::Star);
        assert_eq!(Shape::from_name("boogy-woogy"), Shape::Spiral);
        assert_eq!(Shape::from_name(""), Shape::Spiral);
    }

    #[test]
    fn strict_parse_rejects_unknown_names() {
        assert_eq!("Triangle".parse::<Shape>().unwrap(), Shape::Triangle);
        assert!(matches!(
            "hexagon".parse::<Shape>(),
            Err(Error::UnknownShape(name)) if name == "hexagon"
        ));
    }

    #[test]
    fn names_round_trip_through_parse() {
        for shape in Shape::ALL {
            assert_eq!(shape.to_string().parse::<Shape>().unwrap(), shape);
        }
    }

    #[test]
    fn positions_never_exceed_capacity() {
        let size = canvas(800, 600);
        for shape in Shape::ALL {
            let positions = shape.sample_positions(size, 500);
            assert_eq!(positions.len(), shape.capacity(), "{shape}");
        }
    }

    #[test]
    fn zero_count_yields_nothing() {
        let size = canvas(800, 600);
        for shape in Shape::ALL {
            assert!(shape.sample_positions(size, 0).is_empty());
        }
    }

    #[test]
    fn circle_points_are_evenly_spaced_by_angle() {
        let positions = Shape::Circle.sample_positions(canvas(800, 600), 10);
        assert_eq!(positions.len(), 10);

        // radius = trunc(600 * 0.33) = 198
        assert_eq!(positions[0], Point::new(598, 300));
        for (i, point) in positions.iter().enumerate() {
            let angle = 2.0 * PI * i as f64 / 10.0;
            let expected = Point::new(
                400 + (198.0 * angle.cos()) as i32,
                300 + (198.0 * angle.sin()) as i32,
            );
            assert_eq!(*point, expected, "point {i}");
            assert!((point.distance_to(Point::new(400, 300)) - 198.0).abs() < 1.5);
        }
    }

    #[test]
    fn spiral_moves_outwards() {
        let center = Point::new(400, 300);
        let positions = Shape::Spiral.sample_positions(canvas(800, 600), 50);
        let first = positions[0].distance_to(center);
        let last = positions[49].distance_to(center);

        assert_eq!(positions[0], Point::new(400 + (198.0 * 0.4) as i32, 300));
        assert!(last > first);
        assert!(last <= 198.0 * 1.1);
    }

    #[test]
    fn square_starts_at_top_left_and_halves_the_perimeter() {
        let positions = Shape::Square.sample_positions(canvas(800, 600), 2);
        // side = 600 * 2 / 3 = 400
        assert_eq!(positions, vec![Point::new(200, 100), Point::new(600, 500)]);
    }

    #[test]
    fn triangle_starts_at_apex() {
        let positions = Shape::Triangle.sample_positions(canvas(800, 600), 3);
        assert_eq!(positions[0], Point::new(400, 150));
    }

    #[test]
    fn star_starts_at_top_point() {
        let positions = Shape::Star.sample_positions(canvas(800, 600), 10);
        assert_eq!(positions[0], Point::new(400, 100));
    }

    #[test]
    fn heart_starts_on_right_lobe() {
        let positions = Shape::Heart.sample_positions(canvas(800, 600), 4);
        let scale = 200.0 / 17.0;
        assert_eq!(
            positions[0],
            Point::new(400 + (16.0 * scale) as i32, 300 - (4.0 * scale) as i32)
        );
    }

    #[test]
    fn outlines_stay_on_canvas() {
        for (width, height) in [(100, 100), (800, 600), (150, 1200)] {
            let size = canvas(width, height);
            for shape in Shape::ALL {
                for point in shape.sample_positions(size, shape.capacity()) {
                    assert!((0..width as i32).contains(&point.x), "{shape} {point:?}");
                    assert!((0..height as i32).contains(&point.y), "{shape} {point:?}");
                }
            }
        }
    }

    #[test]
    fn only_polygonal_shapes_have_outlines() {
        let size = canvas(800, 600);
        assert!(Shape::Spiral.outline(size).is_none());
        assert!(Shape::Circle.outline(size).is_none());
        assert_eq!(Shape::Square.outline(size).unwrap().perimeter(), 1600.0);
    }
}
