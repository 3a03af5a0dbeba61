//! Equal arc-length sampling along closed outlines.

use tracing::warn;

use crate::shape::Point;

/// A point on an outline together with the arc length walked to reach it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSample {
    pub point: Point,
    pub distance: f64,
}

/// Polygon whose last vertex connects back to the first.
#[derive(Debug, Clone)]
pub struct ClosedPolyline {
    vertices: Vec<Point>,
    perimeter: f64,
}

impl ClosedPolyline {
    pub fn new(vertices: Vec<Point>) -> Self {
        let perimeter = edges(&vertices).map(|(a, b)| a.distance_to(b)).sum();
        Self {
            vertices,
            perimeter,
        }
    }

    pub fn perimeter(&self) -> f64 {
        self.perimeter
    }

    /// Places `count` points at equal arc-length steps, the first one on the
    /// first vertex. An outline without length yields nothing.
    pub fn sample_equidistant(&self, count: usize) -> Vec<PathSample> {
        if count == 0 || self.vertices.is_empty() {
            return Vec::new();
        }
        if self.perimeter <= f64::EPSILON {
            warn!(
                vertices = self.vertices.len(),
                "outline has no length, nothing to sample"
            );
            return Vec::new();
        }

        let step = self.perimeter / count as f64;
        (0..count).map(|i| self.point_at(i as f64 * step)).collect()
    }

    /// Walks the edges in order until `distance` is reached and interpolates
    /// inside that edge. Offsets are truncated towards zero.
    pub fn point_at(&self, distance: f64) -> PathSample {
        let mut travelled = 0.0;

        for (start, end) in edges(&self.vertices) {
            let length = start.distance_to(end);
            if length <= f64::EPSILON {
                continue;
            }

            if travelled + length >= distance {
                let ratio = ((distance - travelled) / length).clamp(0.0, 1.0);
                let dx = f64::from(end.x - start.x);
                let dy = f64::from(end.y - start.y);
                return PathSample {
                    point: Point::new(
                        start.x + (dx * ratio) as i32,
                        start.y + (dy * ratio) as i32,
                    ),
                    distance: travelled + ratio * length,
                };
            }
            travelled += length;
        }

        // Rounding pushed the target past the last edge: that is the start.
        PathSample {
            point: self.vertices.first().copied().unwrap_or_default(),
            distance: self.perimeter,
        }
    }
}

fn edges(vertices: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| (vertices[i], vertices[(i + 1) % n]))
}
