//! Vec of Points forming a closed loop, with the helper methods the region geometry needs

use geo::{winding_order::WindingOrder, LineString, Winding};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use super::{point::Distance, Point};

/// Closed vertex loop. The last point connects back to the first, it is not repeated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape(Vec<Point>);

impl Shape {
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn new(points: &[Point]) -> Self {
        Shape(points.to_owned())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Shoelace sum (twice the signed area). Positive when clockwise on screen (y down).
    pub fn area_signed(&self) -> f32 {
        let len = self.0.len();
        let mut area = 0.;
        for i in 0..len {
            let (x0, y0) = self.0[i].get();
            let (x1, y1) = self.0[(i + 1) % len].get();

            area += x0 * y1 - x1 * y0;
        }
        area
    }

    pub fn area(&self) -> f32 {
        self.area_signed().abs() / 2.
    }

    /// Vertex average, None for an empty shape
    pub fn centroid(&self) -> Option<Point> {
        if self.0.is_empty() {
            return None;
        }
        let len = self.0.len();
        let (xs, ys): (Vec<_>, Vec<_>) = self.0.iter().map(Point::get_ref).unzip();
        Some(Point::new(
            xs.into_iter().sum::<f32>() / len as f32,
            ys.into_iter().sum::<f32>() / len as f32,
        ))
    }

    /// Whether the loop runs clockwise as seen on screen.
    ///
    /// `geo` measures winding with y pointing up, so its counter-clockwise is our clockwise.
    /// Degenerate loops (no area) count as clockwise.
    pub fn is_clockwise(&self) -> bool {
        if self.0.len() < 3 {
            return true;
        }
        let line: LineString<f32> = self.clone().into();
        !matches!(line.winding_order(), Some(WindingOrder::Clockwise))
    }

    /// `1.` for clockwise (screen) loops, `-1.` otherwise
    pub fn orientation(&self) -> f32 {
        if self.is_clockwise() {
            1.
        } else {
            -1.
        }
    }

    /// Drops consecutive coincident points, the wrap-around from last to first included
    pub fn without_duplicates(&self) -> Shape {
        let mut points = self.0.clone();
        points.dedup_by(|a, b| a.coincides(b));
        while points.len() > 1 && points[0].coincides(&points[points.len() - 1]) {
            points.pop();
        }
        Shape(points)
    }

    /// Length of the shortest edge, None for an empty shape
    pub fn shortest_edge(&self) -> Option<f32> {
        let len = self.0.len();
        (0..len)
            .map(|i| self.0[i].distance(&self.0[(i + 1) % len]))
            .min_by(f32::total_cmp)
    }
}

impl Distance<Point> for Shape {
    type DistanceType = f32;
    /// Farthest vertex from the point, 0 for an empty shape
    fn distance(&self, dist_to: &Point) -> f32 {
        self.0
            .iter()
            .map(|p| p.distance(dist_to))
            .fold(0., f32::max)
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"")?;
        for (n, point) in self.points().iter().enumerate() {
            let c = if n == 0 { "M" } else { "L" };
            write!(f, "{c} {},{} ", point.x(), point.y())?;
        }
        write!(f, "Z\"")
    }
}

impl From<Vec<Point>> for Shape {
    fn from(points: Vec<Point>) -> Shape {
        Shape(points)
    }
}

impl From<Shape> for Vec<Point> {
    fn from(shape: Shape) -> Vec<Point> {
        shape.0
    }
}

impl From<Shape> for LineString<f32> {
    fn from(shape: Shape) -> Self {
        let mut points = shape.0;
        if let Some(&first) = points.first() {
            points.push(first);
        }
        points.into_iter().map(geo::Coord::from).collect::<Vec<_>>().into()
    }
}
