//! Points of the continuous drawing plane, and the vector math the geometry needs

use std::{
    fmt::Display,
    ops::{Add, Mul, Neg, Sub},
};

use serde::{Deserialize, Serialize};
use svg::node::element::path::Parameters;

/// Lengths at or below this are treated as zero
pub const EPSILON: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point(f32, f32);

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Point(x, y)
    }

    pub fn get(self) -> (f32, f32) {
        (self.0, self.1)
    }

    pub fn get_ref(&self) -> (f32, f32) {
        (self.0, self.1)
    }

    pub fn x(&self) -> f32 {
        self.0
    }

    pub fn y(&self) -> f32 {
        self.1
    }

    pub fn move_abs_x(&mut self, x: f32) {
        self.0 = x;
    }

    pub fn move_abs_y(&mut self, y: f32) {
        self.1 = y;
    }

    pub fn move_rel(&mut self, x: f32, y: f32) {
        self.0 += x;
        self.1 += y;
    }

    /// Squared length, when treated as a vector
    pub fn square(self) -> f32 {
        self * self
    }

    pub fn length(self) -> f32 {
        self.0.hypot(self.1)
    }

    /// Unit vector of the same direction, None for (near) zero vectors
    pub fn normalize(self) -> Option<Point> {
        let len = self.length();
        if len > EPSILON && len.is_finite() {
            Some(Point(self.0 / len, self.1 / len))
        } else {
            None
        }
    }

    /// Fixed 90° rotation, `(dx, dy) -> (dy, -dx)`.
    ///
    /// With y pointing down, this points to the left of the walking direction, which is the
    /// outside of a clockwise polygon.
    pub fn perp(self) -> Point {
        Point(self.1, -self.0)
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }

    /// Whether the two points are closer than [`EPSILON`]
    pub fn coincides(&self, other: &Point) -> bool {
        (*self - *other).length() <= EPSILON
    }
}

/// Distance of something from something else, in the form of `DistanceType`
pub trait Distance<T> {
    type DistanceType;
    fn distance(&self, dist_to: &T) -> Self::DistanceType;
}

impl Distance<Point> for Point {
    type DistanceType = f32;
    fn distance(&self, dist_to: &Point) -> f32 {
        (*self - *dist_to).length()
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point(-self.0, -self.1)
    }
}

/// Scaling
impl Mul<f32> for Point {
    type Output = Point;
    fn mul(self, rhs: f32) -> Point {
        Point(self.0 * rhs, self.1 * rhs)
    }
}

/// Dot product
impl Mul for Point {
    type Output = f32;
    fn mul(self, rhs: Point) -> f32 {
        self.0 * rhs.0 + self.1 * rhs.1
    }
}

impl From<Point> for (f32, f32) {
    fn from(point: Point) -> (f32, f32) {
        (point.0, point.1)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Point {
        Point(x, y)
    }
}

impl From<Point> for geo::Coord<f32> {
    fn from(point: Point) -> Self {
        geo::Coord {
            x: point.0,
            y: point.1,
        }
    }
}

impl From<Point> for Parameters {
    fn from(point: Point) -> Parameters {
        let (x, y) = point.into();
        vec![x, y].into()
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_rejects_zero_vector() {
        assert_eq!(Point::new(0., 0.).normalize(), None);
        assert_eq!(Point::new(3., 4.).normalize(), Some(Point::new(0.6, 0.8)));
    }

    #[test]
    fn perp_turns_left_in_screen_space() {
        // walking right along the top edge of a clockwise square, outside is up
        assert_eq!(Point::new(1., 0.).perp(), Point::new(0., -1.));
    }

    #[test]
    fn dot_and_square() {
        let p = Point::new(2., 3.);
        assert_eq!(p * Point::new(1., -1.), -1.);
        assert_eq!(p.square(), 13.);
        assert_eq!(p.distance(&Point::new(5., 7.)), 5.);
    }
}
