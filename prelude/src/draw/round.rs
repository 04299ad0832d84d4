//! Corner rounding: a closed vertex loop becomes straight runs joined by quadratic curves

use log::debug;

use super::{Path, PathCommand, Point, Shape};

/// Rounds every corner of the closed loop `points`.
///
/// Each corner starts `radius` before the vertex along the incoming edge and ends `radius`
/// after it along the outgoing edge, with the vertex itself as the curve's control point. The
/// path opens with a move to the first corner's entry and ends with a close.
///
/// Fewer than 3 points (after dropping coincident neighbours) give an empty path. A radius
/// above half the shortest edge makes neighbouring corners overlap: the output then
/// self-intersects, but stays finite.
pub fn round_corners(points: &[Point], radius: f32) -> Path {
    if points.len() < 3 {
        return Path::new();
    }

    let shape = Shape::new(points).without_duplicates();
    let points = shape.points();
    let n = points.len();
    if n < 3 {
        debug!("Loop of {n} distinct points left after dropping duplicates, nothing to round");
        return Path::new();
    }

    let radius = if radius.is_finite() {
        radius
    } else {
        debug!("Non-finite corner radius {radius}, drawing sharp corners");
        0.
    };
    if let Some(shortest) = shape.shortest_edge() {
        if radius > shortest / 2. {
            debug!("Corner radius {radius} exceeds half of the shortest edge ({shortest})");
        }
    }

    let mut path = Path::new();
    for i in 0..n {
        let prev = points[(i + n - 1) % n];
        let cur = points[i];
        let next = points[(i + 1) % n];

        // duplicates are gone, so these only fall back on sub-epsilon float noise
        let u_in = (cur - prev).normalize();
        let u_out = (next - cur).normalize();
        let (u_in, u_out) = match (u_in, u_out) {
            (Some(u_in), Some(u_out)) => (u_in, u_out),
            (Some(u), None) | (None, Some(u)) => (u, u),
            (None, None) => (Point::new(0., 0.), Point::new(0., 0.)),
        };

        let entry = cur - u_in * radius;
        let exit = cur + u_out * radius;

        path.push(if i == 0 {
            PathCommand::MoveTo(entry)
        } else {
            PathCommand::LineTo(entry)
        });
        path.push(PathCommand::QuadCurveTo {
            control: cur,
            end: exit,
        });
    }
    path.push(PathCommand::Close);
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0., 0.),
            Point::new(10., 0.),
            Point::new(10., 10.),
            Point::new(0., 10.),
        ]
    }

    #[test]
    fn degenerate_input_draws_nothing() {
        assert!(round_corners(&[], 2.).is_empty());
        assert!(round_corners(&[Point::new(0., 0.), Point::new(1., 1.)], 2.).is_empty());
        // three points, but only two distinct ones
        let folded = [Point::new(0., 0.), Point::new(5., 0.), Point::new(5., 0.)];
        assert!(round_corners(&folded, 1.).is_empty());
    }

    #[test]
    fn square_gets_four_corners() {
        let path = round_corners(&square(), 2.);
        assert!(path.is_closed());
        assert_eq!(path.curve_count(), 4);
        assert_eq!(path.segment_count(), 4);
        assert_eq!(path.len(), 9);
        assert_eq!(
            path.commands()[0..2],
            [
                PathCommand::MoveTo(Point::new(0., 2.)),
                PathCommand::QuadCurveTo {
                    control: Point::new(0., 0.),
                    end: Point::new(2., 0.),
                },
            ]
        );
        assert_eq!(path.commands()[2], PathCommand::LineTo(Point::new(8., 0.)));
    }

    #[test]
    fn zero_radius_keeps_sharp_corners() {
        let path = round_corners(&square(), 0.);
        for command in path.commands() {
            if let PathCommand::QuadCurveTo { control, end } = command {
                assert_eq!(control, end);
            }
        }
    }

    #[test]
    fn duplicate_vertex_is_absorbed() {
        let mut points = square();
        points.insert(2, Point::new(10., 0.));
        let path = round_corners(&points, 2.);
        assert!(path.is_finite());
        assert_eq!(path.curve_count(), 4);
    }

    #[test]
    fn non_finite_radius_never_leaks() {
        assert!(round_corners(&square(), f32::NAN).is_finite());
        assert!(round_corners(&square(), f32::INFINITY).is_finite());
    }
}
