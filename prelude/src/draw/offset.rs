//! Outward offsetting of closed vertex loops, for the halo drawn around regions

use log::debug;

use super::{Point, Shape};

/// Nearest point before and after `i` that does not coincide with it, walking around the loop
fn distinct_neighbours(points: &[Point], i: usize) -> (Option<Point>, Option<Point>) {
    let n = points.len();
    let cur = points[i];
    let prev = (1..n)
        .map(|k| points[(i + n - k) % n])
        .find(|p| !p.coincides(&cur));
    let next = (1..n)
        .map(|k| points[(i + k) % n])
        .find(|p| !p.coincides(&cur));
    (prev, next)
}

/// Moves every vertex of the closed loop `points` by `distance` away from the loop's inside.
///
/// The direction is the normalized sum of the two adjacent edges' normals, where an edge's
/// normal is its direction turned by `(dx, dy) -> (dy, -dx)`. That rotation points outward for
/// loops running clockwise on screen, so counter-clockwise loops get their normals flipped.
///
/// Coincident neighbours are skipped over when finding the adjacent edges. Vertices whose
/// edges cancel out (a fold back onto itself) or that have no distinct neighbour stay where
/// they are. Self-intersections of the result are not resolved.
pub fn offset_outward(points: &[Point], distance: f32) -> Vec<Point> {
    let distance = if distance.is_finite() {
        distance
    } else {
        debug!("Non-finite offset distance {distance}, leaving the loop as is");
        0.
    };
    let orientation = Shape::new(points).without_duplicates().orientation();

    (0..points.len())
        .map(|i| {
            let cur = points[i];
            let (prev, next) = distinct_neighbours(points, i);
            let n1 = prev.and_then(|prev| (cur - prev).perp().normalize());
            let n2 = next.and_then(|next| (next - cur).perp().normalize());

            let normal = match (n1, n2) {
                (Some(n1), Some(n2)) => (n1 + n2).normalize(),
                (Some(n), None) | (None, Some(n)) => Some(n),
                (None, None) => None,
            };

            match normal {
                Some(normal) => cur + normal * (distance * orientation),
                None => {
                    debug!("Vertex {i} at {cur} has no usable normal, not offsetting it");
                    cur
                }
            }
        })
        .collect()
}
