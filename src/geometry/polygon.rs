//! Planar polygon helpers over plain coordinate rings.
//!
//! Rings are open (the last vertex is not repeated) and are interpreted in the
//! lon/lat plane. Closed rings coming from GeoJSON are accepted too, the
//! duplicated closing vertex only adds a zero-length edge.

use crate::geometry::GeoPoint;

const EPSILON: f64 = 1e-12;

/// Boundary-inclusive point-in-polygon test (crossing number).
pub fn contains(ring: &[GeoPoint], point: GeoPoint) -> bool {
    if ring.len() < 3 {
        return false;
    }
    let (px, py) = point.xy();

    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (xi, yi) = ring[i].xy();
        let (xj, yj) = ring[j].xy();

        if on_segment((xj, yj), (xi, yi), (px, py)) {
            return true;
        }

        if (yi > py) != (yj > py) {
            let x_cross = xi + (py - yi) * (xj - xi) / (yj - yi);
            if px < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

fn signed_area(ring: &[GeoPoint]) -> f64 {
    let n = ring.len();
    let mut sum = 0.0;
    for i in 0..n {
        let (x0, y0) = ring[i].xy();
        let (x1, y1) = ring[(i + 1) % n].xy();
        sum += x0 * y1 - x1 * y0;
    }
    sum / 2.0
}

/// Area-weighted centroid. Falls back to the vertex mean for zero-area rings.
pub fn centroid(ring: &[GeoPoint]) -> Option<GeoPoint> {
    if ring.is_empty() {
        return None;
    }

    let area = signed_area(ring);
    if area.abs() < EPSILON {
        let n = ring.len() as f64;
        let lat = ring.iter().map(|p| p.latitude).sum::<f64>() / n;
        let lon = ring.iter().map(|p| p.longitude).sum::<f64>() / n;
        return Some(GeoPoint::new(lat, lon));
    }

    let n = ring.len();
    let (mut cx, mut cy) = (0.0, 0.0);
    for i in 0..n {
        let (x0, y0) = ring[i].xy();
        let (x1, y1) = ring[(i + 1) % n].xy();
        let cross = x0 * y1 - x1 * y0;
        cx += (x0 + x1) * cross;
        cy += (y0 + y1) * cross;
    }
    let factor = 1.0 / (6.0 * area);
    Some(GeoPoint::new(cy * factor, cx * factor))
}

/// True if the quadrilateral has finite, distinct corners, a non-zero area and
/// no crossing edges.
pub fn is_simple_quad(quad: &[GeoPoint; 4]) -> bool {
    if !quad.iter().all(GeoPoint::is_finite) {
        return false;
    }
    for i in 0..4 {
        for j in (i + 1)..4 {
            if quad[i] == quad[j] {
                return false;
            }
        }
    }
    if signed_area(quad).abs() < EPSILON {
        return false;
    }

    // only opposite edges can cross in a quadrilateral
    let xy: Vec<(f64, f64)> = quad.iter().map(GeoPoint::xy).collect();
    !segments_intersect(xy[0], xy[1], xy[2], xy[3]) && !segments_intersect(xy[1], xy[2], xy[3], xy[0])
}

fn orientation(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> f64 {
    (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0)
}

fn on_segment(a: (f64, f64), b: (f64, f64), p: (f64, f64)) -> bool {
    orientation(a, b, p).abs() < EPSILON
        && p.0 >= a.0.min(b.0) - EPSILON
        && p.0 <= a.0.max(b.0) + EPSILON
        && p.1 >= a.1.min(b.1) - EPSILON
        && p.1 <= a.1.max(b.1) + EPSILON
}

fn segments_intersect(p1: (f64, f64), p2: (f64, f64), q1: (f64, f64), q2: (f64, f64)) -> bool {
    let d1 = orientation(q1, q2, p1);
    let d2 = orientation(q1, q2, p2);
    let d3 = orientation(p1, p2, q1);
    let d4 = orientation(p1, p2, q2);

    if ((d1 > EPSILON && d2 < -EPSILON) || (d1 < -EPSILON && d2 > EPSILON))
        && ((d3 > EPSILON && d4 < -EPSILON) || (d3 < -EPSILON && d4 > EPSILON))
    {
        return true;
    }

    on_segment(q1, q2, p1) || on_segment(q1, q2, p2) || on_segment(p1, p2, q1) || on_segment(p1, p2, q2)
}

#[cfg(test)]
mod tests {
    use super::*;

    // UL, UR, LR, LL
    fn square() -> [GeoPoint; 4] {
        [
            GeoPoint::new(35.0, -119.0),
            GeoPoint::new(35.0, -117.0),
            GeoPoint::new(33.0, -117.0),
            GeoPoint::new(33.0, -119.0),
        ]
    }

    #[test]
    fn test_contains_interior_point() {
        assert!(contains(&square(), GeoPoint::new(34.0, -118.0)));
    }

    #[test]
    fn test_contains_is_boundary_inclusive() {
        let quad = square();
        assert!(contains(&quad, GeoPoint::new(35.0, -118.0)), "edge");
        assert!(contains(&quad, GeoPoint::new(33.0, -119.0)), "corner");
    }

    #[test]
    fn test_excludes_outside_point() {
        assert!(!contains(&square(), GeoPoint::new(10.0, 10.0)));
        assert!(!contains(&square(), GeoPoint::new(34.0, -116.99)));
    }

    #[test]
    fn test_contains_closed_ring() {
        let mut ring = square().to_vec();
        ring.push(ring[0]);
        assert!(contains(&ring, GeoPoint::new(34.5, -117.5)));
        assert!(!contains(&ring, GeoPoint::new(36.0, -117.5)));
    }

    #[test]
    fn test_centroid_of_square() {
        let c = centroid(&square()).unwrap();
        assert!((c.latitude - 34.0).abs() < 1e-9);
        assert!((c.longitude + 118.0).abs() < 1e-9);
    }

    #[test]
    fn test_centroid_is_area_weighted() {
        // trapezoid: vertex mean lies at y = 0.5, area centroid lower
        let ring = [
            GeoPoint::new(1.0, 0.0),
            GeoPoint::new(1.0, 1.0),
            GeoPoint::new(0.0, 3.0),
            GeoPoint::new(0.0, 0.0),
        ];
        let c = centroid(&ring).unwrap();
        assert!(c.latitude < 0.5, "got {}", c.latitude);
    }

    #[test]
    fn test_simple_quad_accepts_square() {
        assert!(is_simple_quad(&square()));
    }

    #[test]
    fn test_simple_quad_rejects_bowtie() {
        let q = square();
        // swapping LR and LL makes the edges cross
        let bowtie = [q[0], q[1], q[3], q[2]];
        assert!(!is_simple_quad(&bowtie));
    }

    #[test]
    fn test_simple_quad_rejects_degenerate() {
        let collinear = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(0.0, 2.0),
            GeoPoint::new(0.0, 3.0),
        ];
        assert!(!is_simple_quad(&collinear));

        let q = square();
        assert!(!is_simple_quad(&[q[0], q[0], q[2], q[3]]));
        assert!(!is_simple_quad(&[q[0], q[1], q[2], GeoPoint::new(f64::NAN, 0.0)]));
    }
}
