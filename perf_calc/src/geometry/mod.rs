//! Basic geometry primitives for chart interpolation.

pub mod point;
pub use point::Point;

pub mod point3;
pub use point3::Point3;

/// Returns twice the signed area of the triangle `p1 p2 p3` via the
/// cross-product form. Positive for counter-clockwise winding.
pub fn signed_area2(p1: Point, p2: Point, p3: Point) -> f64 {
    (p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)
}

/// Returns `true` if `p` lies inside triangle `abc`. Points on an edge or
/// vertex count as inside; only a mix of strictly positive and strictly
/// negative half-plane signs puts the point outside.
pub fn point_in_triangle(p: Point, a: Point, b: Point, c: Point) -> bool {
    let d1 = signed_area2(p, a, b);
    let d2 = signed_area2(p, b, c);
    let d3 = signed_area2(p, c, a);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

    !(has_neg && has_pos)
}

/// Area of triangle `abc` using the shoelace formula.
pub fn triangle_area(a: Point, b: Point, c: Point) -> f64 {
    0.5 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)).abs()
}

/// Euclidean distance between `a` and `b`.
pub fn distance(a: Point, b: Point) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Returns `true` if all given samples share identical x, y and z.
/// Vacuously true for fewer than two points.
pub fn points_equal(points: &[Point3]) -> bool {
    match points.split_first() {
        Some((first, rest)) => rest
            .iter()
            .all(|p| p.x == first.x && p.y == first.y && p.z == first.z),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_area2_is_twice_triangle_area() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(4.0, 0.0);
        let c = Point::new(0.0, 3.0);
        assert!((signed_area2(a, b, c).abs() - 12.0).abs() < 1e-9);
        assert!((triangle_area(a, b, c) - 6.0).abs() < 1e-9);
    }

    #[test]
    fn signed_area2_sign_follows_winding() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let c = Point::new(0.0, 1.0);
        assert!(signed_area2(a, b, c) > 0.0);
        assert!(signed_area2(a, c, b) < 0.0);
    }

    #[test]
    fn point_in_triangle_interior_and_exterior() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        let c = Point::new(0.0, 10.0);
        assert!(point_in_triangle(Point::new(2.0, 2.0), a, b, c));
        assert!(!point_in_triangle(Point::new(8.0, 8.0), a, b, c));
        assert!(!point_in_triangle(Point::new(-1.0, 1.0), a, b, c));
    }

    #[test]
    fn point_in_triangle_includes_boundary() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        let c = Point::new(0.0, 10.0);
        // Vertices themselves test as inside.
        for p in [a, b, c] {
            assert!(point_in_triangle(p, a, b, c));
        }
        // Edge midpoint.
        assert!(point_in_triangle(Point::new(5.0, 0.0), a, b, c));
        assert!(point_in_triangle(Point::new(5.0, 5.0), a, b, c));
    }

    #[test]
    fn distance_is_euclidean() {
        let d = distance(Point::new(1.0, 2.0), Point::new(4.0, 6.0));
        assert!((d - 5.0).abs() < 1e-9);
    }

    #[test]
    fn points_equal_cases() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let q = Point3::new(1.0, 2.0, 4.0);
        assert!(points_equal(&[]));
        assert!(points_equal(&[p]));
        assert!(points_equal(&[p, p, p]));
        assert!(!points_equal(&[p, q]));
        assert!(!points_equal(&[p, p, q]));
    }
}
