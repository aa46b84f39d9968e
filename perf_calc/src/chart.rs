//! Scattered-point chart interpolation: surface fitting, triangle location
//! and chained evaluation of digitized performance charts.

use std::fmt;

use crate::geometry::{distance, point_in_triangle, points_equal, triangle_area, Point, Point3};

/// Failure to derive a `z = f(x, y)` surface from sample points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitError {
    /// The two points of a line fit coincide in both chart axes.
    CoincidentPoints,
    /// The three points define a vertical plane that cannot be solved for z.
    VerticalPlane,
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoincidentPoints => {
                write!(f, "insufficient variation to define a function: x and y are constant")
            }
            Self::VerticalPlane => write!(f, "plane is vertical; cannot solve for z"),
        }
    }
}

impl std::error::Error for FitError {}

/// Failure while evaluating one chart of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartError {
    /// No triangle of samples bracketing the query point could be located.
    NoTriangle,
    /// The located samples could not produce a surface function.
    Fit(FitError),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTriangle => write!(f, "no valid triangle found for the given points"),
            Self::Fit(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ChartError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Fit(err) => Some(err),
            Self::NoTriangle => None,
        }
    }
}

impl From<FitError> for ChartError {
    fn from(err: FitError) -> Self {
        Self::Fit(err)
    }
}

/// Closed-form surface function fitted through chart samples.
///
/// The variant records which inputs the function depends on, so fits through
/// degenerate samples (duplicate points from flat chart regions) stay
/// representable alongside proper planes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceFn {
    /// Flat surface `z = c`.
    Constant(f64),
    /// Line depending on x only: `z = m * x + b`.
    LineX { m: f64, b: f64 },
    /// Line depending on y only: `z = m * y + b`.
    LineY { m: f64, b: f64 },
    /// Plane `a*x + b*y + c*z + d = 0` solved for z.
    Plane { a: f64, b: f64, c: f64, d: f64 },
}

impl SurfaceFn {
    /// Evaluates the surface at `(x, y)`.
    pub fn eval(&self, x: f64, y: f64) -> f64 {
        match *self {
            Self::Constant(c) => c,
            Self::LineX { m, b } => m * x + b,
            Self::LineY { m, b } => m * y + b,
            Self::Plane { a, b, c, d } => (-a * x - b * y - d) / c,
        }
    }
}

impl fmt::Display for SurfaceFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = |v: f64| if v >= 0.0 { '+' } else { '-' };
        match *self {
            Self::Constant(c) => write!(f, "z = {c}"),
            Self::LineX { m, b } => write!(f, "z = {m} * x {} {}", sign(b), b.abs()),
            Self::LineY { m, b } => write!(f, "z = {m} * y {} {}", sign(b), b.abs()),
            Self::Plane { a, b, c, d } => {
                let px = -a / c;
                let py = -b / c;
                let pd = -d / c;
                write!(
                    f,
                    "z = {px} * x {} {} * y {} {}",
                    sign(py),
                    py.abs(),
                    sign(pd),
                    pd.abs()
                )
            }
        }
    }
}

fn subtract(a: Point3, b: Point3) -> Point3 {
    Point3::new(a.x - b.x, a.y - b.y, a.z - b.z)
}

fn cross(a: Point3, b: Point3) -> Point3 {
    Point3 {
        x: a.y * b.z - a.z * b.y,
        y: a.z * b.x - a.x * b.z,
        z: a.x * b.y - a.y * b.x,
    }
}

/// Fits a one-variable line through two samples, choosing the dependent axis
/// by whichever of Δx, Δy varies. Δx is checked first, so samples differing
/// in both axes produce a line in x.
pub fn line_from_two_points(p1: Point3, p2: Point3) -> Result<SurfaceFn, FitError> {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;

    if dx != 0.0 {
        let m = (p2.z - p1.z) / dx;
        Ok(SurfaceFn::LineX { m, b: p1.z - m * p1.x })
    } else if dy != 0.0 {
        let m = (p2.z - p1.z) / dy;
        Ok(SurfaceFn::LineY { m, b: p1.z - m * p1.y })
    } else {
        Err(FitError::CoincidentPoints)
    }
}

/// Fits a surface through three samples.
///
/// Duplicate samples are meaningful in digitized charts (flat regions), so
/// the degenerate cases collapse in a fixed order: all three equal yields a
/// constant, a coincident pair falls back to the two-point line through the
/// remaining distinct sample and the pair's representative, and only fully
/// distinct samples go through the cross-product plane fit.
pub fn plane_from_three_points(a: Point3, b: Point3, c: Point3) -> Result<SurfaceFn, FitError> {
    if points_equal(&[a, b, c]) {
        return Ok(SurfaceFn::Constant(a.z));
    }
    if points_equal(&[a, b]) {
        return line_from_two_points(c, a);
    }
    if points_equal(&[a, c]) {
        return line_from_two_points(b, a);
    }
    if points_equal(&[b, c]) {
        return line_from_two_points(a, b);
    }

    let ab = subtract(b, a);
    let ac = subtract(c, a);
    let normal = cross(ab, ac);
    let d = -(normal.x * a.x + normal.y * a.y + normal.z * a.z);

    if normal.z == 0.0 {
        return Err(FitError::VerticalPlane);
    }

    Ok(SurfaceFn::Plane {
        a: normal.x,
        b: normal.y,
        c: normal.z,
        d,
    })
}

/// Which chart axis a partition is taken over.
#[derive(Debug, Clone, Copy)]
enum Axis {
    X,
    Y,
}

fn axis_value(p: &Point3, axis: Axis) -> f64 {
    match axis {
        Axis::X => p.x,
        Axis::Y => p.y,
    }
}

fn target_value(target: Point, axis: Axis) -> f64 {
    match axis {
        Axis::X => target.x,
        Axis::Y => target.y,
    }
}

/// Nearest sample at or above `target` on `axis`. Candidates are ordered by
/// axis value ascending, then stably by distance to the target, so distance
/// ties resolve toward the lower axis value.
fn nearest_at_or_above(points: &[Point3], target: Point, axis: Axis) -> Option<Point3> {
    let threshold = target_value(target, axis);
    let mut part: Vec<Point3> = points
        .iter()
        .copied()
        .filter(|p| axis_value(p, axis) >= threshold)
        .collect();
    part.sort_by(|a, b| axis_value(a, axis).partial_cmp(&axis_value(b, axis)).unwrap());
    part.sort_by(|a, b| {
        distance(a.xy(), target)
            .partial_cmp(&distance(b.xy(), target))
            .unwrap()
    });
    part.first().copied()
}

/// Nearest sample at or below `target` on `axis`; axis ordering descending,
/// otherwise as [`nearest_at_or_above`].
fn nearest_at_or_below(points: &[Point3], target: Point, axis: Axis) -> Option<Point3> {
    let threshold = target_value(target, axis);
    let mut part: Vec<Point3> = points
        .iter()
        .copied()
        .filter(|p| axis_value(p, axis) <= threshold)
        .collect();
    part.sort_by(|a, b| axis_value(b, axis).partial_cmp(&axis_value(a, axis)).unwrap());
    part.sort_by(|a, b| {
        distance(a.xy(), target)
            .partial_cmp(&distance(b.xy(), target))
            .unwrap()
    });
    part.first().copied()
}

/// One digitized performance chart: an irregular cloud of `(x, y, z)`
/// samples read off a published nomograph.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Chart {
    /// Samples of the chart surface.
    pub points: Vec<Point3>,
}

impl Chart {
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    /// Heuristically selects three samples bracketing `target`.
    ///
    /// The triangle is anchored on the two nearest samples straddling the
    /// target vertically; the remaining vertex is the nearest sample of the
    /// whole cloud that closes a triangle containing the target. The x-axis
    /// partitions are traced for diagnostics only and never picked from.
    pub fn bracketing_triangle(&self, target: Point) -> Option<(Point3, Point3, Point3)> {
        let x_above = nearest_at_or_above(&self.points, target, Axis::X);
        let x_below = nearest_at_or_below(&self.points, target, Axis::X);
        log::trace!("x partition anchors: above {x_above:?}, below {x_below:?}");

        let above = nearest_at_or_above(&self.points, target, Axis::Y)?;
        let below = nearest_at_or_below(&self.points, target, Axis::Y)?;
        log::trace!("y partition anchors: above {above:?}, below {below:?}");

        let mut by_distance = self.points.clone();
        by_distance.sort_by(|a, b| {
            distance(a.xy(), target)
                .partial_cmp(&distance(b.xy(), target))
                .unwrap()
        });

        let third = by_distance
            .into_iter()
            .find(|p| point_in_triangle(target, above.xy(), below.xy(), p.xy()))?;
        Some((above, below, third))
    }

    /// Exhaustive alternative to [`Chart::bracketing_triangle`]: the
    /// minimum-area triangle over all sample triples that contains `target`.
    /// Cubic in the sample count; kept as a cross-check strategy for small
    /// datasets, not used by the evaluation path.
    pub fn smallest_enclosing_triangle(&self, target: Point) -> Option<(Point3, Point3, Point3)> {
        let n = self.points.len();
        let mut best = None;
        let mut min_area = f64::INFINITY;

        for i in 0..n {
            for j in (i + 1)..n {
                for k in (j + 1)..n {
                    let (a, b, c) = (self.points[i], self.points[j], self.points[k]);
                    if point_in_triangle(target, a.xy(), b.xy(), c.xy()) {
                        let area = triangle_area(a.xy(), b.xy(), c.xy());
                        if area < min_area {
                            min_area = area;
                            best = Some((a, b, c));
                        }
                    }
                }
            }
        }

        best
    }

    /// Interpolated chart value at `(x, y)`: locates a bracketing triangle,
    /// fits a surface through it and evaluates the surface at the query
    /// point.
    pub fn solve(&self, x: f64, y: f64) -> Result<f64, ChartError> {
        let target = Point::new(x, y);
        let (a, b, c) = self
            .bracketing_triangle(target)
            .ok_or(ChartError::NoTriangle)?;
        let surface = plane_from_three_points(a, b, c)?;
        log::debug!("fitted {surface} at ({x}, {y})");
        Ok(surface.eval(x, y))
    }

    /// Same as [`Chart::solve`], collapsing every failure to `None`.
    pub fn value_at(&self, x: f64, y: f64) -> Option<f64> {
        self.solve(x, y).ok()
    }
}

/// Evaluates a chain of charts against a flat input list.
///
/// The first chart consumes two inputs; every later chart consumes one new
/// input as x and reuses the previous chart's result as y. Any step failure
/// collapses the whole evaluation to `None`, the same way a reader abandons
/// a multi-panel nomograph once one panel cannot be solved. An input list
/// shorter than the chain requires also yields `None`.
pub fn solve_chain(charts: &[Chart], inputs: &[f64]) -> Option<f64> {
    let mut prev: Option<f64> = None;
    let mut cursor = 0usize;

    for (index, chart) in charts.iter().enumerate() {
        let x = *inputs.get(cursor)?;
        cursor += 1;
        let y = match prev {
            Some(value) => value,
            None => {
                let value = *inputs.get(cursor)?;
                cursor += 1;
                value
            }
        };

        match chart.solve(x, y) {
            Ok(z) => prev = Some(z),
            Err(err) => {
                log::debug!("chart step {} failed: {err}", index + 1);
                return None;
            }
        }
    }

    prev
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_square() -> Chart {
        Chart::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 5.0),
            Point3::new(0.0, 10.0, 5.0),
            Point3::new(10.0, 10.0, 10.0),
        ])
    }

    // z = 2x + 3y + 1 sampled away from any degenerate layout.
    fn exact_plane_chart() -> Chart {
        Chart::new(vec![
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(10.0, 0.0, 21.0),
            Point3::new(0.0, 10.0, 31.0),
            Point3::new(10.0, 10.0, 51.0),
            Point3::new(5.0, 2.0, 17.0),
        ])
    }

    #[test]
    fn line_fit_prefers_x_axis() {
        let f = line_from_two_points(Point3::new(0.0, 0.0, 1.0), Point3::new(2.0, 5.0, 5.0))
            .unwrap();
        assert_eq!(f, SurfaceFn::LineX { m: 2.0, b: 1.0 });
        assert!((f.eval(3.0, 100.0) - 7.0).abs() < 1e-9);
    }

    #[test]
    fn line_fit_falls_back_to_y_axis() {
        let f = line_from_two_points(Point3::new(4.0, 0.0, 1.0), Point3::new(4.0, 2.0, 5.0))
            .unwrap();
        assert_eq!(f, SurfaceFn::LineY { m: 2.0, b: 1.0 });
        assert!((f.eval(100.0, 3.0) - 7.0).abs() < 1e-9);
    }

    #[test]
    fn line_fit_rejects_coincident_points() {
        let err = line_from_two_points(Point3::new(1.0, 2.0, 3.0), Point3::new(1.0, 2.0, 9.0))
            .unwrap_err();
        assert_eq!(err, FitError::CoincidentPoints);
    }

    #[test]
    fn plane_fit_of_identical_triple_is_constant() {
        let p = Point3::new(3.0, 4.0, 7.5);
        let f = plane_from_three_points(p, p, p).unwrap();
        assert_eq!(f, SurfaceFn::Constant(7.5));
        assert!((f.eval(-100.0, 100.0) - 7.5).abs() < 1e-9);
    }

    #[test]
    fn plane_fit_of_duplicate_pair_matches_two_point_line() {
        let dup = Point3::new(1.0, 1.0, 2.0);
        let other = Point3::new(5.0, 1.0, 10.0);
        let f = plane_from_three_points(dup, dup, other).unwrap();
        assert_eq!(f, line_from_two_points(other, dup).unwrap());

        // Pair in the second and third slots resolves through the first point.
        let f = plane_from_three_points(other, dup, dup).unwrap();
        assert_eq!(f, line_from_two_points(other, dup).unwrap());
    }

    #[test]
    fn plane_fit_rejects_vertical_plane() {
        // Three samples over the same chart line x = y.
        let err = plane_from_three_points(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 5.0),
            Point3::new(2.0, 2.0, 1.0),
        )
        .unwrap_err();
        assert_eq!(err, FitError::VerticalPlane);
    }

    #[test]
    fn plane_fit_reproduces_exact_plane() {
        let f = plane_from_three_points(
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(10.0, 0.0, 21.0),
            Point3::new(0.0, 10.0, 31.0),
        )
        .unwrap();
        assert!((f.eval(3.0, 4.0) - 19.0).abs() < 1e-9);
        assert!((f.eval(-2.0, 5.0) - 12.0).abs() < 1e-9);
    }

    #[test]
    fn surface_fn_display() {
        assert_eq!(SurfaceFn::Constant(5.0).to_string(), "z = 5");
        assert_eq!(SurfaceFn::LineX { m: 2.0, b: -1.0 }.to_string(), "z = 2 * x - 1");
        assert_eq!(SurfaceFn::LineY { m: 0.5, b: 3.0 }.to_string(), "z = 0.5 * y + 3");
    }

    #[test]
    fn bracketing_triangle_anchors_on_vertical_neighbours() {
        // All four corners are equidistant from the centre; the stable
        // axis-then-distance ordering anchors on the first-listed corner of
        // each y partition and closes with the nearest containing sample.
        let chart = sample_square();
        let (above, below, third) = chart
            .bracketing_triangle(Point::new(5.0, 5.0))
            .expect("triangle");
        assert_eq!(above, Point3::new(0.0, 10.0, 5.0));
        assert_eq!(below, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(third, Point3::new(10.0, 0.0, 5.0));

        let z = chart.solve(5.0, 5.0).unwrap();
        assert!((z - 5.0).abs() < 1e-9);
    }

    #[test]
    fn bracketing_triangle_contains_target() {
        let chart = exact_plane_chart();
        for (x, y) in [(1.0, 1.0), (5.0, 5.0), (2.5, 7.0), (9.0, 1.0)] {
            let target = Point::new(x, y);
            let (a, b, c) = chart.bracketing_triangle(target).expect("triangle");
            assert!(point_in_triangle(target, a.xy(), b.xy(), c.xy()));
        }
    }

    #[test]
    fn bracketing_triangle_fails_without_vertical_bracket() {
        // Two distinct x values straddle the target but nothing lies above
        // it in y.
        let chart = Chart::new(vec![
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(10.0, 0.0, 2.0),
            Point3::new(5.0, -5.0, 3.0),
        ]);
        assert!(chart.bracketing_triangle(Point::new(5.0, 5.0)).is_none());
        assert_eq!(chart.solve(5.0, 5.0).unwrap_err(), ChartError::NoTriangle);
    }

    #[test]
    fn smallest_enclosing_triangle_agrees_on_coplanar_samples() {
        // On a coplanar cloud both strategies must interpolate identically,
        // whatever triangle each one picks.
        let chart = exact_plane_chart();
        let target = Point::new(4.0, 6.0);

        let (a, b, c) = chart.smallest_enclosing_triangle(target).expect("triangle");
        assert!(point_in_triangle(target, a.xy(), b.xy(), c.xy()));
        let baseline = plane_from_three_points(a, b, c).unwrap().eval(4.0, 6.0);

        let heuristic = chart.solve(4.0, 6.0).unwrap();
        assert!((baseline - heuristic).abs() < 1e-9);
        assert!((heuristic - (2.0 * 4.0 + 3.0 * 6.0 + 1.0)).abs() < 1e-9);
    }

    #[test]
    fn smallest_enclosing_triangle_rejects_outside_target() {
        let chart = sample_square();
        assert!(chart
            .smallest_enclosing_triangle(Point::new(20.0, 20.0))
            .is_none());
    }

    #[test]
    fn solve_chain_feeds_results_forward() {
        // Step one reads 19 off the exact plane at (3, 4); step two receives
        // that as its y input and adds the new x input on a z = x + y chart.
        let follow_up = Chart::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 10.0),
            Point3::new(0.0, 30.0, 30.0),
            Point3::new(10.0, 30.0, 40.0),
            Point3::new(5.0, 10.0, 15.0),
        ]);
        let chain = vec![exact_plane_chart(), follow_up];

        let first = solve_chain(&chain[..1], &[3.0, 4.0]).expect("single step");
        assert!((first - 19.0).abs() < 1e-9);

        let chained = solve_chain(&chain, &[3.0, 4.0, 2.0]).expect("two steps");
        assert!((chained - (2.0 + first)).abs() < 1e-6);
    }

    #[test]
    fn solve_chain_is_deterministic() {
        let chain = vec![exact_plane_chart()];
        let a = solve_chain(&chain, &[3.0, 4.0]);
        let b = solve_chain(&chain, &[3.0, 4.0]);
        assert_eq!(a, b);
    }

    #[test]
    fn solve_chain_collapses_step_failure() {
        let chart = Chart::new(vec![
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(10.0, 0.0, 2.0),
            Point3::new(5.0, -5.0, 3.0),
        ]);
        assert_eq!(solve_chain(&[chart], &[5.0, 5.0]), None);
    }

    #[test]
    fn solve_chain_requires_enough_inputs() {
        let chain = vec![exact_plane_chart(), exact_plane_chart()];
        assert_eq!(solve_chain(&chain, &[3.0, 4.0]), None);
        assert_eq!(solve_chain(&[], &[3.0, 4.0]), None);
    }
}
