//! Scanline-based triangle rasterization.
//!
//! Triangles are filled one horizontal scanline at a time, with the span on
//! each row bounded by two edge walkers. Everything is integer arithmetic;
//! the edges round exactly like [`draw_line`](super::draw_line) does.
//!
//! # Algorithm Overview
//!
//! 1. **Sort vertices** by Y (stable, so ties keep their input order) into
//!    `bottom`, `mid` and `top`
//! 2. **Walk two edges** from `bottom`: the long edge `bottom -> top` and
//!    the short edge `bottom -> mid`
//! 3. **Switch** the short edge to `mid -> top` when the scanline reaches
//!    `mid.y`
//! 4. **Fill** the inclusive span between the two edge X values on every row
//!
//! ```text
//!              top
//!              /|
//!             / |        rows mid.y..=top.y:
//!            /  |          long edge  vs  mid -> top
//!       mid /___|
//!           \   |        rows bottom.y..mid.y:
//!            \  |          long edge  vs  bottom -> mid
//!             \ |
//!              \|
//!             bottom
//! ```
//!
//! # Edge Walkers
//!
//! Each edge is an [`ErrorStepper`] with Y as the major axis and X as the
//! minor axis. The walker is advanced once per scanline and reports the
//! edge's X on that row, rounded to the nearest pixel. An edge with no
//! vertical extent is already fully walked and simply holds its X.
//!
//! # Degenerate Triangles
//!
//! - Zero height (all three Y equal): the single row from the leftmost to the
//!   rightmost vertex is filled.
//! - Collinear or coincident vertices: both walkers trace the same line and
//!   each row gets a span of one or more pixels along it.
//!
//! None of these divide, so none of them can fault.
//!
//! Adjacent triangles sharing an edge both fill the pixels on that edge.

use super::stepper::ErrorStepper;
use super::{PixelTarget, Triangle};
use crate::colors::Color;
use crate::math::point::Point2;

/// Fill `triangle` with its solid color.
pub fn fill_triangle<T: PixelTarget + ?Sized>(target: &mut T, triangle: &Triangle) {
    let color = triangle.color;
    let [bottom, mid, top] = sort_by_y(triangle.points);

    if bottom.y == top.y {
        let x_min = bottom.x.min(mid.x).min(top.x);
        let x_max = bottom.x.max(mid.x).max(top.x);
        fill_span(target, bottom.y, x_min, x_max, color);
        return;
    }

    let mut long_edge = edge_walker(bottom, top);
    let mut short_edge = edge_walker(bottom, mid);

    for y in bottom.y..=top.y {
        if y == mid.y {
            // bottom -> mid ends at mid.x on this row, which is exactly where
            // mid -> top starts.
            short_edge = edge_walker(mid, top);
        }

        fill_span(target, y, long_edge.minor(), short_edge.minor(), color);

        long_edge.step();
        short_edge.step();
    }
}

/// Order vertices by ascending Y. Stable: equal Y keep their input order.
fn sort_by_y(mut points: [Point2; 3]) -> [Point2; 3] {
    points.sort_by_key(|p| p.y);
    points
}

/// Walker over an edge whose `to` end is not below its `from` end.
fn edge_walker(from: Point2, to: Point2) -> ErrorStepper {
    ErrorStepper::new(from.x, to.x - from.x, to.y - from.y)
}

/// Fill `x0..=x1` (in either order) on row `y`.
#[inline]
fn fill_span<T: PixelTarget + ?Sized>(target: &mut T, y: i32, x0: i32, x1: i32, color: Color) {
    let (left, right) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
    for x in left..=right {
        target.set_pixel(x, y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::rasterizer::draw_line;
    use crate::render::rasterizer::testing::{p, PixelRecorder};
    use std::collections::{BTreeMap, HashSet};

    fn fill(points: [Point2; 3]) -> PixelRecorder {
        let mut rec = PixelRecorder::new();
        fill_triangle(&mut rec, &Triangle::new(points, Color::RED));
        rec
    }

    fn line_pixels(a: Point2, b: Point2) -> HashSet<Point2> {
        let mut rec = PixelRecorder::new();
        draw_line(&mut rec, a, b, Color::WHITE);
        rec.set()
    }

    /// Twice the signed area of (a, b, c).
    fn cross(a: Point2, b: Point2, c: Point2) -> i64 {
        let (ab, ac) = (b - a, c - a);
        ab.x as i64 * ac.y as i64 - ab.y as i64 * ac.x as i64
    }

    fn strictly_inside(tri: [Point2; 3], q: Point2) -> bool {
        let [a, b, c] = tri;
        let (e0, e1, e2) = (cross(a, b, q), cross(b, c, q), cross(c, a, q));
        (e0 > 0 && e1 > 0 && e2 > 0) || (e0 < 0 && e1 < 0 && e2 < 0)
    }

    fn rows(rec: &PixelRecorder) -> BTreeMap<i32, Vec<i32>> {
        let mut rows: BTreeMap<i32, Vec<i32>> = BTreeMap::new();
        for q in &rec.writes {
            rows.entry(q.y).or_default().push(q.x);
        }
        for xs in rows.values_mut() {
            xs.sort_unstable();
        }
        rows
    }

    const SCENARIO: [Point2; 3] = [
        Point2::new(10, 70),
        Point2::new(50, 160),
        Point2::new(70, 80),
    ];

    #[test]
    fn centroid_is_filled() {
        let pixels = fill(SCENARIO).set();
        assert!(pixels.contains(&p(43, 103)));
        assert!(pixels.contains(&p(30, 90)));
        assert!(pixels.contains(&p(50, 150)));
        assert!(!pixels.contains(&p(10, 160)));
    }

    #[test]
    fn every_strictly_interior_pixel_is_filled() {
        let pixels = fill(SCENARIO).set();
        for y in 70..=160 {
            for x in 10..=70 {
                let q = p(x, y);
                if strictly_inside(SCENARIO, q) {
                    assert!(pixels.contains(&q), "interior pixel {q:?} missing");
                }
            }
        }
    }

    #[test]
    fn every_row_is_covered_by_one_contiguous_span() {
        let rec = fill(SCENARIO);
        let rows = rows(&rec);
        assert_eq!(rows.keys().copied().collect::<Vec<_>>(), (70..=160).collect::<Vec<_>>());
        for (y, xs) in &rows {
            for pair in xs.windows(2) {
                assert_eq!(pair[1], pair[0] + 1, "row {y} not contiguous: {xs:?}");
            }
        }
        assert!(!rec.has_duplicates());
    }

    #[test]
    fn coverage_is_independent_of_vertex_order() {
        let [a, b, c] = SCENARIO;
        let flat_bottom = [p(0, 0), p(12, 0), p(5, 9)];
        let [d, e, f] = flat_bottom;
        let expected = fill(SCENARIO).set();
        let expected_flat = fill(flat_bottom).set();
        for order in [[a, c, b], [b, a, c], [b, c, a], [c, a, b], [c, b, a]] {
            assert_eq!(fill(order).set(), expected);
        }
        for order in [[d, f, e], [e, d, f], [e, f, d], [f, d, e], [f, e, d]] {
            assert_eq!(fill(order).set(), expected_flat);
        }
    }

    #[test]
    fn steep_edges_match_the_line_rasterizer() {
        // Sorted: bottom (10,70), mid (70,80), top (50,160). Both edges that
        // reach `top` are steep, so the line walk visits the same column on
        // every row as the edge walker.
        let pixels = fill(SCENARIO).set();
        let [bottom, top, mid] = SCENARIO;
        assert!(line_pixels(bottom, top).is_subset(&pixels));
        assert!(line_pixels(mid, top).is_subset(&pixels));
    }

    #[test]
    fn flat_bottom_and_flat_top() {
        let flat_bottom = rows(&fill([p(0, 0), p(10, 0), p(5, 5)]));
        assert_eq!(flat_bottom[&0], (0..=10).collect::<Vec<_>>());
        assert_eq!(flat_bottom[&5], vec![5]);

        let flat_top = rows(&fill([p(5, 0), p(0, 5), p(10, 5)]));
        assert_eq!(flat_top[&0], vec![5]);
        assert_eq!(flat_top[&5], (0..=10).collect::<Vec<_>>());
    }

    #[test]
    fn zero_height_fills_the_row_between_extremes() {
        let rec = fill([p(5, 3), p(0, 3), p(10, 3)]);
        assert_eq!(rows(&rec)[&3], (0..=10).collect::<Vec<_>>());
        assert_eq!(rec.writes.len(), 11);
    }

    #[test]
    fn coincident_vertices_terminate() {
        assert_eq!(fill([p(4, 4), p(4, 4), p(4, 4)]).writes, vec![p(4, 4)]);

        let rec = fill([p(5, 5), p(5, 5), p(20, 30)]);
        assert_eq!(rec.set(), line_pixels(p(5, 5), p(20, 30)));
    }

    #[test]
    fn collinear_vertices_fill_along_the_line() {
        let rec = fill([p(0, 0), p(10, 10), p(5, 5)]);
        let expected: HashSet<Point2> = (0..=10).map(|i| p(i, i)).collect();
        assert_eq!(rec.set(), expected);
    }

    #[test]
    fn shallow_edges_still_cover_every_row() {
        let tri = [p(0, 0), p(100, 3), p(40, 6)];
        let rec = fill(tri);
        assert_eq!(rows(&rec).len(), 7);
        let pixels = rec.set();
        for y in 0..=6 {
            for x in 0..=100 {
                let q = p(x, y);
                if strictly_inside(tri, q) {
                    assert!(pixels.contains(&q), "interior pixel {q:?} missing");
                }
            }
        }
    }

    #[test]
    fn negative_coordinates_are_emitted_as_is() {
        let pixels = fill([p(-10, -10), p(-2, -10), p(-6, -4)]).set();
        assert!(pixels.contains(&p(-6, -7)));
        assert!(pixels.iter().all(|q| q.x < 0 && q.y < 0));
    }
}
