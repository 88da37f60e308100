//! Test support library
//! Field builders and geometry helpers shared by the integration tests.
#![allow(dead_code)]

use isomarch::{field::Grid, float_types::Real, polygon::Polyline};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Binary field with every sample in `cells` inside.
pub fn cells(width: usize, height: usize, cells: &[(usize, usize)]) -> Grid {
    Grid::from_fn(width, height, |x, y| {
        if cells.contains(&(x, y)) { 1.0 } else { 0.0 }
    })
}

/// Binary field with the samples `x0..x1 × y0..y1` inside.
pub fn filled_rect(width: usize, height: usize, x0: usize, y0: usize, x1: usize, y1: usize) -> Grid {
    Grid::from_fn(width, height, |x, y| {
        if (x0..x1).contains(&x) && (y0..y1).contains(&y) {
            1.0
        } else {
            0.0
        }
    })
}

/// Distance from sample `(x, y)` to `(cx, cy)`, both in sample indices.
pub fn distance(x: usize, y: usize, cx: Real, cy: Real) -> Real {
    ((x as Real - cx).powi(2) + (y as Real - cy).powi(2)).sqrt()
}

/// Binary ring: samples with `inner <= d < outer` around `(cx, cy)` are inside.
pub fn annulus(size: usize, cx: Real, cy: Real, inner: Real, outer: Real) -> Grid {
    Grid::from_fn(size, size, |x, y| {
        let d = distance(x, y, cx, cy);
        if d >= inner && d < outer { 1.0 } else { 0.0 }
    })
}

/// Soft disc whose values fall off linearly across the radius, like an SDF
/// glyph texture with a spread of `spread` samples.
pub fn soft_disc(size: usize, cx: Real, cy: Real, radius: Real, spread: Real) -> Grid {
    Grid::from_fn(size, size, |x, y| {
        let d = distance(x, y, cx, cy);
        (0.5 + (radius - d) / spread).clamp(0.0, 1.0)
    })
}

/// `[min_x, min_y, max_x, max_y]` of a loop.
pub fn bounds(line: &Polyline) -> [Real; 4] {
    let mut min_x = Real::MAX;
    let mut min_y = Real::MAX;
    let mut max_x = Real::MIN;
    let mut max_y = Real::MIN;
    for v in line {
        min_x = min_x.min(v.x);
        min_y = min_y.min(v.y);
        max_x = max_x.max(v.x);
        max_y = max_y.max(v.y);
    }
    [min_x, min_y, max_x, max_y]
}

/// True if `inner` lies strictly inside `outer` on both axes.
pub fn strictly_within(inner: [Real; 4], outer: [Real; 4]) -> bool {
    inner[0] > outer[0] && inner[1] > outer[1] && inner[2] < outer[2] && inner[3] < outer[3]
}
