use sk_core::Point2f;
use sk_core::geom::{points_approx_eq, squared_distance_to_segment};

/// Ramer-Douglas-Peucker simplification in place.
///
/// Items kept by the simplification are moved to the front of `items` in
/// their original order; the rest end up behind them in unspecified order.
/// Returns the number of kept items.
///
/// Nothing is dropped when `epsilon <= 0` or fewer than three items are given.
/// A span whose two ends coincide (a closed loop) is kept whole.
pub fn simplify_in_place<T, F>(items: &mut [T], coords: F, epsilon: f32) -> usize
where
    F: Fn(&T) -> Point2f,
{
    let n = items.len();
    if n < 3 || epsilon <= 0.0 {
        return n;
    }

    let pts: Vec<Point2f> = items.iter().map(&coords).collect();
    let keep = mark_kept(&pts, epsilon * epsilon);

    let mut kept = 0;
    for (i, &k) in keep.iter().enumerate() {
        if k {
            items.swap(kept, i);
            kept += 1;
        }
    }
    kept
}

/// Convenience wrapper returning the simplified copy of `points`.
pub fn simplify_polyline(points: &[Point2f], epsilon: f32) -> Vec<Point2f> {
    let mut out = points.to_vec();
    let kept = simplify_in_place(&mut out, |p| *p, epsilon);
    out.truncate(kept);
    out
}

fn mark_kept(pts: &[Point2f], eps_sq: f32) -> Vec<bool> {
    let mut keep = vec![false; pts.len()];
    let mut spans = vec![(0, pts.len() - 1)];

    while let Some((a, b)) = spans.pop() {
        keep[a] = true;
        keep[b] = true;

        if b - a < 2 || points_approx_eq(pts[a], pts[b]) {
            keep[a..=b].fill(true);
            continue;
        }

        let mut far = a + 1;
        let mut far_sq = f32::NEG_INFINITY;
        for (i, &p) in pts.iter().enumerate().take(b).skip(a + 1) {
            let d = squared_distance_to_segment(p, pts[a], pts[b]);
            if d > far_sq {
                far = i;
                far_sq = d;
            }
        }

        if far_sq > eps_sq {
            spans.push((a, far));
            spans.push((far, b));
        }
    }

    keep
}
