use log::warn;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use sk_core::geom::{points_approx_eq, squared_distance_to_segment};
use sk_core::{Line2f, Point2f};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentFitConfig {
    /// Candidate lines to try. `0` is treated as `1`.
    pub iterations: usize,
    /// Points scored per candidate, `0` for all of them.
    pub samples: usize,
    /// Points farther than this from a candidate count as outliers, with
    /// their squared distance capped at `max_inlier_distance^2`. `0` disables
    /// the cap.
    pub max_inlier_distance: f32,
    /// Fixed RNG seed for reproducible fits; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SegmentFitConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            samples: 0,
            max_inlier_distance: 0.0,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedSegment {
    pub begin: Point2f,
    pub end: Point2f,
    /// Mean (capped) squared distance of the scored points to the line.
    pub mse: f32,
}

/// RANSAC fit of a single line segment to `items`.
///
/// See [`fit_segment_with_rng`]; the generator is built from
/// [`SegmentFitConfig::seed`].
pub fn fit_segment<T, F>(items: &[T], coords: F, cfg: &SegmentFitConfig) -> Option<FittedSegment>
where
    F: Fn(&T) -> Point2f,
{
    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    fit_segment_with_rng(items, coords, cfg, &mut rng)
}

/// RANSAC fit of a single line segment using a caller supplied generator.
///
/// Each iteration draws two distinct points, builds the line through them and
/// sums the (capped) squared distances of `samples` points drawn without
/// replacement. The line with the smallest sum wins; scoring a candidate stops
/// as soon as it cannot win anymore. The segment spans the projections of the
/// two defining points and of every inlier, ordered by `x` (then `y`).
///
/// Returns `None` for fewer than two points or when every drawn pair
/// coincides.
pub fn fit_segment_with_rng<T, F, R>(
    items: &[T],
    coords: F,
    cfg: &SegmentFitConfig,
    rng: &mut R,
) -> Option<FittedSegment>
where
    F: Fn(&T) -> Point2f,
    R: Rng + ?Sized,
{
    let n = items.len();
    if n < 2 {
        warn!("fit_segment: {n} points are not enough to fit a segment");
        return None;
    }

    let iterations = if cfg.iterations == 0 {
        warn!("fit_segment: 0 iterations requested, using 1; estimate is likely inaccurate");
        1
    } else {
        cfg.iterations
    };
    let samples = if cfg.samples == 0 {
        n
    } else {
        cfg.samples.min(n)
    };
    let max_sq = if cfg.max_inlier_distance != 0.0 {
        cfg.max_inlier_distance * cfg.max_inlier_distance
    } else {
        f32::INFINITY
    };

    let mut best: Option<FittedSegment> = None;
    let mut best_sum = f32::INFINITY;

    for _ in 0..iterations {
        let ia = rng.gen_range(0..n);
        let mut ib = rng.gen_range(0..n);
        while ib == ia {
            ib = rng.gen_range(0..n);
        }

        let a = coords(&items[ia]);
        let b = coords(&items[ib]);
        let Some(line) = Line2f::through(a, b) else {
            continue;
        };

        let (mut t_min, mut t_max) = span(0.0, line.param(b));
        let mut sum = 0.0f32;
        let picks = index::sample(rng, n, samples);
        for i in picks.iter() {
            if sum >= best_sum {
                break;
            }
            let q = coords(&items[i]);
            let t = line.param(q);
            let d_sq = line.squared_distance(q);

            sum += d_sq.min(max_sq);
            if d_sq <= max_sq {
                t_min = t_min.min(t);
                t_max = t_max.max(t);
            }
        }

        if sum >= best_sum {
            continue;
        }
        best_sum = sum;

        let (begin, end) = ordered(line.at(t_min), line.at(t_max));
        best = Some(FittedSegment {
            begin,
            end,
            mse: sum / samples as f32,
        });
    }

    best
}

/// Moves the items within `max_distance` of `segment` to the front and returns
/// their count.
///
/// A `max_distance` of `0` accepts everything; a degenerate segment accepts
/// nothing.
pub fn partition_inliers<T, F>(
    items: &mut [T],
    coords: F,
    segment: &FittedSegment,
    max_distance: f32,
) -> usize
where
    F: Fn(&T) -> Point2f,
{
    if max_distance == 0.0 {
        return items.len();
    }
    if points_approx_eq(segment.begin, segment.end) {
        return 0;
    }

    let max_sq = max_distance * max_distance;
    let mut inliers = 0;
    for i in 0..items.len() {
        let q = coords(&items[i]);
        if squared_distance_to_segment(q, segment.begin, segment.end) < max_sq {
            items.swap(inliers, i);
            inliers += 1;
        }
    }
    inliers
}

fn span(a: f32, b: f32) -> (f32, f32) {
    if a <= b { (a, b) } else { (b, a) }
}

fn ordered(a: Point2f, b: Point2f) -> (Point2f, Point2f) {
    if (a.x, a.y) <= (b.x, b.y) {
        (a, b)
    } else {
        (b, a)
    }
}
