use log::{debug, warn};
use sk_core::{BitGrid, Error, Region};
use sk_morph::thin_zhang_suen;

use crate::chain::{Chain, Polyline};
use crate::config::{MIN_GRID_SIZE, TraceConfig};
use crate::leaf::fit_segments;
use crate::merge::merge_chains;
use crate::split::find_split;

/// Traces the skeleton of `pixels`, a row-major `rows x cols` image classified
/// by `is_on`.
///
/// Fails only when `pixels.len() != rows * cols`. Images smaller than 3x3
/// trace to nothing.
pub fn fit_polylines<T, F>(
    pixels: &[T],
    rows: usize,
    cols: usize,
    is_on: F,
    cfg: &TraceConfig,
) -> Result<Vec<Polyline>, Error>
where
    F: FnMut(&T) -> bool,
{
    let grid = BitGrid::from_pixels(pixels, rows, cols, is_on)?;
    Ok(trace_grid(grid, cfg))
}

/// Traces an already classified grid, thinning it first when
/// [`TraceConfig::thinning`] is set.
pub fn trace_grid(mut grid: BitGrid, cfg: &TraceConfig) -> Vec<Polyline> {
    if grid.rows() < MIN_GRID_SIZE || grid.cols() < MIN_GRID_SIZE {
        warn!(
            "trace_grid: {}x{} grid is smaller than {MIN_GRID_SIZE}x{MIN_GRID_SIZE}, nothing to trace",
            grid.rows(),
            grid.cols()
        );
        return Vec::new();
    }

    if cfg.thinning {
        thin_zhang_suen(&mut grid);
    }

    let (chains, stats) = trace_region(&grid, grid.full(), 0, cfg);
    debug!(
        "trace_grid: {}x{} grid, {} leaf regions, max depth {}, {} polylines",
        grid.rows(),
        grid.cols(),
        stats.leaves,
        stats.max_depth,
        chains.len()
    );

    chains
        .iter()
        .map(|chain| Polyline::from_chain(&grid, chain))
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
struct TraceStats {
    leaves: usize,
    max_depth: usize,
}

impl TraceStats {
    fn leaf(depth: usize) -> Self {
        Self {
            leaves: 1,
            max_depth: depth,
        }
    }

    fn combine(self, other: Self) -> Self {
        Self {
            leaves: self.leaves + other.leaves,
            max_depth: self.max_depth.max(other.max_depth),
        }
    }
}

fn trace_region(
    grid: &BitGrid,
    region: Region,
    depth: usize,
    cfg: &TraceConfig,
) -> (Vec<Chain>, TraceStats) {
    if !grid.any_on(region) {
        return (Vec::new(), TraceStats::default());
    }

    let max_leaf = cfg.max_leaf_size();
    let is_leaf = depth >= cfg.effective_max_recursions()
        || (region.rows <= max_leaf && region.cols <= max_leaf);
    let split = if is_leaf {
        None
    } else {
        find_split(grid, region)
    };

    let Some(split) = split else {
        let chains = fit_segments(grid, region, cfg.junction_score_stop);
        return (chains, TraceStats::leaf(depth));
    };

    let ((first, first_stats), (second, second_stats)) = join(
        || trace_region(grid, split.first, depth + 1, cfg),
        || trace_region(grid, split.second, depth + 1, cfg),
    );

    (
        merge_chains(first, second),
        first_stats.combine(second_stats),
    )
}

#[cfg(feature = "parallel")]
fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    rayon::join(a, b)
}

#[cfg(not(feature = "parallel"))]
fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA,
    B: FnOnce() -> RB,
{
    (a(), b())
}

#[cfg(test)]
mod tests {
    use sk_core::{BitGrid, Error};
    use sk_morph::thin_zhang_suen;

    use super::{fit_polylines, trace_grid};
    use crate::config::TraceConfig;

    fn points(on: &[(usize, usize)], rows: usize, cols: usize) -> Vec<u8> {
        let mut data = vec![0u8; rows * cols];
        for &(r, c) in on {
            data[r * cols + c] = 1;
        }
        data
    }

    fn trace(
        data: &[u8],
        rows: usize,
        cols: usize,
        cfg: &TraceConfig,
    ) -> Vec<Vec<(usize, usize)>> {
        fit_polylines(data, rows, cols, |&v| v != 0, cfg)
            .expect("buffer matches size")
            .into_iter()
            .map(|pl| pl.points)
            .collect()
    }

    fn diagonal5() -> Vec<u8> {
        let on: Vec<_> = (0..5).map(|i| (i, i)).collect();
        points(&on, 5, 5)
    }

    fn plus5() -> Vec<u8> {
        let on: Vec<_> = (0..5).map(|i| (2, i)).chain((0..5).map(|i| (i, 2))).collect();
        points(&on, 5, 5)
    }

    #[test]
    fn size_mismatch_is_reported() {
        let err = fit_polylines(&[0u8; 10], 3, 3, |&v| v != 0, &TraceConfig::default())
            .unwrap_err();
        assert_eq!(
            err,
            Error::SizeMismatch {
                expected: 9,
                actual: 10
            }
        );
    }

    #[test]
    fn empty_and_tiny_images_trace_to_nothing() {
        let cfg = TraceConfig::default();
        assert!(trace(&[0; 64], 8, 8, &cfg).is_empty());
        assert!(trace(&[1; 14], 2, 7, &cfg).is_empty());
        assert!(trace(&[], 0, 0, &cfg).is_empty());
    }

    #[test]
    fn diagonal_stroke_is_one_chain() {
        let got = trace(&diagonal5(), 5, 5, &TraceConfig::default());
        assert_eq!(got, vec![vec![(4, 4), (0, 0)]]);

        let cfg = TraceConfig {
            max_recursions: 1,
            ..TraceConfig::default()
        };
        assert_eq!(trace(&diagonal5(), 5, 5, &cfg), got);
    }

    #[test]
    fn plus_meets_at_the_junction() {
        let got = trace(&plus5(), 5, 5, &TraceConfig::default());
        assert_eq!(
            got,
            vec![
                vec![(0, 2), (2, 2)],
                vec![(2, 4), (2, 2)],
                vec![(4, 2), (2, 2)],
                vec![(2, 0), (2, 2)],
            ]
        );
        assert!(got.iter().all(|pl| pl.last() == Some(&(2, 2))));
    }

    #[test]
    fn longer_diagonal_is_split_and_stitched() {
        let on: Vec<_> = (0..9).map(|i| (i, i)).collect();
        let data = points(&on, 9, 9);

        assert_eq!(
            trace(&data, 9, 9, &TraceConfig::default()),
            vec![vec![(8, 8), (6, 6), (4, 4), (3, 3), (0, 0)]]
        );

        // A section size covering the whole image keeps it a single leaf.
        let cfg = TraceConfig {
            min_section_size: 9,
            ..TraceConfig::default()
        };
        assert_eq!(trace(&data, 9, 9, &cfg), vec![vec![(8, 8), (0, 0)]]);
    }

    #[test]
    fn thick_l_is_thinned_then_traced() {
        let mut on = Vec::new();
        for r in 1..11 {
            for c in 2..5 {
                on.push((r, c));
            }
        }
        for r in 8..11 {
            for c in 2..11 {
                on.push((r, c));
            }
        }
        let data = points(&on, 12, 12);

        let got = trace(&data, 12, 12, &TraceConfig::default());
        assert_eq!(
            got,
            vec![vec![(10, 7), (9, 6), (8, 3), (6, 3), (3, 3), (2, 4)]]
        );
    }

    #[test]
    fn thinning_can_be_skipped() {
        let on: Vec<_> = (2..7).flat_map(|r| (2..7).map(move |c| (r, c))).collect();
        let grid = BitGrid::from_u8(9, 9, points(&on, 9, 9)).expect("valid grid");

        // The block thins to one isolated pixel, which no frame ever sees.
        let thinned = trace_grid(grid.clone(), &TraceConfig::default());
        assert!(thinned.is_empty());

        let raw = trace_grid(
            grid,
            &TraceConfig {
                thinning: false,
                ..TraceConfig::default()
            },
        );
        let raw: Vec<_> = raw.into_iter().map(|pl| pl.points).collect();
        assert_eq!(
            raw,
            vec![
                vec![(2, 5), (4, 4), (2, 3)],
                vec![(5, 6), (4, 4), (5, 2)],
            ]
        );
    }

    #[test]
    fn thin_strokes_trace_through_skeleton_pixels() {
        let strokes: Vec<(usize, usize, Vec<(usize, usize)>)> = vec![
            (5, 5, (0..5).map(|i| (i, i)).collect()),
            (5, 5, (0..5).map(|i| (2, i)).chain((0..5).map(|i| (i, 2))).collect()),
            (9, 9, (0..9).map(|i| (i, i)).collect()),
            (7, 12, (0..12).map(|c| (3, c)).collect()),
            (12, 5, (0..12).map(|r| (r, 2)).collect()),
            (10, 10, (0..10).map(|r| (r, 2)).chain((2..10).map(|c| (7, c))).collect()),
        ];

        for (rows, cols, on) in strokes {
            let data = points(&on, rows, cols);
            let mut skeleton = BitGrid::from_u8(rows, cols, data.clone()).expect("valid grid");
            thin_zhang_suen(&mut skeleton);

            let got = trace(&data, rows, cols, &TraceConfig::default());
            assert!(!got.is_empty(), "{rows}x{cols} stroke traced to nothing");
            for pl in &got {
                assert!(pl.len() >= 2);
                for &(r, c) in pl {
                    assert_eq!(
                        skeleton.get(r, c),
                        Some(true),
                        "({r}, {c}) is off in {rows}x{cols}: {got:?}"
                    );
                }
            }
        }
    }
}
