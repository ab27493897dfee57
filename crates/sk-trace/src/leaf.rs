use sk_core::{BitGrid, PixelRef, Region};

use crate::chain::Chain;

/// Fits straight segments to the skeleton inside a terminal region.
///
/// The region frame is walked clockwise and every maximal run of "on" pixels
/// marks one place where the skeleton enters. Two entrances are joined
/// directly; any other count is joined through a single junction pixel
/// estimated inside the region (see [`estimate_junction`]).
///
/// A frame that is entirely "on" or entirely "off" gives no segments.
pub fn fit_segments(grid: &BitGrid, region: Region, junction_score_stop: usize) -> Vec<Chain> {
    if region.rows < 2 || region.cols < 2 {
        return Vec::new();
    }

    let mut frame = frame_walk(grid, region);
    let Some(start) = frame.iter().position(|&px| !grid.is_on(px)) else {
        return Vec::new();
    };
    frame.rotate_left(start);

    let mids = run_midpoints(grid, &frame);
    match mids.len() {
        0 => Vec::new(),
        2 => vec![mids],
        _ => {
            let junction = estimate_junction(grid, region, junction_score_stop);
            mids.into_iter().map(|mid| vec![mid, junction]).collect()
        }
    }
}

/// Clockwise frame: top row, right column, bottom row reversed, left column
/// reversed. Each corner appears exactly once.
fn frame_walk(grid: &BitGrid, region: Region) -> Vec<PixelRef> {
    let rows = region.rows as isize;
    let cols = region.cols as isize;
    let (r1, c1) = (region.last_row(), region.last_col());

    grid.section(region.r0, region.c0, 1, cols - 1)
        .chain(grid.section(region.r0, c1, rows - 1, 1))
        .chain(grid.section(r1, c1, 1, 1 - cols))
        .chain(grid.section(r1, region.c0, 1 - rows, 1))
        .collect()
}

/// Middle pixel (`start + len / 2`) of every "on" run. `frame` must start "off"
/// so no run wraps around.
fn run_midpoints(grid: &BitGrid, frame: &[PixelRef]) -> Vec<PixelRef> {
    let mut mids = Vec::new();
    let mut i = 0;
    while i < frame.len() {
        if !grid.is_on(frame[i]) {
            i += 1;
            continue;
        }
        let start = i;
        while i < frame.len() && grid.is_on(frame[i]) {
            i += 1;
        }
        mids.push(frame[start + (i - start) / 2]);
    }
    mids
}

/// Most connected interior pixel near the region center.
///
/// Interior pixels are visited by increasing Manhattan distance to the center
/// (row-major among equals) and scored by the "on" count of their 3x3
/// neighborhood. The first strictly highest score wins; the search ends early
/// once a score reaches `score_stop`. Regions without an interior return the
/// center pixel.
pub fn estimate_junction(grid: &BitGrid, region: Region, score_stop: usize) -> PixelRef {
    let (cr, cc) = region.center();
    let center = grid.find(cr, cc);
    let Some(interior) = region.interior() else {
        return center;
    };

    let mut candidates: Vec<PixelRef> = grid.pixels(interior).collect();
    candidates.sort_by_key(|&px| {
        let (r, c) = grid.coords(px);
        r.abs_diff(cr) + c.abs_diff(cc)
    });

    let mut best: Option<(PixelRef, usize)> = None;
    for px in candidates {
        let (r, c) = grid.coords(px);
        let score = grid.count_on(Region::new(r - 1, c - 1, 3, 3));
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((px, score));
        }
        if best.is_some_and(|(_, top)| top >= score_stop) {
            break;
        }
    }

    best.map_or(center, |(px, _)| px)
}
