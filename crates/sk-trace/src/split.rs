use sk_core::{BitGrid, Region};

use crate::config::SPLIT_MARGIN;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Cut along a row; the halves are stacked vertically.
    Rows,
    /// Cut along a column; the halves sit side by side.
    Cols,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    pub axis: Axis,
    /// Absolute row or column index of the cut.
    pub at: usize,
    /// "On" pixels along the cut.
    pub on_count: usize,
    /// Top or left half, ending on the cut line.
    pub first: Region,
    /// Bottom or right half, starting on the cut line.
    pub second: Region,
}

/// Picks the cut line of `region` with the fewest "on" pixels.
///
/// The longer side is cut (rows on ties). Candidates are visited outwards from
/// the center, `0, -1, +1, -2, +2, ...`, and only a strictly smaller count
/// replaces the current best, so equal counts favor the more central line. A
/// line without "on" pixels ends the search.
///
/// Returns `None` when the cut side has no more than [`SPLIT_MARGIN`] lines.
pub fn find_split(grid: &BitGrid, region: Region) -> Option<Split> {
    let axis = if region.rows >= region.cols {
        Axis::Rows
    } else {
        Axis::Cols
    };
    let (origin, extent) = match axis {
        Axis::Rows => (region.r0, region.rows),
        Axis::Cols => (region.c0, region.cols),
    };
    let center = origin + extent / 2;

    let mut best: Option<(usize, usize)> = None;
    for offset in center_offsets(extent.saturating_sub(SPLIT_MARGIN)) {
        let Some(at) = center.checked_add_signed(offset) else {
            continue;
        };

        let line = match axis {
            Axis::Rows => Region::new(at, region.c0, 1, region.cols),
            Axis::Cols => Region::new(region.r0, at, region.rows, 1),
        };
        let on_count = grid.count_on(line);

        if best.is_none_or(|(_, min_on)| on_count < min_on) {
            best = Some((at, on_count));
        }
        if on_count == 0 {
            break;
        }
    }

    let (at, on_count) = best?;
    let (first, second) = match axis {
        Axis::Rows => (
            Region::new(region.r0, region.c0, at - region.r0 + 1, region.cols),
            Region::new(at, region.c0, region.r0 + region.rows - at, region.cols),
        ),
        Axis::Cols => (
            Region::new(region.r0, region.c0, region.rows, at - region.c0 + 1),
            Region::new(region.r0, at, region.rows, region.c0 + region.cols - at),
        ),
    };

    Some(Split {
        axis,
        at,
        on_count,
        first,
        second,
    })
}

/// `0, -1, 1, -2, 2, ...`, `n` items.
fn center_offsets(n: usize) -> impl Iterator<Item = isize> {
    (0..n).map(|i| {
        let step = i.div_ceil(2) as isize;
        if i % 2 == 1 { -step } else { step }
    })
}
