//! Binary thinning for skeleton tracing.
//!
//! [`thin_zhang_suen`] erodes every "on" region of a [`BitGrid`] in place until
//! it is one pixel wide, following T. Y. Zhang and C. Y. Suen, "A fast
//! parallel algorithm for thinning digital patterns" (CACM, 1984).
//!
//! Neighborhood convention (`p1` is the pixel under test):
//!
//! ```text
//! p9 p2 p3
//! p8 p1 p4
//! p7 p6 p5
//! ```
//!
//! Only interior pixels are examined; the outermost ring of the grid is never
//! modified. Deletions within one sub-pass are applied together after the whole
//! sub-pass has been evaluated, so the result does not depend on scan order.

use log::debug;
use sk_core::{BitGrid, PixelRef};

/// `(d_row, d_col)` of `p2..=p9`, clockwise starting above.
const RING: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThinningStats {
    /// Sub-passes evaluated, including the two final idle ones.
    pub sub_passes: usize,
    pub removed: usize,
}

/// Thins `grid` in place to a 1-pixel-wide skeleton.
///
/// Runs alternating sub-passes until a full round (both sub-passes) removes
/// nothing. Grids smaller than 3x3 have no interior and are left unchanged.
pub fn thin_zhang_suen(grid: &mut BitGrid) -> ThinningStats {
    let mut stats = ThinningStats::default();
    let Some(interior) = grid.full().interior() else {
        return stats;
    };

    let mut candidates: Vec<PixelRef> = grid
        .pixels(interior)
        .filter(|&px| grid.is_on(px))
        .collect();
    let mut flagged = Vec::with_capacity(candidates.len());

    let mut second = false;
    let mut idle = 0;
    while idle < 2 {
        candidates.retain(|&px| grid.is_on(px));

        flagged.clear();
        for &px in &candidates {
            if is_deletable(grid, px, second) {
                flagged.push(px);
            }
        }

        for &px in &flagged {
            grid.set(px, false);
        }

        stats.sub_passes += 1;
        stats.removed += flagged.len();
        idle = if flagged.is_empty() { idle + 1 } else { 0 };
        second = !second;
    }

    debug!(
        "thin_zhang_suen: {}x{} grid, {} sub-passes, {} pixels removed",
        grid.rows(),
        grid.cols(),
        stats.sub_passes,
        stats.removed
    );

    stats
}

fn is_deletable(grid: &BitGrid, px: PixelRef, second: bool) -> bool {
    let ring = neighbors(grid, px);
    let [p2, _, p4, _, p6, _, p8, _] = ring;

    let transitions = (0..8).filter(|&i| !ring[i] && ring[(i + 1) % 8]).count();
    let on = ring.iter().filter(|&&v| v).count();

    let (m1, m2) = if second {
        (p2 && p4 && p8, p2 && p6 && p8)
    } else {
        (p2 && p4 && p6, p4 && p6 && p8)
    };

    transitions == 1 && (2..=6).contains(&on) && !m1 && !m2
}

/// `p2..=p9` of an interior pixel.
#[inline]
fn neighbors(grid: &BitGrid, px: PixelRef) -> [bool; 8] {
    let (r, c) = grid.coords(px);
    RING.map(|(dr, dc)| {
        grid.is_on(grid.find(r.wrapping_add_signed(dr), c.wrapping_add_signed(dc)))
    })
}
