use serde::{Deserialize, Serialize};
use sk_core::{BitGrid, PixelRef, Point2f, Polyline2f};

/// Ordered pixel path with at least two references.
///
/// Chains are only compared by their endpoints when merging.
pub type Chain = Vec<PixelRef>;

/// Traced polyline as `(row, col)` grid coordinates.
///
/// The first and last points are the chain endpoints and may coincide for
/// closed loops.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<(usize, usize)>,
}

impl Polyline {
    pub fn from_chain(grid: &BitGrid, chain: &[PixelRef]) -> Self {
        Self {
            points: chain.iter().map(|&px| grid.coords(px)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<(usize, usize)> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<(usize, usize)> {
        self.points.last().copied()
    }

    /// Float copy with `x = col`, `y = row`.
    pub fn to_polyline2f(&self) -> Polyline2f {
        Polyline2f {
            points: self
                .points
                .iter()
                .map(|&(r, c)| Point2f::new(c as f32, r as f32))
                .collect(),
        }
    }
}
