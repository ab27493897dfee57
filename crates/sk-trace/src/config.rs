use serde::{Deserialize, Serialize};

/// Grids below this size in either dimension cannot be traced.
pub const MIN_GRID_SIZE: usize = 3;

/// Regions with no side longer than this are fitted directly; a 5x5 region
/// is the largest default leaf.
pub const MAX_LEAF_SIZE: usize = 5;

/// Rows/columns at the region edges that are never split candidates.
pub const SPLIT_MARGIN: usize = 4;

/// 3x3 "on" count at which junction estimation stops searching.
pub const DEFAULT_JUNCTION_SCORE_STOP: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Smallest region side worth splitting further; floored to
    /// [`MIN_GRID_SIZE`]. Smaller values trace finer and noisier polylines.
    pub min_section_size: usize,
    /// Maximum split depth, `0` for unbounded.
    pub max_recursions: usize,
    /// Run Zhang-Suen thinning before tracing. Can be disabled for inputs
    /// that are already one pixel wide.
    pub thinning: bool,
    pub junction_score_stop: usize,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            min_section_size: 3,
            max_recursions: 0,
            thinning: true,
            junction_score_stop: DEFAULT_JUNCTION_SCORE_STOP,
        }
    }
}

impl TraceConfig {
    pub fn effective_min_section_size(&self) -> usize {
        self.min_section_size.max(MIN_GRID_SIZE)
    }

    /// Regions with both sides at or below this are fitted directly; larger
    /// ones are split.
    pub fn max_leaf_size(&self) -> usize {
        self.effective_min_section_size().max(MAX_LEAF_SIZE)
    }

    pub fn effective_max_recursions(&self) -> usize {
        if self.max_recursions == 0 {
            usize::MAX
        } else {
            self.max_recursions
        }
    }
}
