//! Skeleton tracing of binary grids.
//!
//! [`fit_polylines`] classifies raw pixels into a [`BitGrid`](sk_core::BitGrid),
//! thins it (see `sk-morph`) and traces the skeleton by recursive
//! divide-and-conquer:
//! - A region without "on" pixels contributes nothing.
//! - Small regions, or regions at the depth limit, are leaves: their frame is
//!   scanned for skeleton entrances which are joined by straight segments,
//!   either directly or through an estimated junction pixel
//!   ([`fit_segments`]).
//! - Larger regions are cut along the row or column with the fewest "on"
//!   pixels near the center ([`find_split`]). The halves share the cut line,
//!   so chains from both sides meet on identical pixels and are stitched back
//!   together ([`merge_chains`]).
//!
//! The output is a list of [`Polyline`]s in `(row, col)` coordinates. The
//! tracer is heuristic: it does not compute an exact medial axis.
//!
//! With the `parallel` feature the two halves of every split are traced on
//! the rayon thread pool. Results are identical to the sequential path.

mod chain;
mod config;
mod leaf;
mod merge;
mod split;
mod tracer;

pub use chain::{Chain, Polyline};
pub use config::{
    DEFAULT_JUNCTION_SCORE_STOP, MIN_GRID_SIZE, MAX_LEAF_SIZE, SPLIT_MARGIN, TraceConfig,
};
pub use leaf::{estimate_junction, fit_segments};
pub use merge::merge_chains;
pub use split::{Axis, Split, find_split};
pub use tracer::{fit_polylines, trace_grid};
