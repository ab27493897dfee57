//! Post-processing for traced skeleton polylines.
//!
//! - [`simplify_in_place`] / [`simplify_polyline`]: Ramer-Douglas-Peucker
//!   reduction of a polyline to the points that carry its shape.
//! - [`fit_segment`]: RANSAC line segment estimation over arbitrary items,
//!   with [`partition_inliers`] to separate the points it explains.
//!
//! Both work on any item type through a coordinate accessor, so pixel
//! chains, `(row, col)` pairs and float points are handled alike.

mod ransac;
mod simplify;

pub use ransac::{
    FittedSegment, SegmentFitConfig, fit_segment, fit_segment_with_rng, partition_inliers,
};
pub use simplify::{simplify_in_place, simplify_polyline};
