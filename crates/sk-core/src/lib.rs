//! Foundational primitives for skeleton tracing.
//!
//! ## Binary Grid
//! [`BitGrid`] stores one byte per cell, `0` for "off" and `1` for "on", in a
//! flat row-major buffer of exactly `rows * cols` cells. It is built once from
//! caller pixel data and an "is on" predicate.
//!
//! ## Pixel References
//! [`PixelRef`] is an index into the grid buffer. Components compare
//! references to decide whether two chains end on the same physical pixel;
//! coordinates are only materialized at the very end via
//! [`BitGrid::coords`].
//!
//! ## Sections
//! [`BitGrid::section`] enumerates a rectangle row-major. Negative extents
//! walk backwards from the origin, which is how a clockwise frame walk is
//! assembled without copying pixels.
//!
//! ## Float Geometry
//! [`geom`] holds the point/line helpers used to post-process traced
//! polylines (projection, squared distance to a segment).

mod error;
pub mod geom;
mod grid;

pub use error::Error;
pub use geom::{Line2f, Point2f, Polyline2f, Vec2f};
pub use grid::{BitGrid, PixelRef, Region, Section};
