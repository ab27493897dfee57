//! Umbrella crate for the `skeleton-trace` workspace.
//!
//! Re-exports the grid and geometry types, thinning, the skeleton tracer and
//! the polyline post-processing helpers, so most callers only need
//! [`fit_polylines`]:
//!
//! ```
//! use skeleton_trace::{TraceConfig, fit_polylines};
//!
//! let mut mask = vec![0u8; 5 * 5];
//! for i in 0..5 {
//!     mask[i * 5 + i] = 255;
//! }
//!
//! let polylines = fit_polylines(&mask, 5, 5, |&v| v > 127, &TraceConfig::default())?;
//! assert!(!polylines.is_empty());
//! # Ok::<(), skeleton_trace::Error>(())
//! ```

pub use sk_core::*;
pub use sk_fit::*;
pub use sk_morph::*;
pub use sk_trace::*;
