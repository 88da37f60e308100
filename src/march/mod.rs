//! **Marching squares isocontour extraction**
//!
//! Turns a [`ScalarField`] into simple polygons with holes whose boundaries
//! follow the 0.5 crossing with sub-pixel accuracy.
//!
//! ## **Pipeline**
//! 1. [`classify`] builds the 4-bit [`CaseCode`] of the 2×2 block at a traversal
//!    position; off-grid samples count as outside.
//! 2. The case table picks the next [`Direction`]. The saddle codes 6 and 9 are
//!    resolved by the previous direction so that the inside stays connected
//!    across the diagonal.
//! 3. The entry edge of each block is interpolated linearly between its two
//!    samples, giving one vertex per step.
//! 4. [`trace_loop`] walks one closed loop and classifies it as exterior or
//!    hole by counting convex versus concave turns.
//! 5. The boundary scanner launches a trace at every unvisited rising edge in
//!    row-major order and attaches holes to the polygon they were found in.
//!
//! ## **Determinism**
//! The same field and `flip_y` always give the same polygons, in the same
//! order, with the same starting vertex per loop. Every call allocates its own
//! scratch raster, so a field can be marched from several threads at once.
//!
//! # Example
//! ```
//! use isomarch::field::Grid;
//! use isomarch::march::march;
//!
//! // A 2×2 block of ones in a 4×4 field of zeros
//! let grid = Grid::from_fn(4, 4, |x, y| {
//!     if (1..3).contains(&x) && (1..3).contains(&y) { 1.0 } else { 0.0 }
//! });
//! let polygons = march(&grid, false).unwrap();
//! assert_eq!(polygons.len(), 1);
//! assert!(polygons[0].interiors.is_empty());
//! ```

pub mod case;
pub mod traits;
pub mod serial;
mod scanner;
mod tracer;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use case::{CaseCode, Direction, classify, interpolate};
pub use tracer::{TracedLoop, step_limit, trace_loop};
pub use traits::MarchOps;
pub use serial::SerialMarchOps;

#[cfg(feature = "parallel")]
pub use parallel::ParallelMarchOps;

use crate::errors::MarchError;
use crate::field::ScalarField;
use crate::observer::TraceObserver;
use crate::polygon::Polygon;

/// Extracts every 0.5 isocontour of `field` as polygons with holes.
///
/// Polygons come out in row-major discovery order. `flip_y` negates every
/// emitted y coordinate (raster rows down → mathematical y up).
///
/// # Errors
/// [`MarchError::InvariantViolation`] or [`MarchError::FailsafeExceeded`] if a
/// trace goes wrong, [`MarchError::OrphanHole`] if a hole cannot be attached.
/// No partial result is returned.
pub fn march<F>(field: &F, flip_y: bool) -> Result<Vec<Polygon>, MarchError>
where
    F: ScalarField + ?Sized,
{
    SerialMarchOps::new().march(field, flip_y)
}

/// Like [`march`], reporting every traced loop and visited block to `observer`.
pub fn march_with_observer<F, O>(
    field: &F,
    flip_y: bool,
    observer: &mut O,
) -> Result<Vec<Polygon>, MarchError>
where
    F: ScalarField + ?Sized,
    O: TraceObserver + ?Sized,
{
    SerialMarchOps::new().march_observed(field, flip_y, observer)
}

/// Marches many independent fields, in parallel with the `parallel` feature.
pub fn march_batch<F>(fields: &[F], flip_y: bool) -> Result<Vec<Vec<Polygon>>, MarchError>
where
    F: ScalarField + Sync,
{
    #[cfg(not(feature = "parallel"))]
    let ops = SerialMarchOps::new();
    #[cfg(feature = "parallel")]
    let ops = ParallelMarchOps::new();

    ops.march_batch(fields, flip_y)
}
