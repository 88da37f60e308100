// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Iso level of the contour. A sample at or above it is "inside".
pub const THRESHOLD: Real = 0.5;

/// Lazily-initialized tolerance below which two corner samples are considered equal
/// and edge interpolation collapses to a fraction of `0`.
/// Defaults to `1e-5`, but can be overridden:
///  1) **Build-time**: set env var `ISOMARCH_TOLERANCE` (e.g. `ISOMARCH_TOLERANCE=1e-6 cargo build`)
///  2) **Runtime**: call [`set_tolerance`] once before marching
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
const fn default_tolerance() -> Real {
    1e-5
}

/// Returns the current interpolation tolerance.
/// If not set yet, it tries `ISOMARCH_TOLERANCE` (parsed as the active `Real`) and
/// falls back to the default.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        if let Some(environment_variable) = option_env!("ISOMARCH_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        default_tolerance()
    })
}

/// Set the tolerance programmatically once (subsequent calls are ignored).
/// Call near program start: `isomarch::float_types::set_tolerance(1e-6);`
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}
