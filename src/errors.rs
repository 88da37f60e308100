//! Marching errors

use crate::march::CaseCode;

/// Everything that can abort a [`march`](crate::march::march) call or a field construction.
///
/// The two trace failures are fatal for the whole call: no polygons are returned
/// from a march that hit one of them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarchError {
    /// (InvariantViolation) The step table resolved to `None` while a loop was being traced
    #[error("(InvariantViolation) no step for case {case} at ({x}, {y})")]
    InvariantViolation { x: usize, y: usize, case: CaseCode },
    /// (FailsafeExceeded) A single trace took more steps than the grid allows
    #[error("(FailsafeExceeded) trace starting at ({x}, {y}) exceeded {limit} steps")]
    FailsafeExceeded { x: usize, y: usize, limit: usize },
    /// (OrphanHole) A hole was traced but no exterior encloses it
    #[error("(OrphanHole) hole starting at ({x}, {y}) has no enclosing exterior")]
    OrphanHole { x: usize, y: usize },
    /// (SizeMismatch) A sample buffer does not match the declared dimensions
    #[error("(SizeMismatch) expected {expected} samples, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    /// (ChannelCount) A multi-channel field needs at least three channels
    #[error("(ChannelCount) need at least 3 channels for a median, got {0}")]
    ChannelCount(usize),
}
