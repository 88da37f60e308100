//! Single-loop contour tracer

use crate::errors::MarchError;
use crate::field::ScalarField;
use crate::float_types::Real;
use crate::march::case::{CaseCode, Direction, classify};
use crate::observer::{LoopKind, TraceObserver};
use crate::polygon::{Polyline, Vertex};

/// A closed loop produced by [`trace_loop`].
#[derive(Clone, Debug, PartialEq)]
pub struct TracedLoop {
    pub vertices: Polyline,
    pub kind: LoopKind,
    /// Blocks visited, one vertex each.
    pub steps: usize,
    /// Convex-corner visits (one sample inside).
    pub out_turns: usize,
    /// Concave-corner and saddle visits.
    pub in_turns: usize,
}

/// Upper bound on the steps of one trace.
///
/// Traversal positions span `(width + 1) × (height + 1)`; a loop passes each one
/// at most once, saddles at most twice.
pub fn step_limit(width: usize, height: usize) -> usize {
    2 * (width + 1) * (height + 1)
}

/// **Boundary following over one closed loop**
///
/// Walks the 0.5 isocontour starting at traversal position `start`, emitting one
/// interpolated vertex per visited block, until it re-enters `start` the same way
/// it first passed through it. The loop is classified by comparing how often it
/// turned around convex corners against concave ones: a hole sees more concave
/// corners than convex ones.
///
/// `start` should hold an inside sample with an outside sample to its left (a
/// rising edge), which is what the boundary scanner hands in. Any other mixed
/// block works as well; a trivial block is an [`MarchError::InvariantViolation`].
///
/// # Errors
/// - [`MarchError::InvariantViolation`] if no step is defined at some block.
/// - [`MarchError::FailsafeExceeded`] if the walk does not close within
///   [`step_limit`] steps.
pub fn trace_loop<F, O>(
    field: &F,
    start: (usize, usize),
    flip_y: bool,
    observer: &mut O,
) -> Result<TracedLoop, MarchError>
where
    F: ScalarField + ?Sized,
    O: TraceObserver + ?Sized,
{
    walk(field, start, flip_y, |x, y, case, _| observer.visit(x, y, case))
}

/// [`trace_loop`] with a step hook that also learns where each step leads.
pub(crate) fn walk<F, V>(
    field: &F,
    start: (usize, usize),
    flip_y: bool,
    mut on_step: V,
) -> Result<TracedLoop, MarchError>
where
    F: ScalarField + ?Sized,
    V: FnMut(usize, usize, CaseCode, Direction),
{
    let limit = step_limit(field.width(), field.height());
    let y_sign: Real = if flip_y { -1.0 } else { 1.0 };

    let (mut x, mut y) = start;
    let mut previous = Direction::None;
    // Direction that must lead back into `start` for the loop to be closed.
    // Only a saddle start can be re-entered through its other segment.
    let mut closing: Option<Direction> = None;

    let mut vertices = Vec::new();
    let mut out_turns = 0;
    let mut in_turns = 0;
    let mut steps = 0;

    loop {
        if steps >= limit {
            return Err(MarchError::FailsafeExceeded {
                x: start.0,
                y: start.1,
                limit,
            });
        }

        let (case, samples) = classify(field, x, y);
        let branch = case
            .resolve(previous)
            .filter(|b| b.next != Direction::None)
            .ok_or(MarchError::InvariantViolation { x, y, case })?;

        if steps == 0 && case.is_saddle() {
            closing = Some(branch.after);
        }

        if case.is_convex_corner() {
            out_turns += 1;
        } else if case.is_concave_corner() || case.is_saddle() {
            in_turns += 1;
        }

        // Block origin is the TL sample's centre, half a cell up-left of (x, y).
        let (fx, fy) = branch.entry.crossing(&samples);
        vertices.push(Vertex::new(
            x as Real - 0.5 + fx,
            y_sign * (y as Real - 0.5 + fy),
        ));

        on_step(x, y, case, branch.next);
        steps += 1;

        let (dx, dy) = branch.next.offset();
        let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
            return Err(MarchError::InvariantViolation { x, y, case });
        };
        x = nx;
        y = ny;
        previous = branch.next;

        if (x, y) == start && closing.is_none_or(|d| d == previous) {
            break;
        }
    }

    let kind = if in_turns > out_turns {
        LoopKind::Hole
    } else {
        LoopKind::Exterior
    };

    Ok(TracedLoop {
        vertices: Polyline::new(vertices),
        kind,
        steps,
        out_turns,
        in_turns,
    })
}
