//! Raster scan that discovers loops and assembles polygons

use crate::errors::MarchError;
use crate::field::ScalarField;
use crate::march::Direction;
use crate::march::tracer::walk;
use crate::observer::{LoopKind, TraceObserver};
use crate::polygon::{Polygon, Polyline};

/// **Boundary scanner and polygon assembler**
///
/// Scans rows top to bottom, columns left to right, looking for rising edges
/// (an inside sample whose left neighbour is outside). A rising edge on a block
/// that some earlier trace already painted only updates which polygon the scan
/// is currently inside of. An unpainted rising edge launches a new trace; the
/// resulting loop either becomes a new polygon or a hole of the polygon the scan
/// is currently inside of.
///
/// Loop ids start at 1 (0 marks unpainted blocks) and increase by one per loop,
/// holes included. `owners[id - 1]` is the index of the polygon loop `id` bounds.
pub(crate) fn march_field<F, O>(
    field: &F,
    flip_y: bool,
    observer: &mut O,
) -> Result<Vec<Polygon>, MarchError>
where
    F: ScalarField + ?Sized,
    O: TraceObserver + ?Sized,
{
    let (width, height) = (field.width(), field.height());

    let mut polygons: Vec<Polygon> = Vec::new();
    let mut owners: Vec<usize> = Vec::new();
    let mut ids = vec![0usize; width * height];
    let mut holes = 0;

    for y in 0..height {
        let mut last = false;
        let mut owner: Option<usize> = None;
        for x in 0..width {
            let curr = field.is_inside(x, y);
            let rising = curr && !last;
            last = curr;
            if !rising {
                continue;
            }

            let painted = ids[y * width + x];
            if painted != 0 {
                owner = Some(owners[painted - 1]);
                continue;
            }

            let id = owners.len() + 1;
            observer.loop_started(id, x, y);
            let traced = walk(field, (x, y), flip_y, |vx, vy, case, next| {
                // A saddle holds two segments; only the one leaving downwards
                // crosses the block's bottom edge, which is what a rising edge
                // at this block would be looking for.
                let owns_bottom = !case.is_saddle() || next == Direction::Down;
                if owns_bottom && vx < width && vy < height {
                    ids[vy * width + vx] = id;
                }
                observer.visit(vx, vy, case);
            })?;

            log::trace!(
                "loop {id} at ({x}, {y}): {:?}, {} vertices, {} out / {} in turns",
                traced.kind,
                traced.vertices.len(),
                traced.out_turns,
                traced.in_turns,
            );

            match traced.kind {
                LoopKind::Exterior => {
                    let index = polygons.len();
                    polygons.push(Polygon::new(traced.vertices, Vec::new()));
                    owners.push(index);
                    owner = Some(index);
                },
                LoopKind::Hole => {
                    let parent = match owner {
                        Some(parent) => parent,
                        None => enclosing_exterior(&polygons, &traced.vertices)
                            .ok_or(MarchError::OrphanHole { x, y })?,
                    };
                    polygons[parent].interiors.push(traced.vertices);
                    owners.push(parent);
                    holes += 1;
                },
            }
            observer.loop_finished(id, traced.kind);
        }
    }

    log::debug!(
        "marched {width}x{height} field: {} loops, {} polygons, {holes} holes",
        owners.len(),
        polygons.len(),
    );
    Ok(polygons)
}

/// Last discovered polygon whose exterior strictly contains the hole's first vertex.
fn enclosing_exterior(polygons: &[Polygon], hole: &Polyline) -> Option<usize> {
    let probe = hole.first()?;
    let found = polygons
        .iter()
        .rposition(|polygon| polygon.exterior.encloses(probe));
    if let Some(index) = found {
        log::warn!(
            "hole at ({}, {}) had no owner in its row, attached to polygon {index} by containment",
            probe.x,
            probe.y
        );
    }
    found
}
