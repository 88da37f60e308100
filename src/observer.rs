//! Trace observers
//!
//! An observer is told about every block the tracer visits and about every loop
//! the scanner launches. It is a side channel for debugging and visualisation:
//! nothing an observer does can change the polygons that come out of a march.

use crate::march::CaseCode;

/// Whether a traced loop bounds a shape or a hole in one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoopKind {
    Exterior,
    Hole,
}

/// Receives tracer events.
pub trait TraceObserver {
    /// Called once per step, after the step's vertex has been emitted.
    fn visit(&mut self, x: usize, y: usize, case: CaseCode);

    /// The scanner is about to trace loop `id` from the rising edge at `(x, y)`.
    fn loop_started(&mut self, _id: usize, _x: usize, _y: usize) {}

    /// Loop `id` has been traced and classified.
    fn loop_finished(&mut self, _id: usize, _kind: LoopKind) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl TraceObserver for NoopObserver {
    #[inline]
    fn visit(&mut self, _x: usize, _y: usize, _case: CaseCode) {}
}

impl<F> TraceObserver for F
where
    F: FnMut(usize, usize, CaseCode),
{
    #[inline]
    fn visit(&mut self, x: usize, y: usize, case: CaseCode) {
        self(x, y, case)
    }
}

/// One recorded tracer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    Started { id: usize, x: usize, y: usize },
    Visited { x: usize, y: usize, case: CaseCode },
    Finished { id: usize, kind: LoopKind },
}

/// Observer that records every event in order.
#[derive(Clone, Debug, Default)]
pub struct VisitLog {
    events: Vec<TraceEvent>,
}

impl VisitLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Every visited block, in visiting order.
    pub fn visits(&self) -> impl Iterator<Item = (usize, usize, CaseCode)> + '_ {
        self.events.iter().filter_map(|e| match *e {
            TraceEvent::Visited { x, y, case } => Some((x, y, case)),
            _ => None,
        })
    }

    /// Rising edges that launched a trace, in launch order.
    pub fn starts(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.events.iter().filter_map(|e| match *e {
            TraceEvent::Started { x, y, .. } => Some((x, y)),
            _ => None,
        })
    }

    /// Classification of every finished loop, in loop order.
    pub fn kinds(&self) -> impl Iterator<Item = LoopKind> + '_ {
        self.events.iter().filter_map(|e| match *e {
            TraceEvent::Finished { kind, .. } => Some(kind),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TraceObserver for VisitLog {
    fn visit(&mut self, x: usize, y: usize, case: CaseCode) {
        self.events.push(TraceEvent::Visited { x, y, case });
    }

    fn loop_started(&mut self, id: usize, x: usize, y: usize) {
        self.events.push(TraceEvent::Started { id, x, y });
    }

    fn loop_finished(&mut self, id: usize, kind: LoopKind) {
        self.events.push(TraceEvent::Finished { id, kind });
    }
}

#[cfg(feature = "image-io")]
impl VisitLog {
    /// Paints the recorded trace over the field.
    ///
    /// Inside samples are gray, outside ones black, trace starts green, and every
    /// visit adds red. Visits off the grid are dropped. Nothing is written to disk.
    pub fn render<F: crate::field::ScalarField + ?Sized>(&self, field: &F) -> image::RgbImage {
        use image::Rgb;

        let (w, h) = (field.width(), field.height());
        let mut img = image::RgbImage::from_fn(w as u32, h as u32, |x, y| {
            if field.is_inside(x as usize, y as usize) {
                Rgb([127, 127, 127])
            } else {
                Rgb([0, 0, 0])
            }
        });

        for event in &self.events {
            match *event {
                TraceEvent::Started { x, y, .. } if x < w && y < h => {
                    img.put_pixel(x as u32, y as u32, Rgb([0, 255, 0]));
                },
                TraceEvent::Visited { x, y, .. } if x < w && y < h => {
                    let px = img.get_pixel_mut(x as u32, y as u32);
                    px.0[0] = px.0[0].saturating_add(128);
                },
                _ => {},
            }
        }
        img
    }
}
