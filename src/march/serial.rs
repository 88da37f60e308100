//! Serial implementation of marching

use crate::errors::MarchError;
use crate::field::ScalarField;
use crate::march::scanner::march_field;
use crate::march::traits::MarchOps;
use crate::observer::{NoopObserver, TraceObserver};
use crate::polygon::Polygon;

/// Serial implementation of marching
pub struct SerialMarchOps;

impl SerialMarchOps {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for SerialMarchOps {
    fn default() -> Self {
        Self::new()
    }
}

impl MarchOps for SerialMarchOps {
    fn march_observed<F, O>(
        &self,
        field: &F,
        flip_y: bool,
        observer: &mut O,
    ) -> Result<Vec<Polygon>, MarchError>
    where
        F: ScalarField + ?Sized,
        O: TraceObserver + ?Sized,
    {
        march_field(field, flip_y, observer)
    }

    fn march_batch<F>(&self, fields: &[F], flip_y: bool) -> Result<Vec<Vec<Polygon>>, MarchError>
    where
        F: ScalarField + Sync,
    {
        fields
            .iter()
            .map(|field| march_field(field, flip_y, &mut NoopObserver))
            .collect()
    }
}
