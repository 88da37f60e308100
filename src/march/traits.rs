//! Traits defining marching operations for dependency inversion

use crate::errors::MarchError;
use crate::field::ScalarField;
use crate::observer::{NoopObserver, TraceObserver};
use crate::polygon::Polygon;

/// Core marching operations trait
pub trait MarchOps {
    /// March one field, reporting every visited block to `observer`.
    fn march_observed<F, O>(
        &self,
        field: &F,
        flip_y: bool,
        observer: &mut O,
    ) -> Result<Vec<Polygon>, MarchError>
    where
        F: ScalarField + ?Sized,
        O: TraceObserver + ?Sized;

    /// March one field.
    fn march<F>(&self, field: &F, flip_y: bool) -> Result<Vec<Polygon>, MarchError>
    where
        F: ScalarField + ?Sized,
    {
        self.march_observed(field, flip_y, &mut NoopObserver)
    }

    /// March many independent fields. Results are in input order.
    fn march_batch<F>(&self, fields: &[F], flip_y: bool) -> Result<Vec<Vec<Polygon>>, MarchError>
    where
        F: ScalarField + Sync;
}
