//! Scalar fields: the read-only rasters the marcher walks over.
//!
//! A field is a row-major `width × height` grid of membership values. The
//! contour follows the [`THRESHOLD`] crossing; any address off the grid is
//! treated as outside.
//!
//! [`Grid`] is the owned implementation. It can be built from raw samples,
//! from a closure, or from an interleaved multi-channel signed-distance
//! buffer by taking the per-pixel channel median.

use crate::errors::MarchError;
use crate::float_types::{Real, THRESHOLD};

#[cfg(feature = "image-io")]
pub mod image;

/// Read-only access to a rectangular grid of samples.
pub trait ScalarField {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Sample at `(x, y)`. Callers guarantee `x < width` and `y < height`.
    fn get(&self, x: usize, y: usize) -> Real;

    /// All samples in row-major order, `width * height` long.
    fn raw(&self) -> &[Real];

    /// Sample at a signed address, `None` when it falls off the grid.
    #[inline]
    fn sample(&self, x: isize, y: isize) -> Option<Real> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width() && y < self.height() {
            Some(self.get(x, y))
        } else {
            None
        }
    }

    /// True if the sample at `(x, y)` is on or above the threshold.
    #[inline]
    fn is_inside(&self, x: usize, y: usize) -> bool {
        self.get(x, y) >= THRESHOLD
    }
}

impl<F: ScalarField + ?Sized> ScalarField for &F {
    fn width(&self) -> usize {
        (**self).width()
    }

    fn height(&self) -> usize {
        (**self).height()
    }

    fn get(&self, x: usize, y: usize) -> Real {
        (**self).get(x, y)
    }

    fn raw(&self) -> &[Real] {
        (**self).raw()
    }
}

/// Median of three values, branch-free in the common case.
#[inline]
pub fn median3(a: Real, b: Real, c: Real) -> Real {
    a.min(b).max(a.max(b).min(c))
}

/// An owned, row-major scalar field.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    values: Vec<Real>,
}

impl Grid {
    /// A field of the given size with every sample at `0.0` (outside).
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            values: vec![0.0; width * height],
        }
    }

    /// Wraps an existing row-major sample buffer.
    pub fn from_vec(width: usize, height: usize, values: Vec<Real>) -> Result<Self, MarchError> {
        let expected = width * height;
        if values.len() != expected {
            return Err(MarchError::SizeMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self {
            width,
            height,
            values,
        })
    }

    /// Builds a field by evaluating `f(x, y)` for every cell.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Real,
    {
        let mut values = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                values.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            values,
        }
    }

    /// **Multi-channel signed distance field → scalar field**
    ///
    /// Collapses an interleaved buffer with `channels` components per pixel into a
    /// single membership value per pixel by taking the median of the first three
    /// channels. Any further channels (e.g. alpha or a true SDF channel) are ignored.
    ///
    /// Values are taken as-is; normalising integer texels to `[0, 1]` is the
    /// caller's job (see the `image-io` constructors).
    pub fn median_of_channels(
        width: usize,
        height: usize,
        channels: usize,
        values: &[Real],
    ) -> Result<Self, MarchError> {
        if channels < 3 {
            return Err(MarchError::ChannelCount(channels));
        }
        let expected = width * height * channels;
        if values.len() != expected {
            return Err(MarchError::SizeMismatch {
                expected,
                actual: values.len(),
            });
        }
        let values = values
            .chunks_exact(channels)
            .map(|px| median3(px[0], px[1], px[2]))
            .collect();
        Ok(Self {
            width,
            height,
            values,
        })
    }

    /// Overwrites one sample. Panics if `(x, y)` is off the grid.
    pub fn set(&mut self, x: usize, y: usize, value: Real) {
        assert!(x < self.width && y < self.height, "({x}, {y}) is off the grid");
        self.values[y * self.width + x] = value;
    }

    /// Consumes the grid and returns its samples.
    pub fn into_vec(self) -> Vec<Real> {
        self.values
    }
}

impl ScalarField for Grid {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn get(&self, x: usize, y: usize) -> Real {
        self.values[y * self.width + x]
    }

    #[inline]
    fn raw(&self) -> &[Real] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_picks_middle_value() {
        assert_eq!(median3(0.1, 0.9, 0.5), 0.5);
        assert_eq!(median3(0.9, 0.1, 0.5), 0.5);
        assert_eq!(median3(0.5, 0.9, 0.1), 0.5);
        assert_eq!(median3(0.3, 0.3, 0.8), 0.3);
    }

    #[test]
    fn from_vec_rejects_wrong_length() {
        let err = Grid::from_vec(3, 2, vec![0.0; 5]).unwrap_err();
        assert_eq!(
            err,
            MarchError::SizeMismatch {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn sample_is_none_off_grid() {
        let grid = Grid::from_fn(2, 2, |x, y| (x + 2 * y) as Real);
        assert_eq!(grid.sample(-1, 0), None);
        assert_eq!(grid.sample(0, -1), None);
        assert_eq!(grid.sample(2, 0), None);
        assert_eq!(grid.sample(0, 2), None);
        assert_eq!(grid.sample(1, 1), Some(3.0));
    }

    #[test]
    fn median_of_channels_ignores_alpha() {
        let rgba = [0.2, 0.7, 0.6, 0.0, 1.0, 0.0, 0.0, 1.0];
        let grid = Grid::median_of_channels(2, 1, 4, &rgba).unwrap();
        assert_eq!(grid.raw(), &[0.6, 0.0]);
    }

    #[test]
    fn median_of_channels_needs_three_channels() {
        assert_eq!(
            Grid::median_of_channels(1, 1, 2, &[0.0, 1.0]),
            Err(MarchError::ChannelCount(2))
        );
    }
}
