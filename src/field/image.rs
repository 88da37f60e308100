//! Build `Grid`s from already-decoded images

use crate::field::{Grid, median3};
use crate::float_types::Real;
use image::{GrayImage, RgbImage, RgbaImage};

#[inline]
fn unit(v: u8) -> Real {
    v as Real / u8::MAX as Real
}

impl Grid {
    /// Builds a field from a grayscale image, mapping `0..=255` onto `[0, 1]`.
    ///
    /// # Example
    /// ```
    /// # use image::{GrayImage, Luma};
    /// # use isomarch::field::{Grid, ScalarField};
    /// let mut img = GrayImage::new(4, 4);
    /// img.put_pixel(1, 1, Luma([255]));
    /// let grid = Grid::from_luma(&img);
    /// assert_eq!(grid.get(1, 1), 1.0);
    /// ```
    pub fn from_luma(img: &GrayImage) -> Self {
        Grid::from_fn(img.width() as usize, img.height() as usize, |x, y| {
            unit(img.get_pixel(x as u32, y as u32)[0])
        })
    }

    /// Builds a field from a 3-channel MSDF texture (median of R, G and B).
    pub fn from_msdf_rgb(img: &RgbImage) -> Self {
        Grid::from_fn(img.width() as usize, img.height() as usize, |x, y| {
            let [r, g, b] = img.get_pixel(x as u32, y as u32).0;
            median3(unit(r), unit(g), unit(b))
        })
    }

    /// Builds a field from a 4-channel MSDF texture. Alpha is ignored.
    pub fn from_msdf_rgba(img: &RgbaImage) -> Self {
        Grid::from_fn(img.width() as usize, img.height() as usize, |x, y| {
            let [r, g, b, _] = img.get_pixel(x as u32, y as u32).0;
            median3(unit(r), unit(g), unit(b))
        })
    }
}
