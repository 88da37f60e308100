//! Sub-pixel **isocontour extraction** from rectangular scalar fields.
//!
//! A [`field::ScalarField`] (typically the channel median of a multi-channel
//! signed distance glyph texture) is walked with a 16-case marching squares
//! variant. Every 0.5 crossing becomes a closed [`polygon::Polyline`]; loops are
//! classified as exteriors or holes and assembled into [`polygon::Polygon`]s.
//!
//! ```
//! use isomarch::{field::Grid, march};
//!
//! let ring = Grid::from_fn(32, 32, |x, y| {
//!     let d = ((x as f64 - 15.5).powi(2) + (y as f64 - 15.5).powi(2)).sqrt();
//!     if (6.0..12.0).contains(&d) { 1.0 } else { 0.0 }
//! });
//! let polygons = march(&ring, false).unwrap();
//! assert_eq!(polygons.len(), 1);
//! assert_eq!(polygons[0].interiors.len(), 1);
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **image-io**: build fields from decoded `image` buffers (grayscale or MSDF)
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to march batches of fields concurrently

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod field;
pub mod float_types;
pub mod march;
pub mod observer;
pub mod polygon;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::MarchError;
pub use march::{march, march_batch, march_with_observer};
pub use polygon::{Polygon, Polyline, Vertex};
