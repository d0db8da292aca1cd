//! Generic distance transform implementations.

pub mod raster;

pub use raster::{generalised_geodesic2d_impl, geodesic2d_impl};
