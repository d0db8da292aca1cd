//! Distance transform algorithm traits.

pub mod raster;

pub use raster::GeodesicAlgorithms;
