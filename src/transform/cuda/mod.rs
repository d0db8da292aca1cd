//! CUDA implementation of distance transform algorithms.
//!
//! This module implements the distance transform traits for CUDA
//! by delegating to the generic implementations in `impl_generic/`.

mod raster;
