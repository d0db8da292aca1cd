//! WebGPU implementation of distance transform algorithms.
//!
//! This module implements the distance transform traits for WebGPU
//! by delegating to the generic implementations in `impl_generic/`.
//!
//! # Limitations
//!
//! - Only F32 is supported (WGSL doesn't support F64)

mod raster;
