//! Geodesic distance transforms.
//!
//! This module provides raster-scan distance transforms for 2D images:
//! - Hard-seeded geodesic distance (`geodesic2d`)
//! - Generalised geodesic distance with a soft seed mask
//!   (`generalised_geodesic2d`)
//!
//! # Runtime-Generic Architecture
//!
//! All operations are implemented generically over numr's `Runtime` trait.
//! The same code works on CPU, CUDA, and WebGPU backends with **zero
//! duplication**.
//!
//! ```text
//! transform/
//! ├── mod.rs                # Exports only
//! ├── validation.rs         # Input validation helpers
//! ├── traits/               # Algorithm trait definitions
//! │   └── raster.rs
//! ├── impl_generic/         # Generic implementations (written once)
//! │   └── raster.rs
//! ├── cpu/                  # CPU trait impl (pure delegation)
//! │   └── ...
//! ├── cuda/                 # CUDA trait impl (pure delegation)
//! │   └── ...
//! └── wgpu/                 # WebGPU trait impl (pure delegation)
//!     └── ...
//! ```
//!
//! # Backend Support
//!
//! - CPU (F32, F64)
//! - CUDA (F32, F64) - requires `cuda` feature
//! - WebGPU (F32 only) - requires `wgpu` feature

mod cpu;
pub mod impl_generic;
pub mod traits;
mod validation;

#[cfg(feature = "cuda")]
mod cuda;

#[cfg(feature = "wgpu")]
mod wgpu;

// Re-export validation helpers
pub use validation::{
    validate_blend, validate_grid_dtype, validate_image_shape, validate_iterations,
    validate_mask_shape, validate_weighting,
};

// Re-export traits and types
pub use traits::raster::GeodesicAlgorithms;
