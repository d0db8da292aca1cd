//! CUDA implementation of raster-scan geodesic distance algorithms.
//!
//! The raster scan has a sequential read-after-write dependency inside each
//! sweep, so the kernel runs host-side; only tensor residency is CUDA.

use crate::transform::impl_generic::{generalised_geodesic2d_impl, geodesic2d_impl};
use crate::transform::traits::raster::GeodesicAlgorithms;
use numr::error::Result;
use numr::runtime::cuda::{CudaClient, CudaRuntime};
use numr::tensor::Tensor;

impl GeodesicAlgorithms<CudaRuntime> for CudaClient {
    fn geodesic2d(
        &self,
        image: &Tensor<CudaRuntime>,
        seeds: &Tensor<CudaRuntime>,
        v: f64,
        lamb: f64,
        iterations: usize,
    ) -> Result<Tensor<CudaRuntime>> {
        geodesic2d_impl(self, image, seeds, v, lamb, iterations)
    }

    fn generalised_geodesic2d(
        &self,
        image: &Tensor<CudaRuntime>,
        softmask: &Tensor<CudaRuntime>,
        v: f64,
        lamb: f64,
        iterations: usize,
    ) -> Result<Tensor<CudaRuntime>> {
        generalised_geodesic2d_impl(self, image, softmask, v, lamb, iterations)
    }
}
