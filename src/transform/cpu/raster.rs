//! CPU implementation of raster-scan geodesic distance algorithms.

use crate::transform::impl_generic::{generalised_geodesic2d_impl, geodesic2d_impl};
use crate::transform::traits::raster::GeodesicAlgorithms;
use numr::error::Result;
use numr::runtime::cpu::{CpuClient, CpuRuntime};
use numr::tensor::Tensor;

impl GeodesicAlgorithms<CpuRuntime> for CpuClient {
    fn geodesic2d(
        &self,
        image: &Tensor<CpuRuntime>,
        seeds: &Tensor<CpuRuntime>,
        v: f64,
        lamb: f64,
        iterations: usize,
    ) -> Result<Tensor<CpuRuntime>> {
        geodesic2d_impl(self, image, seeds, v, lamb, iterations)
    }

    fn generalised_geodesic2d(
        &self,
        image: &Tensor<CpuRuntime>,
        softmask: &Tensor<CpuRuntime>,
        v: f64,
        lamb: f64,
        iterations: usize,
    ) -> Result<Tensor<CpuRuntime>> {
        generalised_geodesic2d_impl(self, image, softmask, v, lamb, iterations)
    }
}
