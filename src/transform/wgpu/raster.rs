//! WebGPU implementation of raster-scan geodesic distance algorithms.

use crate::transform::impl_generic::{generalised_geodesic2d_impl, geodesic2d_impl};
use crate::transform::traits::raster::GeodesicAlgorithms;
use numr::error::Result;
use numr::runtime::wgpu::{WgpuClient, WgpuRuntime};
use numr::tensor::Tensor;

impl GeodesicAlgorithms<WgpuRuntime> for WgpuClient {
    fn geodesic2d(
        &self,
        image: &Tensor<WgpuRuntime>,
        seeds: &Tensor<WgpuRuntime>,
        v: f64,
        lamb: f64,
        iterations: usize,
    ) -> Result<Tensor<WgpuRuntime>> {
        geodesic2d_impl(self, image, seeds, v, lamb, iterations)
    }

    fn generalised_geodesic2d(
        &self,
        image: &Tensor<WgpuRuntime>,
        softmask: &Tensor<WgpuRuntime>,
        v: f64,
        lamb: f64,
        iterations: usize,
    ) -> Result<Tensor<WgpuRuntime>> {
        generalised_geodesic2d_impl(self, image, softmask, v, lamb, iterations)
    }
}
