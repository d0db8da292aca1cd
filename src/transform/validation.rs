//! Validation helpers for distance transform inputs.

use numr::dtype::DType;
use numr::error::{Error, Result};

/// Validate image/mask dtype (must be F32 or F64).
pub fn validate_grid_dtype(dtype: DType, op: &'static str) -> Result<()> {
    match dtype {
        DType::F32 | DType::F64 => Ok(()),
        _ => Err(Error::UnsupportedDType { dtype, op }),
    }
}

/// Validate an image shape and return it as (height, width, channels).
///
/// Accepts `[H, W]` (single channel) or `[H, W, C]` with C >= 1.
/// Zero-sized axes are rejected.
pub fn validate_image_shape(shape: &[usize], op: &'static str) -> Result<(usize, usize, usize)> {
    let (h, w, c) = match *shape {
        [h, w] => (h, w, 1),
        [h, w, c] => (h, w, c),
        _ => {
            return Err(Error::InvalidArgument {
                arg: "image",
                reason: format!(
                    "{op} requires a [H, W] or [H, W, C] image, got {}-D",
                    shape.len()
                ),
            });
        }
    };
    if h == 0 || w == 0 || c == 0 {
        return Err(Error::InvalidArgument {
            arg: "image",
            reason: format!("{op}: image cannot have a zero-sized axis, got {shape:?}"),
        });
    }
    Ok((h, w, c))
}

/// Validate that a seed/soft mask is 2D and matches the image plane.
pub fn validate_mask_shape(
    mask_shape: &[usize],
    height: usize,
    width: usize,
    op: &'static str,
) -> Result<()> {
    if mask_shape.len() != 2 {
        return Err(Error::InvalidArgument {
            arg: "mask",
            reason: format!("{op} requires a 2D [H, W] mask, got {}-D", mask_shape.len()),
        });
    }
    if mask_shape[0] != height || mask_shape[1] != width {
        return Err(Error::InvalidArgument {
            arg: "mask",
            reason: format!(
                "{op} requires the mask to match the image plane: image is [{height}, {width}], mask is {mask_shape:?}"
            ),
        });
    }
    Ok(())
}

/// Validate the unary-to-spatial weighting factor `v`.
pub fn validate_weighting(v: f64, op: &'static str) -> Result<()> {
    if !(v > 0.0) || !v.is_finite() {
        return Err(Error::InvalidArgument {
            arg: "v",
            reason: format!("{op} requires a finite weighting v > 0, got {v}"),
        });
    }
    Ok(())
}

/// Validate the Euclidean/geodesic blend factor `lamb`.
pub fn validate_blend(lamb: f64, op: &'static str) -> Result<()> {
    if !(0.0..=1.0).contains(&lamb) {
        return Err(Error::InvalidArgument {
            arg: "lamb",
            reason: format!("{op} requires 0 <= lamb <= 1, got {lamb}"),
        });
    }
    Ok(())
}

/// Validate the raster pass count.
pub fn validate_iterations(iterations: usize, op: &'static str) -> Result<()> {
    if iterations == 0 {
        return Err(Error::InvalidArgument {
            arg: "iterations",
            reason: format!("{op} requires at least 1 raster pass"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_grid_dtype() {
        assert!(validate_grid_dtype(DType::F32, "test").is_ok());
        assert!(validate_grid_dtype(DType::F64, "test").is_ok());
        assert!(validate_grid_dtype(DType::I32, "test").is_err());
    }

    #[test]
    fn test_validate_image_shape() {
        assert_eq!(validate_image_shape(&[4, 5], "test").unwrap(), (4, 5, 1));
        assert_eq!(validate_image_shape(&[4, 5, 3], "test").unwrap(), (4, 5, 3));
        assert!(validate_image_shape(&[4], "test").is_err());
        assert!(validate_image_shape(&[4, 5, 3, 2], "test").is_err());
        assert!(validate_image_shape(&[0, 5], "test").is_err());
        assert!(validate_image_shape(&[4, 5, 0], "test").is_err());
    }

    #[test]
    fn test_validate_mask_shape() {
        assert!(validate_mask_shape(&[4, 5], 4, 5, "test").is_ok());
        assert!(validate_mask_shape(&[5, 4], 4, 5, "test").is_err());
        assert!(validate_mask_shape(&[4, 5, 1], 4, 5, "test").is_err());
    }

    #[test]
    fn test_validate_weighting() {
        assert!(validate_weighting(1e10, "test").is_ok());
        assert!(validate_weighting(0.0, "test").is_err());
        assert!(validate_weighting(-1.0, "test").is_err());
        assert!(validate_weighting(f64::INFINITY, "test").is_err());
        assert!(validate_weighting(f64::NAN, "test").is_err());
    }

    #[test]
    fn test_validate_blend() {
        assert!(validate_blend(0.0, "test").is_ok());
        assert!(validate_blend(1.0, "test").is_ok());
        assert!(validate_blend(1.1, "test").is_err());
        assert!(validate_blend(-0.1, "test").is_err());
        assert!(validate_blend(f64::NAN, "test").is_err());
    }

    #[test]
    fn test_validate_iterations() {
        assert!(validate_iterations(1, "test").is_ok());
        assert!(validate_iterations(0, "test").is_err());
    }
}
