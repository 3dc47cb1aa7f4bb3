//! The forward projection driver: angle sampling, per-angle rotate-and-sum,
//! sinogram assembly and cropping.
//!
//! `radon_transform` approximates each set of parallel line integrals by
//! rotating a zero-padded copy of the image and summing the rotated grid
//! column-wise. The padding geometry guarantees no content can leave the
//! grid for any angle, so the only accuracy cost is the bilinear resampling
//! itself. The per-angle loop fans out over the rayon pool; every task owns
//! its rotated scratch grid and writes one disjoint sinogram column.

use ndarray::{s, Array2, ArrayView2, Axis};
use rayon::prelude::*;

use crate::error::Error;
use crate::pad::{pad_to_square, Padding};
use crate::rotate::rotate_bilinear;
use crate::sinogram::Sinogram;
use crate::{Anglef32, Intensityf32};

/// `num_angles` angles evenly spaced over the half-open interval
/// `[theta_start, theta_end)`. The end angle is never sampled: a full sweep
/// `theta_range(0.0, 180.0, 180)` steps by one degree and does not duplicate
/// `180 ≈ 0`.
pub fn theta_range(theta_start: Anglef32, theta_end: Anglef32, num_angles: usize) -> Vec<Anglef32> {
    let step = (theta_end - theta_start) / num_angles as Anglef32;
    (0..num_angles)
        .map(|i| theta_start + step * i as Anglef32)
        .collect()
}

/// Compute the Radon transform of `image` over `num_angles` angles in
/// `[theta_start, theta_end)` degrees.
///
/// The result has one row per offset `s` (the original image height `H`,
/// cropped back out of the padded extent) and one column per angle, in
/// sampling order. `num_angles == 0` yields a well-formed `H x 0` sinogram.
///
/// The crop slices rows `[pad_y .. pad_y + H]` of the padded accumulator;
/// `pad_y` is a floor division, so this is the sole source of truth for the
/// output height (and, mirroring the original contract, it is applied to
/// the offset axis even for non-square images).
pub fn radon_transform(
    image      : ArrayView2<'_, Intensityf32>,
    theta_start: Anglef32,
    theta_end  : Anglef32,
    num_angles : usize,
) -> Result<Sinogram, Error> {
    let (height, width) = image.dim();
    validate(&image)?;

    let thetas = theta_range(theta_start, theta_end, num_angles);
    if let Some(&angle) = thetas.iter().find(|a| !a.is_finite()) {
        return Err(Error::NonFiniteAngle { angle });
    }

    let padding = Padding::for_image(height, width);
    let padded = pad_to_square(image, padding);

    // One column per angle, written through disjoint mutable lanes: no
    // shared mutable state, no locking
    let mut accumulator = Array2::<Intensityf32>::zeros((padding.side, num_angles));
    accumulator
        .axis_iter_mut(Axis(1))
        .into_par_iter()
        .zip(&thetas)
        .try_for_each(|(mut column, &theta)| {
            let rotated = rotate_bilinear(padded.view(), theta)?;
            column.assign(&rotated.sum_axis(Axis(0)));
            Ok(())
        })?;

    let data = accumulator
        .slice(s![padding.pad_y .. padding.pad_y + height, ..])
        .to_owned();
    Ok(Sinogram::new(data, thetas))
}

/// Shared input checks for `radon_transform` and `SinogramSweep`: reject
/// empty images and non-finite intensities before any resampling happens.
pub(crate) fn validate(image: &ArrayView2<'_, Intensityf32>) -> Result<(), Error> {
    let (height, width) = image.dim();
    if height == 0 || width == 0 {
        return Err(Error::EmptyImage { height, width });
    }
    if let Some(((row, col), &value)) = image.indexed_iter().find(|&(_, v)| !v.is_finite()) {
        return Err(Error::NonFiniteInput { row, col, value });
    }
    Ok(())
}
