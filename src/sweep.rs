//! Incremental, column-at-a-time sinogram assembly for renderers.
//!
//! The animation loop this serves projects a single angle per displayed
//! frame, revealing the sinogram one column at a time and starting over
//! after a full sweep. All of that state lives here explicitly: the current
//! angle index and the accumulated columns, reset via [`SinogramSweep::reset`]
//! rather than by any module-level mutation. The crate knows nothing about
//! display refresh, timers, or frame rate; callers own the frame loop.

use ndarray::{Array2, ArrayView2, Axis};

use crate::error::Error;
use crate::projector::{radon_transform, validate};
use crate::rotate::rotate_bilinear;
use crate::{Anglef32, Intensityf32};

/// Renderer-side accumulator for a repeating 1-degree-step sweep over
/// `[0, max_theta)`.
pub struct SinogramSweep {
    image: Array2<Intensityf32>,
    columns: Array2<Intensityf32>,
    angle_index: usize,
    max_theta: usize,
}

impl SinogramSweep {
    /// Validates `image` once; subsequent `step`s cannot fail on input.
    /// `max_theta` must be at least 1.
    pub fn new(image: ArrayView2<'_, Intensityf32>, max_theta: usize) -> Result<Self, Error> {
        assert!(max_theta > 0, "a sweep needs at least one angle");
        validate(&image)?;
        let height = image.nrows();
        Ok(SinogramSweep {
            image: image.to_owned(),
            columns: Array2::zeros((height, max_theta)),
            angle_index: 0,
            max_theta,
        })
    }

    /// Project the current angle into its column and advance, wrapping at
    /// `max_theta`. Starting a new sweep clears the previous one's columns.
    /// Returns the angle just projected, in degrees.
    pub fn step(&mut self) -> Result<Anglef32, Error> {
        if self.angle_index == 0 {
            self.columns.fill(0.0);
        }
        let theta = self.angle_index as Anglef32;
        let single = radon_transform(self.image.view(), theta, theta + 1.0, 1)?;
        self.columns
            .column_mut(self.angle_index)
            .assign(&single.column(0));
        self.angle_index = (self.angle_index + 1) % self.max_theta;
        Ok(theta)
    }

    /// Restart the sweep: angle index back to zero, all columns cleared.
    pub fn reset(&mut self) {
        self.angle_index = 0;
        self.columns.fill(0.0);
    }

    /// The unpadded input rotated to the current angle, for side-by-side
    /// display next to the growing sinogram.
    pub fn rotated_preview(&self) -> Result<Array2<Intensityf32>, Error> {
        rotate_bilinear(self.image.view(), self.angle_index as Anglef32)
    }

    /// The columns accumulated so far; untouched angles are still zero.
    pub fn columns(&self) -> ArrayView2<'_, Intensityf32> {
        self.columns.view()
    }

    pub fn angle_index(&self) -> usize { self.angle_index }

    pub fn max_theta(&self) -> usize { self.max_theta }

    /// Total intensity accumulated so far, all angles together.
    pub fn total(&self) -> Intensityf32 {
        self.columns.sum_axis(Axis(0)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;
    use pretty_assertions::assert_eq;

    fn test_image() -> Array2<f32> {
        let mut image = Array2::zeros((4, 4));
        image[[1, 1]] = 10.0;
        image
    }

    #[test]
    fn step_advances_and_wraps() {
        let image = test_image();
        let mut sweep = SinogramSweep::new(image.view(), 3).unwrap();
        assert_eq!(sweep.step().unwrap(), 0.0);
        assert_eq!(sweep.step().unwrap(), 1.0);
        assert_eq!(sweep.angle_index(), 2);
        assert_eq!(sweep.step().unwrap(), 2.0);
        assert_eq!(sweep.angle_index(), 0); // wrapped
    }

    #[test]
    fn wrap_clears_previous_sweep() {
        let image = test_image();
        let mut sweep = SinogramSweep::new(image.view(), 2).unwrap();
        sweep.step().unwrap();
        sweep.step().unwrap();
        assert!(sweep.total() > 0.0);
        // First step of the next sweep starts from a clean accumulator
        sweep.step().unwrap();
        let after_wrap = sweep.columns().column(1).sum();
        assert_eq!(after_wrap, 0.0);
    }

    #[test]
    fn reset_is_explicit_and_total() {
        let image = test_image();
        let mut sweep = SinogramSweep::new(image.view(), 5).unwrap();
        sweep.step().unwrap();
        sweep.step().unwrap();
        sweep.reset();
        assert_eq!(sweep.angle_index(), 0);
        assert_eq!(sweep.total(), 0.0);
    }

    #[test]
    fn preview_matches_direct_rotation() {
        let image = test_image();
        let mut sweep = SinogramSweep::new(image.view(), 10).unwrap();
        sweep.step().unwrap();
        let preview = sweep.rotated_preview().unwrap();
        let direct = rotate_bilinear(image.view(), 1.0).unwrap();
        assert_eq!(preview, direct);
    }

    #[test]
    fn rejects_bad_images_up_front() {
        let empty = Array2::<f32>::zeros((3, 0));
        assert!(SinogramSweep::new(empty.view(), 180).is_err());
    }
}
