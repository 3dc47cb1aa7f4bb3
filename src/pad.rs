//! Padding geometry: the square into which an image can rotate freely.

use ndarray::{s, Array2, ArrayView2};

use crate::Intensityf32;

/// Zero-border geometry for an `height` x `width` image.
///
/// `side` is the image diagonal rounded up: the smallest square side that
/// keeps every corner of the image inside the grid under rotation about the
/// centre. The margins use floor division, so when `side - dim` is odd the
/// image sits one row (or column) closer to the top (or left) edge. The crop
/// performed after projection slices `[pad_y .. pad_y + height]` and never
/// assumes `side - 2 * pad_y == height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    /// Side length of the padded square; also the number of offset samples
    pub side: usize,
    /// Rows of zeros above the image
    pub pad_y: usize,
    /// Columns of zeros left of the image
    pub pad_x: usize,
}

impl Padding {
    pub fn for_image(height: usize, width: usize) -> Self {
        let (h, w) = (height as f64, width as f64);
        let side = (h * h + w * w).sqrt().ceil() as usize;
        Padding {
            side,
            pad_y: (side - height) / 2,
            pad_x: (side - width) / 2,
        }
    }
}

/// Copy `image` into the centred sub-block of a zero-filled `side` x `side`
/// grid.
pub fn pad_to_square(image: ArrayView2<'_, Intensityf32>, padding: Padding) -> Array2<Intensityf32> {
    let (height, width) = image.dim();
    let mut padded = Array2::zeros((padding.side, padding.side));
    padded
        .slice_mut(s![padding.pad_y .. padding.pad_y + height,
                      padding.pad_x .. padding.pad_x + width])
        .assign(&image);
    padded
}
