//! The owned projection result: offset x angle intensity sums.

use ndarray::{Array2, ArrayView1, ArrayView2};

use crate::{Anglef32, Intensityf32};

/// A finished sinogram: `data` has one row per offset `s` and one column per
/// projection angle; `thetas[i]` (degrees) is the angle of column `i`. Owns
/// its storage, with no aliasing back to the input image.
#[derive(Debug, Clone, PartialEq)]
pub struct Sinogram {
    pub data: Array2<Intensityf32>,
    pub thetas: Vec<Anglef32>,
}

impl Sinogram {
    pub fn new(data: Array2<Intensityf32>, thetas: Vec<Anglef32>) -> Self {
        if data.ncols() != thetas.len() {
            panic!("sinogram has {} columns but {} angles", data.ncols(), thetas.len());
        }
        Sinogram { data, thetas }
    }

    /// Number of offset samples (rows)
    pub fn num_offsets(&self) -> usize { self.data.nrows() }

    /// Number of projection angles (columns)
    pub fn num_angles(&self) -> usize { self.data.ncols() }

    /// All line-integral sums for angle index `i`
    pub fn column(&self, i: usize) -> ArrayView1<'_, Intensityf32> {
        self.data.column(i)
    }

    pub fn view(&self) -> ArrayView2<'_, Intensityf32> {
        self.data.view()
    }

    /// Per-angle total intensity. For centred content each entry
    /// approximates the total intensity of the input image (the DC term of
    /// the Fourier-slice theorem), which makes this a handy sanity check.
    pub fn total_per_angle(&self) -> Vec<Intensityf32> {
        self.thetas.iter().enumerate()
            .map(|(i, _)| self.column(i).sum())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn accessors_agree_with_storage() {
        let sino = Sinogram::new(array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]], vec![0.0, 90.0]);
        assert_eq!(sino.num_offsets(), 3);
        assert_eq!(sino.num_angles(), 2);
        assert_eq!(sino.column(1).to_vec(), vec![2.0, 4.0, 6.0]);
        assert_eq!(sino.total_per_angle(), vec![9.0, 12.0]);
    }

    #[test]
    #[should_panic(expected = "columns")]
    fn angle_count_mismatch_panics() {
        Sinogram::new(array![[1.0, 2.0]], vec![0.0]);
    }
}
