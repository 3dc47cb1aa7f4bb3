pub use crate::error::{Error, ErrorKind};
pub use crate::pad::{pad_to_square, Padding};
pub use crate::projector::{radon_transform, theta_range};
pub use crate::rotate::rotate_bilinear;
pub use crate::sinogram::Sinogram;
pub use crate::sweep::SinogramSweep;

pub type Intensityf32 = f32;
pub type Anglef32     = f32; // degrees throughout
