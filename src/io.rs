//! Reading and writing images and sinograms.

pub mod raw;
