mod exports;
pub use exports::*;

pub mod error;
pub mod pad;
pub mod rotate;
pub mod projector;
pub mod sinogram;
pub mod sweep;
pub mod phantom;
pub mod io;
pub mod config;
pub mod utils;
