//! Debayering module for reconstructing RGB images from CFA sensor readouts

pub mod cpu_debayer;
pub mod types;
pub mod window;


pub use cpu_debayer::{CpuDebayer, demosaic};
pub use types::RgbImage;
pub use window::window_indices;
