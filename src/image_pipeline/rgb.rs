//! RGB output module
//!
//! Writers that hand a demosaiced image to whatever consumes it next.

mod writer;
mod interleaved_writer;

pub use writer::RgbWriter;
pub use interleaved_writer::{InterleavedRgbWriter, RgbaWriter};
