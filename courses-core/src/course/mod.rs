mod course;
mod draft;

pub use course::*;
pub use draft::*;
