pub mod downsize;
pub mod errors;
pub mod swatch;
pub mod url;
