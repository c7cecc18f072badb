pub mod prominence_extractor;
pub mod traits;
