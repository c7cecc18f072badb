pub mod codec;
pub mod fetcher;
pub mod palette;
