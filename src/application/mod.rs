pub mod extract_palette;
pub mod generate_preview;
