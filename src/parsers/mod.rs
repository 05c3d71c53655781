pub mod colors;
pub mod html;
pub mod text;


pub use colors::{ColorSet, extract_colors};
pub use html::ContentExtractor;
