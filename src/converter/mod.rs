//! Converters from human-edited formats into record files.

pub mod text;

pub use text::TextParser;
