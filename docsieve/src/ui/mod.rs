// docsieve/src/ui/mod.rs
pub mod output_format;
pub mod summary;
pub mod theme;
