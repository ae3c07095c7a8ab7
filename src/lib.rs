//! Dnascope - interactive DNA sequence analyzer
//!
//! This library provides functionality for cleaning free-text DNA input and
//! deriving elementary views of it: length, GC content, reverse complement,
//! transcription, translation and nucleotide frequency.

pub mod app;
pub mod assets;
pub mod logging;
pub mod sequence;
pub mod ui;

// Re-export main types for convenience
pub use app::{Analysis, App};
pub use assets::EmbeddedImage;
