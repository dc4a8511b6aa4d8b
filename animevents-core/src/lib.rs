//! animevents Core Library
//!
//! This library extracts the notify events of an exported animation asset
//! (an `AnimSequence` or `AnimMontage` record inside a JSON document) into a
//! flat, tab-separated timeline.

pub mod convert;
pub mod extractor;
pub mod record;
pub mod sound;
pub mod timeline;

pub use convert::{convert_file, load_document, output_path, ConvertOptions};
pub use extractor::extract_events;
pub use sound::resolve_display_name;
pub use timeline::EventLine;

use std::path::PathBuf;

/// Result type for animevents-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for animevents-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot open {}: {reason}", path.display())]
    FileUnreadable { path: PathBuf, reason: String },

    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("AnimSequence/AnimMontage not found")]
    AnimationNotFound,

    #[error("No notifies found")]
    NoEventsFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
