//! Error type for pipeline construction.
//!
//! Construction is the only fallible phase: once a [`crate::Language`] has
//! been built, processing a document never returns an error (unknown words,
//! missed gazetteer lookups and unresolved lemmas all degrade to defined
//! fallbacks instead).

use thiserror::Error;

/// Error returned while assembling a pipeline from a resource bundle.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The pretrained tagger artifact is missing, unreadable or
    /// structurally invalid.
    #[error("failed to load tagger model: {0}")]
    ModelLoad(String),

    /// A configured token or punctuation pattern did not compile.
    #[error("pattern '{name}' failed to compile: {message}")]
    Pattern { name: String, message: String },

    /// A fine-grained tag produced by the tagger has no universal
    /// part-of-speech mapping.
    #[error("fine tag '{0}' has no universal POS mapping")]
    MissingPosMapping(String),

    /// A tag override entry points at a tag the model does not know.
    #[error("tag override for '{text}' names unknown tag '{tag}'")]
    UnknownOverrideTag { text: String, tag: String },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PipelineError>;
