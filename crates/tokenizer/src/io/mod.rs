//! Serialization and corpus I/O for word models.
//!
//! This module reads training corpora and saves/loads trained models as a
//! JSON `.model` file plus a plain-text `.vocab` listing.

pub mod corpus;
pub mod format;
pub mod load;
pub mod save;

pub use corpus::CorpusLoader;
pub use format::{prefixed_path, SerializedModel, MODEL_EXTENSION, VOCAB_EXTENSION};
pub use load::ModelLoader;
pub use save::ModelSaver;
