//! Pre-tokenization pipeline.
//!
//! This module provides the operations applied to raw text before words are
//! counted or encoded: normalization and word splitting.

pub mod normalize;
pub mod split;

pub use normalize::{Normalizer, META_SPACE};
pub use split::{SplitPattern, Splitter};
