//! Text normalization and word-frequency tallying
//!
//! [`normalize`] prepares extracted article text for tokenization by
//! stripping a fixed set of punctuation noise; [`WordTally`] counts the
//! resulting tokens across all fetched articles.

mod frequency;
mod normalize;

pub use frequency::WordTally;
pub use normalize::{normalize, tokenize};
