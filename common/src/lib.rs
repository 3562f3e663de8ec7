//! Sentimatic Common Library
//!
//! Types and rendering logic shared by the web front-end: the backend wire
//! model, the sentiment highlighter and the word-cloud weighting.

pub mod cloud;
pub mod error;
pub mod highlight;
pub mod types;

pub use cloud::{build_cloud, CloudWord, MAX_WORD_SIZE, MIN_WORD_SIZE};
pub use error::{Error, Result};
pub use highlight::{highlight_lines, HighlightSegment, HighlightedLine};
pub use types::{
    validate_submission, Document, DocumentList, SentimentDictionary, SubmitRequest, WordScore,
};
