//! Error taxonomy for the book generation pipeline.
//!
//! Only two failure classes are recovered locally and therefore do not
//! appear here: a malformed book-structure response (replaced by a default
//! single-chapter structure in [`crate::structure`]) and a paragraph that
//! fails to lay out (surfaced as a [`crate::render::RenderWarning`]).
//! Everything else propagates and terminates the run.

use thiserror::Error;

/// Pipeline errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("Please set OPENAI_API_KEY environment variable")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("completion response contained no message content")]
    EmptyCompletion,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF encoding error: {0}")]
    Encode(#[from] printpdf::Error),

    #[error("PDF merge error: {0}")]
    Merge(#[from] lopdf::Error),

    #[error("no pages to merge")]
    EmptyMerge,
}

pub type Result<T> = std::result::Result<T, Error>;
