//! `bookforge` - LLM-driven book generator
//!
//! Drives an OpenAI-compatible chat-completion API to write a multi-chapter
//! book, typesets every chapter into a paginated PDF, and merges the
//! chapters into one complete book.
//!
//! # Pipeline
//!
//! - **Structure**: one completion returns the book title and chapter list
//!   as JSON (with a single-chapter fallback for malformed responses)
//! - **Chapters**: outline → content → cleanup pass, each a blocking
//!   completion call, persisted under `chapter_<n>/`
//! - **Render**: the markdown subset (`##`/`###` headings, `- ` bullets,
//!   blank-line paragraphs) becomes a paginated document of positioned
//!   text draws
//! - **Merge**: chapter PDFs are concatenated into `<title>_complete.pdf`
//!
//! # Example
//!
//! ```rust,no_run
//! use bookforge::{pipeline, BookConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = BookConfig::from_env()?;
//!     let final_pdf = pipeline::run(&config, "container gardening")?;
//!     println!("book written to {}", final_pdf.display());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod merge;
pub mod pipeline;
pub mod prompts;
pub mod render;
pub mod structure;

pub use client::{ChatMessage, TextGenClient};
pub use config::BookConfig;
pub use error::{Error, Result};
pub use render::{render, RenderOutcome, RenderWarning};
pub use structure::{BookStructure, ChapterPlan};

/// Version of bookforge
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
