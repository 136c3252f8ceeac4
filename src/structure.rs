//! Book structure parsing with a defensive fallback.
//!
//! The structure-generation call is expected to return JSON of shape
//! `{title, chapters: [{title, description}]}`. Models wrap JSON in code
//! fences often enough that a fence is stripped before parsing; anything
//! else malformed falls back to a minimal single-chapter structure rather
//! than aborting the run.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Planned book: title plus ordered chapter list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookStructure {
    pub title: String,
    pub chapters: Vec<ChapterPlan>,
}

/// One planned chapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterPlan {
    pub title: String,
    pub description: String,
}

impl BookStructure {
    /// Parse a structure-generation response, falling back to
    /// [`BookStructure::fallback`] on malformed JSON or an empty chapter
    /// list.
    pub fn parse(raw: &str, topic: &str) -> Self {
        match serde_json::from_str::<Self>(strip_code_fence(raw)) {
            Ok(structure) if !structure.chapters.is_empty() => structure,
            Ok(_) => {
                warn!("book structure has no chapters, using default structure");
                Self::fallback(topic)
            }
            Err(err) => {
                warn!(%err, "could not parse book structure, using default structure");
                Self::fallback(topic)
            }
        }
    }

    /// Minimal single-chapter structure used when parsing fails.
    pub fn fallback(topic: &str) -> Self {
        Self {
            title: format!("Guide to {topic}"),
            chapters: vec![ChapterPlan {
                title: format!("Introduction to {topic}"),
                description: "Overview and fundamentals".to_string(),
            }],
        }
    }
}

/// Strip a surrounding ```` ```json ```` / ```` ``` ```` fence, if present.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    let inner = inner.strip_suffix("```").unwrap_or(inner);
    inner.trim()
}
