//! Run configuration.
//!
//! One [`BookConfig`] value is built at startup and threaded through every
//! pipeline step; its lifecycle is scoped to a single book-generation run.

use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Configuration for one book-generation run.
#[derive(Debug, Clone)]
pub struct BookConfig {
    /// Bearer credential for the chat-completion API.
    pub api_key: String,
    /// API root, e.g. `https://api.openai.com/v1`.
    pub base_url: String,
    /// Model identifier sent with every completion request.
    pub model: String,
    /// Sampling temperature sent with every completion request.
    pub temperature: f32,
    /// Directory the `<book>_book/` tree is created under.
    pub output_root: PathBuf,
}

impl BookConfig {
    /// Build a configuration from the environment.
    ///
    /// `OPENAI_API_KEY` is required and checked before any generation
    /// starts; `BOOKFORGE_BASE_URL`, `BOOKFORGE_MODEL` and
    /// `BOOKFORGE_TEMPERATURE` override the defaults.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(Error::MissingApiKey)?;

        let base_url =
            env::var("BOOKFORGE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = env::var("BOOKFORGE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let temperature = env::var("BOOKFORGE_TEMPERATURE")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_TEMPERATURE);

        Ok(Self {
            api_key,
            base_url,
            model,
            temperature,
            output_root: PathBuf::from("."),
        })
    }
}
