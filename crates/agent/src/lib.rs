//! Sommelier pairing agent for the lounge menu.
//!
//! This crate turns an opened menu item into a pairing suggestion from the
//! complementary section of the catalog:
//! - `llm`: the completion seam (`LlmClient`) and its error taxonomy
//! - `gemini`: HTTP client for Gemini structured output
//! - `prompt`: the sommelier instruction and response schema
//! - `pairing`: `PairingService`, which validates answers and falls back to
//!   a house pairing whenever the model cannot be used
//!
//! # Safety Principle
//!
//! The model only ever chooses among names we enumerate. Anything else it
//! returns is treated like a failed call.

pub mod gemini;
pub mod llm;
pub mod pairing;
pub mod prompt;

use std::sync::Arc;

use lounge_core::config::{LlmConfig, LlmProvider};

pub use gemini::GeminiClient;
pub use llm::{CompletionRequest, LlmClient, LlmError, OfflineClient};
pub use pairing::{offline_marker, CandidatePicker, PairingService, UniformPicker};

/// Builds the client selected by `config.provider`.
pub fn client_from_config(config: &LlmConfig) -> Result<Arc<dyn LlmClient>, LlmError> {
    match config.provider {
        LlmProvider::Gemini => Ok(Arc::new(GeminiClient::from_config(config)?)),
        LlmProvider::Offline => Ok(Arc::new(OfflineClient)),
    }
}
