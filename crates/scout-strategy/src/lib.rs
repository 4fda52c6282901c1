//! Prompt assembly, the generative client, and the end-to-end strategy
//! pipeline for content-scout.

pub mod error;
pub mod gemini;
pub mod pipeline;
pub mod prompt;

pub use error::GenerationError;
pub use gemini::GeminiClient;
pub use pipeline::StrategyPipeline;
pub use prompt::{assemble, PLACEHOLDER};
