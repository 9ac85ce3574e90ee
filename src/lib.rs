//! AutoHedge Analysis - LLM-driven hedge fund research desk
//!
//! This library chains nine role-play analysts (fundamentals through risk,
//! then a summary) over a hosted chat-completion model and renders their
//! output for a single ticker.

pub mod agents;
pub mod analysis;
pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod llm;
pub mod services;
pub mod views;

// Re-export commonly used types
pub use analysis::{AnalysisResult, PipelineState, RunReport, Ticker};
pub use config::AppConfig;
pub use llm::{LLMClient, ModelClient};
pub use services::pipeline::Pipeline;

#[cfg(test)]
mod config_tests;
