//! Custom error types for the analysis pipeline
//!
//! Every failure keeps its kind so callers can tell a throttle from a bad
//! credential, even though the page collapses them into one message.

use thiserror::Error;

use crate::constants::error_kinds;

/// Failures raised by a model client call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("Authentication failed: {reason}")]
    Authentication { reason: String },

    #[error("Rate limited by provider: {reason}")]
    RateLimited { reason: String },

    #[error("Transport error: {reason}")]
    Transport { reason: String },

    #[error("Model error: {reason}")]
    Model { reason: String },
}

impl ClientError {
    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::Authentication { .. } => error_kinds::AUTHENTICATION,
            ClientError::RateLimited { .. } => error_kinds::RATE_LIMIT,
            ClientError::Transport { .. } => error_kinds::TRANSPORT,
            ClientError::Model { .. } => error_kinds::MODEL,
        }
    }
}

/// Prompt rendering errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TemplateError {
    #[error("Template {template} is missing required variable {variable}")]
    MissingVariable { template: String, variable: String },

    #[error("Template {template} could not be rendered: {detail}")]
    Render { template: String, detail: String },
}

/// A failure inside one pipeline stage
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StageError {
    #[error("{stage}: {source}")]
    Client {
        stage: String,
        #[source]
        source: ClientError,
    },

    #[error("{stage}: {source}")]
    Template {
        stage: String,
        #[source]
        source: TemplateError,
    },
}

impl StageError {
    pub fn client(stage: &str, source: ClientError) -> Self {
        StageError::Client {
            stage: stage.to_string(),
            source,
        }
    }

    pub fn template(stage: &str, source: TemplateError) -> Self {
        StageError::Template {
            stage: stage.to_string(),
            source,
        }
    }

    /// Name of the stage that failed
    pub fn stage(&self) -> &str {
        match self {
            StageError::Client { stage, .. } | StageError::Template { stage, .. } => stage,
        }
    }

    /// Stable tag for the failure kind
    pub fn kind(&self) -> &'static str {
        match self {
            StageError::Client { source, .. } => source.kind(),
            StageError::Template { .. } => error_kinds::TEMPLATE,
        }
    }
}

/// Malformed stage chains, detected when the pipeline is built
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    #[error("Stage {stage} requires {variable}, which no earlier stage produces")]
    UnresolvedInput { stage: String, variable: String },

    #[error("Output {output} is produced by both {first} and {second}")]
    DuplicateOutput {
        output: String,
        first: String,
        second: String,
    },

    #[error("Stage {stage} may not overwrite the reserved variable {variable}")]
    ReservedOutput { stage: String, variable: String },

    #[error("Stage {stage} has an invalid template: {source}")]
    InvalidTemplate {
        stage: String,
        #[source]
        source: TemplateError,
    },

    #[error("Pipeline has no analysis stages")]
    Empty,
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type StageResult<T> = std::result::Result<T, StageError>;
