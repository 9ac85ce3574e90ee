use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

use crate::constants::keys;
use crate::error::StageError;

/// A non-blank ticker symbol, trimmed of surrounding whitespace
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-run mapping from output variable to model text.
///
/// Seeded with the ticker. Entries are append-only: once a stage's output is
/// recorded it is never replaced.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AnalysisResult {
    values: HashMap<String, String>,
}

impl AnalysisResult {
    pub fn for_ticker(ticker: &Ticker) -> Self {
        let mut values = HashMap::new();
        values.insert(keys::TICKER.to_string(), ticker.as_str().to_string());
        Self { values }
    }

    /// Record a stage output. Returns false if the key was already present,
    /// in which case the existing value is kept.
    pub fn record(&mut self, key: &str, value: String) -> bool {
        if self.values.contains_key(key) {
            return false;
        }
        self.values.insert(key.to_string(), value);
        true
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of stage outputs, excluding the ticker
    pub fn completed_stages(&self) -> usize {
        self.values.len().saturating_sub(usize::from(self.contains(keys::TICKER)))
    }

    pub fn variables(&self) -> &HashMap<String, String> {
        &self.values
    }
}

/// Where a run is in the stage chain
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum PipelineState {
    Idle,
    /// Zero-based stage index; the summary is the last index
    Running { stage: usize, name: String },
    Complete,
    Failed { stage: String },
}

impl PipelineState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineState::Complete | PipelineState::Failed { .. })
    }
}

/// Serializable description of a failed run
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunFailure {
    pub stage: String,
    pub kind: String,
    pub message: String,
}

impl From<&StageError> for RunFailure {
    fn from(err: &StageError) -> Self {
        Self {
            stage: err.stage().to_string(),
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

/// Everything one run produced
#[derive(Clone, Debug, Serialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub ticker: Ticker,
    pub state: PipelineState,
    pub results: AnalysisResult,
    pub failure: Option<RunFailure>,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    #[serde(skip)]
    pub error: Option<StageError>,
}

impl RunReport {
    pub fn start(ticker: &Ticker) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            ticker: ticker.clone(),
            state: PipelineState::Idle,
            results: AnalysisResult::for_ticker(ticker),
            failure: None,
            started_at: Utc::now(),
            finished_at: None,
            error: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state == PipelineState::Complete
    }

    pub fn summary(&self) -> Option<&str> {
        self.results.get(keys::ANALYSIS_SUMMARY)
    }

    pub(crate) fn complete(&mut self) {
        self.state = PipelineState::Complete;
        self.finished_at = Some(Utc::now());
    }

    pub(crate) fn fail(&mut self, err: StageError) {
        self.state = PipelineState::Failed {
            stage: err.stage().to_string(),
        };
        self.failure = Some(RunFailure::from(&err));
        self.error = Some(err);
        self.finished_at = Some(Utc::now());
    }
}
