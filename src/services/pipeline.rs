use std::collections::{HashMap, HashSet};
use tracing::{error, info};

use crate::agents::{self, Agent};
use crate::analysis::{AnalysisResult, PipelineState, RunReport, Ticker};
use crate::constants::{keys, llm};
use crate::error::{PipelineError, StageError, StageResult};
use crate::llm::ModelClient;

/// Fixed chain of analysis agents followed by one summary agent.
///
/// Built once at startup and shared by every run. Construction checks that
/// each agent's inputs are produced upstream, so a miswired chain never
/// reaches a request.
#[derive(Clone, Debug)]
pub struct Pipeline {
    stages: Vec<Agent>,
    summary: Agent,
    temperature: f32,
}

impl Pipeline {
    pub fn new(stages: Vec<Agent>, summary: Agent) -> Result<Self, PipelineError> {
        validate_chain(&stages, &summary)?;
        Ok(Self {
            stages,
            summary,
            temperature: llm::DEFAULT_TEMPERATURE,
        })
    }

    /// The eight-analyst hedge fund chain plus its summary
    pub fn standard() -> Result<Self, PipelineError> {
        Self::new(agents::analysis_agents(), agents::summary_agent())
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn stages(&self) -> &[Agent] {
        &self.stages
    }

    pub fn summary(&self) -> &Agent {
        &self.summary
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Analysis stages then the summary, in execution order
    pub fn sections(&self) -> impl Iterator<Item = &Agent> {
        self.stages.iter().chain(std::iter::once(&self.summary))
    }

    /// Run every stage in order against a fresh result set.
    ///
    /// Stops at the first failure; outputs recorded before it stay in the
    /// report.
    pub async fn run(&self, ticker: &Ticker, client: &dyn ModelClient) -> RunReport {
        let mut report = RunReport::start(ticker);
        let total = self.stages.len() + 1;

        info!(
            "📊 [PIPELINE] Run {} started for {} ({} stages, model: {})",
            report.run_id,
            ticker,
            total,
            client.model()
        );

        for (index, agent) in self.sections().enumerate() {
            report.state = PipelineState::Running {
                stage: index,
                name: agent.name.to_string(),
            };
            info!("📊 [PIPELINE] Stage {}/{}: {}", index + 1, total, agent.name);

            match self.run_stage(agent, &report.results, client).await {
                Ok(output) => {
                    info!(
                        "📊 [PIPELINE] {} produced {} ({} chars)",
                        agent.name,
                        agent.output_key,
                        output.len()
                    );
                    report.results.record(agent.output_key, output);
                }
                Err(err) => {
                    error!(
                        "❌ [PIPELINE] Run {} failed at {} ({}): {}",
                        report.run_id,
                        agent.name,
                        err.kind(),
                        err
                    );
                    report.fail(err);
                    return report;
                }
            }
        }

        report.complete();
        info!("✅ [PIPELINE] Run {} complete for {}", report.run_id, ticker);
        report
    }

    async fn run_stage(
        &self,
        agent: &Agent,
        results: &AnalysisResult,
        client: &dyn ModelClient,
    ) -> StageResult<String> {
        let prompt = agent
            .render(results.variables())
            .map_err(|e| StageError::template(agent.name, e))?;

        client
            .complete(&prompt, self.temperature)
            .await
            .map_err(|e| StageError::client(agent.name, e))
    }
}

fn validate_chain(stages: &[Agent], summary: &Agent) -> Result<(), PipelineError> {
    if stages.is_empty() {
        return Err(PipelineError::Empty);
    }

    let mut available: HashSet<&str> = HashSet::from([keys::TICKER]);
    let mut producers: HashMap<&str, &str> = HashMap::new();

    for agent in stages.iter().chain(std::iter::once(summary)) {
        agent
            .check_syntax()
            .map_err(|source| PipelineError::InvalidTemplate {
                stage: agent.name.to_string(),
                source,
            })?;

        if let Some(missing) = agent.input_variables.iter().find(|v| !available.contains(*v)) {
            return Err(PipelineError::UnresolvedInput {
                stage: agent.name.to_string(),
                variable: missing.to_string(),
            });
        }

        if agent.output_key == keys::TICKER {
            return Err(PipelineError::ReservedOutput {
                stage: agent.name.to_string(),
                variable: keys::TICKER.to_string(),
            });
        }

        if let Some(first) = producers.insert(agent.output_key, agent.name) {
            return Err(PipelineError::DuplicateOutput {
                output: agent.output_key.to_string(),
                first: first.to_string(),
                second: agent.name.to_string(),
            });
        }

        available.insert(agent.output_key);
    }

    Ok(())
}
