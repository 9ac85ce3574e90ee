pub mod oversight;
pub mod research;
pub mod strategy;
pub mod summary;

use minijinja::{Environment, ErrorKind, UndefinedBehavior};
use std::collections::{BTreeMap, HashMap};

use crate::error::TemplateError;

/// A role-play analyst: a fixed prompt template with declared inputs and
/// one named output.
///
/// Templates use MiniJinja syntax (`{{ variable }}`). Only declared inputs are
/// visible to the template, and rendering is strict: an undeclared name is an
/// error, never an empty string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Agent {
    pub name: &'static str,
    /// Section heading shown to the user
    pub title: &'static str,
    pub input_variables: &'static [&'static str],
    pub template: &'static str,
    pub output_key: &'static str,
}

impl Agent {
    /// Render the prompt from the declared inputs found in `vars`.
    ///
    /// Substituted values are output verbatim; template syntax inside them is
    /// not evaluated.
    pub fn render(&self, vars: &HashMap<String, String>) -> Result<String, TemplateError> {
        let mut context = BTreeMap::new();
        for var in self.input_variables {
            let value = vars.get(*var).ok_or_else(|| TemplateError::MissingVariable {
                template: self.name.to_string(),
                variable: var.to_string(),
            })?;
            context.insert(*var, value.as_str());
        }

        let env = environment();
        let template = env
            .template_from_str(self.template)
            .map_err(|e| self.map_render_error(e))?;

        if let Some(undeclared) = template
            .undeclared_variables(false)
            .into_iter()
            .filter(|v| !self.input_variables.contains(&v.as_str()))
            .min()
        {
            return Err(TemplateError::MissingVariable {
                template: self.name.to_string(),
                variable: undeclared,
            });
        }

        template.render(context).map_err(|e| self.map_render_error(e))
    }

    /// Parse the template without rendering it
    pub fn check_syntax(&self) -> Result<(), TemplateError> {
        let env = environment();
        env.template_from_str(self.template)
            .map(|_| ())
            .map_err(|e| self.map_render_error(e))
    }

    fn map_render_error(&self, err: minijinja::Error) -> TemplateError {
        match err.kind() {
            ErrorKind::UndefinedError => TemplateError::MissingVariable {
                template: self.name.to_string(),
                variable: err
                    .detail()
                    .map(str::to_string)
                    .unwrap_or_else(|| "undeclared placeholder".to_string()),
            },
            _ => TemplateError::Render {
                template: self.name.to_string(),
                detail: err.to_string(),
            },
        }
    }
}

fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env
}

/// The eight chained analysts, in execution order
pub fn analysis_agents() -> Vec<Agent> {
    vec![
        research::FINANCIAL_DATA,
        research::NEWS_SENTIMENT,
        research::MACRO_ENVIRONMENT,
        research::TECHNICAL_ANALYSIS,
        strategy::TRADING_STRATEGY,
        strategy::PORTFOLIO_OPTIMIZATION,
        oversight::REGULATORY_COMPLIANCE,
        oversight::RISK_ASSESSMENT,
    ]
}

pub fn summary_agent() -> Agent {
    summary::ANALYSIS_SUMMARY
}
