//! Application-wide constants and default values
//!
//! Stage output keys live here so the agents, the pipeline and the views
//! agree on the same names.

/// Variable names threaded between pipeline stages
pub mod keys {
    /// The user-supplied ticker, available to every stage
    pub const TICKER: &str = "ticker";

    pub const FINANCIAL_DATA: &str = "financial_data";
    pub const NEWS_SENTIMENT: &str = "news_sentiment";
    pub const MACRO_ENVIRONMENT: &str = "macro_environment";
    pub const TECHNICAL_ANALYSIS: &str = "technical_analysis";
    pub const TRADING_STRATEGY: &str = "trading_strategy";
    pub const PORTFOLIO_OPTIMIZATION: &str = "portfolio_optimization";
    pub const REGULATORY_COMPLIANCE: &str = "regulatory_compliance";
    pub const RISK_ASSESSMENT: &str = "risk_assessment";

    /// Output of the terminal summary stage
    pub const ANALYSIS_SUMMARY: &str = "analysis_summary";
}

/// LLM provider defaults
pub mod llm {
    /// Perplexity exposes an OpenAI-compatible chat completions API
    pub const DEFAULT_BASE_URL: &str = "https://api.perplexity.ai";

    pub const DEFAULT_MODEL: &str = "sonar-reasoning";

    pub const DEFAULT_TEMPERATURE: f32 = 0.5;

    /// Environment variable holding the provider credential
    pub const DEFAULT_API_KEY_ENV: &str = "PPLX_API_KEY";
}

/// HTTP server and page defaults
pub mod server {
    pub const DEFAULT_HOST: &str = "0.0.0.0";

    pub const DEFAULT_PORT: u16 = 3000;

    pub const DEFAULT_TICKER: &str = "MSFT";

    pub const DEFAULT_TITLE: &str = "AI Hedge Fund Analysis";

    /// Environment variable that points at an alternate config file
    pub const CONFIG_PATH_ENV: &str = "AUTOHEDGE_CONFIG";

    pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";
}

/// Error kind tags exposed in run reports
pub mod error_kinds {
    pub const AUTHENTICATION: &str = "authentication";
    pub const RATE_LIMIT: &str = "rate_limit";
    pub const TRANSPORT: &str = "transport";
    pub const MODEL: &str = "model";
    pub const TEMPLATE: &str = "template";
}
