//! Summary desk: condenses every analyst's output into one briefing.

use crate::agents::Agent;
use crate::constants::keys;

pub const ANALYSIS_SUMMARY: Agent = Agent {
    name: "Summary-Agent",
    title: "🔍 Overall Analysis Summary",
    input_variables: &[
        keys::FINANCIAL_DATA,
        keys::NEWS_SENTIMENT,
        keys::MACRO_ENVIRONMENT,
        keys::TECHNICAL_ANALYSIS,
        keys::TRADING_STRATEGY,
        keys::PORTFOLIO_OPTIMIZATION,
        keys::REGULATORY_COMPLIANCE,
        keys::RISK_ASSESSMENT,
    ],
    template: concat!(
        "🔍 Summarize the overall analysis results below:\n",
        "Financial Data: {{ financial_data }}\n",
        "News Sentiment: {{ news_sentiment }}\n",
        "Macro-Economic Environment: {{ macro_environment }}\n",
        "Technical Analysis: {{ technical_analysis }}\n",
        "Trading Strategy: {{ trading_strategy }}\n",
        "Portfolio Optimization: {{ portfolio_optimization }}\n",
        "Regulatory Compliance: {{ regulatory_compliance }}\n",
        "Risk Assessment: {{ risk_assessment }}\n\n",
        "Provide a concise summary of the key insights, potential risks, and recommended actions."
    ),
    output_key: keys::ANALYSIS_SUMMARY,
};
