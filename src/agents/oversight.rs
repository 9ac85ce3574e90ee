//! Compliance and risk review of the proposed strategy and allocation.

use crate::agents::Agent;
use crate::constants::keys;

pub const REGULATORY_COMPLIANCE: Agent = Agent {
    name: "Regulatory-Compliance-Agent",
    title: "⚖️ Regulatory Compliance",
    input_variables: &[keys::TRADING_STRATEGY, keys::PORTFOLIO_OPTIMIZATION],
    template: concat!(
        "⚖️ Evaluate the following trading strategy:\n{{ trading_strategy }}\n\n",
        "and the portfolio optimization recommendations:\n{{ portfolio_optimization }}\n\n",
        "Identify potential regulatory and compliance risks, including any legal or market manipulation concerns. ",
        "Provide recommendations to ensure the strategy adheres to financial regulations and minimizes regulatory risk."
    ),
    output_key: keys::REGULATORY_COMPLIANCE,
};

pub const RISK_ASSESSMENT: Agent = Agent {
    name: "Risk-Manager",
    title: "⚠️ Risk Assessment",
    input_variables: &[keys::TRADING_STRATEGY, keys::PORTFOLIO_OPTIMIZATION],
    template: concat!(
        "⚠️ Evaluate the following trading strategy and portfolio optimization:\n",
        "Trading Strategy:\n{{ trading_strategy }}\n",
        "Portfolio Optimization:\n{{ portfolio_optimization }}\n\n",
        "Identify potential risks such as market volatility, liquidity issues, or unexpected market events. ",
        "Summarize your risk assessment in 4 concise bullet points, and conclude with a final bullet point stating whether the overall strategy meets acceptable risk tolerance."
    ),
    output_key: keys::RISK_ASSESSMENT,
};
