//! Strategy desk: trading plan and allocation.

use crate::agents::Agent;
use crate::constants::keys;

pub const TRADING_STRATEGY: Agent = Agent {
    name: "Quant-Strategy-Agent",
    title: "📊 Trading Strategy",
    input_variables: &[
        keys::FINANCIAL_DATA,
        keys::NEWS_SENTIMENT,
        keys::MACRO_ENVIRONMENT,
        keys::TECHNICAL_ANALYSIS,
    ],
    template: concat!(
        "📊 Using the following data:\n",
        "Financial Data:\n{{ financial_data }}\n",
        "News Sentiment:\n{{ news_sentiment }}\n",
        "Macro-Economic Analysis:\n{{ macro_environment }}\n",
        "Technical Analysis:\n{{ technical_analysis }}\n\n",
        "Develop a sophisticated trading strategy. Outline a clear asset allocation, specify entry and exit points, ",
        "detail risk management measures, and provide estimated expected returns. Incorporate algorithmic signals if applicable."
    ),
    output_key: keys::TRADING_STRATEGY,
};

pub const PORTFOLIO_OPTIMIZATION: Agent = Agent {
    name: "Portfolio-Optimization-Agent",
    title: "📂 Portfolio Optimization",
    input_variables: &[keys::TRADING_STRATEGY],
    template: concat!(
        "📂 Based on the trading strategy below:\n{{ trading_strategy }}\n\n",
        "Suggest an optimal portfolio allocation. Consider diversification, risk minimization, and asset correlation. ",
        "Provide recommended asset weights and allocation adjustments to maximize risk-adjusted returns."
    ),
    output_key: keys::PORTFOLIO_OPTIMIZATION,
};
