//! Research desk: fundamentals, sentiment, macro and technicals.
//! Each of these needs only the ticker.

use crate::agents::Agent;
use crate::constants::keys;

pub const FINANCIAL_DATA: Agent = Agent {
    name: "Financial-Data-Agent",
    title: "📈 Financial Data",
    input_variables: &[keys::TICKER],
    template: concat!(
        "📈 For {{ ticker }}, provide detailed and up-to-date financial data including current stock price, ",
        "volume, key financial ratios (e.g., P/E, P/B, dividend yield), recent price trends, and relevant market indicators."
    ),
    output_key: keys::FINANCIAL_DATA,
};

pub const NEWS_SENTIMENT: Agent = Agent {
    name: "News-Sentiment-Agent",
    title: "📰 News Sentiment",
    input_variables: &[keys::TICKER],
    template: concat!(
        "📰 For {{ ticker }}, analyze recent news articles, social media posts, and expert commentary. ",
        "Summarize the prevailing sentiment, highlight any key events, and note emerging trends that may impact the stock."
    ),
    output_key: keys::NEWS_SENTIMENT,
};

pub const MACRO_ENVIRONMENT: Agent = Agent {
    name: "Macro-Environment-Agent",
    title: "🌐 Macro-Economic Environment",
    input_variables: &[keys::TICKER],
    template: concat!(
        "🌐 For {{ ticker }}, analyze the current macro-economic environment. Include key indicators such as GDP growth, ",
        "inflation rates, interest rates, unemployment trends, and central bank policies. ",
        "Summarize how these factors could impact the overall market and the asset."
    ),
    output_key: keys::MACRO_ENVIRONMENT,
};

pub const TECHNICAL_ANALYSIS: Agent = Agent {
    name: "Technical-Analysis-Agent",
    title: "📉 Technical Analysis",
    input_variables: &[keys::TICKER],
    template: concat!(
        "📉 For {{ ticker }}, analyze historical price trends, moving averages, and key technical indicators (e.g., RSI, MACD, Bollinger Bands). ",
        "Identify support/resistance levels and potential technical entry/exit signals."
    ),
    output_key: keys::TECHNICAL_ANALYSIS,
};
