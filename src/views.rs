//! Server-rendered HTML for the analysis page.
//!
//! Model output is markdown. It is rendered to HTML with raw HTML demoted to
//! escaped text, so a reply can format itself but cannot inject markup.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

use crate::analysis::RunReport;
use crate::config::UiConfig;
use crate::services::pipeline::Pipeline;

const STYLE: &str = r#"
body { font-family: -apple-system, "Segoe UI", Helvetica, Arial, sans-serif; max-width: 1100px; margin: 2rem auto; padding: 0 1rem; color: #262730; }
form { display: flex; gap: .5rem; align-items: end; margin-bottom: 1.5rem; }
label { display: flex; flex-direction: column; gap: .25rem; flex: 1; }
input[type=text] { padding: .5rem; font-size: 1rem; }
button { padding: .55rem 1.2rem; font-size: 1rem; cursor: pointer; }
#busy { display: none; margin: 1rem 0; }
.success { background: #dff5e3; color: #1b5e20; padding: .75rem 1rem; border-radius: .4rem; }
.error { background: #fde2e1; color: #8a1c1c; padding: .75rem 1rem; border-radius: .4rem; }
details { border: 1px solid #ddd; border-radius: .4rem; margin: .6rem 0; padding: .5rem 1rem; }
summary { cursor: pointer; font-weight: 600; }
.output { margin-top: .5rem; }
.output table { border-collapse: collapse; }
.output th, .output td { border: 1px solid #ddd; padding: .25rem .5rem; }
"#;

const BUSY_SCRIPT: &str = r#"
document.getElementById('analysis-form').addEventListener('submit', function () {
  document.getElementById('busy').style.display = 'block';
  document.getElementById('run').disabled = true;
});
"#;

/// Full page: title, ticker form and whatever results `body` carries
pub fn page(ui: &UiConfig, ticker_value: &str, body: &str) -> String {
    let title = escape_html(&ui.title);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<h1>{title}</h1>
<p>Enter a ticker symbol below to run the analysis:</p>
<form id="analysis-form" method="post" action="/analyze">
<label>Ticker Symbol (e.g. {example})
<input type="text" name="ticker" value="{ticker}"></label>
<button id="run" type="submit">Run Analysis</button>
</form>
<div id="busy">⏳ Running analysis, please wait...</div>
<main id="results">{body}</main>
<script>{BUSY_SCRIPT}</script>
</body>
</html>
"#,
        example = escape_html(&ui.default_ticker),
        ticker = escape_html(ticker_value),
    )
}

/// Results block for a finished run.
///
/// A failed run shows only the error, even when earlier stages succeeded.
pub fn report(pipeline: &Pipeline, report: &RunReport) -> String {
    if let Some(failure) = &report.failure {
        return error_banner(&failure.message);
    }
    if !report.is_complete() {
        return error_banner("analysis did not finish");
    }

    let mut out = String::from("<div class=\"success\">Analysis complete!</div>\n");

    for agent in pipeline.stages() {
        out.push_str(&section(agent.title, report.results.get(agent.output_key), false));
    }

    let summary = pipeline.summary();
    out.push_str("<hr>\n");
    out.push_str(&section(summary.title, report.results.get(summary.output_key), true));
    out
}

fn section(title: &str, text: Option<&str>, open: bool) -> String {
    format!(
        "<details class=\"section\"{}><summary>{}</summary><div class=\"output\">{}</div></details>\n",
        if open { " open" } else { "" },
        escape_html(title),
        markdown_to_html(text.unwrap_or_default()),
    )
}

/// Render model markdown. Raw HTML and script-bearing link targets are neutralized.
pub fn markdown_to_html(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    });

    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let scheme = url.trim_start().to_ascii_lowercase();
    if ["javascript:", "vbscript:", "data:"].iter().any(|s| scheme.starts_with(s)) {
        CowStr::Borrowed("#")
    } else {
        url
    }
}

fn error_banner(message: &str) -> String {
    format!(
        "<div class=\"error\">Error during analysis: {}</div>\n",
        escape_html(message)
    )
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
