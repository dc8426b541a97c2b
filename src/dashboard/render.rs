//! Plain-text rendering of a dashboard snapshot.

use crate::dashboard::refresh::DashboardSnapshot;
use crate::models::{
    HeadlineSentiment, IndicatorSnapshot, MentionRadar, RadarStatus, Reading, SignalOutcome,
    TickerMention,
};

pub const TITLE: &str = "📊 Market Sentiment Dashboard";
pub const SUBTITLE: &str =
    "Buffett & Tom Lee signals + Market Volatility, Google Trends, News, and WSB Meme Radar";
pub const DISCLAIMER: &str = "For educational purposes only. Not financial advice. Use at your own risk. \
These signals use sentiment, volatility, and momentum for illustration only, not for trading or portfolio management.";

const RULE: &str = "---";

/// Display string for an unavailable or present value
pub fn display_reading(reading: &Reading<f64>) -> String {
    match reading {
        Reading::Value(v) => format!("{}", v),
        Reading::NoCredential => "N/A (No API Key)".to_string(),
        Reading::RateLimited => "N/A (Rate limited)".to_string(),
        _ => "N/A".to_string(),
    }
}

fn metric_row(name: &str, value: &str, label: Option<&str>, description: &str) -> String {
    match label {
        Some(label) => format!("{:<20} {:>18}  [{}]\n    {}\n", name, value, label, description),
        None => format!("{:<20} {:>18}\n    {}\n", name, value, description),
    }
}

pub fn render_indicators(indicators: &IndicatorSnapshot) -> String {
    let sentiment_value = display_reading(&indicators.sentiment.clone().map(|s| s.score));
    let sentiment_label = indicators
        .sentiment
        .value()
        .map(|s: &HeadlineSentiment| s.label.as_str());

    let mut out = String::new();
    out.push_str(&metric_row(
        "VIX (Volatility)",
        &display_reading(&indicators.volatility),
        None,
        ">30 = Elevated Fear",
    ));
    out.push_str(&metric_row(
        "RSI (S&P 500)",
        &display_reading(&indicators.momentum),
        None,
        ">70 Overbought / <35 Oversold",
    ));
    out.push_str(&metric_row(
        "Google Trends",
        &display_reading(&indicators.search_interest),
        None,
        "Interest for 'stock market crash' (last 7d)",
    ));
    out.push_str(&metric_row(
        "News Sentiment",
        &sentiment_value,
        sentiment_label,
        "Headline tone: bull vs bear",
    ));
    out.push_str(&metric_row(
        "Put/Call Ratio",
        &display_reading(&indicators.put_call),
        None,
        ">1.0 = Hedging demand",
    ));

    let spread = match (indicators.long_yield.value(), indicators.short_yield.value()) {
        (Some(long), Some(short)) => format!("{:.2}", long - short),
        _ => "N/A".to_string(),
    };
    out.push_str(&metric_row(
        "Yield Spread",
        &spread,
        None,
        "Long minus short yield; <0 = Inverted curve",
    ));
    out
}

pub fn render_signal(outcome: &SignalOutcome) -> String {
    let mut out = format!("## {}\n{}\n", outcome.style.title(), outcome.headline);
    for reason in &outcome.reasons {
        out.push_str(&format!("  - {}\n", reason.description));
    }
    out.push_str(&format!("> {}\n", outcome.style.quote()));
    out
}

/// Message shown when the radar has nothing to list, `None` when it does
pub fn radar_message(radar: &MentionRadar) -> Option<String> {
    match radar.status {
        RadarStatus::RateLimited => {
            Some("Reddit API Rate Limited (Try again in 1-2 minutes).".to_string())
        }
        RadarStatus::HttpStatus(code) => Some(format!(
            "Reddit returned status code {}. Try again later.",
            code
        )),
        RadarStatus::NetworkError => {
            Some("Could not fetch Reddit posts (Network Error).".to_string())
        }
        RadarStatus::ParseError => {
            Some("Could not parse Reddit response. Format may have changed.".to_string())
        }
        RadarStatus::Ok if radar.mentions.is_empty() => {
            Some("No trending meme tickers found (try again soon).".to_string())
        }
        RadarStatus::Ok => None,
    }
}

pub fn render_mention(mention: &TickerMention) -> String {
    let upvotes = mention
        .source
        .as_ref()
        .and_then(|s| s.upvotes)
        .map(|u| u.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let change = mention
        .price_change_pct
        .map(|pct| format!("{:+.2}%", pct))
        .unwrap_or_else(|| "N/A".to_string());

    let mut line = format!(
        "{} - Mentioned {} times | Upvotes: {} | Change: {}\n",
        mention.symbol, mention.count, upvotes, change
    );
    if let Some(ref source) = mention.source {
        line.push_str(&format!("    > {}\n", source.title));
    }
    line
}

pub fn render_radar(radar: &MentionRadar) -> String {
    let mut out = String::from("## 🚀 Meme Stock Radar (WSB Hotlist)\n");
    match radar_message(radar) {
        Some(message) => {
            out.push_str(&message);
            out.push('\n');
        }
        None => {
            out.push_str("Top tickers from recent /r/wallstreetbets hot posts (auto-detected):\n");
            for mention in &radar.mentions {
                out.push_str(&render_mention(mention));
            }
        }
    }
    out
}

/// Full dashboard as plain text
pub fn render_text(snapshot: &DashboardSnapshot) -> String {
    let mut out = format!("{}\n{}\n{}\n", TITLE, SUBTITLE, RULE);
    out.push_str(&render_indicators(&snapshot.indicators));
    out.push_str(RULE);
    out.push('\n');

    for outcome in &snapshot.signals {
        out.push_str(&render_signal(outcome));
        out.push('\n');
    }

    out.push_str(&render_radar(&snapshot.radar));
    out.push_str(&format!("{}\n### ⚠️ Disclaimer\n{}\n", RULE, DISCLAIMER));
    out.push_str(&format!(
        "Refreshed at {}\n",
        snapshot.refreshed_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out
}
