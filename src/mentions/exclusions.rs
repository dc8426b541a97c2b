//! Uppercase tokens that look like tickers but almost never are one in
//! forum text. Checked before the known-ticker set, so real symbols that
//! collide with jargon (DD, ALL, CEO) are dropped on purpose.

use std::collections::HashSet;

pub const EXCLUDED_TOKENS: &[&str] = &[
    // forum jargon
    "DD", "YOLO", "FOMO", "HODL", "WSB", "MOON", "APES", "APE", "TLDR", "IMO", "IMHO", "LOL",
    "LMAO", "FUD", "OP", "EDIT", "PSA", "AMA", "BTFD", "GG", "FYI", "ELI", "NSFW", "OC", "RIP",
    "WTF", "OMG", "TIL", "BRB", "IRL", "YTD", "ITM", "OTM", "ATM", "DTE", "FD", "FDS", "BAG",
    "BAGS", "GAIN", "LOSS", "PUTS", "CALL", "CALLS", "PUT", "BULL", "BEAR", "BUY", "SELL", "HOLD",
    "LONG", "SHORT",
    // finance abbreviations
    "CEO", "CFO", "CTO", "COO", "IPO", "SEC", "FED", "FOMC", "CPI", "PPI", "GDP", "EPS", "PE",
    "ETF", "ETFS", "ATH", "ATL", "EOD", "EOW", "AH", "PM", "IV", "OI", "RSI", "MACD", "EMA", "SMA",
    "VWAP", "ROI", "ROE", "NAV", "AUM", "API", "AI", "EV", "EVS", "ESG", "IRS", "IRA", "USD", "EUR",
    "DJIA", "NYSE", "NASDAQ", "OTC", "SPAC", "LEAP", "LEAPS", "QE", "QT", "CNBC", "WSJ",
    // generic words and places
    "THE", "AND", "FOR", "ARE", "BUT", "NOT", "YOU", "ALL", "ANY", "CAN", "HAS", "HAD", "HER",
    "WAS", "ONE", "OUR", "OUT", "NEW", "NOW", "GET", "GOT", "BIG", "TOP", "WHO", "WHY", "HOW",
    "USA", "US", "UK", "EU", "IT", "IS", "ON", "OR", "SO", "TO", "UP", "GO", "NO", "AT", "BE",
    "BY", "DO", "IF", "IN", "ME", "MY", "OF", "OK", "WE", "AM", "AN", "AS", "HE", "HI",
];

pub fn default_exclusions() -> HashSet<String> {
    EXCLUDED_TOKENS.iter().map(|s| s.to_string()).collect()
}
