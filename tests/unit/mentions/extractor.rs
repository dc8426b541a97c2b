use std::collections::HashSet;

use marketmood::mentions::{default_exclusions, fallback_tickers, MentionExtractor};
use marketmood::models::Post;

fn known_with(extra: &[&str]) -> HashSet<String> {
    let mut known = fallback_tickers();
    known.extend(extra.iter().map(|s| s.to_string()));
    known
}

fn extractor(cap: usize) -> MentionExtractor {
    MentionExtractor::new(cap).expect("token pattern compiles")
}

#[test]
fn test_counts_bare_and_cashtag_mentions_and_drops_jargon() {
    // DD is a listed symbol too, but exclusions win
    let known = known_with(&["DD"]);
    let posts = vec![Post::new("GME to the moon, also check $AAPL and DD,", "")];

    let mentions = extractor(10).extract(&posts, &known, &default_exclusions());
    let symbols: Vec<(&str, u32)> = mentions
        .iter()
        .map(|m| (m.symbol.as_str(), m.count))
        .collect();

    assert_eq!(symbols, vec![("GME", 1), ("AAPL", 1)]);
}

#[test]
fn test_empty_batch_yields_nothing() {
    let mentions = extractor(10).extract(&[], &fallback_tickers(), &default_exclusions());
    assert!(mentions.is_empty());
}

#[test]
fn test_unknown_tokens_are_ignored() {
    let posts = vec![Post::new("ZZZQ and QWERT are not real", "")];
    let mentions = extractor(10).extract(&posts, &fallback_tickers(), &default_exclusions());
    assert!(mentions.is_empty());
}

#[test]
fn test_counts_across_title_and_body() {
    let posts = vec![
        Post::new("TSLA earnings", "TSLA beat, NVDA next"),
        Post::new("NVDA or TSLA?", ""),
    ];

    let mentions = extractor(10).extract(&posts, &fallback_tickers(), &default_exclusions());
    assert_eq!(mentions[0].symbol, "TSLA");
    assert_eq!(mentions[0].count, 3);
    assert_eq!(mentions[1].symbol, "NVDA");
    assert_eq!(mentions[1].count, 2);
}

#[test]
fn test_result_is_capped() {
    let posts = vec![Post::new(
        "GME AMC PLTR TSLA NVDA HOOD ROKU CLOV AAPL SPY",
        "",
    )];

    let mentions = extractor(3).extract(&posts, &fallback_tickers(), &default_exclusions());
    let symbols: Vec<&str> = mentions.iter().map(|m| m.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["GME", "AMC", "PLTR"]);
}

#[test]
fn test_ties_break_by_popularity_then_encounter() {
    let posts = vec![
        Post::new("TSLA thoughts", "").with_upvotes(10),
        Post::new("NVDA thoughts", "").with_upvotes(500),
        Post::new("PLTR thoughts", "").with_upvotes(10),
    ];

    let mentions = extractor(10).extract(&posts, &fallback_tickers(), &default_exclusions());
    let symbols: Vec<&str> = mentions.iter().map(|m| m.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["NVDA", "TSLA", "PLTR"]);
}

#[test]
fn test_source_is_most_upvoted_title_post() {
    let posts = vec![
        Post::new("GME squeeze incoming", "").with_upvotes(5),
        Post::new("Daily discussion", "GME again").with_upvotes(900),
        Post::new("GME is back", "").with_upvotes(50),
    ];

    let mentions = extractor(10).extract(&posts, &fallback_tickers(), &default_exclusions());
    assert_eq!(mentions.len(), 1);

    let gme = &mentions[0];
    assert_eq!(gme.count, 3);
    assert!(gme.price_change_pct.is_none());
    let source = gme.source.as_ref().expect("source post");
    assert_eq!(source.title, "GME is back");
    assert_eq!(source.upvotes, Some(50));
}

#[test]
fn test_body_only_mention_uses_first_post_as_source() {
    let posts = vec![Post::new("What should I buy", "thinking about PLTR").with_upvotes(7)];

    let mentions = extractor(10).extract(&posts, &fallback_tickers(), &default_exclusions());
    let source = mentions[0].source.as_ref().expect("source post");
    assert_eq!(source.title, "What should I buy");
}

#[test]
fn test_lowercase_cashtags_are_optional() {
    let posts = vec![Post::new("loading up on $gme and gme", "")];

    let lenient = extractor(10).extract(&posts, &fallback_tickers(), &default_exclusions());
    assert_eq!(lenient.len(), 1);
    assert_eq!(lenient[0].symbol, "GME");
    assert_eq!(lenient[0].count, 1);

    let strict = extractor(10)
        .with_lowercase_cashtags(false)
        .extract(&posts, &fallback_tickers(), &default_exclusions());
    assert!(strict.is_empty());
}

#[test]
fn test_tokens_respect_length_and_word_boundaries() {
    let tokens = extractor(10).tokens("A TOOLONG AB GOOGL $XYZABC x");
    assert_eq!(tokens, vec!["AB".to_string(), "GOOGL".to_string()]);
}
