//! Ticker mention extraction and ranking
//!
//! Scans post text for ticker-shaped tokens, keeps the ones that are known
//! symbols and not excluded jargon, and ranks them by mention count.

use std::collections::{HashMap, HashSet};

use regex::Regex;

use crate::models::{MentionSource, Post, TickerMention};

/// `$abc` cashtags (any case) or bare 2-5 letter uppercase words
const TOKEN_PATTERN: &str = r"\$([A-Za-z]{2,5})\b|\b([A-Z]{2,5})\b";

pub const DEFAULT_CAP: usize = 10;

#[derive(Debug, Clone)]
pub struct MentionExtractor {
    pattern: Regex,
    cap: usize,
    accept_lowercase_cashtags: bool,
}

#[derive(Debug)]
struct Tally {
    count: u32,
    first_seen: usize,
    /// Highest upvote count of any post mentioning the symbol
    popularity: Option<u64>,
    first_post: usize,
    /// Best post whose title carries the symbol: (index, upvotes)
    title_post: Option<(usize, u64)>,
}

impl MentionExtractor {
    pub fn new(cap: usize) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(TOKEN_PATTERN)?,
            cap,
            accept_lowercase_cashtags: true,
        })
    }

    pub fn with_lowercase_cashtags(mut self, accept: bool) -> Self {
        self.accept_lowercase_cashtags = accept;
        self
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Candidate symbols in `text`, in order of appearance
    pub fn tokens(&self, text: &str) -> Vec<String> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| {
                if let Some(cashtag) = caps.get(1) {
                    let raw = cashtag.as_str();
                    if self.accept_lowercase_cashtags {
                        Some(raw.to_ascii_uppercase())
                    } else if raw.chars().all(|c| c.is_ascii_uppercase()) {
                        Some(raw.to_string())
                    } else {
                        None
                    }
                } else {
                    caps.get(2).map(|m| m.as_str().to_string())
                }
            })
            .collect()
    }

    /// Count, filter and rank mentions across a batch of posts
    pub fn extract(
        &self,
        posts: &[Post],
        known: &HashSet<String>,
        excluded: &HashSet<String>,
    ) -> Vec<TickerMention> {
        let mut tallies: HashMap<String, Tally> = HashMap::new();

        for (index, post) in posts.iter().enumerate() {
            let in_title = self.tokens(&post.title).into_iter().map(|t| (t, true));
            let in_body = self.tokens(&post.body).into_iter().map(|t| (t, false));

            for (symbol, from_title) in in_title.chain(in_body) {
                if excluded.contains(&symbol) || !known.contains(&symbol) {
                    continue;
                }

                let seen = tallies.len();
                let tally = tallies.entry(symbol).or_insert_with(|| Tally {
                    count: 0,
                    first_seen: seen,
                    popularity: None,
                    first_post: index,
                    title_post: None,
                });
                tally.count += 1;

                if let Some(upvotes) = post.upvotes {
                    tally.popularity = Some(tally.popularity.map_or(upvotes, |p| p.max(upvotes)));
                }

                if from_title {
                    let upvotes = post.upvotes.unwrap_or(0);
                    match tally.title_post {
                        Some((_, best)) if best >= upvotes => {}
                        _ => tally.title_post = Some((index, upvotes)),
                    }
                }
            }
        }

        let mut ranked: Vec<(String, Tally)> = tallies.into_iter().collect();
        ranked.sort_by(|(_, a), (_, b)| {
            b.count
                .cmp(&a.count)
                .then(b.popularity.unwrap_or(0).cmp(&a.popularity.unwrap_or(0)))
                .then(a.first_seen.cmp(&b.first_seen))
        });
        ranked.truncate(self.cap);

        ranked
            .into_iter()
            .map(|(symbol, tally)| {
                let source_index = tally
                    .title_post
                    .map(|(index, _)| index)
                    .unwrap_or(tally.first_post);
                let source = posts.get(source_index).map(|post| MentionSource {
                    title: post.title.clone(),
                    upvotes: post.upvotes,
                });
                TickerMention {
                    symbol,
                    count: tally.count,
                    price_change_pct: None,
                    source,
                }
            })
            .collect()
    }
}
