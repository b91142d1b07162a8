use similar::TextDiff;
use tracing::debug;

use crate::model::{Decision, FaqEntry, MatchOutcome};
use crate::normalize::normalize;

/// Minimum score for a candidate to count as a Hit.
pub const MATCH_THRESHOLD: f32 = 0.3;

/// Added once per qualifying query token found inside a candidate
/// question. Additive and uncapped: the final score may exceed 1.0.
pub const KEYWORD_BOOST: f32 = 0.1;

/// Tokens must be longer than this to qualify for the boost.
const MIN_KEYWORD_CHARS: usize = 3;

/// Contiguous-matching-block similarity ratio between two strings,
/// `2·M / T` over characters: 1.0 for identical inputs (including two
/// empty strings), 0.0 for fully disjoint ones.
pub fn similarity_ratio(a: &str, b: &str) -> f32 {
    TextDiff::from_chars(a, b).ratio()
}

fn score_candidate(query: &str, candidate: &str) -> f32 {
    let mut score = similarity_ratio(query, candidate);

    for token in query.split_whitespace() {
        if token.chars().count() > MIN_KEYWORD_CHARS && candidate.contains(token) {
            score += KEYWORD_BOOST;
        }
    }

    score
}

/// Scan the corpus for the highest-scoring entry. Ties keep the earliest
/// entry; an empty query or an empty corpus yields `None`.
pub fn best_match<'a>(query: &str, entries: &'a [FaqEntry]) -> Option<(&'a FaqEntry, f32)> {
    if query.is_empty() {
        return None;
    }

    let query = normalize(query);
    let mut best: Option<(&FaqEntry, f32)> = None;

    for entry in entries {
        let candidate = normalize(&entry.question);
        let score = score_candidate(&query, &candidate);

        if best.map_or(true, |(_, top)| score > top) {
            best = Some((entry, score));
        }
    }

    best
}

/// Apply the threshold to the best candidate.
pub fn decide(query: &str, entries: &[FaqEntry], threshold: f32) -> MatchOutcome {
    match best_match(query, entries) {
        Some((entry, score)) if score >= threshold => {
            debug!(score, question = %entry.question, "best match above threshold");
            MatchOutcome {
                question: Some(entry.question.clone()),
                answer: Some(entry.answer.clone()),
                score,
                decision: Decision::Hit,
            }
        }
        Some((entry, score)) => MatchOutcome {
            question: Some(entry.question.clone()),
            answer: None,
            score,
            decision: Decision::Miss,
        },
        None => MatchOutcome {
            question: None,
            answer: None,
            score: 0.0,
            decision: Decision::Miss,
        },
    }
}
