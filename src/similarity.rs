//! Lexical similarity scoring
//!
//! The scorer is the seam between the answer generator and whatever model
//! computes text closeness. Components take the trait, never a concrete
//! scorer, so tests and future embedding-based scorers can slot in without
//! touching the pipeline.

use strsim::jaro_winkler;

/// A symmetric closeness measure between two text strings, in `[0, 1]`.
pub trait SimilarityScorer {
    fn score(&self, a: &str, b: &str) -> f64;
}

/// Default scorer: token overlap blended with character-level similarity.
///
/// Sorensen-Dice over lowercased alphanumeric token sets carries the topical
/// signal; Jaro-Winkler on the normalized strings keeps short, nearly
/// identical strings from scoring low on token count alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalScorer;

const TOKEN_WEIGHT: f64 = 0.6;
const STRING_WEIGHT: f64 = 0.4;

impl SimilarityScorer for LexicalScorer {
    fn score(&self, a: &str, b: &str) -> f64 {
        let a_norm = normalize(a);
        let b_norm = normalize(b);

        let token_sim = dice_coefficient(&tokenize(&a_norm), &tokenize(&b_norm));
        let string_sim = jaro_winkler(&a_norm, &b_norm);

        (TOKEN_WEIGHT * token_sim + STRING_WEIGHT * string_sim).clamp(0.0, 1.0)
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

fn tokenize(text: &str) -> Vec<String> {
    let mut tokens: Vec<String> = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect();
    tokens.sort();
    tokens.dedup();
    tokens
}

/// Sorensen-Dice coefficient over two sorted, deduplicated token sets
fn dice_coefficient(a: &[String], b: &[String]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let common = a.iter().filter(|t| b.binary_search(t).is_ok()).count();
    2.0 * common as f64 / (a.len() + b.len()) as f64
}
