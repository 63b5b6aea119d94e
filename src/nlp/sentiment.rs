//! Lexicon-based polarity scoring
//!
//! Each sentiment-bearing word carries a fixed polarity. A preceding
//! intensifier scales the next word, a preceding negator flips and damps it.
//! The text score is the mean over scored words, clamped to [-1, 1].

use super::{SentimentScorer, tokenize};
use std::collections::HashMap;
use std::sync::LazyLock;

static POLARITY: LazyLock<HashMap<&'static str, f32>> = LazyLock::new(|| {
    [
        // positive
        ("good", 0.7),
        ("great", 0.8),
        ("better", 0.5),
        ("best", 1.0),
        ("fine", 0.4),
        ("happy", 0.8),
        ("glad", 0.5),
        ("excellent", 1.0),
        ("wonderful", 1.0),
        ("amazing", 0.6),
        ("awesome", 1.0),
        ("nice", 0.6),
        ("okay", 0.5),
        ("ok", 0.5),
        ("fantastic", 0.4),
        ("healthy", 0.5),
        ("relieved", 0.3),
        ("improving", 0.3),
        ("thanks", 0.2),
        ("thank", 0.2),
        ("love", 0.5),
        ("calm", 0.3),
        ("comfortable", 0.4),
        // negative
        ("bad", -0.7),
        ("terrible", -1.0),
        ("awful", -1.0),
        ("horrible", -1.0),
        ("sick", -0.7),
        ("ill", -0.5),
        ("unwell", -0.6),
        ("worse", -0.4),
        ("worst", -1.0),
        ("sad", -0.5),
        ("painful", -0.7),
        ("severe", -0.4),
        ("miserable", -0.8),
        ("weak", -0.4),
        ("tired", -0.4),
        ("exhausted", -0.4),
        ("scared", -0.5),
        ("worried", -0.4),
        ("anxious", -0.3),
        ("afraid", -0.6),
        ("unbearable", -0.8),
        ("hurt", -0.4),
        ("hurts", -0.4),
        ("sore", -0.5),
        ("poor", -0.4),
        ("uncomfortable", -0.5),
        ("frustrated", -0.5),
    ]
    .into_iter()
    .collect()
});

static INTENSIFIERS: LazyLock<HashMap<&'static str, f32>> = LazyLock::new(|| {
    [
        ("very", 1.3),
        ("really", 1.3),
        ("extremely", 1.5),
        ("incredibly", 1.5),
        ("super", 1.4),
        ("so", 1.2),
        ("too", 1.2),
        ("quite", 1.1),
        ("somewhat", 0.8),
        ("slightly", 0.7),
    ]
    .into_iter()
    .collect()
});

const NEGATORS: &[&str] = &["not", "never", "no", "hardly", "without"];

/// Damping applied to a negated word's polarity
const NEGATION_FACTOR: f32 = -0.5;

/// Scorer backed by the built-in polarity lexicon
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconSentiment;

impl LexiconSentiment {
    pub fn new() -> Self {
        LexiconSentiment
    }
}

fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word) || word.ends_with("n't")
}

impl SentimentScorer for LexiconSentiment {
    fn polarity(&self, text: &str) -> f32 {
        let mut total = 0.0f32;
        let mut scored = 0usize;
        let mut negated = false;
        let mut intensity = 1.0f32;

        for word in tokenize(text) {
            if is_negator(&word) {
                negated = true;
                continue;
            }
            if let Some(factor) = INTENSIFIERS.get(word.as_str()) {
                intensity *= factor;
                continue;
            }
            match POLARITY.get(word.as_str()) {
                Some(&base) => {
                    let mut value = base * intensity;
                    if negated {
                        value *= NEGATION_FACTOR;
                    }
                    total += value.clamp(-1.0, 1.0);
                    scored += 1;
                    negated = false;
                    intensity = 1.0;
                }
                // Intensifiers reach only the next word; negation also skips
                // one-letter words ("not a good")
                None => {
                    intensity = 1.0;
                    if word.chars().count() > 1 {
                        negated = false;
                    }
                }
            }
        }

        if scored == 0 {
            0.0
        } else {
            (total / scored as f32).clamp(-1.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> f32 {
        LexiconSentiment::new().polarity(text)
    }

    #[test]
    fn test_empty_and_neutral_text_scores_zero() {
        assert_eq!(score(""), 0.0);
        assert_eq!(score("   "), 0.0);
        assert_eq!(score("I have a fever and a headache"), 0.0);
        assert_eq!(score("12345 ###"), 0.0);
    }

    #[test]
    fn test_polarity_sign() {
        assert!(score("I feel great today") > 0.0);
        assert!(score("I feel terrible") < 0.0);
        assert!(score("I am sick and tired") < 0.0);
    }

    #[test]
    fn test_negation_flips_sign() {
        assert!(score("it is not good") < 0.0);
        assert!(score("not a good day") < 0.0);
        assert!(score("it isn't bad") > 0.0);
        assert!(score("not very good") < 0.0);
    }

    #[test]
    fn test_negation_does_not_cross_clauses() {
        assert!(score("I have no fever and I feel great today") > 0.0);
        assert!(score("I do not have a cough but I feel good") > 0.0);
        assert!(score("not a problem, I feel great") > 0.0);
    }

    #[test]
    fn test_intensifier_scales_next_word_only() {
        assert!(score("very bad") < score("bad"));
        assert_eq!(score("very much bad"), score("bad"));
    }

    #[test]
    fn test_score_is_bounded() {
        let s = score("extremely incredibly awful terrible horrible");
        assert!((-1.0..=1.0).contains(&s));
        assert_eq!(s, -1.0);
    }

    #[test]
    fn test_deterministic() {
        let text = "My chest hurts and I'm worried";
        assert_eq!(score(text), score(text));
    }
}
