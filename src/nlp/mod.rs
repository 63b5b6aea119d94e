//! Lightweight NLP capabilities used by the triage core
//!
//! The matcher and responder only depend on the two traits defined here, so
//! the bundled lexicon implementations can be swapped for a real tagger or
//! sentiment model (or for fixed-output mocks in tests).

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

pub mod sentiment;
pub mod tagger;

pub use sentiment::LexiconSentiment;
pub use tagger::{LexiconTagger, noun_chunks};

/// Coarse part-of-speech tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pos {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Adposition,
    Conjunction,
    Auxiliary,
    Particle,
    Numeral,
    Other,
}

/// A token together with its tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub text: String,
    pub pos: Pos,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, pos: Pos) -> Self {
        Self {
            text: text.into(),
            pos,
        }
    }
}

/// Part-of-speech tagging capability
pub trait PosTagger: Send + Sync {
    /// Tag the words of `text` in order. Must not panic on any input.
    fn tag(&self, text: &str) -> Vec<TaggedToken>;
}

/// Sentiment polarity capability
pub trait SentimentScorer: Send + Sync {
    /// Polarity in [-1.0, 1.0]; 0.0 for text with no sentiment signal.
    fn polarity(&self, text: &str) -> f32;
}

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\p{L}+(?:'\p{L}+)?|[0-9]+(?:\.[0-9]+)?").expect("token regex should compile")
});

/// NFKC-normalize and lowercase text, folding typographic apostrophes
pub fn normalize(text: &str) -> String {
    text.nfkc()
        .collect::<String>()
        .replace(['\u{2019}', '\u{2018}'], "'")
        .to_lowercase()
}

/// Split normalized text into word and number tokens; punctuation is dropped
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    TOKEN_RE
        .find_iter(&normalized)
        .map(|m| m.as_str().to_string())
        .collect()
}
