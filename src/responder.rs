//! Reply construction: canned category replies plus an empathy prefix

use crate::nlp::{LexiconSentiment, SentimentScorer};
use crate::tables::Category;

pub use crate::tables::respond_to_label;

/// Empathy prefix chosen from the sign of the sentiment polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Empathy {
    Sympathetic,
    Neutral,
    Encouraging,
}

impl Empathy {
    /// Strictly negative, strictly positive, or exactly zero. No bands.
    pub fn from_polarity(polarity: f32) -> Self {
        if polarity < 0.0 {
            Empathy::Sympathetic
        } else if polarity > 0.0 {
            Empathy::Encouraging
        } else {
            Empathy::Neutral
        }
    }

    pub fn phrase(&self) -> &'static str {
        match self {
            Empathy::Sympathetic => {
                "I'm sorry you're feeling unwell. Let me assist you in the best way possible."
            }
            Empathy::Encouraging => {
                "It's great to hear that you're feeling better! Let me know if there's anything I can help you with."
            }
            Empathy::Neutral => "I understand. Let me help you with your symptoms.",
        }
    }
}

/// Produces the empathy phrase for a piece of text
#[derive(Debug, Clone, Default)]
pub struct Responder<S = LexiconSentiment> {
    scorer: S,
}

impl<S: SentimentScorer> Responder<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    pub fn empathy(&self, text: &str) -> Empathy {
        let polarity = self.scorer.polarity(text);
        let empathy = Empathy::from_polarity(polarity);
        tracing::debug!(polarity, ?empathy, "sentiment scored");
        empathy
    }

    pub fn sentiment_phrase(&self, text: &str) -> &'static str {
        self.empathy(text).phrase()
    }

    /// Empathy phrase and category reply joined by a single space
    pub fn compose(&self, text: &str, category: Category) -> String {
        format!(
            "{} {}",
            self.sentiment_phrase(text),
            respond_to_label(category.as_str())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scorer that returns the same polarity for every input
    struct FixedScore(f32);

    impl SentimentScorer for FixedScore {
        fn polarity(&self, _text: &str) -> f32 {
            self.0
        }
    }

    #[test]
    fn test_sign_selects_phrase() {
        assert_eq!(Responder::new(FixedScore(-0.01)).empathy("x"), Empathy::Sympathetic);
        assert_eq!(Responder::new(FixedScore(0.01)).empathy("x"), Empathy::Encouraging);
        assert_eq!(Responder::new(FixedScore(0.0)).empathy("x"), Empathy::Neutral);
        assert_eq!(Responder::new(FixedScore(-0.0)).empathy("x"), Empathy::Neutral);
    }

    #[test]
    fn test_no_intermediate_bands() {
        assert_eq!(Empathy::from_polarity(-1.0), Empathy::from_polarity(-1e-6));
        assert_eq!(Empathy::from_polarity(1.0), Empathy::from_polarity(1e-6));
    }

    #[test]
    fn test_compose_joins_with_single_space() {
        let responder = Responder::new(FixedScore(0.0));
        let reply = responder.compose("anything", Category::Infection);
        assert_eq!(
            reply,
            format!("{} {}", Empathy::Neutral.phrase(), Category::Infection.reply())
        );
    }

    #[test]
    fn test_default_scorer_empty_text_is_neutral() {
        let responder = Responder::<LexiconSentiment>::default();
        assert_eq!(responder.sentiment_phrase(""), Empathy::Neutral.phrase());
    }
}
