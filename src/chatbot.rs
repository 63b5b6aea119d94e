//! The triage bot: matcher and responder composed into a single reply

use crate::matcher::Matcher;
use crate::nlp::{LexiconSentiment, LexiconTagger, PosTagger, SentimentScorer};
use crate::responder::Responder;
use crate::tables::{Category, EMPTY_MESSAGE_PROMPT};

/// Stateless symptom triage responder. Every call is independent.
#[derive(Debug, Clone, Default)]
pub struct TriageBot<T = LexiconTagger, S = LexiconSentiment> {
    matcher: Matcher<T>,
    responder: Responder<S>,
}

impl<T: PosTagger, S: SentimentScorer> TriageBot<T, S> {
    pub fn new(tagger: T, scorer: S) -> Self {
        Self {
            matcher: Matcher::new(tagger),
            responder: Responder::new(scorer),
        }
    }

    pub fn classify(&self, text: &str) -> Category {
        self.matcher.classify(text)
    }

    pub fn sentiment_phrase(&self, text: &str) -> &'static str {
        self.responder.sentiment_phrase(text)
    }

    /// `<sentiment phrase> <category reply>`
    pub fn full_reply(&self, text: &str) -> String {
        let category = self.classify(text);
        tracing::info!(category = category.as_str(), "triaged message");
        self.responder.compose(text, category)
    }

    /// Reply to an optional message; a missing or empty one gets the prompt
    pub fn reply_to_message(&self, message: Option<&str>) -> String {
        match message {
            Some(text) if !text.is_empty() => self.full_reply(text),
            _ => EMPTY_MESSAGE_PROMPT.to_string(),
        }
    }
}
