//! Symptom keyword matching
//!
//! Text is tagged, reduced to noun-phrase candidates, and checked against
//! [`KEYWORD_TABLE`] in table order. The first keyword found wins.
//!
//! Containment direction: a keyword matches when it occurs as a substring of
//! a candidate (`candidate.contains(keyword)`), never the other way round.
//! So "headaches" matches "headache", while a bare "pain" does not match
//! "chest pain". Multi-word keywords match because candidates are whole
//! noun chunks rather than single tokens.

use crate::nlp::{LexiconTagger, PosTagger, noun_chunks};
use crate::tables::{Category, KEYWORD_TABLE};

/// Maps free text onto a [`Category`]
#[derive(Debug, Clone, Default)]
pub struct Matcher<T = LexiconTagger> {
    tagger: T,
}

impl<T: PosTagger> Matcher<T> {
    pub fn new(tagger: T) -> Self {
        Self { tagger }
    }

    /// Noun-phrase candidates extracted from `text`, in input order
    pub fn candidates(&self, text: &str) -> Vec<String> {
        let tokens = self.tagger.tag(&text.to_lowercase());
        noun_chunks(&tokens)
    }

    /// Classify `text`; falls through to [`Category::General`] when nothing matches
    pub fn classify(&self, text: &str) -> Category {
        let candidates = self.candidates(text);
        match_keyword(&candidates)
            .map(|(keyword, category)| {
                tracing::debug!(keyword, category = category.as_str(), "symptom keyword matched");
                category
            })
            .unwrap_or(Category::General)
    }
}

/// First `(keyword, category)` in table order contained in any candidate
pub fn match_keyword(candidates: &[String]) -> Option<(&'static str, Category)> {
    KEYWORD_TABLE
        .iter()
        .find(|(keyword, _)| candidates.iter().any(|c| c.contains(*keyword)))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{Pos, TaggedToken};

    /// Tagger that ignores its input and returns a fixed token list
    struct FixedTagger(Vec<TaggedToken>);

    impl PosTagger for FixedTagger {
        fn tag(&self, _text: &str) -> Vec<TaggedToken> {
            self.0.clone()
        }
    }

    fn nouns(words: &[&str]) -> FixedTagger {
        FixedTagger(words.iter().map(|w| TaggedToken::new(*w, Pos::Noun)).collect())
    }

    #[test]
    fn test_only_noun_tokens_are_candidates() {
        let tagger = FixedTagger(vec![
            TaggedToken::new("fever", Pos::Verb),
            TaggedToken::new("and", Pos::Conjunction),
            TaggedToken::new("rash", Pos::Noun),
        ]);
        assert_eq!(Matcher::new(tagger).classify("anything"), Category::Dermatological);
    }

    #[test]
    fn test_table_order_wins_over_input_order() {
        let matcher = Matcher::new(FixedTagger(vec![
            TaggedToken::new("swelling", Pos::Noun),
            TaggedToken::new("and", Pos::Conjunction),
            TaggedToken::new("cough", Pos::Noun),
        ]));
        assert_eq!(matcher.classify("swelling and cough"), Category::Respiratory);
    }

    #[test]
    fn test_containment_is_keyword_in_candidate() {
        // Candidate contains the keyword
        assert_eq!(Matcher::new(nouns(&["headaches"])).classify(""), Category::NeurologicalStress);
        // Keyword contains the candidate: deliberately not a match
        assert_eq!(Matcher::new(nouns(&["fev"])).classify(""), Category::General);
    }

    #[test]
    fn test_no_candidates_is_general() {
        assert_eq!(Matcher::new(FixedTagger(vec![])).classify(""), Category::General);
        assert_eq!(Matcher::new(nouns(&["weather"])).classify(""), Category::General);
    }

    #[test]
    fn test_match_keyword_reports_keyword() {
        let candidates = vec!["sharp chest pain".to_string()];
        assert_eq!(match_keyword(&candidates), Some(("chest pain", Category::Cardiac)));
        assert_eq!(match_keyword(&[]), None);
    }

    #[test]
    fn test_default_tagger_end_to_end() {
        let matcher = Matcher::<LexiconTagger>::default();
        assert_eq!(matcher.classify("I have a fever and a headache"), Category::Infection);
        assert_eq!(matcher.classify("Sudden SHORTNESS of breath"), Category::RespiratoryCardiac);
        assert_eq!(matcher.classify("I feel great today"), Category::General);
        assert_eq!(matcher.classify(""), Category::General);
    }
}
