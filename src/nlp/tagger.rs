//! Rule-based part-of-speech tagger and noun chunking
//!
//! Closed-class words come from fixed lists, open-class words from a small
//! lexicon tuned for symptom descriptions, then suffix heuristics. Anything
//! still unknown is tagged as a noun.

use super::{Pos, PosTagger, TaggedToken, tokenize};
use std::collections::HashSet;
use std::sync::LazyLock;

fn word_set(words: &[&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

static DETERMINERS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    word_set(&[
        "a", "an", "the", "this", "that", "these", "those", "my", "your", "his", "her", "its",
        "our", "their", "some", "any", "no", "every", "each", "all", "another", "much", "many",
        "few", "several", "both", "either", "neither",
    ])
});

static PRONOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    word_set(&[
        "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "myself",
        "yourself", "himself", "herself", "itself", "ourselves", "themselves", "mine", "yours",
        "ours", "theirs", "i'm", "i've", "i'll", "i'd", "you're", "it's", "he's", "she's",
        "we're", "they're", "someone", "something", "anything", "everything", "nothing",
        "everyone", "anyone", "who", "what", "which", "whom", "whose",
    ])
});

static ADPOSITIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    word_set(&[
        "of", "in", "on", "at", "by", "for", "with", "without", "from", "to", "into", "onto",
        "over", "under", "about", "after", "before", "during", "since", "until", "through",
        "around", "near", "between", "behind", "above", "below", "across", "against", "along",
        "among", "like", "upon", "off", "out", "up", "down",
    ])
});

static CONJUNCTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    word_set(&[
        "and", "or", "but", "nor", "yet", "because", "if", "although", "though", "while",
        "when", "whereas", "unless", "than", "as",
    ])
});

static AUXILIARIES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    word_set(&[
        "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
        "do", "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
        "must",
    ])
});

static PARTICLES: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| word_set(&["not", "never", "please"]));

static ADVERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    word_set(&[
        "very", "really", "quite", "too", "so", "also", "just", "still", "already", "always",
        "often", "sometimes", "usually", "rarely", "again", "here", "there", "now", "then",
        "today", "tonight", "yesterday", "tomorrow", "lately", "recently", "well", "almost",
        "even", "only", "much", "more", "most", "less", "least", "how", "why", "where",
    ])
});

static VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    word_set(&[
        "feel", "feels", "felt", "get", "gets", "got", "keep", "keeps", "kept", "think",
        "know", "want", "need", "needs", "help", "hurt", "hurts", "started", "start", "starts",
        "seem", "seems", "look", "looks", "go", "goes", "went", "come", "comes", "came", "make",
        "makes", "made", "take", "takes", "took", "experience", "suffer", "suffers", "vomit",
        "vomited", "sleep", "slept", "eat", "ate", "breathe", "breathes", "throw", "see",
        "tell", "say", "said", "let", "lets", "worry",
    ])
});

static ADJECTIVES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    word_set(&[
        "great", "good", "bad", "terrible", "awful", "horrible", "sick", "ill", "unwell",
        "better", "worse", "worst", "best", "fine", "okay", "ok", "happy", "sad", "tired",
        "weak", "severe", "mild", "sharp", "dull", "high", "low", "constant", "persistent",
        "chronic", "sore", "itchy", "red", "swollen", "dizzy", "nauseous", "new", "old",
        "little", "big", "small", "slight", "short", "long", "hot", "dry", "wet",
        "strong", "left", "right", "lower", "upper", "sudden", "nice", "glad",
    ])
});

/// Open-class words known to be nouns. Covers every word of the symptom
/// keyword vocabulary so a bare keyword is always tagged as a noun.
static NOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    word_set(&[
        "fever", "cough", "headache", "chest", "pain", "nausea", "fatigue", "joint",
        "dizziness", "shortness", "breath", "rash", "swelling", "ache", "stomach", "throat",
        "head", "back", "skin", "body", "arm", "leg", "knee", "ankle", "foot", "hand", "neck",
        "shoulder", "eye", "ear", "nose", "heart", "temperature", "symptom", "day", "week",
        "night", "morning", "doctor", "vomiting", "bleeding", "itching", "burning", "cramp",
        "chills", "sweat", "muscle", "blood", "infection", "flu", "cold", "bruise", "lump",
    ])
});

/// Tagger backed by the built-in word lists
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconTagger;

impl LexiconTagger {
    pub fn new() -> Self {
        LexiconTagger
    }

    fn tag_word(word: &str, prev: Option<Pos>) -> Pos {
        if word.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            return Pos::Numeral;
        }
        if word.ends_with("n't") {
            return Pos::Auxiliary;
        }
        if DETERMINERS.contains(word) {
            return Pos::Determiner;
        }
        if PRONOUNS.contains(word) {
            return Pos::Pronoun;
        }
        if ADPOSITIONS.contains(word) {
            return Pos::Adposition;
        }
        if CONJUNCTIONS.contains(word) {
            return Pos::Conjunction;
        }
        if AUXILIARIES.contains(word) {
            return Pos::Auxiliary;
        }
        if PARTICLES.contains(word) {
            return Pos::Particle;
        }
        if NOUNS.contains(word) || is_plural_of_known_noun(word) {
            return Pos::Noun;
        }
        if ADVERBS.contains(word) {
            return Pos::Adverb;
        }
        if VERBS.contains(word) {
            return Pos::Verb;
        }
        if ADJECTIVES.contains(word) {
            return Pos::Adjective;
        }
        suffix_tag(word, prev)
    }
}

fn is_plural_of_known_noun(word: &str) -> bool {
    word.strip_suffix("es").is_some_and(|stem| NOUNS.contains(stem))
        || word.strip_suffix('s').is_some_and(|stem| NOUNS.contains(stem))
}

fn suffix_tag(word: &str, prev: Option<Pos>) -> Pos {
    const NOUN_SUFFIXES: &[&str] = &[
        "ness", "tion", "sion", "ment", "ity", "ism", "itis", "algia", "ache", "ure", "ance",
        "ence",
    ];
    const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "ical", "less", "ish"];

    if word.len() > 4 && word.ends_with("ly") {
        Pos::Adverb
    } else if NOUN_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        Pos::Noun
    } else if ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        Pos::Adjective
    } else if word.len() > 4 && word.ends_with("ing") {
        // Gerund after a determiner or modifier reads as a noun ("the throbbing")
        match prev {
            Some(Pos::Determiner | Pos::Adjective) => Pos::Noun,
            _ => Pos::Verb,
        }
    } else if word.len() > 3 && word.ends_with("ed") {
        Pos::Verb
    } else if word.chars().all(char::is_alphabetic) {
        Pos::Noun
    } else {
        Pos::Other
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        let mut tagged: Vec<TaggedToken> = Vec::new();
        for word in tokenize(text) {
            let prev = tagged.last().map(|t| t.pos);
            let pos = Self::tag_word(&word, prev);
            tagged.push(TaggedToken::new(word, pos));
        }
        tagged
    }
}

/// Collect noun phrase candidates from tagged tokens.
///
/// A chunk is a maximal run of adjectives and nouns that ends in a noun. Two
/// runs separated by a single "of" are joined ("shortness of breath"). Order
/// follows the input; duplicates are kept.
pub fn noun_chunks(tokens: &[TaggedToken]) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut run: Vec<&TaggedToken> = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        match token.pos {
            Pos::Noun | Pos::Adjective => run.push(token),
            Pos::Adposition
                if token.text == "of"
                    && run.last().is_some_and(|t| t.pos == Pos::Noun)
                    && tokens
                        .get(i + 1)
                        .is_some_and(|next| matches!(next.pos, Pos::Noun | Pos::Adjective)) =>
            {
                run.push(token)
            }
            _ => flush_run(&mut run, &mut chunks),
        }
    }
    flush_run(&mut run, &mut chunks);
    chunks
}

fn flush_run(run: &mut Vec<&TaggedToken>, chunks: &mut Vec<String>) {
    while run.last().is_some_and(|t| t.pos != Pos::Noun) {
        run.pop();
    }
    if !run.is_empty() {
        let text = run
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        chunks.push(text);
    }
    run.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(text: &str) -> Vec<(String, Pos)> {
        LexiconTagger::new()
            .tag(text)
            .into_iter()
            .map(|t| (t.text, t.pos))
            .collect()
    }

    fn chunks(text: &str) -> Vec<String> {
        noun_chunks(&LexiconTagger::new().tag(text))
    }

    #[test]
    fn test_symptom_words_are_nouns() {
        for word in ["fever", "cough", "swelling", "dizziness", "nausea", "rashes", "headaches"] {
            assert_eq!(tags(word), vec![(word.to_string(), Pos::Noun)], "{word}");
        }
    }

    #[test]
    fn test_closed_class_words() {
        let tagged = tags("I have a fever and it is bad");
        let pos: Vec<Pos> = tagged.iter().map(|(_, p)| *p).collect();
        assert_eq!(
            pos,
            vec![
                Pos::Pronoun,
                Pos::Auxiliary,
                Pos::Determiner,
                Pos::Noun,
                Pos::Conjunction,
                Pos::Pronoun,
                Pos::Auxiliary,
                Pos::Adjective,
            ]
        );
    }

    #[test]
    fn test_gerund_depends_on_context() {
        assert_eq!(tags("been throbbing")[1].1, Pos::Verb);
        assert_eq!(tags("the throbbing")[1].1, Pos::Noun);
    }

    #[test]
    fn test_suffix_heuristics() {
        assert_eq!(tags("tightness")[0].1, Pos::Noun);
        assert_eq!(tags("suddenly")[0].1, Pos::Adverb);
        assert_eq!(tags("painful")[0].1, Pos::Adjective);
        assert_eq!(tags("vomited")[0].1, Pos::Verb);
    }

    #[test]
    fn test_noun_chunks_join_multiword_symptoms() {
        assert_eq!(chunks("I have chest pain"), vec!["chest pain"]);
        assert_eq!(chunks("shortness of breath"), vec!["shortness of breath"]);
        assert_eq!(chunks("I have a fever and a headache"), vec!["fever", "headache"]);
    }

    #[test]
    fn test_noun_chunks_trim_trailing_modifiers() {
        assert_eq!(chunks("my knee is swollen"), vec!["knee"]);
        assert_eq!(chunks("a sharp pain"), vec!["sharp pain"]);
    }

    #[test]
    fn test_of_without_noun_after_breaks_chunk() {
        assert_eq!(chunks("pain of my chest"), vec!["pain", "chest"]);
    }

    #[test]
    fn test_degenerate_input_never_panics() {
        assert!(chunks("").is_empty());
        assert!(chunks("!!! ??? ...").is_empty());
        assert!(chunks("12 34").is_empty());
    }
}
