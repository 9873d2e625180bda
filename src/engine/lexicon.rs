// src/engine/lexicon.rs
//! Shared sentiment lexicon for both scoring engines.
//!
//! Maps words to valence values in the range `[-1, 1]` and carries the
//! negation and intensifier word sets the rule layers consult. Words are
//! matched case-insensitively.

use std::collections::HashMap;

/// Word-level sentiment lexicon.
///
/// Positive valences indicate positive sentiment, negative indicate negative.
#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    words: HashMap<String, f64>,
}

impl SentimentLexicon {
    /// Create a new empty lexicon.
    pub fn new() -> Self {
        Self {
            words: HashMap::new(),
        }
    }

    /// Add a positive word with the given intensity in `[0, 1]`.
    pub fn add_positive(&mut self, word: &str, intensity: f64) {
        let intensity = intensity.clamp(0.0, 1.0);
        self.words.insert(word.to_lowercase(), intensity);
    }

    /// Add a negative word with the given intensity in `[0, 1]`.
    ///
    /// Stored as a negative valence.
    pub fn add_negative(&mut self, word: &str, intensity: f64) {
        let intensity = intensity.clamp(0.0, 1.0);
        self.words.insert(word.to_lowercase(), -intensity);
    }

    /// Look up the valence for a word, or `None` if it carries no sentiment.
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.words.get(&word.to_lowercase()).copied()
    }

    /// Check whether a word is in the lexicon.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(&word.to_lowercase())
    }

    /// Number of words in the lexicon.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the lexicon is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Tokenize text the way both engines consume it: split on non-alphabetic
/// characters, dropping empty fragments. Case is preserved so the valence
/// layer can detect ALL-CAPS emphasis.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Check whether a token negates the sentiment of nearby words.
///
/// Tokenization splits on apostrophes, so contraction stems ("don", "isn")
/// appear here alongside full negation words.
pub fn is_negation(word: &str) -> bool {
    const NEGATIONS: &[&str] = &[
        "not", "no", "never", "none", "nobody", "nothing", "neither", "nor",
        "without", "hardly", "scarcely", "cannot", "cant", "wont", "dont",
        "isnt", "wasnt", "arent", "werent", "doesnt", "didnt", "couldnt",
        "wouldnt", "shouldnt", "aint",
        // contraction stems left behind by tokenization
        "don", "isn", "wasn", "aren", "weren", "doesn", "didn", "couldn",
        "wouldn", "shouldn",
    ];
    let lower = word.to_lowercase();
    NEGATIONS.contains(&lower.as_str())
}

/// Look up the intensity scaling factor for a booster or dampener word.
///
/// Boosters amplify the valence of the word they precede ("absolutely
/// love"), dampeners attenuate it ("slightly annoying"). Returns `None` for
/// words that do not modify intensity.
pub fn intensity_scalar(word: &str) -> Option<f64> {
    const BOOSTERS: &[&str] = &[
        "absolutely", "completely", "extremely", "highly", "incredibly",
        "really", "remarkably", "so", "totally", "utterly", "very", "much",
        "exceptionally", "tremendously",
    ];
    const DAMPENERS: &[&str] = &[
        "slightly", "somewhat", "barely", "marginally", "kinda", "kind",
        "sorta", "sort", "partially", "moderately", "fairly",
    ];
    let lower = word.to_lowercase();
    if BOOSTERS.contains(&lower.as_str()) {
        Some(1.3)
    } else if DAMPENERS.contains(&lower.as_str()) {
        Some(0.7)
    } else {
        None
    }
}

impl Default for SentimentLexicon {
    /// Create the default lexicon with common emotional words,
    /// tiered by intensity.
    fn default() -> Self {
        let mut lexicon = Self::new();

        // Highly positive words (0.8-1.0)
        for word in &[
            "excellent",
            "wonderful",
            "amazing",
            "fantastic",
            "brilliant",
            "outstanding",
            "perfect",
            "exceptional",
            "superb",
            "magnificent",
            "love",
            "loved",
            "loves",
            "joy",
            "joyful",
            "awesome",
            "incredible",
            "best",
            "thrilled",
            "delighted",
        ] {
            lexicon.add_positive(word, 0.9);
        }

        // Moderately positive words (0.5-0.7)
        for word in &[
            "good",
            "great",
            "nice",
            "pleasant",
            "lovely",
            "delightful",
            "happy",
            "glad",
            "pleased",
            "satisfied",
            "exciting",
            "interesting",
            "impressive",
            "remarkable",
            "valuable",
            "useful",
            "helpful",
            "recommended",
            "recommend",
            "enjoy",
            "enjoyed",
            "like",
            "liked",
            "beautiful",
        ] {
            lexicon.add_positive(word, 0.6);
        }

        // Mildly positive words (0.2-0.4)
        for word in &[
            "okay",
            "decent",
            "adequate",
            "acceptable",
            "reasonable",
            "positive",
            "favorable",
            "promising",
            "hopeful",
            "exceeds",
            "exceeded",
            "improved",
            "improves",
        ] {
            lexicon.add_positive(word, 0.3);
        }

        // Highly negative words (0.8-1.0)
        for word in &[
            "terrible",
            "awful",
            "horrible",
            "dreadful",
            "atrocious",
            "abysmal",
            "disastrous",
            "catastrophic",
            "devastating",
            "appalling",
            "hate",
            "hated",
            "hates",
            "worst",
            "disgusting",
            "miserable",
        ] {
            lexicon.add_negative(word, 0.9);
        }

        // Moderately negative words (0.5-0.7)
        for word in &[
            "bad",
            "poor",
            "disappointing",
            "disappointed",
            "frustrating",
            "frustrated",
            "annoying",
            "annoyed",
            "unpleasant",
            "difficult",
            "problematic",
            "troublesome",
            "concerning",
            "worrying",
            "upsetting",
            "disturbing",
            "confusing",
            "confused",
            "unclear",
            "angry",
            "sad",
            "ugly",
        ] {
            lexicon.add_negative(word, 0.6);
        }

        // Mildly negative words (0.2-0.4)
        for word in &[
            "mediocre",
            "subpar",
            "lacking",
            "insufficient",
            "underwhelming",
            "boring",
            "dull",
            "tedious",
            "complicated",
            "slow",
            "questionable",
        ] {
            lexicon.add_negative(word, 0.4);
        }

        lexicon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lexicon_is_populated() {
        let lexicon = SentimentLexicon::default();
        assert!(!lexicon.is_empty());
        assert!(lexicon.len() > 50);
        assert!(lexicon.contains("amazing"));
        assert!(lexicon.contains("terrible"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let lexicon = SentimentLexicon::default();
        assert_eq!(lexicon.valence("Amazing"), lexicon.valence("amazing"));
        assert!(lexicon.valence("AMAZING").unwrap() > 0.0);
    }

    #[test]
    fn unknown_words_have_no_valence() {
        let lexicon = SentimentLexicon::default();
        assert_eq!(lexicon.valence("weather"), None);
        assert_eq!(lexicon.valence("traffic"), None);
        assert_eq!(lexicon.valence("cloudy"), None);
    }

    #[test]
    fn add_clamps_intensity() {
        let mut lexicon = SentimentLexicon::new();
        lexicon.add_positive("stellar", 5.0);
        lexicon.add_negative("grim", 5.0);
        assert_eq!(lexicon.valence("stellar"), Some(1.0));
        assert_eq!(lexicon.valence("grim"), Some(-1.0));
    }

    #[test]
    fn tokenize_splits_on_punctuation() {
        let tokens = tokenize("I love it! Don't you?");
        assert_eq!(tokens, vec!["I", "love", "it", "Don", "t", "you"]);
    }

    #[test]
    fn negation_includes_contraction_stems() {
        assert!(is_negation("not"));
        assert!(is_negation("Don"));
        assert!(is_negation("never"));
        assert!(!is_negation("note"));
    }

    #[test]
    fn boosters_amplify_and_dampeners_attenuate() {
        assert!(intensity_scalar("absolutely").unwrap() > 1.0);
        assert!(intensity_scalar("slightly").unwrap() < 1.0);
        assert_eq!(intensity_scalar("product"), None);
    }
}
