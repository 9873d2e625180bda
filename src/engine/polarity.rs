// src/engine/polarity.rs
//! Polarity/subjectivity scoring engine.
//!
//! Averages the valence of sentiment-bearing words, with negation flipping
//! and intensifier scaling, and estimates subjectivity from the proportion
//! and strength of opinionated cues in the text.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::lexicon::{self, SentimentLexicon};
use super::PolarityEngine;

/// Scores produced by the polarity engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PolarityScores {
    /// Polarity in `[-1, 1]`, negative to positive.
    pub polarity: f64,
    /// Subjectivity in `[0, 1]`, objective to subjective.
    pub subjectivity: f64,
}

/// Lexicon-backed polarity scorer.
#[derive(Debug, Clone)]
pub struct LexiconPolarity {
    lexicon: SentimentLexicon,
}

impl LexiconPolarity {
    pub fn new() -> Self {
        Self {
            lexicon: SentimentLexicon::default(),
        }
    }

    pub fn with_lexicon(lexicon: SentimentLexicon) -> Self {
        Self { lexicon }
    }

    /// Subjectivity weight for a sentiment word of the given valence.
    /// Stronger words read as more opinionated.
    fn word_subjectivity(valence: f64) -> f64 {
        let magnitude = valence.abs();
        if magnitude >= 0.75 {
            0.9
        } else if magnitude >= 0.45 {
            0.65
        } else {
            0.4
        }
    }
}

impl Default for LexiconPolarity {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityEngine for LexiconPolarity {
    fn score(&self, text: &str) -> Result<PolarityScores> {
        let tokens = lexicon::tokenize(text);

        let mut valence_sum = 0.0;
        let mut sentiment_count = 0usize;
        let mut subjectivity_sum = 0.0;
        let mut cue_count = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            // Intensifiers are subjective cues even when the word they
            // modify carries no valence.
            if lexicon::intensity_scalar(token).is_some() {
                subjectivity_sum += 0.8;
                cue_count += 1;
            }

            let Some(valence) = self.lexicon.valence(token) else {
                continue;
            };

            let mut adjusted = valence;
            if let Some(prev) = i.checked_sub(1).and_then(|p| tokens.get(p)) {
                if let Some(scalar) = lexicon::intensity_scalar(prev) {
                    adjusted *= scalar;
                }
            }
            // Negation within the two preceding tokens flips the sign.
            let negated = tokens[i.saturating_sub(2)..i]
                .iter()
                .any(|w| lexicon::is_negation(w));
            if negated {
                adjusted = -adjusted;
            }

            valence_sum += adjusted.clamp(-1.0, 1.0);
            sentiment_count += 1;
            subjectivity_sum += Self::word_subjectivity(valence);
            cue_count += 1;
        }

        let polarity = if sentiment_count > 0 {
            (valence_sum / sentiment_count as f64).clamp(-1.0, 1.0)
        } else {
            0.0
        };
        let subjectivity = if cue_count > 0 {
            (subjectivity_sum / cue_count as f64).clamp(0.0, 1.0)
        } else {
            0.0
        };

        Ok(PolarityScores {
            polarity,
            subjectivity,
        })
    }
}
