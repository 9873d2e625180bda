// src/engine/valence.rs
//! Valence-aware scoring engine.
//!
//! Scores each token's valence with negation, intensifier, ALL-CAPS, and
//! exclamation rules, then folds the sum into a normalized compound score
//! alongside pos/neg/neu proportions.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::lexicon::{self, SentimentLexicon};
use super::ValenceEngine;

/// Normalization constant for the compound score: `s / sqrt(s^2 + ALPHA)`.
const ALPHA: f64 = 15.0;

/// Scaling applied to a valence flipped by negation.
const NEGATION_SCALAR: f64 = -0.74;

/// Additional intensity for an ALL-CAPS sentiment word in mixed-case text.
const CAPS_SCALAR: f64 = 1.25;

/// Per-exclamation-mark emphasis added to the raw sum, capped at four marks.
const EXCLAMATION_BOOST: f64 = 0.292;

/// Scores produced by the valence engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ValenceScores {
    /// Aggregated valence intensity in `[-1, 1]`.
    pub compound: f64,
    /// Proportion of positive sentiment in `[0, 1]`.
    pub pos: f64,
    /// Proportion of negative sentiment in `[0, 1]`.
    pub neg: f64,
    /// Proportion of neutral content in `[0, 1]`.
    pub neu: f64,
}

/// Lexicon-backed valence scorer.
#[derive(Debug, Clone)]
pub struct LexiconValence {
    lexicon: SentimentLexicon,
}

impl LexiconValence {
    pub fn new() -> Self {
        Self {
            lexicon: SentimentLexicon::default(),
        }
    }

    pub fn with_lexicon(lexicon: SentimentLexicon) -> Self {
        Self { lexicon }
    }

    fn is_all_caps(word: &str) -> bool {
        word.len() > 1 && word.chars().all(|c| c.is_uppercase())
    }

    /// Per-token adjusted valences in text order. Tokens without sentiment
    /// yield 0.0 unless they are intensifiers, which modify a neighbor
    /// instead of counting as content.
    fn token_valences(&self, tokens: &[&str], mixed_case: bool) -> Vec<f64> {
        let mut valences = Vec::with_capacity(tokens.len());

        for (i, token) in tokens.iter().enumerate() {
            if lexicon::intensity_scalar(token).is_some() && !self.lexicon.contains(token) {
                continue;
            }

            let Some(valence) = self.lexicon.valence(token) else {
                valences.push(0.0);
                continue;
            };

            let mut adjusted = valence;
            if mixed_case && Self::is_all_caps(token) {
                adjusted *= CAPS_SCALAR;
            }
            // Intensifiers in the two preceding positions, the nearer one
            // weighing more.
            for (distance, weight) in [(1usize, 1.0), (2usize, 0.95)] {
                let Some(prev) = i.checked_sub(distance).and_then(|p| tokens.get(p)) else {
                    continue;
                };
                if let Some(scalar) = lexicon::intensity_scalar(prev) {
                    adjusted *= 1.0 + (scalar - 1.0) * weight;
                }
            }
            let negated = tokens[i.saturating_sub(2)..i]
                .iter()
                .any(|w| lexicon::is_negation(w));
            if negated {
                adjusted *= NEGATION_SCALAR;
            }

            valences.push(adjusted);
        }

        valences
    }
}

impl Default for LexiconValence {
    fn default() -> Self {
        Self::new()
    }
}

impl ValenceEngine for LexiconValence {
    fn score(&self, text: &str) -> Result<ValenceScores> {
        let tokens = lexicon::tokenize(text);
        if tokens.is_empty() {
            // Input with no alphabetic tokens (digits, punctuation) is all
            // neutral content; pos+neg+neu must still sum to one.
            return Ok(ValenceScores {
                compound: 0.0,
                pos: 0.0,
                neg: 0.0,
                neu: 1.0,
            });
        }

        // CAPS emphasis only applies when the text mixes case; an all-caps
        // message carries no per-word emphasis signal.
        let mixed_case = !tokens.iter().all(|w| Self::is_all_caps(w));
        let valences = self.token_valences(&tokens, mixed_case);

        let exclamations = text.chars().filter(|&c| c == '!').count().min(4);
        let punct_emphasis = exclamations as f64 * EXCLAMATION_BOOST;

        let mut raw_sum: f64 = valences.iter().sum();
        if raw_sum > 0.0 {
            raw_sum += punct_emphasis;
        } else if raw_sum < 0.0 {
            raw_sum -= punct_emphasis;
        }
        let compound = (raw_sum / (raw_sum * raw_sum + ALPHA).sqrt()).clamp(-1.0, 1.0);

        // Each sentiment word contributes one unit of base weight on top of
        // its valence so the proportions reflect word counts as well as
        // intensity.
        let mut pos_sum = 0.0;
        let mut neg_sum = 0.0;
        let mut neutral_count = 0usize;
        for &v in &valences {
            if v > 0.0 {
                pos_sum += v + 1.0;
            } else if v < 0.0 {
                neg_sum += v.abs() + 1.0;
            } else {
                neutral_count += 1;
            }
        }
        if pos_sum > neg_sum {
            pos_sum += punct_emphasis;
        } else if neg_sum > pos_sum {
            neg_sum += punct_emphasis;
        }

        let total = pos_sum + neg_sum + neutral_count as f64;
        let (pos, neg, neu) = if total > 0.0 {
            (pos_sum / total, neg_sum / total, neutral_count as f64 / total)
        } else {
            (0.0, 0.0, 0.0)
        };

        Ok(ValenceScores {
            compound,
            pos,
            neg,
            neu,
        })
    }
}
