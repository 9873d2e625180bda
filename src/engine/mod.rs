// src/engine/mod.rs
//! The two sentiment-scoring engines and their shared lexicon.
//!
//! The orchestrator talks to the engines through the [`PolarityEngine`] and
//! [`ValenceEngine`] traits so tests can substitute instrumented scorers.

pub mod lexicon;
pub mod polarity;
pub mod valence;

use anyhow::Result;

pub use polarity::{LexiconPolarity, PolarityScores};
pub use valence::{LexiconValence, ValenceScores};

/// A scorer producing polarity and subjectivity for a text.
///
/// Scoring is synchronous and deterministic for identical input. A returned
/// error aborts the whole analysis pass.
pub trait PolarityEngine {
    fn score(&self, text: &str) -> Result<PolarityScores>;
}

/// A scorer producing compound intensity and pos/neg/neu proportions.
///
/// Same contract as [`PolarityEngine`]: synchronous, deterministic, and an
/// error aborts the whole analysis pass.
pub trait ValenceEngine {
    fn score(&self, text: &str) -> Result<ValenceScores>;
}
