// src/analysis/mod.rs
use anyhow::Result;
use chrono::{DateTime, Local};
use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::engine::{PolarityEngine, PolarityScores, ValenceEngine, ValenceScores};

pub mod samples;

pub use samples::SampleKind;

/// Which engine(s) an analysis run should invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisMethod {
    Polarity,
    Valence,
    Both,
}

impl AnalysisMethod {
    pub const ALL: [AnalysisMethod; 3] = [
        AnalysisMethod::Polarity,
        AnalysisMethod::Valence,
        AnalysisMethod::Both,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AnalysisMethod::Polarity => "Polarity",
            AnalysisMethod::Valence => "Valence",
            AnalysisMethod::Both => "Both",
        }
    }

    fn includes_polarity(&self) -> bool {
        matches!(self, AnalysisMethod::Polarity | AnalysisMethod::Both)
    }

    fn includes_valence(&self) -> bool {
        matches!(self, AnalysisMethod::Valence | AnalysisMethod::Both)
    }
}

/// Three-valued sentiment classification with a display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive 😊",
            Sentiment::Negative => "Negative 😢",
            Sentiment::Neutral => "Neutral 😐",
        }
    }

    pub fn color(&self) -> egui::Color32 {
        match self {
            Sentiment::Positive => egui::Color32::from_rgb(100, 200, 100),
            Sentiment::Negative => egui::Color32::from_rgb(200, 100, 100),
            Sentiment::Neutral => egui::Color32::GRAY,
        }
    }
}

/// Classify a polarity score.
///
/// The band is asymmetric: exactly 0.1 is Neutral while exactly -0.1 is
/// Negative.
pub fn classify_polarity(polarity: f64) -> Sentiment {
    if polarity > 0.1 {
        Sentiment::Positive
    } else if polarity <= -0.1 {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Classify a compound score.
///
/// Same asymmetry as [`classify_polarity`]: exactly 0.05 is Neutral while
/// exactly -0.05 is Negative.
pub fn classify_compound(compound: f64) -> Sentiment {
    if compound > 0.05 {
        Sentiment::Positive
    } else if compound <= -0.05 {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Classified output of the polarity engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PolarityReport {
    pub sentiment: Sentiment,
    pub scores: PolarityScores,
}

/// Classified output of the valence engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ValenceReport {
    pub sentiment: Sentiment,
    pub scores: ValenceScores,
}

/// Everything the result panels need to render one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisView {
    pub polarity: Option<PolarityReport>,
    pub valence: Option<ValenceReport>,
    pub timestamp: DateTime<Local>,
}

impl AnalysisView {
    pub fn report_count(&self) -> usize {
        self.polarity.is_some() as usize + self.valence.is_some() as usize
    }
}

/// Outcome of a single analyze action.
#[derive(Debug, Clone)]
pub enum AnalysisOutcome {
    /// The input was empty or whitespace-only; no engine was invoked.
    EmptyInput,
    Report(AnalysisView),
}

/// Run the selected engine(s) against the input text.
///
/// Empty or whitespace-only input short-circuits before any engine call.
/// An engine error aborts the whole run: under `Both`, a failure in the
/// polarity engine discards any valence result rather than rendering a
/// partial view.
pub fn run_analysis(
    text: &str,
    method: AnalysisMethod,
    polarity_engine: &dyn PolarityEngine,
    valence_engine: &dyn ValenceEngine,
) -> Result<AnalysisOutcome> {
    if text.trim().is_empty() {
        return Ok(AnalysisOutcome::EmptyInput);
    }

    let polarity = if method.includes_polarity() {
        let scores = polarity_engine.score(text)?;
        Some(PolarityReport {
            sentiment: classify_polarity(scores.polarity),
            scores,
        })
    } else {
        None
    };

    let valence = if method.includes_valence() {
        let scores = valence_engine.score(text)?;
        Some(ValenceReport {
            sentiment: classify_compound(scores.compound),
            scores,
        })
    } else {
        None
    };

    Ok(AnalysisOutcome::Report(AnalysisView {
        polarity,
        valence,
        timestamp: Local::now(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{LexiconPolarity, LexiconValence};
    use anyhow::anyhow;
    use std::cell::Cell;

    struct CountingPolarity {
        calls: Cell<usize>,
        result: PolarityScores,
    }

    impl CountingPolarity {
        fn returning(polarity: f64, subjectivity: f64) -> Self {
            Self {
                calls: Cell::new(0),
                result: PolarityScores {
                    polarity,
                    subjectivity,
                },
            }
        }
    }

    impl PolarityEngine for CountingPolarity {
        fn score(&self, _text: &str) -> Result<PolarityScores> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.result)
        }
    }

    struct CountingValence {
        calls: Cell<usize>,
        result: ValenceScores,
    }

    impl CountingValence {
        fn returning(compound: f64) -> Self {
            Self {
                calls: Cell::new(0),
                result: ValenceScores {
                    compound,
                    pos: 0.5,
                    neg: 0.2,
                    neu: 0.3,
                },
            }
        }
    }

    impl ValenceEngine for CountingValence {
        fn score(&self, _text: &str) -> Result<ValenceScores> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.result)
        }
    }

    struct FailingPolarity;

    impl PolarityEngine for FailingPolarity {
        fn score(&self, _text: &str) -> Result<PolarityScores> {
            Err(anyhow!("polarity engine exploded"))
        }
    }

    #[test]
    fn both_invokes_each_engine_exactly_once() {
        let a = CountingPolarity::returning(0.5, 0.6);
        let b = CountingValence::returning(0.4);
        let outcome = run_analysis("some text", AnalysisMethod::Both, &a, &b).unwrap();
        assert_eq!(a.calls.get(), 1);
        assert_eq!(b.calls.get(), 1);
        match outcome {
            AnalysisOutcome::Report(view) => assert_eq!(view.report_count(), 2),
            AnalysisOutcome::EmptyInput => panic!("expected a report"),
        }
    }

    #[test]
    fn single_method_skips_the_other_engine() {
        let a = CountingPolarity::returning(0.5, 0.6);
        let b = CountingValence::returning(0.4);
        run_analysis("some text", AnalysisMethod::Polarity, &a, &b).unwrap();
        assert_eq!(a.calls.get(), 1);
        assert_eq!(b.calls.get(), 0);

        run_analysis("some text", AnalysisMethod::Valence, &a, &b).unwrap();
        assert_eq!(a.calls.get(), 1);
        assert_eq!(b.calls.get(), 1);
    }

    #[test]
    fn empty_input_never_reaches_an_engine() {
        let a = CountingPolarity::returning(0.9, 0.9);
        let b = CountingValence::returning(0.9);
        for text in ["", "   ", "\t\n  \n"] {
            for method in AnalysisMethod::ALL {
                let outcome = run_analysis(text, method, &a, &b).unwrap();
                assert!(matches!(outcome, AnalysisOutcome::EmptyInput));
            }
        }
        assert_eq!(a.calls.get(), 0);
        assert_eq!(b.calls.get(), 0);
    }

    #[test]
    fn polarity_engine_failure_aborts_the_whole_run() {
        // Under Both the valence result is never rendered when the polarity
        // engine fails: all-or-nothing.
        let b = CountingValence::returning(0.9);
        let result = run_analysis("some text", AnalysisMethod::Both, &FailingPolarity, &b);
        assert!(result.is_err());
        assert_eq!(b.calls.get(), 0);
    }

    #[test]
    fn polarity_boundaries_are_asymmetric() {
        assert_eq!(classify_polarity(0.10), Sentiment::Neutral);
        assert_eq!(classify_polarity(0.1000001), Sentiment::Positive);
        assert_eq!(classify_polarity(-0.10), Sentiment::Negative);
        assert_eq!(classify_polarity(-0.0999999), Sentiment::Neutral);
    }

    #[test]
    fn compound_boundaries_are_asymmetric() {
        assert_eq!(classify_compound(0.05), Sentiment::Neutral);
        assert_eq!(classify_compound(0.0500001), Sentiment::Positive);
        assert_eq!(classify_compound(-0.05), Sentiment::Negative);
        assert_eq!(classify_compound(-0.0499999), Sentiment::Neutral);
    }

    fn labels_for(text: &str) -> (Sentiment, Sentiment) {
        let a = LexiconPolarity::new();
        let b = LexiconValence::new();
        match run_analysis(text, AnalysisMethod::Both, &a, &b).unwrap() {
            AnalysisOutcome::Report(view) => (
                view.polarity.unwrap().sentiment,
                view.valence.unwrap().sentiment,
            ),
            AnalysisOutcome::EmptyInput => panic!("expected a report"),
        }
    }

    #[test]
    fn positive_sample_classifies_positive_end_to_end() {
        let (a, b) = labels_for(SampleKind::Positive.text());
        assert_eq!(a, Sentiment::Positive);
        assert_eq!(b, Sentiment::Positive);
    }

    #[test]
    fn negative_sample_classifies_negative_end_to_end() {
        let (a, b) = labels_for(SampleKind::Negative.text());
        assert_eq!(a, Sentiment::Negative);
        assert_eq!(b, Sentiment::Negative);
    }

    #[test]
    fn neutral_sample_classifies_neutral_end_to_end() {
        let (a, b) = labels_for(SampleKind::Neutral.text());
        assert_eq!(a, Sentiment::Neutral);
        assert_eq!(b, Sentiment::Neutral);
    }
}
