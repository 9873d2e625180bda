// src/state/mod.rs
use crate::analysis::{self, AnalysisMethod, AnalysisOutcome, AnalysisView, SampleKind};
use crate::engine::{LexiconPolarity, LexiconValence};

// Core application state
#[derive(Debug)]
pub struct AppState {
    // Analysis input
    pub input_text: String,
    pub method: AnalysisMethod,

    // Result of the most recent analyze action
    pub last_analysis: Option<AnalysisView>,

    // Sample shortcut slot: persists for the session, only ever overwritten
    pub sample: Option<SampleKind>,

    // Minimal UI state
    pub warning_message: Option<String>,
    pub error_message: Option<String>,

    // Engines are built once at startup
    pub polarity_engine: LexiconPolarity,
    pub valence_engine: LexiconValence,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            input_text: String::new(),
            method: AnalysisMethod::Both,
            last_analysis: None,
            sample: None,
            warning_message: None,
            error_message: None,
            polarity_engine: LexiconPolarity::new(),
            valence_engine: LexiconValence::new(),
        }
    }

    /// Run the analyze action against the current input and method.
    pub fn run_analysis(&mut self) {
        self.warning_message = None;
        match analysis::run_analysis(
            &self.input_text,
            self.method,
            &self.polarity_engine,
            &self.valence_engine,
        ) {
            Ok(AnalysisOutcome::EmptyInput) => {
                self.last_analysis = None;
                self.warning_message = Some("Please enter some text to analyze!".to_string());
            }
            Ok(AnalysisOutcome::Report(view)) => {
                self.last_analysis = Some(view);
            }
            Err(e) => {
                self.last_analysis = None;
                self.error_message = Some(format!("Analysis failed: {}", e));
            }
        }
    }

    /// Overwrite the sample slot. Does not trigger analysis.
    pub fn select_sample(&mut self, kind: SampleKind) {
        self.sample = Some(kind);
    }

    /// The currently selected sample text, if any has ever been chosen.
    pub fn sample_text(&self) -> Option<&'static str> {
        self.sample.map(|kind| kind.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_sample_selected_initially() {
        let state = AppState::new();
        assert_eq!(state.sample_text(), None);
    }

    #[test]
    fn selecting_a_sample_overwrites_the_slot() {
        let mut state = AppState::new();
        state.select_sample(SampleKind::Positive);
        assert_eq!(state.sample_text(), Some(SampleKind::Positive.text()));

        state.select_sample(SampleKind::Negative);
        assert_eq!(state.sample_text(), Some(SampleKind::Negative.text()));
    }

    #[test]
    fn selecting_a_sample_does_not_run_analysis() {
        let mut state = AppState::new();
        state.select_sample(SampleKind::Positive);
        assert!(state.last_analysis.is_none());
    }

    #[test]
    fn empty_input_sets_a_warning_and_no_result() {
        let mut state = AppState::new();
        state.input_text = "   ".to_string();
        state.run_analysis();
        assert!(state.warning_message.is_some());
        assert!(state.last_analysis.is_none());
        assert!(state.error_message.is_none());
    }

    #[test]
    fn analysis_clears_a_previous_warning() {
        let mut state = AppState::new();
        state.run_analysis();
        assert!(state.warning_message.is_some());

        state.input_text = "This is wonderful".to_string();
        state.run_analysis();
        assert!(state.warning_message.is_none());
        assert_eq!(state.last_analysis.as_ref().map(|v| v.report_count()), Some(2));
    }

    #[test]
    fn method_selection_controls_report_count() {
        let mut state = AppState::new();
        state.input_text = "This is wonderful".to_string();
        state.method = AnalysisMethod::Polarity;
        state.run_analysis();
        let view = state.last_analysis.as_ref().unwrap();
        assert!(view.polarity.is_some());
        assert!(view.valence.is_none());
    }
}
