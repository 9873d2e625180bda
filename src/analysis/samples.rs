// src/analysis/samples.rs
use serde::{Deserialize, Serialize};

/// One of the three canned example inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleKind {
    Positive,
    Negative,
    Neutral,
}

impl SampleKind {
    pub const ALL: [SampleKind; 3] = [
        SampleKind::Positive,
        SampleKind::Negative,
        SampleKind::Neutral,
    ];

    /// Button caption for this sample.
    pub fn label(&self) -> &'static str {
        match self {
            SampleKind::Positive => "😊 Positive Example",
            SampleKind::Negative => "😢 Negative Example",
            SampleKind::Neutral => "😐 Neutral Example",
        }
    }

    /// The fixed sample text, verbatim.
    pub fn text(&self) -> &'static str {
        match self {
            SampleKind::Positive => {
                "I absolutely love this amazing product! It exceeds all my expectations \
                 and brings me so much joy. Highly recommended!"
            }
            SampleKind::Negative => {
                "This is terrible and frustrating. I hate how complicated and confusing \
                 everything is. Completely disappointed."
            }
            SampleKind::Neutral => {
                "The weather today is partly cloudy with a temperature of 22 degrees. \
                 Traffic conditions are normal on most routes."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_texts_are_verbatim() {
        assert_eq!(
            SampleKind::Positive.text(),
            "I absolutely love this amazing product! It exceeds all my expectations and brings me so much joy. Highly recommended!"
        );
        assert_eq!(
            SampleKind::Negative.text(),
            "This is terrible and frustrating. I hate how complicated and confusing everything is. Completely disappointed."
        );
        assert_eq!(
            SampleKind::Neutral.text(),
            "The weather today is partly cloudy with a temperature of 22 degrees. Traffic conditions are normal on most routes."
        );
    }
}
