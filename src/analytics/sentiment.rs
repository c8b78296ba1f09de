use super::types::{Measured, Sentiment, SentimentTally};

use std::time::Instant;

pub const POSITIVE_KEYWORDS: [&str; 2] = ["good", "great"];
pub const NEGATIVE_KEYWORDS: [&str; 2] = ["bad", "worst"];

/// Keyword match on the lower-cased text. Positive keywords are checked first,
/// so a text carrying both kinds counts as positive.
pub fn classify(text: &str) -> Option<Sentiment> {
    let lowered = text.to_lowercase();

    if POSITIVE_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        Some(Sentiment::Positive)
    } else if NEGATIVE_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        Some(Sentiment::Negative)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SentimentClassifier;

impl SentimentClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn run<S: AsRef<str>>(&self, texts: &[S]) -> Measured<SentimentTally> {
        if texts.is_empty() {
            return Measured::empty();
        }

        let begin = Instant::now();
        let mut mood = SentimentTally::default();
        for line in texts {
            if let Some(sentiment) = classify(line.as_ref()) {
                mood.record(sentiment);
            }
        }
        let elapsed = begin.elapsed();

        Measured::timed(mood, texts.len(), elapsed)
    }
}
