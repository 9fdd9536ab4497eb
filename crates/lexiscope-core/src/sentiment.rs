use lexiscope_types::SentimentScore;

use crate::normalizer::NormalizedText;

/// Polarity and subjectivity model for the canonical language
pub trait SentimentModel: Send + Sync {
    fn score(&self, text: &str) -> SentimentScore;
}

/// Score the working text, clamped into range
pub fn score_sentiment(model: &dyn SentimentModel, text: &NormalizedText) -> SentimentScore {
    let raw = model.score(text.working_text());

    SentimentScore {
        polarity: clamp_or_zero(raw.polarity, -1.0, 1.0),
        subjectivity: clamp_or_zero(raw.subjectivity, 0.0, 1.0),
    }
}

fn clamp_or_zero(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(min, max) }
}
