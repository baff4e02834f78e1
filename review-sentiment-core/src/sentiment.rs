use {
    serde::{Serialize, Deserialize},
    chrono::Local,
    crate::{
        entity::{RawReview, SentimentResultEntity},
        lexicon::Lexicon,
    },
};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }

    pub fn from_score(score: i32) -> Self {
        if score > 0 {
            Sentiment::Positive
        } else if score < 0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Ground truth from the star rating. Total over any input, values outside
    /// [1, 5] fall through the same thresholds.
    pub fn from_rating(rating: f64) -> Self {
        if rating >= 4.0 {
            Sentiment::Positive
        } else if rating <= 2.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

/// Lowercases the text, strips everything outside a-z and whitespace, and
/// splits on whitespace runs.
pub fn normalize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .map(|v| v.to_owned())
        .collect()
}

pub fn score_tokens(tokens: &[String], lexicon: &Lexicon) -> i32 {
    tokens.iter().map(|token| lexicon.weight(token)).sum()
}

/// Scores one review against the lexicon. Returns None for reviews with no
/// usable text, which are dropped rather than stored.
pub fn process_review(review: &RawReview, lexicon: &Lexicon) -> Option<SentimentResultEntity> {
    if review.text.trim().is_empty() {
        return None;
    }

    let tokens = normalize(&review.text);
    let score = score_tokens(&tokens, lexicon);

    Some(SentimentResultEntity::builder()
        .review_text(review.text.clone())
        .score(score)
        .predicted_sentiment(Sentiment::from_score(score))
        .actual_sentiment(Sentiment::from_rating(review.rating))
        .timestamp(Local::now().format(TIMESTAMP_FORMAT).to_string())
        .build())
}
