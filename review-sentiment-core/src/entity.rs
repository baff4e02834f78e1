use {
    typed_builder::TypedBuilder,
    serde::{Serialize, Deserialize},
    crate::sentiment::Sentiment,
};

fn default_rating() -> f64 {
    // neutral band, matches the ground truth mapper
    3.0
}

/// One review as it appears in the input file, one JSON object per line.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RawReview {
    #[serde(rename = "reviewText", default)]
    pub text: String,
    #[serde(rename = "overall", default = "default_rating")]
    pub rating: f64,
}

#[derive(TypedBuilder, Serialize, Debug, Clone, PartialEq)]
pub struct SentimentResultEntity {
    review_text: String,
    score: i32,
    predicted_sentiment: Sentiment,
    actual_sentiment: Sentiment,
    timestamp: String,
}

impl SentimentResultEntity {
    pub fn review_text(&self) -> &str {
        &self.review_text
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn predicted_sentiment(&self) -> Sentiment {
        self.predicted_sentiment
    }

    pub fn actual_sentiment(&self) -> Sentiment {
        self.actual_sentiment
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}
