use {
    std::collections::HashSet,
    anyhow::{anyhow, Result},
    crate::config::LexiconConfig,
};

const DEFAULT_POSITIVE: &[&str] = &["good", "great", "excellent", "happy", "love", "best", "awesome", "perfect", "amazing"];
const DEFAULT_NEGATIVE: &[&str] = &["bad", "poor", "terrible", "worst", "hate", "disappointing", "awful", "broken"];

/// Keyword sets used for scoring. Built once at startup and shared read-only
/// across all workers.
#[derive(Debug)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl Lexicon {
    pub fn new(positive: Vec<String>, negative: Vec<String>) -> Result<Self> {
        let positive: HashSet<String> = positive.into_iter().collect();
        let negative: HashSet<String> = negative.into_iter().collect();

        if let Some(word) = positive.intersection(&negative).next() {
            return Err(anyhow!("lexicon word \"{}\" is both positive and negative", word));
        }

        Ok(Self { positive, negative })
    }

    pub fn from_config(config: &LexiconConfig) -> Result<Self> {
        let positive = config.positive.as_ref().cloned()
            .unwrap_or_else(|| DEFAULT_POSITIVE.iter().map(|v| v.to_string()).collect());
        let negative = config.negative.as_ref().cloned()
            .unwrap_or_else(|| DEFAULT_NEGATIVE.iter().map(|v| v.to_string()).collect());

        Self::new(positive, negative)
    }

    /// +1 for a positive keyword, -1 for a negative one, 0 otherwise.
    pub fn weight(&self, token: &str) -> i32 {
        if self.positive.contains(token) {
            1
        } else if self.negative.contains(token) {
            -1
        } else {
            0
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::from_config(&LexiconConfig::default())
            .expect("builtin keyword lists are disjoint")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_weights() {
        let lexicon = Lexicon::default();
        assert_eq!(lexicon.weight("great"), 1);
        assert_eq!(lexicon.weight("terrible"), -1);
        assert_eq!(lexicon.weight("keyboard"), 0);
    }

    #[test]
    fn config_overrides_replace_builtin_sets() {
        let config = LexiconConfig {
            positive: Some(vec!["nice".to_owned()]),
            negative: None,
        };
        let lexicon = Lexicon::from_config(&config).unwrap();
        assert_eq!(lexicon.weight("nice"), 1);
        assert_eq!(lexicon.weight("great"), 0);
        assert_eq!(lexicon.weight("bad"), -1);
    }

    #[test]
    fn rejects_word_in_both_sets() {
        let result = Lexicon::new(vec!["fine".to_owned()], vec!["fine".to_owned()]);
        assert!(result.is_err());
    }
}
