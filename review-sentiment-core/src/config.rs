use {
    std::fs::read_to_string,
    tracing::warn,
    serde::Deserialize,
};

#[derive(Deserialize, Debug)]
pub struct Config {
    pub pipeline: Option<PipelineConfig>,
    pub database: Option<DatabaseConfig>,
    pub lexicon: Option<LexiconConfig>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct PipelineConfig {
    workers: Option<usize>,
    batch_size: Option<usize>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct DatabaseConfig {
    path: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct LexiconConfig {
    pub positive: Option<Vec<String>>,
    pub negative: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pipeline: None,
            database: None,
            lexicon: None,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            workers: None,
            batch_size: None,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: None,
        }
    }
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            positive: None,
            negative: None,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        read_to_string("./config.toml")
            .or_else(|_| read_to_string("/config/config.toml"))
            .map_err(|err| err.to_string())
            .and_then(|v| toml::from_str(&v).map_err(|err| err.to_string()))
            .unwrap_or_else(|err| {
                warn!("failed to read config: {}", err);
                Config::default()
            })
    }

    pub fn pipeline(&self) -> PipelineConfig {
        self.pipeline.as_ref().cloned().unwrap_or_default()
    }

    pub fn database(&self) -> DatabaseConfig {
        self.database.as_ref().cloned().unwrap_or_default()
    }

    pub fn lexicon(&self) -> LexiconConfig {
        self.lexicon.as_ref().cloned().unwrap_or_default()
    }
}

impl PipelineConfig {
    pub fn workers(&self) -> Option<usize> {
        self.workers
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size.unwrap_or(500)
    }
}

impl DatabaseConfig {
    pub fn with_path(path: String) -> Self {
        Self {
            path: Some(path),
        }
    }

    pub fn path(&self) -> String {
        self.path.as_ref().cloned().unwrap_or("amazon_sentiment.db".to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_sections_missing() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.pipeline().workers(), None);
        assert_eq!(config.pipeline().batch_size(), 500);
        assert_eq!(config.database().path(), "amazon_sentiment.db");
        assert!(config.lexicon().positive.is_none());
    }

    #[test]
    fn reads_pipeline_section() {
        let config: Config = toml::from_str("[pipeline]\nworkers = 2\nbatch_size = 10\n").unwrap();
        assert_eq!(config.pipeline().workers(), Some(2));
        assert_eq!(config.pipeline().batch_size(), 10);
    }

    #[test]
    fn reads_lexicon_overrides() {
        let config: Config = toml::from_str("[lexicon]\npositive = [\"nice\"]\n").unwrap();
        assert_eq!(config.lexicon().positive, Some(vec!["nice".to_owned()]));
        assert!(config.lexicon().negative.is_none());
    }
}
