use std::sync::Arc;

use utils::telemetry::HttpMetrics;

use crate::{config::Config, random::RandomSource, words::WordSource};

#[derive(Clone)]
pub struct HttpState {
    pub config: Config,
    pub words: Arc<dyn WordSource>,
    pub rng: Arc<dyn RandomSource>,
    pub metrics: HttpMetrics,
}

impl HttpState {
    /// Word lists and randomness as described by the config
    pub fn new(config: Config, metrics: HttpMetrics) -> anyhow::Result<Self> {
        let words = config.word_source()?;
        let rng = config.random_source();

        tracing::info!("Serving {} word lists", words.keys().len());

        Ok(Self::new_with_sources(config, words, rng, metrics))
    }

    pub fn new_with_sources(
        config: Config,
        words: Arc<dyn WordSource>,
        rng: Arc<dyn RandomSource>,
        metrics: HttpMetrics,
    ) -> Self {
        Self {
            config,
            words,
            rng,
            metrics,
        }
    }
}
