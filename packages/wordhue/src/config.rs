use std::{path::PathBuf, sync::Arc};

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use utils::config::ConfigExt;

use crate::{
    random::{RandomSource, SeededRandom, ThreadRandom},
    words::{StaticWordSource, WordSource},
};

/// The fully parsed and validated config struct we use in the application
/// this is built up from the ConfigBuilder which can load from multiple sources (in order of preference):
///
/// 1. cli args
/// 2. environment variables
/// 3. config file
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// The port to bind the server to.
    /// Default is `3000`
    pub port: u32,
    /// The log-level to use, in the format of [tracing directives](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html#directives).
    /// Default is `["info"]`
    pub log_level: Vec<String>,
    /// The host to bind the server to
    /// Default is `localhost`
    pub host: String,
    /// Directory of `<list>.json` word lists, any list not found there uses the built-in one
    /// Default is none, i.e. only the built-in lists
    pub words_dir: Option<PathBuf>,
    /// The allowed cors origins
    /// Default is empty
    pub cors_allowed_origins: Vec<String>,
    /// Palette size when a request doesn't specify `points`
    /// Default is `5`
    pub default_palette_points: usize,
    /// Upper bound on `points` for a single palette request
    /// Default is `256`
    pub max_palette_points: usize,
    /// Seed for the random source, unset means a fresh thread-local generator
    pub seed: Option<u64>,
    /// OTLP collector for traces
    pub jaeger: Option<String>,
    /// OTLP collector for metrics
    pub prometheus: Option<String>,
}

/// Default values for the config struct
/// these are only used to fill in holes after all the parsing and loading is done
impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            log_level: vec!["info".to_string()],
            host: "localhost".to_string(),
            words_dir: None,
            cors_allowed_origins: Vec::new(),
            default_palette_points: 5,
            max_palette_points: 256,
            seed: None,
            jaeger: None,
            prometheus: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.max_palette_points == 0 {
            bail!("max_palette_points must be at least 1");
        }
        if self.default_palette_points == 0 || self.default_palette_points > self.max_palette_points
        {
            bail!(
                "default_palette_points must be between 1 and max_palette_points ({}), got {}",
                self.max_palette_points,
                self.default_palette_points
            );
        }
        Ok(())
    }

    pub fn word_source(&self) -> Result<Arc<dyn WordSource>> {
        let source = match &self.words_dir {
            Some(dir) => StaticWordSource::from_dir(dir)?,
            None => StaticWordSource::embedded()?,
        };

        Ok(Arc::new(source))
    }

    pub fn random_source(&self) -> Arc<dyn RandomSource> {
        match self.seed {
            Some(seed) => {
                tracing::info!("Using seeded random source ({})", seed);
                Arc::new(SeededRandom::new(seed))
            }
            None => Arc::new(ThreadRandom),
        }
    }
}

impl ConfigExt for Config {
    const DIRNAME: &'static str = "wordhue";
    const FILENAME: &'static str = "wordhue.toml";

    fn with_paths(&mut self, mut f: impl FnMut(&mut PathBuf)) {
        if let Some(words_dir) = self.words_dir.as_mut() {
            f(words_dir);
        }
    }

    fn log_levels(&self) -> impl Iterator<Item = &str> {
        self.log_level.iter().map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn default_is_valid() {
        Config::default().validate().unwrap();
    }

    #[test]
    fn palette_bounds_are_checked() {
        let config = Config {
            default_palette_points: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            default_palette_points: 10,
            max_palette_points: 4,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn seeded_source_is_reproducible() {
        let config = Config {
            seed: Some(7),
            ..Config::default()
        };

        let (a, b) = (config.random_source(), config.random_source());
        assert_eq!(a.next_f64(), b.next_f64());
    }
}
