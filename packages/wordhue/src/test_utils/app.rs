use std::{path::PathBuf, sync::Arc};

use utils::config::{ConfigBuilder, ConfigExt};

use crate::{args::CliArgs, config::Config};

#[derive(Clone)]
pub struct TestApp {
    pub config: Arc<Config>,
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TestApp {
    pub fn zeroed_cli_args() -> CliArgs {
        CliArgs {
            home: Some(tempfile::tempdir().unwrap().path().to_path_buf()),
            // while this technically isn't "zeroed", this purposefully points at a non-existing file
            // so that we don't load a real .env in tests
            dotenv: Some(
                PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                    .join("tests")
                    .join(Config::DIRNAME)
                    .join("non-existant-file"),
            ),
            port: None,
            log_level: Vec::new(),
            host: None,
            words_dir: None,
            cors_allowed_origins: Vec::new(),
            default_palette_points: None,
            max_palette_points: None,
            seed: None,
            jaeger: None,
            prometheus: None,
        }
    }

    pub fn new() -> Self {
        Self::new_with_args(Self::zeroed_cli_args())
    }

    pub fn new_with_args(cli_args: CliArgs) -> Self {
        let config = Arc::new(ConfigBuilder::new(cli_args).build().unwrap());

        utils::init_tracing_tests();

        Self { config }
    }
}
