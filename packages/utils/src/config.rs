use anyhow::{bail, Context, Result};
use figment::{providers::Format, Figment};
use serde::{de::DeserializeOwned, Serialize};
use std::{marker::PhantomData, path::PathBuf};

/// The builder we use to build a Config out of defaults, a TOML file, env vars and cli args
#[derive(Debug)]
pub struct ConfigBuilder<CONFIG, ARG> {
    pub cli_env_args: ARG,
    _config: PhantomData<CONFIG>,
}

pub trait CliEnvExt: Serialize + DeserializeOwned + Default + std::fmt::Debug {
    // e.g. "WORDHUE"
    const ENV_VAR_PREFIX: &'static str;

    // The section identifier in the TOML file, e.g. "wordhue"
    const TOML_IDENTIFIER: &'static str;

    // whether to print debug messages during config loading
    const PRINT_DEBUG_MSGS: bool = false;

    // an optional argument to specify the home directory
    // if not supplied, config will try a series of fallbacks
    fn home_dir(&self) -> Option<PathBuf>;

    // an optional path to a dotenv file
    // if not supplied, the current working directory's .env is tried
    fn dotenv_path(&self) -> Option<PathBuf>;

    fn merge_cli_env_args(&self) -> Result<Self> {
        let env_prefix = format!("{}_", Self::ENV_VAR_PREFIX);

        let merged = Figment::new()
            .merge(figment::providers::Env::prefixed(&env_prefix))
            .merge(figment::providers::Serialized::defaults(self))
            .extract()?;

        Ok(merged)
    }

    fn env_var(name: &str) -> Option<String> {
        std::env::var(format!("{}_{name}", Self::ENV_VAR_PREFIX)).ok()
    }
}

pub trait ConfigExt: Serialize + DeserializeOwned + Default + std::fmt::Debug {
    // e.g. "wordhue"
    const DIRNAME: &'static str;

    // e.g. "wordhue.toml"
    const FILENAME: &'static str;

    // every filesystem path in the config, so `~` can be expanded after loading
    fn with_paths(&mut self, f: impl FnMut(&mut PathBuf));

    fn log_levels(&self) -> impl Iterator<Item = &str>;

    fn tracing_env_filter(&self) -> Result<tracing_subscriber::EnvFilter> {
        let mut filter = tracing_subscriber::EnvFilter::from_default_env();
        for directive in self.log_levels() {
            match directive.parse() {
                Ok(directive) => filter = filter.add_directive(directive),
                Err(err) => bail!("{}: {}", err, directive),
            }
        }

        Ok(filter)
    }
}

impl<CONFIG: ConfigExt, ARG: CliEnvExt> ConfigBuilder<CONFIG, ARG> {
    pub fn new(cli_env_args: ARG) -> Self {
        Self {
            cli_env_args,
            _config: PhantomData,
        }
    }

    pub fn build(self) -> Result<CONFIG> {
        // dotenv goes first, since it may set the env vars for the paths below
        let mut dotenv_paths = Vec::new();

        if let Some(dotenv_path) = self.cli_env_args.dotenv_path() {
            dotenv_paths.push(dotenv_path);
        } else if let Some(dotenv_path) = ARG::env_var("DOTENV") {
            dotenv_paths.push(PathBuf::from(dotenv_path));
        } else {
            dotenv_paths.push(std::env::current_dir()?.join(".env"));
        }

        for dotenv_path in dotenv_paths {
            if ARG::PRINT_DEBUG_MSGS {
                eprintln!("Loading env vars from {}", dotenv_path.display());
            }
            if dotenv_path.exists() {
                if let Err(e) = dotenvy::from_path(&dotenv_path) {
                    bail!(
                        "Error loading dotenv file {}: {}",
                        dotenv_path.display(),
                        e
                    );
                }
            }
        }

        let cli_env_args = self.cli_env_args.merge_cli_env_args()?;

        let mut figment =
            Figment::new().merge(figment::providers::Serialized::defaults(CONFIG::default()));

        // a missing config file is fine, everything has a default
        match ConfigFilePath::new(CONFIG::FILENAME, CONFIG::DIRNAME, cli_env_args.home_dir())
            .into_path()
        {
            Some(filepath) => {
                if ARG::PRINT_DEBUG_MSGS {
                    eprintln!("Loading config from {}", filepath.display());
                }
                figment = figment
                    // the [default] section is shared by every binary
                    .merge(Figment::from(
                        figment::providers::Toml::file(&filepath).nested(),
                    ))
                    // then the section for this binary overrides it
                    .merge(
                        Figment::from(figment::providers::Toml::file(&filepath).nested())
                            .select(ARG::TOML_IDENTIFIER),
                    );
            }
            None => {
                if ARG::PRINT_DEBUG_MSGS {
                    eprintln!("No {} found, using defaults", CONFIG::FILENAME);
                }
            }
        }

        // globals beat whichever profile the file selected
        let mut config: CONFIG = figment
            .merge(figment::providers::Serialized::globals(cli_env_args))
            .extract()
            .context("Unable to build config")?;

        config.with_paths(|path| {
            *path = shellexpand::tilde(&path.to_string_lossy())
                .to_string()
                .into();
        });

        Ok(config)
    }
}

// a helper to try a series of fallback paths, looking for a config file
#[derive(Clone, Debug)]
pub struct ConfigFilePath {
    // the filename to look for in each directory, e.g. "wordhue.toml"
    pub filename: String,
    // the directory name used under the various config roots, e.g. "wordhue"
    pub dirname: String,
    // the optional directory set via direct args or env
    pub arg_env_dir: Option<PathBuf>,
}

impl ConfigFilePath {
    pub fn new(
        filename: impl ToString,
        dirname: impl ToString,
        arg_env_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            filename: filename.to_string(),
            dirname: dirname.to_string(),
            arg_env_dir,
        }
    }

    pub fn into_path(self) -> Option<PathBuf> {
        self.into_possible().into_iter().find(|path| path.exists())
    }

    // tries a series of fallbacks, in order of pushing
    pub fn into_possible(self) -> Vec<PathBuf> {
        let Self {
            filename,
            dirname,
            arg_env_dir,
        } = self;

        let mut dirs = Vec::new();

        // explicit, e.g. `--home /foo` or WORDHUE_HOME="/foo"
        if let Some(dir) = arg_env_dir {
            dirs.push(dir);
        }

        // wherever the command is run from
        if let Ok(dir) = std::env::current_dir() {
            dirs.push(dir);
        }

        // ~/.wordhue/wordhue.toml
        if let Some(dir) = dirs::home_dir().map(|dir| dir.join(format!(".{dirname}"))) {
            dirs.push(dir);
        }

        // Linux: ~/.config/wordhue
        // macOS: ~/Library/Application Support/wordhue
        // Windows: C:\Users\MyUserName\AppData\Roaming\wordhue
        if let Some(dir) = dirs::config_dir().map(|dir| dir.join(&dirname)) {
            dirs.push(dir);
        }

        if let Some(dir) = std::env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .map(|dir| dir.join(&dirname))
        {
            dirs.push(dir);
        }

        // may duplicate config_dir above on linux, dedup takes care of it
        if let Some(dir) = dirs::home_dir().map(|dir| dir.join(".config").join(&dirname)) {
            dirs.push(dir);
        }

        dirs.push(PathBuf::from("/etc").join(&dirname));

        let mut all_files: Vec<PathBuf> = Vec::with_capacity(dirs.len());
        for file in dirs.into_iter().map(|dir| dir.join(&filename)) {
            if !all_files.contains(&file) {
                all_files.push(file);
            }
        }

        all_files
    }
}
