use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use thiserror::Error;
use wordhue_types::{PartOfSpeech, WordCategory, WordEntry};

use crate::random::RandomSource;

#[derive(Error, Debug)]
pub enum WordSourceError {
    #[error("Word list directory does not exist: {0}")]
    MissingDir(PathBuf),

    #[error("Unable to read word list {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unable to parse word list {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read-only provider of named word lists
#[async_trait]
pub trait WordSource: Send + Sync {
    /// A random entry of the list named `key`
    /// or `None` if there is no such list or it has no entries
    async fn lookup_random(&self, key: &str, rng: &dyn RandomSource) -> Option<WordEntry>;

    fn contains(&self, key: &str) -> bool;

    fn keys(&self) -> Vec<String>;
}

pub async fn random_word_by_category(
    words: &dyn WordSource,
    category: WordCategory,
    rng: &dyn RandomSource,
) -> Option<WordEntry> {
    words
        .lookup_random(category.as_str(), rng)
        .await
        .map(|entry| entry.with_category(category))
}

pub async fn random_word_by_part_of_speech(
    words: &dyn WordSource,
    pos: PartOfSpeech,
    rng: &dyn RandomSource,
) -> Option<WordEntry> {
    words
        .lookup_random(pos.as_str(), rng)
        .await
        .map(|entry| entry.with_part_of_speech(pos))
}

// the lists compiled into the binary, also the fallback for lists missing from a words dir
const EMBEDDED: [(&str, &str); 8] = [
    ("animals", include_str!("../data/animals.json")),
    ("birds", include_str!("../data/birds.json")),
    ("fish", include_str!("../data/fish.json")),
    ("fruits", include_str!("../data/fruits.json")),
    ("vegetables", include_str!("../data/vegetables.json")),
    ("objects", include_str!("../data/objects.json")),
    ("noun", include_str!("../data/noun.json")),
    ("verb", include_str!("../data/verb.json")),
];

/// Word lists held in memory, loaded once at startup
#[derive(Clone, Debug, Default)]
pub struct StaticWordSource {
    lists: BTreeMap<String, Vec<WordEntry>>,
}

impl StaticWordSource {
    pub fn new(lists: BTreeMap<String, Vec<WordEntry>>) -> Self {
        Self { lists }
    }

    pub fn embedded() -> Result<Self, WordSourceError> {
        let mut lists = BTreeMap::new();

        for (key, json) in EMBEDDED {
            let path = PathBuf::from(format!("<embedded>/{key}.json"));
            lists.insert(key.to_string(), parse_list(json, &path)?);
        }

        Ok(Self { lists })
    }

    /// Loads `<key>.json` for every known list from `dir`
    ///
    /// Lists without a file keep their embedded contents.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, WordSourceError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(WordSourceError::MissingDir(dir.to_path_buf()));
        }

        let mut source = Self::embedded()?;

        for (key, _) in EMBEDDED {
            let path = dir.join(format!("{key}.json"));
            if !path.exists() {
                tracing::debug!("No {} in {}, using embedded list", key, dir.display());
                continue;
            }

            let json = std::fs::read_to_string(&path).map_err(|source| WordSourceError::Read {
                path: path.clone(),
                source,
            })?;

            let list = parse_list(&json, &path)?;
            tracing::info!("Loaded {} words for {} from {}", list.len(), key, path.display());
            source.lists.insert(key.to_string(), list);
        }

        Ok(source)
    }

    pub fn list(&self, key: &str) -> Option<&[WordEntry]> {
        self.lists.get(key).map(|list| list.as_slice())
    }
}

fn parse_list(json: &str, path: &Path) -> Result<Vec<WordEntry>, WordSourceError> {
    let entries: Vec<WordEntry> =
        serde_json::from_str(json).map_err(|source| WordSourceError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let total = entries.len();
    let entries: Vec<WordEntry> = entries
        .into_iter()
        .filter(|entry| !entry.name.trim().is_empty())
        .collect();

    if entries.len() != total {
        tracing::warn!(
            "Skipped {} entries with empty names in {}",
            total - entries.len(),
            path.display()
        );
    }

    Ok(entries)
}

#[async_trait]
impl WordSource for StaticWordSource {
    async fn lookup_random(&self, key: &str, rng: &dyn RandomSource) -> Option<WordEntry> {
        let list = self.lists.get(key)?;
        if list.is_empty() {
            return None;
        }

        list.get(rng.random_index(list.len())).cloned()
    }

    fn contains(&self, key: &str) -> bool {
        self.lists.contains_key(key)
    }

    fn keys(&self) -> Vec<String> {
        self.lists.keys().cloned().collect()
    }
}
