use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// A single word as served by the word endpoints
///
/// Word lists only need a `name`, `category` and `partOfSpeech` are stamped on at lookup time.
/// Any other fields in a list item are passed through as-is.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({"name": "Apple", "category": "fruits", "partOfSpeech": "noun"}))]
pub struct WordEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl WordEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: None,
            part_of_speech: None,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_category(mut self, category: WordCategory) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn with_part_of_speech(mut self, pos: PartOfSpeech) -> Self {
        self.part_of_speech = Some(pos.to_string());
        self
    }
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum WordKeyError {
    #[error("Unknown word category: {0}")]
    UnknownCategory(String),
    #[error("Unknown part of speech: {0}")]
    UnknownPartOfSpeech(String),
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WordCategory {
    Animals,
    Birds,
    Fish,
    Fruits,
    Vegetables,
    Objects,
}

impl WordCategory {
    pub const ALL: [WordCategory; 6] = [
        WordCategory::Animals,
        WordCategory::Birds,
        WordCategory::Fish,
        WordCategory::Fruits,
        WordCategory::Vegetables,
        WordCategory::Objects,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WordCategory::Animals => "animals",
            WordCategory::Birds => "birds",
            WordCategory::Fish => "fish",
            WordCategory::Fruits => "fruits",
            WordCategory::Vegetables => "vegetables",
            WordCategory::Objects => "objects",
        }
    }
}

impl fmt::Display for WordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WordCategory {
    type Err = WordKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WordCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| WordKeyError::UnknownCategory(s.to_string()))
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 2] = [PartOfSpeech::Noun, PartOfSpeech::Verb];

    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartOfSpeech {
    type Err = WordKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PartOfSpeech::ALL
            .into_iter()
            .find(|pos| pos.as_str() == s)
            .ok_or_else(|| WordKeyError::UnknownPartOfSpeech(s.to_string()))
    }
}
