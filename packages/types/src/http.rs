use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{ColorFormat, ColorString, WordEntry};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[schema(example = json!({"color": "#aabbcc", "format": "hex"}))]
pub struct RandomColorResponse {
    pub color: ColorString,
    pub format: ColorFormat,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[schema(example = json!({"palette": ["rgba(10,20,30,1)", "rgba(50,60,70,1)"], "format": "rgba"}))]
pub struct ColorPaletteResponse {
    pub palette: Vec<ColorString>,
    pub format: ColorFormat,
}

/// One of everything: six words, a color and a palette
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct RandomEverythingResponse {
    pub animal: WordEntry,
    pub fish: WordEntry,
    pub fruit: WordEntry,
    pub bird: WordEntry,
    pub verb: WordEntry,
    pub noun: WordEntry,
    pub color: RandomColorResponse,
    pub palette: ColorPaletteResponse,
    pub description: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, ToSchema)]
pub struct HelloResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub word_lists: usize,
}

/// Body of every non-2xx response
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, ToSchema)]
#[schema(example = json!({"error": "Category not found"}))]
pub struct ErrorResponse {
    pub error: String,
}
