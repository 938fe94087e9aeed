use crate::{
    Color, ColorFormat, ColorFormatError, ColorPaletteResponse, ColorString, PartOfSpeech,
    WordCategory, WordEntry, WordKeyError,
};

#[test]
fn color_format_parses_case_insensitively() {
    assert_eq!("hex".parse::<ColorFormat>().unwrap(), ColorFormat::Hex);
    assert_eq!("RGBA".parse::<ColorFormat>().unwrap(), ColorFormat::Rgba);
    assert_eq!(" oklch ".parse::<ColorFormat>().unwrap(), ColorFormat::Oklch);
    assert_eq!(
        "hsl".parse::<ColorFormat>().unwrap_err(),
        ColorFormatError::Unknown("hsl".to_string())
    );
}

#[test]
fn color_format_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&ColorFormat::Oklch).unwrap(),
        "\"oklch\""
    );
    assert_eq!(ColorFormat::default(), ColorFormat::Rgba);
}

#[test]
fn color_new_clamps_alpha() {
    assert_eq!(Color::new(1, 2, 3, 1.5).a, 1.0);
    assert_eq!(Color::new(1, 2, 3, -0.5).a, 0.0);
    assert_eq!(Color::new(1, 2, 3, f64::NAN).a, 1.0);
    assert_eq!(Color::new(1, 2, 3, 0.25).channels(), [1, 2, 3]);
}

#[test]
fn word_entry_skips_missing_fields() {
    let entry = WordEntry::new("Apple").with_category(WordCategory::Fruits);
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json, serde_json::json!({"name": "Apple", "category": "fruits"}));

    let entry = WordEntry::new("Jump").with_part_of_speech(PartOfSpeech::Verb);
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json, serde_json::json!({"name": "Jump", "partOfSpeech": "verb"}));
}

#[test]
fn word_entry_reads_plain_list_items() {
    let entries: Vec<WordEntry> =
        serde_json::from_str(r#"[{"name": "Crow"}, {"name": "Robin", "category": "birds"}]"#)
            .unwrap();
    assert_eq!(entries[0], WordEntry::new("Crow"));
    assert_eq!(entries[1].category.as_deref(), Some("birds"));
}

#[test]
fn word_entry_keeps_extra_fields() {
    let entry: WordEntry = serde_json::from_value(serde_json::json!({
        "name": "Okapi",
        "emoji": "x",
        "habitat": {"region": "forest"}
    }))
    .unwrap();

    assert_eq!(entry.name, "Okapi");
    assert_eq!(entry.extra.len(), 2);
    assert_eq!(entry.extra["emoji"], "x");

    let json = serde_json::to_value(entry.with_category(WordCategory::Animals)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "Okapi",
            "category": "animals",
            "emoji": "x",
            "habitat": {"region": "forest"}
        })
    );
}

#[test]
fn word_keys_parse() {
    assert_eq!(
        "vegetables".parse::<WordCategory>().unwrap(),
        WordCategory::Vegetables
    );
    assert_eq!(
        "dinosaurs".parse::<WordCategory>().unwrap_err(),
        WordKeyError::UnknownCategory("dinosaurs".to_string())
    );
    assert_eq!("noun".parse::<PartOfSpeech>().unwrap(), PartOfSpeech::Noun);
    assert!("adverb".parse::<PartOfSpeech>().is_err());
}

#[test]
fn palette_response_serializes_strings() {
    let response = ColorPaletteResponse {
        palette: vec![
            ColorString::new("rgba(10,20,30,1)"),
            ColorString::new("rgba(50,60,70,1)"),
        ],
        format: ColorFormat::Rgba,
    };

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        serde_json::json!({
            "palette": ["rgba(10,20,30,1)", "rgba(50,60,70,1)"],
            "format": "rgba"
        })
    );
}
