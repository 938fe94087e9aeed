use thiserror::Error;
use wordhue_types::{
    ColorFormat, ColorPaletteResponse, PartOfSpeech, RandomColorResponse,
    RandomEverythingResponse, WordCategory,
};

use crate::{
    color::{format_color, generate_palette, random_color, random_endpoint, random_format},
    random::RandomSource,
    words::{random_word_by_category, random_word_by_part_of_speech, WordSource},
};

pub const EVERYTHING_PALETTE_POINTS: usize = 5;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum EverythingError {
    #[error("Not enough data for random response")]
    NotEnoughData,
}

/// A random rgba palette between two random rgba endpoints
pub fn random_palette(rng: &dyn RandomSource, points: usize) -> ColorPaletteResponse {
    let from = random_endpoint(ColorFormat::Rgba, rng);
    let to = random_endpoint(ColorFormat::Rgba, rng);

    // zero points just means an empty palette here
    let palette = generate_palette(from, to, points).unwrap_or_default();

    ColorPaletteResponse {
        palette: palette
            .iter()
            .map(|color| format_color(color, ColorFormat::Rgba))
            .collect(),
        format: ColorFormat::Rgba,
    }
}

/// One of every word list plus a color and a palette
///
/// The word lookups are independent of each other and run concurrently.
pub async fn random_everything(
    words: &dyn WordSource,
    rng: &dyn RandomSource,
) -> Result<RandomEverythingResponse, EverythingError> {
    let (animal, fish, fruit, bird, verb, noun) = futures::join!(
        random_word_by_category(words, WordCategory::Animals, rng),
        random_word_by_category(words, WordCategory::Fish, rng),
        random_word_by_category(words, WordCategory::Fruits, rng),
        random_word_by_category(words, WordCategory::Birds, rng),
        random_word_by_part_of_speech(words, PartOfSpeech::Verb, rng),
        random_word_by_part_of_speech(words, PartOfSpeech::Noun, rng),
    );

    let (Some(animal), Some(fish), Some(fruit), Some(bird), Some(verb), Some(noun)) =
        (animal, fish, fruit, bird, verb, noun)
    else {
        return Err(EverythingError::NotEnoughData);
    };

    let format = random_format(rng);
    let color = RandomColorResponse {
        color: random_color(format, rng),
        format,
    };

    let palette = random_palette(rng, EVERYTHING_PALETTE_POINTS);

    let description = format!(
        "{} with {}, {}, {} doing {} and {} in color {} with palette {}",
        animal.name,
        fish.name,
        fruit.name,
        bird.name,
        verb.name,
        noun.name,
        color.color,
        palette
            .palette
            .iter()
            .map(|c| &**c)
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(RandomEverythingResponse {
        animal,
        fish,
        fruit,
        bird,
        verb,
        noun,
        color,
        palette,
        description,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::{
        random::ThreadRandom, test_utils::random::SequenceRandom, words::StaticWordSource,
    };
    use wordhue_types::WordEntry;

    #[tokio::test]
    async fn everything_from_embedded_lists() {
        let words = StaticWordSource::embedded().unwrap();
        let rng = SequenceRandom::new(vec![0.0]);

        let everything = random_everything(&words, &rng).await.unwrap();

        assert_eq!(everything.animal.name, "Aardvark");
        assert_eq!(everything.animal.category.as_deref(), Some("animals"));
        assert_eq!(everything.noun.part_of_speech.as_deref(), Some("noun"));
        // all zeros: hex format, black color, transparent black palette
        assert_eq!(everything.color.format, ColorFormat::Hex);
        assert_eq!(&*everything.color.color, "#000000");
        assert_eq!(everything.palette.palette.len(), EVERYTHING_PALETTE_POINTS);
        assert_eq!(everything.palette.format, ColorFormat::Rgba);
        assert!(everything
            .palette
            .palette
            .iter()
            .all(|c| &**c == "rgba(0,0,0,0)"));

        assert_eq!(
            everything.description,
            "Aardvark with Anchovy, Apple, Albatross doing Jump and Table in color #000000 with palette \
             rgba(0,0,0,0), rgba(0,0,0,0), rgba(0,0,0,0), rgba(0,0,0,0), rgba(0,0,0,0)"
        );
    }

    #[tokio::test]
    async fn everything_needs_every_list() {
        let mut lists = BTreeMap::new();
        for key in ["animals", "fish", "fruits", "birds", "verb"] {
            lists.insert(key.to_string(), vec![WordEntry::new("Something")]);
        }
        let words = StaticWordSource::new(lists);

        assert_eq!(
            random_everything(&words, &ThreadRandom).await.unwrap_err(),
            EverythingError::NotEnoughData
        );
    }

    #[test]
    fn random_palette_points() {
        assert_eq!(random_palette(&ThreadRandom, 5).palette.len(), 5);
        assert!(random_palette(&ThreadRandom, 0).palette.is_empty());
    }
}
