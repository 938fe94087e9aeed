mod color;
mod config;
mod everything;
mod health;
mod hello;
mod not_found;
pub(crate) mod openapi;
mod palette;
mod words;

pub use color::handle_random_color;
pub use config::handle_config;
pub use everything::handle_random_everything;
pub use health::handle_health;
pub use hello::handle_hello;
pub use not_found::{handle_not_found, handle_root};
pub use palette::handle_color_palette;
pub use words::{handle_random_noun, handle_random_verb, handle_word_by_category};

/// Query values that are present but blank count as absent
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
