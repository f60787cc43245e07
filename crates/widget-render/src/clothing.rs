//! Clothing recommendations from weather conditions.
//!
//! [`recommend`] applies a fixed list of rules in order. Every rule is checked
//! (there is no early exit) and each contributes at most once, so the result is
//! ordered by rule precedence and never holds duplicates.
//!
//! | Rule | Condition | Adds |
//! |------|-----------|------|
//! | 1 | description mentions rain, drizzle or sleet | `umbrella` |
//! | 2 | `celsius > 15` | `tshirt` |
//! | 3 | `celsius > 20` | `sunglasses` |
//! | 4 | `celsius > 22` | `hat` |
//! | 5 | `celsius < 15` | `boots`, `scarf` |
//! | 6 | `celsius <= 15` | `coat` |
//!
//! At exactly 15°C only rule 6 fires, so the result is `[coat]`.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Unanchored, case-insensitive: "terrain" and "Ukraine" match too.
static WET_WEATHER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)rain|drizzl|sleet").expect("wet weather pattern is a valid regex")
});

/// A clothing recommendation label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClothingTag {
    Umbrella,
    Tshirt,
    Sunglasses,
    Hat,
    Boots,
    Scarf,
    Coat,
}

impl ClothingTag {
    /// Every tag, in rule order.
    pub const ALL: [ClothingTag; 7] = [
        ClothingTag::Umbrella,
        ClothingTag::Tshirt,
        ClothingTag::Sunglasses,
        ClothingTag::Hat,
        ClothingTag::Boots,
        ClothingTag::Scarf,
        ClothingTag::Coat,
    ];

    /// The label used in class names and helper output.
    pub fn as_str(self) -> &'static str {
        match self {
            ClothingTag::Umbrella => "umbrella",
            ClothingTag::Tshirt => "tshirt",
            ClothingTag::Sunglasses => "sunglasses",
            ClothingTag::Hat => "hat",
            ClothingTag::Boots => "boots",
            ClothingTag::Scarf => "scarf",
            ClothingTag::Coat => "coat",
        }
    }
}

impl fmt::Display for ClothingTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weather conditions fed to [`recommend`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherInput {
    pub description: String,
    pub celsius: i64,
}

impl WeatherInput {
    pub fn new(description: impl Into<String>, celsius: i64) -> Self {
        Self {
            description: description.into(),
            celsius,
        }
    }

    /// Runs [`recommend`] on these conditions.
    pub fn recommend(&self) -> Vec<ClothingTag> {
        recommend(&self.description, self.celsius)
    }
}

/// Maps a weather description and temperature to clothing tags.
///
/// # Example
///
/// ```rust
/// use widget_render::{recommend, ClothingTag};
///
/// assert_eq!(
///     recommend("Heavy rain expected", 10),
///     vec![ClothingTag::Umbrella, ClothingTag::Boots, ClothingTag::Scarf, ClothingTag::Coat],
/// );
/// assert_eq!(recommend("clear", 15), vec![ClothingTag::Coat]);
/// ```
pub fn recommend(description: &str, celsius: i64) -> Vec<ClothingTag> {
    let mut clothes = Vec::new();
    if WET_WEATHER.is_match(description) {
        clothes.push(ClothingTag::Umbrella);
    }
    if celsius > 15 {
        clothes.push(ClothingTag::Tshirt);
    }
    if celsius > 20 {
        clothes.push(ClothingTag::Sunglasses);
    }
    if celsius > 22 {
        clothes.push(ClothingTag::Hat);
    }
    if celsius < 15 {
        clothes.push(ClothingTag::Boots);
        clothes.push(ClothingTag::Scarf);
    }
    if celsius <= 15 {
        clothes.push(ClothingTag::Coat);
    }
    clothes
}
