//! Preset catalogs for the three prompt fields, plus the output languages.
//!
//! Every picker offers a "type your own" sentinel ahead of the presets; a
//! resolved field is always a plain string, so free text and presets are
//! interchangeable downstream.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Sentinel picker entry that switches a field to free-text entry.
pub const TYPE_YOUR_OWN: &str = "✏️ Type your own…";

/// Preset themes.
pub const THEMES: &[&str] = &[
    "Elf Queen in an enchanted forest",
    "Cyberpunk city skyline at night",
    "Underwater steampunk laboratory",
    "Haunted Victorian mansion",
    "Magical animal tea party",
    "Floating crystal island",
    "Ancient jungle ruins",
    "Dreamy cloud kingdom",
    "Neon Tokyo alleyway",
    "Surreal clockwork garden",
    "Galactic dragon shrine",
    "Rainy street café",
    "Mythical phoenix rebirth",
    "Retro-futuristic arcade",
    "Whimsical flying train",
    "Alien carnival at dusk",
    "Marvel Universe",
    "DC Comics Universe",
    "Star Wars Galaxy",
    "Disney Fairytale Kingdom",
    "Pixar Animated World",
    "Harry Potter Wizarding World",
    "Lord of the Rings Middle-earth",
    "Game of Thrones Westeros",
    "Avatar: The Last Airbender World",
    "Pokemon Universe",
    "Zelda: Hyrule",
    "Final Fantasy Realm",
    "Genshin Impact World",
    "My Hero Academia City",
];

/// Preset styles, including the print/seller-oriented output styles that the
/// tip annotator keys off.
pub const STYLES: &[&str] = &[
    "Watercolor",
    "Oil Painting",
    "Graffiti",
    "Sketch",
    "Pop Surrealism",
    "Lowbrow Art",
    "Pixel Art",
    "Digital Matte Painting",
    "Studio Ghibli Style",
    "Ink & Wash",
    "Concept Art",
    "3D Render",
    "Chalk Pastel",
    "Alcohol Ink",
    "Mosaic Art",
    "Origami Paper Style",
    "Vaporwave",
    "Cyberpunk",
    "Art Nouveau",
    "Steampunk",
    "Tattoo Flash",
    "Woodcut Print",
    "Dark Fantasy",
    "Line Art",
    "Cartoon",
    "Solarpunk",
    "Dieselpunk",
    "Biopunk",
    "Baroque Engraving",
    "Ukiyo-e",
    "Photobashing",
    "Cinematic Realism",
    "Isometric Diorama",
    "Liminal Space",
    "Low-Poly 3D",
    "Cel-Shaded",
    "Pastelcore",
    "Noir Comic",
    "Pixel RPG UI",
    "3D Realistic",
    "Photorealism",
    "Product Mockup (T-Shirt)",
    "Product Mockup (Mug)",
    "Product Mockup (Wall Art)",
    "Sticker Pack (Die-Cut)",
    "Sticker (Kiss-Cut)",
    "Sticker (Holographic Look)",
    "Clip Art Set (PNG Transparent)",
    "SVG Clip Art",
    "Printable Coloring Page",
    "Seamless Pattern (Repeat Tile)",
    "Patterned Paper Pack",
];

/// Preset moods.
pub const MOODS: &[&str] = &[
    "Whimsical",
    "Mystical",
    "Ethereal",
    "Melancholic",
    "Dreamy",
    "Uplifting",
    "Dark Fantasy",
    "Surreal",
    "Elegant",
    "Dramatic",
    "Romantic",
    "Peaceful",
    "Intense",
    "Futuristic",
    "Retro",
    "Minimalist",
    "Cinematic",
    "Noir",
    "Joyful",
    "Tranquil",
    "Spooky",
    "Playful",
    "Epic",
    "Spiritual",
    "Nostalgic",
    "Cozy",
    "Hopeful",
    "Somber",
    "Euphoric",
    "Wholesome",
    "Gritty",
    "Mysterious",
    "Whirlwind",
    "Melodic",
    "Sacred",
    "Otherworldly",
    "Zen",
    "High-Energy",
    "Cold & Sterile",
    "Warm & Inviting",
];

/// A field picker outcome: a preset catalog entry or user-typed free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSelection {
    /// A catalog option, used verbatim.
    Preset(String),
    /// Free text typed behind the [`TYPE_YOUR_OWN`] sentinel.
    Custom(String),
}

impl FieldSelection {
    /// Resolve to the final field value.
    ///
    /// Presets pass through untouched; custom text is trimmed. An empty
    /// custom entry resolves to an empty string, never the sentinel label.
    /// Empty values are valid downstream and produce degenerate prompts.
    pub fn resolve(self) -> String {
        match self {
            FieldSelection::Preset(value) => value,
            FieldSelection::Custom(value) => value.trim().to_string(),
        }
    }
}

/// Supported output languages, default first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
    Portuguese,
    Japanese,
    Russian,
    Chinese,
    Korean,
    Italian,
}

impl Language {
    pub const ALL: [Language; 10] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Portuguese,
        Language::Japanese,
        Language::Russian,
        Language::Chinese,
        Language::Korean,
        Language::Italian,
    ];

    /// Human-readable name shown in pickers.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Portuguese => "Portuguese",
            Language::Japanese => "Japanese",
            Language::Russian => "Russian",
            Language::Chinese => "Chinese",
            Language::Korean => "Korean",
            Language::Italian => "Italian",
        }
    }

    /// Identifier sent to the translation API.
    pub fn api_code(&self) -> String {
        self.display_name().to_lowercase()
    }

    /// Whether this is the default output language (no translation call).
    pub fn is_default(&self) -> bool {
        *self == Language::English
    }

    /// Parse a language from its name, case-insensitively.
    pub fn parse(name: &str) -> Result<Language, AppError> {
        let normalized = name.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|language| language.api_code() == normalized)
            .ok_or_else(|| AppError::InvalidLanguage {
                name: name.to_string(),
                available: Language::ALL
                    .iter()
                    .map(|language| language.display_name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl TryFrom<String> for Language {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Language::parse(&value)
    }
}

impl From<Language> for String {
    fn from(value: Language) -> Self {
        value.display_name().to_string()
    }
}
