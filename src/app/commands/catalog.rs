//! Catalog listing command.

use crate::domain::{AppError, Language, MOODS, STYLES, THEMES, RefinementMode};

/// Which catalog to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogPart {
    Themes,
    Styles,
    Moods,
    Languages,
    Modes,
}

impl CatalogPart {
    pub const ALL: [CatalogPart; 5] = [
        CatalogPart::Themes,
        CatalogPart::Styles,
        CatalogPart::Moods,
        CatalogPart::Languages,
        CatalogPart::Modes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogPart::Themes => "themes",
            CatalogPart::Styles => "styles",
            CatalogPart::Moods => "moods",
            CatalogPart::Languages => "languages",
            CatalogPart::Modes => "modes",
        }
    }

    pub fn parse(name: &str) -> Result<CatalogPart, AppError> {
        CatalogPart::ALL
            .into_iter()
            .find(|part| part.as_str() == name.trim().to_lowercase())
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "Unknown catalog '{}'. Available: themes, styles, moods, languages, modes",
                    name
                ))
            })
    }
}

/// List the entries of one catalog.
pub fn list(part: CatalogPart) -> Vec<String> {
    match part {
        CatalogPart::Themes => THEMES.iter().map(|s| s.to_string()).collect(),
        CatalogPart::Styles => STYLES.iter().map(|s| s.to_string()).collect(),
        CatalogPart::Moods => MOODS.iter().map(|s| s.to_string()).collect(),
        CatalogPart::Languages => {
            Language::ALL.iter().map(|l| l.display_name().to_string()).collect()
        }
        CatalogPart::Modes => RefinementMode::ALL.iter().map(|m| m.as_str().to_string()).collect(),
    }
}
