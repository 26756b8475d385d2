use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Two-letter article language codes accepted by the upstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ar,
    De,
    #[default]
    En,
    Es,
    Fr,
    He,
    It,
    Nl,
    No,
    Pt,
    Ru,
    /// Northern Sami.
    Se,
    /// Listed by the upstream without an ISO-639-1 meaning.
    Ud,
    Zh,
}

impl Language {
    pub const ALL: [Self; 14] = [
        Self::Ar,
        Self::De,
        Self::En,
        Self::Es,
        Self::Fr,
        Self::He,
        Self::It,
        Self::Nl,
        Self::No,
        Self::Pt,
        Self::Ru,
        Self::Se,
        Self::Ud,
        Self::Zh,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::De => "de",
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::He => "he",
            Self::It => "it",
            Self::Nl => "nl",
            Self::No => "no",
            Self::Pt => "pt",
            Self::Ru => "ru",
            Self::Se => "se",
            Self::Ud => "ud",
            Self::Zh => "zh",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|language| language.as_str() == normalized)
            .ok_or(ParseError::InvalidLanguage { value: normalized })
    }
}
