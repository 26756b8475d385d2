use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Article ordering applied by the upstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    Relevancy,
    Popularity,
    #[default]
    PublishedAt,
}

impl SortBy {
    pub const ALL: [Self; 3] = [Self::Relevancy, Self::Popularity, Self::PublishedAt];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relevancy => "relevancy",
            Self::Popularity => "popularity",
            Self::PublishedAt => "publishedAt",
        }
    }
}

impl Display for SortBy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "relevancy" => Ok(Self::Relevancy),
            "popularity" => Ok(Self::Popularity),
            "publishedat" | "published_at" | "published-at" => Ok(Self::PublishedAt),
            _ => Err(ParseError::InvalidSortBy {
                value: value.trim().to_owned(),
            }),
        }
    }
}
