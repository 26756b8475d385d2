use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Upstream search endpoint; selects the URL path segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Endpoint {
    #[default]
    Everything,
    TopHeadlines,
}

impl Endpoint {
    pub const ALL: [Self; 2] = [Self::Everything, Self::TopHeadlines];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Everything => "everything",
            Self::TopHeadlines => "top-headlines",
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Endpoint {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "everything" => Ok(Self::Everything),
            "top-headlines" | "top_headlines" => Ok(Self::TopHeadlines),
            other => Err(ParseError::InvalidEndpoint {
                value: other.to_owned(),
            }),
        }
    }
}
