use serde::{Deserialize, Serialize};

use crate::HttpResponse;

/// Publisher reference attached to each article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    pub id: Option<String>,
    pub name: String,
}

/// Article as returned by the upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub source: ArticleSource,
    #[serde(default)]
    pub author: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    #[serde(default)]
    pub url_to_image: Option<String>,
    pub published_at: String,
    /// Truncated by the upstream to roughly 200 characters.
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Ok,
    Error,
}

/// Decoded response body. `code` and `message` are only set on errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseData {
    pub status: ResponseStatus,
    #[serde(default, alias = "totalResult")]
    pub total_results: u64,
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ResponseData {
    /// Decode the body of a raw response, whatever its HTTP status.
    pub fn from_response(response: &HttpResponse) -> Result<Self, serde_json::Error> {
        serde_json::from_str(&response.body)
    }

    pub const fn is_ok(&self) -> bool {
        matches!(self.status, ResponseStatus::Ok)
    }

    /// Upstream `(code, message)` when the status is `error`.
    pub fn upstream_error(&self) -> Option<(&str, &str)> {
        if self.is_ok() {
            return None;
        }
        Some((
            self.code.as_deref().unwrap_or("unknown"),
            self.message.as_deref().unwrap_or(""),
        ))
    }
}
