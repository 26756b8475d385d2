//! CLI argument definitions for newsfeed.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `everything` | Search all indexed articles |
//! | `top-headlines` | Search current headlines |
//! | `url` | Print the request URL (key redacted) without sending it |
//!
//! # Examples
//!
//! ```bash
//! newsfeed everything technology --page-size 10
//! newsfeed top-headlines rust --language de --format json --pretty
//! newsfeed url technology --to 2021-07-21
//! ```

use std::num::NonZeroU32;

use clap::{Args, Parser, Subcommand, ValueEnum};
use newsfeed_core::{Endpoint, Language, RequestConfig, SortBy};

/// Search news articles from the command line.
///
/// The API key is read from NEWS_API_TOKEN (a `.env` file in the working
/// directory is honored) unless --api-key is given.
#[derive(Debug, Parser)]
#[command(name = "newsfeed", author, version, about = "Search news articles from the command line")]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Request timeout in milliseconds. No timeout when omitted.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search every article the upstream has indexed.
    Everything(QueryArgs),
    /// Search breaking headlines.
    TopHeadlines(QueryArgs),
    /// Print the assembled request URL with the API key redacted.
    Url(UrlArgs),
}

#[derive(Debug, Clone, Args)]
pub struct QueryArgs {
    /// Keywords or phrase to search for.
    pub q: String,

    /// Keywords that must appear in the title.
    #[arg(long)]
    pub q_in_title: Option<String>,

    /// Comma-separated domains to restrict the search to.
    #[arg(long, value_delimiter = ',')]
    pub domains: Vec<String>,

    /// Comma-separated domains to exclude.
    #[arg(long, value_delimiter = ',')]
    pub exclude_domains: Vec<String>,

    /// Oldest publication date (ISO 8601, e.g. 2021-07-19 or 2021-07-19T03:41:00).
    #[arg(long)]
    pub from: Option<String>,

    /// Newest publication date (ISO 8601).
    #[arg(long)]
    pub to: Option<String>,

    /// Two-letter article language (ar de en es fr he it nl no pt ru se ud zh).
    #[arg(long)]
    pub language: Option<Language>,

    /// Result order: relevancy, popularity or publishedAt.
    #[arg(long)]
    pub sort_by: Option<SortBy>,

    /// Results per page (1-100).
    #[arg(long, allow_negative_numbers = true)]
    pub page_size: Option<i64>,

    /// Page number, starting at 1.
    #[arg(long)]
    pub page: Option<NonZeroU32>,

    /// API key overriding NEWS_API_TOKEN.
    #[arg(long)]
    pub api_key: Option<String>,
}

impl QueryArgs {
    pub fn to_config(&self, endpoint: Endpoint) -> RequestConfig {
        let mut config = RequestConfig::new(self.q.clone()).endpoint(endpoint);

        if let Some(q_in_title) = &self.q_in_title {
            config = config.q_in_title(q_in_title.clone());
        }
        if !self.domains.is_empty() {
            config = config.domains(self.domains.clone());
        }
        if !self.exclude_domains.is_empty() {
            config = config.exclude_domains(self.exclude_domains.clone());
        }
        if let Some(from) = &self.from {
            config = config.from_date(from.clone());
        }
        if let Some(to) = &self.to {
            config = config.to_date(to.clone());
        }
        if let Some(language) = self.language {
            config = config.language(language);
        }
        if let Some(sort_by) = self.sort_by {
            config = config.sort_by(sort_by);
        }
        if let Some(page_size) = self.page_size {
            config = config.page_size(page_size);
        }
        if let Some(page) = self.page {
            config = config.page(page);
        }
        if let Some(api_key) = &self.api_key {
            config = config.api_key(api_key.clone());
        }

        config
    }
}

#[derive(Debug, Clone, Args)]
pub struct UrlArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Endpoint to target.
    #[arg(long, default_value_t = Endpoint::Everything)]
    pub endpoint: Endpoint,
}
