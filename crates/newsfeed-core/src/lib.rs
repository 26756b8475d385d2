//! # Newsfeed Core
//!
//! Typed client for the news REST API (`/v2/everything`, `/v2/top-headlines`).
//!
//! ## Overview
//!
//! A call takes a partial [`RequestConfig`], merges it over a shared
//! [`DefaultConfiguration`], validates it, serializes it into a query string
//! and issues a single GET through an [`HttpClient`]. The raw response is
//! returned; [`ResponseData`] decodes the body when the caller wants it.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`NewsClient`], the async entry point |
//! | [`config`] | Per-call overrides and process defaults |
//! | [`domain`] | Endpoints, languages, sort orders, date bounds, articles |
//! | [`error`] | Validation sentinels and client errors |
//! | [`http_client`] | Transport seam (reqwest or offline) |
//! | [`request`] | Merge, validation and URL serialization |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use newsfeed_core::{NewsClient, RequestConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NewsClient::from_env();
//!     let data = client.fetch(RequestConfig::new("technology")).await?;
//!     for article in &data.articles {
//!         println!("{}", article.title);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Validation failures are reported before any I/O, one sentinel per call:
//!
//! ```rust
//! use newsfeed_core::{DefaultConfiguration, RequestBuilder, RequestConfig, RequestError};
//!
//! let defaults = DefaultConfiguration::new(Some(String::from("key")));
//! let err = RequestBuilder::new(&defaults)
//!     .build(RequestConfig::new("technology").page_size(-1))
//!     .unwrap_err();
//! assert_eq!(err, RequestError::PageSizeOutOfBounds { page_size: -1 });
//! assert_eq!(err.code(), "PAGE_SIZE_OUT_OF_BOUNDS");
//! ```
//!
//! ## Security
//!
//! - The API key is read from `NEWS_API_TOKEN` and never logged
//! - Transport errors are stripped of the request URL

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod request;

pub use client::NewsClient;

pub use config::{DefaultConfiguration, Override, RequestConfig};

pub use domain::{
    Article, ArticleSource, DateBound, Domains, Endpoint, Language, ResponseData, ResponseStatus,
    SortBy,
};

pub use error::{NewsError, ParseError, RequestError};

pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient,
};

pub use request::{EffectiveRequest, MergedConfig, RequestBuilder};
