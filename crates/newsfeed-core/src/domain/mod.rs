//! # Domain Types
//!
//! Typed values for building news queries and reading their results.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Endpoint`] | `everything` or `top-headlines` path segment |
//! | [`Language`] | Article language code |
//! | [`SortBy`] | Result ordering |
//! | [`Domains`] | One or many domain filters |
//! | [`DateBound`] | `from`/`to` bound given as a date, date-time or text |
//! | [`Article`] | Decoded article |
//! | [`ResponseData`] | Decoded response body |

mod article;
mod date_bound;
mod domains;
mod endpoint;
mod language;
mod sort_by;

pub use article::{Article, ArticleSource, ResponseData, ResponseStatus};
pub use date_bound::DateBound;
pub use domains::Domains;
pub use endpoint::Endpoint;
pub use language::Language;
pub use sort_by::SortBy;
