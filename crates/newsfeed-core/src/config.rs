use std::num::NonZeroU32;
use std::sync::LazyLock;

use crate::{DateBound, Domains, Endpoint, Language, SortBy};

/// Caller override for one configuration field.
///
/// `Clear` shadows the default with an absent value; `Inherit` keeps it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Override<T> {
    Inherit,
    Clear,
    Set(T),
}

impl<T> Override<T> {
    pub fn merge(self, default: Option<T>) -> Option<T> {
        match self {
            Self::Inherit => default,
            Self::Clear => None,
            Self::Set(value) => Some(value),
        }
    }

    pub const fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl<T> Default for Override<T> {
    fn default() -> Self {
        Self::Inherit
    }
}

/// Partial request configuration supplied per call.
///
/// Unset fields inherit from [`DefaultConfiguration`]. A list given for
/// `domains` replaces the default outright.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestConfig {
    pub endpoint: Option<Endpoint>,
    pub q: Override<String>,
    pub q_in_title: Override<String>,
    pub domains: Override<Domains>,
    pub exclude_domains: Override<Domains>,
    pub from: Override<DateBound>,
    pub to: Override<DateBound>,
    pub language: Override<Language>,
    pub sort_by: Override<SortBy>,
    pub page_size: Override<i64>,
    pub page: Override<NonZeroU32>,
    pub api_key: Override<String>,
}

impl RequestConfig {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: Override::Set(q.into()),
            ..Self::default()
        }
    }

    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    pub fn q_in_title(mut self, q_in_title: impl Into<String>) -> Self {
        self.q_in_title = Override::Set(q_in_title.into());
        self
    }

    pub fn domains(mut self, domains: impl Into<Domains>) -> Self {
        self.domains = Override::Set(domains.into());
        self
    }

    pub fn exclude_domains(mut self, domains: impl Into<Domains>) -> Self {
        self.exclude_domains = Override::Set(domains.into());
        self
    }

    pub fn from_date(mut self, from: impl Into<DateBound>) -> Self {
        self.from = Override::Set(from.into());
        self
    }

    pub fn to_date(mut self, to: impl Into<DateBound>) -> Self {
        self.to = Override::Set(to.into());
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = Override::Set(language);
        self
    }

    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Override::Set(sort_by);
        self
    }

    pub fn page_size(mut self, page_size: i64) -> Self {
        self.page_size = Override::Set(page_size);
        self
    }

    pub fn without_page_size(mut self) -> Self {
        self.page_size = Override::Clear;
        self
    }

    pub fn page(mut self, page: NonZeroU32) -> Self {
        self.page = Override::Set(page);
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Override::Set(api_key.into());
        self
    }

    pub fn without_api_key(mut self) -> Self {
        self.api_key = Override::Clear;
        self
    }
}

/// Baseline configuration merged underneath every request.
///
/// Built once (usually from the environment) and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultConfiguration {
    pub base_url: String,
    pub endpoint: Endpoint,
    pub q: String,
    pub language: Language,
    pub sort_by: SortBy,
    pub page_size: i64,
    pub page: NonZeroU32,
    pub api_key: Option<String>,
}

impl DefaultConfiguration {
    pub const DEFAULT_BASE_URL: &'static str = "https://newsapi.org/v2";
    pub const API_KEY_ENV: &'static str = "NEWS_API_TOKEN";
    pub const BASE_URL_ENV: &'static str = "NEWS_API_BASE_URL";
    pub const MAX_PAGE_SIZE: i64 = 100;

    pub fn new(api_key: Option<String>) -> Self {
        Self {
            base_url: String::from(Self::DEFAULT_BASE_URL),
            endpoint: Endpoint::Everything,
            q: String::new(),
            language: Language::En,
            sort_by: SortBy::PublishedAt,
            page_size: Self::MAX_PAGE_SIZE,
            page: NonZeroU32::MIN,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::new(lookup(Self::API_KEY_ENV));
        match lookup(Self::BASE_URL_ENV).filter(|url| !url.trim().is_empty()) {
            Some(base_url) => defaults.with_base_url(base_url),
            None => defaults,
        }
    }

    /// Process-wide defaults, read from the environment on first use.
    pub fn global() -> &'static Self {
        static GLOBAL: LazyLock<DefaultConfiguration> =
            LazyLock::new(DefaultConfiguration::from_env);
        &GLOBAL
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into()).filter(|key| !key.trim().is_empty());
        self
    }
}

impl Default for DefaultConfiguration {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn override_merge_semantics() {
        assert_eq!(Override::Inherit.merge(Some(1)), Some(1));
        assert_eq!(Override::<i32>::Clear.merge(Some(1)), None);
        assert_eq!(Override::Set(5).merge(Some(1)), Some(5));
        assert_eq!(Override::Set(5).merge(None), Some(5));
    }

    #[test]
    fn defaults_match_upstream_conventions() {
        let defaults = DefaultConfiguration::new(Some(String::from("key")));
        assert_eq!(defaults.base_url, "https://newsapi.org/v2");
        assert_eq!(defaults.endpoint, Endpoint::Everything);
        assert_eq!(defaults.q, "");
        assert_eq!(defaults.language, Language::En);
        assert_eq!(defaults.sort_by, SortBy::PublishedAt);
        assert_eq!(defaults.page_size, 100);
        assert_eq!(defaults.page.get(), 1);
        assert_eq!(defaults.api_key.as_deref(), Some("key"));
    }

    #[test]
    fn reads_api_key_and_base_url_from_lookup() {
        let defaults = DefaultConfiguration::from_lookup(lookup(&[
            ("NEWS_API_TOKEN", "secret"),
            ("NEWS_API_BASE_URL", "http://127.0.0.1:9000/v2/"),
        ]));
        assert_eq!(defaults.api_key.as_deref(), Some("secret"));
        assert_eq!(defaults.base_url, "http://127.0.0.1:9000/v2");
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let defaults = DefaultConfiguration::from_lookup(lookup(&[("NEWS_API_TOKEN", "  ")]));
        assert_eq!(defaults.api_key, None);
        assert_eq!(defaults.base_url, DefaultConfiguration::DEFAULT_BASE_URL);
    }

    #[test]
    fn builder_methods_set_and_clear_fields() {
        let config = RequestConfig::new("technology")
            .page_size(20)
            .without_api_key()
            .endpoint(Endpoint::TopHeadlines);

        assert_eq!(config.q, Override::Set(String::from("technology")));
        assert_eq!(config.page_size, Override::Set(20));
        assert_eq!(config.api_key, Override::Clear);
        assert_eq!(config.endpoint, Some(Endpoint::TopHeadlines));
        assert!(config.language.is_inherit());
    }
}
