//! Request construction: merge, validate, normalize, serialize.
//!
//! [`RequestBuilder::build`] is pure; nothing here touches the network.

use std::num::NonZeroU32;

use crate::config::{DefaultConfiguration, RequestConfig};
use crate::http_client::HttpRequest;
use crate::{DateBound, Domains, Endpoint, Language, RequestError, SortBy};

const REDACTED: &str = "REDACTED";

/// Caller config merged over the defaults, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedConfig {
    pub endpoint: Endpoint,
    pub q: Option<String>,
    pub q_in_title: Option<String>,
    pub domains: Option<Domains>,
    pub exclude_domains: Option<Domains>,
    pub from: Option<DateBound>,
    pub to: Option<DateBound>,
    pub language: Option<Language>,
    pub sort_by: Option<SortBy>,
    pub page_size: Option<i64>,
    pub page: Option<NonZeroU32>,
    pub api_key: Option<String>,
}

impl MergedConfig {
    /// Shallow merge; caller fields win.
    pub fn merge(defaults: &DefaultConfiguration, config: RequestConfig) -> Self {
        Self {
            endpoint: config.endpoint.unwrap_or(defaults.endpoint),
            q: config.q.merge(Some(defaults.q.clone())),
            q_in_title: config.q_in_title.merge(None),
            domains: config.domains.merge(None),
            exclude_domains: config.exclude_domains.merge(None),
            from: config.from.merge(None),
            to: config.to.merge(None),
            language: config.language.merge(Some(defaults.language)),
            sort_by: config.sort_by.merge(Some(defaults.sort_by)),
            page_size: config.page_size.merge(Some(defaults.page_size)),
            page: config.page.merge(Some(defaults.page)),
            api_key: config.api_key.merge(defaults.api_key.clone()),
        }
    }

    /// First failing check, in priority order.
    pub fn validate(&self) -> Result<(), RequestError> {
        match self.validate_all().into_iter().next() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Every failing check, in priority order: API key, page size presence,
    /// page size bounds, `to`, `from`.
    pub fn validate_all(&self) -> Vec<RequestError> {
        let mut errors = Vec::new();

        if self
            .api_key
            .as_deref()
            .map_or(true, |key| key.trim().is_empty())
        {
            errors.push(RequestError::ApiKeyMissing);
        }

        match self.page_size {
            None => errors.push(RequestError::PageSizeUndefined),
            Some(page_size) if !(1..=DefaultConfiguration::MAX_PAGE_SIZE).contains(&page_size) => {
                errors.push(RequestError::PageSizeOutOfBounds { page_size });
            }
            Some(_) => {}
        }

        for (field, bound) in [("to", &self.to), ("from", &self.from)] {
            if let Some(bound) = bound {
                if bound.calendar_date().is_none() {
                    errors.push(RequestError::InvalidDateFormat {
                        field,
                        value: bound.to_string(),
                    });
                }
            }
        }

        errors
    }
}

/// Validated request ready for dispatch.
///
/// Parameter values are already percent-encoded; `from`/`to` are in
/// `YYYY-MM-DD` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveRequest {
    base_url: String,
    endpoint: Endpoint,
    params: Vec<(&'static str, String)>,
}

impl EffectiveRequest {
    pub const fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn query_string(&self) -> String {
        join_params(self.params.iter().map(|(key, value)| (*key, value.as_str())))
    }

    pub fn url(&self) -> String {
        format!("{}/{}?{}", self.base_url, self.endpoint, self.query_string())
    }

    /// URL with the API key masked, for logs and display.
    pub fn redacted_url(&self) -> String {
        let query = join_params(self.params.iter().map(|(key, value)| {
            if *key == "apiKey" {
                (*key, REDACTED)
            } else {
                (*key, value.as_str())
            }
        }));
        format!("{}/{}?{}", self.base_url, self.endpoint, query)
    }

    pub fn to_http_request(&self) -> HttpRequest {
        HttpRequest::get(self.url())
    }
}

fn join_params<'a>(params: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    params
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Turns partial per-call configs into [`EffectiveRequest`]s.
#[derive(Debug, Clone, Copy)]
pub struct RequestBuilder<'a> {
    defaults: &'a DefaultConfiguration,
}

impl<'a> RequestBuilder<'a> {
    pub const fn new(defaults: &'a DefaultConfiguration) -> Self {
        Self { defaults }
    }

    pub fn merge(&self, config: RequestConfig) -> MergedConfig {
        MergedConfig::merge(self.defaults, config)
    }

    pub fn build(&self, config: RequestConfig) -> Result<EffectiveRequest, RequestError> {
        let merged = self.merge(config);
        merged.validate()?;

        let request = self.serialize(merged)?;
        tracing::debug!(
            endpoint = %request.endpoint,
            params = request.params.len(),
            url = %request.redacted_url(),
            "built news request"
        );
        Ok(request)
    }

    fn serialize(&self, merged: MergedConfig) -> Result<EffectiveRequest, RequestError> {
        let MergedConfig {
            endpoint,
            q,
            q_in_title,
            domains,
            exclude_domains,
            from,
            to,
            language,
            sort_by,
            page_size,
            page,
            api_key,
        } = merged;

        let from = from.map(|bound| normalize_bound("from", bound)).transpose()?;
        let to = to.map(|bound| normalize_bound("to", bound)).transpose()?;

        let mut params = Vec::with_capacity(11);
        let mut push = |key: &'static str, value: Option<String>| {
            if let Some(value) = value {
                params.push((key, value));
            }
        };

        // Default fields first, then the optional filters.
        push("q", q.map(encode));
        push("language", language.map(|value| value.as_str().to_owned()));
        push("sortBy", sort_by.map(|value| value.as_str().to_owned()));
        push("pageSize", page_size.map(|value| value.to_string()));
        push("page", page.map(|value| value.to_string()));
        push("apiKey", api_key.map(encode));
        push("qInTitle", q_in_title.map(encode));
        push("domains", domains.as_ref().map(Domains::to_query_value));
        push(
            "excludeDomains",
            exclude_domains.as_ref().map(Domains::to_query_value),
        );
        push("from", from);
        push("to", to);

        Ok(EffectiveRequest {
            base_url: self.defaults.base_url.clone(),
            endpoint,
            params,
        })
    }
}

fn normalize_bound(field: &'static str, bound: DateBound) -> Result<String, RequestError> {
    bound
        .normalize()
        .ok_or_else(|| RequestError::InvalidDateFormat {
            field,
            value: bound.to_string(),
        })
}

fn encode(value: String) -> String {
    urlencoding::encode(&value).into_owned()
}
