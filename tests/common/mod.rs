//! Shared fakes for behavior tests.
#![allow(dead_code)]

use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

use newsfeed_core::{
    DefaultConfiguration, HttpClient, HttpError, HttpRequest, HttpResponse,
};

pub const TEST_API_KEY: &str = "test-key";

pub fn defaults_with_key() -> DefaultConfiguration {
    DefaultConfiguration::new(Some(String::from(TEST_API_KEY)))
}

pub fn defaults_without_key() -> DefaultConfiguration {
    DefaultConfiguration::new(None)
}

/// Transport that records every request and replays a canned outcome.
pub struct RecordingHttpClient {
    requests: Mutex<Vec<HttpRequest>>,
    outcome: Result<HttpResponse, HttpError>,
}

impl RecordingHttpClient {
    pub fn responding(response: HttpResponse) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            outcome: Ok(response),
        }
    }

    pub fn failing(error: HttpError) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            outcome: Err(error),
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("lock").clone()
    }
}

impl Default for RecordingHttpClient {
    fn default() -> Self {
        Self::responding(HttpResponse::ok_json(
            r#"{"status":"ok","totalResults":0,"articles":[]}"#,
        ))
    }
}

impl HttpClient for RecordingHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests.lock().expect("lock").push(request);
        let outcome = self.outcome.clone();
        Box::pin(async move { outcome })
    }
}
