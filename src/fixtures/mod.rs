//! Test doubles for code that performs HTTP requests
//!
//! [`MockRequester`] answers GitHub "check runs" URLs with a canned payload
//! and rejects every other URL, so negative paths can be asserted too.

use regex::Regex;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::sync::OnceLock;
use thiserror::Error;

const CHECK_RUNS_RESPONSE: &str = include_str!("check_runs.json");

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Request error: URL matches none of the defined regular expressions ({url})")]
    UnmatchedPattern { url: String },
    #[error("Invalid fixture payload: {0}")]
    Payload(#[from] serde_json::Error),
}

pub type RequestFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Value, RequestError>> + Send + 'a>>;

/// Something that can fetch a JSON document from a URL
pub trait Requester {
    fn request<'a>(&'a self, url: &'a str) -> RequestFuture<'a>;
}

fn check_runs_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^https://api\.[^/]+/repos/[^/]+/[^/]+/check-runs$")
            .expect("check-runs pattern is a valid regex")
    })
}

/// The canned check-runs response served by [`MockRequester`]
pub fn check_runs_payload() -> Result<Value, RequestError> {
    Ok(serde_json::from_str(CHECK_RUNS_RESPONSE)?)
}

/// Stateless stand-in for an HTTP client
#[derive(Debug, Clone, Copy, Default)]
pub struct MockRequester;

impl MockRequester {
    pub fn new() -> Self {
        Self
    }

    /// Whether `url` is one this mock knows how to answer
    pub fn matches(&self, url: &str) -> bool {
        check_runs_pattern().is_match(url)
    }
}

impl Requester for MockRequester {
    fn request<'a>(&'a self, url: &'a str) -> RequestFuture<'a> {
        let response = if self.matches(url) {
            check_runs_payload()
        } else {
            Err(RequestError::UnmatchedPattern {
                url: url.to_string(),
            })
        };
        Box::pin(std::future::ready(response))
    }
}
