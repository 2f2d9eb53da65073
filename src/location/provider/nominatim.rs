//! OpenStreetMap Nominatim client
//!
//! Free-text search over `GET /search?format=json&q=...`. Nominatim's usage
//! policy requires an identifying User-Agent and at most one request per
//! second, which the debounce keeps us well under for a single user.

use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;

use super::{LookupError, LookupProvider};
use crate::config::LookupConfig;
use crate::location::suggestion::{Suggestion, parse_suggestions};

/// Nominatim search client
#[derive(Debug, Clone)]
pub struct NominatimClient {
    http: reqwest::Client,
    endpoint: String,
    result_limit: u8,
    language: Option<String>,
}

impl NominatimClient {
    /// Create a client from the `[lookup]` configuration section
    pub fn new(config: &LookupConfig) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LookupError::Network(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            result_limit: config.result_limit,
            language: config
                .language
                .as_ref()
                .filter(|l| !l.trim().is_empty())
                .cloned(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Query parameters for one search, URL-encoded by reqwest
    fn query_params(&self, query: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("format", "json".to_string()),
            ("q", query.to_string()),
            ("limit", self.result_limit.to_string()),
        ];
        if let Some(language) = &self.language {
            params.push(("accept-language", language.clone()));
        }
        params
    }

    async fn fetch(&self, query: &str) -> Result<Vec<Suggestion>, LookupError> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&self.query_params(query))
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Network(format!(
                "{} returned HTTP {}",
                self.endpoint,
                status.as_u16()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        parse_suggestions(&body)
    }
}

impl LookupProvider for NominatimClient {
    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<Vec<Suggestion>, LookupError>> {
        self.fetch(query).boxed()
    }
}

#[cfg(test)]
#[path = "nominatim_tests.rs"]
mod nominatim_tests;
