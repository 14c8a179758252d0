use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;

use crate::models::profile::Profile;
use crate::models::repository::Repository;


pub const DEFAULT_API_BASE: &str = "https://api.github.com";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("body is not {expected}")]
    Shape { expected: &'static str },
}

/// Outcome of a fetch once its failure has been logged.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    Loaded(T),
    Discarded,
}

impl<T> Fetched<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Fetched::Loaded(value) => Some(value),
            Fetched::Discarded => None,
        }
    }

    fn log_failure(result: Result<T, FetchError>, what: &str) -> Self {
        match result {
            Ok(value) => Fetched::Loaded(value),
            Err(e) => {
                log::error!("Failed to fetch {}: {}", what, e);
                Fetched::Discarded
            }
        }
    }
}

/// Read-only client for one GitHub account.
pub struct GitHubService {
    pub client: Client,
    pub api_base: String,
    pub handle: String,
}

impl GitHubService {
    pub fn new(api_base: &str, handle: &str) -> Result<Self, FetchError> {
        Ok(GitHubService {
            client: build_client()?,
            api_base: api_base.trim_end_matches('/').to_string(),
            handle: handle.to_string(),
        })
    }

    /// The account's public repositories. Empty when anything goes wrong.
    #[tracing::instrument(skip(self), fields(handle = %self.handle))]
    pub async fn fetch_projects(&self) -> Fetched<Vec<Repository>> {
        let url = format!("{}/users/{}/repos", self.api_base, self.handle);
        let result = self.get_json(&url).await.and_then(|body| match body {
            Value::Array(items) => Ok(items.into_iter().map(Repository::from_value).collect()),
            _ => Err(FetchError::Shape { expected: "a list" }),
        });
        Fetched::log_failure(result, "projects")
    }

    /// The account's profile record.
    #[tracing::instrument(skip(self), fields(handle = %self.handle))]
    pub async fn fetch_user(&self) -> Fetched<Profile> {
        let url = format!("{}/users/{}", self.api_base, self.handle);
        let result = self.get_json(&url).await.and_then(|body| match body {
            Value::Object(_) => Ok(serde_json::from_value::<Profile>(body)?),
            _ => Err(FetchError::Shape { expected: "a record" }),
        });
        Fetched::log_failure(result, "user info")
    }

    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        log::info!("Making request to {}...", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let contents = response.text().await?;
        Ok(serde_json::from_str(&contents)?)
    }
}

fn build_client() -> Result<Client, FetchError> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static("folio-page"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
    Ok(Client::builder().default_headers(headers).build()?)
}
