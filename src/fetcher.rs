use crate::types::{FeedError, RawRelease, RepositoryTarget, Result};
use reqwest::Client;
use std::env;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

const DEFAULT_API_BASE: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("release-feed/", env!("CARGO_PKG_VERSION"));
const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Hard cap on the requested page size, whatever the per-target bound.
const PER_PAGE_CEILING: usize = 50;

/// A hung connection would stall the whole sequential run without this.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct ReleaseFetcher {
    client: Client,
    api_base: String,
    token: Option<String>,
}

impl ReleaseFetcher {
    pub fn new(api_base: impl Into<String>, token: Option<String>) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_base: api_base.into(),
            token,
        }
    }

    /// Build a fetcher against the public GitHub API, picking up an
    /// optional bearer token from the environment. The token is attached
    /// as a header only; it is never logged.
    pub fn from_env() -> Self {
        let token = env::var(TOKEN_ENV_VAR)
            .ok()
            .filter(|token| !token.trim().is_empty());
        if token.is_some() {
            debug!("Using API token from {}", TOKEN_ENV_VAR);
        }
        Self::new(DEFAULT_API_BASE, token)
    }

    /// Fetch the raw release list for one repository.
    ///
    /// Requests `min(max_releases * 2, 50)` records: the 2x headroom
    /// absorbs draft/prerelease/patch filtering loss without a second
    /// page. Non-success status or a non-array body is an error scoped
    /// to this target; the caller decides whether the run continues.
    pub async fn fetch_releases(&self, target: &RepositoryTarget) -> Result<Vec<RawRelease>> {
        let per_page = (target.max_releases * 2).min(PER_PAGE_CEILING);
        let mut url = Url::parse(&self.api_base)?.join(&format!(
            "repos/{}/{}/releases",
            target.owner, target.name
        ))?;
        url.query_pairs_mut()
            .append_pair("per_page", &per_page.to_string());

        debug!("Fetching releases: {}", url);

        let mut request = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Fetch {
                status: status.as_u16(),
            });
        }

        let body: serde_json::Value = response.json().await?;
        if !body.is_array() {
            return Err(FeedError::Parse(format!(
                "expected a release list, got {}",
                json_kind(&body)
            )));
        }

        let releases: Vec<RawRelease> = serde_json::from_value(body)?;
        info!(
            "Fetched {} raw releases for {}",
            releases.len(),
            target.slug()
        );
        Ok(releases)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
