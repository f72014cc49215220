use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};

/// Public GitHub REST endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Media type pinning REST API v3
pub const ACCEPT_V3: &str = "application/vnd.github.v3+json";

/// Items requested per page when listing pull requests
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Thin REST client for the handful of GitHub endpoints the report uses
#[derive(Clone, Debug)]
pub struct GitHubClient {
    pub(crate) http: reqwest::Client,
    pub(crate) api_url: String,
    pub(crate) page_size: u32,
    authenticated: bool,
}

impl GitHubClient {
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Override the page size (mainly for tests against a mock server)
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }
}

/// Create a GitHub client, attaching the token as a bearer credential if present
pub fn create_client(api_url: &str, token: Option<&str>) -> Result<GitHubClient> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_V3));
    headers.insert(USER_AGENT, HeaderValue::from_static(env!("CARGO_PKG_NAME")));

    if let Some(token) = token {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
            .context("GitHub token contains characters not allowed in an HTTP header")?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    let http = reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .context("Failed to create GitHub client")?;

    Ok(GitHubClient {
        http,
        api_url: api_url.trim_end_matches('/').to_string(),
        page_size: DEFAULT_PAGE_SIZE,
        authenticated: token.is_some(),
    })
}
