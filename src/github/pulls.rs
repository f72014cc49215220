use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, info};

use super::client::GitHubClient;
use super::repo::RepoSpec;
use super::types::{PullRequest, WirePullRequest};

#[derive(Debug, Error)]
pub enum FetchError {
    /// GitHub answered with a non-success status; the body is kept verbatim
    #[error("GitHub API returned {status} for page {page}")]
    Status {
        status: StatusCode,
        page: u32,
        body: String,
    },
    #[error("request for page {page} failed")]
    Request {
        page: u32,
        #[source]
        source: reqwest::Error,
    },
    #[error("could not decode page {page} of pull requests")]
    Decode {
        page: u32,
        #[source]
        source: serde_json::Error,
    },
}

impl GitHubClient {
    /// Fetch every open pull request of `repo`, oldest page first.
    ///
    /// Pages are requested until GitHub returns an empty array. The first
    /// failing page aborts the whole listing: a partial list would produce
    /// a misleading report.
    pub async fn list_open_pull_requests(
        &self,
        repo: &RepoSpec,
    ) -> Result<Vec<PullRequest>, FetchError> {
        let mut prs = Vec::new();
        let mut page = 1;

        loop {
            let batch = self.fetch_pull_request_page(repo, page).await?;
            if batch.is_empty() {
                break;
            }
            debug!(page, count = batch.len(), "fetched pull request page");
            prs.extend(batch.into_iter().map(PullRequest::from));
            page += 1;
        }

        info!(repo = %repo, total = prs.len(), pages = page - 1, "listed open pull requests");
        Ok(prs)
    }

    async fn fetch_pull_request_page(
        &self,
        repo: &RepoSpec,
        page: u32,
    ) -> Result<Vec<WirePullRequest>, FetchError> {
        let url = format!(
            "{}/repos/{}/{}/pulls?state=open&per_page={}&page={}",
            self.api_url, repo.owner, repo.name, self.page_size, page
        );

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Request { page, source })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Request { page, source })?;

        if !status.is_success() {
            return Err(FetchError::Status { status, page, body });
        }

        serde_json::from_str(&body).map_err(|source| FetchError::Decode { page, source })
    }
}
