use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Login GitHub shows for deleted accounts; used when `user` is null
pub const GHOST_LOGIN: &str = "ghost";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub author: String,
    pub url: String,                      // HTML URL for browser
    pub created_at: DateTime<Utc>,
    pub draft: bool,
    pub requested_reviewers: Vec<String>, // user logins
    pub requested_teams: Vec<String>,     // team names, no prefix
}

impl PullRequest {
    /// Calculate PR age relative to `now`
    pub fn age(&self, now: DateTime<Utc>) -> chrono::Duration {
        now - self.created_at
    }

    /// True when neither a person nor a team has been asked to review
    pub fn has_no_review_requests(&self) -> bool {
        self.requested_reviewers.is_empty() && self.requested_teams.is_empty()
    }
}

/// Pull request object as returned by `GET /repos/{owner}/{repo}/pulls`.
///
/// Only the fields the report needs are decoded. Everything that GitHub
/// documents as nullable is optional here.
#[derive(Debug, Deserialize)]
pub(crate) struct WirePullRequest {
    number: u64,
    title: String,
    user: Option<WireUser>,
    html_url: String,
    created_at: DateTime<Utc>,
    #[serde(default)]
    draft: Option<bool>,
    #[serde(default)]
    requested_reviewers: Option<Vec<WireUser>>,
    #[serde(default)]
    requested_teams: Option<Vec<WireTeam>>,
}

#[derive(Debug, Deserialize)]
struct WireUser {
    login: String,
}

#[derive(Debug, Deserialize)]
struct WireTeam {
    name: String,
}

impl From<WirePullRequest> for PullRequest {
    fn from(wire: WirePullRequest) -> Self {
        let author = match wire.user {
            Some(user) => user.login,
            None => {
                tracing::warn!(number = wire.number, "pull request has no author, reporting as ghost");
                GHOST_LOGIN.to_string()
            }
        };

        PullRequest {
            number: wire.number,
            title: wire.title,
            author,
            url: wire.html_url,
            created_at: wire.created_at,
            draft: wire.draft.unwrap_or(false),
            requested_reviewers: wire
                .requested_reviewers
                .unwrap_or_default()
                .into_iter()
                .map(|user| user.login)
                .collect(),
            requested_teams: wire
                .requested_teams
                .unwrap_or_default()
                .into_iter()
                .map(|team| team.name)
                .collect(),
        }
    }
}
