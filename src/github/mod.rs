pub mod client;
pub mod pulls;
pub mod repo;
pub mod types;

pub use client::{create_client, GitHubClient, DEFAULT_API_URL, DEFAULT_PAGE_SIZE};
pub use pulls::FetchError;
pub use repo::{RepoSpec, RepoSpecError};
pub use types::PullRequest;
