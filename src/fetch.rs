use crate::analysis::{Aggregator, Analysis};
use crate::github::{FetchError, GitHubClient, RepoSpec};

/// Progress is printed after every this many analysed PRs
const PROGRESS_INTERVAL: usize = 50;

/// Fetch every open PR of `repo` and aggregate its review state.
///
/// Progress goes to stdout ahead of the reports. Nothing is aggregated
/// unless the whole listing succeeded.
pub async fn fetch_and_analyze(
    client: &GitHubClient,
    repo: &RepoSpec,
) -> Result<Analysis, FetchError> {
    println!("Fetching open pull requests from {}...", repo);
    let prs = client.list_open_pull_requests(repo).await?;
    println!("Found {} open pull requests\n", prs.len());

    println!("Analyzing review requests...");
    let total = prs.len();
    let mut aggregator = Aggregator::new();
    for pr in &prs {
        aggregator.record(pr);
        let processed = aggregator.processed();
        if processed % PROGRESS_INTERVAL == 0 {
            println!("Processed {}/{} PRs...", processed, total);
        }
    }
    println!("Processed all {} PRs\n", total);

    Ok(aggregator.finish())
}
