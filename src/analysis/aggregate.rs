use chrono::{DateTime, Utc};

use super::index::{PendingReviewsIndex, ReviewRequestEntry, ReviewerKey};
use crate::github::types::PullRequest;

/// A ready-for-review PR that nobody has been asked to review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreviewedPr {
    pub number: u64,
    pub title: String,
    pub author: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl From<&PullRequest> for UnreviewedPr {
    fn from(pr: &PullRequest) -> Self {
        Self {
            number: pr.number,
            title: pr.title.clone(),
            author: pr.author.clone(),
            url: pr.url.clone(),
            created_at: pr.created_at,
        }
    }
}

/// Everything the reports are rendered from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    pub pending: PendingReviewsIndex,
    pub unreviewed: Vec<UnreviewedPr>,
    pub total_prs: usize,
}

/// Builds an [`Analysis`] one pull request at a time
#[derive(Debug, Default)]
pub struct Aggregator {
    analysis: Analysis,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the review state of a single PR
    pub fn record(&mut self, pr: &PullRequest) {
        let analysis = &mut self.analysis;
        analysis.total_prs += 1;

        for login in &pr.requested_reviewers {
            analysis
                .pending
                .record(ReviewerKey::Person(login.clone()), ReviewRequestEntry::from(pr));
        }

        for team in &pr.requested_teams {
            analysis
                .pending
                .record(ReviewerKey::Team(team.clone()), ReviewRequestEntry::from(pr));
        }

        // Drafts aren't ready for review, so an empty reviewer list is expected
        if !pr.draft && pr.has_no_review_requests() {
            analysis.unreviewed.push(UnreviewedPr::from(pr));
        }
    }

    /// Number of PRs recorded so far
    pub fn processed(&self) -> usize {
        self.analysis.total_prs
    }

    pub fn finish(self) -> Analysis {
        self.analysis
    }
}

/// Aggregate a whole fetched snapshot
pub fn aggregate(prs: &[PullRequest]) -> Analysis {
    let mut aggregator = Aggregator::new();
    for pr in prs {
        aggregator.record(pr);
    }
    aggregator.finish()
}
