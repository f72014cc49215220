use std::collections::HashMap;
use std::fmt;

use crate::github::types::PullRequest;

/// Who a review was requested from.
///
/// People and teams live in separate namespaces on GitHub, so they are kept
/// apart here too. The `team:` prefix only appears when rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReviewerKey {
    Person(String),
    Team(String),
}

impl fmt::Display for ReviewerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewerKey::Person(login) => write!(f, "{}", login),
            ReviewerKey::Team(name) => write!(f, "team:{}", name),
        }
    }
}

/// One outstanding review request on one pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRequestEntry {
    pub number: u64,
    pub title: String,
    pub author: String,
    pub url: String,
    pub draft: bool,
}

impl From<&PullRequest> for ReviewRequestEntry {
    fn from(pr: &PullRequest) -> Self {
        Self {
            number: pr.number,
            title: pr.title.clone(),
            author: pr.author.clone(),
            url: pr.url.clone(),
            draft: pr.draft,
        }
    }
}

/// Pending review requests grouped by reviewer, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingReviewsIndex {
    reviewers: Vec<(ReviewerKey, Vec<ReviewRequestEntry>)>,
    positions: HashMap<ReviewerKey, usize>,
}

impl PendingReviewsIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entry` to the list for `key`, creating the list on first use
    pub fn record(&mut self, key: ReviewerKey, entry: ReviewRequestEntry) {
        match self.positions.get(&key) {
            Some(&pos) => self.reviewers[pos].1.push(entry),
            None => {
                self.positions.insert(key.clone(), self.reviewers.len());
                self.reviewers.push((key, vec![entry]));
            }
        }
    }

    pub fn get(&self, key: &ReviewerKey) -> Option<&[ReviewRequestEntry]> {
        self.positions
            .get(key)
            .map(|&pos| self.reviewers[pos].1.as_slice())
    }

    /// Reviewers in the order their first request was recorded
    pub fn iter(&self) -> impl Iterator<Item = (&ReviewerKey, &[ReviewRequestEntry])> + '_ {
        self.reviewers
            .iter()
            .map(|(key, entries)| (key, entries.as_slice()))
    }

    /// Number of distinct reviewers and teams
    pub fn len(&self) -> usize {
        self.reviewers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviewers.is_empty()
    }

    /// Sum of all pending requests across reviewers
    pub fn total_requests(&self) -> usize {
        self.reviewers.iter().map(|(_, entries)| entries.len()).sum()
    }

    /// Reviewers sorted by pending count, highest first.
    /// Equal counts keep first-seen order (`sort_by` is stable).
    pub fn ranked(&self) -> Vec<(&ReviewerKey, &[ReviewRequestEntry])> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
        ranked
    }
}
