pub mod aggregate;
pub mod index;

pub use aggregate::{aggregate, Aggregator, Analysis, UnreviewedPr};
pub use index::{PendingReviewsIndex, ReviewRequestEntry, ReviewerKey};
