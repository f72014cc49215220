use std::io::IsTerminal;

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use owo_colors::OwoColorize;

use crate::analysis::{Analysis, PendingReviewsIndex, ReviewRequestEntry, ReviewerKey, UnreviewedPr};

const RULE_WIDTH: usize = 80;

/// Reviewers shown with per-PR detail
const DETAILED_REVIEWERS: usize = 5;
/// PRs listed per reviewer in the detailed breakdown
const DETAILED_ENTRIES: usize = 10;
/// Reviewers listed in the summary
const SUMMARY_REVIEWERS: usize = 3;

const DETAILED_TITLE_WIDTH: usize = 65;
const UNREVIEWED_TITLE_WIDTH: usize = 70;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDTH)
}

fn heading(text: &str, use_colors: bool) -> String {
    if use_colors {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// Banner used at the top of every report section
fn banner(title: &str, use_colors: bool) -> Vec<String> {
    vec![rule('='), heading(title, use_colors), rule('=')]
}

/// Keep the first `max_chars` characters. Counts chars, not bytes.
fn truncate_title(title: &str, max_chars: usize) -> String {
    title.chars().take(max_chars).collect()
}

fn reviewer_line(rank: usize, key: &ReviewerKey, count: usize) -> String {
    format!("{:2}. {:30}: {} pending review(s)", rank, key.to_string(), count)
}

fn entry_lines(entry: &ReviewRequestEntry, use_colors: bool) -> Vec<String> {
    let title = truncate_title(&entry.title, DETAILED_TITLE_WIDTH);
    let draft_marker = match (entry.draft, use_colors) {
        (false, _) => String::new(),
        (true, false) => " [DRAFT]".to_string(),
        (true, true) => format!(" {}", "[DRAFT]".yellow()),
    };
    let url = if use_colors {
        entry.url.underline().to_string()
    } else {
        entry.url.clone()
    };

    vec![
        format!("   PR #{}: {}{}", entry.number, title, draft_marker),
        format!("   Author: {}", entry.author),
        format!("   URL: {}", url),
        String::new(),
    ]
}

/// Ranked list of everyone with pending reviews, followed by a detailed
/// breakdown of the busiest reviewers
pub fn format_pending_reviews_report(index: &PendingReviewsIndex, use_colors: bool) -> String {
    let mut lines = banner("PEOPLE WITH THE MOST PENDING REVIEWS", use_colors);
    lines.push(String::new());

    if index.is_empty() {
        lines.push("No pending review requests found.".to_string());
        return lines.join("\n");
    }

    let ranked = index.ranked();
    for (i, (key, entries)) in ranked.iter().enumerate() {
        lines.push(reviewer_line(i + 1, key, entries.len()));
    }

    lines.push(String::new());
    lines.push(rule('='));
    lines.push(String::new());
    lines.push(heading("DETAILED BREAKDOWN OF TOP 5 REVIEWERS", use_colors));
    lines.push(String::new());
    lines.push(rule('='));

    for (i, (key, entries)) in ranked.iter().take(DETAILED_REVIEWERS).enumerate() {
        lines.push(String::new());
        lines.push(format!("{}. {} - {} pending reviews:", i + 1, key, entries.len()));
        lines.push(rule('-'));
        for entry in entries.iter().take(DETAILED_ENTRIES) {
            lines.extend(entry_lines(entry, use_colors));
        }
        if entries.len() > DETAILED_ENTRIES {
            lines.push(format!("   ... and {} more PRs", entries.len() - DETAILED_ENTRIES));
            lines.push(String::new());
        }
    }

    lines.join("\n")
}

/// Non-draft PRs nobody has been asked to review, in fetch order
pub fn format_unreviewed_report(
    unreviewed: &[UnreviewedPr],
    now: DateTime<Utc>,
    use_colors: bool,
) -> String {
    let mut lines = vec![String::new()];
    lines.extend(banner("NON-DRAFT PRS WITHOUT REVIEWERS", use_colors));
    lines.push(String::new());

    if unreviewed.is_empty() {
        let message = "All non-draft PRs have reviewers assigned! 🎉";
        lines.push(if use_colors {
            message.green().to_string()
        } else {
            message.to_string()
        });
        return lines.join("\n");
    }

    lines.push(format!(
        "Found {} non-draft PR(s) without reviewers:",
        unreviewed.len()
    ));
    lines.push(String::new());

    for pr in unreviewed {
        let url = if use_colors {
            pr.url.underline().to_string()
        } else {
            pr.url.clone()
        };
        lines.push(format!(
            "PR #{}: {}",
            pr.number,
            truncate_title(&pr.title, UNREVIEWED_TITLE_WIDTH)
        ));
        lines.push(format!("   Author: {}", pr.author));
        lines.push(format!("   Created: {}", format_created(pr.created_at, now)));
        lines.push(format!("   URL: {}", url));
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Totals across the whole snapshot plus the top reviewers
pub fn format_summary(analysis: &Analysis, use_colors: bool) -> String {
    let pending = &analysis.pending;

    let mut lines = vec![String::new()];
    lines.extend(banner("SUMMARY STATISTICS", use_colors));
    lines.push(format!("Total open PRs: {}", analysis.total_prs));
    lines.push(format!(
        "Total pending review requests: {}",
        pending.total_requests()
    ));
    lines.push(format!(
        "Total unique reviewers with pending requests: {}",
        pending.len()
    ));
    lines.push(format!(
        "Non-draft PRs without reviewers: {}",
        analysis.unreviewed.len()
    ));
    lines.push(String::new());

    if !pending.is_empty() {
        lines.push("Top 3 people with most pending reviews:".to_string());
        for (i, (key, entries)) in pending.ranked().iter().take(SUMMARY_REVIEWERS).enumerate() {
            lines.push(format!(
                "  {}. {}: {} pending review(s)",
                i + 1,
                key,
                entries.len()
            ));
        }
    }
    lines.push(String::new());

    lines.join("\n")
}

/// Creation timestamp in GitHub's own format, followed by its age
fn format_created(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let timestamp = created_at.to_rfc3339_opts(SecondsFormat::Secs, true);
    match format_age(now - created_at).as_str() {
        "now" => format!("{} (just now)", timestamp),
        age => format!("{} ({} ago)", timestamp, age),
    }
}

/// Format a duration into a human-readable age string
/// "2h" for hours, "3d" for days, "1w" for weeks
pub fn format_age(duration: Duration) -> String {
    let hours = duration.num_hours();
    let days = duration.num_days();
    let weeks = days / 7;

    if weeks >= 1 {
        format!("{}w", weeks)
    } else if days >= 1 {
        format!("{}d", days)
    } else if hours >= 1 {
        format!("{}h", hours)
    } else {
        let minutes = duration.num_minutes();
        if minutes >= 1 {
            format!("{}m", minutes)
        } else {
            "now".to_string()
        }
    }
}
