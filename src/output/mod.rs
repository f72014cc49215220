pub mod formatter;

pub use formatter::{
    format_age, format_pending_reviews_report, format_summary, format_unreviewed_report,
    should_use_colors,
};
