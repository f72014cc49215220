use clap::Parser;
use review_backlog::credentials::ENV_TOKEN_VAR;
use review_backlog::github::{FetchError, RepoSpec};
use tracing_subscriber::EnvFilter;

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;

#[derive(Parser, Debug)]
#[command(name = "review-backlog")]
#[command(
    about = "Analyze pending reviews and PRs without reviewers",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// GitHub repository in format OWNER/REPO (default: config file, else All-Hands-AI/OpenHands)
    #[arg(long, value_name = "OWNER/REPO")]
    repo: Option<String>,

    /// GitHub personal access token (can also use GITHUB_TOKEN env var)
    #[arg(long, value_name = "TOKEN")]
    token: Option<String>,
}

/// Diagnostics go to stderr so they never interleave with the report
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("review_backlog=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    // Install rustls crypto provider (required for rustls 0.23+)
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        tracing::debug!("rustls crypto provider already installed");
    }

    let cli = Cli::parse();

    let config = match review_backlog::config::load_config(None) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_FAILURE);
        }
    };

    let repo: RepoSpec = match config.resolve_repo(cli.repo.as_deref()).parse() {
        Ok(r) => r,
        Err(_) => {
            eprintln!("Error: Repository must be in format OWNER/REPO");
            std::process::exit(EXIT_FAILURE);
        }
    };

    let token = review_backlog::credentials::resolve_token(cli.token.as_deref());
    if token.is_some() {
        println!("Using authenticated GitHub API requests");
    } else {
        println!("Warning: No GitHub token provided. Rate limits may apply.");
        println!(
            "Set {} environment variable or use --token for higher limits.\n",
            ENV_TOKEN_VAR
        );
    }

    let api_url = config.resolve_api_url();
    tracing::debug!(%api_url, repo = %repo, "starting review analysis");

    let client = match review_backlog::github::create_client(&api_url, token.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(EXIT_FAILURE);
        }
    };

    let analysis = match review_backlog::fetch::fetch_and_analyze(&client, &repo).await {
        Ok(a) => a,
        Err(FetchError::Status { status, body, .. }) => {
            eprintln!("Error fetching PRs: {}", status.as_u16());
            eprintln!("Response: {}", body);
            std::process::exit(EXIT_FAILURE);
        }
        Err(e) => {
            let e = anyhow::Error::new(e);
            eprintln!("Error fetching PRs: {:#}", e);
            std::process::exit(EXIT_FAILURE);
        }
    };

    let use_colors = review_backlog::output::should_use_colors();
    let now = chrono::Utc::now();

    println!(
        "{}",
        review_backlog::output::format_pending_reviews_report(&analysis.pending, use_colors)
    );
    println!(
        "{}",
        review_backlog::output::format_unreviewed_report(&analysis.unreviewed, now, use_colors)
    );
    println!(
        "{}",
        review_backlog::output::format_summary(&analysis, use_colors)
    );

    std::process::exit(EXIT_SUCCESS);
}
