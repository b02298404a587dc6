use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use github_docs::cli::{GITHUB_REPOSITORY_ENV, GITHUB_TOKEN_ENV, init_tracing};
use github_docs::error::Error;
use github_docs::github::GitHubClient;
use github_docs::services::{Fetcher, RecordStore};
use github_docs::types::RepositoryId;

#[derive(Parser)]
#[command(name = "fetch-github-data")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Download milestones, issues and pull requests of a repository into milestones.json, issues.json and prs.json"
)]
struct Cli {
    /// Repository in owner/name form
    #[arg(long, env = GITHUB_REPOSITORY_ENV)]
    repository: Option<String>,
    /// GitHub token sent as a bearer credential
    #[arg(long, env = GITHUB_TOKEN_ENV, hide_env_values = true)]
    github_token: Option<String>,
    /// Request timeout in seconds for GitHub API calls (client default when unset)
    #[arg(long)]
    request_timeout: Option<u64>,
    /// Stop after this many pages per listing (1 keeps only the first 100 records)
    #[arg(long)]
    max_pages: Option<usize>,
    /// Directory receiving the JSON record stores
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize rustls crypto provider early to prevent "no process-level CryptoProvider available" panics
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    init_tracing();

    let cli = Cli::parse();

    let github_token = cli
        .github_token
        .filter(|token| !token.trim().is_empty())
        .ok_or_else(|| Error::Auth(format!("{} is not set", GITHUB_TOKEN_ENV)))?;

    let repository = cli
        .repository
        .ok_or_else(|| Error::Config(format!("{} is not set", GITHUB_REPOSITORY_ENV)))?;
    let repository_id = RepositoryId::parse(&repository).map_err(Error::Config)?;

    let client = GitHubClient::new(
        Some(github_token),
        cli.request_timeout.map(Duration::from_secs),
    )?
    .with_max_pages(cli.max_pages);

    let fetcher = Fetcher::new(client, RecordStore::new(cli.data_dir));
    let written = fetcher.run(&repository_id).await?;

    for path in written {
        println!("{}", path.display());
    }

    Ok(())
}
