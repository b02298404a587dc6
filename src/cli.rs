//! Pieces shared by the `fetch-github-data`, `generate-docs` and
//! `generate-wiki` entry points.
//!
//! Every argument falls back to an environment variable or a default, so the
//! binaries run with no flags at all from a scheduled job.

use std::path::PathBuf;

use clap::Args;
use tracing_subscriber::EnvFilter;

use crate::error::Result;
use crate::services::{RecordStore, Snapshot};
use crate::types::{DEFAULT_CONFIG_PATH, DocConfig};

pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const GITHUB_REPOSITORY_ENV: &str = "GITHUB_REPOSITORY";
pub const CONFIG_PATH_ENV: &str = "GITHUB_DOCS_CONFIG";

const DEFAULT_LOG_FILTER: &str = "github_docs=info";

/// Initialize logging to stderr, honouring `RUST_LOG`
pub fn init_tracing() {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

/// `RUST_LOG` replaces the default filter entirely; an unparsable value falls back to it
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Arguments common to both generators
#[derive(Debug, Clone, Args)]
pub struct GeneratorArgs {
    /// Path of the YAML configuration (output_dir, include_labels, exclude_labels)
    #[arg(long, env = CONFIG_PATH_ENV, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Directory holding milestones.json, issues.json and prs.json
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,
}

impl GeneratorArgs {
    /// Load the configuration and the record stores the generators render from
    pub fn load_inputs(&self) -> Result<(DocConfig, Snapshot)> {
        let config = DocConfig::load(&self.config)?;
        let snapshot = RecordStore::new(&self.data_dir).load_snapshot()?;
        Ok((config, snapshot))
    }
}
