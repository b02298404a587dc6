//! Wiki pages: one file per concern
//!
//! - `Milestones.md` with every milestone summary
//! - `Issues_<label>.md` for each label group
//! - `PRs_Merged.md` with the merged pull requests

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::formatter::{
    MarkdownContent, issue_list_markdown, merged_pull_requests_markdown,
    milestone_summary_markdown,
};
use crate::services::record_store::Snapshot;
use crate::services::report::{GroupingRule, group_issues_by_label, release_notes};
use crate::types::{DocConfig, Label};

pub const MILESTONES_PAGE: &str = "Milestones.md";
pub const MERGED_PULL_REQUESTS_PAGE: &str = "PRs_Merged.md";
const MILESTONE_HEADING_LEVEL: usize = 2;

/// A rendered wiki page and its file name inside the wiki directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiPage {
    pub file_name: String,
    pub content: MarkdownContent,
}

pub struct WikiGenerator<'a> {
    config: &'a DocConfig,
}

impl<'a> WikiGenerator<'a> {
    pub fn new(config: &'a DocConfig) -> Self {
        Self { config }
    }

    fn grouping_rule(&self) -> GroupingRule<'a> {
        if self.config.wiki.apply_exclude_labels {
            GroupingRule::include_exclude(self.config)
        } else {
            GroupingRule::include_only(self.config)
        }
    }

    /// Render every page without touching the filesystem
    pub fn render(&self, snapshot: &Snapshot) -> Vec<WikiPage> {
        let mut pages = Vec::new();

        let mut milestones = String::new();
        for milestone in &snapshot.milestones {
            let summary = milestone_summary_markdown(milestone, MILESTONE_HEADING_LEVEL);
            milestones.push_str(summary.as_str());
            milestones.push('\n');
        }
        pages.push(WikiPage {
            file_name: MILESTONES_PAGE.to_string(),
            content: MarkdownContent(milestones),
        });

        for group in group_issues_by_label(&snapshot.issues, self.grouping_rule()) {
            pages.push(WikiPage {
                file_name: label_page_name(&group.label),
                content: issue_list_markdown(&group.issues),
            });
        }

        pages.push(WikiPage {
            file_name: MERGED_PULL_REQUESTS_PAGE.to_string(),
            content: merged_pull_requests_markdown(&release_notes(&snapshot.pull_requests)),
        });

        pages
    }

    /// Render and write all pages, creating the wiki directory if needed
    pub fn write(&self, snapshot: &Snapshot) -> Result<Vec<PathBuf>> {
        let wiki_dir = &self.config.wiki.output_dir;
        std::fs::create_dir_all(wiki_dir).map_err(|e| Error::io(wiki_dir, e))?;

        self.render(snapshot)
            .into_iter()
            .map(|page| write_page(wiki_dir, &page))
            .collect()
    }
}

fn write_page(wiki_dir: &Path, page: &WikiPage) -> Result<PathBuf> {
    let path = wiki_dir.join(&page.file_name);
    std::fs::write(&path, page.content.as_str()).map_err(|e| Error::io(&path, e))?;
    tracing::info!("Wrote wiki page {}", path.display());
    Ok(path)
}

/// `Issues_<label>.md`, with path separators in the label replaced by `_`
pub fn label_page_name(label: &Label) -> String {
    let name: String = label
        .name()
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    if name != label.name() {
        tracing::warn!("Label '{}' written to page Issues_{}.md", label, name);
    }
    format!("Issues_{}.md", name)
}
