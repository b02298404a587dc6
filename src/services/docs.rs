//! Single-page progress report
//!
//! Combines milestone summaries, label-grouped issues, the changelog and the
//! release notes into `<output_dir>/index.md`.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::formatter::{
    MarkdownContent, changelog_markdown, issue_list_markdown, milestone_summary_markdown,
    release_notes_markdown,
};
use crate::services::record_store::Snapshot;
use crate::services::report::{GroupingRule, changelog, group_issues_by_label, release_notes};
use crate::types::DocConfig;

const DOCUMENT_TITLE: &str = "# 📄 Documentación de Progreso";
const MILESTONE_HEADING_LEVEL: usize = 3;

pub struct DocGenerator<'a> {
    config: &'a DocConfig,
}

impl<'a> DocGenerator<'a> {
    pub fn new(config: &'a DocConfig) -> Self {
        Self { config }
    }

    /// Render the report without touching the filesystem
    pub fn render(&self, snapshot: &Snapshot) -> MarkdownContent {
        let mut content = String::new();

        content.push_str(DOCUMENT_TITLE);
        content.push_str("\n\n## Milestones\n");
        for milestone in &snapshot.milestones {
            let summary = milestone_summary_markdown(milestone, MILESTONE_HEADING_LEVEL);
            content.push_str(summary.as_str());
            content.push('\n');
        }

        content.push_str("\n## Issues por etiqueta\n");
        let groups = group_issues_by_label(
            &snapshot.issues,
            GroupingRule::include_exclude(self.config),
        );
        for group in &groups {
            content.push_str(&format!("\n### {}\n", group.label));
            content.push_str(issue_list_markdown(&group.issues).as_str());
        }

        content.push_str("\n## Changelog (Issues cerrados)\n");
        content.push_str(changelog_markdown(&changelog(&snapshot.issues)).as_str());

        content.push_str("\n\n## Notas de Lanzamiento (PRs fusionados)\n");
        content.push_str(release_notes_markdown(&release_notes(&snapshot.pull_requests)).as_str());

        MarkdownContent(content)
    }

    /// Render and write `index.md`, creating the output directory if needed
    pub fn write(&self, snapshot: &Snapshot) -> Result<PathBuf> {
        let output_dir = &self.config.output_dir;
        std::fs::create_dir_all(output_dir).map_err(|e| Error::io(output_dir, e))?;

        let path = self.config.index_path();
        let document = self.render(snapshot);
        std::fs::write(&path, document.as_str()).map_err(|e| Error::io(&path, e))?;

        tracing::info!("Wrote progress document to {}", path.display());
        Ok(path)
    }
}
