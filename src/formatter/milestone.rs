use crate::types::Milestone;

use super::MarkdownContent;

/// Placeholder rendered for milestones without a due date
const NO_DUE_DATE: &str = "N/A";

/// Format a milestone summary block.
///
/// `heading_level` is the number of `#` in front of the title: the progress
/// document nests milestones under a section (`###`), wiki pages do not (`##`).
pub fn milestone_summary_markdown(milestone: &Milestone, heading_level: usize) -> MarkdownContent {
    let mut content = String::new();

    content.push_str(&format!(
        "{} {}\n",
        "#".repeat(heading_level),
        milestone.title
    ));
    content.push_str(milestone.description.as_deref().unwrap_or_default());
    content.push('\n');
    content.push_str(&format!("- Estado: {}\n", milestone.state));

    let due_on = milestone.due_on.as_deref().unwrap_or(NO_DUE_DATE);
    content.push_str(&format!("- Vencimiento: {}\n", due_on));

    content.push_str(&format!(
        "- Progreso: {}% ({}/{} issues cerrados)\n",
        milestone.completion_percentage(),
        milestone.closed_issues,
        milestone.total_issues()
    ));

    MarkdownContent(content)
}
