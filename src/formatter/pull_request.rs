use crate::types::PullRequest;

use super::MarkdownContent;

pub fn release_note_line_markdown(pr: &PullRequest) -> String {
    format!("- {} (#{})", pr.title, pr.number)
}

/// Release notes joined by newlines, without a trailing newline
pub fn release_notes_markdown(pull_requests: &[&PullRequest]) -> MarkdownContent {
    MarkdownContent(
        pull_requests
            .iter()
            .map(|pr| release_note_line_markdown(pr))
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

/// Release notes with every line newline-terminated, as on the wiki page
pub fn merged_pull_requests_markdown(pull_requests: &[&PullRequest]) -> MarkdownContent {
    let mut content = String::new();
    for pr in pull_requests {
        content.push_str(&release_note_line_markdown(pr));
        content.push('\n');
    }
    MarkdownContent(content)
}
