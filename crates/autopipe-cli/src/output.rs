//! Output renderers and formatting helpers shared by both front ends.

use std::fmt::Write as _;

use autopipe_config::CommandCatalog;
use autopipe_fsops::Outcome;

use crate::request::Report;

/// Shown by the menu for a selection outside the command table.
pub const INVALID_OPTION: &str = "Invalid option.";

const EMPTY_FOLDER: &str = "No files found.";

/// Render the final outcome of a command: a confirmation or payload on
/// success, the failure message verbatim otherwise.
#[must_use]
pub fn render_outcome(outcome: &Outcome<Report>) -> String {
    match outcome {
        Outcome::Success(report) => render_report(report),
        Outcome::Failure(message) => message.clone(),
    }
}

fn render_report(report: &Report) -> String {
    match report {
        Report::Copied => "File copied successfully.".to_string(),
        Report::Deleted => "File deleted successfully.".to_string(),
        Report::Files(files) if files.is_empty() => EMPTY_FOLDER.to_string(),
        Report::Files(files) => files
            .iter()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join("\n"),
        Report::FolderCreated => "Folder created successfully.".to_string(),
        Report::Downloaded => "Download successful.".to_string(),
        Report::Waited => "Wait over!".to_string(),
        Report::RowCount(count) => format!("Total count of rows where string exists: {count}"),
        Report::Moved => "File moved successfully.".to_string(),
        Report::Written => "Text written to file successfully.".to_string(),
        Report::Text(content) => content.clone(),
    }
}

/// Boxed operation header, e.g.
///
/// ```text
/// ------------------
/// | Copy Operation |
/// ------------------
/// ```
#[must_use]
pub fn boxed_header(title: &str) -> String {
    let rule = "-".repeat(title.chars().count() + 4);
    format!("{rule}\n| {title} |\n{rule}\n")
}

/// Numbered menu built from the command catalog.
#[must_use]
pub fn render_catalog(catalog: &CommandCatalog) -> String {
    let mut text = String::new();
    for (position, command) in catalog.commands().iter().enumerate() {
        let _ = writeln!(text, "{}. Command     : {}", position + 1, command.name);
        let _ = writeln!(text, "   Description : {}", command.description);
        let _ = writeln!(text, "   Parameter(s): {}", command.parameter);
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::path::PathBuf;

    #[test]
    fn successes_render_fixed_confirmations() {
        let cases = [
            (Report::Copied, "File copied successfully."),
            (Report::Deleted, "File deleted successfully."),
            (Report::FolderCreated, "Folder created successfully."),
            (Report::Downloaded, "Download successful."),
            (Report::Waited, "Wait over!"),
            (Report::RowCount(4), "Total count of rows where string exists: 4"),
            (Report::Moved, "File moved successfully."),
            (Report::Written, "Text written to file successfully."),
        ];
        for (report, expected) in cases {
            assert_eq!(render_outcome(&Outcome::succeed(report)), expected);
        }
    }

    #[test]
    fn payload_reports_render_the_payload() {
        let files = Report::Files(vec![PathBuf::from("/a/one.txt"), PathBuf::from("/a/two.txt")]);
        assert_eq!(render_outcome(&Outcome::succeed(files)), "/a/one.txt\n/a/two.txt");
        assert_eq!(
            render_outcome(&Outcome::succeed(Report::Files(Vec::new()))),
            "No files found."
        );
        assert_eq!(
            render_outcome(&Outcome::succeed(Report::Text("line 1\nline 2".into()))),
            "line 1\nline 2"
        );
    }

    #[test]
    fn failures_render_the_message_verbatim() {
        let outcome: Outcome<Report> = Outcome::fail("Error: File not found at 'x'.");
        assert_eq!(render_outcome(&outcome), "Error: File not found at 'x'.");
    }

    #[test]
    fn boxed_header_frames_the_title() {
        assert_eq!(
            boxed_header("Copy Operation"),
            "------------------\n| Copy Operation |\n------------------\n"
        );
    }

    #[test]
    fn catalog_renders_numbered_entries() -> Result<()> {
        let catalog = CommandCatalog::embedded()?;
        let text = render_catalog(&catalog);
        assert!(text.starts_with("1. Command     : copyfile\n"));
        assert!(text.contains("6. Command     : wait\n"));
        assert!(text.contains("10. Command     : readfile\n"));
        assert!(text.contains("   Parameter(s): --url <url> --output <path>\n"));
        Ok(())
    }
}
