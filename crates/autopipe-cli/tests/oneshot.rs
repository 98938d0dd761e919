//! One-shot invocations against the filesystem-backed primitives.

use anyhow::Result;
use autopipe_cli::run_oneshot;
use autopipe_fsops::{FileOperationService, ServiceConfig};
use autopipe_test_support::TempWorkspace;
use httpmock::prelude::*;

fn service() -> FileOperationService {
    FileOperationService::new(ServiceConfig::default())
}

#[test]
fn copyfile_without_destination_prints_usage_and_copies_nothing() -> Result<()> {
    let ws = TempWorkspace::new()?;
    ws.write_file("a.txt", "payload")?;

    let rendered = run_oneshot(&service(), &["copyfile", "--source", &ws.path_string("a.txt")]);
    assert_eq!(
        rendered,
        "Missing required argument(s): --destination\n\
         Usage: copyfile --source <value> --destination <value>"
    );
    let entries = std::fs::read_dir(ws.root())?.count();
    assert_eq!(entries, 1);
    Ok(())
}

#[test]
fn createfolder_reports_an_existing_folder() -> Result<()> {
    let ws = TempWorkspace::new()?;
    ws.create_dir("sub")?;
    let parent = ws.root().display().to_string();

    let rendered = run_oneshot(
        &service(),
        &["createfolder", "--parentpath", &parent, "--foldername", "sub"],
    );
    assert_eq!(
        rendered,
        format!("Error: Folder 'sub' already exists in '{parent}'.")
    );

    let rendered = run_oneshot(
        &service(),
        &["CreateFolder", "--FolderName", "fresh", "--ParentPath", &parent],
    );
    assert_eq!(rendered, "Folder created successfully.");
    assert!(ws.path("fresh").is_dir());
    Ok(())
}

#[test]
fn write_count_and_read_share_one_file() -> Result<()> {
    let ws = TempWorkspace::new()?;
    let path = ws.path_string("logs/app.log");
    let ops = service();

    let rendered = run_oneshot(
        &ops,
        &["writefile", "--path", &path, "--content", "ERROR one\ninfo\nERROR two\nerror three"],
    );
    assert_eq!(rendered, "Text written to file successfully.");

    let rendered = run_oneshot(&ops, &["countrows", "--source", &path, "--searchstring", "ERROR"]);
    assert_eq!(rendered, "Total count of rows where string exists: 2");

    let rendered = run_oneshot(&ops, &["readfile", "--path", &path]);
    assert_eq!(rendered, "ERROR one\ninfo\nERROR two\nerror three");
    Ok(())
}

#[test]
fn move_then_list_then_delete() -> Result<()> {
    let ws = TempWorkspace::new()?;
    ws.write_file("inbox/report.csv", "id\n1\n")?;
    let ops = service();

    let rendered = run_oneshot(
        &ops,
        &[
            "movefile",
            "--source",
            &ws.path_string("inbox/report.csv"),
            "--destination",
            &ws.path_string("archive/report.csv"),
        ],
    );
    assert_eq!(rendered, "File moved successfully.");
    assert!(!ws.exists("inbox/report.csv"));

    let rendered = run_oneshot(&ops, &["queryfolderfiles", "--path", &ws.path_string("inbox")]);
    assert_eq!(rendered, "No files found.");

    let rendered = run_oneshot(&ops, &["queryfolderfiles", "--path", &ws.path_string("archive")]);
    assert_eq!(rendered, ws.path_string("archive/report.csv"));

    let rendered = run_oneshot(
        &ops,
        &["deletefile", "--path", &ws.path_string("archive/report.csv")],
    );
    assert_eq!(rendered, "File deleted successfully.");
    assert!(!ws.exists("archive/report.csv"));
    Ok(())
}

#[test]
fn downloadfile_fetches_into_a_new_directory() -> Result<()> {
    let ws = TempWorkspace::new()?;
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/data.json");
        then.status(200).body("{\"ok\":true}");
    });

    let rendered = run_oneshot(
        &service(),
        &[
            "downloadfile",
            "--url",
            &server.url("/data.json"),
            "--output",
            &ws.path_string("fetched/data.json"),
        ],
    );
    mock.assert();
    assert_eq!(rendered, "Download successful.");
    assert_eq!(ws.read_file("fetched/data.json")?, "{\"ok\":true}");
    Ok(())
}

#[test]
fn downloadfile_rejects_unsupported_schemes_without_touching_disk() -> Result<()> {
    let ws = TempWorkspace::new()?;
    let rendered = run_oneshot(
        &service(),
        &[
            "downloadfile",
            "--url",
            "ftp://example.com/x",
            "--output",
            &ws.path_string("nested/x"),
        ],
    );
    assert_eq!(rendered, "Error: Source URL 'ftp://example.com/x' is not valid.");
    assert!(!ws.exists("nested"));
    Ok(())
}

#[test]
fn unknown_command_lists_the_available_commands() {
    let rendered = run_oneshot(&service(), &["format", "--drive", "c"]);
    assert!(rendered.starts_with("Unknown command: 'format'."));
    assert!(rendered.contains("readfile"));
}

#[test]
fn wait_with_zero_seconds_returns_immediately() {
    assert_eq!(run_oneshot(&service(), &["wait", "--seconds", "0"]), "Wait over!");
    assert_eq!(
        run_oneshot(&service(), &["wait", "--seconds", "-2"]),
        "Error: Invalid wait duration specified (-2 seconds)."
    );
}
