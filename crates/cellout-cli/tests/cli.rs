//! Runs the command against temporary files and mock stdin.

use std::fs;
use std::path::Path;

use cellout_cli::cli::Cli;
use cellout_cli::input::MockStdin;
use clap::Parser;
use tempfile::TempDir;

fn run(args: &[&str], stdin: MockStdin) -> anyhow::Result<String> {
    let cli = Cli::parse_from(std::iter::once("cellout").chain(args.iter().copied()));
    let mut out = Vec::new();
    cellout_cli::run(&cli, &stdin, &mut out)?;
    Ok(String::from_utf8(out)?)
}

fn write(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn renders_piped_json() {
    let html = run(&[], MockStdin::piped("null")).unwrap();
    assert_eq!(html, "<pre>null</pre>\n");
}

#[test]
fn renders_yaml_file_by_extension() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "cell.yaml", "- {a: 1, b: 2}\n- {a: 3, b: 4}\n");
    let html = run(&[file.as_str()], MockStdin::terminal()).unwrap();
    assert!(html.contains("array of objects: 2 rows, 2 columns"));
}

#[test]
fn table_headers_follow_input_key_order() {
    let html = run(
        &["--format", "yaml"],
        MockStdin::piped("- {zeta: 1, alpha: 2}\n- {zeta: 3, alpha: 4}\n"),
    )
    .unwrap();
    let zeta = html.find("<th>zeta</th>").unwrap();
    let alpha = html.find("<th>alpha</th>").unwrap();
    assert!(zeta < alpha);

    let html = run(&[], MockStdin::piped(r#"[{"zeta": 1, "alpha": 2}]"#)).unwrap();
    assert!(html.contains("<th>zeta</th><th>alpha</th>"));
}

#[test]
fn undefined_shows_placeholder() {
    let html = run(&[], MockStdin::piped(r#"{"$undefined": true}"#)).unwrap();
    assert_eq!(html, "<div class=\"empty-resultset\"></div>\n");
}

#[test]
fn hidden_flag_shows_placeholder() {
    let html = run(&["--hidden"], MockStdin::piped("[1, 2]")).unwrap();
    assert!(html.contains("empty-resultset"));
}

#[test]
fn in_container_skips_chrome() {
    let html = run(&["--in-container"], MockStdin::piped("[1, 2]")).unwrap();
    assert!(!html.contains("element array"));
    assert!(html.contains("object-inspector"));
}

#[test]
fn config_file_changes_limits() {
    let dir = TempDir::new().unwrap();
    let config = write(
        &dir,
        "render.yaml",
        "array_threshold: 4\narray_head: 1\narray_tail: 1\n",
    );
    let html = run(&["--config", config.as_str()], MockStdin::piped("[1, 2, 3, 4]")).unwrap();
    assert!(html.contains(" … "));
    assert_eq!(html.matches("array-item").count(), 2);
}

#[test]
fn plugins_load_in_order() {
    let dir = TempDir::new().unwrap();
    let first = write(&dir, "first.yaml", "name: first\ntemplate: one\n");
    let second = write(
        &dir,
        "second.json",
        r#"{"name": "second", "match": {"kind": "number"}, "template": "two"}"#,
    );
    let html = run(&["-p", first.as_str(), "-p", second.as_str()], MockStdin::piped("5")).unwrap();
    assert_eq!(html, "<div>two</div>\n");
    let html = run(&["-p", first.as_str(), "-p", second.as_str()], MockStdin::piped("\"x\"")).unwrap();
    assert_eq!(html, "<div>one</div>\n");
}

#[test]
fn list_handlers_shows_priority() {
    let dir = TempDir::new().unwrap();
    let plugin = write(&dir, "p.yaml", "name: mine\ntemplate: x\n");
    let listing = run(&["--list-handlers", "-p", plugin.as_str()], MockStdin::terminal()).unwrap();
    let names: Vec<&str> = listing.lines().collect();
    assert_eq!(names.first(), Some(&"mine"));
    assert_eq!(names.last(), Some(&"inspector"));
}

#[test]
fn invalid_config_names_the_file() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "bad.yaml", "page_size: 0\n");
    let err = run(&["-c", config.as_str()], MockStdin::piped("1")).unwrap_err();
    assert!(err.to_string().contains("bad.yaml"));
}

#[test]
fn overflowing_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let config = write(
        &dir,
        "huge.yaml",
        "array_head: 18446744073709551615\narray_tail: 1\n",
    );
    let err = run(&["-c", config.as_str()], MockStdin::piped("1")).unwrap_err();
    assert!(err.to_string().contains("huge.yaml"));
}

#[test]
fn missing_file_is_reported() {
    let missing = Path::new("/definitely/not/here.json").to_string_lossy().into_owned();
    let err = run(&[missing.as_str()], MockStdin::terminal()).unwrap_err();
    assert!(err.to_string().contains("failed to read"));
}
