use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn fixture_path(file: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join(file)
}

#[test]
fn cli_inspect_lists_visible_fragments() {
    let input = fixture_path("page.html");

    let mut cmd = cargo_bin_cmd!("fragmark");
    cmd.args(["inspect", input.to_str().unwrap()]);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("hash"))
        .stdout(predicate::str::contains("preview"))
        .stdout(predicate::str::contains("Fragmark Demo"))
        .stdout(predicate::str::contains("Hello World"))
        .stdout(predicate::str::contains("First paragraph."))
        .stdout(predicate::str::contains("Second paragraph."))
        .stdout(predicate::str::contains("visible"))
        // Embedded style/script payloads never make the table.
        .stdout(predicate::str::contains("body{color:red}").not())
        .stdout(predicate::str::contains("var x = 1;").not());
}

#[test]
fn cli_inspect_filters_work() {
    let input = fixture_path("page.html");

    // --tag exact
    let mut cmd = cargo_bin_cmd!("fragmark");
    cmd.args(["inspect", input.to_str().unwrap(), "--tag", "p"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("First paragraph."))
        .stdout(predicate::str::contains("Second paragraph."))
        .stdout(predicate::str::contains("Hello World").not());

    // --grep substring
    let mut cmd = cargo_bin_cmd!("fragmark");
    cmd.args(["inspect", input.to_str().unwrap(), "--grep", "Second"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Second paragraph."))
        .stdout(predicate::str::contains("First paragraph.").not());
}

#[test]
fn cli_inspect_preview_is_bounded() {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    let pid = std::process::id();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = std::env::temp_dir().join(format!("fragmark_inspect_long_{pid}_{nanos}.html"));

    let long_text = "a".repeat(200);
    fs::write(&path, format!("<p>{long_text}</p>")).unwrap();

    let mut cmd = cargo_bin_cmd!("fragmark");
    cmd.args(["inspect", path.to_str().unwrap()]);

    let out = cmd.assert().success().get_output().stdout.clone();
    let out = String::from_utf8(out).unwrap();
    let mut lines = out.lines();
    let _header = lines.next().unwrap();
    let row = lines.next().unwrap();

    // The preview has no internal spaces, so it is the last column token.
    let preview = row.split_whitespace().last().unwrap();

    // 80-char bound, with ellipsis when truncated.
    assert!(preview.chars().count() <= 80);
    assert!(preview.ends_with('…'));

    let _ = fs::remove_file(&path);
}
