use assert_cmd::cargo::cargo_bin_cmd;

fn fixture_path(file: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join(file)
}

fn temp_file(stem: &str, contents: &str) -> std::path::PathBuf {
    use std::time::{SystemTime, UNIX_EPOCH};

    let pid = std::process::id();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = std::env::temp_dir().join(format!("fragmark_{stem}_{pid}_{nanos}"));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn cli_apply_stdout_golden() {
    let tree = fixture_path("tree.json");
    let mapping = fixture_path("mapping.json");

    let mut cmd = cargo_bin_cmd!("fragmark");
    cmd.args(["apply", tree.to_str().unwrap(), mapping.to_str().unwrap()]);

    cmd.assert().success().stdout(
        "<div id=\"report\"><h2>Quarterly Report</h2><p>Revenue was flat.</p></div>\n",
    );
}

#[test]
fn cli_apply_ignores_unknown_mapping_keys() {
    let tree = fixture_path("tree.json");
    let mapping = temp_file("unknown_map.json", r#"{"deadbeef00":"never used"}"#);

    let mut cmd = cargo_bin_cmd!("fragmark");
    cmd.args(["apply", tree.to_str().unwrap(), mapping.to_str().unwrap()]);

    // No key matches, so the hashes pass through untouched.
    cmd.assert()
        .success()
        .stdout("<div id=\"report\"><h2>c0ffee0001</h2><p>c0ffee0002</p></div>\n");

    let _ = std::fs::remove_file(&mapping);
}

#[test]
fn cli_apply_replaces_with_empty_string() {
    let tree = fixture_path("tree.json");
    let mapping = temp_file("empty_map.json", r#"{"c0ffee0001":""}"#);

    let mut cmd = cargo_bin_cmd!("fragmark");
    cmd.args(["apply", tree.to_str().unwrap(), mapping.to_str().unwrap()]);

    cmd.assert()
        .success()
        .stdout("<div id=\"report\"><h2></h2><p>c0ffee0002</p></div>\n");

    let _ = std::fs::remove_file(&mapping);
}
