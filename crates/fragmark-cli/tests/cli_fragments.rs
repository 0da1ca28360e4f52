use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;

fn fixture_path(file: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join(file)
}

fn fragments_json(extra_args: &[&str]) -> Value {
    let input = fixture_path("page.html");

    let mut cmd = cargo_bin_cmd!("fragmark");
    cmd.args(["fragments", input.to_str().unwrap(), "--min"]);
    cmd.args(extra_args);

    let out = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).unwrap()
}

#[test]
fn cli_fragments_captures_visible_text_only() {
    let json = fragments_json(&[]);

    assert_eq!(json["total_fragments"], 4);
    assert_eq!(json["max_depth_reached"], false);
    assert_eq!(json["fragments"]["captures"], 4);

    let fragments = json["fragments"]["fragments"].as_object().unwrap();
    assert_eq!(fragments.len(), 4);

    let mut texts: Vec<&str> = fragments
        .values()
        .map(|f| f["text"].as_str().unwrap())
        .collect();
    texts.sort();
    assert_eq!(
        texts,
        vec![
            "First paragraph.",
            "Fragmark Demo",
            "Hello World",
            "Second paragraph.",
        ]
    );

    // Keys are truncated lowercase hex content hashes.
    for hash in fragments.keys() {
        assert_eq!(hash.len(), 10);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    // Embedded style/script payloads are never captured.
    for fragment in fragments.values() {
        let tag = fragment["tag"].as_str().unwrap();
        assert_ne!(tag, "style");
        assert_ne!(tag, "script");
    }
}

#[test]
fn cli_fragments_tight_depth_bound_abandons_deep_branches() {
    let json = fragments_json(&["--max-depth", "2"]);

    // All text leaves sit at depth 3; a bound of 2 captures nothing and the
    // bound is reported as reached.
    assert_eq!(json["total_fragments"], 0);
    assert_eq!(json["max_depth_reached"], true);
}

#[test]
fn cli_hashes_substitutes_visible_text() {
    let input = fixture_path("page.html");

    let mut cmd = cargo_bin_cmd!("fragmark");
    cmd.args(["hashes", input.to_str().unwrap()]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Hello World").not())
        .stdout(predicate::str::contains("First paragraph.").not())
        .stdout(predicate::str::is_match("<h1>[0-9a-f]{10}</h1>").unwrap())
        .stdout(predicate::str::contains("<style>body{color:red}</style>"))
        .stdout(predicate::str::contains("<script>var x = 1;</script>"));
}

#[test]
fn cli_mask_stdout_golden() {
    let input = fixture_path("page.html");

    let mut cmd = cargo_bin_cmd!("fragmark");
    cmd.args(["mask", input.to_str().unwrap()]);

    cmd.assert().success().stdout(
        "<!DOCTYPE html>\n\
         <html><head><title>xxxxxxxx xxxx</title><style>body{color:red}</style></head>\
         <body><h1>xxxxx xxxxx</h1><p>xxxxx xxxxxxxxxx</p><p>xxxxxx xxxxxxxxxx</p>\
         <script>var x = 1;</script></body></html>\n",
    );
}

#[test]
fn cli_mask_honors_mask_char() {
    let input = fixture_path("page.html");

    let mut cmd = cargo_bin_cmd!("fragmark");
    cmd.args(["mask", input.to_str().unwrap(), "--mask-char", "#"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<h1>##### #####</h1>"));
}
