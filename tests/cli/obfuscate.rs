use anyhow::Result;
use regex::Regex;

use crate::CliTest;

const INDEX_HTML: &str = r#"<!doctype html>
<div class="hero">
  <nav id="nav"></nav>
</div>
"#;

const SCRIPT_JS: &str = r#"document.getElementById("nav");
document.querySelector(".hero");
"#;

const STYLE_CSS: &str = r#".hero { color: red; }
#nav {
  left: 0;
}
"#;

fn setup_project(test: &CliTest) -> Result<()> {
    test.write_file(
        ".shroudrc.json",
        r#"{ "files": ["index.html", "script.js", "style.css"] }"#,
    )?;
    test.write_file("index.html", INDEX_HTML)?;
    test.write_file("script.js", SCRIPT_JS)?;
    test.write_file("style.css", STYLE_CSS)?;
    Ok(())
}

fn capture_token(content: &str, pattern: &str) -> String {
    let re = Regex::new(pattern).unwrap();
    let caps = re
        .captures(content)
        .unwrap_or_else(|| panic!("pattern {pattern:?} not found in:\n{content}"));
    caps[1].to_string()
}

#[test]
fn test_obfuscate_rewrites_all_files_consistently() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;

    let output = test.obfuscate_command().output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Replaced 2 identifiers across 3 files"),
        "unexpected stdout:\n{stdout}"
    );

    let html = test.read_file("index.html")?;
    let hero = capture_token(&html, r#"class="([A-Za-z0-9]{8})""#);
    let nav = capture_token(&html, r#"id="([A-Za-z0-9]{8})""#);
    assert!(!html.contains("hero"));
    assert!(!html.contains("\"nav\""));

    let js = test.read_file("script.js")?;
    assert!(js.contains(&format!("getElementById(\"{nav}\")")));
    assert!(js.contains(&format!("querySelector(\".{hero}\")")));

    let css = test.read_file("style.css")?;
    assert!(css.contains(&format!(".{hero} {{ color: red; }}")));
    assert!(css.contains(&format!("#{nav} {{")));
    assert!(css.contains("color: red;"));

    Ok(())
}

#[test]
fn test_missing_file_is_reported_and_run_completes() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".shroudrc.json",
        r#"{ "files": ["missing.html", "index.html"] }"#,
    )?;
    test.write_file("index.html", INDEX_HTML)?;

    let output = test.obfuscate_command().output()?;
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error:") && stderr.contains("missing.html"),
        "unexpected stderr:\n{stderr}"
    );

    // The remaining file is still processed and completion is reported.
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Replaced 2 identifiers across 1 file"));

    let html = test.read_file("index.html")?;
    assert!(!html.contains("hero"));

    Ok(())
}

#[test]
fn test_dry_run_leaves_files_untouched() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;

    let output = test.obfuscate_command().arg("--dry-run").output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Would replace 2 identifiers across 3 files."),
        "unexpected stdout:\n{stdout}"
    );

    assert_eq!(test.read_file("index.html")?, INDEX_HTML);
    assert_eq!(test.read_file("script.js")?, SCRIPT_JS);
    assert_eq!(test.read_file("style.css")?, STYLE_CSS);

    Ok(())
}

#[test]
fn test_second_run_changes_spellings_again() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;

    assert!(test.obfuscate_command().output()?.status.success());
    let first = capture_token(&test.read_file("index.html")?, r#"class="([A-Za-z0-9]{8})""#);

    assert!(test.obfuscate_command().output()?.status.success());
    let second = capture_token(&test.read_file("index.html")?, r#"class="([A-Za-z0-9]{8})""#);

    assert_ne!(first, second);
    Ok(())
}

#[test]
fn test_explicit_files_override_config_list() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;
    test.write_file("other.html", r#"<div class="sidebar"></div>"#)?;

    let output = test.obfuscate_command().arg("other.html").output()?;
    assert!(output.status.success());

    assert!(!test.read_file("other.html")?.contains("sidebar"));
    // Config-listed files were not part of this run.
    assert_eq!(test.read_file("index.html")?, INDEX_HTML);

    Ok(())
}

#[test]
fn test_token_length_flag() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;

    let output = test
        .obfuscate_command()
        .args(["--token-length", "4"])
        .output()?;
    assert!(output.status.success());

    let html = test.read_file("index.html")?;
    let token = capture_token(&html, r#"class="([A-Za-z0-9]+)""#);
    assert_eq!(token.len(), 4);

    Ok(())
}

#[test]
fn test_verbose_prints_mapping() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;

    let output = test.obfuscate_command().arg("--verbose").output()?;
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Replacement map (2 identifiers):"),
        "unexpected stderr:\n{stderr}"
    );
    assert!(stderr.contains("hero -> "));
    assert!(stderr.contains("Scanning file: index.html"));
    assert!(stderr.contains("Processing file: style.css"));

    Ok(())
}
