use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_generate-aliases"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run generate-aliases")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is not UTF-8")
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("stderr is not UTF-8")
}

fn alias_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|l| l.starts_with("alias ")).collect()
}

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("failed to write fixture");
    path
}

const SMALL_CATALOG: &str = r#"
version: "1.0"
groups:
  - name: cmds
    optional: false
    take_exactly_one: true
    segments:
      - { code: k, expansion: kubectl }
  - name: ops
    optional: true
    take_exactly_one: true
    segments:
      - { code: g, expansion: get }
  - name: res
    optional: true
    take_exactly_one: true
    segments:
      - { code: po, expansion: pods, requires_one_of: [g] }
"#;

// ---------------------------------------------------------------------------
// generate
// ---------------------------------------------------------------------------

#[test]
fn generate_piped_output_starts_with_header() {
    let output = run(&["generate"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.starts_with("# Licensed under the Apache License"));
    let aliases = alias_lines(&text);
    assert_eq!(aliases.len(), 388);
    assert_eq!(aliases[0], "alias k='kubectl'");
    assert!(aliases.contains(&"alias kgpo='kubectl get pods'"));
    assert!(aliases.contains(&"alias kgg='kubectl get | grep'"));
}

#[test]
fn generate_header_never_prints_only_aliases() {
    let output = run(&["generate", "--header", "never"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.starts_with("alias k='kubectl'\n"));
    assert_eq!(text.lines().count(), 388);
}

#[test]
fn generate_is_deterministic() {
    let first = run(&["generate", "--header", "never"]);
    let second = run(&["generate", "--header", "never"]);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn generate_json_format() {
    let output = run(&["generate", "--format", "json"]);
    assert!(output.status.success());

    let parsed: Vec<serde_json::Value> = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(parsed.len(), 388);
    assert_eq!(parsed[0]["key"], "k");
    assert_eq!(parsed[0]["value"], "kubectl");
}

#[test]
fn generate_from_custom_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write(dir.path(), "small.yaml", SMALL_CATALOG);

    let output = run(&[
        "generate",
        "--header",
        "never",
        "--catalog",
        catalog.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "alias k='kubectl'\nalias kg='kubectl get'\nalias kgpo='kubectl get pods'\n"
    );
}

#[test]
fn generate_custom_header_file() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write(dir.path(), "small.yaml", SMALL_CATALOG);
    let header = write(dir.path(), "header", "# generated\n");

    let output = run(&[
        "generate",
        "--header",
        "always",
        "--header-file",
        header.to_str().unwrap(),
        "--catalog",
        catalog.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("# generated\n\nalias k='kubectl'\n"));
}

#[test]
fn generate_missing_header_file_fails() {
    let output = run(&[
        "generate",
        "--header",
        "always",
        "--header-file",
        "/nonexistent/license_header",
    ]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("license header not found"));
}

#[test]
fn generate_refuses_oversized_group() {
    let output = run(&["generate", "--max-group-segments", "5"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("group 'ops' has 10 segments, limit is 5"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn generate_unsatisfiable_catalog_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write(
        dir.path(),
        "empty.yaml",
        "version: \"1.0\"\ngroups:\n  - name: cmds\n    optional: false\n    take_exactly_one: true\n",
    );

    let output = run(&[
        "generate",
        "--header",
        "never",
        "--catalog",
        catalog.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("no aliases"));
}

#[test]
fn generate_uses_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write(dir.path(), "small.yaml", SMALL_CATALOG);
    let config = write(
        dir.path(),
        "config.yml",
        &format!("catalog: {}\nheader: never\n", catalog.display()),
    );

    let output = run(&["--config", config.to_str().unwrap(), "generate"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(alias_lines(&stdout(&output)).len(), 3);
    assert!(stdout(&output).starts_with("alias k="));
}

// ---------------------------------------------------------------------------
// lint
// ---------------------------------------------------------------------------

#[test]
fn lint_builtin_catalog_passes() {
    let output = run(&["lint"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Catalog OK: 5 group(s)"));
}

#[test]
fn lint_reports_typo_in_requirement() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write(
        dir.path(),
        "typo.yaml",
        &SMALL_CATALOG.replace("requires_one_of: [g]", "requires_one_of: [gt]"),
    );

    let output = run(&["lint", "--catalog", catalog.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stdout(&output).contains("segment 'po' requires 'gt'"));
    assert!(stderr(&output).contains("1 catalog issue(s) found"));
}

// ---------------------------------------------------------------------------
// dump
// ---------------------------------------------------------------------------

#[test]
fn dump_then_generate_matches_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kubectl.yaml");

    let dump = run(&["dump", "--output", path.to_str().unwrap()]);
    assert!(dump.status.success());
    assert!(path.exists());

    let builtin = run(&["generate", "--header", "never"]);
    let from_file = run(&[
        "generate",
        "--header",
        "never",
        "--catalog",
        path.to_str().unwrap(),
    ]);
    assert!(from_file.status.success(), "stderr: {}", stderr(&from_file));
    assert_eq!(builtin.stdout, from_file.stdout);
}

#[test]
fn dump_json_to_stdout() {
    let output = run(&["dump", "--format", "json"]);
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(parsed["groups"].as_array().unwrap().len(), 5);
    assert_eq!(parsed["groups"][0]["segments"][0]["code"], "k");
}
