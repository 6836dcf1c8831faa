use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn xlsx2ttl_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_xlsx2ttl"))
}

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("lib")
        .join("fixtures")
        .join("resources.xlsx")
}

// Lays out input/resources.xlsx under a fresh directory, the default location
fn project_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("input")).unwrap();
    fs::copy(fixture(), dir.path().join("input").join("resources.xlsx")).unwrap();
    dir
}

fn count_triples(path: &Path) -> usize {
    let content = fs::File::open(path).unwrap();
    oxigraph::io::RdfParser::from_format(oxigraph::io::RdfFormat::Turtle)
        .for_reader(content)
        .map(|quad| quad.unwrap())
        .count()
}

#[test]
fn converts_default_paths_without_arguments() {
    let dir = project_dir();
    let out = Command::new(xlsx2ttl_bin())
        .current_dir(dir.path())
        .output()
        .expect("run xlsx2ttl");
    assert!(
        out.status.success(),
        "conversion failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    let stdout = String::from_utf8_lossy(&out.stdout);
    let expected = Path::new("output").join("resources.ttl");
    assert_eq!(
        stdout.trim(),
        format!("Generated 16 triples in {}", expected.display())
    );
    assert_eq!(count_triples(&dir.path().join(expected)), 16);
}

#[test]
fn explicit_paths_and_config_file() {
    let dir = project_dir();
    let config = dir.path().join("xlsx2ttl.json");
    fs::write(
        &config,
        r#"{"input": "input/resources.xlsx", "output": "graphs/from-config.ttl"}"#,
    )
    .unwrap();

    let out = Command::new(xlsx2ttl_bin())
        .current_dir(dir.path())
        .args(["--config", "xlsx2ttl.json"])
        .output()
        .expect("run xlsx2ttl");
    assert!(out.status.success());
    assert!(dir.path().join("graphs").join("from-config.ttl").is_file());

    let out = Command::new(xlsx2ttl_bin())
        .current_dir(dir.path())
        .args(["--config", "xlsx2ttl.json", "-o", "graphs/override.ttl"])
        .output()
        .expect("run xlsx2ttl");
    assert!(out.status.success());
    assert!(dir.path().join("graphs").join("override.ttl").is_file());
}

#[test]
fn missing_workbook_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = Command::new(xlsx2ttl_bin())
        .current_dir(dir.path())
        .output()
        .expect("run xlsx2ttl");
    assert!(!out.status.success(), "expected failure without a workbook");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("resources.xlsx"), "stderr: {}", stderr);
    assert!(!dir.path().join("output").exists());
}

#[test]
fn run_from_args_writes_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("lib-call.ttl");
    let fixture = fixture();
    xlsx2ttl_cli::run_from_args([
        "xlsx2ttl",
        "--input",
        fixture.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ])
    .unwrap();
    assert_eq!(count_triples(&output), 16);
}

#[test]
fn invalid_prefix_binding_fails() {
    let dir = project_dir();
    let out = Command::new(xlsx2ttl_bin())
        .current_dir(dir.path())
        .args(["--prefix", "nonsense"])
        .output()
        .expect("run xlsx2ttl");
    assert!(!out.status.success());
}
