use std::path::PathBuf;
use std::process::Command;

fn temp_path(label: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "salescast-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

fn static_data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../salescast-web/static/data")
        .join(name)
}

fn salescast() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_salescast"));
    cmd.arg("--data")
        .arg(static_data("sales.csv"))
        .arg("--model")
        .arg(static_data("model.json"))
        .arg("--config")
        .arg(static_data("dashboard.json"));
    cmd
}

#[test]
fn cli_predict_show_all_writes_json_report() {
    let output_path = temp_path("predict");
    let status = salescast()
        .args([
            "--company",
            "Show All",
            "--genre",
            "Action",
            "--platform",
            "PC",
            "--rating",
            "Level1",
            "--price",
            "59.99",
            "--score",
            "8.5",
            "--report",
            "json",
            "--output",
        ])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    let report: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(report["predictions"].as_array().map(Vec::len), Some(3));
    assert_eq!(report["title"], "1st Year Global Sales of Action game");
    assert_eq!(report["predictions"][0]["company"], "Large Company");
}

#[test]
fn cli_figure_mode_emits_plotly_traces() {
    let output = salescast()
        .args([
            "--mode",
            "figure",
            "--company",
            "Medium Company",
            "--genre",
            "Sports",
            "--platform",
            "Handheld",
            "--rating",
            "Level4",
        ])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let figure: serde_json::Value = serde_json::from_slice(&output.stdout).expect("figure json");
    let data = figure["data"].as_array().expect("trace list");
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["type"], "scatter");
    assert_eq!(data[0]["name"], "prediction");
    assert_eq!(data[1]["type"], "histogram");
}

#[test]
fn cli_incomplete_selection_emits_one_series() {
    let output = salescast()
        .args(["--mode", "figure", "--genre", "Puzzle"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let figure: serde_json::Value = serde_json::from_slice(&output.stdout).expect("figure json");
    assert_eq!(figure["data"].as_array().map(Vec::len), Some(1));
}

#[test]
fn cli_sweep_passes_and_reports_markdown() {
    let output = salescast()
        .args([
            "--mode",
            "sweep",
            "--iterations",
            "60",
            "--seed",
            "11",
            "--report",
            "markdown",
        ])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("# Salescast Sweep"));
    assert!(stdout.contains("**Iterations**: 60"));
}

#[test]
fn cli_catalog_lists_lookup_table() {
    let output = Command::new(env!("CARGO_BIN_EXE_salescast"))
        .args(["--mode", "catalog", "--report", "markdown"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("| rating | Level4 | Pending/Unknown | 7 |"));
    assert!(stdout.contains("| platform | PC | PC | 12 |"));
}

#[test]
fn cli_default_assets_load_outside_workspace_root() {
    let output = Command::new(env!("CARGO_BIN_EXE_salescast"))
        .current_dir(std::env::temp_dir())
        .args(["--mode", "figure", "--genre", "Action"])
        .output()
        .expect("run cli");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let figure: serde_json::Value = serde_json::from_slice(&output.stdout).expect("figure json");
    assert_eq!(figure["layout"]["title"], "1st Year Global Sales of Action game");
}

#[test]
fn cli_rejects_unknown_genre() {
    let output = salescast()
        .args(["--genre", "Farming"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Farming"));
}

#[test]
fn cli_reports_zero_price_as_error() {
    let output = salescast()
        .args([
            "--company",
            "Small Company",
            "--genre",
            "Action",
            "--platform",
            "PC",
            "--rating",
            "Level1",
            "--price",
            "0",
        ])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("price"));
}

#[test]
fn cli_missing_model_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_salescast"))
        .arg("--data")
        .arg(static_data("sales.csv"))
        .args(["--model", "/definitely/missing/model.json"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("model.json"));
}
