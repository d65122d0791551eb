use std::path::Path;
use std::process::Output;

use tokio::process::Command;

/// Route the generation endpoint is mounted on in tests.
pub const ROUTE: &str = "/api/generate-video";

/// Run the CLI binary with an isolated data directory and endpoint.
pub async fn run_cli(args: &[&str], data_dir: &Path, endpoint: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_vidgen"));
    cmd.args(args);
    cmd.env("VIDGEN_DATA_DIR", data_dir);
    cmd.env("VIDGEN_ENDPOINT", endpoint);
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUST_LOG");
    cmd.output().await.expect("Failed to execute CLI")
}

/// Run the CLI and expect success, returning stdout.
pub async fn run_cli_success(args: &[&str], data_dir: &Path, endpoint: &str) -> String {
    let output = run_cli(args, data_dir, endpoint).await;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure, returning stderr.
pub async fn run_cli_failure(args: &[&str], data_dir: &Path, endpoint: &str) -> String {
    let output = run_cli(args, data_dir, endpoint).await;
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}
