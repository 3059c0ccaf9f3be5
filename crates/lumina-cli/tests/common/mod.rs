use std::path::{Path, PathBuf};
use std::process::Output;

use tempfile::TempDir;
use tokio::process::Command;

/// Isolated environment for one CLI run: a private token file and an API URL.
pub struct CliEnv {
    _dir: TempDir,
    pub token_file: PathBuf,
    pub api_url: String,
}

impl CliEnv {
    pub fn new(api_url: impl Into<String>) -> Self {
        let dir = TempDir::new().unwrap();
        let token_file = dir.path().join("session").join("token");
        Self {
            _dir: dir,
            token_file,
            api_url: api_url.into(),
        }
    }

    pub fn token_path(&self) -> &Path {
        &self.token_file
    }

    /// Stored token, if any.
    pub fn stored_token(&self) -> Option<String> {
        std::fs::read_to_string(&self.token_file).ok()
    }

    pub fn write_token(&self, token: &str) {
        std::fs::create_dir_all(self.token_file.parent().unwrap()).unwrap();
        std::fs::write(&self.token_file, token).unwrap();
    }

    /// Run the CLI binary with arguments.
    pub async fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_lumina"));
        cmd.args(args);
        cmd.env("LUMINA_API_URL", &self.api_url);
        cmd.env("LUMINA_TOKEN_FILE", &self.token_file);
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("RUST_LOG");
        cmd.output().await.expect("Failed to execute CLI")
    }

    /// Run the CLI and expect success.
    pub async fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args).await;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Run the CLI and expect failure, returning stderr.
    pub async fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args).await;
        if output.status.success() {
            panic!("CLI command should have failed: {:?}", args);
        }
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}
