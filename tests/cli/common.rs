use std::path::PathBuf;
use tempfile::TempDir;

/// Test utilities shared by the CLI integration tests.
///
/// Each test runs the binary inside its own temporary directory so a
/// `.clarity-harness.toml` in the working tree never leaks into a test.
pub struct TestContext {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Result<Self, std::io::Error> {
        let temp_dir = TempDir::new()?;
        Ok(TestContext { temp_dir })
    }

    pub fn temp_path(&self) -> PathBuf {
        self.temp_dir.path().to_path_buf()
    }

    /// Create a file with the given content inside the temporary directory
    pub fn create_file(&self, name: &str, content: &str) -> Result<PathBuf, std::io::Error> {
        let file_path = self.temp_path().join(name);
        std::fs::write(&file_path, content)?;
        Ok(file_path)
    }

    /// The harness binary, running inside this context's directory
    pub fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = cmd();
        cmd.current_dir(self.temp_path());
        cmd
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new().expect("Failed to create test context")
    }
}

/// Get the clarity-harness command with colors disabled
#[allow(deprecated)]
pub fn cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("clarity-harness")
        .expect("Failed to find clarity-harness binary");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

pub const PATIENT: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
pub const OTHER_PARTY: &str = "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG";
pub const DATA_HASH: &str = "0x0123456789abcdef0123456789abcdef";

/// Parse the single JSON document a `--format json` command prints
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    let stdout = String::from_utf8(output.stdout.clone()).expect("Invalid UTF-8 in stdout");
    serde_json::from_str(stdout.trim()).expect("stdout is not valid JSON")
}
