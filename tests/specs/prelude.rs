//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for driving the oq binary against an isolated
//! state directory.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{Duration, Instant};

/// Nothing in the specs should ever wait on a real network.
const OQ_HTTP_TIMEOUT_MS: &str = "500";
const OQ_PROBE_TIMEOUT_MS: &str = "200";

// Spec polling timeouts
pub const SPEC_POLL_INTERVAL_MS: u64 = 10;
pub const SPEC_WAIT_MAX_MS: u64 = 5000;

/// Returns the path to a binary, checking the llvm-cov target directory first,
/// then resolving relative to the test binary itself.
fn binary_path(name: &str) -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));

    let llvm_cov_path = manifest_dir.join("target/llvm-cov-target/debug").join(name);
    if llvm_cov_path.exists() {
        return llvm_cov_path;
    }

    let standard = manifest_dir.join("target/debug").join(name);
    if standard.exists() {
        return standard;
    }

    // target/debug/deps/specs-<hash> -> target/debug/
    if let Ok(exe) = std::env::current_exe() {
        if let Some(debug_dir) = exe.parent().and_then(|d| d.parent()) {
            let fallback = debug_dir.join(name);
            if fallback.exists() {
                return fallback;
            }
        }
    }

    standard
}

fn oq_binary() -> PathBuf {
    binary_path("oq")
}

/// High-level CLI builder for fluent test assertions
pub struct CliBuilder {
    args: Vec<String>,
    envs: Vec<(String, String)>,
    stdin: Option<String>,
}

impl CliBuilder {
    fn new(state_dir: &Path) -> Self {
        Self {
            args: Vec::new(),
            envs: vec![
                ("OQ_STATE_DIR".into(), state_dir.to_string_lossy().into()),
                ("OQ_HTTP_TIMEOUT_MS".into(), OQ_HTTP_TIMEOUT_MS.into()),
                ("OQ_PROBE_TIMEOUT_MS".into(), OQ_PROBE_TIMEOUT_MS.into()),
                ("NO_COLOR".into(), "1".into()),
            ],
            stdin: None,
        }
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.envs.push((
            key.to_string(),
            value.as_ref().to_string_lossy().to_string(),
        ));
        self
    }

    /// Feed this text to the command's stdin
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    /// Build the process without running it
    pub fn std_command(&self) -> Command {
        let mut cmd = Command::new(oq_binary());
        cmd.args(&self.args);

        // Parent settings must not leak into tests
        for var in ["OQ_PROBE_URL", "RUST_LOG", "XDG_STATE_HOME", "COLOR"] {
            cmd.env_remove(var);
        }
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd
    }

    fn output(self) -> Output {
        let mut cmd = assert_cmd::Command::from_std(self.std_command());
        if let Some(input) = &self.stdin {
            cmd.write_stdin(input.clone());
        }
        cmd.timeout(Duration::from_secs(30));
        cmd.output().expect("command should run")
    }

    /// Run and expect success (exit code 0)
    pub fn passes(self) -> RunAssert {
        let output = self.output();
        assert!(
            output.status.success(),
            "expected command to pass, got exit code {:?}\nstdout: {}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    /// Run and expect failure (non-zero exit code)
    pub fn fails(self) -> RunAssert {
        let output = self.output();
        assert!(
            !output.status.success(),
            "expected command to fail, but it passed\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }
}

/// Result of a CLI run for chaining assertions
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn code(&self) -> Option<i32> {
        self.output.status.code()
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout())
            .unwrap_or_else(|e| panic!("stdout is not JSON ({}):\n{}", e, self.stdout()))
    }

    /// Assert stdout equals expected exactly (with diff on failure).
    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout does not contain '{}'\nstdout: {}",
            expected,
            stdout
        );
        self
    }

    pub fn stdout_lacks(self, unexpected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            !stdout.contains(unexpected),
            "stdout should not contain '{}'\nstdout: {}",
            unexpected,
            stdout
        );
        self
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr does not contain '{}'\nstderr: {}",
            expected,
            stderr
        );
        self
    }
}

// =============================================================================
// Polling
// =============================================================================

/// Poll a condition until it returns true or timeout is reached.
pub fn wait_for<F>(timeout_ms: u64, mut condition: F) -> bool
where
    F: FnMut() -> bool,
{
    let start = Instant::now();
    let timeout = Duration::from_millis(timeout_ms);
    let poll_interval = Duration::from_millis(SPEC_POLL_INTERVAL_MS);

    while start.elapsed() < timeout {
        if condition() {
            return true;
        }
        std::thread::sleep(poll_interval);
    }
    false
}

// =============================================================================
// State directory
// =============================================================================

/// Isolated state directory for one test
pub struct Project {
    state_dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            state_dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn state_path(&self) -> &Path {
        self.state_dir.path()
    }

    /// Create a CLI builder bound to this state directory
    pub fn oq(&self) -> CliBuilder {
        CliBuilder::new(self.state_path())
    }

    /// Write a file under the state directory
    pub fn file(&self, name: &str, content: &str) {
        std::fs::write(self.state_path().join(name), content).unwrap();
    }

    pub fn read(&self, name: &str) -> Option<String> {
        std::fs::read_to_string(self.state_path().join(name)).ok()
    }

    /// The persisted queue as JSON (empty array when nothing is stored)
    pub fn persisted(&self) -> serde_json::Value {
        match self.read("offlineQueue") {
            Some(raw) => serde_json::from_str(&raw).unwrap(),
            None => serde_json::json!([]),
        }
    }

    /// Enqueue a POST and return its id
    pub fn enqueue(&self, url: &str) -> String {
        self.oq()
            .args(&["enqueue", "--url", url, "--body", "{}"])
            .passes()
            .stdout()
            .trim()
            .to_string()
    }
}

/// Loopback URL that refuses connections
pub const UNREACHABLE: &str = "http://127.0.0.1:9/orders";
