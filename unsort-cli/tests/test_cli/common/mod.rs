use std::fs;
use std::path::Path;
use std::process::{ExitStatus, Stdio};

use tokio::io::AsyncWriteExt;

/// Ten digit lines, in order.
pub const DIGITS: &[u8] = b"0\n1\n2\n3\n4\n5\n6\n7\n8\n9\n";

/// `DIGITS` shuffled with seed 0.
pub const DIGITS_SEED_ZERO: &[u8] = b"3\n9\n2\n5\n4\n6\n1\n8\n7\n0\n";

/// Generate `count` distinct numbered lines.
pub fn numbered_lines(count: usize) -> Vec<u8> {
    (0..count)
        .flat_map(|i| format!("line {i:06}\n").into_bytes())
        .collect()
}

/// Split output into lines and sort them, for multiset comparisons.
pub fn sorted_lines(data: &[u8]) -> Vec<Vec<u8>> {
    let mut lines: Vec<Vec<u8>> = data
        .split(|b| *b == b'\n')
        .filter(|line| !line.is_empty())
        .map(<[u8]>::to_vec)
        .collect();
    lines.sort_unstable();
    lines
}

/// Output from running a binary command
#[derive(Eq, PartialEq)]
pub struct Output {
    pub status: ExitStatus,
    pub stdout_raw: Vec<u8>,
    pub stdout: String,
    pub stderr: String,
}

/// Shared test fixture utilities to keep filesystem interactions isolated
pub struct Fixture {
    root_dir: tempfile::TempDir,
}

impl Fixture {
    /// Create an empty fixture directory
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        Self {
            root_dir: tempfile::TempDir::new().unwrap(),
        }
    }

    /// Create fixture with single file
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created or if the fixture file
    /// cannot be written.
    pub fn with_file(name: &str, contents: &[u8]) -> Self {
        let fixture = Self::new();
        fixture.write(name, contents);
        fixture
    }

    /// Write (or replace) a file in the fixture
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write(&self, name: &str, contents: &[u8]) {
        fs::write(self.root_dir.path().join(name), contents).unwrap();
    }

    /// Get full path for a file in the fixture
    pub fn path(&self, name: &str) -> String {
        format!("{}/{}", self.root_dir.path().display(), name)
    }

    /// Check if a file exists in the fixture
    pub fn file_exists(&self, name: &str) -> bool {
        self.root_dir.path().join(name).exists()
    }

    /// Read a file from the fixture
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be read.
    pub fn read(&self, name: &str) -> Vec<u8> {
        fs::read(self.root_dir.path().join(name)).unwrap()
    }

    pub fn root_dir_path(&self) -> &Path {
        self.root_dir.path()
    }

    /// Run the `unsort` binary with the specified arguments
    pub async fn run_cargo(&mut self, args: &[&str]) -> Output {
        self.run_with_stdin_raw(args, None).await
    }

    /// Run the `unsort` binary with raw stdin bytes.
    ///
    /// # Panics
    ///
    /// Panics if the process cannot be spawned, if writing to stdin fails, or if
    /// awaiting process output fails.
    pub async fn run_with_stdin_raw(&mut self, args: &[&str], stdin: Option<&[u8]>) -> Output {
        let mut child = tokio::process::Command::new(env!("CARGO_BIN_EXE_unsort"))
            .args(args)
            .current_dir(self.root_dir.path())
            .env_remove("RUST_LOG")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .unwrap();

        if let Some(stdin_bytes) = stdin {
            if let Some(ref mut child_stdin) = child.stdin {
                child_stdin.write_all(stdin_bytes).await.unwrap_or_else(|err| {
                    // The child may exit before reading stdin (e.g. usage errors).
                    if err.kind() == std::io::ErrorKind::BrokenPipe {
                        return;
                    }
                    panic!("failed write to stdin ({} bytes): {err}", stdin_bytes.len());
                });
            }
        }

        // Drop stdin to send EOF to the child process
        drop(child.stdin.take());

        // Read stdout/stderr while waiting so large outputs cannot fill the pipes.
        let raw_output = child.wait_with_output().await.unwrap();
        Output {
            status: raw_output.status,
            stdout: String::from_utf8_lossy(&raw_output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&raw_output.stderr).into_owned(),
            stdout_raw: raw_output.stdout,
        }
    }
}
