use std::path::{Path, PathBuf};
use std::process::Stdio;

use anyhow::{Context, Result};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Captured result of one external tool invocation. A nonzero exit code is
/// data, not an error: callers decide whether partial stdout is still
/// usable.
#[derive(Debug)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// How the process receives its batch input.
pub enum ToolInput {
    None,
    /// Payload written to the child's stdin, which is then closed.
    Stdin(String),
}

/// Run an external tool to completion and capture its output.
///
/// The call blocks the current task until the process exits. Only a spawn
/// failure (executable missing or not runnable) produces an `Err`; every
/// exit code maps to `Ok`.
pub async fn run_tool(program: &Path, args: &[String], input: ToolInput) -> Result<ToolOutput> {
    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    match input {
        ToolInput::Stdin(_) => cmd.stdin(Stdio::piped()),
        ToolInput::None => cmd.stdin(Stdio::null()),
    };

    let mut child = cmd
        .spawn()
        .with_context(|| format!("failed to spawn {}", program.display()))?;

    // Feed stdin from a separate task while stdout/stderr are drained below;
    // writing the whole payload first deadlocks once both pipes fill up.
    let writer = match input {
        ToolInput::Stdin(payload) => child.stdin.take().map(|mut stdin| {
            tokio::spawn(async move {
                if let Err(e) = stdin.write_all(payload.as_bytes()).await {
                    // the child closing stdin early is its call, not a fault
                    tracing::debug!("stdin write ended early: {e}");
                }
                // dropping the handle closes the pipe so the child sees EOF
            })
        }),
        ToolInput::None => None,
    };

    let out = child
        .wait_with_output()
        .await
        .with_context(|| format!("failed to wait for {}", program.display()))?;
    if let Some(writer) = writer {
        let _ = writer.await;
    }

    Ok(ToolOutput {
        stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        exit_code: out.status.code().unwrap_or(-1),
    })
}

/// Generate a path under the system temp dir that cannot collide with
/// concurrent jobs.
pub fn unique_temp_path(prefix: &str, ext: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{}-{:016x}.{}", prefix, rand::random::<u64>(), ext))
}

/// A temp file removed on drop, on every exit path.
pub struct TempPath {
    path: PathBuf,
}

impl TempPath {
    /// Create a temp file holding one line per entry.
    pub fn with_lines(prefix: &str, lines: &[String]) -> Result<Self> {
        let path = unique_temp_path(prefix, "txt");
        std::fs::write(&path, lines.join("\n"))
            .with_context(|| format!("failed to write temp file {}", path.display()))?;
        Ok(Self { path })
    }

    /// Claim a path for a file a tool will create as a sidecar. Nothing is
    /// written; removal on drop still applies if the tool produced it.
    pub fn reserve(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempPath {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// A temp directory removed recursively on drop.
pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn create(prefix: &str) -> Result<Self> {
        let path = std::env::temp_dir().join(format!("{}-{:016x}", prefix, rand::random::<u64>()));
        std::fs::create_dir_all(&path)
            .with_context(|| format!("failed to create temp dir {}", path.display()))?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when the directory holds at least one entry.
    pub fn has_entries(&self) -> bool {
        std::fs::read_dir(&self.path)
            .map(|mut it| it.next().is_some())
            .unwrap_or(false)
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn captures_stdout_and_exit_code() {
        let out = run_tool(&PathBuf::from("echo"), &["hello".to_string()], ToolInput::None)
            .await
            .unwrap();
        assert_eq!(out.stdout.trim(), "hello");
        assert_eq!(out.exit_code, 0);
        assert!(out.success());
    }

    #[tokio::test]
    async fn nonzero_exit_is_data_not_error() {
        let out = run_tool(&PathBuf::from("false"), &[], ToolInput::None)
            .await
            .unwrap();
        assert!(!out.success());
        assert_ne!(out.exit_code, 0);
    }

    #[tokio::test]
    async fn stdin_payload_reaches_the_child() {
        let out = run_tool(
            &PathBuf::from("cat"),
            &[],
            ToolInput::Stdin("a.example.com\nb.example.com".to_string()),
        )
        .await
        .unwrap();
        assert_eq!(out.stdout, "a.example.com\nb.example.com");
    }

    #[tokio::test]
    async fn large_stdin_payload_does_not_deadlock() {
        // Well past the OS pipe buffers on both stdin and stdout; cat only
        // keeps reading if its output is drained concurrently.
        let payload = "a.example.com\n".repeat(100_000);
        let out = tokio::time::timeout(
            std::time::Duration::from_secs(10),
            run_tool(&PathBuf::from("cat"), &[], ToolInput::Stdin(payload.clone())),
        )
        .await
        .expect("run_tool must not block on a full pipe")
        .unwrap();
        assert_eq!(out.stdout.len(), payload.len());
        assert!(out.success());
    }

    #[tokio::test]
    async fn child_that_ignores_stdin_still_completes() {
        let out = run_tool(
            &PathBuf::from("true"),
            &[],
            ToolInput::Stdin("x".repeat(1_000_000)),
        )
        .await
        .unwrap();
        assert!(out.success());
    }

    #[tokio::test]
    async fn missing_executable_is_an_error() {
        let res = run_tool(
            &PathBuf::from("/definitely/not/a/real/tool"),
            &[],
            ToolInput::None,
        )
        .await;
        assert!(res.is_err());
    }

    #[test]
    fn temp_file_is_removed_on_drop() {
        let kept;
        {
            let tmp = TempPath::with_lines("scout-test", &["one".to_string(), "two".to_string()])
                .unwrap();
            kept = tmp.path().to_path_buf();
            assert!(kept.exists());
            assert_eq!(std::fs::read_to_string(&kept).unwrap(), "one\ntwo");
        }
        assert!(!kept.exists());
    }

    #[test]
    fn temp_dir_is_removed_on_drop() {
        let kept;
        {
            let dir = TempDir::create("scout-test").unwrap();
            kept = dir.path().to_path_buf();
            assert!(kept.is_dir());
            assert!(!dir.has_entries());
            std::fs::write(dir.path().join("doc.pdf"), b"x").unwrap();
            assert!(dir.has_entries());
        }
        assert!(!kept.exists());
    }
}
