use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::process::Command;

/// Fully resolved child-process invocation, built fresh for every run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub program: String,
    pub args: Vec<String>,
    pub current_dir: PathBuf,
}

impl ProcessSpec {
    /// Command line flattened to a single string, for logs.
    pub fn render(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Raw outcome of a finished child process.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub exit_code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// Seam between spec resolution and actual process spawning, so tests can
/// substitute scripted outcomes for real executables.
#[async_trait]
pub trait ProcessLauncher: Send + Sync {
    async fn launch(&self, spec: &ProcessSpec) -> std::io::Result<ProcessOutput>;
}

#[async_trait]
impl<L: ProcessLauncher + ?Sized> ProcessLauncher for Arc<L> {
    async fn launch(&self, spec: &ProcessSpec) -> std::io::Result<ProcessOutput> {
        (**self).launch(spec).await
    }
}

/// Launcher backed by `tokio::process`.
pub struct TokioLauncher;

#[async_trait]
impl ProcessLauncher for TokioLauncher {
    async fn launch(&self, spec: &ProcessSpec) -> std::io::Result<ProcessOutput> {
        // The child inherits the parent environment unmodified. Both pipes
        // are drained concurrently while the child runs, so output larger
        // than the OS pipe buffers cannot deadlock the wait.
        let output = Command::new(&spec.program)
            .args(&spec.args)
            .current_dir(&spec.current_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await?;

        Ok(ProcessOutput {
            // No code means the child was killed by a signal.
            exit_code: output.status.code().unwrap_or(-1),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}
