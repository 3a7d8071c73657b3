use std::path::PathBuf;

use crate::config::RunnerConfig;
use crate::error::ExecutionError;
use crate::launcher::{ProcessLauncher, ProcessSpec, TokioLauncher};
use crate::shell::Shell;

/// Base name of the tool's entry script; the platform extension comes from
/// [`Shell::script_name`].
const PATCHING_TOOL_SCRIPT_BASE: &str = "patching-tool";

/// Runs the patching tool once per [`run`](CommandRunner::run) call and
/// keeps the captured output of the most recent run.
///
/// The runner is re-runnable; each run overwrites the captured lines of the
/// previous one. It is not meant for concurrent use — `run` takes
/// `&mut self`, so one instance serializes its runs by construction.
pub struct CommandRunner {
    config: RunnerConfig,
    shell: Shell,
    launcher: Box<dyn ProcessLauncher>,
    options: Vec<String>,
    output_lines: Vec<String>,
    error_lines: Vec<String>,
}

impl CommandRunner {
    /// Runner for the host platform, spawning real processes.
    pub fn new(config: RunnerConfig) -> Self {
        Self {
            config,
            shell: Shell::host(),
            launcher: Box::new(TokioLauncher),
            options: Vec::new(),
            output_lines: Vec::new(),
            error_lines: Vec::new(),
        }
    }

    pub fn with_shell(mut self, shell: Shell) -> Self {
        self.shell = shell;
        self
    }

    pub fn with_launcher(mut self, launcher: Box<dyn ProcessLauncher>) -> Self {
        self.launcher = launcher;
        self
    }

    /// Options forwarded verbatim as trailing arguments to the script.
    /// `None` stores an empty list, never an absent one.
    pub fn set_options(&mut self, options: Option<Vec<String>>) {
        self.options = options.unwrap_or_default();
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Stdout of the most recent run, one entry per line.
    pub fn output_lines(&self) -> &[String] {
        &self.output_lines
    }

    pub fn has_output_lines(&self) -> bool {
        !self.output_lines.is_empty()
    }

    /// Stderr of the most recent run, one entry per line.
    pub fn error_lines(&self) -> &[String] {
        &self.error_lines
    }

    pub fn has_error_lines(&self) -> bool {
        !self.error_lines.is_empty()
    }

    /// Run the patching tool and wait for it to finish.
    ///
    /// A non-zero exit code fails the run, and so does any stderr output
    /// even when the exit code is zero. Captured lines are stored before
    /// the failure is raised, so they stay readable through the accessors.
    pub async fn run(&mut self) -> Result<(), ExecutionError> {
        tracing::info!("running patching tool command");

        self.output_lines.clear();
        self.error_lines.clear();

        let spec = self.resolve_spec()?;
        tracing::debug!(?spec, options = ?self.options, "resolved process spec");
        tracing::info!("running command : {}", spec.render());

        let output = self.launcher.launch(&spec).await?;

        self.output_lines = split_lines(&output.stdout);
        self.error_lines = split_lines(&output.stderr);

        tracing::info!(
            exit_code = output.exit_code,
            output_lines = self.output_lines.len(),
            error_lines = self.error_lines.len(),
            "patching tool process finished"
        );

        if output.exit_code != 0 || self.has_error_lines() {
            for line in &self.error_lines {
                tracing::error!("stderr: {line}");
            }
            let err = match self.error_lines.first() {
                Some(line) if !line.is_empty() => ExecutionError::CommandFailed(line.clone()),
                _ => ExecutionError::CommandFailedNoDetail,
            };
            tracing::error!(exit_code = output.exit_code, "{err}");
            return Err(err);
        }

        Ok(())
    }

    fn resolve_spec(&self) -> Result<ProcessSpec, ExecutionError> {
        let home = self.config.patching_tool_home();
        if !home.is_dir() {
            return Err(ExecutionError::HomeMissing(absolutize(home)));
        }

        let script_name = self.shell.script_name(PATCHING_TOOL_SCRIPT_BASE);
        let script_path = home.join(&script_name);
        if !script_path.is_file() {
            return Err(ExecutionError::ScriptMissing(absolutize(script_path)));
        }

        // The script is addressed by bare filename; the working directory
        // is the tool home.
        let mut argv = self.shell.command();
        argv.push(script_name);
        argv.extend(self.options.iter().cloned());
        let program = argv.remove(0);

        Ok(ProcessSpec {
            program,
            args: argv,
            current_dir: home,
        })
    }
}

fn split_lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::to_string)
        .collect()
}

fn absolutize(path: PathBuf) -> PathBuf {
    std::path::absolute(&path).unwrap_or(path)
}
