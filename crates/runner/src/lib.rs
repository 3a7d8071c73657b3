//! Local invocation of the Liferay patching tool as a child process.
//!
//! The caller supplies option strings, invokes [`CommandRunner::run`], and
//! reads back the captured stdout/stderr lines or the raised failure.

pub mod config;
pub mod error;
pub mod launcher;
pub mod runner;
pub mod shell;

pub use config::RunnerConfig;
pub use error::ExecutionError;
pub use launcher::{ProcessLauncher, ProcessOutput, ProcessSpec, TokioLauncher};
pub use runner::CommandRunner;
pub use shell::Shell;
