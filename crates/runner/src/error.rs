use std::path::PathBuf;

use thiserror::Error;

/// Everything `CommandRunner::run` can fail with.
///
/// Configuration problems (missing setting, missing home folder or script)
/// are detected before any process is spawned. A spawned process that exits
/// non-zero, or that writes anything to stderr, fails the run as well.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("{0} is undefined")]
    SettingUndefined(&'static str),

    #[error("Patching tool home folder does not exist : {}", .0.display())]
    HomeMissing(PathBuf),

    #[error("Patching tool script does not exist : {}", .0.display())]
    ScriptMissing(PathBuf),

    #[error("Error running patching tool command : {0}")]
    CommandFailed(String),

    #[error("Error running patching tool command. See logs for more details.")]
    CommandFailedNoDetail,

    #[error("Error running patching tool command : {0}")]
    Io(#[from] std::io::Error),
}
