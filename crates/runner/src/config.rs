use std::path::{Path, PathBuf};

use crate::error::ExecutionError;

/// Environment variable naming the Liferay installation root.
pub const LIFERAY_HOME_VAR: &str = "LIFERAY_HOME";

/// Folder under the installation root that holds the patching tool.
const PATCHING_TOOL_HOME_DIR: &str = "patching-tool";

/// Resolved runner configuration, passed in explicitly rather than read
/// from ambient process state at run time.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    liferay_home: PathBuf,
}

impl RunnerConfig {
    pub fn new(liferay_home: impl Into<PathBuf>) -> Self {
        Self {
            liferay_home: liferay_home.into(),
        }
    }

    /// Read the installation root from [`LIFERAY_HOME_VAR`].
    pub fn from_env() -> Result<Self, ExecutionError> {
        match std::env::var_os(LIFERAY_HOME_VAR) {
            Some(home) if !home.is_empty() => Ok(Self::new(PathBuf::from(home))),
            _ => Err(ExecutionError::SettingUndefined(LIFERAY_HOME_VAR)),
        }
    }

    pub fn liferay_home(&self) -> &Path {
        &self.liferay_home
    }

    /// `<liferay home>/patching-tool`, the tool's home and the working
    /// directory for every run.
    pub fn patching_tool_home(&self) -> PathBuf {
        self.liferay_home.join(PATCHING_TOOL_HOME_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_requires_liferay_home() {
        unsafe { std::env::remove_var(LIFERAY_HOME_VAR) };
        let err = RunnerConfig::from_env().unwrap_err();
        assert_eq!(err.to_string(), "LIFERAY_HOME is undefined");

        unsafe { std::env::set_var(LIFERAY_HOME_VAR, "/opt/liferay") };
        let config = RunnerConfig::from_env().unwrap();
        assert_eq!(config.liferay_home(), Path::new("/opt/liferay"));
        assert_eq!(
            config.patching_tool_home(),
            Path::new("/opt/liferay").join("patching-tool")
        );
        unsafe { std::env::remove_var(LIFERAY_HOME_VAR) };
    }
}
