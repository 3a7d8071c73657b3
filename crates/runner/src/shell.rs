use serde::{Deserialize, Serialize};

/// Shell used to invoke the patching tool script.
///
/// Injectable so tests can exercise either platform's command line without
/// mocking OS detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shell {
    Windows,
    Unix,
}

impl Shell {
    /// Shell for the platform this process is running on.
    pub fn host() -> Self {
        if cfg!(windows) {
            Shell::Windows
        } else {
            Shell::Unix
        }
    }

    /// Leading argv entries for the shell invocation.
    ///
    /// The Unix login-shell flag (`-l`) is intentionally not passed.
    pub fn command(&self) -> Vec<String> {
        match self {
            Shell::Windows => vec!["cmd".to_string(), "/c".to_string()],
            Shell::Unix => vec!["/bin/sh".to_string()],
        }
    }

    /// Platform extension for the tool's entry script.
    pub fn script_ext(&self) -> &'static str {
        match self {
            Shell::Windows => ".bat",
            Shell::Unix => ".sh",
        }
    }

    /// Script filename for `base`, e.g. `patching-tool.sh`.
    pub fn script_name(&self, base: &str) -> String {
        format!("{base}{}", self.script_ext())
    }
}
