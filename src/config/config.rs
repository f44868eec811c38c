pub mod config {
    use serde::{Deserialize, Serialize};
    use std::env;
    use std::path::{Path, PathBuf};
    use tracing::warn;

    use crate::editor::error::error::EditorError;
    use crate::editor::files::files::{read_text, write_text};
    use crate::editor::view::view::{FontSize, ViewSettings};

    pub const CONFIG_FILE: &str = ".runpad_config.json";
    pub const INTERPRETER_ENV: &str = "RUNPAD_INTERPRETER";

    /// The program that "Run Code" feeds the buffer to on stdin.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct InterpreterConfig {
        pub program: String,
        #[serde(default)]
        pub args: Vec<String>,
    }

    impl Default for InterpreterConfig {
        fn default() -> Self {
            Self {
                program: "python3".to_string(),
                args: vec!["-".to_string()],
            }
        }
    }

    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Config {
        pub font_size: FontSize,
        pub dark_mode: bool,
        pub interpreter: InterpreterConfig,
    }

    impl Config {
        pub fn path() -> PathBuf {
            if let Ok(home) = env::var("HOME") {
                PathBuf::from(home).join(CONFIG_FILE)
            } else {
                PathBuf::from(CONFIG_FILE)
            }
        }

        /// Loads the user's config, then applies environment overrides.
        pub fn load() -> Config {
            let mut config = Self::load_from(&Self::path());
            if let Ok(program) = env::var(INTERPRETER_ENV) {
                if !program.trim().is_empty() {
                    config.interpreter.program = program.trim().to_string();
                }
            }
            config
        }

        /// Missing or malformed files fall back to the defaults.
        pub fn load_from(path: &Path) -> Config {
            if !path.exists() {
                return Config::default();
            }
            match read_text(path) {
                Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                    warn!(path = %path.display(), error = %e, "ignoring malformed config");
                    Config::default()
                }),
                Err(e) => {
                    warn!(error = %e, "could not read config");
                    Config::default()
                }
            }
        }

        pub fn save_to(&self, path: &Path) -> Result<(), EditorError> {
            let json = serde_json::to_string_pretty(self)
                .map_err(|e| EditorError::InvalidInput(e.to_string()))?;
            write_text(path, &json)
        }

        pub fn view_settings(&self) -> ViewSettings {
            ViewSettings {
                font_size: self.font_size,
                dark_mode: self.dark_mode,
            }
        }

        pub fn apply_view(&mut self, view: &ViewSettings) {
            self.font_size = view.font_size;
            self.dark_mode = view.dark_mode;
        }
    }
}
