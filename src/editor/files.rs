pub mod files {
    use std::fs;
    use std::path::{Path, PathBuf};

    use crate::editor::error::error::EditorError;

    /// Extension appended by the save dialog when the user types a bare name.
    pub const DEFAULT_EXTENSION: &str = "txt";

    /// Reads a document as UTF-8 text. Invalid UTF-8 is reported as an I/O
    /// error rather than silently replaced.
    pub fn read_text(path: &Path) -> Result<String, EditorError> {
        fs::read_to_string(path).map_err(|e| EditorError::io(path, e))
    }

    /// Writes `content` to `path` exactly, replacing whatever was there.
    pub fn write_text(path: &Path, content: &str) -> Result<(), EditorError> {
        fs::write(path, content).map_err(|e| EditorError::io(path, e))
    }

    pub fn with_default_extension(path: PathBuf) -> PathBuf {
        if path.extension().is_some() {
            path
        } else {
            path.with_extension(DEFAULT_EXTENSION)
        }
    }
}
