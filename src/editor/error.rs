pub mod error {
    use std::path::PathBuf;
    use thiserror::Error;

    /// Everything a user action on the editor can fail with. The UI turns each
    /// variant into a notification; none of them ends the session.
    #[derive(Debug, Error)]
    pub enum EditorError {
        /// Reading or writing a document failed.
        #[error("{}: {source}", .path.display())]
        Io {
            path: PathBuf,
            source: std::io::Error,
        },

        /// The user typed something that is not acceptable for the prompt.
        #[error("{0}")]
        InvalidInput(String),

        /// Executing the buffer failed, either to start or while running.
        #[error("{0}")]
        RuntimeFault(String),
    }

    impl EditorError {
        pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
            EditorError::Io {
                path: path.into(),
                source,
            }
        }
    }
}
