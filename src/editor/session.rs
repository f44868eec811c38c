pub mod session {
    use std::path::{Path, PathBuf};
    use tracing::{debug, info};
    use tui_textarea::{Input, TextArea};

    use crate::editor::error::error::EditorError;
    use crate::editor::files::files::{read_text, write_text};
    use crate::editor::highlight::highlight::{CommentHighlighter, CommentRegion};
    use crate::editor::runner::runner::{CodeRunner, RunOutput};
    use crate::editor::view::view::{FontSize, ViewSettings};

    pub const APP_TITLE: &str = "Code Editor for Python";
    const PATH_TITLE_PREFIX: &str = "Code Editor";

    /// Undo/redo as a capability of the editable text component. The session
    /// keeps no history of its own.
    pub trait EditHistory {
        fn undo(&mut self) -> bool;
        fn redo(&mut self) -> bool;
    }

    impl EditHistory for TextArea<'_> {
        fn undo(&mut self) -> bool {
            TextArea::undo(self)
        }

        fn redo(&mut self) -> bool {
            TextArea::redo(self)
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum SaveOutcome {
        Saved(PathBuf),
        /// No file is bound yet; the caller has to ask for a path and call
        /// `save_as`.
        NeedsPath,
    }

    /// One open document: the buffer, the file it is bound to, and how it is
    /// shown.
    pub struct EditorSession {
        textarea: TextArea<'static>,
        file_path: Option<PathBuf>,
        view: ViewSettings,
        highlighter: CommentHighlighter,
    }

    impl EditorSession {
        pub fn new(view: ViewSettings) -> Self {
            Self {
                textarea: TextArea::default(),
                file_path: None,
                view,
                highlighter: CommentHighlighter::new(),
            }
        }

        /// The whole buffer. Lines are joined with `\n`, so text loaded from a
        /// file comes back byte for byte.
        pub fn text(&self) -> String {
            self.textarea.lines().join("\n")
        }

        pub fn lines(&self) -> &[String] {
            self.textarea.lines()
        }

        /// `(row, column)` of the cursor, the column counted in characters.
        pub fn cursor(&self) -> (usize, usize) {
            self.textarea.cursor()
        }

        pub fn file_path(&self) -> Option<&Path> {
            self.file_path.as_deref()
        }

        pub fn title(&self) -> String {
            match &self.file_path {
                Some(path) => format!("{} - {}", PATH_TITLE_PREFIX, path.display()),
                None => APP_TITLE.to_string(),
            }
        }

        pub fn view(&self) -> &ViewSettings {
            &self.view
        }

        pub fn comments(&self) -> &[CommentRegion] {
            self.highlighter.regions()
        }

        pub fn highlighter(&self) -> &CommentHighlighter {
            &self.highlighter
        }

        pub fn new_file(&mut self) {
            self.replace_text("");
            self.file_path = None;
            debug!("buffer cleared");
        }

        pub fn open(&mut self, path: &Path) -> Result<(), EditorError> {
            let content = read_text(path)?;
            self.replace_text(&content);
            self.file_path = Some(path.to_path_buf());
            info!(path = %path.display(), bytes = content.len(), "opened file");
            Ok(())
        }

        pub fn save(&mut self) -> Result<SaveOutcome, EditorError> {
            let Some(path) = self.file_path.clone() else {
                return Ok(SaveOutcome::NeedsPath);
            };
            write_text(&path, &self.text())?;
            info!(path = %path.display(), "saved file");
            Ok(SaveOutcome::Saved(path))
        }

        pub fn save_as(&mut self, path: &Path) -> Result<(), EditorError> {
            write_text(path, &self.text())?;
            self.file_path = Some(path.to_path_buf());
            info!(path = %path.display(), "saved file under new name");
            Ok(())
        }

        pub fn undo(&mut self) -> bool {
            let changed = EditHistory::undo(&mut self.textarea);
            self.highlight_syntax();
            changed
        }

        pub fn redo(&mut self) -> bool {
            let changed = EditHistory::redo(&mut self.textarea);
            self.highlight_syntax();
            changed
        }

        /// Feeds one keystroke to the text component, then re-highlights.
        /// Returns whether the buffer changed.
        pub fn input(&mut self, input: Input) -> bool {
            let modified = self.textarea.input(input);
            self.highlight_syntax();
            modified
        }

        /// Clears every comment mark and rescans the complete buffer.
        pub fn highlight_syntax(&mut self) {
            self.highlighter.rescan(self.textarea.lines());
        }

        /// Applies a font size typed by the user. Empty input changes nothing.
        pub fn set_font_size(&mut self, input: &str) -> Result<Option<FontSize>, EditorError> {
            let parsed = FontSize::parse(input)?;
            if let Some(size) = parsed {
                self.view.font_size = size;
                debug!(size = size.get(), "font size set");
            }
            Ok(parsed)
        }

        pub fn increase_font_size(&mut self) -> FontSize {
            self.view.increase_font_size()
        }

        pub fn decrease_font_size(&mut self) -> FontSize {
            self.view.decrease_font_size()
        }

        pub fn toggle_dark_mode(&mut self) -> bool {
            self.view.toggle_dark_mode()
        }

        /// Hands the entire buffer to `runner`. The buffer itself is never
        /// touched.
        pub fn run_code(&self, runner: &dyn CodeRunner) -> Result<RunOutput, EditorError> {
            let source = self.text();
            info!(runner = runner.name(), bytes = source.len(), "running buffer");
            runner.execute(&source)
        }

        fn replace_text(&mut self, text: &str) {
            self.textarea = TextArea::new(text.split('\n').map(String::from).collect());
            self.highlight_syntax();
        }
    }

    impl Default for EditorSession {
        fn default() -> Self {
            Self::new(ViewSettings::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::session::{APP_TITLE, EditorSession, SaveOutcome};
    use crate::editor::error::error::EditorError;
    use crate::editor::highlight::highlight::CommentRegion;
    use crate::editor::runner::runner::{CodeRunner, RunOutput};
    use crate::editor::view::view::FontSize;
    use std::cell::RefCell;
    use tempfile::TempDir;
    use tui_textarea::{Input, Key};

    fn key(key: Key) -> Input {
        Input {
            key,
            ctrl: false,
            alt: false,
            shift: false,
        }
    }

    fn type_text(session: &mut EditorSession, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                session.input(key(Key::Enter));
            } else {
                session.input(key(Key::Char(c)));
            }
        }
    }

    struct FakeRunner {
        result: Result<RunOutput, String>,
        seen: RefCell<Vec<String>>,
    }

    impl CodeRunner for FakeRunner {
        fn execute(&self, source: &str) -> Result<RunOutput, EditorError> {
            self.seen.borrow_mut().push(source.to_string());
            self.result.clone().map_err(EditorError::RuntimeFault)
        }

        fn name(&self) -> &str {
            "fake"
        }
    }

    #[test]
    fn test_save_as_then_open_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("doc.py");
        let text = "def f():\n    return 1  # one\n\n";

        let mut writer = EditorSession::default();
        type_text(&mut writer, text);
        assert_eq!(writer.text(), text);
        writer.save_as(&path).unwrap();

        let mut reader = EditorSession::default();
        reader.open(&path).unwrap();
        assert_eq!(reader.text(), text);
        assert_eq!(reader.file_path(), Some(path.as_path()));
    }

    #[test]
    fn test_open_keeps_crlf_and_trailing_newline() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dos.txt");
        std::fs::write(&path, "a\r\nb\r\n").unwrap();

        let mut session = EditorSession::default();
        session.open(&path).unwrap();
        assert_eq!(session.text(), "a\r\nb\r\n");
    }

    #[test]
    fn test_open_failure_leaves_session_alone() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = EditorSession::default();
        type_text(&mut session, "keep me");

        let result = session.open(&temp_dir.path().join("absent.txt"));
        assert!(matches!(result, Err(EditorError::Io { .. })));
        assert_eq!(session.text(), "keep me");
        assert!(session.file_path().is_none());
    }

    #[test]
    fn test_new_resets_everything() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.txt");
        std::fs::write(&path, "# hello").unwrap();

        let mut session = EditorSession::default();
        session.open(&path).unwrap();
        assert_eq!(session.title(), format!("Code Editor - {}", path.display()));

        session.new_file();
        assert_eq!(session.text(), "");
        assert!(session.file_path().is_none());
        assert!(session.comments().is_empty());
        assert_eq!(session.title(), APP_TITLE);
        assert_eq!(APP_TITLE, "Code Editor for Python");
    }

    #[test]
    fn test_save_without_path_needs_path() {
        let mut session = EditorSession::default();
        type_text(&mut session, "x");
        assert_eq!(session.save().unwrap(), SaveOutcome::NeedsPath);
    }

    #[test]
    fn test_save_writes_bound_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bound.txt");

        let mut session = EditorSession::default();
        type_text(&mut session, "first");
        session.save_as(&path).unwrap();
        type_text(&mut session, " second");

        assert_eq!(session.save().unwrap(), SaveOutcome::Saved(path.clone()));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first second");
    }

    #[test]
    fn test_title_follows_file_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("t.txt");
        let mut session = EditorSession::default();
        session.save_as(&path).unwrap();
        assert_eq!(session.title(), format!("Code Editor - {}", path.display()));
    }

    #[test]
    fn test_undo_and_redo_delegate_to_text_component() {
        let mut session = EditorSession::default();
        type_text(&mut session, "a");

        assert!(session.undo());
        assert_eq!(session.text(), "");
        assert!(session.redo());
        assert_eq!(session.text(), "a");
    }

    #[test]
    fn test_highlight_recomputed_after_each_keystroke() {
        let mut session = EditorSession::default();
        type_text(&mut session, "x #");
        assert_eq!(
            session.comments(),
            &[CommentRegion { line: 0, start: 2, end: 3 }]
        );

        session.input(key(Key::Backspace));
        assert!(session.comments().is_empty());

        type_text(&mut session, "# c");
        assert_eq!(
            session.comments(),
            &[CommentRegion { line: 0, start: 2, end: 5 }]
        );
    }

    #[test]
    fn test_set_font_size() {
        let mut session = EditorSession::default();
        let original = session.view().font_size;

        assert!(matches!(
            session.set_font_size("-2"),
            Err(EditorError::InvalidInput(_))
        ));
        assert!(matches!(
            session.set_font_size("big"),
            Err(EditorError::InvalidInput(_))
        ));
        assert_eq!(session.view().font_size, original);

        assert_eq!(session.set_font_size("").unwrap(), None);
        assert_eq!(session.view().font_size, original);

        session.set_font_size("20").unwrap();
        assert_eq!(session.view().font_size, FontSize::new(20).unwrap());
    }

    #[test]
    fn test_run_code_sends_whole_buffer() {
        let runner = FakeRunner {
            result: Ok(RunOutput::default()),
            seen: RefCell::new(Vec::new()),
        };
        let mut session = EditorSession::default();
        type_text(&mut session, "a = 1\nprint(a)");

        session.run_code(&runner).unwrap();
        assert_eq!(*runner.seen.borrow(), vec!["a = 1\nprint(a)".to_string()]);
    }

    #[test]
    fn test_run_code_fault_leaves_buffer_unchanged() {
        let runner = FakeRunner {
            result: Err("ZeroDivisionError: division by zero".to_string()),
            seen: RefCell::new(Vec::new()),
        };
        let mut session = EditorSession::default();
        type_text(&mut session, "x = 1/0");

        let result = session.run_code(&runner);
        assert!(matches!(result, Err(EditorError::RuntimeFault(_))));
        assert_eq!(session.text(), "x = 1/0");
    }
}
