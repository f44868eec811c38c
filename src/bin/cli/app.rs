use crate::constants::SAVED_MESSAGE;
use crate::editor::EditorView;
use crate::menu::MenuState;
use runpad::config::config::config::Config;
use runpad::editor::error::error::EditorError;
use runpad::editor::files::files::with_default_extension;
use runpad::editor::runner::runner::{CodeRunner, RunOutput};
use runpad::editor::session::session::{EditorSession, SaveOutcome};
use std::path::PathBuf;
use tracing::{info, warn};

/// Everything the menus and shortcuts can ask for.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    New,
    Open,
    Save,
    SaveAs,
    Exit,
    Undo,
    Redo,
    RunCode,
    ToggleDarkMode,
    IncreaseFontSize,
    DecreaseFontSize,
    SetFontSize,
}

impl Command {
    #[cfg(test)]
    pub const ALL: &'static [Command] = &[
        Command::New,
        Command::Open,
        Command::Save,
        Command::SaveAs,
        Command::Exit,
        Command::Undo,
        Command::Redo,
        Command::RunCode,
        Command::ToggleDarkMode,
        Command::IncreaseFontSize,
        Command::DecreaseFontSize,
        Command::SetFontSize,
    ];
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
    Output,
}

impl NoticeKind {
    pub fn title(self) -> &'static str {
        match self {
            NoticeKind::Info => "Info",
            NoticeKind::Warning => "Warning",
            NoticeKind::Error => "Error",
            NoticeKind::Output => "Output",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PromptPurpose {
    OpenPath,
    SavePath,
    FontSize,
}

#[derive(Clone, PartialEq, Debug)]
pub enum Modal {
    Prompt {
        purpose: PromptPurpose,
        title: String,
        label: String,
        input: String,
    },
    Notice {
        kind: NoticeKind,
        title: String,
        message: String,
    },
}

pub struct App {
    pub session: EditorSession,
    pub runner: Box<dyn CodeRunner>,
    pub config: Config,
    /// Where view changes are persisted. `None` keeps them in memory only.
    pub config_path: Option<PathBuf>,
    pub menu: MenuState,
    pub modal: Option<Modal>,
    pub editor_view: EditorView,
    pub should_quit: bool,
}

impl App {
    pub(crate) fn new(
        config: Config,
        config_path: Option<PathBuf>,
        runner: Box<dyn CodeRunner>,
    ) -> Self {
        Self {
            session: EditorSession::new(config.view_settings()),
            runner,
            config,
            config_path,
            menu: MenuState::default(),
            modal: None,
            editor_view: EditorView::default(),
            should_quit: false,
        }
    }

    pub(crate) fn title(&self) -> String {
        self.session.title()
    }

    pub(crate) fn dispatch(&mut self, command: Command) {
        info!(?command, "dispatch");
        match command {
            Command::New => {
                self.session.new_file();
                self.editor_view.reset();
            }
            Command::Open => self.choose_open_path(),
            Command::Save => match self.session.save() {
                Ok(SaveOutcome::Saved(_)) => self.notify_titled(NoticeKind::Info, "Save", SAVED_MESSAGE),
                Ok(SaveOutcome::NeedsPath) => self.choose_save_path(),
                Err(e) => self.report(e),
            },
            Command::SaveAs => self.choose_save_path(),
            Command::Exit => self.should_quit = true,
            Command::Undo => {
                self.session.undo();
            }
            Command::Redo => {
                self.session.redo();
            }
            Command::RunCode => self.run_code(),
            Command::ToggleDarkMode => {
                self.session.toggle_dark_mode();
                self.persist_view();
            }
            Command::IncreaseFontSize => {
                self.session.increase_font_size();
                self.persist_view();
            }
            Command::DecreaseFontSize => {
                self.session.decrease_font_size();
                self.persist_view();
            }
            Command::SetFontSize => {
                self.prompt_string(PromptPurpose::FontSize, "Font Size", "Enter Font Size:")
            }
        }
    }

    pub(crate) fn choose_open_path(&mut self) {
        self.prompt_string(PromptPurpose::OpenPath, "Open", "File to open:");
    }

    pub(crate) fn choose_save_path(&mut self) {
        self.prompt_string(PromptPurpose::SavePath, "Save As", "Save to:");
    }

    pub(crate) fn prompt_string(&mut self, purpose: PromptPurpose, title: &str, label: &str) {
        let input = match (purpose, self.session.file_path()) {
            (PromptPurpose::SavePath, Some(path)) => path.display().to_string(),
            _ => String::new(),
        };
        self.modal = Some(Modal::Prompt {
            purpose,
            title: title.to_string(),
            label: label.to_string(),
            input,
        });
    }

    pub(crate) fn notify(&mut self, kind: NoticeKind, message: &str) {
        self.notify_titled(kind, kind.title(), message);
    }

    pub(crate) fn notify_titled(&mut self, kind: NoticeKind, title: &str, message: &str) {
        self.modal = Some(Modal::Notice {
            kind,
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    pub(crate) fn prompt_input_mut(&mut self) -> Option<&mut String> {
        match &mut self.modal {
            Some(Modal::Prompt { input, .. }) => Some(input),
            _ => None,
        }
    }

    pub(crate) fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Enter in a prompt. A blank path is treated like cancelling; the font
    /// size answer goes through untrimmed so whitespace alone is rejected.
    pub(crate) fn submit_prompt(&mut self) {
        let Some(Modal::Prompt { purpose, input, .. }) = self.modal.take() else {
            return;
        };
        let answer = input.trim();
        match purpose {
            PromptPurpose::OpenPath if !answer.is_empty() => self.open_path(PathBuf::from(answer)),
            PromptPurpose::SavePath if !answer.is_empty() => {
                self.save_to(with_default_extension(PathBuf::from(answer)))
            }
            PromptPurpose::FontSize => match self.session.set_font_size(&input) {
                Ok(Some(_)) => self.persist_view(),
                Ok(None) => {}
                Err(e) => self.report(e),
            },
            _ => {}
        }
    }

    pub(crate) fn open_path(&mut self, path: PathBuf) {
        match self.session.open(&path) {
            Ok(()) => self.editor_view.reset(),
            Err(e) => self.report(e),
        }
    }

    fn save_to(&mut self, path: PathBuf) {
        match self.session.save_as(&path) {
            Ok(()) => self.notify_titled(NoticeKind::Info, "Save", SAVED_MESSAGE),
            Err(e) => self.report(e),
        }
    }

    fn run_code(&mut self) {
        match self.session.run_code(self.runner.as_ref()) {
            Ok(output) => {
                let text = format_run_output(&output);
                if !text.is_empty() {
                    self.notify(NoticeKind::Output, &text);
                }
            }
            Err(e) => self.report(e),
        }
    }

    /// Turns an error from a user action into a dialog.
    fn report(&mut self, error: EditorError) {
        warn!(error = %error, "command failed");
        match error {
            EditorError::InvalidInput(message) => {
                self.notify_titled(NoticeKind::Warning, "Invalid Font Size", &message)
            }
            other => self.notify(NoticeKind::Error, &format!("An error occurred: {}", other)),
        }
    }

    fn persist_view(&mut self) {
        self.config.apply_view(self.session.view());
        if let Some(path) = &self.config_path {
            if let Err(e) = self.config.save_to(path) {
                warn!(error = %e, "could not save config");
            }
        }
    }
}

fn format_run_output(output: &RunOutput) -> String {
    let mut text = output.stdout.trim_end().to_string();
    let stderr = output.stderr.trim_end();
    if !stderr.is_empty() {
        if !text.is_empty() {
            text.push_str("\n\nSTDERR:\n");
        }
        text.push_str(stderr);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use runpad::editor::view::view::FontSize;
    use tempfile::TempDir;
    use tui_textarea::{Input, Key};

    struct FakeRunner(Result<RunOutput, String>);

    impl CodeRunner for FakeRunner {
        fn execute(&self, _source: &str) -> Result<RunOutput, EditorError> {
            self.0.clone().map_err(EditorError::RuntimeFault)
        }

        fn name(&self) -> &str {
            "fake"
        }
    }

    fn app_with(runner: FakeRunner) -> App {
        App::new(Config::default(), None, Box::new(runner))
    }

    fn app() -> App {
        app_with(FakeRunner(Ok(RunOutput::default())))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.session.input(Input {
                key: Key::Char(c),
                ctrl: false,
                alt: false,
                shift: false,
            });
        }
    }

    fn answer_prompt(app: &mut App, answer: &str) {
        let input = app.prompt_input_mut().expect("a prompt is open");
        input.clear();
        input.push_str(answer);
        app.submit_prompt();
    }

    fn prompt_purpose(app: &App) -> Option<PromptPurpose> {
        match &app.modal {
            Some(Modal::Prompt { purpose, .. }) => Some(*purpose),
            _ => None,
        }
    }

    fn notice(app: &App) -> Option<(NoticeKind, String)> {
        match &app.modal {
            Some(Modal::Notice { kind, message, .. }) => Some((*kind, message.clone())),
            _ => None,
        }
    }

    #[test]
    fn test_first_save_asks_for_path_once() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("first.py");
        let mut app = app();
        type_text(&mut app, "print(1)");

        app.dispatch(Command::Save);
        assert_eq!(prompt_purpose(&app), Some(PromptPurpose::SavePath));
        answer_prompt(&mut app, path.to_str().unwrap());
        assert_eq!(
            notice(&app),
            Some((NoticeKind::Info, SAVED_MESSAGE.to_string()))
        );
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "print(1)");

        app.close_modal();
        type_text(&mut app, "!");
        app.dispatch(Command::Save);
        assert_eq!(prompt_purpose(&app), None);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "print(1)!");
    }

    #[test]
    fn test_save_as_applies_default_extension() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app();
        type_text(&mut app, "text");

        app.dispatch(Command::SaveAs);
        answer_prompt(&mut app, temp_dir.path().join("notes").to_str().unwrap());

        let expected = temp_dir.path().join("notes.txt");
        assert_eq!(app.session.file_path(), Some(expected.as_path()));
        assert!(expected.exists());
    }

    #[test]
    fn test_cancelled_prompts_change_nothing() {
        let mut app = app();
        type_text(&mut app, "keep");

        app.dispatch(Command::Open);
        app.close_modal();
        app.dispatch(Command::SaveAs);
        answer_prompt(&mut app, "   ");

        assert!(app.modal.is_none());
        assert_eq!(app.session.text(), "keep");
        assert!(app.session.file_path().is_none());
    }

    #[test]
    fn test_open_failure_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app();

        app.dispatch(Command::Open);
        answer_prompt(&mut app, temp_dir.path().join("nope.txt").to_str().unwrap());

        let (kind, message) = notice(&app).unwrap();
        assert_eq!(kind, NoticeKind::Error);
        assert!(message.starts_with("An error occurred: "));
        assert!(!app.should_quit);
    }

    #[test]
    fn test_new_clears_buffer_and_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.py");
        std::fs::write(&path, "# x").unwrap();
        let mut app = app();
        app.open_path(path);

        app.dispatch(Command::New);
        assert_eq!(app.session.text(), "");
        assert!(app.session.file_path().is_none());
        assert_eq!(app.title(), "Code Editor for Python");
    }

    #[test]
    fn test_run_fault_is_reported_and_session_survives() {
        let mut app = app_with(FakeRunner(Err(
            "ZeroDivisionError: division by zero".to_string(),
        )));
        type_text(&mut app, "x = 1/0");

        app.dispatch(Command::RunCode);
        assert_eq!(
            notice(&app),
            Some((
                NoticeKind::Error,
                "An error occurred: ZeroDivisionError: division by zero".to_string()
            ))
        );
        assert_eq!(app.session.text(), "x = 1/0");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_run_output_is_shown() {
        let mut app = app_with(FakeRunner(Ok(RunOutput {
            stdout: "42\n".to_string(),
            stderr: String::new(),
        })));
        app.dispatch(Command::RunCode);
        assert_eq!(notice(&app), Some((NoticeKind::Output, "42".to_string())));
    }

    #[test]
    fn test_silent_run_shows_nothing() {
        let mut app = app();
        app.dispatch(Command::RunCode);
        assert!(app.modal.is_none());
    }

    #[test]
    fn test_invalid_font_size_warns() {
        let mut app = app();
        let before = app.session.view().font_size;

        for bad in ["0", "-1", "twelve", "   "] {
            app.dispatch(Command::SetFontSize);
            answer_prompt(&mut app, bad);
            let (kind, message) = notice(&app).unwrap();
            assert_eq!(kind, NoticeKind::Warning);
            assert_eq!(message, "Font size must be a positive integer.");
            assert_eq!(app.session.view().font_size, before);
        }

        app.dispatch(Command::SetFontSize);
        answer_prompt(&mut app, "30");
        assert!(app.modal.is_none());
        assert_eq!(app.session.view().font_size, FontSize::new(30).unwrap());
    }

    #[test]
    fn test_view_changes_are_persisted() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("cfg.json");
        let mut app = App::new(
            Config::default(),
            Some(config_path.clone()),
            Box::new(FakeRunner(Ok(RunOutput::default()))),
        );

        app.dispatch(Command::ToggleDarkMode);
        app.dispatch(Command::IncreaseFontSize);
        let saved = Config::load_from(&config_path);
        assert!(saved.dark_mode);
        assert_eq!(saved.font_size.get(), 13);

        app.dispatch(Command::ToggleDarkMode);
        assert!(!Config::load_from(&config_path).dark_mode);
    }

    #[test]
    fn test_exit_sets_quit_flag() {
        let mut app = app();
        app.dispatch(Command::Exit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_format_run_output_joins_streams() {
        let output = RunOutput {
            stdout: "out\n".to_string(),
            stderr: "warn\n".to_string(),
        };
        assert_eq!(format_run_output(&output), "out\n\nSTDERR:\nwarn");
    }
}
