use crate::app::{App, Command, Modal};
use crate::editor::editor_handlers::to_textarea_input;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Routes one key press: an open dialog takes it first, then the menu, then
/// the global shortcuts, and whatever is left goes to the buffer.
pub(crate) fn handle_key(app: &mut App, key: KeyEvent) {
    if app.modal.is_some() {
        handle_modal_key(app, key);
        return;
    }
    if app.menu.open {
        handle_menu_key(app, key);
        return;
    }
    if key.code == KeyCode::F(10) {
        app.menu.open();
        return;
    }
    if let Some(command) = shortcut_command(&key) {
        app.dispatch(command);
        return;
    }
    app.session.input(to_textarea_input(key));
}

pub(crate) fn shortcut_command(key: &KeyEvent) -> Option<Command> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::F(5) => Some(Command::RunCode),
        KeyCode::Char('n') if ctrl => Some(Command::New),
        KeyCode::Char('o') if ctrl => Some(Command::Open),
        KeyCode::Char('s') if ctrl => Some(Command::Save),
        KeyCode::Char('s') if alt => Some(Command::SaveAs),
        KeyCode::Char('q') if ctrl => Some(Command::Exit),
        KeyCode::Char('z') if ctrl => Some(Command::Undo),
        KeyCode::Char('y') if ctrl => Some(Command::Redo),
        KeyCode::Char('d') if ctrl => Some(Command::ToggleDarkMode),
        KeyCode::Up if ctrl => Some(Command::IncreaseFontSize),
        KeyCode::Down if ctrl => Some(Command::DecreaseFontSize),
        _ => None,
    }
}

fn handle_menu_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::F(10) => app.menu.back(),
        KeyCode::Left => app.menu.left(),
        KeyCode::Right => app.menu.right(),
        KeyCode::Up => app.menu.move_up(),
        KeyCode::Down => app.menu.move_down(),
        KeyCode::Enter => {
            if let Some(command) = app.menu.activate() {
                app.dispatch(command);
            }
        }
        _ => {}
    }
}

fn handle_modal_key(app: &mut App, key: KeyEvent) {
    match app.modal {
        Some(Modal::Prompt { .. }) => match key.code {
            KeyCode::Esc => app.close_modal(),
            KeyCode::Enter => app.submit_prompt(),
            KeyCode::Backspace => {
                if let Some(input) = app.prompt_input_mut() {
                    input.pop();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(input) = app.prompt_input_mut() {
                    input.push(c);
                }
            }
            _ => {}
        },
        Some(Modal::Notice { .. }) => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ')) {
                app.close_modal();
            }
        }
        None => {}
    }
}
