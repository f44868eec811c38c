mod app;
mod command;
mod constants;
mod editor;
mod handlers;
mod logging;
mod menu;
mod theme;
mod ui;

use app::App;
use command::{CliAction, parse_cmd_args};
use constants::{USAGE, VERSION};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode},
};
use handlers::handle_key;
use ratatui::{Terminal, backend::CrosstermBackend};
use runpad::config::config::config::Config;
use runpad::editor::runner::runner::SubprocessRunner;
use std::{env, error::Error, io::Stdout, io::stdout, time::Duration};
use ui::ui;

fn main() -> Result<(), Box<dyn Error>> {
    let file = match parse_cmd_args(env::args().skip(1)) {
        Ok(CliAction::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Ok(CliAction::Version) => {
            println!("runpad {}", VERSION);
            return Ok(());
        }
        Ok(CliAction::Edit(file)) => file,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("\n{}", USAGE);
            std::process::exit(2);
        }
    };

    logging::setup_tracing();

    let config = Config::load();
    let runner = SubprocessRunner::from_config(&config.interpreter);
    let mut app = App::new(config, Some(Config::path()), Box::new(runner));
    if let Some(path) = file {
        app.open_path(path);
    }

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "editor loop failed");
    }
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let mut shown_title = String::new();

    while !app.should_quit {
        let title = app.title();
        if title != shown_title {
            execute!(terminal.backend_mut(), SetTitle(&title))?;
            shown_title = title;
        }

        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                handle_key(app, key);
            }
        }
    }

    tracing::info!("exiting");
    Ok(())
}
