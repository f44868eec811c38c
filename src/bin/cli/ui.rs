use crate::app::{App, Command, Modal, NoticeKind};
use crate::editor::editor_ui::render_buffer;
use crate::menu::{MENUS, MenuEntry};
use crate::theme::{Theme, theme_for};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use unicode_width::UnicodeWidthStr;

pub fn ui(f: &mut Frame, app: &mut App) {
    let theme = theme_for(app.session.view());

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Menu bar
            Constraint::Min(1),    // Buffer
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_menu_bar(f, app, &theme, layout[0]);
    render_buffer(f, app, &theme, layout[1]);
    render_status_bar(f, app, &theme, layout[2]);

    if app.menu.open {
        render_menu_dropdown(f, app, &theme, layout[1]);
    }
    let area = f.area();
    if let Some(modal) = &app.modal {
        render_modal(f, modal, &theme, area);
    }
}

fn menu_title_width(title: &str) -> u16 {
    title.width() as u16 + 2
}

fn render_menu_bar(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let mut spans = Vec::new();
    for (idx, menu) in MENUS.iter().enumerate() {
        let style = if app.menu.open && app.menu.menu == idx {
            Style::default()
                .fg(theme.bar_bg)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.bar_text)
        };
        spans.push(Span::styled(format!(" {} ", menu.title), style));
    }
    spans.push(Span::styled(
        "  F10 menu",
        Style::default().fg(theme.gutter),
    ));
    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.bar_bg));
    f.render_widget(bar, area);
}

fn entry_text(entry: &MenuEntry, app: &App, width: usize) -> String {
    match entry {
        MenuEntry::Separator => "─".repeat(width),
        MenuEntry::Toggle { command, .. } => {
            let mark = if is_checked(*command, app) { "[x]" } else { "[ ]" };
            let label = format!("{} {}", mark, entry.label());
            pad_entry(&label, entry.shortcut(), width)
        }
        MenuEntry::Submenu { .. } => pad_entry(entry.label(), "▸", width),
        MenuEntry::Action { .. } => pad_entry(entry.label(), entry.shortcut(), width),
    }
}

fn pad_entry(label: &str, right: &str, width: usize) -> String {
    let gap = width.saturating_sub(label.width() + right.width()).max(1);
    format!("{}{}{}", label, " ".repeat(gap), right)
}

fn is_checked(command: Command, app: &App) -> bool {
    match command {
        Command::ToggleDarkMode => app.session.view().dark_mode,
        _ => false,
    }
}

fn entries_width(entries: &[MenuEntry]) -> usize {
    entries
        .iter()
        .map(|e| e.label().width() + e.shortcut().width() + 6)
        .max()
        .unwrap_or(10)
        .max(14)
}

fn render_entries(
    f: &mut Frame,
    app: &App,
    theme: &Theme,
    entries: &[MenuEntry],
    selected: usize,
    rect: Rect,
) {
    f.render_widget(Clear, rect);
    let inner_width = rect.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let style = if matches!(entry, MenuEntry::Separator) {
                Style::default().fg(theme.gutter)
            } else {
                Style::default().fg(theme.bar_text)
            };
            ListItem::new(entry_text(entry, app, inner_width)).style(style)
        })
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.gutter)),
        )
        .style(Style::default().bg(theme.bar_bg))
        .highlight_style(
            Style::default()
                .fg(theme.bar_bg)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        );
    f.render_stateful_widget(list, rect, &mut ListState::default().with_selected(Some(selected)));
}

fn render_menu_dropdown(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let menu = app.menu.current_menu();
    let x_offset: u16 = MENUS[..app.menu.menu]
        .iter()
        .map(|m| menu_title_width(m.title))
        .sum();
    let width = entries_width(menu.entries) as u16 + 2;
    let rect = Rect {
        x: area.x + x_offset,
        y: area.y,
        width,
        height: menu.entries.len() as u16 + 2,
    }
    .intersection(area);
    render_entries(f, app, theme, menu.entries, app.menu.entry, rect);

    if let (Some(entries), Some(selected)) = (app.menu.open_submenu_entries(), app.menu.submenu) {
        let sub_width = entries_width(entries) as u16 + 2;
        let sub_rect = Rect {
            x: rect.x + rect.width,
            y: rect.y + app.menu.entry as u16,
            width: sub_width,
            height: entries.len() as u16 + 2,
        }
        .intersection(area);
        render_entries(f, app, theme, entries, selected, sub_rect);
    }
}

fn notice_color(kind: NoticeKind, theme: &Theme) -> Color {
    match kind {
        NoticeKind::Info => theme.accent,
        NoticeKind::Warning => Color::Rgb(220, 160, 40),
        NoticeKind::Error => Color::Rgb(220, 60, 60),
        NoticeKind::Output => theme.bar_text,
    }
}

fn render_modal(f: &mut Frame, modal: &Modal, theme: &Theme, area: Rect) {
    match modal {
        Modal::Prompt {
            title,
            label,
            input,
            ..
        } => {
            let rect = fixed_height_rect(60, 6, area);
            f.render_widget(Clear, rect);
            let block = Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title))
                .border_style(Style::default().fg(theme.accent))
                .style(Style::default().fg(theme.bar_text).bg(theme.bar_bg));
            let inner = block.inner(rect);
            f.render_widget(block, rect);

            let width = inner.width as usize;
            // keep the tail of long paths visible
            let shown: String = {
                let chars: Vec<char> = input.chars().collect();
                let skip = chars.len().saturating_sub(width.saturating_sub(1));
                chars[skip..].iter().collect()
            };
            let lines = vec![
                Line::from(label.as_str()),
                Line::from(Span::styled(
                    shown.clone(),
                    Style::default().add_modifier(Modifier::UNDERLINED),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "[Enter] OK  [Esc] Cancel",
                    Style::default().fg(theme.gutter),
                )),
            ];
            f.render_widget(Paragraph::new(lines), inner);
            f.set_cursor_position((inner.x + shown.width() as u16, inner.y + 1));
        }
        Modal::Notice {
            kind,
            title,
            message,
        } => {
            let (percent_x, percent_y) = match kind {
                NoticeKind::Output => (80, 70),
                _ => (60, 30),
            };
            let rect = centered_rect(percent_x, percent_y, area);
            f.render_widget(Clear, rect);
            let color = notice_color(*kind, theme);
            let block = Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    format!(" {} ", title),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ))
                .border_style(Style::default().fg(color))
                .style(Style::default().fg(theme.bar_text).bg(theme.bar_bg));
            let inner = block.inner(rect);
            f.render_widget(block, rect);

            let width = (inner.width as usize).max(1);
            let mut lines: Vec<Line> = Vec::new();
            for paragraph in message.split('\n') {
                if paragraph.is_empty() {
                    lines.push(Line::from(""));
                    continue;
                }
                for wrapped in textwrap::wrap(paragraph, width) {
                    lines.push(Line::from(wrapped.into_owned()));
                }
            }
            let body_height = inner.height.saturating_sub(1) as usize;
            if lines.len() > body_height {
                let hidden = lines.len() - body_height + 1;
                lines.truncate(body_height.saturating_sub(1));
                lines.push(Line::from(Span::styled(
                    format!("… {} more lines", hidden),
                    Style::default().fg(theme.gutter),
                )));
            }
            while lines.len() < body_height {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                "[Enter] OK",
                Style::default().fg(theme.gutter),
            )));
            f.render_widget(Paragraph::new(lines), inner);
        }
    }
}

fn render_status_bar(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let (row, col) = app.session.cursor();
    let file = app
        .session
        .file_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "[No Name]".to_string());
    let view = app.session.view();
    let status_line = Line::from(vec![
        Span::styled(
            format!(" {} ", file),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "│ Ln {}, Col {} │ Font {}pt │ {} │ Run: {} ",
                row + 1,
                col + 1,
                view.font_size.get(),
                theme.name,
                app.runner.name()
            ),
            Style::default().fg(theme.bar_text),
        ),
    ]);
    let status = Paragraph::new(status_line).style(Style::default().bg(theme.bar_bg));
    f.render_widget(status, area);
}

fn fixed_height_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ]
            .as_ref(),
        )
        .split(r);

    let middle = popup_layout[1];

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(middle)[1]
}
