use crate::app::App;
use crate::editor::{char_width, display_char, display_width_until, line_number_width};
use crate::theme::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use runpad::editor::highlight::highlight::CommentRegion;

pub fn render_buffer(f: &mut Frame, app: &mut App, theme: &Theme, area: Rect) {
    let line_count = app.session.lines().len();
    let gutter_width = line_number_width(line_count);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(gutter_width as u16 + 1),
            Constraint::Min(1),
        ])
        .split(area);
    let text_area = chunks[1];
    let width = text_area.width as usize;
    let height = text_area.height as usize;

    let cursor = app.session.cursor();
    app.editor_view
        .ensure_cursor_visible(app.session.lines(), cursor, width, height);

    let scroll_row = app.editor_view.scroll_row;
    let scroll_col = app.editor_view.scroll_col;
    let visible_end = (scroll_row + height).min(line_count);

    let mut numbers = Vec::with_capacity(height);
    let mut text_lines = Vec::with_capacity(height);
    for row in scroll_row..visible_end {
        let number_style = if row == cursor.0 {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.gutter)
        };
        numbers.push(Line::from(Span::styled(
            format!("{:width$}", row + 1, width = gutter_width),
            number_style,
        )));

        let line = &app.session.lines()[row];
        let comment = app.session.highlighter().region_for_line(row);
        text_lines.push(Line::from(styled_line(line, comment, scroll_col, width, theme)));
    }

    let gutter = Paragraph::new(numbers)
        .block(
            Block::default()
                .borders(Borders::RIGHT)
                .border_style(Style::default().fg(theme.gutter)),
        )
        .alignment(Alignment::Right)
        .style(Style::default().bg(theme.bg));
    f.render_widget(gutter, chunks[0]);

    let body = Paragraph::new(text_lines).style(Style::default().fg(theme.text).bg(theme.bg));
    f.render_widget(body, text_area);

    if app.modal.is_none() && !app.menu.open {
        let line = app
            .session
            .lines()
            .get(cursor.0)
            .map(String::as_str)
            .unwrap_or("");
        let x = display_width_until(line, cursor.1).saturating_sub(scroll_col);
        let y = cursor.0.saturating_sub(scroll_row);
        f.set_cursor_position((text_area.x + x as u16, text_area.y + y as u16));
    }
}

/// Cuts the visible window out of one buffer line and splits it into plain
/// and comment spans.
pub fn styled_line(
    line: &str,
    comment: Option<&CommentRegion>,
    scroll_col: usize,
    width: usize,
    theme: &Theme,
) -> Vec<Span<'static>> {
    let plain = Style::default().fg(theme.text).bg(theme.bg);
    let commented = Style::default().fg(theme.comment).bg(theme.bg);

    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut current = String::new();
    let mut current_style = plain;
    let mut x = 0;

    for (idx, ch) in line.char_indices() {
        let Some(shown) = display_char(ch) else {
            continue;
        };
        let w = char_width(ch);
        if x < scroll_col {
            x += w;
            continue;
        }
        if x + w > scroll_col + width {
            break;
        }
        x += w;

        let style = match comment {
            Some(region) if idx >= region.start && idx < region.end => commented,
            _ => plain,
        };
        if style != current_style && !current.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut current), current_style));
        }
        current_style = style;
        current.push(shown);
    }
    if !current.is_empty() {
        spans.push(Span::styled(current, current_style));
    }
    spans
}
