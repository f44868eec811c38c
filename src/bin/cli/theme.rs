use ratatui::style::Color;
use runpad::editor::view::view::{COMMENT_COLOR, Rgb, ViewSettings};

#[derive(Clone)]
pub struct Theme {
    pub name: &'static str,
    pub text: Color,
    pub bg: Color,
    pub comment: Color,
    pub accent: Color,
    pub bar_bg: Color,
    pub bar_text: Color,
    pub gutter: Color,
}

pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Buffer colors come from the view settings; the chrome around the buffer
/// follows the same light/dark choice.
pub fn theme_for(view: &ViewSettings) -> Theme {
    let colors = view.colors();
    let (name, accent, bar_bg, bar_text, gutter) = if view.dark_mode {
        (
            "Dark",
            Color::Rgb(92, 136, 255),
            Color::Rgb(40, 36, 36),
            Color::Rgb(220, 220, 220),
            Color::Rgb(110, 110, 110),
        )
    } else {
        (
            "Light",
            Color::Rgb(0, 90, 180),
            Color::Rgb(225, 225, 225),
            Color::Rgb(20, 20, 20),
            Color::Rgb(150, 150, 150),
        )
    };
    Theme {
        name,
        text: to_color(colors.foreground),
        bg: to_color(colors.background),
        comment: to_color(COMMENT_COLOR),
        accent,
        bar_bg,
        bar_text,
        gutter,
    }
}
