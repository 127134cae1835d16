use crate::domain::{Band, Status};
use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Cursor cell / active field highlight
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Cell background for a saved status
pub fn status_style(status: Status) -> Style {
    match status {
        Status::Success => Style::default().fg(Color::Black).bg(Color::Green),
        Status::Failure => Style::default().fg(Color::White).bg(Color::Red),
        Status::Pending => Style::default().fg(Color::Yellow),
    }
}

/// Foreground color for a metric's band
pub fn band_style(band: Band) -> Style {
    let color = match band {
        Band::Success => Color::Green,
        Band::Warning => Color::Yellow,
        Band::Danger => Color::Red,
        Band::Neutral => Color::Gray,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Day cells that do not exist in a month
pub fn invalid_cell_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Weekly goal row label
pub fn weekly_label_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Monthly goal row label
pub fn monthly_label_style() -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD)
}

/// Today's cell marker
pub fn today_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Progress gauge style
pub fn gauge_style() -> Style {
    Style::default().fg(Color::Green).bg(Color::DarkGray)
}

/// Error message style
pub fn error_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}
