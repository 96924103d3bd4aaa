//! Shared screen chrome - tabs, status bar, and help-bar helpers

use crate::model::Screen;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Render the screen tabs (Call Logs / Campaign Results)
pub fn render_tabs(frame: &mut Frame, area: Rect, active: Screen) {
    let all_screens = Screen::all();
    let titles: Vec<&str> = all_screens.iter().map(|s| s.name()).collect();
    let selected = all_screens.iter().position(|s| *s == active).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::BOTTOM))
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

/// Render the one-line status bar
pub fn render_status_bar(frame: &mut Frame, area: Rect, status_message: Option<&str>) {
    let spans = match status_message {
        Some(message) => vec![Span::styled(
            format!(" {} ", message),
            Style::default().fg(Color::Yellow),
        )],
        None => vec![Span::styled(
            " callcenter-tui ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )],
    };

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Build a "key → description" pair for the help bar
pub fn key_hint(key: &'static str, desc: &'static str, color: Color) -> [Span<'static>; 2] {
    [
        Span::styled(
            format!(" {} ", key),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("{} ", desc)),
    ]
}

/// Render the bottom help bar from key/description pairs
pub fn render_help_bar(frame: &mut Frame, area: Rect, hints: Vec<[Span<'static>; 2]>) {
    let spans: Vec<Span> = hints.into_iter().flatten().collect();
    let paragraph =
        Paragraph::new(Line::from(spans)).alignment(ratatui::layout::Alignment::Left);
    frame.render_widget(paragraph, area);
}
