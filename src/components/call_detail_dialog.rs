//! Call detail overlay component
//!
//! Shows the full field set of the record opened from the call log table,
//! plus a static notes placeholder. Dismissing it always clears the
//! selection back to the no-selection state.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::centered_popup;
use crate::model::call::CallRecord;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Call detail overlay
#[derive(Default)]
pub struct CallDetailDialog {
    /// chrono format string for the timestamp field
    pub date_format: String,
}

impl CallDetailDialog {
    pub fn new(date_format: &str) -> Self {
        Self {
            date_format: date_format.to_string(),
        }
    }

    /// Draw the overlay for the given record
    pub fn draw_with_record(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        record: &CallRecord,
    ) -> Result<()> {
        let popup_area = centered_popup(area, 72, 18);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Call Details ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),
                Constraint::Length(4),
                Constraint::Length(1),
            ])
            .split(inner);

        // Two-column field grid
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[0]);

        let left = vec![
            field("Date & Time"),
            value(record.date_time.format(&self.date_format).to_string()),
            field("Contact"),
            Line::from(vec![
                Span::styled(
                    record.contact_name.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", record.phone),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            field("Status"),
            Line::from(Span::styled(
                record.status.label(),
                Style::default()
                    .fg(record.status.color())
                    .add_modifier(Modifier::BOLD),
            )),
            field("Agent"),
            value(record.agent.clone()),
        ];

        let right = vec![
            field("Type"),
            Line::from(vec![
                Span::styled(
                    format!("{} ", record.direction.glyph()),
                    Style::default().fg(record.direction.color()),
                ),
                Span::raw(record.direction.label()),
            ]),
            field("Duration"),
            value(record.duration.clone()),
            field("Campaign"),
            value(record.campaign.clone()),
            field("Outcome"),
            value(record.outcome.clone()),
        ];

        frame.render_widget(Paragraph::new(left), columns[0]);
        frame.render_widget(Paragraph::new(right), columns[1]);

        let notes = vec![
            field("Notes"),
            Line::from(Span::styled(
                "No notes available for this call.",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(notes), chunks[1]);

        let help = Line::from(vec![
            Span::styled(
                " Esc/q ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Close"),
        ]);
        frame.render_widget(
            Paragraph::new(help).alignment(ratatui::layout::Alignment::Center),
            chunks[2],
        );

        Ok(())
    }
}

fn field(name: &str) -> Line<'static> {
    Line::from(Span::styled(
        name.to_string(),
        Style::default().fg(Color::DarkGray),
    ))
}

fn value(text: String) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(Color::White)))
}

impl Component for CallDetailDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_with_record
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    #[test]
    fn test_any_dismiss_key_closes() {
        let mut dialog = CallDetailDialog::new("%b %e, %Y %H:%M");
        for code in [KeyCode::Esc, KeyCode::Char('q'), KeyCode::Enter] {
            let action = dialog
                .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
                .unwrap();
            assert_eq!(action, Some(Action::CloseModal));
        }
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mut dialog = CallDetailDialog::new("%b %e, %Y %H:%M");
        let action = dialog
            .handle_key_event(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, None);
    }
}
