//! Generic single-choice selector dialog
//!
//! Used for the call-type and status filter selectors. The dialog shows a
//! list of options with the current value marked; confirming emits the
//! filter action for the highlighted option.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Which filter this selector commits to on Enter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectTarget {
    CallType,
    Status,
}

/// Single-choice selector dialog
pub struct SelectDialog {
    pub title: String,
    pub options: Vec<String>,
    pub selected_index: usize,
    pub current_index: usize,
    pub target: SelectTarget,
    pub list_state: ListState,
}

impl Default for SelectDialog {
    fn default() -> Self {
        Self::new(SelectTarget::CallType)
    }
}

impl SelectDialog {
    pub fn new(target: SelectTarget) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            title: String::new(),
            options: Vec::new(),
            selected_index: 0,
            current_index: 0,
            target,
            list_state,
        }
    }

    /// Set options and highlight the currently active one
    pub fn set_options(&mut self, title: &str, options: &[&str], current_index: usize) {
        self.title = title.to_string();
        self.options = options.iter().map(|o| o.to_string()).collect();
        self.current_index = current_index.min(self.options.len().saturating_sub(1));
        self.selected_index = self.current_index;
        self.list_state.select(Some(self.selected_index));
    }

    /// Move the highlight up one option
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    /// Move the highlight down one option
    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.options.len() {
            self.selected_index += 1;
            self.list_state.select(Some(self.selected_index));
        }
    }
}

impl Component for SelectDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ModalUp),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ModalDown),
            KeyCode::Enter => Some(match self.target {
                SelectTarget::CallType => Action::SetTypeFilter(self.selected_index),
                SelectTarget::Status => Action::SetStatusFilter(self.selected_index),
            }),
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let width = self
            .options
            .iter()
            .map(|o| o.width())
            .max()
            .unwrap_or(10)
            .max(self.title.width()) as u16
            + 12;
        let height = self.options.len() as u16 + 5;

        let popup_area = centered_popup(area, width, height);
        frame.render_widget(Clear, popup_area);

        let items: Vec<ListItem> = self
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let marker = if i == self.current_index { "● " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Green)),
                    Span::styled(option.clone(), Style::default().fg(Color::White)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(format!(" {} ", self.title))
                    .title_style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let list_area = Rect::new(
            popup_area.x,
            popup_area.y,
            popup_area.width,
            popup_area.height.saturating_sub(2),
        );
        frame.render_stateful_widget(list, list_area, &mut self.list_state);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(
                " Enter ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Select  "),
            Span::styled(
                " Esc ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Cancel"),
        ]))
        .alignment(ratatui::layout::Alignment::Center);

        let help_area = Rect::new(
            popup_area.x,
            popup_area.y + popup_area.height.saturating_sub(2),
            popup_area.width,
            1,
        );
        frame.render_widget(help, help_area);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::call_log::{STATUS_FILTER_OPTIONS, TYPE_FILTER_OPTIONS};
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_set_options_highlights_current() {
        let mut dialog = SelectDialog::new(SelectTarget::CallType);
        dialog.set_options("Call Type", &TYPE_FILTER_OPTIONS, 2);
        assert_eq!(dialog.selected_index, 2);
        assert_eq!(dialog.current_index, 2);
        assert_eq!(dialog.options.len(), 3);
    }

    #[test]
    fn test_highlight_clamps_at_bounds() {
        let mut dialog = SelectDialog::new(SelectTarget::Status);
        dialog.set_options("Status", &STATUS_FILTER_OPTIONS, 0);

        dialog.select_previous();
        assert_eq!(dialog.selected_index, 0);

        for _ in 0..10 {
            dialog.select_next();
        }
        assert_eq!(dialog.selected_index, STATUS_FILTER_OPTIONS.len() - 1);
    }

    #[test]
    fn test_enter_emits_filter_action_for_target() {
        let mut dialog = SelectDialog::new(SelectTarget::CallType);
        dialog.set_options("Call Type", &TYPE_FILTER_OPTIONS, 0);
        dialog.select_next();

        let action = dialog
            .handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::SetTypeFilter(1)));

        let mut dialog = SelectDialog::new(SelectTarget::Status);
        dialog.set_options("Status", &STATUS_FILTER_OPTIONS, 3);
        let action = dialog
            .handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::SetStatusFilter(3)));
    }
}
