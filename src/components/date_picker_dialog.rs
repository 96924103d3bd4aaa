//! Calendar date picker dialog
//!
//! Month-grid picker for the call log date filter. The cursor moves by day
//! and week; picking a date stores it in the filter bar (which remains
//! presentational).

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::centered_popup;
use anyhow::Result;
use chrono::{Datelike, Days, Local, Months, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Calendar date picker dialog
pub struct DatePickerDialog {
    /// Day under the cursor; its month is the visible month
    pub cursor: NaiveDate,
}

impl Default for DatePickerDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl DatePickerDialog {
    pub fn new() -> Self {
        Self {
            cursor: Local::now().date_naive(),
        }
    }

    /// Position the cursor on the current filter value, or today
    pub fn set_initial(&mut self, current: Option<NaiveDate>) {
        self.cursor = current.unwrap_or_else(|| Local::now().date_naive());
    }

    fn move_days(&mut self, days: i64) {
        let moved = if days >= 0 {
            self.cursor.checked_add_days(Days::new(days as u64))
        } else {
            self.cursor.checked_sub_days(Days::new((-days) as u64))
        };
        if let Some(date) = moved {
            self.cursor = date;
        }
    }

    fn move_months(&mut self, forward: bool) {
        let moved = if forward {
            self.cursor.checked_add_months(Months::new(1))
        } else {
            self.cursor.checked_sub_months(Months::new(1))
        };
        if let Some(date) = moved {
            self.cursor = date;
        }
    }
}

/// Number of days in the cursor's month
fn days_in_month(year: i32, month: u32) -> u32 {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(31)
}

/// Build the month grid as rows of seven optional day numbers
///
/// Leading/trailing `None` cells pad the first and last week; weeks start
/// on Sunday.
fn month_grid(year: i32, month: u32) -> Vec<[Option<u32>; 7]> {
    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(d) => d,
        None => return Vec::new(),
    };
    let offset = first.weekday().num_days_from_sunday() as usize;
    let days = days_in_month(year, month);

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut slot = offset;

    for day in 1..=days {
        week[slot] = Some(day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
    }
    if slot > 0 {
        weeks.push(week);
    }

    weeks
}

impl Component for DatePickerDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('h') | KeyCode::Left => {
                self.move_days(-1);
                None
            }
            KeyCode::Char('l') | KeyCode::Right => {
                self.move_days(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_days(-7);
                None
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_days(7);
                None
            }
            KeyCode::Char('p') | KeyCode::PageUp => {
                self.move_months(false);
                None
            }
            KeyCode::Char('n') | KeyCode::PageDown => {
                self.move_months(true);
                None
            }
            KeyCode::Enter => Some(Action::SetDateFilter(self.cursor)),
            KeyCode::Char('c') => Some(Action::ClearDateFilter),
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 34, 14);
        frame.render_widget(Clear, popup_area);

        let mut lines = Vec::new();

        // Month header
        lines.push(Line::from(Span::styled(
            self.cursor.format("%B %Y").to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            "Su Mo Tu We Th Fr Sa",
            Style::default().fg(Color::DarkGray),
        )));

        for week in month_grid(self.cursor.year(), self.cursor.month()) {
            let mut spans = Vec::new();
            for slot in week {
                match slot {
                    Some(day) => {
                        let style = if day == self.cursor.day() {
                            Style::default()
                                .bg(Color::Blue)
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(Color::White)
                        };
                        spans.push(Span::styled(format!("{:>2}", day), style));
                    }
                    None => spans.push(Span::raw("  ")),
                }
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                " Enter ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Pick  "),
            Span::styled(
                " c ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Clear  "),
            Span::styled(
                " Esc ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Cancel"),
        ]));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(" Date Filter ")
                    .title_style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .alignment(ratatui::layout::Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn picker_at(year: i32, month: u32, day: u32) -> DatePickerDialog {
        let mut picker = DatePickerDialog::new();
        picker.set_initial(NaiveDate::from_ymd_opt(year, month, day));
        picker
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 6), 30);
        assert_eq!(days_in_month(2024, 2), 29); // leap year
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn test_month_grid_june_2024() {
        // June 1st 2024 is a Saturday
        let grid = month_grid(2024, 6);
        assert_eq!(grid[0], [None, None, None, None, None, None, Some(1)]);
        assert_eq!(grid.last().unwrap()[0], Some(30));
    }

    #[test]
    fn test_cursor_moves_across_month_boundary() {
        let mut picker = picker_at(2024, 6, 30);
        picker
            .handle_key_event(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(picker.cursor, NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
    }

    #[test]
    fn test_month_navigation() {
        let mut picker = picker_at(2024, 6, 14);
        picker
            .handle_key_event(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(picker.cursor, NaiveDate::from_ymd_opt(2024, 7, 14).unwrap());

        picker
            .handle_key_event(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(picker.cursor, NaiveDate::from_ymd_opt(2024, 6, 14).unwrap());
    }

    #[test]
    fn test_enter_emits_the_cursor_date() {
        let mut picker = picker_at(2024, 6, 14);
        let action = picker
            .handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(
            action,
            Some(Action::SetDateFilter(
                NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()
            ))
        );
    }

    #[test]
    fn test_clear_and_cancel() {
        let mut picker = picker_at(2024, 6, 14);
        let clear = picker
            .handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(clear, Some(Action::ClearDateFilter));

        let cancel = picker
            .handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(cancel, Some(Action::CloseModal));
    }
}
