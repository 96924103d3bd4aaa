//! Call log screen component
//!
//! Renders the filter bar and the call record table, and owns the
//! selection state behind the call detail overlay. The filter bar controls
//! hold their values but never narrow the rendered dataset; the table always
//! shows every mock record.

use crate::action::Action;
use crate::component::Component;
use crate::components::chrome::{key_hint, render_help_bar, render_status_bar, render_tabs};
use crate::components::layout::calculate_call_log_layout;
use crate::model::call::{CallDirection, CallRecord, CallStatus};
use crate::model::Screen;
use anyhow::Result;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Options shown in the call-type filter selector
pub const TYPE_FILTER_OPTIONS: [&str; 3] = ["All Types", "Inbound", "Outbound"];

/// Options shown in the status filter selector
pub const STATUS_FILTER_OPTIONS: [&str; 5] =
    ["All Status", "Completed", "Missed", "Failed", "Voicemail"];

/// Call log screen component
///
/// Owns the table cursor, the opened-record pointer, and the filter bar
/// values.
pub struct CallLogComponent {
    /// Table cursor state
    pub table_state: TableState,

    /// Record opened in the detail overlay, `None` when the overlay is closed
    pub selected_call: Option<usize>,

    /// Date filter value, initially unset
    pub date_filter: Option<NaiveDate>,

    /// Call-type filter value, `None` means "All Types"
    pub type_filter: Option<CallDirection>,

    /// Status filter value, `None` means "All Status"
    pub status_filter: Option<CallStatus>,

    /// Free-text search query
    pub search_query: String,

    /// Whether search input mode is active
    pub search_mode: bool,

    /// Table area from the last draw, used to resolve mouse clicks
    pub table_area: Option<Rect>,
}

impl Default for CallLogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl CallLogComponent {
    pub fn new() -> Self {
        Self {
            table_state: TableState::default(),
            selected_call: None,
            date_filter: None,
            type_filter: None,
            status_filter: None,
            search_query: String::new(),
            search_mode: false,
            table_area: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Select the next row, wrapping to the first
    pub fn next(&mut self, record_count: usize) {
        if record_count == 0 {
            return;
        }
        let next = match self.table_state.selected() {
            Some(i) if i + 1 < record_count => i + 1,
            Some(_) => 0,
            None => 0,
        };
        self.table_state.select(Some(next));
    }

    /// Select the previous row, wrapping to the last
    pub fn previous(&mut self, record_count: usize) {
        if record_count == 0 {
            return;
        }
        let prev = match self.table_state.selected() {
            Some(0) | None => record_count - 1,
            Some(i) => i - 1,
        };
        self.table_state.select(Some(prev));
    }

    pub fn select_first(&mut self, record_count: usize) {
        if record_count > 0 {
            self.table_state.select(Some(0));
        } else {
            self.table_state.select(None);
        }
    }

    pub fn select_last(&mut self, record_count: usize) {
        if record_count > 0 {
            self.table_state.select(Some(record_count - 1));
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Detail Selection
    // ─────────────────────────────────────────────────────────────────────────

    /// Open the detail overlay for the row under the cursor
    pub fn open_detail(&mut self, record_count: usize) -> bool {
        match self.table_state.selected() {
            Some(idx) if idx < record_count => {
                self.selected_call = Some(idx);
                true
            }
            _ => false,
        }
    }

    /// Open the detail overlay for a specific row (mouse click)
    pub fn open_detail_at(&mut self, row: usize, record_count: usize) -> bool {
        if row < record_count {
            self.table_state.select(Some(row));
            self.selected_call = Some(row);
            true
        } else {
            false
        }
    }

    /// Clear the opened-record pointer when the overlay is dismissed
    pub fn close_detail(&mut self) {
        self.selected_call = None;
    }

    /// Record currently shown in the detail overlay
    pub fn selected_record<'a>(&self, records: &'a [CallRecord]) -> Option<&'a CallRecord> {
        self.selected_call.and_then(|idx| records.get(idx))
    }

    /// Resolve a click position to a table row index
    ///
    /// Data rows start below the table border and header row. The offset of
    /// the table cursor state accounts for scrolled-away rows. Clicked rows
    /// are two lines tall.
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.table_area?;
        if column < area.x || column >= area.x + area.width {
            return None;
        }
        let first_data_line = area.y + 2;
        if row < first_data_line || row >= area.y + area.height.saturating_sub(1) {
            return None;
        }
        let visible_row = ((row - first_data_line) / 2) as usize;
        Some(self.table_state.offset() + visible_row)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Filter Bar (presentational values only)
    // ─────────────────────────────────────────────────────────────────────────

    /// Index of the current type filter in `TYPE_FILTER_OPTIONS`
    pub fn type_filter_index(&self) -> usize {
        match self.type_filter {
            None => 0,
            Some(CallDirection::Inbound) => 1,
            Some(CallDirection::Outbound) => 2,
        }
    }

    /// Index of the current status filter in `STATUS_FILTER_OPTIONS`
    pub fn status_filter_index(&self) -> usize {
        match self.status_filter {
            None => 0,
            Some(CallStatus::Completed) => 1,
            Some(CallStatus::Missed) => 2,
            Some(CallStatus::Failed) => 3,
            Some(CallStatus::Voicemail) => 4,
        }
    }

    pub fn set_type_filter(&mut self, index: usize) {
        self.type_filter = match index {
            1 => Some(CallDirection::Inbound),
            2 => Some(CallDirection::Outbound),
            _ => None,
        };
    }

    pub fn set_status_filter(&mut self, index: usize) {
        self.status_filter = match index {
            1 => Some(CallStatus::Completed),
            2 => Some(CallStatus::Missed),
            3 => Some(CallStatus::Failed),
            4 => Some(CallStatus::Voicemail),
            _ => None,
        };
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────

    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
    }

    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
    }

    pub fn search_input(&mut self, c: char) {
        self.search_query.push(c);
    }

    pub fn search_backspace(&mut self) {
        self.search_query.pop();
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for CallLogComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Navigation
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') => Some(Action::FirstItem),
            KeyCode::Char('G') => Some(Action::LastItem),
            KeyCode::Tab => Some(Action::NextScreen),
            KeyCode::BackTab => Some(Action::PrevScreen),

            // Detail overlay
            KeyCode::Enter => Some(Action::OpenCallDetail),

            // Filter bar controls
            KeyCode::Char('d') => Some(Action::OpenDatePicker),
            KeyCode::Char('t') => Some(Action::OpenTypeFilter),
            KeyCode::Char('s') => Some(Action::OpenStatusFilter),
            KeyCode::Char('/') => Some(Action::EnterSearchMode),

            // Inert export button
            KeyCode::Char('x') => Some(Action::RequestExport),

            // Modals
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),

            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let action = match mouse.kind {
            MouseEventKind::ScrollDown => Some(Action::NextItem),
            MouseEventKind::ScrollUp => Some(Action::PrevItem),
            MouseEventKind::Down(MouseButton::Left) => self
                .row_at(mouse.column, mouse.row)
                .map(Action::OpenCallDetailAt),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_call_log_screen which takes full context
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the call log screen
pub struct CallLogRenderContext<'a> {
    pub records: &'a [CallRecord],
    pub date_format: &'a str,
    pub status_message: Option<&'a str>,
}

/// Draw the call log screen
pub fn draw_call_log_screen(
    frame: &mut Frame,
    area: Rect,
    call_log: &mut CallLogComponent,
    ctx: &CallLogRenderContext,
) -> Result<()> {
    let layout = calculate_call_log_layout(area);

    render_tabs(frame, layout.tabs, Screen::CallLogs);
    render_filter_bar(frame, layout.filters, call_log);
    render_table(frame, layout.table, call_log, ctx);
    render_status_bar(frame, layout.status, ctx.status_message);
    render_call_log_help_bar(frame, layout.help, call_log);

    Ok(())
}

fn render_filter_bar(frame: &mut Frame, area: Rect, call_log: &CallLogComponent) {
    let date_label = match call_log.date_filter {
        Some(date) => Span::styled(
            date.format("%b %e, %Y").to_string(),
            Style::default().fg(Color::Cyan),
        ),
        None => Span::styled("Pick a date", Style::default().fg(Color::DarkGray)),
    };

    let search_span = if call_log.search_mode {
        Span::styled(
            format!("{}_", call_log.search_query),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    } else if call_log.search_query.is_empty() {
        Span::styled(
            "Search by name or number",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(
            call_log.search_query.clone(),
            Style::default().fg(Color::Cyan),
        )
    };

    let values = Line::from(vec![
        Span::styled("Date: ", Style::default().fg(Color::DarkGray)),
        date_label,
        Span::raw("   "),
        Span::styled("Type: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            TYPE_FILTER_OPTIONS[call_log.type_filter_index()],
            Style::default().fg(Color::White),
        ),
        Span::raw("   "),
        Span::styled("Status: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            STATUS_FILTER_OPTIONS[call_log.status_filter_index()],
            Style::default().fg(Color::White),
        ),
        Span::raw("   "),
        Span::styled("Search: ", Style::default().fg(Color::DarkGray)),
        search_span,
    ]);

    let hints = Line::from(Span::styled(
        "d date  t type  s status  / search",
        Style::default().fg(Color::DarkGray),
    ));

    let paragraph = Paragraph::new(vec![values, hints]).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Filters ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn render_table(
    frame: &mut Frame,
    area: Rect,
    call_log: &mut CallLogComponent,
    ctx: &CallLogRenderContext,
) {
    // Remember where the table landed so clicks can be resolved later
    call_log.table_area = Some(area);

    let header = Row::new(
        [
            "Date & Time",
            "Type",
            "Contact",
            "Duration",
            "Status",
            "Campaign",
            "Agent",
            "Outcome",
        ]
        .into_iter()
        .map(|title| {
            Cell::from(Span::styled(
                title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
        }),
    )
    .height(1);

    let rows: Vec<Row> = ctx
        .records
        .iter()
        .map(|record| {
            let contact = Text::from(vec![
                Line::from(Span::styled(
                    truncate_to_width(&record.contact_name, 22),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    record.phone.clone(),
                    Style::default().fg(Color::DarkGray),
                )),
            ]);

            Row::new(vec![
                Cell::from(record.date_time.format(ctx.date_format).to_string()),
                Cell::from(Span::styled(
                    record.direction.glyph(),
                    Style::default().fg(record.direction.color()),
                )),
                Cell::from(contact),
                Cell::from(record.duration.clone()),
                Cell::from(Span::styled(
                    record.status.label(),
                    Style::default()
                        .fg(record.status.color())
                        .add_modifier(Modifier::BOLD),
                )),
                Cell::from(truncate_to_width(&record.campaign, 18)),
                Cell::from(truncate_to_width(&record.agent, 14)),
                Cell::from(record.outcome.clone()),
            ])
            .height(2)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(18),
            Constraint::Length(4),
            Constraint::Length(24),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(20),
            Constraint::Length(16),
            Constraint::Min(14),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Call Logs ({}) ", ctx.records.len()))
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .highlight_style(
        Style::default()
            .bg(Color::Blue)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("▶ ");

    frame.render_stateful_widget(table, area, &mut call_log.table_state);
}

fn render_call_log_help_bar(frame: &mut Frame, area: Rect, call_log: &CallLogComponent) {
    let hints = if call_log.search_mode {
        vec![
            key_hint("Esc", "Cancel", Color::Yellow),
            key_hint("Enter", "Confirm", Color::Green),
        ]
    } else {
        vec![
            key_hint("q", "Quit", Color::Yellow),
            key_hint("Enter", "Details", Color::Green),
            key_hint("Tab", "Screen", Color::Cyan),
            key_hint("j/k", "Rows", Color::Cyan),
            key_hint("x", "Export", Color::Magenta),
            key_hint("?", "Help", Color::White),
        ]
    };

    render_help_bar(frame, area, hints);
}

/// Truncate a string to a display width, appending an ellipsis
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    for c in s.chars() {
        if out.width() + 2 > max_width {
            break;
        }
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::mock;

    fn component_with_records() -> (CallLogComponent, Vec<CallRecord>) {
        let records = mock::call_records();
        let mut call_log = CallLogComponent::new();
        call_log.select_first(records.len());
        (call_log, records)
    }

    #[test]
    fn test_navigation_wraps() {
        let (mut call_log, records) = component_with_records();
        assert_eq!(call_log.table_state.selected(), Some(0));

        call_log.previous(records.len());
        assert_eq!(call_log.table_state.selected(), Some(records.len() - 1));

        call_log.next(records.len());
        assert_eq!(call_log.table_state.selected(), Some(0));
    }

    #[test]
    fn test_open_detail_points_at_cursor_row() {
        let (mut call_log, records) = component_with_records();
        call_log.next(records.len());
        call_log.next(records.len());

        assert!(call_log.open_detail(records.len()));
        let record = call_log.selected_record(&records);
        assert_eq!(record, records.get(2));
    }

    #[test]
    fn test_close_detail_clears_selection() {
        let (mut call_log, records) = component_with_records();
        call_log.open_detail(records.len());
        assert!(call_log.selected_call.is_some());

        call_log.close_detail();
        assert_eq!(call_log.selected_call, None);
        assert!(call_log.selected_record(&records).is_none());
    }

    #[test]
    fn test_open_detail_at_out_of_range() {
        let (mut call_log, records) = component_with_records();
        assert!(!call_log.open_detail_at(records.len(), records.len()));
        assert_eq!(call_log.selected_call, None);
    }

    #[test]
    fn test_filter_index_round_trip() {
        let (mut call_log, _) = component_with_records();
        assert_eq!(call_log.type_filter_index(), 0);

        call_log.set_type_filter(2);
        assert_eq!(call_log.type_filter, Some(CallDirection::Outbound));
        assert_eq!(call_log.type_filter_index(), 2);

        call_log.set_status_filter(4);
        assert_eq!(call_log.status_filter, Some(CallStatus::Voicemail));
        assert_eq!(call_log.status_filter_index(), 4);

        call_log.set_status_filter(0);
        assert_eq!(call_log.status_filter, None);
    }

    #[test]
    fn test_row_at_maps_click_to_row() {
        let (mut call_log, _) = component_with_records();
        call_log.table_area = Some(Rect::new(0, 6, 120, 20));

        // Rows are two lines tall and start below border + header
        assert_eq!(call_log.row_at(10, 8), Some(0));
        assert_eq!(call_log.row_at(10, 9), Some(0));
        assert_eq!(call_log.row_at(10, 10), Some(1));

        // Outside the table area
        assert_eq!(call_log.row_at(10, 5), None);
        assert_eq!(call_log.row_at(10, 26), None);
    }

    #[test]
    fn test_search_input_and_backspace() {
        let (mut call_log, _) = component_with_records();
        call_log.enter_search_mode();
        call_log.search_input('j');
        call_log.search_input('o');
        assert_eq!(call_log.search_query, "jo");

        call_log.search_backspace();
        assert_eq!(call_log.search_query, "j");

        call_log.exit_search_mode();
        assert!(!call_log.search_mode);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        let truncated = truncate_to_width("a very long contact name", 10);
        assert!(truncated.width() <= 10);
        assert!(truncated.ends_with('…'));
    }
}
