//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! App is intentionally lean - it coordinates between components but
//! does not contain business logic itself.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_call_log_screen, draw_campaign_screen, CallDetailDialog, CallLogComponent,
    CallLogRenderContext, CampaignComponent, DatePickerDialog, HelpDialog, QuitDialog,
    SelectDialog, SelectTarget, SplashComponent,
};
use crate::components::call_log::{STATUS_FILTER_OPTIONS, TYPE_FILTER_OPTIONS};
use crate::config::Config;
use crate::model::{AppMode, DomainState, Modal, ModalStack, Screen};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// Currently visible screen
    pub active_screen: Screen,

    /// Domain state (the fixed mock dataset)
    pub domain: DomainState,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: Option<String>,

    /// chrono format string for timestamps
    pub date_format: String,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub call_log: CallLogComponent,
    pub campaign: CampaignComponent,
    pub call_detail_dialog: CallDetailDialog,
    pub date_picker: DatePickerDialog,
    pub type_filter_dialog: SelectDialog,
    pub status_filter_dialog: SelectDialog,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,

    /// Loaded config, if any
    pub config: Option<Config>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new App instance
    ///
    /// Config is optional; without one the call log screen and the default
    /// date format are used.
    pub fn new() -> App {
        let config = Config::load();
        let effective = config.clone().unwrap_or_default();

        let domain = DomainState::new();
        let mut call_log = CallLogComponent::new();
        call_log.select_first(domain.call_records.len());

        App {
            mode: AppMode::Splash,
            active_screen: effective.default_screen(),
            domain,
            modals: ModalStack::new(),
            should_quit: false,
            status_message: None,
            date_format: effective.date_format.clone(),
            splash: SplashComponent::new(),
            call_log,
            campaign: CampaignComponent,
            call_detail_dialog: CallDetailDialog::new(&effective.date_format),
            date_picker: DatePickerDialog::new(),
            type_filter_dialog: SelectDialog::new(SelectTarget::CallType),
            status_filter_dialog: SelectDialog::new(SelectTarget::Status),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
            config,
        }
    }

    fn next_screen(&mut self) {
        let screens = Screen::all();
        let current = screens
            .iter()
            .position(|s| *s == self.active_screen)
            .unwrap_or(0);
        self.active_screen = screens[(current + 1) % screens.len()];
    }

    fn previous_screen(&mut self) {
        let screens = Screen::all();
        let current = screens
            .iter()
            .position(|s| *s == self.active_screen)
            .unwrap_or(0);
        let prev = if current == 0 {
            screens.len() - 1
        } else {
            current - 1
        };
        self.active_screen = screens[prev];
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.splash.init()?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match self.mode {
            AppMode::Splash => self.splash.handle_key_event(key),
            AppMode::Running => {
                if let Some(modal) = self.modals.top().cloned() {
                    self.handle_modal_key_event(&modal, key)
                } else if self.active_screen == Screen::CallLogs && self.call_log.search_mode {
                    self.handle_search_key_event(key)
                } else {
                    match self.active_screen {
                        Screen::CallLogs => self.call_log.handle_key_event(key),
                        Screen::CampaignResults => self.campaign.handle_key_event(key),
                    }
                }
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        // Mouse interaction only applies to the call log table
        if self.mode == AppMode::Running
            && self.modals.is_empty()
            && self.active_screen == Screen::CallLogs
        {
            self.call_log.handle_mouse_event(mouse)
        } else {
            Ok(None)
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let record_count = self.domain.call_records.len();

        // Any user-driven action dismisses a pending status message
        match action {
            Action::Tick | Action::Resize(_, _) | Action::RequestExport => {}
            _ => self.status_message = None,
        }

        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.mode == AppMode::Splash && self.splash.is_complete() {
                    return Ok(Some(Action::SplashComplete));
                }
            }
            Action::SplashComplete => {
                self.mode = AppMode::Running;
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::NextItem => self.call_log.next(record_count),
            Action::PrevItem => self.call_log.previous(record_count),
            Action::FirstItem => self.call_log.select_first(record_count),
            Action::LastItem => self.call_log.select_last(record_count),
            Action::NextScreen => self.next_screen(),
            Action::PrevScreen => self.previous_screen(),

            // ─────────────────────────────────────────────────────────────────
            // Call Detail
            // ─────────────────────────────────────────────────────────────────
            Action::OpenCallDetail => {
                if self.call_log.open_detail(record_count) {
                    self.modals.push(Modal::CallDetail);
                }
            }
            Action::OpenCallDetailAt(row) => {
                if self.call_log.open_detail_at(row, record_count) {
                    self.modals.push(Modal::CallDetail);
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenDatePicker => {
                self.date_picker.set_initial(self.call_log.date_filter);
                self.modals.push(Modal::DatePicker);
            }
            Action::OpenTypeFilter => {
                let current = self.call_log.type_filter_index();
                self.type_filter_dialog
                    .set_options("Call Type", &TYPE_FILTER_OPTIONS, current);
                self.modals.push(Modal::TypeFilter {
                    selected_index: current,
                });
            }
            Action::OpenStatusFilter => {
                let current = self.call_log.status_filter_index();
                self.status_filter_dialog
                    .set_options("Status", &STATUS_FILTER_OPTIONS, current);
                self.modals.push(Modal::StatusFilter {
                    selected_index: current,
                });
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => {
                // Dismissing the detail overlay always returns the call log
                // to the no-selection state
                if matches!(self.modals.top(), Some(Modal::CallDetail)) {
                    self.call_log.close_detail();
                }
                self.modals.pop();
            }
            Action::ModalUp => {
                if let Some(Modal::TypeFilter { selected_index }) = self.modals.top_mut() {
                    self.type_filter_dialog.select_previous();
                    *selected_index = self.type_filter_dialog.selected_index;
                } else if let Some(Modal::StatusFilter { selected_index }) = self.modals.top_mut() {
                    self.status_filter_dialog.select_previous();
                    *selected_index = self.status_filter_dialog.selected_index;
                }
            }
            Action::ModalDown => {
                if let Some(Modal::TypeFilter { selected_index }) = self.modals.top_mut() {
                    self.type_filter_dialog.select_next();
                    *selected_index = self.type_filter_dialog.selected_index;
                } else if let Some(Modal::StatusFilter { selected_index }) = self.modals.top_mut() {
                    self.status_filter_dialog.select_next();
                    *selected_index = self.status_filter_dialog.selected_index;
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Filter Bar Values
            // ─────────────────────────────────────────────────────────────────
            Action::SetDateFilter(date) => {
                self.call_log.date_filter = Some(date);
                self.modals.pop();
            }
            Action::ClearDateFilter => {
                self.call_log.date_filter = None;
                self.modals.pop();
            }
            Action::SetTypeFilter(index) => {
                self.call_log.set_type_filter(index);
                self.modals.pop();
            }
            Action::SetStatusFilter(index) => {
                self.call_log.set_status_filter(index);
                self.modals.pop();
            }

            // ─────────────────────────────────────────────────────────────────
            // Search
            // ─────────────────────────────────────────────────────────────────
            Action::EnterSearchMode => self.call_log.enter_search_mode(),
            Action::ExitSearchMode => self.call_log.exit_search_mode(),
            Action::SearchInput(c) => self.call_log.search_input(c),
            Action::SearchBackspace => self.call_log.search_backspace(),

            // ─────────────────────────────────────────────────────────────────
            // Inert Surfaces
            // ─────────────────────────────────────────────────────────────────
            Action::RequestExport => {
                self.status_message =
                    Some("Export is not available in this preview".to_string());
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.mode {
            AppMode::Splash => self.splash.draw(frame, area)?,
            AppMode::Running => {
                match self.active_screen {
                    Screen::CallLogs => {
                        let ctx = CallLogRenderContext {
                            records: &self.domain.call_records,
                            date_format: &self.date_format,
                            status_message: self.status_message.as_deref(),
                        };
                        draw_call_log_screen(frame, area, &mut self.call_log, &ctx)?;
                    }
                    Screen::CampaignResults => {
                        draw_campaign_screen(
                            frame,
                            area,
                            &self.domain.campaign,
                            self.status_message.as_deref(),
                        )?;
                    }
                }

                // Draw modal overlay if active
                if let Some(modal) = self.modals.top().cloned() {
                    self.draw_modal(frame, area, &modal)?;
                }
            }
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::CallDetail => self.call_detail_dialog.handle_key_event(key),
            Modal::DatePicker => self.date_picker.handle_key_event(key),
            Modal::TypeFilter { .. } => self.type_filter_dialog.handle_key_event(key),
            Modal::StatusFilter { .. } => self.status_filter_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn handle_search_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::ExitSearchMode),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        };
        Ok(action)
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::CallDetail => {
                if let Some(record) = self
                    .call_log
                    .selected_record(&self.domain.call_records)
                    .cloned()
                {
                    self.call_detail_dialog
                        .draw_with_record(frame, area, &record)?;
                }
            }
            Modal::DatePicker => self.date_picker.draw(frame, area)?,
            Modal::TypeFilter { .. } => self.type_filter_dialog.draw(frame, area)?,
            Modal::StatusFilter { .. } => self.status_filter_dialog.draw(frame, area)?,
            Modal::Help => self.help_dialog.draw(frame, area)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::call::{CallDirection, CallStatus};
    use chrono::NaiveDate;

    fn running_app() -> App {
        let mut app = App::new();
        app.mode = AppMode::Running;
        app.active_screen = Screen::CallLogs;
        app
    }

    #[test]
    fn test_open_detail_shows_cursor_row() {
        let mut app = running_app();
        app.update(Action::NextItem).unwrap();
        app.update(Action::OpenCallDetail).unwrap();

        assert_eq!(app.modals.top(), Some(&Modal::CallDetail));
        let record = app.call_log.selected_record(&app.domain.call_records);
        assert_eq!(record, app.domain.call_records.get(1));
    }

    #[test]
    fn test_close_detail_returns_to_no_selection() {
        let mut app = running_app();
        app.update(Action::OpenCallDetail).unwrap();
        assert!(app.call_log.selected_call.is_some());

        app.update(Action::CloseModal).unwrap();
        assert_eq!(app.call_log.selected_call, None);
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_click_opens_clicked_row() {
        let mut app = running_app();
        app.update(Action::OpenCallDetailAt(3)).unwrap();

        assert_eq!(app.modals.top(), Some(&Modal::CallDetail));
        let record = app.call_log.selected_record(&app.domain.call_records);
        assert_eq!(record, app.domain.call_records.get(3));
    }

    #[test]
    fn test_click_out_of_range_is_ignored() {
        let mut app = running_app();
        let count = app.domain.call_records.len();
        app.update(Action::OpenCallDetailAt(count + 5)).unwrap();

        assert!(app.modals.is_empty());
        assert_eq!(app.call_log.selected_call, None);
    }

    #[test]
    fn test_type_filter_selector_flow() {
        let mut app = running_app();
        app.update(Action::OpenTypeFilter).unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::TypeFilter { selected_index: 0 }));

        app.update(Action::ModalDown).unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::TypeFilter { selected_index: 1 }));

        app.update(Action::SetTypeFilter(1)).unwrap();
        assert!(app.modals.is_empty());
        assert_eq!(app.call_log.type_filter, Some(CallDirection::Inbound));
    }

    #[test]
    fn test_status_filter_selector_flow() {
        let mut app = running_app();
        app.update(Action::OpenStatusFilter).unwrap();
        app.update(Action::SetStatusFilter(2)).unwrap();
        assert_eq!(app.call_log.status_filter, Some(CallStatus::Missed));
    }

    #[test]
    fn test_date_filter_set_and_clear() {
        let mut app = running_app();
        let date = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();

        app.update(Action::OpenDatePicker).unwrap();
        app.update(Action::SetDateFilter(date)).unwrap();
        assert_eq!(app.call_log.date_filter, Some(date));
        assert!(app.modals.is_empty());

        app.update(Action::OpenDatePicker).unwrap();
        app.update(Action::ClearDateFilter).unwrap();
        assert_eq!(app.call_log.date_filter, None);
    }

    #[test]
    fn test_screen_cycle() {
        let mut app = running_app();
        app.update(Action::NextScreen).unwrap();
        assert_eq!(app.active_screen, Screen::CampaignResults);

        app.update(Action::NextScreen).unwrap();
        assert_eq!(app.active_screen, Screen::CallLogs);

        app.update(Action::PrevScreen).unwrap();
        assert_eq!(app.active_screen, Screen::CampaignResults);
    }

    #[test]
    fn test_export_is_inert() {
        let mut app = running_app();
        app.update(Action::RequestExport).unwrap();
        // No modal, no state change beyond the status message
        assert!(app.modals.is_empty());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_export_notice_clears_on_next_action() {
        let mut app = running_app();
        app.update(Action::RequestExport).unwrap();

        // Ticks and resizes keep the notice visible
        app.update(Action::Tick).unwrap();
        app.update(Action::Resize(120, 40)).unwrap();
        assert!(app.status_message.is_some());

        app.update(Action::NextItem).unwrap();
        assert_eq!(app.status_message, None);
    }

    #[test]
    fn test_help_scroll_resets_on_reopen() {
        let mut app = running_app();
        app.update(Action::OpenHelp).unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::Help));

        app.help_dialog.scroll_offset = 7;
        app.update(Action::CloseModal).unwrap();
        app.update(Action::OpenHelp).unwrap();
        assert_eq!(app.help_dialog.scroll_offset, 0);
    }

    #[test]
    fn test_quit_flow() {
        let mut app = running_app();
        app.update(Action::OpenQuitDialog).unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));

        app.update(Action::ForceQuit).unwrap();
        assert!(app.should_quit);
    }
}
