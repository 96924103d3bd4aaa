//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use chrono::NaiveDate;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,
    /// Transition from splash to main app
    SplashComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to next row in the call log table
    NextItem,
    /// Move to previous row in the call log table
    PrevItem,
    /// Jump to first row
    FirstItem,
    /// Jump to last row
    LastItem,
    /// Switch to the next screen tab
    NextScreen,
    /// Switch to the previous screen tab
    PrevScreen,

    // ─────────────────────────────────────────────────────────────────────────
    // Call Detail
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the detail overlay for the row under the cursor
    OpenCallDetail,
    /// Open the detail overlay for a specific row (mouse click)
    OpenCallDetailAt(usize),

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open the calendar date picker
    OpenDatePicker,
    /// Open the call-type filter selector
    OpenTypeFilter,
    /// Open the status filter selector
    OpenStatusFilter,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
    /// Navigate up in the top modal
    ModalUp,
    /// Navigate down in the top modal
    ModalDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Filter Bar (presentational - the dataset itself is never narrowed)
    // ─────────────────────────────────────────────────────────────────────────
    /// Set the date filter from the date picker
    SetDateFilter(NaiveDate),
    /// Clear the date filter
    ClearDateFilter,
    /// Commit the highlighted option of the type filter selector
    SetTypeFilter(usize),
    /// Commit the highlighted option of the status filter selector
    SetStatusFilter(usize),

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────
    /// Enter search mode
    EnterSearchMode,
    /// Exit search mode
    ExitSearchMode,
    /// Add character to search query
    SearchInput(char),
    /// Remove last character from search query
    SearchBackspace,

    // ─────────────────────────────────────────────────────────────────────────
    // Inert Surfaces
    // ─────────────────────────────────────────────────────────────────────────
    /// Export button - present in the UI but not implemented
    RequestExport,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SplashComplete => write!(f, "SplashComplete"),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::FirstItem => write!(f, "FirstItem"),
            Action::LastItem => write!(f, "LastItem"),
            Action::NextScreen => write!(f, "NextScreen"),
            Action::PrevScreen => write!(f, "PrevScreen"),
            Action::OpenCallDetail => write!(f, "OpenCallDetail"),
            Action::OpenCallDetailAt(row) => write!(f, "OpenCallDetailAt({})", row),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenDatePicker => write!(f, "OpenDatePicker"),
            Action::OpenTypeFilter => write!(f, "OpenTypeFilter"),
            Action::OpenStatusFilter => write!(f, "OpenStatusFilter"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ModalUp => write!(f, "ModalUp"),
            Action::ModalDown => write!(f, "ModalDown"),
            Action::SetDateFilter(date) => write!(f, "SetDateFilter({})", date),
            Action::ClearDateFilter => write!(f, "ClearDateFilter"),
            Action::SetTypeFilter(idx) => write!(f, "SetTypeFilter({})", idx),
            Action::SetStatusFilter(idx) => write!(f, "SetStatusFilter({})", idx),
            Action::EnterSearchMode => write!(f, "EnterSearchMode"),
            Action::ExitSearchMode => write!(f, "ExitSearchMode"),
            Action::SearchInput(c) => write!(f, "SearchInput('{}')", c),
            Action::SearchBackspace => write!(f, "SearchBackspace"),
            Action::RequestExport => write!(f, "RequestExport"),
        }
    }
}
