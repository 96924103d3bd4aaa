//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod call_detail_dialog;
pub mod call_log;
pub mod campaign;
pub mod chrome;
pub mod date_picker_dialog;
pub mod help_dialog;
pub mod layout;
pub mod quit_dialog;
pub mod select_dialog;
pub mod splash;

pub use call_detail_dialog::CallDetailDialog;
pub use call_log::{draw_call_log_screen, CallLogComponent, CallLogRenderContext};
pub use campaign::{draw_campaign_screen, CampaignComponent};
pub use date_picker_dialog::DatePickerDialog;
pub use help_dialog::HelpDialog;
pub use layout::{calculate_call_log_layout, calculate_campaign_layout, centered_popup};
pub use quit_dialog::QuitDialog;
pub use select_dialog::{SelectDialog, SelectTarget};
pub use splash::SplashComponent;
