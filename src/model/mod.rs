//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `DomainState` - Business/data state (call records, campaign summary)
//! - `Screen` / `AppMode` - Presentation state
//! - `ModalStack` - Modal overlay management

pub mod call;
pub mod campaign;
pub mod domain;
pub mod mock;
pub mod modal;
pub mod ui;

// Re-export commonly used types
pub use call::{CallDirection, CallRecord, CallStatus};
pub use campaign::{CallOutcome, CampaignSummary, LeadCategory};
pub use domain::DomainState;
pub use modal::{Modal, ModalStack};
pub use ui::{AppMode, Screen};
