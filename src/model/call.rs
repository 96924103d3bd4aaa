//! Call record types
//!
//! A call record is an immutable row of the call log. Records come from the
//! fixed mock dataset and have no create/update lifecycle.

use chrono::{DateTime, Local};
use ratatui::style::Color;

/// Inbound or outbound call classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallDirection {
    Inbound,
    Outbound,
}

impl CallDirection {
    pub fn label(&self) -> &'static str {
        match self {
            CallDirection::Inbound => "inbound",
            CallDirection::Outbound => "outbound",
        }
    }

    /// Glyph shown in the Type column
    pub fn glyph(&self) -> &'static str {
        match self {
            CallDirection::Inbound => "↓",
            CallDirection::Outbound => "↑",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            CallDirection::Inbound => Color::Green,
            CallDirection::Outbound => Color::Blue,
        }
    }
}

/// Terminal status of a call attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallStatus {
    Completed,
    Missed,
    Failed,
    Voicemail,
}

impl CallStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CallStatus::Completed => "completed",
            CallStatus::Missed => "missed",
            CallStatus::Failed => "failed",
            CallStatus::Voicemail => "voicemail",
        }
    }

    /// Badge color for the status column and detail overlay
    pub fn color(&self) -> Color {
        match self {
            CallStatus::Completed => Color::Green,
            CallStatus::Missed => Color::Red,
            CallStatus::Failed => Color::Yellow,
            CallStatus::Voicemail => Color::Blue,
        }
    }

    pub fn parse(s: &str) -> Option<CallStatus> {
        match s {
            "completed" => Some(CallStatus::Completed),
            "missed" => Some(CallStatus::Missed),
            "failed" => Some(CallStatus::Failed),
            "voicemail" => Some(CallStatus::Voicemail),
            _ => None,
        }
    }
}

/// Color lookup over raw status strings, with a neutral default for
/// anything outside the closed set
pub fn status_color(status: &str) -> Color {
    CallStatus::parse(status)
        .map(|s| s.color())
        .unwrap_or(Color::Gray)
}

/// One row of the call log
#[derive(Debug, Clone, PartialEq)]
pub struct CallRecord {
    pub id: String,
    pub date_time: DateTime<Local>,
    pub direction: CallDirection,
    pub contact_name: String,
    pub phone: String,
    /// Pre-formatted duration, e.g. "5:23"
    pub duration: String,
    pub status: CallStatus,
    pub campaign: String,
    pub agent: String,
    pub outcome: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_colors_are_total() {
        assert_eq!(CallStatus::Completed.color(), Color::Green);
        assert_eq!(CallStatus::Missed.color(), Color::Red);
        assert_eq!(CallStatus::Failed.color(), Color::Yellow);
        assert_eq!(CallStatus::Voicemail.color(), Color::Blue);
    }

    #[test]
    fn test_status_color_falls_back_to_gray() {
        assert_eq!(status_color("completed"), Color::Green);
        assert_eq!(status_color("abandoned"), Color::Gray);
        assert_eq!(status_color(""), Color::Gray);
    }

    #[test]
    fn test_status_parse_round_trips_labels() {
        for status in [
            CallStatus::Completed,
            CallStatus::Missed,
            CallStatus::Failed,
            CallStatus::Voicemail,
        ] {
            assert_eq!(CallStatus::parse(status.label()), Some(status));
        }
        assert_eq!(CallStatus::parse("Completed"), None);
    }

    #[test]
    fn test_direction_glyphs() {
        assert_eq!(CallDirection::Inbound.glyph(), "↓");
        assert_eq!(CallDirection::Outbound.glyph(), "↑");
        assert_eq!(CallDirection::Inbound.color(), Color::Green);
        assert_eq!(CallDirection::Outbound.color(), Color::Blue);
    }
}
