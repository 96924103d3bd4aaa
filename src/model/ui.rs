//! UI state - presentation state separate from domain data

/// Screen selection in the main UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    CallLogs,
    CampaignResults,
}

impl Screen {
    pub fn all() -> Vec<Screen> {
        vec![Screen::CallLogs, Screen::CampaignResults]
    }

    pub fn name(&self) -> &str {
        match self {
            Screen::CallLogs => "Call Logs",
            Screen::CampaignResults => "Campaign Results",
        }
    }
}

/// Main application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Splash,
    Running,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_names() {
        assert_eq!(Screen::CallLogs.name(), "Call Logs");
        assert_eq!(Screen::CampaignResults.name(), "Campaign Results");
        assert_eq!(Screen::all().len(), 2);
    }
}
