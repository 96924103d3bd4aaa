//! Campaign summary types and derived-metric helpers

use super::call::CallDirection;
use chrono::NaiveDate;

/// Campaign lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignStatus {
    Completed,
    Ongoing,
}

impl CampaignStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CampaignStatus::Completed => "completed",
            CampaignStatus::Ongoing => "ongoing",
        }
    }
}

/// Categorical result of a call attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOutcome {
    Connected,
    NoAnswer,
    Voicemail,
    Rejected,
    Other,
}

impl CallOutcome {
    pub fn all() -> Vec<CallOutcome> {
        vec![
            CallOutcome::Connected,
            CallOutcome::NoAnswer,
            CallOutcome::Voicemail,
            CallOutcome::Rejected,
            CallOutcome::Other,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            CallOutcome::Connected => "Connected",
            CallOutcome::NoAnswer => "No Answer",
            CallOutcome::Voicemail => "Voicemail",
            CallOutcome::Rejected => "Rejected",
            CallOutcome::Other => "Other",
        }
    }
}

/// Temperature rating of a generated lead
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadCategory {
    Hot,
    Warm,
    Cold,
}

impl LeadCategory {
    pub fn all() -> Vec<LeadCategory> {
        vec![LeadCategory::Hot, LeadCategory::Warm, LeadCategory::Cold]
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeadCategory::Hot => "Hot",
            LeadCategory::Warm => "Warm",
            LeadCategory::Cold => "Cold",
        }
    }
}

/// Flat metrics block driving the metric cards
#[derive(Debug, Clone)]
pub struct CampaignMetrics {
    pub total_calls: u64,
    pub total_duration_secs: u64,
    pub average_call_duration_secs: u64,
    pub total_contacts: u64,
    pub leads_generated: u64,
    /// Supplied as a precomputed constant, not derived in the UI
    pub conversion_rate_pct: u64,
    pub followups_scheduled: u64,
}

/// Per-outcome call counts
///
/// The sum of outcome counts need not equal `total_calls`.
#[derive(Debug, Clone)]
pub struct OutcomeCounts {
    pub connected: u64,
    pub no_answer: u64,
    pub voicemail: u64,
    pub rejected: u64,
    pub other: u64,
}

impl OutcomeCounts {
    pub fn get(&self, outcome: CallOutcome) -> u64 {
        match outcome {
            CallOutcome::Connected => self.connected,
            CallOutcome::NoAnswer => self.no_answer,
            CallOutcome::Voicemail => self.voicemail,
            CallOutcome::Rejected => self.rejected,
            CallOutcome::Other => self.other,
        }
    }
}

/// Per-category lead counts
///
/// The sum need not equal `leads_generated`.
#[derive(Debug, Clone)]
pub struct LeadCategoryCounts {
    pub hot: u64,
    pub warm: u64,
    pub cold: u64,
}

impl LeadCategoryCounts {
    pub fn get(&self, category: LeadCategory) -> u64 {
        match category {
            LeadCategory::Hot => self.hot,
            LeadCategory::Warm => self.warm,
            LeadCategory::Cold => self.cold,
        }
    }
}

/// Complete results summary for one campaign
#[derive(Debug, Clone)]
pub struct CampaignSummary {
    pub id: String,
    pub name: String,
    pub direction: CallDirection,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub status: CampaignStatus,
    pub metrics: CampaignMetrics,
    pub outcomes: OutcomeCounts,
    pub leads_by_category: LeadCategoryCounts,
}

/// Ratio of `count` over `total` for the proportional bars.
///
/// A zero denominator yields 0.0 and the result is clamped to 1.0 because
/// the outcome/lead sums are not guaranteed to stay within their totals
/// and `Gauge` rejects ratios outside 0.0..=1.0.
pub fn share(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 / total as f64).min(1.0)
}

/// Percentage label with one decimal, e.g. "53.3%"
pub fn percent_label(count: u64, total: u64) -> String {
    format!("{:.1}%", share(count, total) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_of_outcome_counts() {
        // connected 800 of 1500 total calls -> 53.33%
        let ratio = share(800, 1500);
        assert!((ratio - 0.5333).abs() < 0.001);
    }

    #[test]
    fn test_share_of_lead_counts() {
        // hot 100 of 300 leads -> 33.33%
        let ratio = share(100, 300);
        assert!((ratio - 0.3333).abs() < 0.001);
    }

    #[test]
    fn test_share_zero_denominator() {
        assert_eq!(share(10, 0), 0.0);
        assert_eq!(share(0, 0), 0.0);
    }

    #[test]
    fn test_share_is_clamped() {
        // counts may exceed the total; the gauge ratio must stay in range
        assert_eq!(share(2000, 1500), 1.0);
    }

    #[test]
    fn test_percent_label_formatting() {
        assert_eq!(percent_label(800, 1500), "53.3%");
        assert_eq!(percent_label(150, 300), "50.0%");
        assert_eq!(percent_label(0, 300), "0.0%");
    }

    #[test]
    fn test_outcome_counts_lookup_is_total() {
        let counts = OutcomeCounts {
            connected: 1,
            no_answer: 2,
            voicemail: 3,
            rejected: 4,
            other: 5,
        };
        let values: Vec<u64> = CallOutcome::all().iter().map(|o| counts.get(*o)).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }
}
