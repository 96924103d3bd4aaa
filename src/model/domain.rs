//! Domain state - business/data state separate from UI concerns

use super::call::CallRecord;
use super::campaign::CampaignSummary;
use super::mock;

/// Domain state containing all business data
///
/// Everything here is sourced from the fixed mock dataset at startup and
/// never mutated afterwards.
pub struct DomainState {
    /// All call records shown in the call log table
    pub call_records: Vec<CallRecord>,

    /// The campaign shown on the results screen
    pub campaign: CampaignSummary,
}

impl Default for DomainState {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainState {
    /// Create the domain state from the mock dataset
    pub fn new() -> Self {
        Self {
            call_records: mock::call_records(),
            campaign: mock::campaign_summary(),
        }
    }
}
