//! Hardcoded mock dataset
//!
//! Both screens render from this fixed in-memory data. There is no fetch,
//! refresh, or mutation path anywhere in the application.

use super::call::{CallDirection, CallRecord, CallStatus};
use super::campaign::{
    CampaignMetrics, CampaignStatus, CampaignSummary, LeadCategoryCounts, OutcomeCounts,
};
use chrono::{DateTime, Local, NaiveDate, TimeZone};

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Local> {
    // The mock timestamps are all valid calendar dates
    Local
        .with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap_or_else(|| Local::now())
}

fn record(
    id: &str,
    date_time: DateTime<Local>,
    direction: CallDirection,
    contact_name: &str,
    phone: &str,
    duration: &str,
    status: CallStatus,
    campaign: &str,
    agent: &str,
    outcome: &str,
) -> CallRecord {
    CallRecord {
        id: id.to_string(),
        date_time,
        direction,
        contact_name: contact_name.to_string(),
        phone: phone.to_string(),
        duration: duration.to_string(),
        status,
        campaign: campaign.to_string(),
        agent: agent.to_string(),
        outcome: outcome.to_string(),
    }
}

/// The call log dataset
pub fn call_records() -> Vec<CallRecord> {
    vec![
        record(
            "1",
            ts(2024, 6, 14, 9, 12),
            CallDirection::Inbound,
            "John Smith",
            "+1 (555) 123-4567",
            "5:23",
            CallStatus::Completed,
            "Summer Sale 2024",
            "Alice Johnson",
            "Lead Generated",
        ),
        record(
            "2",
            ts(2024, 6, 14, 10, 47),
            CallDirection::Outbound,
            "Sarah Wilson",
            "+1 (555) 987-6543",
            "3:45",
            CallStatus::Completed,
            "Follow-up Campaign",
            "Bob Williams",
            "Sale Completed",
        ),
        record(
            "3",
            ts(2024, 6, 14, 11, 5),
            CallDirection::Outbound,
            "Miguel Alvarez",
            "+1 (555) 234-9981",
            "0:00",
            CallStatus::Missed,
            "Summer Sale 2024",
            "Alice Johnson",
            "No Contact",
        ),
        record(
            "4",
            ts(2024, 6, 14, 11, 32),
            CallDirection::Outbound,
            "Priya Patel",
            "+1 (555) 410-2287",
            "1:02",
            CallStatus::Voicemail,
            "Summer Sale 2024",
            "Carol Davis",
            "Voicemail Left",
        ),
        record(
            "5",
            ts(2024, 6, 14, 13, 18),
            CallDirection::Inbound,
            "Tom Becker",
            "+1 (555) 771-0034",
            "8:11",
            CallStatus::Completed,
            "Support Line",
            "Bob Williams",
            "Issue Resolved",
        ),
        record(
            "6",
            ts(2024, 6, 14, 14, 2),
            CallDirection::Outbound,
            "Linda Chao",
            "+1 (555) 662-8190",
            "0:14",
            CallStatus::Failed,
            "Follow-up Campaign",
            "Carol Davis",
            "Line Error",
        ),
        record(
            "7",
            ts(2024, 6, 14, 15, 26),
            CallDirection::Outbound,
            "Derek Osei",
            "+1 (555) 305-4412",
            "6:40",
            CallStatus::Completed,
            "Summer Sale 2024",
            "Alice Johnson",
            "Follow-up Scheduled",
        ),
        record(
            "8",
            ts(2024, 6, 14, 16, 55),
            CallDirection::Inbound,
            "Emma Novak",
            "+1 (555) 128-7753",
            "0:00",
            CallStatus::Missed,
            "Support Line",
            "Bob Williams",
            "No Contact",
        ),
    ]
}

/// The campaign shown on the results screen
pub fn campaign_summary() -> CampaignSummary {
    CampaignSummary {
        id: "1".to_string(),
        name: "Summer Sale 2024".to_string(),
        direction: CallDirection::Outbound,
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
        end_date: NaiveDate::from_ymd_opt(2024, 3, 31),
        status: CampaignStatus::Completed,
        metrics: CampaignMetrics {
            total_calls: 1500,
            total_duration_secs: 75_000,
            average_call_duration_secs: 180,
            total_contacts: 1200,
            leads_generated: 300,
            conversion_rate_pct: 25,
            followups_scheduled: 250,
        },
        outcomes: OutcomeCounts {
            connected: 800,
            no_answer: 400,
            voicemail: 200,
            rejected: 50,
            other: 50,
        },
        leads_by_category: LeadCategoryCounts {
            hot: 100,
            warm: 150,
            cold: 50,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_records_have_unique_ids() {
        let records = call_records();
        assert!(!records.is_empty());
        for (i, a) in records.iter().enumerate() {
            for b in records.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_campaign_metric_constants() {
        let campaign = campaign_summary();
        assert_eq!(campaign.metrics.total_calls, 1500);
        assert_eq!(campaign.metrics.leads_generated, 300);
        assert_eq!(campaign.metrics.conversion_rate_pct, 25);
        assert_eq!(campaign.metrics.followups_scheduled, 250);
    }

    #[test]
    fn test_campaign_outcome_constants() {
        let campaign = campaign_summary();
        assert_eq!(campaign.outcomes.connected, 800);
        assert_eq!(campaign.outcomes.no_answer, 400);
        assert_eq!(campaign.outcomes.voicemail, 200);
        assert_eq!(campaign.outcomes.rejected, 50);
        assert_eq!(campaign.outcomes.other, 50);
        assert_eq!(campaign.leads_by_category.hot, 100);
        assert_eq!(campaign.leads_by_category.warm, 150);
        assert_eq!(campaign.leads_by_category.cold, 50);
    }
}
