//! Campaign results screen component
//!
//! Pure render: metric cards from the campaign metrics block and labeled
//! proportional bars for outcome and lead-category breakdowns. The screen
//! holds no interactive state of its own.

use crate::action::Action;
use crate::component::Component;
use crate::components::chrome::{key_hint, render_help_bar, render_status_bar, render_tabs};
use crate::components::layout::calculate_campaign_layout;
use crate::model::campaign::{
    percent_label, share, CallOutcome, CampaignMetrics, CampaignSummary, LeadCategory,
};
use crate::model::Screen;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Campaign results screen component
#[derive(Default)]
pub struct CampaignComponent;

impl Component for CampaignComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Tab => Some(Action::NextScreen),
            KeyCode::BackTab => Some(Action::PrevScreen),
            KeyCode::Char('x') => Some(Action::RequestExport),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_campaign_screen which takes the summary
        Ok(())
    }
}

/// The four metric cards as (title, display value) pairs
///
/// Values are the literal metrics constants; the conversion rate is supplied
/// precomputed and only gets a percent sign appended.
pub fn metric_cards(metrics: &CampaignMetrics) -> [(&'static str, String); 4] {
    [
        ("Total Calls", metrics.total_calls.to_string()),
        ("Leads Generated", metrics.leads_generated.to_string()),
        (
            "Conversion Rate",
            format!("{}%", metrics.conversion_rate_pct),
        ),
        ("Follow-ups", metrics.followups_scheduled.to_string()),
    ]
}

fn outcome_color(outcome: CallOutcome) -> Color {
    match outcome {
        CallOutcome::Connected => Color::Green,
        CallOutcome::NoAnswer => Color::Yellow,
        CallOutcome::Voicemail => Color::Blue,
        CallOutcome::Rejected => Color::Red,
        CallOutcome::Other => Color::Gray,
    }
}

fn category_color(category: LeadCategory) -> Color {
    match category {
        LeadCategory::Hot => Color::Red,
        LeadCategory::Warm => Color::Yellow,
        LeadCategory::Cold => Color::Blue,
    }
}

/// Draw the campaign results screen
pub fn draw_campaign_screen(
    frame: &mut Frame,
    area: Rect,
    campaign: &CampaignSummary,
    status_message: Option<&str>,
) -> Result<()> {
    let layout = calculate_campaign_layout(area);

    render_tabs(frame, layout.tabs, Screen::CampaignResults);
    render_header(frame, layout.header, campaign);

    for (card_area, (title, value)) in layout.cards.iter().zip(metric_cards(&campaign.metrics)) {
        render_metric_card(frame, *card_area, title, &value);
    }

    render_outcomes(frame, layout.outcomes, campaign);
    render_lead_categories(frame, layout.leads, campaign);

    render_status_bar(frame, layout.status, status_message);
    render_help_bar(
        frame,
        layout.help,
        vec![
            key_hint("q", "Quit", Color::Yellow),
            key_hint("Tab", "Screen", Color::Cyan),
            key_hint("x", "Export", Color::Magenta),
            key_hint("?", "Help", Color::White),
        ],
    );

    Ok(())
}

fn render_header(frame: &mut Frame, area: Rect, campaign: &CampaignSummary) {
    let date_range = match campaign.end_date {
        Some(end) => format!(
            "{} — {}",
            campaign.start_date.format("%b %e, %Y"),
            end.format("%b %e, %Y")
        ),
        None => format!("{} — ongoing", campaign.start_date.format("%b %e, %Y")),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                "Campaign: ",
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                campaign.name.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Type: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                campaign.direction.label(),
                Style::default().fg(campaign.direction.color()),
            ),
            Span::raw("   "),
            Span::styled("Status: ", Style::default().fg(Color::DarkGray)),
            Span::styled(campaign.status.label(), Style::default().fg(Color::Cyan)),
            Span::raw("   "),
            Span::styled(date_range, Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Campaign Results ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn render_metric_card(frame: &mut Frame, area: Rect, title: &str, value: &str) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            value.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title))
                .title_style(Style::default().fg(Color::DarkGray))
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn render_outcomes(frame: &mut Frame, area: Rect, campaign: &CampaignSummary) {
    let entries: Vec<(String, Color, u64, u64)> = CallOutcome::all()
        .into_iter()
        .map(|outcome| {
            (
                outcome.label().to_string(),
                outcome_color(outcome),
                campaign.outcomes.get(outcome),
                campaign.metrics.total_calls,
            )
        })
        .collect();

    render_breakdown(frame, area, " Call Outcomes ", "calls", &entries);
}

fn render_lead_categories(frame: &mut Frame, area: Rect, campaign: &CampaignSummary) {
    let entries: Vec<(String, Color, u64, u64)> = LeadCategory::all()
        .into_iter()
        .map(|category| {
            (
                category.label().to_string(),
                category_color(category),
                campaign.leads_by_category.get(category),
                campaign.metrics.leads_generated,
            )
        })
        .collect();

    render_breakdown(frame, area, " Leads by Category ", "leads", &entries);
}

/// Render one breakdown panel: a label line and a gauge per entry
fn render_breakdown(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    unit: &str,
    entries: &[(String, Color, u64, u64)],
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Label line + gauge line + spacer per entry
    let constraints: Vec<Constraint> = entries
        .iter()
        .flat_map(|_| [Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
        .chain([Constraint::Min(0)])
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, (label, color, count, total)) in entries.iter().enumerate() {
        let label_area = chunks[i * 3];
        let gauge_area = chunks[i * 3 + 1];

        if label_area.height == 0 || gauge_area.height == 0 {
            break;
        }

        let count_label = format!("{} {}", count, unit);
        let padding = (label_area.width as usize)
            .saturating_sub(label.len() + count_label.len());
        let label_line = Line::from(vec![
            Span::styled(label.clone(), Style::default().fg(Color::White)),
            Span::raw(" ".repeat(padding)),
            Span::styled(count_label, Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(label_line), label_area);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(*color).bg(Color::DarkGray))
            .ratio(share(*count, *total))
            .label(percent_label(*count, *total));
        frame.render_widget(gauge, gauge_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::mock;

    #[test]
    fn test_metric_cards_show_literal_values() {
        let campaign = mock::campaign_summary();
        let cards = metric_cards(&campaign.metrics);

        assert_eq!(cards[0], ("Total Calls", "1500".to_string()));
        assert_eq!(cards[1], ("Leads Generated", "300".to_string()));
        assert_eq!(cards[2], ("Conversion Rate", "25%".to_string()));
        assert_eq!(cards[3], ("Follow-ups", "250".to_string()));
    }

    #[test]
    fn test_outcome_shares_match_counts() {
        let campaign = mock::campaign_summary();
        let total = campaign.metrics.total_calls;

        let connected = share(campaign.outcomes.get(CallOutcome::Connected), total);
        assert!((connected - 800.0 / 1500.0).abs() < 1e-9);

        let shares: f64 = CallOutcome::all()
            .into_iter()
            .map(|o| share(campaign.outcomes.get(o), total))
            .sum();
        assert!((shares - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_lead_category_shares_match_counts() {
        let campaign = mock::campaign_summary();
        let leads = campaign.metrics.leads_generated;

        let hot = share(campaign.leads_by_category.get(LeadCategory::Hot), leads);
        assert!((hot - 100.0 / 300.0).abs() < 1e-9);
        assert_eq!(percent_label(100, 300), "33.3%");
    }

    #[test]
    fn test_breakdown_colors_are_total() {
        for outcome in CallOutcome::all() {
            // Every outcome maps to some color without panicking
            let _ = outcome_color(outcome);
        }
        assert_eq!(category_color(LeadCategory::Hot), Color::Red);
        assert_eq!(category_color(LeadCategory::Cold), Color::Blue);
    }
}
