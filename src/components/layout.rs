//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Call log screen layout areas
pub struct CallLogLayout {
    pub tabs: Rect,
    pub filters: Rect,
    pub table: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Campaign results screen layout areas
pub struct CampaignLayout {
    pub tabs: Rect,
    pub header: Rect,
    pub cards: [Rect; 4],
    pub outcomes: Rect,
    pub leads: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = (area.width.saturating_sub(width)) / 2;
    let popup_y = (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate the call log screen layout
pub fn calculate_call_log_layout(area: Rect) -> CallLogLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    CallLogLayout {
        tabs: chunks[0],
        filters: chunks[1],
        table: chunks[2],
        status: chunks[3],
        help: chunks[4],
    }
}

/// Calculate the campaign results screen layout
pub fn calculate_campaign_layout(area: Rect) -> CampaignLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    // Metric cards in a single row
    let card_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(chunks[2]);

    // Breakdown panels side by side
    let breakdown_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[3]);

    CampaignLayout {
        tabs: chunks[0],
        header: chunks[1],
        cards: [card_chunks[0], card_chunks[1], card_chunks[2], card_chunks[3]],
        outcomes: breakdown_chunks[0],
        leads: breakdown_chunks[1],
        status: chunks[4],
        help: chunks[5],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_fits_in_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_popup(area, 40, 10);
        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 10);
        assert_eq!(popup.x, 30);
        assert_eq!(popup.y, 15);
    }

    #[test]
    fn test_centered_popup_clamps_to_small_area() {
        let area = Rect::new(0, 0, 20, 5);
        let popup = centered_popup(area, 40, 10);
        assert!(popup.width <= area.width);
        assert!(popup.height <= area.height);
    }

    #[test]
    fn test_call_log_layout_spans_area() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = calculate_call_log_layout(area);
        assert_eq!(layout.tabs.height, 2);
        assert_eq!(layout.filters.height, 4);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.help.height, 3);
        assert_eq!(
            layout.table.height,
            area.height - 2 - 4 - 1 - 3,
        );
    }

    #[test]
    fn test_campaign_layout_has_four_cards() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = calculate_campaign_layout(area);
        let total_card_width: u16 = layout.cards.iter().map(|c| c.width).sum();
        assert_eq!(total_card_width, area.width);
        assert_eq!(layout.outcomes.y, layout.leads.y);
    }
}
