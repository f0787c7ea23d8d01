use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use crate::carousel::Slot;

/// Splits the screen into header, body and footer bands.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let [header, body, footer] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .areas(area);
    (header, body, footer)
}

/// Card row plus a one-line strip for the position dots and route.
pub fn carousel_regions(body: Rect) -> (Rect, Rect) {
    let [cards, strip] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2.min(body.height))])
        .areas(body);
    (cards, strip)
}

/// Left, center and right card slots; the center one is wider.
pub fn card_slots(area: Rect) -> [Rect; 3] {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(28),
            Constraint::Percentage(44),
            Constraint::Percentage(28),
        ])
        .areas(area)
}

/// Which card slot of a `screen`-sized frame contains the cell at
/// `column`/`row`. Mirrors the layout `draw` uses.
pub fn card_slot_at(screen: Rect, column: u16, row: u16) -> Option<Slot> {
    let (_, body, _) = layout_regions(screen);
    let (cards, _) = carousel_regions(body);
    let [left, center, right] = card_slots(cards);
    let position = Position::new(column, row);
    [(left, Slot::Left), (center, Slot::Center), (right, Slot::Right)]
        .into_iter()
        .find(|(area, _)| area.contains(position))
        .map(|(_, slot)| slot)
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [_, middle, _] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .areas(area);

    let [_, center, _] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .areas(middle);
    center
}
