use ratatui::layout::{Constraint, Layout, Rect};

use super::constants::MAX_VISIBLE_TOASTS;

pub struct Areas {
    pub header: Rect,
    pub search: Rect,
    pub stories: Rect,
    pub help: Rect,
}

pub fn split(area: Rect) -> Areas {
    let [header, search, stories, help] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);
    Areas {
        header,
        search,
        stories,
        help,
    }
}

/// Bottom-right box for `count` toasts, each three rows tall, inside `area`.
pub fn toast_area(area: Rect, count: usize) -> Rect {
    let rows = (count.min(MAX_VISIBLE_TOASTS) as u16) * 3;
    let width = area.width.min(48);
    let height = rows.min(area.height);
    Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - height,
        width,
        height,
    }
}
