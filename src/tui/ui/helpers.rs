//! Helper functions for UI rendering

use chrono::{DateTime, Datelike, Local, Utc};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Center a popup of the given percentage size inside `r`
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Format an event timestamp to a friendly local time
/// e.g., "Today at 3:45 PM", "Yesterday at 10:30 AM", "Jan 15 at 2:00 PM"
pub fn format_friendly_datetime(dt: &DateTime<Utc>) -> String {
    let local_dt = dt.with_timezone(&Local);
    let now = Local::now();
    let today = now.date_naive();
    let dt_date = local_dt.date_naive();

    let time_str = local_dt.format("%-I:%M %p").to_string();

    if dt_date == today {
        format!("Today at {}", time_str)
    } else if dt_date == today.pred_opt().unwrap_or(today) {
        format!("Yesterday at {}", time_str)
    } else if (today - dt_date).num_days() < 7 {
        format!("{} at {}", local_dt.format("%a"), time_str)
    } else if local_dt.year() == now.year() {
        format!("{} at {}", local_dt.format("%b %-d"), time_str)
    } else {
        local_dt.format("%b %-d, %Y").to_string()
    }
}

/// Format a detection score as a percentage badge, e.g. "92%"
pub fn format_score(score: f64) -> String {
    format!("{:.0}%", score * 100.0)
}
