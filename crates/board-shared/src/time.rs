//! Relative-age formatting for feed timestamps.

use chrono::{DateTime, Utc};

/// Render how long ago `created_at` was, relative to `now`.
///
/// Under a minute reads "Just now"; within a week the age is given in
/// minutes/hours/days; anything older falls back to a short date.
pub fn relative_age(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(created_at);

    let mins = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if mins < 1 {
        "Just now".to_string()
    } else if mins < 60 {
        format!("{mins}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else if days < 7 {
        format!("{days}d ago")
    } else {
        created_at.format("%b %-d").to_string()
    }
}
