//! Text rendering of user records.

use chrono::{DateTime, NaiveDate};
use userdir_core::UserRecord;

/// Render an ISO date (or date-time) as "Jan 1, 1990".
///
/// Anything unparseable is returned unchanged.
pub fn format_date(raw: &str) -> String {
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// One-line summary: `id  name  email  country`, optionally numbered.
pub fn format_row(position: Option<usize>, user: &UserRecord) -> String {
    let row = format!(
        "{}  {}  {}  {}",
        user.id,
        user.name.full(),
        user.email,
        user.location.country
    );

    match position {
        Some(position) => format!("{:>3}. {}", position, row),
        None => row,
    }
}

/// Multi-line profile view.
pub fn format_profile(user: &UserRecord) -> String {
    let location = [
        user.location.city.as_str(),
        user.location.state.as_str(),
        user.location.country.as_str(),
    ]
    .iter()
    .filter(|part| !part.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(", ");

    let lines = [
        user.name.full(),
        format!("  id:       {}", user.id),
        format!("  email:    {}", user.email),
        format!("  phone:    {}", user.phone),
        format!("  gender:   {}", user.gender),
        format!(
            "  born:     {} (age {})",
            format_date(&user.dob.date),
            user.dob.age
        ),
        format!("  location: {}", location),
        format!("  picture:  {}", user.picture.large),
    ];

    lines.join("\n")
}
