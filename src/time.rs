use chrono::{DateTime, Locale, Utc};


/// Formats an RFC 3339 timestamp as a Brazilian Portuguese long date,
/// e.g. "5 de março de 2023". Dates are taken in UTC.
pub fn to_long_date(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(date) => date
            .with_timezone(&Utc)
            .format_localized("%-d de %B de %Y", Locale::pt_BR)
            .to_string(),
        Err(_) => String::from("Invalid Date"),
    }
}
