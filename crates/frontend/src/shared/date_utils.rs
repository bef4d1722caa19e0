/// Date/time formatting for list cells, per UI locale.
use chrono::{DateTime, NaiveDateTime};
use contracts::shared::filtering::parse_date_prefix;
use contracts::shared::locale::Locale;

fn date_pattern(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "%m/%d/%Y",
        Locale::Es => "%d/%m/%Y",
    }
}

/// "2024-03-15" or "2024-03-15T14:02:26Z" -> "03/15/2024" (en) / "15/03/2024" (es).
/// Unparseable input is returned unchanged.
pub fn format_date(value: &str, locale: Locale) -> String {
    match parse_date_prefix(value) {
        Some(date) => date.format(date_pattern(locale)).to_string(),
        None => value.to_string(),
    }
}

/// RFC 3339 or naive ISO timestamp -> date plus `HH:MM:SS`.
pub fn format_datetime(value: &str, locale: Locale) -> String {
    let parsed = DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.naive_utc())
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f"));
    match parsed {
        Ok(dt) => format!("{} {}", dt.format(date_pattern(locale)), dt.format("%H:%M:%S")),
        Err(_) => format_date(value, locale),
    }
}

pub fn format_datetime_opt(value: Option<&str>, locale: Locale) -> String {
    value
        .map(|v| format_datetime(v, locale))
        .unwrap_or_else(|| "-".to_string())
}
