/// Utilities for date parsing and formatting
///
/// Dates arrive from the report service either as `YYYY-MM-DD`, as ISO
/// date-times, or in RFC 2822 form (`Mon, 15 Jan 2024 00:00:00 GMT`).
use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Русские названия месяцев с заглавной буквы
pub const MONTHS_RU: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

/// Format date to DD.MM.YYYY format
/// Example: 2024-03-15 -> "15.03.2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Month label in the form "Январь 2024"
pub fn russian_month_label(date: NaiveDate) -> String {
    format!("{} {}", MONTHS_RU[date.month0() as usize], date.year())
}

/// Parse a date coming from the report service
pub fn parse_wire_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let date_part = raw.split(['T', ' ']).next().unwrap_or(raw);
    if let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc2822(raw)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Parse the value of a `type="date"` input; empty or invalid text is `None`
pub fn parse_input_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Today's date as YYYY-MM-DD, used as the upper bound for date inputs
pub fn today_iso() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}
