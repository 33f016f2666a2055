//! Shared formatting utilities for the UI layer.

use chrono::{DateTime, NaiveDate, Utc};

/// "Jan 20, 2026".
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn format_day(date: &NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// "Jan 20, 2026 9:35 PM".
pub fn format_datetime(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y %-I:%M %p").to_string()
}

/// Optional timestamp, or "Not available".
pub fn format_optional_datetime(date: Option<&DateTime<Utc>>) -> String {
    date.map(format_datetime)
        .unwrap_or_else(|| "Not available".to_string())
}

/// Weight with thousands separators and at most one decimal: "1,234.5 kg".
pub fn format_kg(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    let whole = rounded.trunc() as i64;
    let tenths = ((rounded - rounded.trunc()).abs() * 10.0).round() as i64;

    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if whole < 0 { "-" } else { "" };

    if tenths == 0 {
        format!("{sign}{grouped} kg")
    } else {
        format!("{sign}{grouped}.{tenths} kg")
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Quoted amount, or "Pending quote" before the provider has priced it.
pub fn format_amount(amount: Option<f64>) -> String {
    match amount {
        Some(value) => format!("${:.2}", value),
        None => "Pending quote".to_string(),
    }
}

/// Convert a snake_case string to Title Case (e.g. "waste_to_energy" → "Waste To Energy").
pub fn format_snake_case_title(s: &str) -> String {
    s.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().to_string() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn dates_are_human_readable() {
        let date = Utc.with_ymd_and_hms(2026, 1, 20, 21, 35, 0).unwrap();
        assert_eq!(format_date(&date), "Jan 20, 2026");
        assert_eq!(format_datetime(&date), "Jan 20, 2026 9:35 PM");
        assert_eq!(format_optional_datetime(Some(&date)), "Jan 20, 2026 9:35 PM");
        assert_eq!(format_optional_datetime(None), "Not available");
    }

    #[test]
    fn day_without_time() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        assert_eq!(format_day(&day), "Mar 5, 2025");
    }

    #[test]
    fn weights_are_grouped() {
        assert_eq!(format_kg(0.0), "0 kg");
        assert_eq!(format_kg(200.0), "200 kg");
        assert_eq!(format_kg(1234.5), "1,234.5 kg");
        assert_eq!(format_kg(1_000_000.04), "1,000,000 kg");
        assert_eq!(format_kg(250.56), "250.6 kg");
    }

    #[test]
    fn amounts_and_percentages() {
        assert_eq!(format_amount(Some(150.0)), "$150.00");
        assert_eq!(format_amount(None), "Pending quote");
        assert_eq!(format_percent(94.26), "94.3%");
    }

    #[test]
    fn snake_case_to_title() {
        assert_eq!(format_snake_case_title("recycled"), "Recycled");
        assert_eq!(format_snake_case_title("waste_to_energy"), "Waste To Energy");
        assert_eq!(format_snake_case_title(""), "");
    }
}
