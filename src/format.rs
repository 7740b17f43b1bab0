//! Display helpers for cards.

use chrono::{DateTime, NaiveDate, Utc};
use kanban_core::DueStatus;

/// Value format of `<input type="date">`
const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// "Jan 5, 2024"
pub fn due_label(due: NaiveDate) -> String {
    due.format("%b %-d, %Y").to_string()
}

pub fn due_class(due: NaiveDate, now: DateTime<Utc>) -> String {
    format!("card-due {}", DueStatus::classify(due, now).as_str())
}

pub fn date_input_value(due: Option<NaiveDate>) -> String {
    due.map(|d| d.format(DATE_INPUT_FORMAT).to_string()).unwrap_or_default()
}

/// Empty or malformed input clears the due date
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_INPUT_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_label() {
        let due = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(due_label(due), "Jan 5, 2024");
    }

    #[test]
    fn test_due_class() {
        let due = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let now = DateTime::parse_from_rfc3339("2024-01-06T12:00:00Z").unwrap().with_timezone(&Utc);
        assert_eq!(due_class(due, now), "card-due overdue");
    }

    #[test]
    fn test_date_input() {
        let due = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(date_input_value(Some(due)), "2024-01-01");
        assert_eq!(date_input_value(None), "");
        assert_eq!(parse_date_input("2024-01-01"), Some(due));
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("01/01/2024"), None);
    }
}
