//! Due-date classification used to colour cards.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DueStatus {
    /// Due instant already passed
    Overdue,
    /// Due within the next 24 hours
    DueSoon,
    Upcoming,
}

impl DueStatus {
    /// The due instant is midnight UTC at the start of `due`.
    pub fn classify(due: NaiveDate, now: DateTime<Utc>) -> Self {
        let due_at = due.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc();
        let remaining = due_at - now;
        if remaining < Duration::zero() {
            DueStatus::Overdue
        } else if remaining < Duration::days(1) {
            DueStatus::DueSoon
        } else {
            DueStatus::Upcoming
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DueStatus::Overdue => "overdue",
            DueStatus::DueSoon => "due-soon",
            DueStatus::Upcoming => "upcoming",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_classify() {
        let due = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert_eq!(DueStatus::classify(due, at("2024-01-10T00:00:01Z")), DueStatus::Overdue);
        assert_eq!(DueStatus::classify(due, at("2024-01-09T08:00:00Z")), DueStatus::DueSoon);
        assert_eq!(DueStatus::classify(due, at("2024-01-08T23:59:59Z")), DueStatus::Upcoming);
    }
}
