use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};

/// Custom date window picked by the tutor. Only filters once both ends are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn new(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> Self {
        Self { from, to }
    }

    pub fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self::new(Some(from), Some(to))
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    /// Both bounds, ordered. `None` unless the range is complete.
    pub fn bounds(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        match (self.from, self.to) {
            (Some(from), Some(to)) if from <= to => Some((from, to)),
            (Some(from), Some(to)) => Some((to, from)),
            _ => None,
        }
    }

    /// Inclusive on both ends
    pub fn contains(&self, date: &DateTime<Utc>) -> bool {
        self.bounds()
            .map(|(from, to)| from <= *date && *date <= to)
            .unwrap_or(false)
    }
}

/// Active list filters, copied out of the dashboard state for derivation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonFilter {
    pub selected_month: Option<u32>,
    pub date_range: DateRange,
}

impl LessonFilter {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn month(month: u32) -> Self {
        Self {
            selected_month: Some(month),
            date_range: DateRange::empty(),
        }
    }

    pub fn range(date_range: DateRange) -> Self {
        Self {
            selected_month: None,
            date_range,
        }
    }
}

/// Parse a filter bound: RFC 3339, or `YYYY-MM-DD` meaning midnight UTC
pub fn parse_filter_date(raw: &str) -> Result<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
        return Ok(date_time.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|day| day.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| DashboardError::InvalidDate(raw.to_string()))
}
