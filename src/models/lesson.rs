use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Bucket a lesson is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LessonType {
    Historic,
    Upcoming,
    Available,
}

impl LessonType {
    pub const ALL: [LessonType; 3] = [LessonType::Historic, LessonType::Upcoming, LessonType::Available];

    /// Wire and display name
    pub fn as_str(&self) -> &'static str {
        match self {
            LessonType::Historic => "Historic",
            LessonType::Upcoming => "Upcoming",
            LessonType::Available => "Available",
        }
    }

    /// Title and description shown when the bucket has no lessons
    pub fn empty_state(&self) -> (&'static str, &'static str) {
        match self {
            LessonType::Available => (
                "No classes available right now",
                "Check back later for new opportunities",
            ),
            LessonType::Upcoming => ("You're all caught up!", "No upcoming lessons scheduled"),
            LessonType::Historic => (
                "No lesson history yet",
                "Complete your first class to see it here",
            ),
        }
    }
}

impl fmt::Display for LessonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LessonType {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "historic" => Ok(LessonType::Historic),
            "upcoming" => Ok(LessonType::Upcoming),
            "available" => Ok(LessonType::Available),
            _ => Err(DashboardError::UnknownLessonType(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LessonStatus {
    Completed,
    Confirmed,
    Available,
    /// Claim sent, waiting for the data source
    Confirming,
}

impl LessonStatus {
    /// Badge text
    pub fn label(&self) -> &'static str {
        match self {
            LessonStatus::Completed => "Completed",
            LessonStatus::Confirmed => "Confirmed",
            LessonStatus::Available => "Available",
            LessonStatus::Confirming => "Confirming...",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, LessonStatus::Confirming)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub lesson_type: LessonType,
    pub subject: String,
    #[serde(default)]
    pub students: Vec<String>,
    #[serde(default)]
    pub tutor: Option<String>,
    pub status: LessonStatus,
}

impl Lesson {
    /// Build a lesson from plain values, mainly for seeding and tests.
    /// `date` must be RFC 3339; an unparsable date falls back to the epoch.
    pub fn demo(
        id: &str,
        date: &str,
        lesson_type: LessonType,
        subject: &str,
        students: &[&str],
        tutor: Option<&str>,
        status: LessonStatus,
    ) -> Self {
        let date = DateTime::parse_from_rfc3339(date)
            .map(|d| d.with_timezone(&Utc))
            .unwrap_or_default();
        Self {
            id: id.to_string(),
            date,
            lesson_type,
            subject: subject.to_string(),
            students: students.iter().map(|s| s.to_string()).collect(),
            tutor: tutor.map(str::to_string),
            status,
        }
    }

    /// Only open lessons offer the "Take Class" action
    pub fn can_take_class(&self) -> bool {
        self.lesson_type == LessonType::Available && self.status == LessonStatus::Available
    }

    pub fn needs_students(&self) -> bool {
        self.students.is_empty() && self.lesson_type == LessonType::Available
    }

    /// Optimistic claim: what the lesson looks like while the claim is in flight
    pub fn claimed_by(&self, tutor: &str) -> Self {
        Self {
            status: LessonStatus::Confirming,
            tutor: Some(tutor.to_string()),
            lesson_type: LessonType::Upcoming,
            ..self.clone()
        }
    }

    /// Authoritative claim as recorded by the data source
    pub fn confirmed_for(&self, tutor: &str) -> Self {
        Self {
            status: LessonStatus::Confirmed,
            tutor: Some(tutor.to_string()),
            lesson_type: LessonType::Upcoming,
            ..self.clone()
        }
    }
}
