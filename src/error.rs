// ============================================================================
// ERRORS - Failure kinds surfaced by the data source and the dashboard
// ============================================================================

use thiserror::Error;

pub type Result<T, E = DashboardError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("Invalid credentials")]
    AuthenticationFailed,

    #[error("Failed to fetch lessons: {0}")]
    FetchFailed(String),

    #[error("Lesson not found: {0}")]
    LessonNotFound(String),

    #[error("Failed to claim lesson: {0}")]
    ClaimFailed(String),

    #[error("Month {0} is outside 0-11")]
    InvalidMonth(u32),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unknown lesson type: {0}")]
    UnknownLessonType(String),
}
