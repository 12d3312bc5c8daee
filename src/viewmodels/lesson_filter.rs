// ============================================================================
// LESSON FILTER - Pure derivations over the lesson list
// ============================================================================

use std::collections::BTreeMap;

use chrono::{Datelike, Local, NaiveDate, TimeZone};
use serde::Serialize;

use crate::models::{Lesson, LessonFilter, LessonType};

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Lessons of one bucket, filtered and sorted by date, in the local zone
pub fn derive_bucket(lessons: &[Lesson], lesson_type: LessonType, filter: &LessonFilter) -> Vec<Lesson> {
    derive_bucket_in(lessons, lesson_type, filter, &Local)
}

/// A complete date range wins over the month filter. Months are compared in
/// `tz`, ignoring the year. Ties keep their input order.
pub fn derive_bucket_in<Tz: TimeZone>(
    lessons: &[Lesson],
    lesson_type: LessonType,
    filter: &LessonFilter,
    tz: &Tz,
) -> Vec<Lesson> {
    let mut bucket: Vec<Lesson> = lessons
        .iter()
        .filter(|lesson| lesson.lesson_type == lesson_type)
        .filter(|lesson| {
            if filter.date_range.is_complete() {
                filter.date_range.contains(&lesson.date)
            } else if let Some(month) = filter.selected_month {
                lesson.date.with_timezone(tz).month0() == month
            } else {
                true
            }
        })
        .cloned()
        .collect();

    bucket.sort_by_key(|lesson| lesson.date);
    bucket
}

/// Tab badge counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BucketCounts {
    pub historic: usize,
    pub upcoming: usize,
    pub available: usize,
}

impl BucketCounts {
    /// Count for one bucket
    pub fn get(&self, lesson_type: LessonType) -> usize {
        match lesson_type {
            LessonType::Historic => self.historic,
            LessonType::Upcoming => self.upcoming,
            LessonType::Available => self.available,
        }
    }
}

/// Counts of every bucket under `filter`
pub fn bucket_counts_in<Tz: TimeZone>(lessons: &[Lesson], filter: &LessonFilter, tz: &Tz) -> BucketCounts {
    BucketCounts {
        historic: derive_bucket_in(lessons, LessonType::Historic, filter, tz).len(),
        upcoming: derive_bucket_in(lessons, LessonType::Upcoming, filter, tz).len(),
        available: derive_bucket_in(lessons, LessonType::Available, filter, tz).len(),
    }
}

pub fn bucket_counts(lessons: &[Lesson], filter: &LessonFilter) -> BucketCounts {
    bucket_counts_in(lessons, filter, &Local)
}

/// Lessons of any bucket on `day`, in input order
pub fn lessons_on_day<Tz: TimeZone>(lessons: &[Lesson], day: NaiveDate, tz: &Tz) -> Vec<Lesson> {
    lessons
        .iter()
        .filter(|lesson| lesson.date.with_timezone(tz).date_naive() == day)
        .cloned()
        .collect()
}

/// Lessons on the current local day
pub fn today_lessons(lessons: &[Lesson]) -> Vec<Lesson> {
    lessons_on_day(lessons, Local::now().date_naive(), &Local)
}

/// Lessons grouped by calendar day in `tz`
pub fn lessons_by_day<Tz: TimeZone>(lessons: &[Lesson], tz: &Tz) -> BTreeMap<NaiveDate, Vec<Lesson>> {
    let mut by_day: BTreeMap<NaiveDate, Vec<Lesson>> = BTreeMap::new();
    for lesson in lessons {
        let day = lesson.date.with_timezone(tz).date_naive();
        by_day.entry(day).or_default().push(lesson.clone());
    }
    by_day
}

/// Month after the selection, wrapping December to January.
/// Without a selection, jumps to `current`.
pub fn next_month(selected: Option<u32>, current: u32) -> u32 {
    match selected {
        Some(month) if month < 11 => month + 1,
        Some(_) => 0,
        None => current,
    }
}

/// Month before the selection, wrapping January to December
pub fn previous_month(selected: Option<u32>, current: u32) -> u32 {
    match selected {
        Some(month) if month > 0 => month - 1,
        Some(_) => 11,
        None => current,
    }
}

/// English name of a 0-11 month
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month as usize).copied()
}
