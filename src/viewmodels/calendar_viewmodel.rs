// ============================================================================
// CALENDAR VIEWMODEL - Visible month and selected day
// ============================================================================

use chrono::{Datelike, Months, NaiveDate, TimeZone};

use crate::error::Result;
use crate::models::Lesson;
use crate::services::LessonDataSource;
use crate::viewmodels::dashboard_viewmodel::DashboardViewModel;
use crate::viewmodels::lesson_filter::{lessons_on_day, month_name};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarViewModel {
    /// Always the first day of the visible month
    visible_month: NaiveDate,
    selected_day: Option<NaiveDate>,
}

fn first_of_month(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

impl CalendarViewModel {
    /// Opens on the month of `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            visible_month: first_of_month(today),
            selected_day: None,
        }
    }

    /// First day of the visible month
    pub fn visible_month(&self) -> NaiveDate {
        self.visible_month
    }

    /// Day picked by the user
    pub fn selected_day(&self) -> Option<NaiveDate> {
        self.selected_day
    }

    /// Show the month before
    pub fn previous_month(&mut self) {
        if let Some(month) = self.visible_month.checked_sub_months(Months::new(1)) {
            self.visible_month = month;
        }
    }

    /// Show the month after
    pub fn next_month(&mut self) {
        if let Some(month) = self.visible_month.checked_add_months(Months::new(1)) {
            self.visible_month = month;
        }
    }

    /// Back to the month of `today`
    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.visible_month = first_of_month(today);
    }

    /// Every day of the visible month, in order
    pub fn days(&self) -> Vec<NaiveDate> {
        self.visible_month
            .iter_days()
            .take_while(|day| day.month() == self.visible_month.month())
            .collect()
    }

    /// e.g. "January 2026"
    pub fn title(&self) -> String {
        let name = month_name(self.visible_month.month0()).unwrap_or_default();
        format!("{} {}", name, self.visible_month.year())
    }

    /// Selecting a day also narrows the dashboard to that day's month
    pub fn select_day<S: LessonDataSource>(&mut self, day: NaiveDate, dashboard: &DashboardViewModel<S>) -> Result<()> {
        self.selected_day = Some(day);
        dashboard.set_selected_month(Some(day.month0()))
    }

    /// Lessons on the selected day, empty without a selection
    pub fn selected_day_lessons<Tz: TimeZone>(&self, lessons: &[Lesson], tz: &Tz) -> Vec<Lesson> {
        match self.selected_day {
            Some(day) => lessons_on_day(lessons, day, tz),
            None => Vec::new(),
        }
    }
}
