// ============================================================================
// DASHBOARD STATE - Tutor, lessons, loading/error flags and filters
// ============================================================================
// Writes go through the dashboard viewmodel. Setters here are crate-private
// and do not notify; callers notify once per logical transition.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Datelike, Local};
use serde::Serialize;

use crate::models::{DateRange, Lesson, LessonFilter, User};
use crate::state::reactivity::{ChangeNotifier, SubscriptionId};

/// Plain copy of the whole state, for the JS side and for assertions
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub user: Option<User>,
    pub lessons: Vec<Lesson>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub selected_month: Option<u32>,
    pub date_range: DateRange,
}

/// Shared handle; clones see the same state
#[derive(Clone)]
pub struct DashboardState {
    user: Rc<RefCell<Option<User>>>,
    lessons: Rc<RefCell<Vec<Lesson>>>,
    is_loading: Rc<RefCell<bool>>,
    error: Rc<RefCell<Option<String>>>,
    selected_month: Rc<RefCell<Option<u32>>>,
    date_range: Rc<RefCell<DateRange>>,
    notifier: ChangeNotifier,
}

impl DashboardState {
    /// Starts on the current local month
    pub fn new() -> Self {
        Self::with_filter(LessonFilter::month(Local::now().month0()))
    }

    /// Empty state with an explicit initial filter
    pub fn with_filter(filter: LessonFilter) -> Self {
        Self {
            user: Rc::new(RefCell::new(None)),
            lessons: Rc::new(RefCell::new(Vec::new())),
            is_loading: Rc::new(RefCell::new(false)),
            error: Rc::new(RefCell::new(None)),
            selected_month: Rc::new(RefCell::new(filter.selected_month)),
            date_range: Rc::new(RefCell::new(filter.date_range)),
            notifier: ChangeNotifier::new(),
        }
    }

    /// Signed-in tutor
    pub fn get_user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    /// Copy of the lesson list
    pub fn get_lessons(&self) -> Vec<Lesson> {
        self.lessons.borrow().clone()
    }

    /// Lesson by id
    pub fn find_lesson(&self, lesson_id: &str) -> Option<Lesson> {
        self.lessons.borrow().iter().find(|l| l.id == lesson_id).cloned()
    }

    /// True while login or fetch is in flight
    pub fn is_loading(&self) -> bool {
        *self.is_loading.borrow()
    }

    /// Last user-facing error message
    pub fn get_error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    /// Month filter, 0-11
    pub fn get_selected_month(&self) -> Option<u32> {
        *self.selected_month.borrow()
    }

    /// Date range filter
    pub fn get_date_range(&self) -> DateRange {
        *self.date_range.borrow()
    }

    /// Month and range together
    pub fn get_filter(&self) -> LessonFilter {
        LessonFilter {
            selected_month: self.get_selected_month(),
            date_range: self.get_date_range(),
        }
    }

    /// Copy of everything
    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            user: self.get_user(),
            lessons: self.get_lessons(),
            is_loading: self.is_loading(),
            error: self.get_error(),
            selected_month: self.get_selected_month(),
            date_range: self.get_date_range(),
        }
    }

    /// Callback after every state change
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.notifier.subscribe(callback)
    }

    /// Remove a callback registered with `subscribe`
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    pub(crate) fn notify(&self) {
        self.notifier.notify();
    }

    /// Set the tutor
    pub(crate) fn set_user(&self, user: Option<User>) {
        *self.user.borrow_mut() = user;
    }

    /// Replace the lesson list
    pub(crate) fn set_lessons(&self, lessons: Vec<Lesson>) {
        *self.lessons.borrow_mut() = lessons;
    }

    /// Set loading
    pub(crate) fn set_loading(&self, loading: bool) {
        *self.is_loading.borrow_mut() = loading;
    }

    /// Set or clear the error
    pub(crate) fn set_error(&self, error: Option<String>) {
        *self.error.borrow_mut() = error;
    }

    /// Month and date range are exclusive: setting one clears the other
    pub(crate) fn set_selected_month(&self, month: Option<u32>) {
        *self.selected_month.borrow_mut() = month;
        *self.date_range.borrow_mut() = DateRange::empty();
    }

    /// Clears the month filter
    pub(crate) fn set_date_range(&self, range: DateRange) {
        *self.selected_month.borrow_mut() = None;
        *self.date_range.borrow_mut() = range;
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}
