// ============================================================================
// DASHBOARD VIEWMODEL - Named actions over the dashboard state
// ============================================================================
// The data source is injected; the state is shared with whoever renders it.
// No RefCell borrow is held across an await.
// ============================================================================

use std::rc::Rc;

use chrono::{Local, TimeZone};

use crate::error::{DashboardError, Result};
use crate::models::{DateRange, Lesson, LessonType, User};
use crate::services::LessonDataSource;
use crate::state::{ClaimTransaction, DashboardState};
use crate::viewmodels::lesson_filter::{self, BucketCounts};

pub const LOGIN_ERROR: &str = "Invalid email or password";
pub const FETCH_ERROR: &str = "Failed to fetch lessons";

pub struct DashboardViewModel<S> {
    state: DashboardState,
    source: Rc<S>,
}

impl<S> Clone for DashboardViewModel<S> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            source: Rc::clone(&self.source),
        }
    }
}

impl<S: LessonDataSource> DashboardViewModel<S> {
    pub fn new(state: DashboardState, source: S) -> Self {
        Self::with_shared_source(state, Rc::new(source))
    }

    pub fn with_shared_source(state: DashboardState, source: Rc<S>) -> Self {
        Self { state, source }
    }

    /// Shared state handle
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Injected data source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Errors are returned so the caller can block navigation
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        self.state.set_loading(true);
        self.state.set_error(None);
        self.state.notify();

        match self.source.authenticate(email, password).await {
            Ok(user) => {
                log::info!("✅ [AUTH] Signed in as {}", user.name);
                self.state.set_user(Some(user.clone()));
                self.state.set_loading(false);
                self.state.notify();
                Ok(user)
            }
            Err(e) => {
                log::warn!("⚠️ [AUTH] Login failed: {}", e);
                self.state.set_error(Some(LOGIN_ERROR.to_string()));
                self.state.set_loading(false);
                self.state.notify();
                Err(e)
            }
        }
    }

    /// Clears the tutor and the lesson list
    pub fn logout(&self) {
        log::info!("👋 [AUTH] Logout");
        self.state.set_user(None);
        self.state.set_lessons(Vec::new());
        self.state.notify();
    }

    /// Failures end up in `error` for display; nothing is returned
    pub async fn fetch_lessons(&self) {
        self.state.set_loading(true);
        self.state.set_error(None);
        self.state.notify();

        match self.source.list_lessons().await {
            Ok(lessons) => {
                log::info!("📚 [LESSONS] {} lessons loaded", lessons.len());
                self.state.set_lessons(lessons);
            }
            Err(e) => {
                log::error!("❌ [LESSONS] {}", e);
                self.state.set_error(Some(FETCH_ERROR.to_string()));
            }
        }
        self.state.set_loading(false);
        self.state.notify();
    }

    /// Claim a lesson for the signed-in tutor.
    ///
    /// The lesson shows as `Confirming` before the data source answers. On
    /// failure the whole lesson list goes back to what it was when the claim
    /// started and the error is returned. Without a user this does nothing.
    pub async fn take_class(&self, lesson_id: &str) -> Result<()> {
        let Some(user) = self.state.get_user() else {
            log::warn!("⚠️ [CLAIM] Ignored {}: nobody signed in", lesson_id);
            return Ok(());
        };

        let claim = ClaimTransaction::begin(&self.state, lesson_id, &user.name);

        match self.source.assign_lesson(lesson_id, &user.name).await {
            Ok(_) => {
                claim.commit();
                Ok(())
            }
            Err(e) => {
                log::error!("❌ [CLAIM] {}: {}", lesson_id, e);
                claim.rollback(&self.state);
                Err(e)
            }
        }
    }

    /// `None` shows every month. Clears the date range.
    pub fn set_selected_month(&self, month: Option<u32>) -> Result<()> {
        if let Some(m) = month.filter(|m| *m > 11) {
            return Err(DashboardError::InvalidMonth(m));
        }
        self.state.set_selected_month(month);
        self.state.notify();
        Ok(())
    }

    /// Clears the month filter
    pub fn set_date_range(&self, range: DateRange) {
        self.state.set_date_range(range);
        self.state.notify();
    }

    /// Lessons of one bucket under the active filter
    pub fn bucket(&self, lesson_type: LessonType) -> Vec<Lesson> {
        self.bucket_in(lesson_type, &Local)
    }

    pub fn bucket_in<Tz: TimeZone>(&self, lesson_type: LessonType, tz: &Tz) -> Vec<Lesson> {
        lesson_filter::derive_bucket_in(&self.state.get_lessons(), lesson_type, &self.state.get_filter(), tz)
    }

    pub fn bucket_counts(&self) -> BucketCounts {
        lesson_filter::bucket_counts(&self.state.get_lessons(), &self.state.get_filter())
    }

    pub fn today_lessons(&self) -> Vec<Lesson> {
        lesson_filter::today_lessons(&self.state.get_lessons())
    }
}
