// ============================================================================
// DATA SOURCE - Capability the dashboard uses to read and mutate lessons
// ============================================================================

use std::rc::Rc;

use crate::error::Result;
use crate::models::{Lesson, User};

/// Asynchronous lesson backend (in-memory mock, HTTP, or a test fake).
///
/// Implementations are single-threaded: futures are driven on the browser
/// event loop and need not be `Send`.
#[allow(async_fn_in_trait)]
pub trait LessonDataSource {
    /// Check credentials and return the tutor profile
    async fn authenticate(&self, email: &str, password: &str) -> Result<User>;

    /// Full lesson collection
    async fn list_lessons(&self) -> Result<Vec<Lesson>>;

    /// Assign `lesson_id` to `tutor_name` and return the stored lesson.
    /// Fails with `LessonNotFound` when the id is unknown.
    async fn assign_lesson(&self, lesson_id: &str, tutor_name: &str) -> Result<Lesson>;
}

impl<S: LessonDataSource> LessonDataSource for Rc<S> {
    async fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        (**self).authenticate(email, password).await
    }

    async fn list_lessons(&self) -> Result<Vec<Lesson>> {
        (**self).list_lessons().await
    }

    async fn assign_lesson(&self, lesson_id: &str, tutor_name: &str) -> Result<Lesson> {
        (**self).assign_lesson(lesson_id, tutor_name).await
    }
}

/// Wait `ms` milliseconds in the browser. Native builds return immediately.
pub async fn simulate_latency(ms: u32) {
    if ms == 0 {
        return;
    }

    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
}
