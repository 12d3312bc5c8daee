// ============================================================================
// MOCK API - In-memory backend with simulated latency
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::MockLatency;
use crate::error::{DashboardError, Result};
use crate::models::demo::{demo_user, get_demo_lessons};
use crate::models::{Lesson, User};
use crate::services::data_source::{simulate_latency, LessonDataSource};

/// Stand-in for the real backend. Clones share the same lesson collection.
#[derive(Clone)]
pub struct MockApi {
    lessons: Rc<RefCell<Vec<Lesson>>>,
    latency: MockLatency,
}

impl MockApi {
    /// Seeded with the demo lessons
    pub fn new(latency: MockLatency) -> Self {
        Self::with_lessons(get_demo_lessons(), latency)
    }

    /// Seeded with a custom collection
    pub fn with_lessons(lessons: Vec<Lesson>, latency: MockLatency) -> Self {
        Self {
            lessons: Rc::new(RefCell::new(lessons)),
            latency,
        }
    }

    /// Current server-side collection
    pub fn lessons(&self) -> Vec<Lesson> {
        self.lessons.borrow().clone()
    }

    /// Back to the seeded demo lessons
    pub fn reset_lessons(&self) {
        *self.lessons.borrow_mut() = get_demo_lessons();
        log::info!("🔄 [MOCK] Lessons reset to demo data");
    }
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new(MockLatency::default())
    }
}

impl LessonDataSource for MockApi {
    async fn authenticate(&self, email: &str, _password: &str) -> Result<User> {
        simulate_latency(self.latency.login_ms).await;

        if email.contains('@') {
            Ok(demo_user())
        } else {
            log::warn!("⚠️ [MOCK] Rejected login for {:?}", email);
            Err(DashboardError::AuthenticationFailed)
        }
    }

    async fn list_lessons(&self) -> Result<Vec<Lesson>> {
        simulate_latency(self.latency.list_ms).await;
        Ok(self.lessons())
    }

    async fn assign_lesson(&self, lesson_id: &str, tutor_name: &str) -> Result<Lesson> {
        simulate_latency(self.latency.assign_ms).await;

        let mut lessons = self.lessons.borrow_mut();
        let lesson = lessons
            .iter_mut()
            .find(|l| l.id == lesson_id)
            .ok_or_else(|| DashboardError::LessonNotFound(lesson_id.to_string()))?;

        *lesson = lesson.confirmed_for(tutor_name);
        log::info!("✅ [MOCK] Lesson {} assigned to {}", lesson_id, tutor_name);
        Ok(lesson.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LessonStatus, LessonType};
    use futures::executor::block_on;

    fn api() -> MockApi {
        MockApi::new(MockLatency::NONE)
    }

    #[test]
    fn authenticate_requires_an_at_sign() {
        let api = api();
        let user = block_on(api.authenticate("sarah@example.com", "whatever")).unwrap();
        assert_eq!(user.name, "Sarah Tan");

        assert_eq!(
            block_on(api.authenticate("not-an-email", "whatever")),
            Err(DashboardError::AuthenticationFailed)
        );
    }

    #[test]
    fn assign_confirms_the_stored_lesson() {
        let api = api();
        let lesson = block_on(api.assign_lesson("L010", "Sarah Tan")).unwrap();
        assert_eq!(lesson.status, LessonStatus::Confirmed);
        assert_eq!(lesson.lesson_type, LessonType::Upcoming);
        assert_eq!(lesson.tutor.as_deref(), Some("Sarah Tan"));

        let listed = block_on(api.list_lessons()).unwrap();
        let stored = listed.iter().find(|l| l.id == "L010").unwrap();
        assert_eq!(stored, &lesson);
    }

    #[test]
    fn assign_unknown_lesson_fails_and_changes_nothing() {
        let api = api();
        let before = api.lessons();
        assert_eq!(
            block_on(api.assign_lesson("L999", "Sarah Tan")),
            Err(DashboardError::LessonNotFound("L999".to_string()))
        );
        assert_eq!(api.lessons(), before);
    }

    #[test]
    fn custom_collection_is_what_gets_listed() {
        let only = get_demo_lessons().into_iter().filter(|l| l.can_take_class()).collect::<Vec<_>>();
        let api = MockApi::with_lessons(only.clone(), MockLatency::NONE);

        assert_eq!(block_on(api.list_lessons()).unwrap(), only);
        assert_eq!(
            block_on(api.assign_lesson("L001", "Sarah Tan")),
            Err(DashboardError::LessonNotFound("L001".to_string()))
        );
    }

    #[test]
    fn reset_restores_demo_lessons() {
        let api = api();
        block_on(api.assign_lesson("L011", "Sarah Tan")).unwrap();
        assert_ne!(api.lessons(), get_demo_lessons());

        api.reset_lessons();
        assert_eq!(api.lessons(), get_demo_lessons());
    }
}
