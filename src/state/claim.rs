// ============================================================================
// CLAIM TRANSACTION - Optimistic "take class" with whole-list rollback
// ============================================================================

use crate::models::Lesson;
use crate::state::DashboardState;

/// Copy of `lessons` with only `lesson_id` switched to the pending claim
pub fn apply_claim_patch(lessons: &[Lesson], lesson_id: &str, tutor: &str) -> Vec<Lesson> {
    lessons
        .iter()
        .map(|lesson| {
            if lesson.id == lesson_id {
                lesson.claimed_by(tutor)
            } else {
                lesson.clone()
            }
        })
        .collect()
}

/// In-flight claim. Holds the full lesson list as it was before the patch;
/// `rollback` restores all of it, including other lessons changed meanwhile.
#[must_use = "a claim must be committed or rolled back"]
pub struct ClaimTransaction {
    lesson_id: String,
    tutor: String,
    previous: Vec<Lesson>,
}

impl ClaimTransaction {
    /// Snapshot, patch and publish the optimistic list
    pub fn begin(state: &DashboardState, lesson_id: &str, tutor: &str) -> Self {
        let previous = state.get_lessons();
        let patched = apply_claim_patch(&previous, lesson_id, tutor);
        state.set_lessons(patched);
        state.notify();

        log::info!("⏳ [CLAIM] {} pending for {}", lesson_id, tutor);

        Self {
            lesson_id: lesson_id.to_string(),
            tutor: tutor.to_string(),
            previous,
        }
    }

    pub fn lesson_id(&self) -> &str {
        &self.lesson_id
    }

    pub fn previous(&self) -> &[Lesson] {
        &self.previous
    }

    /// The optimistic value stands; a later fetch reconciles it
    pub fn commit(self) {
        log::info!("✅ [CLAIM] {} confirmed for {}", self.lesson_id, self.tutor);
    }

    pub fn rollback(self, state: &DashboardState) {
        log::warn!("↩️ [CLAIM] {} rolled back", self.lesson_id);
        state.set_lessons(self.previous);
        state.notify();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::demo::get_demo_lessons;
    use crate::models::{LessonFilter, LessonStatus, LessonType};

    fn seeded_state() -> DashboardState {
        let state = DashboardState::with_filter(LessonFilter::none());
        state.set_lessons(get_demo_lessons());
        state
    }

    #[test]
    fn patch_touches_only_the_target() {
        let lessons = get_demo_lessons();
        let patched = apply_claim_patch(&lessons, "L010", "Sarah Tan");

        for (before, after) in lessons.iter().zip(&patched) {
            if before.id == "L010" {
                assert_eq!(after.status, LessonStatus::Confirming);
                assert_eq!(after.lesson_type, LessonType::Upcoming);
                assert_eq!(after.tutor.as_deref(), Some("Sarah Tan"));
                assert_eq!(after.date, before.date);
            } else {
                assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn patch_with_unknown_id_is_identity() {
        let lessons = get_demo_lessons();
        assert_eq!(apply_claim_patch(&lessons, "L999", "Sarah Tan"), lessons);
    }

    #[test]
    fn rollback_restores_whole_list() {
        let state = seeded_state();
        let before = state.get_lessons();

        let first = ClaimTransaction::begin(&state, "L010", "Sarah Tan");
        let second = ClaimTransaction::begin(&state, "L011", "Sarah Tan");
        assert_eq!(second.lesson_id(), "L011");
        second.commit();

        first.rollback(&state);
        assert_eq!(state.get_lessons(), before);
    }

    #[test]
    fn commit_keeps_optimistic_value() {
        let state = seeded_state();
        let tx = ClaimTransaction::begin(&state, "L012", "Sarah Tan");
        assert_eq!(tx.previous(), get_demo_lessons().as_slice());
        tx.commit();

        let lesson = state.find_lesson("L012").unwrap();
        assert_eq!(lesson.status, LessonStatus::Confirming);
    }
}
