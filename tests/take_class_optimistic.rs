mod test_support;

use futures::executor::block_on;
use futures::{pin_mut, poll};

use test_support::{dashboard, FlakySource, GatedSource};
use tutor_dashboard_pwa::models::{LessonStatus, LessonType};
use tutor_dashboard_pwa::DashboardError;

#[test]
fn claim_shows_pending_before_the_source_answers() {
    let (source, mut gates) = GatedSource::new(1);
    let vm = dashboard(source);

    block_on(async {
        vm.login("sarah@example.com", "secret").await.unwrap();
        vm.fetch_lessons().await;
        let before = vm.state().get_lessons();

        let claim = vm.take_class("L010");
        pin_mut!(claim);
        assert!(poll!(claim.as_mut()).is_pending());

        let during = vm.state().get_lessons();
        for (old, new) in before.iter().zip(&during) {
            if old.id == "L010" {
                assert_eq!(new.status, LessonStatus::Confirming);
                assert_eq!(new.lesson_type, LessonType::Upcoming);
                assert_eq!(new.tutor.as_deref(), Some("Sarah Tan"));
            } else {
                assert_eq!(new, old);
            }
        }
        assert_eq!(
            vm.source().assign_calls(),
            vec![("L010".to_string(), "Sarah Tan".to_string())]
        );

        gates.remove(0).send(()).unwrap();
        claim.await.unwrap();

        // Success keeps the optimistic value rather than the server copy
        let lesson = vm.state().find_lesson("L010").unwrap();
        assert_eq!(lesson.status, LessonStatus::Confirming);
        assert_eq!(lesson.tutor.as_deref(), Some("Sarah Tan"));

        let stored = vm.source().inner().lessons();
        let stored = stored.iter().find(|l| l.id == "L010").unwrap();
        assert_eq!(stored.status, LessonStatus::Confirmed);
    });
}

#[test]
fn claim_on_unknown_lesson_restores_list_and_errors() {
    let (source, mut gates) = GatedSource::new(1);
    let vm = dashboard(source);

    block_on(async {
        vm.login("sarah@example.com", "secret").await.unwrap();
        vm.fetch_lessons().await;
        let before = vm.state().get_lessons();

        let claim = vm.take_class("L999");
        pin_mut!(claim);
        assert!(poll!(claim.as_mut()).is_pending());
        assert_eq!(vm.state().get_lessons(), before);

        gates.remove(0).send(()).unwrap();
        assert_eq!(
            claim.await,
            Err(DashboardError::LessonNotFound("L999".to_string()))
        );
        assert_eq!(vm.state().get_lessons(), before);
    });
}

#[test]
fn transport_failure_rolls_back_the_claimed_lesson() {
    let source = FlakySource::new();
    source.fail_assign.set(true);
    let vm = dashboard(source);

    block_on(async {
        vm.login("sarah@example.com", "secret").await.unwrap();
        vm.fetch_lessons().await;
        let before = vm.state().get_lessons();

        let result = vm.take_class("L011").await;
        assert!(matches!(result, Err(DashboardError::ClaimFailed(_))));
        assert_eq!(vm.state().get_lessons(), before);
        assert!(vm.state().find_lesson("L011").unwrap().can_take_class());
    });
}

#[test]
fn failed_claim_also_undoes_a_claim_made_after_it_started() {
    let (source, mut gates) = GatedSource::new(2);
    let vm = dashboard(source);

    block_on(async {
        vm.login("sarah@example.com", "secret").await.unwrap();
        vm.fetch_lessons().await;
        let before = vm.state().get_lessons();

        let failing = vm.take_class("L999");
        pin_mut!(failing);
        assert!(poll!(failing.as_mut()).is_pending());

        let succeeding = vm.take_class("L010");
        pin_mut!(succeeding);
        assert!(poll!(succeeding.as_mut()).is_pending());

        let second_gate = gates.remove(1);
        let first_gate = gates.remove(0);

        second_gate.send(()).unwrap();
        succeeding.await.unwrap();
        assert_eq!(
            vm.state().find_lesson("L010").unwrap().status,
            LessonStatus::Confirming
        );

        first_gate.send(()).unwrap();
        assert!(failing.await.is_err());
        assert_eq!(vm.state().get_lessons(), before);
    });
}
