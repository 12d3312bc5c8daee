#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use futures::channel::oneshot;

use tutor_dashboard_pwa::config::MockLatency;
use tutor_dashboard_pwa::models::{Lesson, LessonFilter, User};
use tutor_dashboard_pwa::services::{LessonDataSource, MockApi};
use tutor_dashboard_pwa::state::DashboardState;
use tutor_dashboard_pwa::viewmodels::DashboardViewModel;
use tutor_dashboard_pwa::{DashboardError, Result};

pub fn mock_api() -> MockApi {
    MockApi::new(MockLatency::NONE)
}

/// No filter, so tests see every lesson regardless of the current month
pub fn unfiltered_state() -> DashboardState {
    DashboardState::with_filter(LessonFilter::none())
}

pub fn dashboard<S: LessonDataSource>(source: S) -> DashboardViewModel<S> {
    DashboardViewModel::new(unfiltered_state(), source)
}

/// Data source call that `GatedSource` can hold back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gated {
    Authenticate,
    ListLessons,
    AssignLesson,
}

/// Mock backend whose gated calls each wait for a release signal, in call
/// order, so tests can look at state while the call is in flight
pub struct GatedSource {
    inner: MockApi,
    gated: Vec<Gated>,
    gates: RefCell<VecDeque<oneshot::Receiver<()>>>,
    assign_calls: RefCell<Vec<(String, String)>>,
}

impl GatedSource {
    /// Gates `assign_lesson` only
    pub fn new(gate_count: usize) -> (Self, Vec<oneshot::Sender<()>>) {
        Self::gating(&[Gated::AssignLesson], gate_count)
    }

    pub fn gating(gated: &[Gated], gate_count: usize) -> (Self, Vec<oneshot::Sender<()>>) {
        let mut senders = Vec::with_capacity(gate_count);
        let mut gates = VecDeque::with_capacity(gate_count);
        for _ in 0..gate_count {
            let (tx, rx) = oneshot::channel();
            senders.push(tx);
            gates.push_back(rx);
        }
        let source = Self {
            inner: mock_api(),
            gated: gated.to_vec(),
            gates: RefCell::new(gates),
            assign_calls: RefCell::new(Vec::new()),
        };
        (source, senders)
    }

    pub fn assign_calls(&self) -> Vec<(String, String)> {
        self.assign_calls.borrow().clone()
    }

    pub fn inner(&self) -> &MockApi {
        &self.inner
    }

    async fn wait(&self, call: Gated) -> Result<()> {
        if !self.gated.contains(&call) {
            return Ok(());
        }
        let gate = self.gates.borrow_mut().pop_front();
        if let Some(gate) = gate {
            gate.await
                .map_err(|_| DashboardError::FetchFailed("gate dropped".to_string()))?;
        }
        Ok(())
    }
}

impl LessonDataSource for GatedSource {
    async fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        self.wait(Gated::Authenticate).await?;
        self.inner.authenticate(email, password).await
    }

    async fn list_lessons(&self) -> Result<Vec<Lesson>> {
        self.wait(Gated::ListLessons).await?;
        self.inner.list_lessons().await
    }

    async fn assign_lesson(&self, lesson_id: &str, tutor_name: &str) -> Result<Lesson> {
        self.assign_calls
            .borrow_mut()
            .push((lesson_id.to_string(), tutor_name.to_string()));

        self.wait(Gated::AssignLesson)
            .await
            .map_err(|_| DashboardError::ClaimFailed("gate dropped".to_string()))?;
        self.inner.assign_lesson(lesson_id, tutor_name).await
    }
}

/// Mock backend with switchable transport failures
pub struct FlakySource {
    inner: MockApi,
    pub fail_list: Cell<bool>,
    pub fail_assign: Cell<bool>,
}

impl FlakySource {
    pub fn new() -> Self {
        Self {
            inner: mock_api(),
            fail_list: Cell::new(false),
            fail_assign: Cell::new(false),
        }
    }
}

impl LessonDataSource for FlakySource {
    async fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        self.inner.authenticate(email, password).await
    }

    async fn list_lessons(&self) -> Result<Vec<Lesson>> {
        if self.fail_list.get() {
            return Err(DashboardError::FetchFailed("connection reset".to_string()));
        }
        self.inner.list_lessons().await
    }

    async fn assign_lesson(&self, lesson_id: &str, tutor_name: &str) -> Result<Lesson> {
        if self.fail_assign.get() {
            return Err(DashboardError::ClaimFailed("connection reset".to_string()));
        }
        self.inner.assign_lesson(lesson_id, tutor_name).await
    }
}
