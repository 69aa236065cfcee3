use std::sync::{Arc, Mutex, PoisonError};

use quiz_core::Clock;
use quiz_core::model::QuestionSet;

pub trait UiApp: Send + Sync {
    fn question_set(&self) -> Arc<QuestionSet>;
    fn clock(&self) -> Clock;
}

/// Holds the serialized quiz while the quiz view is torn down and rebuilt.
#[derive(Clone, Default)]
pub struct SnapshotSlot(Arc<Mutex<Option<String>>>);

impl SnapshotSlot {
    pub fn store(&self, snapshot: String) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = Some(snapshot);
    }

    #[must_use]
    pub fn load(&self) -> Option<String> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn clear(&self) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

#[derive(Clone)]
pub struct AppContext {
    questions: Arc<QuestionSet>,
    clock: Clock,
    snapshot_slot: SnapshotSlot,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            questions: app.question_set(),
            clock: app.clock(),
            snapshot_slot: SnapshotSlot::default(),
        }
    }

    /// Share an existing slot, e.g. one that already holds a snapshot.
    #[must_use]
    pub fn with_snapshot_slot(mut self, slot: SnapshotSlot) -> Self {
        self.snapshot_slot = slot;
        self
    }

    #[must_use]
    pub fn question_set(&self) -> Arc<QuestionSet> {
        Arc::clone(&self.questions)
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn snapshot_slot(&self) -> SnapshotSlot {
        self.snapshot_slot.clone()
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
