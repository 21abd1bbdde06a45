//! Draft bookkeeping shared by the console forms.

/// Lifecycle of a form screen.
///
/// `Unloaded -> Loading -> Idle -> Submitting -> Idle`. Validation failures
/// never leave `Idle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Unloaded,
    Loading,
    Idle,
    Submitting,
}

impl FormPhase {
    pub fn is_busy(&self) -> bool {
        matches!(self, FormPhase::Loading | FormPhase::Submitting)
    }
}

/// Locally edited values plus the baseline they were loaded from.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FormDraft<T> {
    baseline: T,
    current: T,
}

impl<T: Clone + PartialEq> FormDraft<T> {
    pub fn new(values: T) -> Self {
        Self {
            baseline: values.clone(),
            current: values,
        }
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut T {
        &mut self.current
    }

    pub fn baseline(&self) -> &T {
        &self.baseline
    }

    pub fn is_dirty(&self) -> bool {
        self.current != self.baseline
    }

    /// Discards unsaved edits.
    pub fn reset(&mut self) {
        self.current = self.baseline.clone();
    }

    /// Makes `values` both the baseline and the current draft, e.g. after a load.
    pub fn rebase(&mut self, values: T) {
        self.baseline = values.clone();
        self.current = values;
    }

    /// Moves the baseline to `values` and keeps the current draft.
    pub fn rebase_baseline(&mut self, values: T) {
        self.baseline = values;
    }

    /// Accepts the current draft as the new baseline, e.g. after a save.
    pub fn commit(&mut self) {
        self.baseline = self.current.clone();
    }
}
