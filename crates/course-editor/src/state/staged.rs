//! Staged-change tracking against the last persisted draft.

use std::time::{Duration, Instant};

use course_model::Section;

use crate::settings::AutoSaveConfig;

/// The sections as last loaded or saved, and how the draft has drifted
/// from them since.
///
/// A draft that returns to the baseline, for example by editing a section
/// back to its saved values, carries no staged changes.
#[derive(Debug, Clone, Default)]
pub struct StagedChanges {
    baseline: Vec<Section>,

    /// Mutations since the draft last matched the baseline.
    pending: usize,

    first_staged: Option<Instant>,
    last_staged: Option<Instant>,
}

impl StagedChanges {
    pub fn new(baseline: Vec<Section>) -> Self {
        Self {
            baseline,
            ..Self::default()
        }
    }

    pub fn baseline(&self) -> &[Section] {
        &self.baseline
    }

    #[inline]
    pub fn has_changes(&self) -> bool {
        self.pending > 0
    }

    /// Number of staged mutations since the draft last matched the baseline.
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Record a mutation that left the draft as `draft`.
    pub fn record(&mut self, draft: &[Section]) {
        if draft == self.baseline.as_slice() {
            self.clear();
            return;
        }
        let now = Instant::now();
        self.pending += 1;
        self.last_staged = Some(now);
        self.first_staged.get_or_insert(now);
    }

    /// Adopt `baseline` as the persisted draft after a load or a save.
    pub fn rebase(&mut self, baseline: Vec<Section>) {
        self.baseline = baseline;
        self.clear();
    }

    /// Drop staged changes if `draft` matches the baseline again. Returns
    /// whether anything was dropped.
    pub fn reconcile(&mut self, draft: &[Section]) -> bool {
        if self.has_changes() && draft == self.baseline.as_slice() {
            self.clear();
            return true;
        }
        false
    }

    /// Check if the auto-save policy wants the staged changes saved now.
    pub fn auto_save_due(&self, config: &AutoSaveConfig) -> bool {
        self.auto_save_due_at(config, Instant::now())
    }

    fn auto_save_due_at(&self, config: &AutoSaveConfig, now: Instant) -> bool {
        match (self.first_staged, self.last_staged) {
            (Some(first), Some(last)) => {
                config.is_due(elapsed(last, now), elapsed(first, now))
            }
            _ => false,
        }
    }

    fn clear(&mut self) {
        self.pending = 0;
        self.first_staged = None;
        self.last_staged = None;
    }
}

fn elapsed(since: Instant, now: Instant) -> Duration {
    now.saturating_duration_since(since)
}
