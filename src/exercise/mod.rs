//! # Conditional Exerciser
//!
//! Runs a fixed two-phase script against a fresh `Vec<T>`:
//!
//! 1. **Bulk insertion**: push [`BULK_INSERT_COUNT`] default values one at a time.
//! 2. **Storage growth**: ask for twice the current capacity, which moves every
//!    stored element into a new allocation.
//!
//! Each phase is independently gated by [`gate`]. The sequence is linear:
//!
//! ```text
//! Start -> gate(A) -> [A-run | A-skip] -> gate(B) -> [B-run | B-skip] -> Done
//! ```
//!
//! In unsafe-execution mode a phase may run on a type that lacks the
//! capabilities it needs. Nothing is reported as an error in that case; the
//! run is logged at `warn` level and the observation is recorded as-is.

mod gating;

pub use gating::gate;

use core::fmt;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::capability::CapabilityFacts;
use crate::config::HarnessConfig;

/// Number of elements pushed by the bulk-insertion phase.
pub const BULK_INSERT_COUNT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    BulkInsertion,
    StorageGrowth,
}

impl Phase {
    pub const ALL: [Phase; 2] = [Phase::BulkInsertion, Phase::StorageGrowth];
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::BulkInsertion => f.write_str("bulk insertion"),
            Phase::StorageGrowth => f.write_str("storage growth"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseOutcome {
    Ran,
    Skipped,
}

impl PhaseOutcome {
    pub const fn ran(self) -> bool {
        matches!(self, PhaseOutcome::Ran)
    }
}

/// What the storage-growth phase did to the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GrowthObservation {
    pub len_before: usize,
    pub len_after: usize,
    pub capacity_before: usize,
    pub capacity_after: usize,
    /// The elements now live in a different allocation.
    pub relocated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExerciseReport {
    pub insertion: PhaseOutcome,
    pub growth: PhaseOutcome,
    pub len: usize,
    pub capacity: usize,
    pub observation: Option<GrowthObservation>,
}

impl ExerciseReport {
    pub const fn outcome(&self, phase: Phase) -> PhaseOutcome {
        match phase {
            Phase::BulkInsertion => self.insertion,
            Phase::StorageGrowth => self.growth,
        }
    }
}

/// Applies the gated phase script under a borrowed configuration.
#[derive(Debug, Clone, Copy)]
pub struct Exerciser<'a> {
    config: &'a HarnessConfig,
}

impl<'a> Exerciser<'a> {
    pub const fn new(config: &'a HarnessConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &'a HarnessConfig {
        self.config
    }

    /// Run both phases and drop the container.
    pub fn exercise<T: Default>(&self, facts: CapabilityFacts) -> ExerciseReport {
        self.exercise_into::<T>(facts).1
    }

    /// Run both phases and hand the container back.
    pub fn exercise_into<T: Default>(&self, facts: CapabilityFacts) -> (Vec<T>, ExerciseReport) {
        let mut items: Vec<T> = Vec::new();

        let insertion = self.decide(Phase::BulkInsertion, facts);
        if insertion.ran() {
            bulk_insert(&mut items);
        }

        let growth = self.decide(Phase::StorageGrowth, facts);
        let observation = growth.ran().then(|| grow_storage(&mut items));
        if let Some(obs) = &observation {
            trace!(?obs, "storage growth observed");
        }

        let report = ExerciseReport {
            insertion,
            growth,
            len: items.len(),
            capacity: items.capacity(),
            observation,
        };
        (items, report)
    }

    fn decide(&self, phase: Phase, facts: CapabilityFacts) -> PhaseOutcome {
        let permitted = gate(phase, facts, self.config);
        debug!(%phase, %facts, permitted, mode = %self.config.mode(), "phase gate");
        if !permitted {
            return PhaseOutcome::Skipped;
        }
        if !facts.is_complete() {
            let missing: Vec<_> = facts.missing().map(|cap| cap.trait_name()).collect();
            warn!(%phase, ?missing, "running phase without required capabilities");
        }
        PhaseOutcome::Ran
    }
}

fn bulk_insert<T: Default>(items: &mut Vec<T>) {
    for _ in 0..BULK_INSERT_COUNT {
        items.push(T::default());
    }
}

fn grow_storage<T>(items: &mut Vec<T>) -> GrowthObservation {
    let len_before = items.len();
    let capacity_before = items.capacity();
    let base_before = items.as_ptr() as usize;

    let target = capacity_before.saturating_mul(2);
    items.reserve_exact(target.saturating_sub(len_before));

    // Zero-sized elements never allocate, so there is nothing to move.
    let relocated = core::mem::size_of::<T>() != 0
        && capacity_before != 0
        && items.as_ptr() as usize != base_before;

    GrowthObservation {
        len_before,
        len_after: items.len(),
        capacity_before,
        capacity_after: items.capacity(),
        relocated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grow_storage_doubles_capacity() {
        let mut items: Vec<u64> = Vec::with_capacity(8);
        items.extend(0..5);
        let obs = grow_storage(&mut items);

        assert_eq!(obs.len_before, 5);
        assert_eq!(obs.len_after, 5);
        assert_eq!(obs.capacity_before, 8);
        assert!(obs.capacity_after >= 16);
        assert_eq!(items, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_grow_storage_on_empty_is_noop() {
        let mut items: Vec<String> = Vec::new();
        let obs = grow_storage(&mut items);

        assert_eq!(obs.capacity_before, 0);
        assert_eq!(obs.capacity_after, 0);
        assert!(!obs.relocated);
    }

    #[test]
    fn test_grow_storage_zero_sized() {
        let mut items: Vec<()> = vec![(); 3];
        let obs = grow_storage(&mut items);

        assert_eq!(obs.len_after, 3);
        assert!(!obs.relocated);
    }
}
