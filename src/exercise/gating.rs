//! Phase gating.
//!
//! ```text
//! BulkInsertion:  !disable && (complete || unsafe)
//! StorageGrowth:  !disable && (complete || !unsafe)    GatePolicy::Reference
//!                 !disable && (complete ||  unsafe)    GatePolicy::Symmetric
//! ```
//!
//! `complete` means the type is both duplicable and relocatable.

use crate::capability::CapabilityFacts;
use crate::config::{GatePolicy, HarnessConfig};

use super::Phase;

/// Whether `phase` may run for a type with `facts` under `config`.
pub const fn gate(phase: Phase, facts: CapabilityFacts, config: &HarnessConfig) -> bool {
    if config.disable_all_execution {
        return false;
    }
    let complete = facts.is_complete();
    let unsafe_mode = config.enable_unsafe_execution;
    match phase {
        Phase::BulkInsertion => complete || unsafe_mode,
        Phase::StorageGrowth => match config.gate_policy {
            GatePolicy::Reference => complete || !unsafe_mode,
            GatePolicy::Symmetric => complete || unsafe_mode,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_FACTS: [CapabilityFacts; 4] = [
        CapabilityFacts::new(false, false),
        CapabilityFacts::new(false, true),
        CapabilityFacts::new(true, false),
        CapabilityFacts::new(true, true),
    ];

    #[test]
    fn test_disabled_blocks_every_phase() {
        for unsafe_mode in [false, true] {
            for policy in [GatePolicy::Reference, GatePolicy::Symmetric] {
                let config = HarnessConfig::new()
                    .with_all_execution_disabled(true)
                    .with_unsafe_execution(unsafe_mode)
                    .with_gate_policy(policy);
                for facts in ALL_FACTS {
                    for phase in Phase::ALL {
                        assert!(!gate(phase, facts, &config), "{phase:?} {facts:?} {config:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_symmetric_policy_treats_phases_alike() {
        for unsafe_mode in [false, true] {
            let config = HarnessConfig::new()
                .with_unsafe_execution(unsafe_mode)
                .with_gate_policy(GatePolicy::Symmetric);
            for facts in ALL_FACTS {
                assert_eq!(
                    gate(Phase::BulkInsertion, facts, &config),
                    gate(Phase::StorageGrowth, facts, &config),
                );
            }
        }
    }
}
