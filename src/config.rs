//! Harness configuration.
//!
//! Built once before any subject runs and only ever borrowed afterwards.

use core::fmt;

use serde::Serialize;

/// How the storage-growth phase is gated.
///
/// `Reference` keeps the historical formula, where unsafe-execution mode
/// *disables* growth for incomplete types instead of enabling it:
///
/// ```text
/// Reference:  run = !disable && (complete || !unsafe)
/// Symmetric:  run = !disable && (complete ||  unsafe)
/// ```
///
/// Bulk insertion uses the symmetric formula under both policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GatePolicy {
    #[default]
    Reference,
    Symmetric,
}

impl fmt::Display for GatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatePolicy::Reference => f.write_str("reference"),
            GatePolicy::Symmetric => f.write_str("symmetric"),
        }
    }
}

/// Coarse summary of the two execution flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    Safe,
    Unsafe,
    Disabled,
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionMode::Safe => f.write_str("safe"),
            ExecutionMode::Unsafe => f.write_str("unsafe"),
            ExecutionMode::Disabled => f.write_str("disabled"),
        }
    }
}

/// Process-wide, read-only settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct HarnessConfig {
    /// Run phases on types lacking the capability the phase needs.
    pub enable_unsafe_execution: bool,
    /// Skip every phase. Takes precedence over everything else.
    pub disable_all_execution: bool,
    pub gate_policy: GatePolicy,
}

impl HarnessConfig {
    pub const fn new() -> Self {
        Self {
            enable_unsafe_execution: false,
            disable_all_execution: false,
            gate_policy: GatePolicy::Reference,
        }
    }

    pub const fn with_unsafe_execution(mut self, enabled: bool) -> Self {
        self.enable_unsafe_execution = enabled;
        self
    }

    pub const fn with_all_execution_disabled(mut self, disabled: bool) -> Self {
        self.disable_all_execution = disabled;
        self
    }

    pub const fn with_gate_policy(mut self, policy: GatePolicy) -> Self {
        self.gate_policy = policy;
        self
    }

    pub const fn mode(&self) -> ExecutionMode {
        if self.disable_all_execution {
            ExecutionMode::Disabled
        } else if self.enable_unsafe_execution {
            ExecutionMode::Unsafe
        } else {
            ExecutionMode::Safe
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_const_new() {
        assert_eq!(HarnessConfig::default(), HarnessConfig::new());
        assert_eq!(HarnessConfig::default().mode(), ExecutionMode::Safe);
    }

    #[test]
    fn test_disable_wins_over_unsafe() {
        let config = HarnessConfig::new()
            .with_unsafe_execution(true)
            .with_all_execution_disabled(true);
        assert_eq!(config.mode(), ExecutionMode::Disabled);
    }
}
