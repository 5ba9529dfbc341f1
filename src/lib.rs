//! # cap-probe
//!
//! Classifies types by two structural capabilities and shows how those
//! capabilities interact with container growth.
//!
//! - **duplicable**: the type implements `Clone`
//! - **relocatable**: the type implements `Unpin`
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Detection                                               |
//! |  - Detect<T>, inherent-const fallback probes (IS_CLONE, IS_UNPIN) |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Classification                                          |
//! |  - CapabilityFacts, Subject, classify, #[derive(Subject)]         |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Conditional Exercise                                    |
//! |  - HarnessConfig, gate, Exerciser (bulk insertion, growth)        |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Driver                                                  |
//! |  - catalog, Harness, RunRecord, render                            |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use cap_probe::prelude::*;
//!
//! #[derive(Default, Subject)]
//! struct Handle { inner: Box<str> }
//!
//! let harness = Harness::new(HarnessConfig::default());
//! let run = harness.run::<Handle>();
//! println!("{}", run.record);
//! // It is not copyable and is moveable: my_crate::Handle
//! ```
//!
//! Facts are fixed at compile time. Nothing here inspects a value to decide
//! what a type can do.

// Allow `::cap_probe` paths from derive output to work inside the crate itself
extern crate self as cap_probe;

// =============================================================================
// Layer 0: Detection
// =============================================================================
pub mod detect;

// =============================================================================
// Layer 1: Classification
// =============================================================================
pub mod capability;

// =============================================================================
// Layer 2: Conditional Exercise
// =============================================================================
pub mod config;
pub mod exercise;

// =============================================================================
// Layer 3: Driver
// =============================================================================
pub mod catalog;
pub mod error;
pub mod harness;
pub mod report;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use capability::{Capability, CapabilityFacts, ProbedFacts, Subject, classify, subject_name};
pub use config::{ExecutionMode, GatePolicy, HarnessConfig};
pub use error::HarnessError;
pub use exercise::{
    BULK_INSERT_COUNT, ExerciseReport, Exerciser, GrowthObservation, Phase, PhaseOutcome, gate,
};
pub use harness::Harness;
pub use report::{Format, Record, RunRecord, render};

// Re-export proc-macros
pub use macros::{Subject, classify};

/// Common items for the harness.
pub mod prelude {
    pub use crate::capability::{Capability, CapabilityFacts, Subject, classify};
    pub use crate::config::{GatePolicy, HarnessConfig};
    pub use crate::exercise::{Exerciser, Phase, PhaseOutcome};
    pub use crate::harness::Harness;
    pub use macros::{Subject, classify};
}
