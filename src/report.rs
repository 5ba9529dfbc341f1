//! Run records and their textual rendering.

use core::fmt;

use serde::Serialize;

use crate::capability::CapabilityFacts;
use crate::config::{ExecutionMode, GatePolicy};
use crate::error::HarnessError;
use crate::exercise::ExerciseReport;

/// The per-type record handed to the reporting side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub type_name: &'static str,
    pub duplicable: bool,
    pub relocatable: bool,
}

impl Record {
    pub fn new(type_name: &'static str, facts: CapabilityFacts) -> Self {
        Self {
            type_name,
            duplicable: facts.duplicable,
            relocatable: facts.relocatable,
        }
    }

    pub const fn facts(&self) -> CapabilityFacts {
        CapabilityFacts::new(self.duplicable, self.relocatable)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "It is {}copyable and is {}moveable: {}",
            if self.duplicable { "" } else { "not " },
            if self.relocatable { "" } else { "not " },
            self.type_name,
        )
    }
}

/// Everything known about one subject's run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunRecord {
    #[serde(flatten)]
    pub record: Record,
    pub mode: ExecutionMode,
    pub gate_policy: GatePolicy,
    pub exercise: ExerciseReport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Render a batch of runs.
///
/// `Text` emits one reference line per record; `Json` emits a pretty array
/// of full run records.
pub fn render(runs: &[RunRecord], format: Format) -> Result<String, HarnessError> {
    match format {
        Format::Text => {
            let mut out = String::new();
            for run in runs {
                out.push_str(&run.record.to_string());
                out.push('\n');
            }
            Ok(out)
        }
        Format::Json => Ok(serde_json::to_string_pretty(runs)?),
    }
}
