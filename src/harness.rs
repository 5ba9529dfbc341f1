//! Driver: classify, exercise and record one subject at a time.

use tracing::{info, info_span};

use crate::capability::{Subject, classify};
use crate::catalog;
use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::exercise::Exerciser;
use crate::report::{Record, RunRecord};

#[derive(Debug, Clone, Copy, Default)]
pub struct Harness {
    config: HarnessConfig,
}

impl Harness {
    pub const fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Classify and exercise `T` against a fresh container.
    pub fn run<T: Subject>(&self) -> RunRecord {
        self.run_labelled::<T>(T::name())
    }

    /// Like [`run`](Self::run), reporting `T` as `name`.
    pub fn run_labelled<T: Subject>(&self, name: &'static str) -> RunRecord {
        let facts = classify::<T>();
        let _span = info_span!("subject", name).entered();

        let exercise = Exerciser::new(&self.config).exercise::<T>(facts);
        info!(
            duplicable = facts.duplicable,
            relocatable = facts.relocatable,
            insertion = ?exercise.insertion,
            growth = ?exercise.growth,
            len = exercise.len,
            capacity = exercise.capacity,
            "subject exercised"
        );

        RunRecord {
            record: Record::new(name, facts),
            mode: self.config.mode(),
            gate_policy: self.config.gate_policy,
            exercise,
        }
    }

    /// Run every active catalog member in order.
    pub fn run_catalog(&self) -> Vec<RunRecord> {
        catalog::entries(&self.config)
            .map(|entry| entry.run(self))
            .collect()
    }

    /// Run the named catalog members in the order given.
    ///
    /// All names are resolved before anything runs.
    pub fn run_named<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<RunRecord>, HarnessError> {
        let entries = names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                catalog::find(name, &self.config).ok_or_else(|| HarnessError::UnknownSubject {
                    name: name.to_owned(),
                    known: catalog::entries(&self.config)
                        .map(|entry| entry.name)
                        .collect::<Vec<_>>()
                        .join(", "),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries.into_iter().map(|entry| entry.run(self)).collect())
    }
}
