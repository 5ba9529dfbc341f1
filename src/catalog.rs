//! # Type Catalog
//!
//! Example shapes covering every (duplicable, relocatable) combination.
//!
//! | Type                      | duplicable | relocatable | failing case |
//! |---------------------------|------------|-------------|--------------|
//! | `LegacyBuffer`            | yes        | yes         |              |
//! | `MoveOnlyWithCopyable`    | no         | yes         |              |
//! | `MoveOnlyWithoutCopyable` | no         | yes         |              |
//! | `MoveOnlyWithLegacy`      | no         | yes         |              |
//! | `CopyableWithLegacy`      | yes        | yes         |              |
//! | `PinnedCopyable`          | yes        | no          | yes          |
//! | `PinnedMoveOnly`          | no         | no          | yes          |
//! | `Experiment`              | yes        | yes         |              |
//!
//! Catalog runs report each member under its short name, which does not
//! change between compiler versions the way `type_name` output can.
//!
//! Failing cases are entries that are not relocatable. They are only listed
//! when unsafe execution is enabled.

use core::marker::PhantomPinned;

use crate::Subject;
use crate::config::HarnessConfig;
use crate::harness::Harness;
use crate::report::RunRecord;

// =============================================================================
// Building blocks
// =============================================================================

/// Owned byte buffer with a hand-written deep copy.
#[derive(Debug, Default, PartialEq, Eq, Subject)]
pub struct LegacyBuffer {
    data: Box<[u8]>,
}

impl LegacyBuffer {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self { data: bytes.into() }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Clone for LegacyBuffer {
    fn clone(&self) -> Self {
        if self.data.is_empty() {
            return Self::default();
        }
        let mut data = vec![0u8; self.data.len()].into_boxed_slice();
        data.copy_from_slice(&self.data);
        Self { data }
    }

    fn clone_from(&mut self, source: &Self) {
        if self.data.len() == source.data.len() {
            self.data.copy_from_slice(&source.data);
        } else {
            *self = source.clone();
        }
    }
}

/// Uniquely owned heap value. Deliberately not `Clone`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UniqueResource(Box<String>);

impl UniqueResource {
    pub fn new(value: impl Into<String>) -> Self {
        Self(Box::new(value.into()))
    }

    pub fn get(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Move-only shapes
// =============================================================================

#[derive(Debug, Default, PartialEq, Eq, Subject)]
pub struct MoveOnlyWithCopyable {
    pub unique: UniqueResource,
    pub copyable: String,
}

#[derive(Debug, Default, PartialEq, Eq, Subject)]
pub struct MoveOnlyWithoutCopyable {
    pub unique: UniqueResource,
}

#[derive(Debug, Default, PartialEq, Eq, Subject)]
pub struct MoveOnlyWithLegacy {
    pub unique: UniqueResource,
    pub copyable: String,
    pub legacy: LegacyBuffer,
}

// =============================================================================
// Copyable shapes
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Subject)]
pub struct CopyableWithLegacy {
    pub copyable: String,
    pub legacy: LegacyBuffer,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Subject)]
pub struct Experiment {
    pub s: String,
}

// =============================================================================
// Address-sensitive shapes
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Subject)]
pub struct PinnedCopyable {
    pub copyable: String,
    _pin: PhantomPinned,
}

#[derive(Debug, Default, PartialEq, Eq, Subject)]
pub struct PinnedMoveOnly {
    pub unique: UniqueResource,
    _pin: PhantomPinned,
}

// =============================================================================
// Entries
// =============================================================================

/// One runnable catalog member.
#[derive(Clone, Copy)]
pub struct Entry {
    pub name: &'static str,
    pub failing_case: bool,
    run: fn(&Harness, &'static str) -> RunRecord,
}

impl Entry {
    pub const fn of<T: Subject>(name: &'static str) -> Self {
        Self {
            name,
            failing_case: !T::FACTS.facts().relocatable,
            run: Harness::run_labelled::<T>,
        }
    }

    /// Run the member, reporting it under its short name.
    pub fn run(&self, harness: &Harness) -> RunRecord {
        (self.run)(harness, self.name)
    }
}

impl core::fmt::Debug for Entry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Entry")
            .field("name", &self.name)
            .field("failing_case", &self.failing_case)
            .finish_non_exhaustive()
    }
}

macro_rules! catalog {
    ($($ty:ident),* $(,)?) => {
        &[$(Entry::of::<$ty>(stringify!($ty))),*]
    };
}

/// Every catalog member, in run order.
pub const CATALOG: &[Entry] = catalog![
    LegacyBuffer,
    MoveOnlyWithCopyable,
    MoveOnlyWithoutCopyable,
    MoveOnlyWithLegacy,
    CopyableWithLegacy,
    PinnedCopyable,
    PinnedMoveOnly,
    Experiment,
];

/// Members active under `config`.
pub fn entries(config: &HarnessConfig) -> impl Iterator<Item = &'static Entry> + '_ {
    CATALOG
        .iter()
        .filter(move |entry| !entry.failing_case || config.enable_unsafe_execution)
}

/// Look up an active member by its short name.
pub fn find(name: &str, config: &HarnessConfig) -> Option<&'static Entry> {
    entries(config).find(|entry| entry.name == name)
}
