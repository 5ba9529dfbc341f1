//! # Capability Classifier
//!
//! Two independent facts per type, both fixed by the type's definition:
//!
//! - **duplicable**: `T: Clone`. A clone owns its state and can be mutated
//!   without touching the source.
//! - **relocatable**: `T: Unpin`. The value may be moved to fresh storage
//!   by a bitwise transfer; no per-element work is needed.
//!
//! Facts are resolved at compile time through [`Detect`](crate::detect::Detect)
//! and stored as associated consts on [`Subject`], so classification never
//! builds an instance and cannot observe runtime state.

use core::fmt;

use serde::Serialize;

/// One of the two capabilities the harness reasons about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Produce an independent copy (`Clone`).
    Duplicate,
    /// Transfer the value to new storage (`Unpin`).
    Relocate,
}

impl Capability {
    pub const ALL: [Capability; 2] = [Capability::Duplicate, Capability::Relocate];

    pub const fn trait_name(self) -> &'static str {
        match self {
            Capability::Duplicate => "Clone",
            Capability::Relocate => "Unpin",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Duplicate => f.write_str("duplicable"),
            Capability::Relocate => f.write_str("relocatable"),
        }
    }
}

/// Capability facts of a single type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CapabilityFacts {
    pub duplicable: bool,
    pub relocatable: bool,
}

impl CapabilityFacts {
    pub const NONE: Self = Self::new(false, false);
    pub const ALL: Self = Self::new(true, true);

    pub const fn new(duplicable: bool, relocatable: bool) -> Self {
        Self { duplicable, relocatable }
    }

    pub const fn supports(&self, cap: Capability) -> bool {
        match cap {
            Capability::Duplicate => self.duplicable,
            Capability::Relocate => self.relocatable,
        }
    }

    /// Both capabilities present: the only shape every phase accepts in safe mode.
    pub const fn is_complete(&self) -> bool {
        self.duplicable && self.relocatable
    }

    pub fn missing(&self) -> impl Iterator<Item = Capability> + '_ {
        Capability::ALL.into_iter().filter(|cap| !self.supports(*cap))
    }
}

impl fmt::Display for CapabilityFacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}duplicable, {}relocatable",
            if self.duplicable { "" } else { "not " },
            if self.relocatable { "" } else { "not " },
        )
    }
}

// =============================================================================
// Subject: the catalog interface
// =============================================================================

/// Facts as read by the compile-time probes, optionally weakened.
///
/// Only `#[derive(Subject)]` builds one from probe output. The public API
/// can remove a capability but never add one, so a [`Subject`] cannot
/// claim more than its trait impls provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProbedFacts(CapabilityFacts);

impl ProbedFacts {
    #[doc(hidden)]
    pub const fn __from_probes(duplicable: bool, relocatable: bool) -> Self {
        Self(CapabilityFacts::new(duplicable, relocatable))
    }

    /// Clones of this type alias mutable state with their source
    /// (`Rc<RefCell<_>>`, `Arc<Mutex<_>>`), so they do not count as copies.
    pub const fn sharing_state(self) -> Self {
        Self(CapabilityFacts::new(false, self.0.relocatable))
    }

    pub const fn facts(self) -> CapabilityFacts {
        self.0
    }
}

/// A type the harness can exercise.
///
/// Implement with `#[derive(Subject)]`, which fills [`Subject::FACTS`] from
/// the compile-time probes. `#[subject(shares_state)]` marks a `Clone` that
/// hands back shared state as not duplicable.
///
/// ```ignore
/// use cap_probe::prelude::*;
///
/// #[derive(Default, Subject)]
/// struct Handle { inner: Box<str> }
///
/// #[derive(Clone, Default, Subject)]
/// #[subject(shares_state)]
/// struct Shared(Rc<RefCell<u8>>);
///
/// assert_eq!(classify::<Handle>(), CapabilityFacts::new(false, true));
/// assert_eq!(classify::<Shared>(), CapabilityFacts::new(false, true));
/// ```
pub trait Subject: Default + 'static {
    const FACTS: ProbedFacts;

    /// Identity used in reports when the subject is run directly.
    /// Catalog runs report the entry's short name instead.
    fn name() -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Capability facts of `T`. Pure; no value of `T` is created.
#[inline]
pub const fn classify<T: Subject>() -> CapabilityFacts {
    T::FACTS.facts()
}

/// Reported identity of `T`.
#[inline]
pub fn subject_name<T: Subject>() -> &'static str {
    T::name()
}
