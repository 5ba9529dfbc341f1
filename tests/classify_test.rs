//! Tests for the capability classifier: `classify!`, `#[derive(Subject)]`
//! and `classify::<T>()`.

use std::cell::RefCell;
use std::marker::PhantomPinned;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use cap_probe::catalog::{
    CopyableWithLegacy, Experiment, LegacyBuffer, MoveOnlyWithCopyable, MoveOnlyWithLegacy,
    MoveOnlyWithoutCopyable, PinnedCopyable, PinnedMoveOnly, UniqueResource,
};
use cap_probe::prelude::*;

// =============================================================================
// Helper macros
// =============================================================================

/// Assert the facts of a concrete type.
/// Usage: `assert_facts!(Type => duplicable, relocatable)`
macro_rules! assert_facts {
    ($ty:ty => $dup:expr, $reloc:expr) => {
        assert_eq!(
            classify!($ty),
            CapabilityFacts::new($dup, $reloc),
            "unexpected facts for `{}`",
            stringify!($ty)
        );
    };
}

// =============================================================================
// classify! on arbitrary concrete types
// =============================================================================

#[test]
fn test_std_types() {
    assert_facts!(String => true, true);
    assert_facts!(i32 => true, true);
    assert_facts!(Vec<u8> => true, true);
    assert_facts!(Box<str> => true, true);
    assert_facts!(PhantomPinned => true, false);
}

#[test]
fn test_non_clone_std_types() {
    assert_facts!(std::sync::Mutex<i32> => false, true);
    assert_facts!(std::fs::File => false, true);
}

#[test]
fn test_classify_needs_no_default() {
    struct NoDefault(#[allow(dead_code)] u8);
    assert_facts!(NoDefault => false, true);
}

#[test]
fn test_classify_in_const_context() {
    const FACTS: CapabilityFacts = classify!(String);
    assert!(FACTS.is_complete());
}

// =============================================================================
// Catalog shapes
// =============================================================================

#[test]
fn test_unique_resource_blocks_duplication_only() {
    assert_facts!(UniqueResource => false, true);
    assert_eq!(classify::<MoveOnlyWithCopyable>(), CapabilityFacts::new(false, true));
    assert_eq!(classify::<MoveOnlyWithoutCopyable>(), CapabilityFacts::new(false, true));
    assert_eq!(classify::<MoveOnlyWithLegacy>(), CapabilityFacts::new(false, true));
}

#[test]
fn test_copyable_shapes_are_complete() {
    assert_eq!(classify::<LegacyBuffer>(), CapabilityFacts::ALL);
    assert_eq!(classify::<CopyableWithLegacy>(), CapabilityFacts::ALL);
    assert_eq!(classify::<Experiment>(), CapabilityFacts::ALL);
}

#[test]
fn test_pinned_shapes() {
    assert_eq!(classify::<PinnedCopyable>(), CapabilityFacts::new(true, false));
    assert_eq!(classify::<PinnedMoveOnly>(), CapabilityFacts::NONE);
}

#[test]
fn test_derive_agrees_with_classify_macro() {
    assert_eq!(classify::<MoveOnlyWithLegacy>(), classify!(MoveOnlyWithLegacy));
    assert_eq!(classify::<PinnedCopyable>(), classify!(PinnedCopyable));
    assert_eq!(classify::<Experiment>(), classify!(Experiment));
}

#[test]
fn test_classify_is_pure() {
    let first = classify::<MoveOnlyWithCopyable>();
    for _ in 0..10 {
        assert_eq!(classify::<MoveOnlyWithCopyable>(), first);
    }
    assert_eq!(classify!(PinnedMoveOnly), classify!(PinnedMoveOnly));
}

// =============================================================================
// Derived subjects defined here
// =============================================================================

#[derive(Default, Subject)]
struct Handle {
    _inner: Box<str>,
}

#[derive(Clone, Default, Subject)]
#[subject(name = "renamed subject")]
struct Renamed;

#[derive(Clone, Default, Subject)]
enum Mode {
    #[default]
    Idle,
    #[allow(dead_code)]
    Busy(String),
}

#[test]
fn test_derived_local_types() {
    assert_eq!(classify::<Handle>(), CapabilityFacts::new(false, true));
    assert_eq!(classify::<Renamed>(), CapabilityFacts::ALL);
    assert_eq!(classify::<Mode>(), CapabilityFacts::ALL);
}

#[test]
fn test_subject_names() {
    assert_eq!(Renamed::name(), "renamed subject");
    assert!(Handle::name().ends_with("Handle"));
    assert!(cap_probe::subject_name::<Experiment>().ends_with("catalog::Experiment"));
}

#[test]
fn test_missing_capabilities() {
    let facts = classify::<PinnedCopyable>();
    assert_eq!(facts.missing().collect::<Vec<_>>(), vec![Capability::Relocate]);
    assert!(facts.supports(Capability::Duplicate));
}

// =============================================================================
// Shared-state clones
// =============================================================================

#[derive(Clone, Default, Subject)]
#[subject(shares_state)]
struct SharedCell(Rc<RefCell<u8>>);

#[derive(Clone, Default, Subject)]
#[subject(shares_state, name = "shared counter")]
struct SharedCounter(Arc<Mutex<u64>>);

#[derive(Clone, Default, PartialEq, Eq, Debug, Subject)]
#[subject(shares_state)]
struct SharedPinned {
    _cell: Rc<u8>,
    _pin: PhantomPinned,
}

#[test]
fn test_shares_state_is_not_duplicable() {
    // Trait detection alone sees a `Clone` impl.
    assert!(classify!(SharedCell).duplicable);

    assert_eq!(classify::<SharedCell>(), CapabilityFacts::new(false, true));
    assert_eq!(classify::<SharedCounter>(), CapabilityFacts::new(false, true));
    assert_eq!(SharedCounter::name(), "shared counter");
}

#[test]
fn test_shares_state_never_adds_relocation() {
    assert_eq!(classify::<SharedPinned>(), CapabilityFacts::NONE);
}

#[test]
fn test_shared_clone_really_aliases() {
    let original = SharedCell::default();
    let copy = original.clone();
    *copy.0.borrow_mut() = 7;
    assert_eq!(*original.0.borrow(), 7);
}

#[test]
fn test_shares_state_gates_insertion() {
    let config = HarnessConfig::default();
    let report = Exerciser::new(&config).exercise::<SharedCell>(classify::<SharedCell>());
    assert_eq!(report.insertion, PhaseOutcome::Skipped);
}

// =============================================================================
// Generic callers
// =============================================================================

fn facts_via_bound<T: Subject>() -> CapabilityFacts {
    classify::<T>()
}

fn facts_via_macro<T>() -> CapabilityFacts {
    classify!(T)
}

#[test]
fn test_generic_callers_use_subject_bound() {
    assert_eq!(facts_via_bound::<Experiment>(), CapabilityFacts::ALL);
    assert_eq!(facts_via_bound::<MoveOnlyWithLegacy>(), CapabilityFacts::new(false, true));

    // The macro cannot see through `T`.
    assert_eq!(facts_via_macro::<Experiment>(), CapabilityFacts::NONE);
}
