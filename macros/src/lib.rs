//! Procedural macros for the cap-probe harness
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Subject)]` | struct/enum | Register a type, facts detected at compile time |
//! | `classify!(Type)` | - | Capability facts of any concrete type |
//!
//! ## Example
//!
//! ```ignore
//! use cap_probe::prelude::*;
//!
//! #[derive(Clone, Default, Subject)]
//! #[subject(name = "plain string")]
//! struct Plain(String);
//!
//! assert_eq!(classify::<Plain>(), CapabilityFacts::new(true, true));
//! assert!(!classify!(core::marker::PhantomPinned).relocatable);
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod common;
mod user;

/// Derive `Subject` for a concrete struct or enum.
///
/// `FACTS` is filled from compile-time probes: duplicable is `Self: Clone`,
/// relocatable is `Self: Unpin`.
///
/// # Attributes
///
/// - `#[subject(name = "...")]`: identity used in reports, defaults to
///   `core::any::type_name::<Self>()`
/// - `#[subject(shares_state)]`: the type's `Clone` hands back state shared
///   with the source, so it is reported as not duplicable
#[proc_macro_derive(Subject, attributes(subject))]
pub fn derive_subject(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_subject(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Capability facts of a concrete type, as a const-evaluable expression.
///
/// # Usage
/// ```ignore
/// let facts = classify!(String);
/// assert!(facts.duplicable && facts.relocatable);
/// ```
///
/// Does not require the type to implement `Subject` or `Default`. Only
/// correct for concrete types: inside `fn f<T>()`, `classify!(T)` reports
/// `false` for both facts whatever `T` turns out to be.
///
/// Generic code should bound `T: Subject` and call `classify::<T>()`, which
/// reads the facts recorded where the concrete type was derived.
#[proc_macro]
pub fn classify(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::ClassifyInput);
    user::expand_classify(input).into()
}
