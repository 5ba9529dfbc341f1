//! # Static Capability Detection
//!
//! Answers "does this type implement X?" without constructing a value.
//!
//! ```ignore
//! use cap_probe::detect::{Detect, DuplicableFallback, RelocatableFallback};
//!
//! assert!(Detect::<String>::IS_CLONE);
//! assert!(!Detect::<core::marker::PhantomPinned>::IS_UNPIN);
//! ```
//!
//! Most callers want [`classify!`](crate::classify) or `#[derive(Subject)]`
//! instead of touching the probes directly.
//!
//! ## Detected Traits
//!
//! | Trait     | Const        | Meaning in the harness   |
//! |-----------|--------------|--------------------------|
//! | `Clone`   | `IS_CLONE`   | duplicable               |
//! | `Unpin`   | `IS_UNPIN`   | relocatable              |

pub mod autoref;

pub use autoref::{Detect, DuplicableFallback, RelocatableFallback};
