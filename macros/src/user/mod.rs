//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Subject)]` | on struct/enum | Register a type with the harness |
//! | `classify!` | function macro | Capability facts of any concrete type |

mod classify;
mod subject;

pub use classify::{expand_classify, ClassifyInput};
pub use subject::expand_derive_subject;
