// Common utilities shared between the user-facing macros
//
// This module contains:
// - probe: token generation for the compile-time trait probes
// - parse_utils: helper attribute parsing

mod parse_utils;
mod probe;

pub use parse_utils::*;
pub use probe::*;
