//! Harness errors.

use thiserror::Error;

/// Errors from the harness's outer surface.
///
/// Classification and the gated phases never fail; only catalog lookup and
/// report rendering can.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("unknown subject `{name}` (known: {known})")]
    UnknownSubject { name: String, known: String },

    #[error("failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}
