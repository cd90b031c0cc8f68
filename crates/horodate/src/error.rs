//! Error types.

use thiserror::Error;

/// Errors surfaced by the typed conversion seams.
///
/// Parsing itself never fails: unrecognized input becomes the invalid
/// sentinel and flows through the formatting entry points as empty output.
/// This type exists for callers who want a `Result` view instead, via
/// `TryFrom<Stamp>` or `str::parse::<Stamp>()`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorodateError {
    /// The stamp is the invalid sentinel and carries no instant.
    #[error("invalid timestamp")]
    InvalidStamp,
}
