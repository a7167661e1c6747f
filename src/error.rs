//! Crate-wide error and result types.

/// Result type used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised while claiming the devices the pattern engine drives.
///
/// Every variant is a fatal startup condition: if device construction fails,
/// the dispatcher must never run. The pattern engine itself has no
/// recoverable runtime errors - a mode-switch request is the designed
/// cancellation signal, not a failure.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[non_exhaustive]
pub enum Error {
    /// The executor refused to spawn a device task.
    #[display("failed to spawn device task: {_0:?}")]
    TaskSpawn(#[error(not(source))] embassy_executor::SpawnError),

    /// The single LED strip this build is configured for was claimed twice.
    #[display("LED strip already claimed")]
    StripClaimed,
}
