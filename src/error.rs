use thiserror::Error;

/// Errors for the CEIM kernel invariants.
#[derive(Debug, Error)]
pub enum CeimError {
    /// Zero applicable jurisdictional references for the current flow regime.
    /// This is a configuration error; re-sending the same sample cannot
    /// succeed until the refs change.
    #[error("no admissible jurisdictional limits for current flow regime")]
    NoAdmissibleLimit,
}
