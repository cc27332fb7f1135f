//! Query-time errors.
//!
//! These are raised when a caller asks for a result the simulation never
//! produced.  They are kept apart from the build errors (`mf-instructions`)
//! and run errors (`mf-sim`) so a front end can tell "bad input" from
//! "nothing to report".

use thiserror::Error;

use crate::OutputId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("{0} was never written")]
    MissingOutput(OutputId),

    #[error("no bot was found holding the target pair")]
    NoResponsibleBot,

    #[error("product of the requested outputs overflows u64")]
    ProductOverflow,
}

/// Shorthand result type for lookups.
pub type LookupResult<T> = Result<T, LookupError>;
