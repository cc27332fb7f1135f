//! Run-time knobs for a [`Factory`][crate::Factory] run.

use mf_core::TargetPair;

/// What happens when a chip is routed into an output bin that already holds
/// one.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum OutputPolicy {
    /// Replace the stored chip (last write wins).  A warning is logged.
    #[default]
    Overwrite,
    /// Abort the run with [`SimError::OutputOccupied`][crate::SimError::OutputOccupied].
    Reject,
}

/// Configuration for one simulation run.
///
/// The default runs until quiescence with no target pair and last-write-wins
/// output bins.
#[derive(Clone, Debug, Default)]
pub struct FactoryConfig {
    /// Chip pair whose comparing bot should be recorded.
    pub target: Option<TargetPair>,

    /// Abort with [`SimError::PassLimit`][crate::SimError::PassLimit] after
    /// this many full scans within one call to `run`.  `None` loops until
    /// quiescent, which never happens for a routing graph that cycles chips
    /// back to a bot.
    pub max_passes: Option<u64>,

    pub outputs: OutputPolicy,
}
