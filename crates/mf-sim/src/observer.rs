//! Observer trait for progress reporting and data collection.

use mf_bot::{OutputBins, RoutingRule};
use mf_core::{BotId, Chip, TargetPair};

/// Callbacks invoked by [`Factory::run`][crate::Factory::run] at key points
/// in the scan loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait FactoryObserver {
    /// Called before each full scan.  `pass` counts from 0.
    fn on_pass_start(&mut self, _pass: u64) {}

    /// Called after a bot has sent `low` and `high` on according to `rule`.
    fn on_handoff(&mut self, _bot: BotId, _low: Chip, _high: Chip, _rule: &RoutingRule) {}

    /// Called every time a bot is seen holding the target pair, including
    /// matches after the first.
    fn on_target_found(&mut self, _bot: BotId, _pair: TargetPair) {}

    /// Called after each full scan with the number of bots that acted.
    fn on_pass_end(&mut self, _pass: u64, _acted: usize) {}

    /// Called once when no bot holds two chips any more.
    fn on_quiescent(&mut self, _passes: u64, _outputs: &OutputBins) {}
}

/// A [`FactoryObserver`] that does nothing.
pub struct NoopObserver;

impl FactoryObserver for NoopObserver {}
