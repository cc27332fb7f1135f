//! Registries for bots and output bins.
//!
//! Both are `BTreeMap`s keyed by id.  Ids in puzzle inputs are sparse, and an
//! ordered map gives every full scan the same ascending-id order, so two runs
//! over the same input visit bots identically.

use std::collections::BTreeMap;

use mf_core::{BotId, Chip, LookupError, LookupResult, OutputId};

use crate::Bot;

// ── BotStore ──────────────────────────────────────────────────────────────────

/// Every bot the instructions mention, created lazily on first reference.
#[derive(Clone, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BotStore {
    bots: BTreeMap<BotId, Bot>,
}

impl BotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered bots.
    #[inline]
    pub fn len(&self) -> usize {
        self.bots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bots.is_empty()
    }

    pub fn contains(&self, id: BotId) -> bool {
        self.bots.contains_key(&id)
    }

    /// Return the bot for `id`, registering an empty one if it is unseen.
    pub fn ensure(&mut self, id: BotId) -> &mut Bot {
        self.bots.entry(id).or_default()
    }

    /// Hand `chip` to bot `id`, registering the bot if needed.
    pub fn give(&mut self, id: BotId, chip: Chip) {
        self.ensure(id).receive(chip);
    }

    /// Register `bot` under `id`, replacing whatever was there.
    pub fn insert(&mut self, id: BotId, bot: Bot) {
        self.bots.insert(id, bot);
    }

    pub fn get(&self, id: BotId) -> Option<&Bot> {
        self.bots.get(&id)
    }

    pub fn get_mut(&mut self, id: BotId) -> Option<&mut Bot> {
        self.bots.get_mut(&id)
    }

    /// All registered ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = BotId> + '_ {
        self.bots.keys().copied()
    }

    /// All bots in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (BotId, &Bot)> + '_ {
        self.bots.iter().map(|(&id, bot)| (id, bot))
    }

    /// Number of bots currently holding exactly two chips.
    pub fn ready_count(&self) -> usize {
        self.iter().filter(|(_, b)| b.is_ready()).count()
    }

    /// Total chips still held by bots.
    pub fn chips_held(&self) -> usize {
        self.iter().map(|(_, b)| b.chips().len()).sum()
    }
}

// ── OutputBins ────────────────────────────────────────────────────────────────

/// Output bins, each holding the one chip most recently routed to it.
///
/// A bin exists only once something has been written to it.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutputBins {
    bins: BTreeMap<OutputId, Chip>,
}

impl OutputBins {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Write `chip` into bin `id`, returning the value it replaced.
    pub fn deposit(&mut self, id: OutputId, chip: Chip) -> Option<Chip> {
        self.bins.insert(id, chip)
    }

    /// Chip held by bin `id`.
    pub fn get(&self, id: OutputId) -> LookupResult<Chip> {
        self.bins
            .get(&id)
            .copied()
            .ok_or(LookupError::MissingOutput(id))
    }

    /// Read-only peek that does not treat absence as an error.
    pub fn peek(&self, id: OutputId) -> Option<Chip> {
        self.bins.get(&id).copied()
    }

    /// Multiply the chips held by every bin in `ids`.
    ///
    /// Fails on the first bin that was never written.  An empty `ids` yields 1.
    pub fn product(&self, ids: &[OutputId]) -> LookupResult<u64> {
        ids.iter().try_fold(1u64, |acc, &id| {
            let chip = self.get(id)?;
            acc.checked_mul(u64::from(chip))
                .ok_or(LookupError::ProductOverflow)
        })
    }

    /// All written bins in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (OutputId, Chip)> + '_ {
        self.bins.iter().map(|(&id, &chip)| (id, chip))
    }
}
