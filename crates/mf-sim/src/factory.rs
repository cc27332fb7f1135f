//! The `Factory` struct and its scan loop.

use tracing::{debug, info, warn};

use mf_bot::{BotStore, Destination, OutputBins, RoutingRule};
use mf_core::{BotId, Chip, LookupError, LookupResult, OutputId, TargetPair};

use crate::{FactoryConfig, FactoryObserver, NoopObserver, OutputPolicy, SimError, SimResult};

// ── Factory ───────────────────────────────────────────────────────────────────

/// The execution engine.
///
/// Owns every bot and output bin for the duration of a run.  Create via
/// [`FactoryBuilder`][crate::FactoryBuilder].
pub struct Factory {
    pub config: FactoryConfig,

    /// All bots, with the chips they currently hold.
    pub bots: BotStore,

    /// Output bins written so far.
    pub outputs: OutputBins,

    /// First bot seen holding `config.target`.
    responsible: Option<BotId>,

    /// Full scans completed so far.
    passes: u64,
}

impl Factory {
    pub(crate) fn new(config: FactoryConfig, bots: BotStore, outputs: OutputBins) -> Self {
        Self { config, bots, outputs, responsible: None, passes: 0 }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Scan until no bot holds two chips.
    ///
    /// Returns the responsible bot, if a target was configured and matched.
    /// Calling `run` again on a quiescent factory is a no-op.
    ///
    /// `config.max_passes` bounds the passes made by this call; passes made
    /// earlier through [`run_pass`](Self::run_pass) or `run` do not count.
    pub fn run<O: FactoryObserver>(&mut self, observer: &mut O) -> SimResult<Option<BotId>> {
        let start = self.passes;
        while self.bots.ready_count() > 0 {
            if let Some(limit) = self.config.max_passes {
                if self.passes - start >= limit {
                    return Err(SimError::PassLimit(limit));
                }
            }
            self.run_pass(observer)?;
        }

        info!(
            passes  = self.passes,
            outputs = self.outputs.len(),
            responsible = ?self.responsible,
            "factory quiescent"
        );
        observer.on_quiescent(self.passes, &self.outputs);
        Ok(self.responsible)
    }

    /// Run exactly one full scan over all bots.
    ///
    /// Returns how many bots acted.  Useful for tests and stepping.
    pub fn run_pass<O: FactoryObserver>(&mut self, observer: &mut O) -> SimResult<usize> {
        let pass = self.passes;
        observer.on_pass_start(pass);

        // Snapshot the ids: bots created mid-pass (only possible for a rule
        // naming an unseen bot) are picked up on the next pass.
        let ids: Vec<BotId> = self.bots.ids().collect();
        let mut acted = 0;
        for id in ids {
            if self.act(id, observer)? {
                acted += 1;
            }
        }

        self.passes += 1;
        observer.on_pass_end(pass, acted);
        Ok(acted)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The first bot seen holding the target pair.
    pub fn responsible_bot(&self) -> LookupResult<BotId> {
        self.responsible.ok_or(LookupError::NoResponsibleBot)
    }

    /// Chip held by output bin `id`.
    pub fn output(&self, id: OutputId) -> LookupResult<Chip> {
        lookup_output(&self.outputs, id)
    }

    /// Product of the chips in the listed output bins.
    pub fn multiply_outputs(&self, ids: &[OutputId]) -> LookupResult<u64> {
        self.outputs.product(ids)
    }

    /// Full scans completed so far.
    #[inline]
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// `true` once no bot holds two chips.
    pub fn is_quiescent(&self) -> bool {
        self.bots.ready_count() == 0
    }

    // ── Core step ─────────────────────────────────────────────────────────

    /// Let bot `id` act if it holds exactly two chips.
    fn act<O: FactoryObserver>(&mut self, id: BotId, observer: &mut O) -> SimResult<bool> {
        let Some(bot) = self.bots.get_mut(id) else {
            return Ok(false);
        };
        if !bot.is_ready() {
            return Ok(false);
        }

        let matched = self.config.target.filter(|pair| pair.matches(bot.chips()));
        // Nothing is taken or delivered unless the whole hand-off can go
        // through, so a failed run leaves the bot and the bins as they were.
        let rule = bot.rule().copied();
        let conflict = match (rule, self.config.outputs) {
            (Some(rule), OutputPolicy::Reject) => occupied_output(&self.outputs, &rule, bot.chips()),
            _ => None,
        };
        let taken = if rule.is_some() && conflict.is_none() { bot.take_pair() } else { None };

        if let Some(pair) = matched {
            observer.on_target_found(id, pair);
            self.record_target(id, pair);
        }

        let rule = rule.ok_or(SimError::MissingRule(id))?;
        if let Some(err) = conflict {
            return Err(err);
        }
        let Some((low, high)) = taken else {
            return Ok(false);
        };

        self.deliver(rule.low, low)?;
        self.deliver(rule.high, high)?;
        debug!(bot = %id, low, high, to_low = %rule.low, to_high = %rule.high, "handoff");
        observer.on_handoff(id, low, high, &rule);
        Ok(true)
    }

    fn record_target(&mut self, id: BotId, pair: TargetPair) {
        match self.responsible {
            None => {
                debug!(bot = %id, %pair, "target pair found");
                self.responsible = Some(id);
            }
            Some(first) if first != id => {
                debug!(bot = %id, %first, %pair, "target pair seen again; keeping first bot");
            }
            Some(_) => {}
        }
    }

    fn deliver(&mut self, dest: Destination, chip: Chip) -> SimResult<()> {
        match dest {
            Destination::Bot(bot) => self.bots.give(bot, chip),
            Destination::Output(output) => match self.config.outputs {
                OutputPolicy::Overwrite => {
                    if let Some(old) = self.outputs.deposit(output, chip) {
                        warn!(%output, old, new = chip, "output bin overwritten");
                    }
                }
                OutputPolicy::Reject => {
                    if let Some(existing) = self.outputs.peek(output) {
                        return Err(SimError::OutputOccupied { output, existing, incoming: chip });
                    }
                    self.outputs.deposit(output, chip);
                }
            },
        }
        Ok(())
    }
}

// ── Free functions ────────────────────────────────────────────────────────────

/// The error a `Reject` hand-off of `chips` along `rule` would hit, if any.
///
/// Both chips aimed at the same empty bin count as a conflict on the second.
fn occupied_output(outputs: &OutputBins, rule: &RoutingRule, chips: &[Chip]) -> Option<SimError> {
    let &[a, b] = chips else {
        return None;
    };
    let (low, high) = (a.min(b), a.max(b));

    if let Destination::Output(output) = rule.low {
        if let Some(existing) = outputs.peek(output) {
            return Some(SimError::OutputOccupied { output, existing, incoming: low });
        }
    }
    if let Destination::Output(output) = rule.high {
        let existing = outputs
            .peek(output)
            .or((rule.low == rule.high).then_some(low));
        if let Some(existing) = existing {
            return Some(SimError::OutputOccupied { output, existing, incoming: high });
        }
    }
    None
}

/// Chip held by output bin `id`; never a default for an unwritten bin.
pub fn lookup_output(outputs: &OutputBins, id: OutputId) -> LookupResult<Chip> {
    outputs.get(id)
}

/// Run `bots` and `outputs` to quiescence in place with default settings.
///
/// The state is handed back even when the run fails, so callers can inspect
/// where it stopped.
pub fn run(
    bots:    &mut BotStore,
    outputs: &mut OutputBins,
    target:  Option<TargetPair>,
) -> SimResult<Option<BotId>> {
    let config = FactoryConfig { target, ..FactoryConfig::default() };
    let mut factory = Factory::new(config, std::mem::take(bots), std::mem::take(outputs));
    let result = factory.run(&mut NoopObserver);
    *bots = factory.bots;
    *outputs = factory.outputs;
    result
}
