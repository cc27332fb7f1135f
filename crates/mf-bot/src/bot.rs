//! A single bot: the chips it holds and where it sends them.

use std::fmt;

use mf_core::{BotId, Chip, OutputId};

// ── Destination ───────────────────────────────────────────────────────────────

/// Where a bot sends one of its chips.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Destination {
    Bot(BotId),
    Output(OutputId),
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Bot(id) => write!(f, "{id}"),
            Destination::Output(id) => write!(f, "{id}"),
        }
    }
}

// ── RoutingRule ───────────────────────────────────────────────────────────────

/// The pair of destinations a bot uses once it holds two chips.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingRule {
    /// Receives the lower-valued chip.
    pub low: Destination,
    /// Receives the higher-valued chip.
    pub high: Destination,
}

impl RoutingRule {
    pub fn new(low: Destination, high: Destination) -> Self {
        Self { low, high }
    }

    /// Bots named by this rule (zero, one, or two of them).
    pub fn bot_targets(&self) -> impl Iterator<Item = BotId> + '_ {
        [self.low, self.high].into_iter().filter_map(|d| match d {
            Destination::Bot(id) => Some(id),
            Destination::Output(_) => None,
        })
    }
}

// ── Bot ───────────────────────────────────────────────────────────────────────

/// A bot holds at most two chips, in arrival order.
///
/// The two-chip ceiling is upheld by the simulation (a bot is emptied as soon
/// as a scan finds it holding two), not checked here.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bot {
    chips: Vec<Chip>,
    rule:  Option<RoutingRule>,
}

impl Bot {
    pub fn new() -> Self {
        Self::default()
    }

    /// A bot already holding `chips`.
    pub fn with_chips(chips: impl IntoIterator<Item = Chip>) -> Self {
        Self { chips: chips.into_iter().collect(), rule: None }
    }

    /// Chips currently held, in arrival order.
    #[inline]
    pub fn chips(&self) -> &[Chip] {
        &self.chips
    }

    #[inline]
    pub fn rule(&self) -> Option<&RoutingRule> {
        self.rule.as_ref()
    }

    /// `true` when the bot holds exactly two chips and must act.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.chips.len() == 2
    }

    pub fn receive(&mut self, chip: Chip) {
        self.chips.push(chip);
    }

    /// Assign the routing rule, returning the one it replaces (if any).
    pub fn set_rule(&mut self, rule: RoutingRule) -> Option<RoutingRule> {
        self.rule.replace(rule)
    }

    /// Remove both chips and return them as `(low, high)`.
    ///
    /// Returns `None` and leaves the bot untouched unless it holds exactly
    /// two chips.
    pub fn take_pair(&mut self) -> Option<(Chip, Chip)> {
        match *self.chips.as_slice() {
            [a, b] => {
                self.chips.clear();
                Some((a.min(b), a.max(b)))
            }
            _ => None,
        }
    }
}
