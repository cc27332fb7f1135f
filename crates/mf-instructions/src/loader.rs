//! Builds the bot registry and empty output bins from instruction text.

use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use mf_bot::{BotStore, OutputBins};

use crate::{Instruction, InstructionResult};

/// Everything the simulation needs to start: the bots (with their starting
/// chips and routing rules) and an empty set of output bins.
#[derive(Clone, Default, Debug)]
pub struct FactoryLayout {
    pub bots:    BotStore,
    pub outputs: OutputBins,
}

impl FactoryLayout {
    /// Apply one parsed instruction.
    ///
    /// A second rule for the same donor replaces the first.
    pub fn apply(&mut self, instruction: Instruction) {
        match instruction {
            Instruction::Value { chip, bot } => self.bots.give(bot, chip),
            Instruction::Rule { donor, rule } => {
                for target in rule.bot_targets() {
                    self.bots.ensure(target);
                }
                if let Some(old) = self.bots.ensure(donor).set_rule(rule) {
                    warn!(%donor, ?old, new = ?rule, "routing rule reassigned; keeping the last one");
                }
            }
        }
    }
}

/// Parse `text` into a [`FactoryLayout`].
///
/// Stops at the first malformed line.
pub fn build(text: &str) -> InstructionResult<FactoryLayout> {
    let mut layout = FactoryLayout::default();
    let mut parsed = 0usize;

    for (i, raw) in text.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        layout.apply(Instruction::parse(i + 1, raw)?);
        parsed += 1;
    }

    debug!(instructions = parsed, bots = layout.bots.len(), "routing table built");
    Ok(layout)
}

/// Read and parse an instruction file.
pub fn load_layout_path(path: &Path) -> InstructionResult<FactoryLayout> {
    let file = std::fs::File::open(path)?;
    load_layout_reader(file)
}

/// Like [`load_layout_path`] but accepts any `Read` source.
pub fn load_layout_reader<R: Read>(mut reader: R) -> InstructionResult<FactoryLayout> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    build(&text)
}
