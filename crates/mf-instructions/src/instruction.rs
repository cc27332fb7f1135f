//! Single-line instruction parser.

use std::str::FromStr;

use mf_bot::{Destination, RoutingRule};
use mf_core::{BotId, Chip, OutputId};

use crate::{InstructionError, InstructionResult};

/// One parsed line of instruction text.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Instruction {
    /// `value <chip> goes to bot <bot>`
    Value { chip: Chip, bot: BotId },
    /// `bot <donor> gives low to <kind> <id> and high to <kind> <id>`
    Rule { donor: BotId, rule: RoutingRule },
}

impl Instruction {
    /// Parse one line.  `line` is only used to label errors.
    pub fn parse(line: usize, text: &str) -> InstructionResult<Self> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let malformed = |reason: &'static str| InstructionError::Malformed {
            line,
            text: text.to_owned(),
            reason,
        };

        match tokens.first().copied() {
            Some("value") => {
                let &["value", chip, "goes", "to", "bot", bot] = tokens.as_slice() else {
                    return Err(malformed("expected `value <chip> goes to bot <id>`"));
                };
                Ok(Instruction::Value {
                    chip: number(line, chip)?,
                    bot:  number(line, bot)?,
                })
            }
            Some("bot") => {
                let &[
                    "bot", donor, "gives", "low", "to", low_kind, low_id,
                    "and", "high", "to", high_kind, high_id,
                ] = tokens.as_slice()
                else {
                    return Err(malformed(
                        "expected `bot <id> gives low to <bot|output> <id> and high to <bot|output> <id>`",
                    ));
                };
                let low = destination(line, low_kind, low_id)
                    .ok_or_else(|| malformed("destination kind must be `bot` or `output`"))??;
                let high = destination(line, high_kind, high_id)
                    .ok_or_else(|| malformed("destination kind must be `bot` or `output`"))??;
                Ok(Instruction::Rule {
                    donor: number(line, donor)?,
                    rule:  RoutingRule::new(low, high),
                })
            }
            Some(_) => Err(malformed("line must start with `value` or `bot`")),
            None => Err(malformed("empty instruction")),
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn number<T: FromStr>(line: usize, token: &str) -> InstructionResult<T> {
    token.parse().map_err(|_| InstructionError::InvalidNumber {
        line,
        token: token.to_owned(),
    })
}

/// `None` for an unknown kind; `Some(Err)` for a bad id.
fn destination(line: usize, kind: &str, id: &str) -> Option<InstructionResult<Destination>> {
    match kind {
        "bot" => Some(number(line, id).map(|n: u32| Destination::Bot(BotId(n)))),
        "output" => Some(number(line, id).map(|n: u32| Destination::Output(OutputId(n)))),
        _ => None,
    }
}
