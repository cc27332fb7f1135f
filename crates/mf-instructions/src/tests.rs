//! Unit tests for mf-instructions.

use mf_bot::{Destination, RoutingRule};
use mf_core::{BotId, OutputId};

use crate::{Instruction, InstructionError, build};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn bot(n: u32) -> Destination {
    Destination::Bot(BotId(n))
}

fn output(n: u32) -> Destination {
    Destination::Output(OutputId(n))
}

const SAMPLE: &str = "\
value 5 goes to bot 2
bot 2 gives low to bot 1 and high to bot 0
value 3 goes to bot 1
bot 1 gives low to output 1 and high to bot 0
bot 0 gives low to output 2 and high to output 0
value 2 goes to bot 2
";

// ── Instruction::parse ────────────────────────────────────────────────────────

#[cfg(test)]
mod parse {
    use super::*;

    #[test]
    fn value_line() {
        assert_eq!(
            Instruction::parse(1, "value 5 goes to bot 2").unwrap(),
            Instruction::Value { chip: 5, bot: BotId(2) },
        );
    }

    #[test]
    fn rule_line_mixed_destinations() {
        assert_eq!(
            Instruction::parse(1, "bot 1 gives low to output 1 and high to bot 0").unwrap(),
            Instruction::Rule {
                donor: BotId(1),
                rule:  RoutingRule::new(output(1), bot(0)),
            },
        );
    }

    #[test]
    fn extra_whitespace_is_tolerated() {
        assert_eq!(
            Instruction::parse(1, "  value   17  goes to bot   73 ").unwrap(),
            Instruction::Value { chip: 17, bot: BotId(73) },
        );
    }

    #[test]
    fn wrong_token_count_is_malformed() {
        let err = Instruction::parse(4, "value 5 goes to bot").unwrap_err();
        assert!(matches!(err, InstructionError::Malformed { line: 4, .. }));

        let err = Instruction::parse(5, "bot 1 gives low to output 1 and high to bot").unwrap_err();
        assert!(matches!(err, InstructionError::Malformed { line: 5, .. }));
    }

    #[test]
    fn unknown_leading_word_is_malformed() {
        let err = Instruction::parse(2, "robot 1 gives low").unwrap_err();
        assert!(matches!(err, InstructionError::Malformed { line: 2, .. }));
    }

    #[test]
    fn unknown_destination_kind_is_malformed() {
        let err = Instruction::parse(1, "bot 1 gives low to bin 1 and high to bot 0").unwrap_err();
        assert!(matches!(err, InstructionError::Malformed { .. }));
    }

    #[test]
    fn non_integer_names_the_token() {
        let err = Instruction::parse(3, "value five goes to bot 2").unwrap_err();
        match err {
            InstructionError::InvalidNumber { line, token } => {
                assert_eq!(line, 3);
                assert_eq!(token, "five");
            }
            other => panic!("expected InvalidNumber, got {other:?}"),
        }
    }

    #[test]
    fn negative_value_is_rejected() {
        let err = Instruction::parse(1, "value -4 goes to bot 2").unwrap_err();
        assert!(matches!(err, InstructionError::InvalidNumber { .. }));
    }
}

// ── build ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod build_layout {
    use super::*;

    #[test]
    fn sample_registers_every_bot() {
        let layout = build(SAMPLE).unwrap();
        let ids: Vec<BotId> = layout.bots.ids().collect();
        assert_eq!(ids, vec![BotId(0), BotId(1), BotId(2)]);
        assert!(layout.outputs.is_empty());
    }

    #[test]
    fn initial_chips_in_line_order() {
        let layout = build(SAMPLE).unwrap();
        assert_eq!(layout.bots.get(BotId(2)).unwrap().chips(), &[5, 2]);
        assert_eq!(layout.bots.get(BotId(1)).unwrap().chips(), &[3]);
        assert!(layout.bots.get(BotId(0)).unwrap().chips().is_empty());
    }

    #[test]
    fn rules_attached_to_donors() {
        let layout = build(SAMPLE).unwrap();
        assert_eq!(
            layout.bots.get(BotId(2)).unwrap().rule(),
            Some(&RoutingRule::new(bot(1), bot(0))),
        );
        assert_eq!(
            layout.bots.get(BotId(0)).unwrap().rule(),
            Some(&RoutingRule::new(output(2), output(0))),
        );
    }

    #[test]
    fn line_order_does_not_matter() {
        let reversed: String = SAMPLE.lines().rev().map(|l| format!("{l}\n")).collect();
        let a = build(SAMPLE).unwrap();
        let b = build(&reversed).unwrap();
        for id in a.bots.ids() {
            let (x, y) = (a.bots.get(id).unwrap(), b.bots.get(id).unwrap());
            assert_eq!(x.rule(), y.rule());
            let (mut cx, mut cy) = (x.chips().to_vec(), y.chips().to_vec());
            cx.sort();
            cy.sort();
            assert_eq!(cx, cy);
        }
        assert_eq!(a.bots.len(), b.bots.len());
    }

    #[test]
    fn rule_target_bots_are_created() {
        let layout = build("bot 4 gives low to bot 9 and high to output 3").unwrap();
        assert!(layout.bots.contains(BotId(4)));
        assert!(layout.bots.contains(BotId(9)));
        assert_eq!(layout.bots.len(), 2);
    }

    #[test]
    fn duplicate_rule_keeps_last() {
        let text = "\
bot 1 gives low to output 0 and high to output 1
bot 1 gives low to output 5 and high to output 6
";
        let layout = build(text).unwrap();
        assert_eq!(
            layout.bots.get(BotId(1)).unwrap().rule(),
            Some(&RoutingRule::new(output(5), output(6))),
        );
    }

    #[test]
    fn blank_lines_skipped_but_counted() {
        let text = "value 1 goes to bot 0\n\n   \nvalue x goes to bot 0\n";
        let err = build(text).unwrap_err();
        assert_eq!(err.line(), Some(4));
    }

    #[test]
    fn empty_text_builds_empty_layout() {
        let layout = build("").unwrap();
        assert!(layout.bots.is_empty());
    }
}

// ── File loading ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod loading {
    use std::io::{Cursor, Write};

    use super::*;
    use crate::{load_layout_path, load_layout_reader};

    #[test]
    fn reader_matches_build() {
        let layout = load_layout_reader(Cursor::new(SAMPLE)).unwrap();
        assert_eq!(layout.bots.len(), 3);
    }

    #[test]
    fn path_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let layout = load_layout_path(file.path()).unwrap();
        assert_eq!(layout.bots.get(BotId(2)).unwrap().chips(), &[5, 2]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_layout_path(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, InstructionError::Io(_)));
        assert_eq!(err.line(), None);
    }
}
