//! Unit tests for mf-bot.

#[cfg(test)]
mod bot {
    use mf_core::{BotId, OutputId};

    use crate::{Bot, Destination, RoutingRule};

    #[test]
    fn receive_keeps_arrival_order() {
        let mut bot = Bot::new();
        bot.receive(5);
        bot.receive(3);
        assert_eq!(bot.chips(), &[5, 3]);
        assert!(bot.is_ready());
    }

    #[test]
    fn set_rule_reports_replaced_rule() {
        let first = RoutingRule::new(Destination::Bot(BotId(2)), Destination::Output(OutputId(1)));
        let second = RoutingRule::new(Destination::Output(OutputId(0)), Destination::Output(OutputId(1)));
        let mut bot = Bot::new();
        assert_eq!(bot.set_rule(first), None);
        assert_eq!(bot.set_rule(second), Some(first));
        assert_eq!(bot.rule(), Some(&second));
    }

    #[test]
    fn take_pair_sorts_and_empties() {
        let mut bot = Bot::with_chips([61, 17]);
        assert_eq!(bot.take_pair(), Some((17, 61)));
        assert!(bot.chips().is_empty());
        assert!(!bot.is_ready());
    }

    #[test]
    fn take_pair_ignores_zero_or_one_chip() {
        let mut empty = Bot::new();
        assert_eq!(empty.take_pair(), None);

        let mut single = Bot::with_chips([9]);
        assert_eq!(single.take_pair(), None);
        assert_eq!(single.chips(), &[9]); // untouched
    }

    #[test]
    fn bot_targets_skips_outputs() {
        let rule = RoutingRule::new(Destination::Bot(BotId(4)), Destination::Output(OutputId(0)));
        assert_eq!(rule.bot_targets().collect::<Vec<_>>(), vec![BotId(4)]);

        let both = RoutingRule::new(Destination::Bot(BotId(4)), Destination::Bot(BotId(8)));
        assert_eq!(both.bot_targets().count(), 2);
    }

    #[test]
    fn destination_display() {
        assert_eq!(Destination::Bot(BotId(3)).to_string(), "bot 3");
        assert_eq!(Destination::Output(OutputId(12)).to_string(), "output 12");
    }
}

#[cfg(test)]
mod bot_store {
    use mf_core::BotId;

    use crate::BotStore;

    #[test]
    fn give_creates_lazily() {
        let mut store = BotStore::new();
        assert!(!store.contains(BotId(7)));
        store.give(BotId(7), 42);
        assert!(store.contains(BotId(7)));
        assert_eq!(store.get(BotId(7)).unwrap().chips(), &[42]);
    }

    #[test]
    fn ensure_does_not_disturb_existing_bot() {
        let mut store = BotStore::new();
        store.give(BotId(1), 5);
        store.ensure(BotId(1));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(BotId(1)).unwrap().chips(), &[5]);
    }

    #[test]
    fn ids_are_ascending() {
        let mut store = BotStore::new();
        for id in [30, 2, 17, 5] {
            store.ensure(BotId(id));
        }
        let ids: Vec<BotId> = store.ids().collect();
        assert_eq!(ids, vec![BotId(2), BotId(5), BotId(17), BotId(30)]);
    }

    #[test]
    fn ready_count_and_chips_held() {
        let mut store = BotStore::new();
        store.give(BotId(0), 1);
        store.give(BotId(0), 2);
        store.give(BotId(1), 3);
        store.ensure(BotId(2));
        assert_eq!(store.ready_count(), 1);
        assert_eq!(store.chips_held(), 3);
    }

    #[test]
    fn iter_pairs_ids_with_bots() {
        let mut store = BotStore::new();
        store.give(BotId(8), 4);
        store.ensure(BotId(3));
        let seen: Vec<(BotId, usize)> = store.iter().map(|(id, b)| (id, b.chips().len())).collect();
        assert_eq!(seen, vec![(BotId(3), 0), (BotId(8), 1)]);
    }
}

#[cfg(test)]
mod output_bins {
    use mf_core::{LookupError, OutputId};

    use crate::OutputBins;

    fn bins(pairs: &[(u32, u32)]) -> OutputBins {
        let mut out = OutputBins::new();
        for &(id, chip) in pairs {
            out.deposit(OutputId(id), chip);
        }
        out
    }

    #[test]
    fn missing_bin_is_an_error_not_zero() {
        let out = bins(&[(0, 5)]);
        assert_eq!(out.get(OutputId(0)), Ok(5));
        assert_eq!(out.get(OutputId(9)), Err(LookupError::MissingOutput(OutputId(9))));
        assert_eq!(out.peek(OutputId(9)), None);
    }

    #[test]
    fn deposit_is_last_write_wins() {
        let mut out = OutputBins::new();
        assert_eq!(out.deposit(OutputId(1), 3), None);
        assert_eq!(out.deposit(OutputId(1), 8), Some(3));
        assert_eq!(out.get(OutputId(1)), Ok(8));
    }

    #[test]
    fn product_of_three_bins() {
        let out = bins(&[(0, 5), (1, 3), (2, 7)]);
        let ids = [OutputId(0), OutputId(1), OutputId(2)];
        assert_eq!(out.product(&ids), Ok(105));
    }

    #[test]
    fn product_fails_on_missing_bin() {
        let out = bins(&[(0, 5), (1, 3)]);
        let ids = [OutputId(0), OutputId(4)];
        assert_eq!(out.product(&ids), Err(LookupError::MissingOutput(OutputId(4))));
    }

    #[test]
    fn product_overflow_is_reported() {
        let out = bins(&[(0, u32::MAX), (1, u32::MAX), (2, u32::MAX)]);
        let ids = [OutputId(0), OutputId(1), OutputId(2)];
        assert_eq!(out.product(&ids), Err(LookupError::ProductOverflow));
    }

    #[test]
    fn iter_ascending() {
        let out = bins(&[(4, 1), (0, 2), (2, 3)]);
        let ids: Vec<u32> = out.iter().map(|(id, _)| id.0).collect();
        assert_eq!(ids, vec![0, 2, 4]);
    }
}
