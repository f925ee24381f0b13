//! Property tests over random operation sequences on a single account.

use proptest::prelude::*;

use crate::constants::*;
use crate::instructions::{
    apply_reward_rate, process_claim, process_deposit, process_extend_lock, process_withdraw,
};
use crate::rewards::calculate_rewards;
use crate::state::{reward_multiplier, LedgerConfig, LockTier, StakeRecord};
use crate::testing::*;

#[derive(Clone, Debug)]
enum Op {
    Deposit { amount: u64, lock_period: i64 },
    Advance(i64),
    Claim,
    Extend(i64),
    Withdraw,
    SetRate(u8),
}

fn lock_period() -> impl Strategy<Value = i64> {
    prop_oneof![
        4 => prop::sample::select(LockTier::ALL.to_vec()).prop_map(LockTier::lock_period),
        1 => (1i64..400).prop_map(|days| days * SECONDS_PER_DAY + 1),
    ]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (MIN_STAKE - 10..=MAX_STAKE / 10, lock_period())
            .prop_map(|(amount, lock_period)| Op::Deposit { amount, lock_period }),
        4 => (0i64..120 * SECONDS_PER_DAY).prop_map(Op::Advance),
        2 => Just(Op::Claim),
        2 => lock_period().prop_map(Op::Extend),
        2 => Just(Op::Withdraw),
        1 => (0u8..=120).prop_map(Op::SetRate),
    ]
}

fn assert_record_invariants(record: &StakeRecord) {
    if record.is_active() {
        assert!(LockTier::from_lock_period(record.lock_period).is_some());
        assert_eq!(record.reward_multiplier, reward_multiplier(record.lock_period));
        assert!(record.last_claim_time >= record.start_time);
    } else {
        assert_eq!(record.start_time, 0);
        assert_eq!(record.last_claim_time, 0);
        assert_eq!(record.lock_period, 0);
        assert_eq!(record.reward_multiplier, 0);
    }
}

struct Harness {
    ledger: LedgerConfig,
    record: StakeRecord,
    principal: MockCustody,
    reward: MockCustody,
    now: i64,
    deposited_since_withdraw: u64,
}

impl Harness {
    fn new() -> Self {
        Self {
            ledger: ledger(),
            record: record(),
            principal: MockCustody::funded(0, u64::MAX / 2),
            reward: MockCustody::funded(u64::MAX / 2, 0),
            now: T0,
            deposited_since_withdraw: 0,
        }
    }

    fn apply(&mut self, op: &Op) {
        let before = self.record.clone();
        match *op {
            Op::Deposit { amount, lock_period } => {
                let result = process_deposit(
                    &mut self.ledger,
                    &mut self.record,
                    &self.principal,
                    &self.reward,
                    amount,
                    lock_period,
                    self.now,
                );
                match result {
                    Ok(_) => self.deposited_since_withdraw += amount,
                    Err(_) => assert_eq!(self.record, before),
                }
            }
            Op::Advance(seconds) => self.now += seconds,
            Op::Claim => {
                let rate = self.ledger.base_reward_rate;
                match process_claim(&mut self.ledger, &mut self.record, &self.reward, self.now) {
                    Ok(receipt) => {
                        assert!(receipt.reward > 0);
                        assert!(self.record.last_claim_time >= before.last_claim_time);
                        assert!(self.record.last_claim_time <= self.now);
                        assert_eq!(self.record.amount, before.amount);
                        assert_eq!(self.record.lock_period, before.lock_period);

                        let again = calculate_rewards(&self.record, rate, self.now).unwrap();
                        assert_eq!(again, 0);
                    }
                    Err(_) => assert_eq!(self.record, before),
                }
            }
            Op::Extend(lock_period) => match process_extend_lock(&mut self.record, lock_period) {
                Ok(_) => {
                    assert!(self.record.lock_period > before.lock_period);
                    assert_eq!(self.record.start_time, before.start_time);
                    assert_eq!(self.record.last_claim_time, before.last_claim_time);
                }
                Err(_) => assert_eq!(self.record, before),
            },
            Op::Withdraw => {
                let result = process_withdraw(
                    &mut self.ledger,
                    &mut self.record,
                    &self.principal,
                    &self.reward,
                    self.now,
                );
                match result {
                    Ok(receipt) => {
                        assert_eq!(receipt.principal, self.deposited_since_withdraw);
                        self.deposited_since_withdraw = 0;
                    }
                    Err(_) => assert_eq!(self.record, before),
                }
            }
            Op::SetRate(rate) => {
                let authority = self.ledger.authority;
                let _ = apply_reward_rate(&mut self.ledger, &authority, rate, self.now);
                assert!(self.ledger.base_reward_rate > 0);
                assert!(self.ledger.base_reward_rate <= MAX_REWARD_RATE);
            }
        }

        assert_record_invariants(&self.record);
        assert_eq!(self.ledger.total_staked, self.record.amount);
        assert_eq!(self.principal.vault.get(), self.record.amount);
        assert_eq!(self.record.amount, self.deposited_since_withdraw);
    }
}

proptest! {
    #[test]
    fn invariants_hold_across_operation_sequences(ops in prop::collection::vec(op(), 1..60)) {
        let mut harness = Harness::new();
        for op in &ops {
            harness.apply(op);
        }
    }

    #[test]
    fn reward_is_linear_floor_of_formula(
        amount in 1u64..=1_000_000_000_000,
        tier in prop::sample::select(LockTier::ALL.to_vec()),
        rate in 1u8..=MAX_REWARD_RATE,
        days in 0i64..=3_650,
        extra in 0i64..SECONDS_PER_DAY,
    ) {
        let mut record = StakeRecord {
            amount,
            start_time: T0,
            last_claim_time: T0,
            ..Default::default()
        };
        record.set_lock(tier);

        let now = T0 + days * SECONDS_PER_DAY + extra;
        let reward = calculate_rewards(&record, rate, now).unwrap();
        let expected = amount as u128 * rate as u128 * tier.multiplier() as u128 * days as u128
            / (365 * 100 * 100);
        prop_assert_eq!(reward as u128, expected);
    }

    #[test]
    fn claiming_in_pieces_never_pays_more_than_at_once(
        amount in 1_000u64..=1_000_000_000,
        steps in prop::collection::vec(1i64..10 * SECONDS_PER_DAY, 1..20),
    ) {
        let mut ledger = ledger();
        let mut record = record();
        let principal = MockCustody::funded(0, amount);
        let reward = MockCustody::funded(u64::MAX / 2, 0);
        process_deposit(
            &mut ledger,
            &mut record,
            &principal,
            &reward,
            amount.max(MIN_STAKE),
            EXTENDED_LOCK_PERIOD,
            T0,
        )
        .unwrap();
        let lump = record.clone();

        let mut now = T0;
        let mut paid = 0u64;
        for step in steps {
            now += step;
            if let Ok(receipt) = process_claim(&mut ledger, &mut record, &reward, now) {
                paid += receipt.reward;
            }
        }
        let rate = ledger.base_reward_rate;
        let remaining = calculate_rewards(&record, rate, now).unwrap();
        let at_once = calculate_rewards(&lump, rate, now).unwrap();
        prop_assert!(paid + remaining <= at_once);
    }
}
