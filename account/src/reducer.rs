//! Account state machine reducer.
//!
//! A pure state machine with no side effects: every action either
//! produces the next account state or, when a precondition fails, leaves
//! the state untouched. There is no error path — a refused action is
//! indistinguishable from a dispatch that never happened.

use crate::types::{AccountAction, AccountState};
use passbook_core::{SmallVec, effect::Effect, reducer::Reducer};

/// Minimum deposit an account is seeded with when it is opened.
pub const DEFAULT_OPENING_DEPOSIT: i64 = 500;

/// Environment dependencies for the account reducer.
///
/// The account has no time or I/O dependence; the only injected value is
/// the opening-deposit configuration.
#[derive(Clone, Debug)]
pub struct AccountEnvironment {
    /// Balance a freshly opened account starts with.
    pub opening_deposit: i64,
}

impl AccountEnvironment {
    /// Creates an environment with the given opening deposit.
    #[must_use]
    pub const fn new(opening_deposit: i64) -> Self {
        Self { opening_deposit }
    }
}

impl Default for AccountEnvironment {
    fn default() -> Self {
        Self::new(DEFAULT_OPENING_DEPOSIT)
    }
}

/// Reducer for the single bank account.
///
/// Implements the transition rules over [`AccountState`]:
///
/// - `Open` seeds the balance with the opening deposit; every other
///   action on a closed account is refused.
/// - `Deposit`/`Withdraw` mutate the balance; withdrawals beyond the
///   balance are refused (no overdraft).
/// - `RequestLoan` registers at most one loan at a time and credits the
///   balance; `PayLoan` repays it in full or not at all.
/// - `Close` requires no loan and a balance of exactly zero.
///
/// All effects are empty; the account is a pure state machine.
#[derive(Clone, Debug, Copy, Default)]
pub struct AccountReducer;

impl AccountReducer {
    /// Creates a new `AccountReducer`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for AccountReducer {
    type State = AccountState;
    type Action = AccountAction;
    type Environment = AccountEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        // A closed account responds to nothing but Open.
        if !state.is_active && !matches!(action, AccountAction::Open) {
            return SmallVec::new();
        }

        match action {
            AccountAction::Open => {
                // Reopening an active account would clobber its balance.
                if state.is_active {
                    return SmallVec::new();
                }
                state.balance = env.opening_deposit;
                state.loan = 0;
                state.is_active = true;
                state.loan_active = None;
            },

            AccountAction::Deposit { amount } => {
                if amount <= 0 {
                    return SmallVec::new();
                }
                state.balance += amount;
            },

            AccountAction::Withdraw { amount } => {
                // No overdraft.
                if amount <= 0 || state.balance < amount {
                    return SmallVec::new();
                }
                state.balance -= amount;
            },

            AccountAction::RequestLoan { amount } => {
                // At most one loan at a time.
                if amount <= 0 || state.has_loan() {
                    return SmallVec::new();
                }
                state.loan += amount;
                state.balance += amount;
                state.loan_active = Some(true);
            },

            AccountAction::PayLoan => {
                // Repayment is all-or-nothing; an insufficient balance
                // leaves the loan untouched.
                if !state.has_loan() || state.balance < state.loan {
                    return SmallVec::new();
                }
                state.balance -= state.loan;
                state.loan = 0;
                state.loan_active = None;
            },

            AccountAction::Close => {
                if !state.can_close() {
                    return SmallVec::new();
                }
                *state = AccountState::closed();
            },
        }

        // Pure state machine - no side effects
        SmallVec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use passbook_testing::{ReducerTest, assertions};

    fn open_state(balance: i64) -> AccountState {
        AccountState {
            balance,
            loan: 0,
            is_active: true,
            loan_active: None,
        }
    }

    fn loaned_state(balance: i64, loan: i64) -> AccountState {
        AccountState {
            balance,
            loan,
            is_active: true,
            loan_active: Some(true),
        }
    }

    #[test]
    fn open_seeds_the_opening_deposit() {
        ReducerTest::new(AccountReducer::new())
            .with_env(AccountEnvironment::default())
            .given_state(AccountState::closed())
            .when_action(AccountAction::Open)
            .then_state(|state| {
                assert_eq!(
                    state,
                    &AccountState {
                        balance: DEFAULT_OPENING_DEPOSIT,
                        loan: 0,
                        is_active: true,
                        loan_active: None,
                    }
                );
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn open_uses_the_configured_opening_deposit() {
        ReducerTest::new(AccountReducer::new())
            .with_env(AccountEnvironment::new(50))
            .given_state(AccountState::closed())
            .when_action(AccountAction::Open)
            .then_state(|state| {
                assert_eq!(state.balance, 50);
                assert!(state.is_active);
            })
            .run();
    }

    #[test]
    fn open_on_an_active_account_is_a_noop() {
        ReducerTest::new(AccountReducer::new())
            .with_env(AccountEnvironment::default())
            .given_state(open_state(650))
            .when_action(AccountAction::Open)
            .then_unchanged()
            .run();
    }

    #[test]
    fn closed_account_refuses_everything_but_open() {
        let reducer = AccountReducer::new();
        let env = AccountEnvironment::default();
        let actions = [
            AccountAction::Deposit { amount: 150 },
            AccountAction::Withdraw { amount: 50 },
            AccountAction::RequestLoan { amount: 5000 },
            AccountAction::PayLoan,
            AccountAction::Close,
        ];

        for action in actions {
            let mut state = AccountState::closed();
            let effects = reducer.reduce(&mut state, action.clone(), &env);
            assert_eq!(state, AccountState::closed(), "leaked through: {action:?}");
            assertions::assert_no_effects(&effects);
        }
    }

    #[test]
    fn deposit_adds_to_the_balance() {
        ReducerTest::new(AccountReducer::new())
            .with_env(AccountEnvironment::default())
            .given_state(open_state(500))
            .when_action(AccountAction::Deposit { amount: 150 })
            .then_state(|state| {
                assert_eq!(state.balance, 650);
                assert_eq!(state.loan, 0);
                assert!(state.is_active);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn non_positive_amounts_are_noops() {
        for amount in [0, -150] {
            ReducerTest::new(AccountReducer::new())
                .with_env(AccountEnvironment::default())
                .given_state(open_state(500))
                .when_action(AccountAction::Deposit { amount })
                .then_unchanged()
                .run();

            ReducerTest::new(AccountReducer::new())
                .with_env(AccountEnvironment::default())
                .given_state(open_state(500))
                .when_action(AccountAction::Withdraw { amount })
                .then_unchanged()
                .run();

            ReducerTest::new(AccountReducer::new())
                .with_env(AccountEnvironment::default())
                .given_state(open_state(500))
                .when_action(AccountAction::RequestLoan { amount })
                .then_unchanged()
                .run();
        }
    }

    #[test]
    fn withdraw_within_the_balance() {
        ReducerTest::new(AccountReducer::new())
            .with_env(AccountEnvironment::default())
            .given_state(open_state(650))
            .when_action(AccountAction::Withdraw { amount: 50 })
            .then_state(|state| {
                assert_eq!(state.balance, 600);
            })
            .run();
    }

    #[test]
    fn withdraw_beyond_the_balance_is_a_noop() {
        ReducerTest::new(AccountReducer::new())
            .with_env(AccountEnvironment::default())
            .given_state(open_state(600))
            .when_action(AccountAction::Withdraw { amount: 601 })
            .then_unchanged()
            .run();
    }

    #[test]
    fn request_loan_credits_the_balance_and_flags_the_loan() {
        ReducerTest::new(AccountReducer::new())
            .with_env(AccountEnvironment::default())
            .given_state(open_state(600))
            .when_action(AccountAction::RequestLoan { amount: 5000 })
            .then_state(|state| {
                assert_eq!(
                    state,
                    &AccountState {
                        balance: 5600,
                        loan: 5000,
                        is_active: true,
                        loan_active: Some(true),
                    }
                );
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn a_second_loan_is_refused() {
        ReducerTest::new(AccountReducer::new())
            .with_env(AccountEnvironment::default())
            .given_state(loaned_state(5600, 5000))
            .when_action(AccountAction::RequestLoan { amount: 1000 })
            .then_unchanged()
            .run();
    }

    #[test]
    fn pay_loan_repays_in_full() {
        ReducerTest::new(AccountReducer::new())
            .with_env(AccountEnvironment::default())
            .given_state(loaned_state(5600, 5000))
            .when_action(AccountAction::PayLoan)
            .then_state(|state| {
                assert_eq!(
                    state,
                    &AccountState {
                        balance: 600,
                        loan: 0,
                        is_active: true,
                        loan_active: None,
                    }
                );
            })
            .run();
    }

    #[test]
    fn pay_loan_without_a_loan_is_a_noop() {
        ReducerTest::new(AccountReducer::new())
            .with_env(AccountEnvironment::default())
            .given_state(open_state(600))
            .when_action(AccountAction::PayLoan)
            .then_unchanged()
            .run();
    }

    #[test]
    fn pay_loan_with_an_insufficient_balance_is_a_noop() {
        // The all-or-nothing guard is what keeps the balance from ever
        // going negative.
        ReducerTest::new(AccountReducer::new())
            .with_env(AccountEnvironment::default())
            .given_state(loaned_state(4999, 5000))
            .when_action(AccountAction::PayLoan)
            .then_unchanged()
            .run();
    }

    #[test]
    fn loan_round_trip_restores_the_pre_loan_balance() {
        let reducer = AccountReducer::new();
        let env = AccountEnvironment::default();
        let mut state = open_state(600);

        reducer.reduce(&mut state, AccountAction::RequestLoan { amount: 5000 }, &env);
        reducer.reduce(&mut state, AccountAction::PayLoan, &env);

        assert_eq!(state, open_state(600));
    }

    #[test]
    fn close_with_a_balance_is_a_noop() {
        ReducerTest::new(AccountReducer::new())
            .with_env(AccountEnvironment::default())
            .given_state(open_state(10))
            .when_action(AccountAction::Close)
            .then_unchanged()
            .run();
    }

    #[test]
    fn close_with_a_loan_is_a_noop() {
        ReducerTest::new(AccountReducer::new())
            .with_env(AccountEnvironment::default())
            .given_state(loaned_state(5000, 5000))
            .when_action(AccountAction::Close)
            .then_unchanged()
            .run();
    }

    #[test]
    fn close_resets_to_the_pristine_form() {
        ReducerTest::new(AccountReducer::new())
            .with_env(AccountEnvironment::default())
            .given_state(open_state(0))
            .when_action(AccountAction::Close)
            .then_state(|state| {
                assert_eq!(state, &AccountState::closed());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }
}
