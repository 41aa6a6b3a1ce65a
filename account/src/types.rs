//! Domain types for the single-account state machine.
//!
//! The account exists in two macro-states: **Closed** (the pristine
//! initial form) and **Open** (operating, with or without an outstanding
//! loan). All amounts are plain signed integers.

use serde::{Deserialize, Serialize};

/// State of the single bank account.
///
/// A closed account is always in its pristine form: zero balance, zero
/// loan, no loan flag. The state changes only through
/// [`AccountReducer`](crate::reducer::AccountReducer), one action at a
/// time; disallowed actions leave it value-equal to its input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountState {
    /// Current balance.
    pub balance: i64,
    /// Outstanding loan principal. At most one loan at a time.
    pub loan: i64,
    /// Whether the account currently exists.
    pub is_active: bool,
    /// Display-only flag mirroring loan presence, for view-layer gating:
    /// `None` until a loan is requested (or after a full reset),
    /// `Some(true)` while one is outstanding. `Some(false)` ("just
    /// repaid") is representable for view layers that want it but is
    /// never produced by the current transition rules.
    pub loan_active: Option<bool>,
}

impl AccountState {
    /// The pristine closed account every session starts from.
    #[must_use]
    pub const fn closed() -> Self {
        Self {
            balance: 0,
            loan: 0,
            is_active: false,
            loan_active: None,
        }
    }

    /// Whether a loan is currently outstanding.
    #[must_use]
    pub const fn has_loan(&self) -> bool {
        self.loan > 0
    }

    /// Whether the account satisfies the closing preconditions: open,
    /// no loan, and a balance of exactly zero.
    #[must_use]
    pub const fn can_close(&self) -> bool {
        self.is_active && self.loan == 0 && self.balance == 0
    }
}

/// Actions the view layer can dispatch against the account.
///
/// The enum is closed and the reducer matches it exhaustively; there is
/// no fallthrough for unknown action kinds.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum AccountAction {
    /// Open the account, seeding the balance with the opening deposit.
    Open,
    /// Add `amount` to the balance.
    Deposit {
        /// Amount to deposit; must be positive.
        amount: i64,
    },
    /// Remove `amount` from the balance. Refused beyond the balance.
    Withdraw {
        /// Amount to withdraw; must be positive.
        amount: i64,
    },
    /// Register a loan and credit its amount to the balance.
    RequestLoan {
        /// Loan principal; must be positive.
        amount: i64,
    },
    /// Repay the outstanding loan in full from the balance.
    PayLoan,
    /// Close the account, returning it to the pristine form.
    Close,
}
