//! Single bank account modeled as a pure state machine.
//!
//! This crate implements the business rules of one bank account —
//! opening, depositing, withdrawing, borrowing, repaying, and closing —
//! as a reducer with no side effects. The hosting view layer only
//! dispatches actions and renders fields of the resulting state.
//!
//! # State machine
//!
//! ```text
//!                Open
//!    ┌─────────┐ ───► ┌──────────────────┐  RequestLoan  ┌──────────────┐
//!    │  Closed │      │ Open (no loan)   │ ────────────► │ Open (loan)  │
//!    │         │ ◄─── │ Deposit/Withdraw │ ◄──────────── │  outstanding │
//!    └─────────┘ Close└──────────────────┘    PayLoan    └──────────────┘
//!        (balance must be exactly 0)          (full repayment only)
//! ```
//!
//! Every precondition violation is a silent no-op: the reducer is total
//! and a refused action leaves the state value-equal to its input.
//!
//! # Quick Start
//!
//! ```no_run
//! use passbook_account::{AccountAction, AccountEnvironment, AccountReducer, AccountState};
//! use passbook_runtime::Store;
//!
//! # async fn example() -> Result<(), passbook_runtime::StoreError> {
//! let store = Store::new(
//!     AccountState::closed(),
//!     AccountReducer::new(),
//!     AccountEnvironment::default(),
//! );
//!
//! store.send(AccountAction::Open).await?;
//! store.send(AccountAction::Deposit { amount: 150 }).await?;
//!
//! let balance = store.state(|s| s.balance).await;
//! assert_eq!(balance, 650);
//! # Ok(())
//! # }
//! ```

pub mod reducer;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use reducer::{AccountEnvironment, AccountReducer, DEFAULT_OPENING_DEPOSIT};
pub use types::{AccountAction, AccountState};
