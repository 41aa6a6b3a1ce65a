//! Render helpers for the session view.
//!
//! The view layer never makes business decisions; it derives everything
//! it shows from the latest [`AccountState`] snapshot. These helpers
//! keep that derivation pure so the binary stays a thin dispatcher.

use crate::types::AccountState;
use passbook_core::environment::Clock;

/// Controls the view should enable for this state.
///
/// The open control is only offered while the account is closed; the
/// request-loan control is hidden while a loan is outstanding.
#[must_use]
pub fn controls(state: &AccountState) -> String {
    if !state.is_active {
        return "[open]".to_string();
    }

    let mut enabled = vec!["deposit", "withdraw"];
    if state.loan_active != Some(true) {
        enabled.push("request loan");
    }
    enabled.push("pay loan");
    enabled.push("close");
    format!("[{}]", enabled.join("] ["))
}

/// One timestamped session-log line: label, balance, loan, controls.
#[must_use]
pub fn session_line(clock: &impl Clock, label: &str, state: &AccountState) -> String {
    format!(
        "[{}] {:<28} balance: {:>5}  loan: {:>5}  {}",
        clock.now().format("%H:%M:%S"),
        label,
        state.balance,
        state.loan,
        controls(state)
    )
}
