//! Scripted-session demo for the account state machine.
//!
//! Plays the role of the view layer: dispatches one action at a time
//! through the Store, then re-renders balance, loan, and the controls
//! the resulting state enables. Refused operations are part of the
//! script to show that they leave the state untouched.

use anyhow::Result;
use passbook_account::view::session_line;
use passbook_account::{AccountAction, AccountEnvironment, AccountReducer, AccountState};
use passbook_core::environment::SystemClock;
use passbook_runtime::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "passbook=debug,passbook_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Passbook: single-account session ===\n");
    tracing::info!("starting account session");

    let clock = SystemClock;
    let store = Store::new(
        AccountState::closed(),
        AccountReducer::new(),
        AccountEnvironment::default(),
    );

    let state = store.state(Clone::clone).await;
    println!("{}", session_line(&clock, "session start", &state));

    let script = [
        ("open account", AccountAction::Open),
        ("deposit 150", AccountAction::Deposit { amount: 150 }),
        ("withdraw 50", AccountAction::Withdraw { amount: 50 }),
        ("request a loan of 5000", AccountAction::RequestLoan { amount: 5000 }),
        ("request another loan (refused)", AccountAction::RequestLoan { amount: 1000 }),
        ("withdraw 10000 (refused)", AccountAction::Withdraw { amount: 10_000 }),
        ("pay loan", AccountAction::PayLoan),
        ("close account (refused)", AccountAction::Close),
        ("withdraw 600", AccountAction::Withdraw { amount: 600 }),
        ("close account", AccountAction::Close),
    ];

    for (label, action) in script {
        store.send(action).await?;
        let state = store.state(Clone::clone).await;
        println!("{}", session_line(&clock, label, &state));
    }

    store.shutdown();
    tracing::info!("account session complete");

    println!("\nThe account is back in its pristine closed form; a refused");
    println!("operation is indistinguishable from one that never happened.");

    Ok(())
}
