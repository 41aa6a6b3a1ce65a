//! # Passbook Runtime
//!
//! Runtime implementation for the Passbook architecture.
//!
//! This crate provides the Store runtime that coordinates reducer
//! execution and effect handling. The Store is the serialization point
//! the account state machine assumes: actions pass through it one at a
//! time, in dispatch order, and the reducer never sees concurrent
//! invocations.
//!
//! ## Core Components
//!
//! - **Store**: The runtime that manages state and executes effects
//! - **Effect Execution**: Runs effect descriptions and feeds produced
//!   actions back into the reducer before `send` returns
//!
//! ## Example
//!
//! ```ignore
//! use passbook_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use passbook_core::{effect::Effect, reducer::Reducer};
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        ///
        /// This error is returned when `send()` is called after shutdown
        /// was initiated.
        #[error("Store is shutting down")]
        ShutdownInProgress,
    }
}

pub use error::StoreError;

/// Store module - The runtime for reducers
pub mod store {
    use super::{
        Arc, AtomicBool, Effect, Ordering, Reducer, RwLock, StoreError, VecDeque,
    };

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`, with the write lock as the single
    ///    serialization point for all transitions)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (with feedback loop)
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = Store::new(
    ///     AccountState::closed(),
    ///     AccountReducer::new(),
    ///     AccountEnvironment::default(),
    /// );
    ///
    /// store.send(AccountAction::Open).await?;
    /// ```
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: R,
        environment: E,
        shutdown: Arc<AtomicBool>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
        A: Send + 'static,
        S: Send + Sync + 'static,
        E: Send + Sync + 'static,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// # Arguments
        ///
        /// - `initial_state`: The starting state for the store
        /// - `reducer`: The reducer implementation (business logic)
        /// - `environment`: Injected dependencies
        ///
        /// # Returns
        ///
        /// A new Store instance ready to process actions
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer,
                environment,
                shutdown: Arc::new(AtomicBool::new(false)),
            }
        }

        /// Send an action to the store
        ///
        /// This is the primary way to interact with the store:
        /// 1. Acquires the write lock on state
        /// 2. Calls the reducer with (state, action, environment)
        /// 3. Executes returned effects in order; actions they produce are
        ///    fed back through the reducer
        ///
        /// Effects run to completion before `send` returns, so a caller
        /// that awaits `send` observes every transition the action caused.
        /// Concurrent `send` calls serialize at the reducer level; the
        /// reducer itself never runs concurrently.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownInProgress`] if the store is
        /// shutting down.
        ///
        /// # Example
        ///
        /// ```ignore
        /// store.send(AccountAction::Deposit { amount: 150 }).await?;
        /// ```
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<(), StoreError> {
            if self.shutdown.load(Ordering::Acquire) {
                tracing::warn!("action rejected: store is shutting down");
                return Err(StoreError::ShutdownInProgress);
            }

            let mut queue = VecDeque::new();
            queue.push_back(action);

            while let Some(action) = queue.pop_front() {
                let effects = {
                    let mut state = self.state.write().await;
                    self.reducer.reduce(&mut state, action, &self.environment)
                };

                for effect in effects {
                    match effect {
                        Effect::None => {},
                        Effect::Delay { duration, action } => {
                            tokio::time::sleep(duration).await;
                            queue.push_back(*action);
                        },
                        Effect::Future(future) => {
                            if let Some(action) = future.await {
                                queue.push_back(action);
                            }
                        },
                    }
                }
            }

            Ok(())
        }

        /// Read from the current state through a closure
        ///
        /// The closure receives a reference to the latest snapshot; return
        /// an owned value from it rather than holding the lock.
        ///
        /// # Example
        ///
        /// ```ignore
        /// let balance = store.state(|s| s.balance).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&state)
        }

        /// Stop accepting new actions
        ///
        /// A `send` already in progress runs to completion; later calls
        /// return [`StoreError::ShutdownInProgress`]. Effects execute
        /// inside `send`, so there is nothing further to wait for.
        pub fn shutdown(&self) {
            tracing::info!("store shutting down");
            self.shutdown.store(true, Ordering::Release);
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Clone,
        E: Clone,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: self.reducer.clone(),
                environment: self.environment.clone(),
                shutdown: Arc::clone(&self.shutdown),
            }
        }
    }
}

pub use store::Store;
