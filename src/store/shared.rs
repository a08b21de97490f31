//! Thread-safe store holding the root state.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::mvi::{Intent, Reducer};

use super::action::AppAction;
use super::root::{AppReducer, AppState};

/// Number of action types kept in the dispatch journal.
pub const JOURNAL_CAPACITY: usize = 64;

/// Shared store with a single writer path: [`Store::dispatch`].
///
/// Cloning is cheap; clones see the same state.
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<StoreInner>>,
}

#[derive(Default)]
struct StoreInner {
    state: AppState,
    /// Most recent action types, oldest first.
    journal: VecDeque<String>,
}

impl StoreInner {
    fn apply(&mut self, action: AppAction) {
        let action_type = action.action_type().into_owned();

        if matches!(action, AppAction::Unknown { .. }) {
            tracing::debug!(action = %action_type, "Ignoring unknown action");
        } else {
            tracing::debug!(action = %action_type, "Dispatching action");
        }

        let previous = std::mem::take(&mut self.state);
        self.state = AppReducer::reduce(previous, action);

        if self.journal.len() == JOURNAL_CAPACITY {
            self.journal.pop_front();
        }
        self.journal.push_back(action_type);
    }
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store starting from an existing state instead of the initial one.
    pub fn with_state(state: AppState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                state,
                journal: VecDeque::new(),
            })),
        }
    }

    /// Apply `action` to the root state.
    pub fn dispatch(&self, action: impl Into<AppAction>) {
        self.inner.write().apply(action.into());
    }

    /// Decide on an action from the current state and apply it under the
    /// same write lock.
    ///
    /// No other dispatch can land between the read and the write. When
    /// `decide` fails nothing is dispatched.
    pub fn try_dispatch<T, E>(
        &self,
        decide: impl FnOnce(&AppState) -> Result<(T, AppAction), E>,
    ) -> Result<T, E> {
        let mut inner = self.inner.write();
        let (value, action) = decide(&inner.state)?;
        inner.apply(action);
        Ok(value)
    }

    /// Guard that dispatches `on_cancel` when dropped before
    /// [`CancelGuard::disarm`].
    ///
    /// Armed right after a pending event so that a caller dropping the
    /// request future still ends the lifecycle.
    pub fn cancel_guard(&self, on_cancel: impl Into<AppAction>) -> CancelGuard {
        CancelGuard {
            store: self.clone(),
            on_cancel: Some(on_cancel.into()),
        }
    }

    /// Snapshot of the whole state.
    pub fn state(&self) -> AppState {
        self.inner.read().state.clone()
    }

    /// Read part of the state without cloning the rest.
    pub fn select<R>(&self, selector: impl FnOnce(&AppState) -> R) -> R {
        selector(&self.inner.read().state)
    }

    /// Action types dispatched so far, oldest first, capped at [`JOURNAL_CAPACITY`].
    pub fn journal(&self) -> Vec<String> {
        self.inner.read().journal.iter().cloned().collect()
    }
}

/// Ends a request lifecycle if the driver is dropped mid-request.
#[must_use = "dropping the guard dispatches the cancellation immediately"]
pub struct CancelGuard {
    store: Store,
    on_cancel: Option<AppAction>,
}

impl CancelGuard {
    /// The request finished; the caller dispatches the terminal event itself.
    pub fn disarm(mut self) {
        self.on_cancel = None;
    }
}

impl Drop for CancelGuard {
    fn drop(&mut self) {
        if let Some(action) = self.on_cancel.take() {
            tracing::warn!(action = %action.action_type(), "Request dropped before completion");
            self.store.dispatch(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructor::ConstructorIntent;

    #[test]
    fn journal_is_bounded() {
        let store = Store::new();
        for i in 0..JOURNAL_CAPACITY + 3 {
            store.dispatch(AppAction::unknown(format!("noise/{i}")));
        }
        let journal = store.journal();
        assert_eq!(journal.len(), JOURNAL_CAPACITY);
        assert_eq!(journal[0], "noise/3");
    }

    #[test]
    fn try_dispatch_failure_dispatches_nothing() {
        let store = Store::new();
        let result: Result<(), &str> = store.try_dispatch(|_| Err("refused"));
        assert_eq!(result, Err("refused"));
        assert!(store.journal().is_empty());
    }

    #[test]
    fn try_dispatch_applies_decided_action() {
        let store = Store::new();
        let seen = store
            .try_dispatch(|state| {
                Ok::<_, ()>((state.constructor.is_empty(), ConstructorIntent::Reset.into()))
            })
            .unwrap();
        assert!(seen);
        assert_eq!(store.journal(), vec!["constructor/reset".to_string()]);
    }

    #[test]
    fn dropped_guard_dispatches_cancellation() {
        let store = Store::new();
        drop(store.cancel_guard(ConstructorIntent::Reset));
        assert_eq!(store.journal(), vec!["constructor/reset".to_string()]);
    }

    #[test]
    fn disarmed_guard_dispatches_nothing() {
        let store = Store::new();
        store.cancel_guard(ConstructorIntent::Reset).disarm();
        assert!(store.journal().is_empty());
    }

    #[test]
    fn clones_share_state() {
        let store = Store::new();
        let other = store.clone();
        other.dispatch(ConstructorIntent::Reset);
        assert_eq!(store.journal(), vec!["constructor/reset".to_string()]);
    }
}
