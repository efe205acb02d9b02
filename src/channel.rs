//! A single-fire broadcast slot with replay for late subscribers.
//!
//! A [`ResultChannel`] starts empty, is filled at most once, and hands that one value to every
//! observer: those queued before the fill are notified in subscription order, those that subscribe
//! afterwards are replayed immediately. Tasks waiting in [`recv`](ResultChannel::recv) are
//! woken after the observers. A second [`publish`](ResultChannel::publish) is a no-op
//! that returns `false`; the stored value is never overwritten or revoked.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::oneshot;

type Observer<T> = Box<dyn FnOnce(&Arc<T>) + Send>;

enum Slot<T> {
    Empty {
        observers: Vec<Observer<T>>,
        // One per pending `recv`; a cancelled `recv` leaves a closed sender behind.
        waiters: Vec<oneshot::Sender<Arc<T>>>,
    },
    Filled(Arc<T>),
}

/// Write-once, replaying notification channel.
///
/// Handles are cheap to clone; every clone refers to the same slot.
///
/// Observers are always invoked outside the internal lock, so an observer may subscribe
/// again (it is replayed straight away) without deadlocking.
pub struct ResultChannel<T> {
    slot: Arc<Mutex<Slot<T>>>,
}

impl<T> Clone for ResultChannel<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T: Send + Sync + 'static> Default for ResultChannel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + Sync + 'static> ResultChannel<T> {
    /// Creates an empty channel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::Empty {
                observers: Vec::new(),
                waiters: Vec::new(),
            })),
        }
    }

    /// Registers `observer` to receive the value.
    ///
    /// If the channel is already filled the observer runs immediately on the calling thread.
    /// Otherwise it is queued and runs exactly once, on whichever thread publishes.
    pub fn subscribe<F>(&self, observer: F)
    where
        F: FnOnce(&T) + Send + 'static,
    {
        self.observe(Box::new(move |value: &Arc<T>| observer(value)));
    }

    /// Stores `value` and notifies every queued observer.
    ///
    /// Returns `false` without touching the stored value if the channel was already filled.
    pub fn publish(&self, value: T) -> bool {
        let value = Arc::new(value);
        let (observers, waiters) = {
            let mut slot = self.lock();
            match std::mem::replace(&mut *slot, Slot::Filled(Arc::clone(&value))) {
                Slot::Empty { observers, waiters } => (observers, waiters),
                Slot::Filled(first) => {
                    *slot = Slot::Filled(first);
                    #[cfg(feature = "tracing")]
                    tracing::debug!("result channel already filled; ignoring publish");
                    return false;
                }
            }
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            observers = observers.len(),
            waiters = waiters.len(),
            "result channel filled"
        );
        for observer in observers {
            observer(&value);
        }
        for waiter in waiters {
            let _ = waiter.send(Arc::clone(&value));
        }
        true
    }

    /// Returns `true` once a value has been published.
    pub fn is_filled(&self) -> bool {
        matches!(*self.lock(), Slot::Filled(_))
    }

    /// The stored value, if any, without waiting.
    pub fn get(&self) -> Option<Arc<T>> {
        match &*self.lock() {
            Slot::Filled(value) => Some(Arc::clone(value)),
            Slot::Empty { .. } => None,
        }
    }

    /// Waits for the value.
    ///
    /// Resolves immediately when the channel is already filled. If nothing is ever published
    /// this future never completes; wrap it in `tokio::time::timeout` to bound the wait.
    /// Dropping the future unregisters it, so repeated timed-out waits do not accumulate.
    pub async fn recv(&self) -> Arc<T> {
        let rx = {
            let mut slot = self.lock();
            match &mut *slot {
                Slot::Filled(value) => return Arc::clone(value),
                Slot::Empty { waiters, .. } => {
                    waiters.retain(|tx| !tx.is_closed());
                    let (tx, rx) = oneshot::channel();
                    waiters.push(tx);
                    rx
                }
            }
        };
        match rx.await {
            Ok(value) => value,
            Err(_) => std::future::pending().await,
        }
    }

    fn observe(&self, observer: Observer<T>) {
        let replay = {
            let mut slot = self.lock();
            match &mut *slot {
                Slot::Empty { observers, .. } => {
                    observers.push(observer);
                    return;
                }
                Slot::Filled(value) => Arc::clone(value),
            }
        };
        observer(&replay);
    }

    fn lock(&self) -> MutexGuard<'_, Slot<T>> {
        // Observers never run under the lock, so a poisoned guard still holds a consistent slot.
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: fmt::Debug> fmt::Debug for ResultChannel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("ResultChannel");
        match self.slot.try_lock() {
            Ok(slot) => match &*slot {
                Slot::Empty { observers, waiters } => out
                    .field("observers", &observers.len())
                    .field("waiters", &waiters.len()),
                Slot::Filled(value) => out.field("value", value),
            },
            Err(_) => out.field("slot", &"<locked>"),
        };
        out.finish()
    }
}
