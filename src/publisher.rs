//! Single-slot publisher of the current [`LoadState`]
//!
//! `refresh()` flips the slot to `Loading` before returning and runs the
//! fetch on the Tokio runtime the publisher was created on. Observers read
//! the slot directly or follow it through a `watch` receiver or a stream.
//! Intermediate values may be conflated for slow observers.
//!
//! Overlapping refreshes are resolved by generation: a completed fetch is
//! published only if no newer `refresh()` has been issued since it started.
//! Superseded fetches are left to finish and their results are dropped.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures::Stream;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::fetcher::WeatherFetcher;
use crate::state::LoadState;
use crate::{CityWeatherError, Result};

/// Owns the load state and drives fetches into it
pub struct StatePublisher {
    fetcher: Arc<dyn WeatherFetcher>,
    state: Arc<watch::Sender<LoadState>>,
    generation: Arc<AtomicU64>,
    runtime: Handle,
}

impl StatePublisher {
    /// Create a publisher bound to the current Tokio runtime.
    ///
    /// The initial state is `Loading`; no fetch is started.
    pub fn new(fetcher: Arc<dyn WeatherFetcher>) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|e| {
            CityWeatherError::general(format!("State publisher needs a Tokio runtime: {e}"))
        })?;
        Ok(Self::with_runtime(fetcher, runtime))
    }

    /// Create a publisher that spawns fetches on `runtime`
    #[must_use]
    pub fn with_runtime(fetcher: Arc<dyn WeatherFetcher>, runtime: Handle) -> Self {
        let (state, _) = watch::channel(LoadState::Loading);
        Self {
            fetcher,
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            runtime,
        }
    }

    /// Publish `Loading` and start a fetch in the background.
    pub fn refresh(&self) {
        // Bump before publishing so an older completion can never overwrite
        // the Loading written below.
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(LoadState::Loading);
        debug!(generation, "Refresh requested");

        let fetcher = Arc::clone(&self.fetcher);
        let slot = Arc::downgrade(&self.state);
        let latest = Arc::clone(&self.generation);

        self.runtime.spawn(async move {
            let outcome = LoadState::from(fetcher.fetch().await);

            let Some(slot) = slot.upgrade() else {
                debug!(generation, "Publisher dropped, discarding fetch result");
                return;
            };

            let published = slot.send_if_modified(|current| {
                if latest.load(Ordering::SeqCst) != generation {
                    return false;
                }
                *current = outcome;
                true
            });

            if published {
                match &*slot.borrow() {
                    LoadState::Success(records) => {
                        info!(generation, count = records.len(), "Published records");
                    }
                    LoadState::Error(message) => {
                        warn!(generation, %message, "Published error");
                    }
                    LoadState::Loading => {}
                }
            } else {
                debug!(generation, "Superseded by a newer refresh, discarding result");
            }
        });
    }

    /// Latest published state
    #[must_use]
    pub fn current_state(&self) -> LoadState {
        self.state.borrow().clone()
    }

    /// Receiver whose current value is available right away via `borrow()`
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.state.subscribe()
    }

    /// Stream of states: the current one first, then each later one.
    ///
    /// Ends once the publisher is dropped.
    pub fn updates(&self) -> impl Stream<Item = LoadState> + Send + use<> {
        let receiver = self.state.subscribe();
        futures::stream::unfold((receiver, true), |(mut receiver, first)| async move {
            if !first && receiver.changed().await.is_err() {
                return None;
            }
            let state = receiver.borrow_and_update().clone();
            Some((state, (receiver, false)))
        })
    }

    /// Wait until the state leaves `Loading` and return it.
    ///
    /// Without a prior `refresh()` this waits forever.
    pub async fn settled(&self) -> LoadState {
        let mut receiver = self.state.subscribe();
        let settled = receiver
            .wait_for(|state| !state.is_loading())
            .await
            .map(|state| state.clone());

        match settled {
            Ok(state) => state,
            Err(_) => self.current_state(),
        }
    }
}

impl std::fmt::Debug for StatePublisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatePublisher")
            .field("state", &*self.state.borrow())
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}
