//! Owner of the roster state and its one-shot fetch lifecycle.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::api::ApiClient;
use crate::ui::mvi::Reducer;
use crate::ui::roster::{CharacterDetails, RosterIntent, RosterReducer, RosterState};

/// Owns the observable [`RosterState`] and the fetch task feeding it.
///
/// Construction publishes the loading state and launches the single fetch;
/// its outcome is folded in through [`RosterReducer`]. The watch channel is
/// the one shared slot: written only by the fetch task, read by any number
/// of observers, always as a whole value.
///
/// Dropping the controller aborts an in-flight fetch, so no transition can
/// land after teardown.
pub struct RosterController {
    state_tx: Arc<watch::Sender<RosterState>>,
    fetch_task: JoinHandle<()>,
}

impl RosterController {
    /// Publish the loading state and launch the fetch.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(client: ApiClient) -> Self {
        let (state_tx, _state_rx) = watch::channel(RosterState::default());
        let state_tx = Arc::new(state_tx);

        state_tx.send_replace(RosterReducer::reduce(
            RosterState::default(),
            RosterIntent::FetchStarted,
        ));

        let fetch_task = tokio::spawn({
            let state_tx = Arc::clone(&state_tx);
            async move {
                let intent = match client.fetch_all_characters().await {
                    Ok(characters) => {
                        tracing::info!(count = characters.len(), "Character fetch succeeded");
                        RosterIntent::FetchSucceeded(characters)
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "Character fetch failed");
                        RosterIntent::FetchFailed(err.to_string())
                    }
                };
                state_tx.send_modify(|state| {
                    *state = RosterReducer::reduce(std::mem::take(state), intent);
                });
            }
        });

        Self {
            state_tx,
            fetch_task,
        }
    }

    /// Read-only subscription to roster transitions.
    pub fn subscribe(&self) -> watch::Receiver<RosterState> {
        self.state_tx.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> RosterState {
        self.state_tx.borrow().clone()
    }

    /// Projection of one roster entry for rendering.
    pub fn character_details(&self, index: usize) -> Option<CharacterDetails> {
        self.state_tx.borrow().character_details(index)
    }
}

impl Drop for RosterController {
    fn drop(&mut self) {
        self.fetch_task.abort();
    }
}
