//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Folds intents into new states.
///
/// `reduce` is the only place where transitions happen and must stay a
/// pure function of `(state, intent)`.
pub trait Reducer {
    /// The state type this reducer owns.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Consume the current state and an intent, produce the next state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
