use crate::ui::mvi::Reducer;
use crate::ui::roster::intent::RosterIntent;
use crate::ui::roster::state::RosterState;

/// Pure state machine for the fetch lifecycle.
pub struct RosterReducer;

impl Reducer for RosterReducer {
    type State = RosterState;
    type Intent = RosterIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RosterIntent::FetchStarted => RosterState {
                loading: true,
                ..RosterState::default()
            },
            RosterIntent::FetchSucceeded(characters) => RosterState {
                characters,
                loading: false,
                error: None,
            },
            // The previous list is dropped, not carried over. With the
            // fetch running exactly once per controller this is
            // unobservable; it matters only if a retry intent is added.
            RosterIntent::FetchFailed(message) => RosterState {
                error: Some(message),
                ..RosterState::default()
            },
        }
    }
}
