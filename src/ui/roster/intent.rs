use crate::api::CharacterRecord;
use crate::ui::mvi::Intent;

/// Fetch lifecycle events for the roster.
#[derive(Debug, Clone, PartialEq)]
pub enum RosterIntent {
    /// The fetch was kicked off.
    FetchStarted,
    /// The fetch finished with the full character list.
    FetchSucceeded(Vec<CharacterRecord>),
    /// The fetch failed; carries the display message.
    FetchFailed(String),
}

impl Intent for RosterIntent {}
