use crate::api::CharacterRecord;
use crate::ui::mvi::UiState;

/// Observable state of the character roster.
///
/// One fetch lifecycle drives three linear transitions: loading on launch,
/// then either the loaded list or an error message. `loading` and `error`
/// are never active together.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RosterState {
    /// Characters in API order. Empty until the first successful fetch.
    pub characters: Vec<CharacterRecord>,
    /// True while the fetch is in flight.
    pub loading: bool,
    /// Display message of the last fetch failure.
    pub error: Option<String>,
}

impl UiState for RosterState {}

impl RosterState {
    /// Projection of `characters[index]` for rendering one card.
    ///
    /// `None` when the index is out of range; callers render nothing for
    /// an absent slot rather than treating it as a fault.
    pub fn character_details(&self, index: usize) -> Option<CharacterDetails> {
        self.characters.get(index).map(|character| CharacterDetails {
            name: character.name.clone(),
            image: character.image.clone(),
            actor: character.actor.clone(),
        })
    }
}

/// Display data for a single character card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterDetails {
    pub name: String,
    pub image: String,
    pub actor: String,
}
