use serde::Deserialize;

/// One character as returned by `GET /api/characters`.
///
/// The API sends many more fields (house, wand, patronus, ...); only the
/// three the card list renders are kept, and serde drops the rest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CharacterRecord {
    /// Character name (e.g., "Harry Potter").
    pub name: String,
    /// Portrait URL. Empty string for characters without a photo.
    pub image: String,
    /// Actor who plays the character.
    pub actor: String,
}
