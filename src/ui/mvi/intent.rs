//! Base trait for intents.

/// Marker trait for intent objects.
///
/// An intent is anything that drives a state transition: a key press, a
/// timer, or the completion of a background fetch.
pub trait Intent: Send + 'static {}
