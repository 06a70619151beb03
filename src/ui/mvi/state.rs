//! Base trait for observable state values.

/// Marker trait for state owned by a reducer.
///
/// A state value is replaced wholesale on every transition, never patched
/// in place, so observers can only ever see a complete snapshot. It must
/// therefore be cheap to clone and comparable for change detection.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
