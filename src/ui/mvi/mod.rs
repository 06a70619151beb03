//! Model-View-Intent primitives for the UI layer.
//!
//! Unidirectional data flow: intents (user input or fetch completions) are
//! folded into a fresh state by a pure reducer, and the view renders
//! whatever state it is handed.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
