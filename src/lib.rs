//! Terminal viewer for the public hp-api character list.
//!
//! The crate splits into a small fetch pipeline (`api`), an observable
//! state controller with a pure reducer (`ui::roster`, `ui::controller`),
//! and a ratatui rendering layer that only ever reads published state.

pub mod api;
pub mod args;
pub mod config;
pub mod logging;
pub mod ui;
