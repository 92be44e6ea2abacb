//! Library entry for Ventry exposing core logic for integration tests.

pub mod api;
pub mod args;
pub mod config;
pub mod events;
pub mod query;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;
