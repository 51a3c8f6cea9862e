//! PetPal TUI - a terminal client for the PetPal dog breed analyzer and
//! nutrition recipe service
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod error;
pub mod input;
pub mod models;
pub mod startup;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
