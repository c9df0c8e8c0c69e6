//! datadeck - browse mocked data sources in the terminal
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
