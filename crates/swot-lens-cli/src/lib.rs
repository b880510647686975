//! SWOT Lens command-line front end: login gate, interactive shell, and
//! terminal rendering around the `swot_lens` pipeline.

pub mod auth;
pub mod cli;
pub mod config;
pub mod present;
