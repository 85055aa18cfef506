// docsieve/src/lib.rs
//! # Docsieve CLI Application
//!
//! Command-line front end for `docsieve-core`: document extraction, record
//! policy runs, batch jobs and the gated request API.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
