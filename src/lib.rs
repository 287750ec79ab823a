//! rowsync - Param row name reconciliation between Paramdex and Smithbox
//!
//! This crate provides the core functionality for the `rowsync` CLI tool.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`model`] - Record type and bilingual name splitting
//! - [`store`] - Paramdex name files and Smithbox row name documents
//! - [`sync`] - Row alignment and the two sync directions
//! - [`config`] - Repository roots and store layout
//! - [`error`] - Error types and handling

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod sync;

pub use error::{Error, Result};
