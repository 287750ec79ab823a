//! Data models for rowsync.
//!
//! This module contains the format-agnostic domain types:
//! - Record (one named row of a param table)
//! - Bilingual name decomposition

pub mod name;
pub mod record;

pub use name::{is_japanese_char, split_japanese_name};
pub use record::{Record, has_any_name};
