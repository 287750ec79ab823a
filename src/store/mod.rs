//! Store adapters.
//!
//! Each store keeps row names in its own on-disk format:
//!
//! - [`paramdex`]: one line-oriented text file per param
//! - [`smithbox`]: one JSON document per game
//!
//! Both reduce to ordered [`Record`](crate::model::Record) sequences, which is
//! all the sync layer works with. [`dataset`] finds the games and params the
//! two stores know about, and [`defs`] copies schema definitions.

pub mod dataset;
pub mod defs;
pub mod paramdex;
pub mod smithbox;

pub use dataset::{discover_games, game_params, select_games};
pub use defs::copy_defs;
pub use paramdex::{ParamdexParam, format_names, parse_names, read_names, write_names};
pub use smithbox::{RowNameParam, RowNameStore, SmithboxGame};
