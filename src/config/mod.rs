//! Configuration management.
//!
//! This module resolves the two repository roots a sync run works against
//! and knows where each store keeps its data inside them.
//!
//! # Layout
//!
//! - **Smithbox**: `<smithbox>/src/Smithbox.Data/Assets/PARAM/<game>/`
//!   holding `Community Row Names.json`, `Defs/*.xml` and `Tdfs/*.tdf`
//! - **Paramdex**: `<paramdex>/<game>/` holding `Names/<Param>.txt`,
//!   `Names/jp/<Param>.txt`, `Defs/` and `Tdfs/`

use crate::error::{Error, Result};

use std::path::{Path, PathBuf};

/// Directory under the Smithbox root that holds one directory per game.
pub const SMITHBOX_PARAM_DIR: &str = "src/Smithbox.Data/Assets/PARAM";

/// Smithbox's aggregate row name document, one per game.
pub const ROW_NAMES_FILE: &str = "Community Row Names.json";

/// Paramdex directory holding one name file per param.
pub const NAMES_DIR: &str = "Names";

/// Subdirectory of [`NAMES_DIR`] holding Japanese-only names.
pub const JAPANESE_DIR: &str = "jp";

/// Extension of Paramdex name files.
pub const NAMES_EXTENSION: &str = "txt";

/// Schema definition directories copied from Smithbox to Paramdex, with the
/// extension of the files they hold.
pub const DEF_DIRS: [(&str, &str); 2] = [("Defs", "xml"), ("Tdfs", "tdf")];

/// Environment variable naming the Smithbox checkout.
pub const SMITHBOX_ENV: &str = "ROWSYNC_SMITHBOX";

/// Environment variable naming the Paramdex checkout.
pub const PARAMDEX_ENV: &str = "ROWSYNC_PARAMDEX";

/// The two repository roots a sync run reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roots {
    /// Root of the Smithbox checkout.
    pub smithbox: PathBuf,
    /// Root of the Paramdex checkout.
    pub paramdex: PathBuf,
}

impl Roots {
    /// Directory holding Smithbox's per-game param data.
    #[must_use]
    pub fn smithbox_games_dir(&self) -> PathBuf {
        self.smithbox.join(SMITHBOX_PARAM_DIR)
    }

    /// Smithbox param data directory for `game`.
    #[must_use]
    pub fn smithbox_game_dir(&self, game: &str) -> PathBuf {
        self.smithbox_games_dir().join(game)
    }

    /// Paramdex data directory for `game`.
    #[must_use]
    pub fn paramdex_game_dir(&self, game: &str) -> PathBuf {
        self.paramdex.join(game)
    }
}

/// Resolve the repository roots.
///
/// Both paths come from the `--smithbox`/`--paramdex` flags, which clap
/// already falls back to [`SMITHBOX_ENV`]/[`PARAMDEX_ENV`] for.
///
/// # Errors
///
/// Returns `Error::Config` if either root is missing or is not a directory.
pub fn resolve_roots(smithbox: Option<&Path>, paramdex: Option<&Path>) -> Result<Roots> {
    Ok(Roots {
        smithbox: require_dir(smithbox, "Smithbox", "--smithbox", SMITHBOX_ENV)?,
        paramdex: require_dir(paramdex, "Paramdex", "--paramdex", PARAMDEX_ENV)?,
    })
}

fn require_dir(path: Option<&Path>, label: &str, flag: &str, env: &str) -> Result<PathBuf> {
    let path = path.ok_or_else(|| {
        Error::Config(format!("{label} path not set (use {flag} or {env})"))
    })?;

    if !path.is_dir() {
        return Err(Error::Config(format!(
            "{label} path is not a directory: {}",
            path.display()
        )));
    }

    Ok(path.to_path_buf())
}
