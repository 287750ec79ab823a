//! Command implementations.

pub mod completions;
pub mod status;
pub mod sync;
pub mod version;

use crate::config::{Roots, resolve_roots};
use crate::error::{Error, Result};
use crate::store::select_games;
use std::path::PathBuf;

/// Repository roots and game selection shared by the data commands.
#[derive(Debug, Clone, Copy)]
pub struct Target<'a> {
    pub smithbox: Option<&'a PathBuf>,
    pub paramdex: Option<&'a PathBuf>,
    pub games: &'a [String],
}

impl Target<'_> {
    /// Resolve the roots and the games to process.
    ///
    /// # Errors
    ///
    /// Returns an error if a root is invalid, a game name is malformed, or
    /// a requested game exists in neither store.
    pub fn resolve(&self) -> Result<(Roots, Vec<String>)> {
        for game in self.games {
            if game.is_empty() || game.starts_with('.') || game.contains(['/', '\\']) {
                return Err(Error::InvalidArgument(format!("invalid game name: '{game}'")));
            }
        }

        let roots = resolve_roots(
            self.smithbox.map(PathBuf::as_path),
            self.paramdex.map(PathBuf::as_path),
        )?;
        let games = select_games(&roots, self.games)?;
        Ok((roots, games))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_rejects_path_like_game_names() {
        for name in ["", "../ER", ".git", "ER/Names"] {
            let games = vec![name.to_string()];
            let target = Target {
                smithbox: None,
                paramdex: None,
                games: &games,
            };
            assert!(
                matches!(target.resolve(), Err(Error::InvalidArgument(_))),
                "accepted {name:?}"
            );
        }
    }
}
