//! Game and param discovery.
//!
//! A game is any directory under the Paramdex root or Smithbox's PARAM
//! directory; a param is any table either store has names for.

use std::collections::BTreeSet;

use crate::config::Roots;
use crate::store::paramdex::list_params;
use crate::store::smithbox::SmithboxGame;
use crate::sync::file::list_subdirs;
use crate::sync::{SyncError, SyncResult};

/// All games present in either store, sorted by name.
///
/// # Errors
///
/// Returns an error if either games directory cannot be listed.
pub fn discover_games(roots: &Roots) -> SyncResult<Vec<String>> {
    let mut games: BTreeSet<String> = list_subdirs(&roots.paramdex)?.into_iter().collect();
    games.extend(list_subdirs(&roots.smithbox_games_dir())?);
    Ok(games.into_iter().collect())
}

/// Resolve which games to process.
///
/// With no explicit request, every discovered game is processed. Requested
/// games are deduplicated and sorted.
///
/// # Errors
///
/// Returns `SyncError::GameNotFound` for a requested game that has a
/// directory in neither store.
pub fn select_games(roots: &Roots, requested: &[String]) -> SyncResult<Vec<String>> {
    if requested.is_empty() {
        return discover_games(roots);
    }

    let games: BTreeSet<&String> = requested.iter().collect();
    for game in &games {
        if !roots.paramdex_game_dir(game).is_dir() && !roots.smithbox_game_dir(game).is_dir() {
            return Err(SyncError::GameNotFound((*game).clone()));
        }
    }
    Ok(games.into_iter().cloned().collect())
}

/// All params with names in either store for one game, sorted by name.
///
/// # Errors
///
/// Returns an error if the Paramdex names directory cannot be listed.
pub fn game_params(roots: &Roots, game: &str, smithbox: &SmithboxGame) -> SyncResult<Vec<String>> {
    let mut params: BTreeSet<String> = list_params(&roots.paramdex_game_dir(game))?
        .into_iter()
        .collect();
    params.extend(smithbox.param_names().map(String::from));
    Ok(params.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NAMES_DIR, ROW_NAMES_FILE, SMITHBOX_PARAM_DIR};
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Roots) {
        let temp_dir = TempDir::new().unwrap();
        let roots = Roots {
            smithbox: temp_dir.path().join("Smithbox"),
            paramdex: temp_dir.path().join("Paramdex"),
        };
        fs::create_dir_all(roots.smithbox.join(SMITHBOX_PARAM_DIR)).unwrap();
        fs::create_dir_all(&roots.paramdex).unwrap();
        (temp_dir, roots)
    }

    #[test]
    fn test_discover_games_unions_both_stores() {
        let (_temp_dir, roots) = setup();
        fs::create_dir_all(roots.paramdex_game_dir("DS3")).unwrap();
        fs::create_dir_all(roots.paramdex_game_dir("ER")).unwrap();
        fs::create_dir_all(roots.paramdex_game_dir(".github")).unwrap();
        fs::create_dir_all(roots.smithbox_game_dir("ER")).unwrap();
        fs::create_dir_all(roots.smithbox_game_dir("AC6")).unwrap();

        let games = discover_games(&roots).unwrap();
        assert_eq!(games, vec!["AC6", "DS3", "ER"]);
    }

    #[test]
    fn test_select_games_explicit() {
        let (_temp_dir, roots) = setup();
        fs::create_dir_all(roots.paramdex_game_dir("ER")).unwrap();
        fs::create_dir_all(roots.smithbox_game_dir("DS3")).unwrap();

        let games = select_games(
            &roots,
            &["ER".to_string(), "DS3".to_string(), "ER".to_string()],
        )
        .unwrap();
        assert_eq!(games, vec!["DS3", "ER"]);
    }

    #[test]
    fn test_select_games_unknown_game() {
        let (_temp_dir, roots) = setup();
        let result = select_games(&roots, &["BB".to_string()]);
        assert!(matches!(result, Err(SyncError::GameNotFound(g)) if g == "BB"));
    }

    #[test]
    fn test_game_params_unions_both_stores() {
        let (_temp_dir, roots) = setup();
        let names_dir = roots.paramdex_game_dir("ER").join(NAMES_DIR);
        fs::create_dir_all(&names_dir).unwrap();
        fs::write(names_dir.join("SpEffectParam.txt"), "1 Buff\n").unwrap();
        fs::write(names_dir.join("EquipParamWeapon.txt"), "1 Dagger\n").unwrap();

        let smithbox_dir = roots.smithbox_game_dir("ER");
        fs::create_dir_all(&smithbox_dir).unwrap();
        fs::write(
            smithbox_dir.join(ROW_NAMES_FILE),
            r#"{"Params":[{"Name":"EquipParamWeapon","Entries":[]},{"Name":"BulletParam","Entries":[]}]}"#,
        )
        .unwrap();

        let smithbox = SmithboxGame::load(&smithbox_dir).unwrap();
        let params = game_params(&roots, "ER", &smithbox).unwrap();
        assert_eq!(params, vec!["BulletParam", "EquipParamWeapon", "SpEffectParam"]);
    }
}
