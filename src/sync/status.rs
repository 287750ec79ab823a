//! Sync status display.
//!
//! This module reports, per game, which params each store has names for, so
//! it is easy to see what a sync would touch before running it.

use std::collections::BTreeSet;

use colored::Colorize;
use serde::Serialize;

use crate::config::Roots;
use crate::store::SmithboxGame;
use crate::store::paramdex::list_params;
use crate::sync::SyncResult;

/// Name coverage of one game across both stores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GameStatus {
    /// Game abbreviation (directory name).
    pub game: String,
    /// Params with a Paramdex name file.
    pub paramdex_params: usize,
    /// Params in the Smithbox row name document.
    pub smithbox_params: usize,
    /// Whether the Smithbox row name document exists.
    pub has_smithbox_document: bool,
    /// Params only Paramdex has names for.
    pub paramdex_only: Vec<String>,
    /// Params only Smithbox has names for.
    pub smithbox_only: Vec<String>,
}

impl GameStatus {
    /// Params both stores have.
    #[must_use]
    pub fn shared(&self) -> usize {
        self.paramdex_params - self.paramdex_only.len()
    }
}

/// Get the status of each game.
///
/// # Errors
///
/// Returns an error if a directory cannot be listed or a Smithbox document
/// cannot be parsed.
pub fn get_status(roots: &Roots, games: &[String]) -> SyncResult<Vec<GameStatus>> {
    games
        .iter()
        .map(|game| -> SyncResult<GameStatus> {
            let paramdex: BTreeSet<String> = list_params(&roots.paramdex_game_dir(game))?
                .into_iter()
                .collect();
            let smithbox = SmithboxGame::load(&roots.smithbox_game_dir(game))?;
            let smithbox_names: BTreeSet<String> =
                smithbox.param_names().map(String::from).collect();

            Ok(GameStatus {
                game: game.clone(),
                paramdex_params: paramdex.len(),
                smithbox_params: smithbox_names.len(),
                has_smithbox_document: smithbox.path().exists(),
                paramdex_only: paramdex.difference(&smithbox_names).cloned().collect(),
                smithbox_only: smithbox_names.difference(&paramdex).cloned().collect(),
            })
        })
        .collect()
}

/// Print status in human-readable form.
pub fn print_status(statuses: &[GameStatus]) {
    if statuses.is_empty() {
        println!("{}", "No games found.".dimmed());
        return;
    }

    for status in statuses {
        println!("{}", status.game.bold());
        println!("  Paramdex params: {}", status.paramdex_params);
        if status.has_smithbox_document {
            println!("  Smithbox params: {}", status.smithbox_params);
        } else {
            println!("  Smithbox params: {}", "no row name document".dimmed());
        }
        println!("  In both:         {}", status.shared());

        print_only("Only in Paramdex", &status.paramdex_only);
        print_only("Only in Smithbox", &status.smithbox_only);
        println!();
    }
}

fn print_only(label: &str, params: &[String]) {
    if params.is_empty() {
        return;
    }
    println!("  {}:", label.yellow());
    for param in params.iter().take(10) {
        println!("    {param}");
    }
    if params.len() > 10 {
        println!("    ... and {} more", params.len() - 10);
    }
}
