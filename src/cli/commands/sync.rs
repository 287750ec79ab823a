//! Sync command implementations (`to-smithbox`, `to-paramdex`).
//!
//! Both commands run every selected game through the same pipeline and
//! print one summary at the end. A malformed Paramdex file aborts the run.

use crate::cli::commands::Target;
use crate::error::Result;
use crate::sync::{self, Direction, GameStats, SyncOptions, SyncReport};
use colored::Colorize;
use tracing::info;

/// Execute a sync in the given direction.
///
/// # Errors
///
/// Returns an error if the roots are invalid, a requested game is unknown,
/// or any file cannot be read, parsed or written.
pub fn execute(
    direction: Direction,
    options: SyncOptions,
    target: Target<'_>,
    json: bool,
) -> Result<()> {
    let (roots, games) = target.resolve()?;
    info!(%direction, games = games.len(), dry_run = options.dry_run, "Starting sync");

    let report = sync::run(direction, &roots, &games, options)?;

    if json {
        let output = serde_json::json!({
            "success": true,
            "smithbox": roots.smithbox.display().to_string(),
            "paramdex": roots.paramdex.display().to_string(),
            "report": report,
            "totals": report.totals(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &SyncReport) {
    if report.games.is_empty() {
        println!("No games found.");
        return;
    }

    for game in &report.games {
        println!("Converted {}", game.game.bold());
        print_game_stats(game, report.japanese_saved);
    }

    let totals = report.totals();
    println!();
    println!(
        "Total: {} tables written, {} names filled, {} replaced, {} rows added",
        report.tables_written(),
        totals.names_filled,
        totals.names_replaced,
        totals.rows_inserted + totals.rows_appended,
    );
    if report.dry_run {
        println!("{}", "Dry run: no files were written.".yellow());
    }
}

fn print_game_stats(game: &GameStats, japanese_saved: bool) {
    let merge = &game.merge;
    println!("  Tables:   {} ({} written)", game.tables, game.tables_written);
    if merge.changes() == 0 {
        println!("  {}", "No name changes".dimmed());
    }
    if merge.names_filled > 0 {
        println!("  Filled:   {}", merge.names_filled);
    }
    if merge.names_replaced > 0 {
        println!("  Replaced: {}", merge.names_replaced);
    }
    if merge.rows_inserted > 0 {
        println!("  Inserted: {}", merge.rows_inserted);
    }
    if merge.rows_appended > 0 {
        println!("  Appended: {}", merge.rows_appended);
    }
    if merge.rows_dropped > 0 {
        println!(
            "  {} {} rows could not be aligned and were skipped",
            "Skipped:".yellow(),
            merge.rows_dropped
        );
    }
    if merge.japanese_names > 0 {
        if japanese_saved {
            println!("  Japanese: {}", merge.japanese_names);
        } else {
            println!("  Japanese: {} {}", merge.japanese_names, "(not stored)".dimmed());
        }
    }
    if game.defs_copied > 0 {
        println!("  Defs:     {} copied", game.defs_copied);
    }
}
