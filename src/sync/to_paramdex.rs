//! Smithbox → Paramdex name sync.
//!
//! Smithbox supplies the row structure here, since it lists every row while
//! Paramdex only lists named ones, but Paramdex is the side being edited and
//! none of its rows are ever removed. The table is rebuilt in ID order: rows
//! both sides have are merged, rows only Smithbox names are added, and every
//! other Paramdex row is kept as it is. Japanese text displaced by an English
//! Smithbox name goes to the param's Japanese-only table.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::{debug, info};

use crate::config::Roots;
use crate::model::Record;
use crate::store::{ParamdexParam, SmithboxGame, copy_defs, game_params};
use crate::sync::align::{MergeOutcome, Resolution, japanese_remainder, resolve_name};
use crate::sync::types::{Direction, GameStats, SyncOptions, SyncReport, SyncResult};

/// Merge Smithbox rows into a Paramdex table.
///
/// Paramdex rows are sorted by ID. Before each Smithbox entry, Paramdex rows
/// with a lower ID are passed through unchanged; a Paramdex row with the
/// entry's ID is merged with it. A named Smithbox entry becomes a new row only
/// when Paramdex has no unmerged row with that ID. Paramdex rows left at the
/// end are kept, so the result always holds every input Paramdex row.
///
/// Paramdex keeps its existing names unless `overwrite` is set.
#[must_use]
pub fn merge_into_paramdex(
    entries: &[Record],
    paramdex: Vec<Record>,
    overwrite: bool,
) -> MergeOutcome {
    let mut unmatched: HashMap<i64, usize> = HashMap::new();
    for row in &paramdex {
        *unmatched.entry(row.id).or_default() += 1;
    }
    let mut queue = VecDeque::from(paramdex);
    let mut outcome = MergeOutcome::default();

    for entry in entries {
        while let Some(row) = queue.pop_front() {
            if row.id >= entry.id {
                queue.push_front(row);
                break;
            }
            outcome.records.push(row);
        }

        match queue.pop_front() {
            Some(row) if row.id == entry.id => {
                if let Some(count) = unmatched.get_mut(&row.id) {
                    *count -= 1;
                }
                merge_matched(&mut outcome, entry, &row, overwrite);
            }
            front => {
                if let Some(row) = front {
                    queue.push_front(row);
                }
                let has_row = unmatched.get(&entry.id).is_some_and(|&count| count > 0);
                if !entry.is_unnamed() && !has_row {
                    outcome.records.push(Record::new(entry.id, entry.name.clone()));
                    outcome.stats.rows_inserted += 1;
                }
            }
        }
    }
    outcome.records.extend(queue);

    outcome.stats.japanese_names = outcome.japanese.len();
    outcome
}

fn merge_matched(outcome: &mut MergeOutcome, entry: &Record, row: &Record, overwrite: bool) {
    let name = match resolve_name(&row.name, &entry.name, overwrite) {
        Resolution::Kept => row.name.clone(),
        Resolution::Filled => {
            outcome.stats.names_filled += 1;
            entry.name.clone()
        }
        Resolution::Replaced => {
            outcome.stats.names_replaced += 1;
            entry.name.clone()
        }
    };
    if let Some(japanese) = japanese_remainder(&row.name, &name) {
        outcome.japanese.push(Record::new(row.id, japanese));
    }
    outcome.records.push(Record::new(row.id, name));
}

/// Combine a param's existing Japanese-only rows with newly split ones.
///
/// A new row replaces the existing rows with its ID; every other existing row
/// is kept. The result is sorted by ID.
fn carry_japanese(existing: Vec<Record>, fresh: Vec<Record>) -> Vec<Record> {
    let replaced: HashSet<i64> = fresh.iter().map(|r| r.id).collect();
    let mut rows: Vec<Record> = existing
        .into_iter()
        .filter(|r| !replaced.contains(&r.id))
        .chain(fresh)
        .collect();
    rows.sort_by_key(|r| r.id);
    rows
}

/// Sync Smithbox names into Paramdex for each game, then copy any schema
/// definitions Paramdex is missing (unless `options.skip_defs`).
///
/// # Errors
///
/// Returns an error on the first file that cannot be read, parsed or written.
pub fn sync_to_paramdex(
    roots: &Roots,
    games: &[String],
    options: SyncOptions,
) -> SyncResult<SyncReport> {
    let mut report = SyncReport::new(Direction::SmithboxToParamdex, options.dry_run);
    for game in games {
        report.games.push(sync_game(roots, game, options)?);
    }
    Ok(report)
}

fn sync_game(roots: &Roots, game: &str, options: SyncOptions) -> SyncResult<GameStats> {
    let smithbox_dir = roots.smithbox_game_dir(game);
    let paramdex_dir = roots.paramdex_game_dir(game);
    let smithbox = SmithboxGame::load(&smithbox_dir)?;
    let mut stats = GameStats::new(game);

    for param in game_params(roots, game, &smithbox)? {
        stats.tables += 1;

        let existing = ParamdexParam::load(&paramdex_dir, &param)?;
        let outcome = merge_into_paramdex(smithbox.entries(&param), existing.rows, options.overwrite);
        debug!(
            game,
            param = %param,
            filled = outcome.stats.names_filled,
            replaced = outcome.stats.names_replaced,
            inserted = outcome.stats.rows_inserted,
            japanese = outcome.stats.japanese_names,
            "Merged param"
        );
        stats.merge.add(&outcome.stats);

        let merged = ParamdexParam {
            name: param,
            rows: outcome.records,
            japanese_rows: carry_japanese(existing.japanese_rows, outcome.japanese),
        };
        let files = if options.dry_run {
            merged.files_to_write()
        } else {
            merged.save(&paramdex_dir)?
        };
        if files > 0 {
            stats.tables_written += 1;
        }
    }

    if !options.skip_defs {
        stats.defs_copied = copy_defs(&smithbox_dir, &paramdex_dir, options.dry_run)?;
    }

    info!(game, tables = stats.tables_written, defs = stats.defs_copied, "Converted game");
    Ok(stats)
}
