//! Two-pointer row alignment.
//!
//! Both stores keep their own ordered copy of every param table, and both are
//! edited independently. Alignment walks one side (the *structure* side, which
//! decides row order and existence) and peeks the front of the other side's
//! queue, pairing rows whose IDs line up.
//!
//! # Mismatches
//!
//! Paramdex generally only lists named rows while Smithbox lists every row,
//! so when the IDs disagree the queue side is assumed to be missing that row.
//! Rows are never reordered or spliced into the middle of the structure: a
//! real structural change between the two sides calls for a resync against
//! the game data, which is out of scope here.

use std::collections::VecDeque;

use crate::model::{Record, split_japanese_name};
use crate::sync::types::MergeStats;

/// One step of an alignment, in structure order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The structure row at `position` lined up with a queue row.
    Matched {
        /// Index into the structure sequence.
        position: usize,
        /// The consumed queue row.
        row: Record,
    },
    /// The queue has no row for the structure row at `position`.
    StructureOnly {
        /// Index into the structure sequence.
        position: usize,
    },
    /// A leftover queue row that sorts after every structure row.
    Appended(Record),
    /// A leftover queue row that cannot be placed without splicing.
    Dropped(Record),
}

/// Align `queue` against `structure`.
///
/// Every structure row yields exactly one `Matched` or `StructureOnly` step,
/// in order. Queue rows left over at the end are all `Appended` when the
/// structure is empty or the first leftover ID is greater than every
/// structure ID, and all `Dropped` otherwise.
#[must_use]
pub fn align(structure: &[Record], queue: Vec<Record>) -> Vec<Step> {
    let mut queue = VecDeque::from(queue);
    let mut steps = Vec::with_capacity(structure.len() + queue.len());

    for (position, entry) in structure.iter().enumerate() {
        match queue.pop_front() {
            Some(row) if row.id == entry.id => steps.push(Step::Matched { position, row }),
            Some(row) => {
                queue.push_front(row);
                steps.push(Step::StructureOnly { position });
            }
            None => steps.push(Step::StructureOnly { position }),
        }
    }

    let past_end = match (queue.front(), structure.iter().map(|r| r.id).max()) {
        (Some(next), Some(max_id)) => next.id > max_id,
        _ => true,
    };
    steps.extend(queue.into_iter().map(|row| {
        if past_end {
            Step::Appended(row)
        } else {
            Step::Dropped(row)
        }
    }));

    steps
}

/// How a name conflict was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The existing name stays.
    Kept,
    /// An unnamed row took the candidate name.
    Filled,
    /// An existing name was replaced by the candidate.
    Replaced,
}

/// Decide whether `candidate` should replace `existing`.
///
/// An empty candidate never wins. An empty existing name always takes the
/// candidate. Otherwise the existing name is kept unless `overwrite` is set.
#[must_use]
pub fn resolve_name(existing: &str, candidate: &str, overwrite: bool) -> Resolution {
    if candidate.is_empty() || candidate == existing {
        Resolution::Kept
    } else if existing.is_empty() {
        Resolution::Filled
    } else if overwrite {
        Resolution::Replaced
    } else {
        Resolution::Kept
    }
}

/// Japanese text of a Paramdex name that the merged name no longer carries.
///
/// When a bilingual Paramdex name gives way to an English-only name, the
/// Japanese half is kept in the separate Japanese table instead of being lost.
#[must_use]
pub fn japanese_remainder<'a>(paramdex_name: &'a str, merged_name: &str) -> Option<&'a str> {
    match split_japanese_name(paramdex_name) {
        (_, Some(japanese)) if !merged_name.contains(japanese) => Some(japanese),
        _ => None,
    }
}

/// Result of merging one table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// The merged rows for the side being updated.
    pub records: Vec<Record>,
    /// Japanese-only names to persist alongside (may be empty).
    pub japanese: Vec<Record>,
    /// What changed.
    pub stats: MergeStats,
}
