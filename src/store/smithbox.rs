//! Smithbox row name documents.
//!
//! Smithbox keeps every param's row names for a game in a single JSON
//! document, `Community Row Names.json`:
//!
//! ```json
//! {
//!   "Params": [
//!     {
//!       "Name": "EquipParamWeapon",
//!       "Entries": [
//!         { "Index": 0, "ID": 1000, "Name": "Dagger" }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Unlike Paramdex, Smithbox lists unnamed rows too, with an empty name.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ROW_NAMES_FILE;
use crate::model::{Record, has_any_name};
use crate::sync::file::{atomic_write, read_optional};
use crate::sync::{SyncError, SyncResult};

/// The full row name document for one game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowNameStore {
    /// The list of params
    #[serde(rename = "Params", default)]
    pub params: Vec<RowNameParam>,
}

/// Row names for one param.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowNameParam {
    /// The name of the param
    #[serde(rename = "Name")]
    pub name: String,

    /// The row name entries for this param, in display order
    #[serde(rename = "Entries", default)]
    pub entries: Vec<Record>,
}

/// Serialization view that appends staged params without cloning.
#[derive(Serialize)]
struct StoreView<'a> {
    #[serde(rename = "Params")]
    params: Vec<&'a RowNameParam>,
}

/// A game's row name document, loaded for editing.
///
/// Params that only exist on the Paramdex side are staged separately and
/// only added to the document when they end up with at least one name.
#[derive(Debug, Clone)]
pub struct SmithboxGame {
    path: PathBuf,
    store: RowNameStore,
    added: Vec<RowNameParam>,
}

impl SmithboxGame {
    /// Load the row name document from a Smithbox game directory.
    ///
    /// A missing document loads as an empty one.
    ///
    /// # Errors
    ///
    /// Returns an error if the document exists but cannot be read or parsed.
    pub fn load(game_dir: &Path) -> SyncResult<Self> {
        let path = game_dir.join(ROW_NAMES_FILE);
        let store = match read_optional(&path)? {
            Some(content) => {
                serde_json::from_str(&content).map_err(|e| SyncError::json(&path, e))?
            }
            None => RowNameStore::default(),
        };

        Ok(Self {
            path,
            store,
            added: Vec::new(),
        })
    }

    /// Path of the row name document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Names of the params in the document, in document order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.store.params.iter().map(|p| p.name.as_str())
    }

    /// Rows of `param`, or nothing if the document has no such param.
    #[must_use]
    pub fn entries(&self, param: &str) -> &[Record] {
        self.find(param)
            .map(|p| p.entries.as_slice())
            .unwrap_or_default()
    }

    /// Replace the rows of `param`, staging it as new if it is not present.
    pub fn set_entries(&mut self, param: &str, entries: Vec<Record>) {
        if let Some(existing) = self
            .store
            .params
            .iter_mut()
            .chain(self.added.iter_mut())
            .find(|p| p.name == param)
        {
            existing.entries = entries;
            return;
        }

        self.added.push(RowNameParam {
            name: param.to_string(),
            entries,
        });
    }

    fn find(&self, param: &str) -> Option<&RowNameParam> {
        self.store
            .params
            .iter()
            .chain(self.added.iter())
            .find(|p| p.name == param)
    }

    /// Render the document as Smithbox writes it: two-space indentation,
    /// `\n` line endings, no trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render(&self) -> SyncResult<Option<String>> {
        let params: Vec<&RowNameParam> = self
            .store
            .params
            .iter()
            .chain(self.added.iter().filter(|p| has_any_name(&p.entries)))
            .collect();

        if params.is_empty() {
            return Ok(None);
        }

        serde_json::to_string_pretty(&StoreView { params })
            .map(Some)
            .map_err(|e| SyncError::json(&self.path, e))
    }

    /// Write the document back.
    ///
    /// Nothing is written when the document would hold no params.
    /// Returns whether the document was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be serialized or written.
    pub fn save(&self) -> SyncResult<bool> {
        let Some(content) = self.render()? else {
            debug!(path = %self.path.display(), "No params, skipping write");
            return Ok(false);
        };

        atomic_write(&self.path, &content)?;
        Ok(true)
    }
}
