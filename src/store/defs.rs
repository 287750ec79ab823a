//! Schema definition copy from Smithbox to Paramdex.
//!
//! Smithbox ships param layouts (`Defs/*.xml`) and enum tables
//! (`Tdfs/*.tdf`) that Paramdex may not have yet. Missing files are copied
//! over; files Paramdex already has are never touched. Smithbox uses older
//! element names for two header fields, which are renamed on the way:
//! `Unk06` becomes `DataVersion` and `Version` becomes `FormatVersion`.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::DEF_DIRS;
use crate::sync::file::{atomic_write, list_files_with_extension};
use crate::sync::{SyncError, SyncResult};

/// Element renames applied to copied param layouts.
const RENAMES: [(&str, &str); 2] = [("Unk06", "DataVersion"), ("Version", "FormatVersion")];

/// Copy schema definitions Paramdex is missing for one game.
///
/// An XML layout is also skipped when Paramdex already has a layout named
/// after its `<ParamType>`. With `dry_run`, files are counted but not
/// written.
///
/// Returns the number of files copied.
///
/// # Errors
///
/// Returns an error if a source file cannot be read or a copy cannot be
/// written.
pub fn copy_defs(
    smithbox_game_dir: &Path,
    paramdex_game_dir: &Path,
    dry_run: bool,
) -> SyncResult<usize> {
    let mut copied = 0;

    for (dir, extension) in DEF_DIRS {
        let dest_dir = paramdex_game_dir.join(dir);

        for source in list_files_with_extension(&smithbox_game_dir.join(dir), extension)? {
            let Some(file_name) = source.file_name() else {
                continue;
            };
            let dest = dest_dir.join(file_name);
            if dest.exists() {
                continue;
            }

            if extension == "xml" {
                let content =
                    fs::read_to_string(&source).map_err(|e| SyncError::io(&source, e))?;
                if let Some(param_type) = param_type(&content) {
                    if dest_dir.join(format!("{param_type}.xml")).exists() {
                        debug!(file = %source.display(), param_type, "Layout exists under its param type");
                        continue;
                    }
                }
                if !dry_run {
                    atomic_write(&dest, &upgrade_layout(&content))?;
                }
            } else if !dry_run {
                fs::create_dir_all(&dest_dir).map_err(|e| SyncError::io(&dest_dir, e))?;
                fs::copy(&source, &dest).map_err(|e| SyncError::io(&dest, e))?;
            }

            debug!(from = %source.display(), to = %dest.display(), "Copied schema definition");
            copied += 1;
        }
    }

    Ok(copied)
}

/// Text of the first `<ParamType>` element, if any.
#[must_use]
pub fn param_type(xml: &str) -> Option<&str> {
    let open = "<ParamType>";
    let start = xml.find(open)? + open.len();
    let end = start + xml[start..].find("</ParamType>")?;
    let value = xml[start..end].trim();
    (!value.is_empty()).then_some(value)
}

/// Apply the element renames Paramdex expects.
#[must_use]
pub fn upgrade_layout(xml: &str) -> String {
    RENAMES
        .iter()
        .fold(xml.to_string(), |doc, (from, to)| {
            rename_element(&doc, from, to).unwrap_or(doc)
        })
}

/// Rename the first `from` element in `xml` to `to`.
///
/// Only the tag names change; attributes, content and whitespace are kept
/// byte for byte. Returns `None` if there is no such element.
#[must_use]
pub fn rename_element(xml: &str, from: &str, to: &str) -> Option<String> {
    let open = format!("<{from}");
    let start = xml
        .match_indices(&open)
        .map(|(i, _)| i)
        .find(|&i| ends_tag_name(xml, i + open.len()))?;
    let tag_end = start + xml[start..].find('>')?;
    let self_closing = xml[..tag_end].ends_with('/');

    let mut out = String::with_capacity(xml.len() + to.len() * 2);
    out.push_str(&xml[..start]);
    out.push('<');
    out.push_str(to);

    if self_closing {
        out.push_str(&xml[start + open.len()..]);
        return Some(out);
    }

    let close = format!("</{from}");
    let close_start = tag_end
        + xml[tag_end..]
            .match_indices(&close)
            .map(|(i, _)| i)
            .find(|&i| ends_tag_name(xml, tag_end + i + close.len()))?;

    out.push_str(&xml[start + open.len()..close_start]);
    out.push_str("</");
    out.push_str(to);
    out.push_str(&xml[close_start + close.len()..]);
    Some(out)
}

/// Whether the tag name ends at byte `pos` of `xml`.
fn ends_tag_name(xml: &str, pos: usize) -> bool {
    xml[pos..]
        .chars()
        .next()
        .is_some_and(|c| c == '>' || c == '/' || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const LAYOUT: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<PARAMDEF XmlVersion=\"3\">\n  <ParamType>EQUIP_PARAM_WEAPON_ST</ParamType>\n  <Unk06>2</Unk06>\n  <Version>203</Version>\n  <VersionAware>true</VersionAware>\n</PARAMDEF>";

    #[test]
    fn test_param_type() {
        assert_eq!(param_type(LAYOUT), Some("EQUIP_PARAM_WEAPON_ST"));
        assert_eq!(param_type("<PARAMDEF/>"), None);
        assert_eq!(param_type("<ParamType> </ParamType>"), None);
    }

    #[test]
    fn test_rename_element_keeps_surroundings() {
        let renamed = rename_element(LAYOUT, "Unk06", "DataVersion").unwrap();
        assert!(renamed.contains("\n  <DataVersion>2</DataVersion>\n"));
        assert!(!renamed.contains("Unk06"));
    }

    #[test]
    fn test_rename_element_matches_whole_name() {
        // <VersionAware> must not be taken for <Version>.
        let xml = "<A><VersionAware>1</VersionAware><Version>2</Version></A>";
        let renamed = rename_element(xml, "Version", "FormatVersion").unwrap();
        assert_eq!(
            renamed,
            "<A><VersionAware>1</VersionAware><FormatVersion>2</FormatVersion></A>"
        );
    }

    #[test]
    fn test_rename_element_self_closing_and_attributes() {
        assert_eq!(
            rename_element("<A><Unk06 /></A>", "Unk06", "DataVersion").unwrap(),
            "<A><DataVersion /></A>"
        );
        assert_eq!(
            rename_element("<Unk06 x=\"1\">3</Unk06>", "Unk06", "DataVersion").unwrap(),
            "<DataVersion x=\"1\">3</DataVersion>"
        );
        assert!(rename_element("<A/>", "Unk06", "DataVersion").is_none());
    }

    #[test]
    fn test_upgrade_layout() {
        let upgraded = upgrade_layout(LAYOUT);
        assert!(upgraded.contains("<DataVersion>2</DataVersion>"));
        assert!(upgraded.contains("<FormatVersion>203</FormatVersion>"));
        assert!(upgraded.contains("<VersionAware>true</VersionAware>"));
    }

    #[test]
    fn test_copy_defs() {
        let temp_dir = TempDir::new().unwrap();
        let smithbox = temp_dir.path().join("sb");
        let paramdex = temp_dir.path().join("pd");
        fs::create_dir_all(smithbox.join("Defs")).unwrap();
        fs::create_dir_all(smithbox.join("Tdfs")).unwrap();
        fs::create_dir_all(paramdex.join("Defs")).unwrap();

        fs::write(smithbox.join("Defs/EquipParamWeapon.xml"), LAYOUT).unwrap();
        fs::write(smithbox.join("Defs/Existing.xml"), "<PARAMDEF/>").unwrap();
        fs::write(paramdex.join("Defs/Existing.xml"), "keep me").unwrap();
        fs::write(smithbox.join("Tdfs/WEAPON_TYPE.tdf"), "raw enum data").unwrap();

        assert_eq!(copy_defs(&smithbox, &paramdex, false).unwrap(), 2);

        let copied = fs::read_to_string(paramdex.join("Defs/EquipParamWeapon.xml")).unwrap();
        assert!(copied.contains("<FormatVersion>203</FormatVersion>"));
        assert_eq!(fs::read_to_string(paramdex.join("Defs/Existing.xml")).unwrap(), "keep me");
        assert_eq!(
            fs::read_to_string(paramdex.join("Tdfs/WEAPON_TYPE.tdf")).unwrap(),
            "raw enum data"
        );

        // Everything is present now.
        assert_eq!(copy_defs(&smithbox, &paramdex, false).unwrap(), 0);
    }

    #[test]
    fn test_copy_defs_skips_layout_known_by_param_type() {
        let temp_dir = TempDir::new().unwrap();
        let smithbox = temp_dir.path().join("sb");
        let paramdex = temp_dir.path().join("pd");
        fs::create_dir_all(smithbox.join("Defs")).unwrap();
        fs::create_dir_all(paramdex.join("Defs")).unwrap();

        fs::write(smithbox.join("Defs/EquipParamWeapon.xml"), LAYOUT).unwrap();
        fs::write(paramdex.join("Defs/EQUIP_PARAM_WEAPON_ST.xml"), "<PARAMDEF/>").unwrap();

        assert_eq!(copy_defs(&smithbox, &paramdex, false).unwrap(), 0);
        assert!(!paramdex.join("Defs/EquipParamWeapon.xml").exists());
    }

    #[test]
    fn test_copy_defs_dry_run_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let smithbox = temp_dir.path().join("sb");
        let paramdex = temp_dir.path().join("pd");
        fs::create_dir_all(smithbox.join("Tdfs")).unwrap();
        fs::write(smithbox.join("Tdfs/A.tdf"), "a").unwrap();

        assert_eq!(copy_defs(&smithbox, &paramdex, true).unwrap(), 1);
        assert!(!paramdex.exists());
    }
}
