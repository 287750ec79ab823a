//! Bilingual row name decomposition.
//!
//! Paramdex names for rows that came out of Japanese-only game data often
//! carry the original Japanese text, either alone (`鉄の剣`) or after an
//! English translation (`Iron Sword -- 鉄の剣`). Smithbox only wants the
//! English part, and Paramdex keeps displaced Japanese text in a separate
//! `jp/` table.

/// Separator between the English and Japanese halves of a bilingual name.
pub const SEPARATOR: &str = " -- ";

/// Whether `c` falls in the CJK ranges used to detect Japanese text.
///
/// Covers CJK punctuation, hiragana and katakana (U+3000–U+30FF), halfwidth
/// and fullwidth forms (U+FF00–U+FFEF) and the unified ideographs block
/// (U+4E00–U+9FAF).
#[must_use]
pub const fn is_japanese_char(c: char) -> bool {
    matches!(
        c,
        '\u{3000}'..='\u{30FF}' | '\u{FF00}'..='\u{FFEF}' | '\u{4E00}'..='\u{9FAF}'
    )
}

/// Split a row name into its English and Japanese parts.
///
/// Returns:
/// - `(Some(name), None)` if the name holds no Japanese text
/// - `(None, Some(japanese))` if it is Japanese without an English prefix
/// - `(Some(english), Some(japanese))` for `english -- japanese`
///
/// The Japanese part ends at the last Japanese character; trailing text
/// after it is not part of either half. Matching stays within a single line:
/// only the first line containing Japanese text is used, and an English
/// prefix is recognized only on the first line of the name.
#[must_use]
pub fn split_japanese_name(name: &str) -> (Option<&str>, Option<&str>) {
    for (line_number, line) in name.split('\n').enumerate() {
        let Some((last, c)) = line
            .char_indices()
            .rev()
            .find(|&(_, c)| is_japanese_char(c))
        else {
            continue;
        };
        let end = last + c.len_utf8();

        if line_number == 0 {
            if let Some(sep) = line[..last].rfind(SEPARATOR) {
                return (Some(&line[..sep]), Some(&line[sep + SEPARATOR.len()..end]));
            }
        }
        return (None, Some(&line[..end]));
    }

    (Some(name), None)
}

/// The name Smithbox should display for a Paramdex name.
///
/// This is the English half of a bilingual name, or the whole name when it
/// has no English half.
#[must_use]
pub fn display_name(name: &str) -> &str {
    split_japanese_name(name).0.unwrap_or(name)
}
