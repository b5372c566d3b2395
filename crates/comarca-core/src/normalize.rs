//! Canonical comparable form of free text.
//!
//! Normalized text contains only `a-z`, `0-9` and single spaces, with no
//! leading or trailing space. Applying [`normalize_text`] twice yields the
//! same string as applying it once.
//!
//! Steps, in order:
//!
//! 1. lowercase
//! 2. canonical decomposition (NFD) and removal of combining marks U+0300–U+036F
//! 3. removal of ordinal indicators (`º ª °`), quotes and dash-like marks
//! 4. any other character outside `[a-z0-9]` becomes a separator
//! 5. separator runs collapse to one space; edges are trimmed
//!
//! Steps 2 and 3 delete characters outright, so `"3º"` becomes `"3"` and
//! `"d'água"` becomes `"dagua"`. Step 4 turns punctuation into word breaks,
//! so `"Cível/Criminal"` becomes `"civel criminal"`.

use unicode_normalization::UnicodeNormalization;

/// Ordinal indicators attached to numbers, as in `3º` or `1ª`.
const ORDINAL_MARKS: [char; 3] = ['º', 'ª', '°'];

/// Quote and dash-like characters dropped without leaving a gap.
const SILENT_MARKS: [char; 12] = [
    '\'', '"', '`', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}', '\u{00B7}', '\u{2022}',
    '\u{2013}', '\u{2014}', '\u{2212}',
];

/// Normalize optional text; `None` yields an empty string.
pub fn normalize(input: Option<&str>) -> String {
    input.map(normalize_text).unwrap_or_default()
}

/// Normalize text for comparison.
pub fn normalize_text(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_separator = false;

    for ch in lowered.nfd() {
        if is_dropped(ch) {
            continue;
        }
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_separator && !out.is_empty() {
                out.push(' ');
            }
            pending_separator = false;
            out.push(ch);
        } else {
            pending_separator = true;
        }
    }
    out
}

fn is_dropped(ch: char) -> bool {
    is_combining_diacritic(ch) || ORDINAL_MARKS.contains(&ch) || SILENT_MARKS.contains(&ch)
}

pub(crate) fn is_combining_diacritic(ch: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&ch)
}
