//! Command logic shared by the binary and its tests.

use comarca_core::{FilterSession, matches};
use comarca_model::Field;

/// Exit status of `comarca match` when the term does not match.
pub const NO_MATCH_EXIT_CODE: i32 = 2;

/// Apply selections in order and return the fields the cascade left cleared.
///
/// A field cleared by an earlier selection and set again later is not
/// reported.
pub fn replay_selections(session: &mut FilterSession, entries: &[(Field, &str)]) -> Vec<Field> {
    let mut reset: Vec<Field> = Vec::new();
    for &(field, value) in entries {
        reset.retain(|earlier| *earlier != field);
        reset.extend(session.select(field, value));
    }
    reset
}

/// Options still offered for each field, narrowed by a type-ahead term.
pub fn option_lists<'a>(
    session: &'a FilterSession,
    fields: &[Field],
    term: &str,
) -> Vec<(Field, Vec<&'a str>)> {
    fields
        .iter()
        .map(|&field| (field, session.search_options(field, term)))
        .collect()
}

/// Process exit status for `comarca match TEXT TERM`.
pub fn match_exit_code(text: &str, term: &str) -> i32 {
    if matches(text, term) {
        0
    } else {
        NO_MATCH_EXIT_CODE
    }
}
