//! Free-text matching over normalized text.
//!
//! Two predicates live here:
//!
//! - [`matches`] is the sidebar search. A term that opens with a number
//!   ("1", "3º", "2ª vara") only matches candidates that open with the
//!   *same* number, so "1" finds "1ª Vara Criminal" but not
//!   "21ª Vara Criminal". Everything else is plain substring containment.
//! - [`option_matches`] is the dropdown type-ahead: substring containment
//!   only.

use crate::normalize::normalize_text;

/// A search term normalized once and reused against many candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    normalized: String,
}

impl SearchTerm {
    pub fn new(term: &str) -> Self {
        Self {
            normalized: normalize_text(term),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// An empty term matches everything.
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    pub fn matches(&self, candidate: &str) -> bool {
        if self.is_empty() {
            return true;
        }
        matches_normalized(&normalize_text(candidate), &self.normalized)
    }
}

/// Ordinal-aware match of `term` against `candidate`.
pub fn matches(candidate: &str, term: &str) -> bool {
    SearchTerm::new(term).matches(candidate)
}

/// Plain normalized containment, as used by dropdown type-ahead.
pub fn option_matches(option: &str, term: &str) -> bool {
    let term = normalize_text(term);
    term.is_empty() || normalize_text(option).contains(&term)
}

/// [`matches`] for inputs that are already normalized.
pub fn matches_normalized(candidate: &str, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    if let Some(ordinal) = OrdinalPrefix::parse(term)
        && let Some((number, _)) = split_leading_number(candidate)
    {
        return same_number(number, ordinal.number)
            && (ordinal.rest.is_empty() || candidate.contains(ordinal.rest));
    }
    candidate.contains(term)
}

/// Leading `<digits> [o]` token of a normalized search term.
///
/// The `o` is what remains of `º` typed as a letter ("1o vara"); it only
/// counts when it stands alone, so "10 ordem" keeps "ordem" intact.
#[derive(Debug, PartialEq, Eq)]
struct OrdinalPrefix<'a> {
    number: &'a str,
    rest: &'a str,
}

impl<'a> OrdinalPrefix<'a> {
    fn parse(term: &'a str) -> Option<Self> {
        let (number, tail) = split_leading_number(term)?;
        let tail = tail.trim_start();
        let rest = match tail.strip_prefix('o') {
            Some(after) if after.is_empty() || after.starts_with(' ') => after.trim_start(),
            _ => tail,
        };
        Some(Self { number, rest })
    }
}

fn split_leading_number(text: &str) -> Option<(&str, &str)> {
    let end = text
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(text.len());
    if end == 0 {
        None
    } else {
        Some(text.split_at(end))
    }
}

/// Integer equality of two digit strings, without parsing.
fn same_number(a: &str, b: &str) -> bool {
    a.trim_start_matches('0') == b.trim_start_matches('0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_term_matches_everything() {
        assert!(matches("1ª Vara Criminal", ""));
        assert!(matches("", ""));
        assert!(matches("Capital", " º - "));
    }

    #[test]
    fn leading_number_must_be_equal() {
        assert!(matches("1ª Vara Criminal", "1"));
        assert!(!matches("21ª Vara Criminal", "1"));
        assert!(!matches("13ª Vara Cível", "3"));
        assert!(!matches("31ª Vara Cível", "3"));
        assert!(matches("3ª Vara Cível", "3º"));
    }

    #[test]
    fn leading_zeros_do_not_change_the_number() {
        assert!(matches("01ª Vara", "1"));
        assert!(matches("1ª Vara", "001"));
        assert!(!matches("10ª Vara", "1"));
    }

    #[test]
    fn remainder_of_ordinal_term_must_appear() {
        assert!(matches("2ª Vara Criminal", "2ª vara"));
        assert!(matches("2ª Vara Criminal", "2o criminal"));
        assert!(!matches("2ª Vara Cível", "2ª criminal"));
        assert!(!matches("12ª Vara Criminal", "2ª criminal"));
    }

    #[test]
    fn lone_o_is_an_ordinal_marker_only_when_separate() {
        assert_eq!(
            OrdinalPrefix::parse("1o vara"),
            Some(OrdinalPrefix {
                number: "1",
                rest: "vara"
            })
        );
        assert_eq!(
            OrdinalPrefix::parse("10 ordem"),
            Some(OrdinalPrefix {
                number: "10",
                rest: "ordem"
            })
        );
        assert_eq!(OrdinalPrefix::parse("vara 1"), None);
    }

    #[test]
    fn numeric_term_falls_back_to_substring_for_non_numeric_candidates() {
        assert!(matches("Juizado 1 Especial", "1"));
        assert!(!matches("Capital", "1"));
    }

    #[test]
    fn non_numeric_terms_use_substring() {
        assert!(matches("1ª Vara Criminal", "criminal"));
        assert!(matches("Comarca de São Paulo", "SAO PAULO"));
        assert!(!matches("Comarca de Santos", "paulo"));
    }

    #[test]
    fn option_matches_is_plain_containment() {
        assert!(option_matches("21ª Vara Criminal", "1"));
        assert!(option_matches("Vara de Família", "familia"));
        assert!(option_matches("anything", "   "));
        assert!(!option_matches("Vara Cível", "criminal"));
    }
}
