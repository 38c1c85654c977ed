// treats.rs — Treat menu + category frequency analysis.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One item on the party menu. `kind` is the category (appetizer, drink,
/// dessert, ...) and is the only field the frequency analysis looks at.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Treat {
    pub name: String,
    pub kind: String,
}

/// Most- and least-common treat category, recomputed on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeSummary {
    pub most_common_type: Option<String>,
    pub least_common_type: Option<String>,
}

/// Return the most and least common treat kind as (most, least).
///
/// Ties go to the kind that sorts first alphabetically. An empty menu
/// yields (None, None); a single distinct kind is both most and least.
pub fn most_and_least_common_type(treats: &[Treat]) -> (Option<String>, Option<String>) {
    if treats.is_empty() {
        return (None, None);
    }

    // BTreeMap keeps the kinds in alphabetical order, so scanning for the
    // first strictly-greater (or strictly-smaller) count gives the
    // alphabetically-first winner on ties.
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for treat in treats {
        *counts.entry(treat.kind.as_str()).or_insert(0) += 1;
    }

    let mut most: (&str, usize) = ("", 0);
    let mut least: (&str, usize) = ("", usize::MAX);
    for (&kind, &count) in &counts {
        if count > most.1 {
            most = (kind, count);
        }
        if count < least.1 {
            least = (kind, count);
        }
    }

    (Some(most.0.to_string()), Some(least.0.to_string()))
}

/// Convenience wrapper for the JSON view.
pub fn summarize(treats: &[Treat]) -> TypeSummary {
    let (most_common_type, least_common_type) = most_and_least_common_type(treats);
    TypeSummary {
        most_common_type,
        least_common_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu(kinds: &[&str]) -> Vec<Treat> {
        kinds
            .iter()
            .enumerate()
            .map(|(i, kind)| Treat {
                name: format!("treat-{i}"),
                kind: kind.to_string(),
            })
            .collect()
    }

    fn most_and_least(kinds: &[&str]) -> (Option<String>, Option<String>) {
        most_and_least_common_type(&menu(kinds))
    }

    #[test]
    fn empty_menu_has_no_summary() {
        assert_eq!(most_and_least(&[]), (None, None));
    }

    #[test]
    fn single_kind_is_both_most_and_least() {
        assert_eq!(
            most_and_least(&["drink", "drink", "drink"]),
            (Some("drink".into()), Some("drink".into()))
        );
    }

    #[test]
    fn full_tie_goes_alphabetically_first_for_both() {
        assert_eq!(
            most_and_least(&["drink", "appetizer", "dessert"]),
            (Some("appetizer".into()), Some("appetizer".into()))
        );
    }

    #[test]
    fn tie_for_least_goes_alphabetically_first() {
        assert_eq!(
            most_and_least(&["drink", "drink", "dessert", "appetizer"]),
            (Some("drink".into()), Some("appetizer".into()))
        );
    }

    #[test]
    fn tie_for_most_goes_alphabetically_first() {
        assert_eq!(
            most_and_least(&["drink", "appetizer", "drink", "dessert", "dessert"]),
            (Some("dessert".into()), Some("appetizer".into()))
        );
    }

    #[test]
    fn repeated_calls_are_identical() {
        let treats = menu(&["drink", "appetizer", "drink"]);
        assert_eq!(
            most_and_least_common_type(&treats),
            most_and_least_common_type(&treats)
        );
    }
}
