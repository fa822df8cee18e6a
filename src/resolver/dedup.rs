//! De-duplication rules used during assembly.
//!
//! Two different rules apply at two different points: a prefix-overlap
//! check that keeps feed events away from the protected bucket, and a
//! normalized-title pass over the final ordering.

use crate::domain::event::HistoricalEvent;

/// How many leading characters participate in the overlap check.
const PREFIX_LEN: usize = 20;

/// Whether two titles overlap: the first 20 characters of either title,
/// lowercased, appear anywhere in the other. Deliberately fuzzy; short
/// titles match aggressively.
pub fn titles_overlap(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let a_prefix: String = a.chars().take(PREFIX_LEN).collect();
    let b_prefix: String = b.chars().take(PREFIX_LEN).collect();

    a.contains(&b_prefix) || b.contains(&a_prefix)
}

/// Drop feed events whose title overlaps any protected event's title.
pub fn filter_overlapping(
    candidates: Vec<HistoricalEvent>,
    protected: &[HistoricalEvent],
) -> Vec<HistoricalEvent> {
    candidates
        .into_iter()
        .filter(|candidate| {
            !protected
                .iter()
                .any(|existing| titles_overlap(&existing.title, &candidate.title))
        })
        .collect()
}

/// Keep the first event for each normalized title, preserving order.
pub fn dedup_by_title(events: Vec<HistoricalEvent>) -> Vec<HistoricalEvent> {
    let mut seen: Vec<String> = Vec::new();
    let mut unique = Vec::with_capacity(events.len());

    for event in events {
        let normalized = event.normalized_title();
        if seen.contains(&normalized) {
            continue;
        }
        seen.push(normalized);
        unique.push(event);
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::event::Category;

    fn event(id: &str, title: &str) -> HistoricalEvent {
        HistoricalEvent::new(id, title, "desc", Category::Occurrence, 1947)
    }

    #[test]
    fn test_titles_overlap_prefix_in_either_direction() {
        assert!(titles_overlap(
            "Indian Independence Day",
            "indian independence day celebrations begin"
        ));
        assert!(titles_overlap(
            "celebrations begin for Indian Independence Da",
            "Indian Independence Day"
        ));
        assert!(!titles_overlap(
            "Apollo 11 Moon Landing",
            "Fall of the Berlin Wall"
        ));
    }

    #[test]
    fn test_short_titles_match_aggressively() {
        // A short title's whole text is its prefix, so substrings match.
        assert!(titles_overlap("India", "The Indiana territory is organized"));
    }

    #[test]
    fn test_filter_overlapping_protects_first_bucket() {
        let protected = vec![event("p1", "Indian Independence Day")];
        let candidates = vec![
            event("c1", "Indian Independence Day parade held"),
            event("c2", "Apollo 11 Moon Landing"),
        ];

        let kept = filter_overlapping(candidates, &protected);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "c2");
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let events = vec![
            event("a", "Apollo 11 Moon Landing"),
            event("b", "Apollo 11 Moon landing!"),
            event("c", "Fall of the Berlin Wall"),
        ];

        let unique = dedup_by_title(events);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].id, "a");
        assert_eq!(unique[1].id, "c");
    }
}
