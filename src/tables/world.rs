//! Curated world events used when the distinguished table has nothing for
//! the requested day.

use crate::domain::event::{Category, HistoricalEvent, GENERAL_COUNTRY};

use super::{reference_url_for, TableEntry};

/// Wider window than the distinguished table: these rows are fallback
/// material, so a looser match is acceptable.
pub const TOLERANCE_YEARS: i32 = 10;

fn entries(key: &str) -> &'static [TableEntry] {
    match key {
        "07-20" => &[TableEntry {
            year: 1969,
            title: "Apollo 11 Moon Landing",
            description: "Neil Armstrong and Buzz Aldrin became the first humans to land on the Moon.",
            full_content: "On July 20, 1969, NASA's Apollo 11 mission successfully landed the first humans on the Moon. Neil Armstrong and Edwin \"Buzz\" Aldrin landed the lunar module Eagle in the Sea of Tranquility at 20:17 UTC. Armstrong became the first person to step onto the lunar surface six hours later, followed by Aldrin. They spent about 21.5 hours on the lunar surface before rejoining Michael Collins in lunar orbit.",
            source: "NASA Historical Reference Collection",
            citation: "NASA SP-4029, Chariots for Apollo: A History of Manned Lunar Spacecraft",
            verification_url: "https://www.nasa.gov/mission_pages/apollo/apollo11.html",
            priority: 2,
        }],
        "11-09" => &[TableEntry {
            year: 1989,
            title: "Fall of the Berlin Wall",
            description: "The Berlin Wall fell, marking the beginning of German reunification and the end of the Cold War.",
            full_content: "On November 9, 1989, the Berlin Wall fell after 28 years of dividing East and West Berlin. The fall was precipitated by political changes in the Soviet Union and mounting pressure from East German citizens. This event marked the beginning of German reunification and symbolized the end of the Cold War era.",
            source: "German Federal Archives (Bundesarchiv)",
            citation: "Bundesarchiv, Bild 183-1989-1118-028",
            verification_url: "https://www.bundesarchiv.de/",
            priority: 2,
        }],
        _ => &[],
    }
}

/// World events for a month-day key within the tolerance window.
pub fn world_events(key: &str, year: i32) -> Vec<HistoricalEvent> {
    entries(key)
        .iter()
        .filter(|e| (e.year - year).abs() <= TOLERANCE_YEARS)
        .map(|e| {
            HistoricalEvent::new(
                format!("verified-world-{}-{}", e.year, key),
                e.title,
                e.description,
                Category::Occurrence,
                e.year,
            )
            .with_full_content(e.full_content)
            .with_source(e.source)
            .with_citation(e.citation)
            .with_verification_url(e.verification_url)
            .with_country(GENERAL_COUNTRY)
            .with_priority(e.priority)
            .with_reference_url(reference_url_for(e.title))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_is_ten_years() {
        assert_eq!(world_events("07-20", 1969).len(), 1);
        assert_eq!(world_events("07-20", 1979).len(), 1);
        assert_eq!(world_events("07-20", 1959).len(), 1);
        assert!(world_events("07-20", 1980).is_empty());
    }

    #[test]
    fn test_events_are_general() {
        let events = world_events("11-09", 1989);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "verified-world-1989-11-09");
        assert!(!events[0].is_distinguished());
        assert_eq!(events[0].effective_priority(), 2);
    }

    #[test]
    fn test_unknown_key_is_empty() {
        assert!(world_events("08-15", 1947).is_empty());
    }
}
