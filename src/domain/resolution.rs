//! Resolution: the assembled answer for one request.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::event::HistoricalEvent;

/// Which path produced the bulk of a resolution's events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Static tables and/or the live almanac feed, distinguished events present
    VerifiedDistinguished,

    /// Static tables and/or the live almanac feed, general events only
    VerifiedGeneral,

    /// The fixed alternate-timeline set
    AltTimeline,

    /// Total-failure fallback after the pipeline gave up
    Fallback,
}

/// The ordered, de-duplicated, capped event list for one date, plus the
/// context tags shown alongside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resolution {
    /// Unique id for this resolution
    pub request_id: Uuid,

    /// The requested calendar date
    pub date: NaiveDate,

    /// Whether the alternate-timeline path was taken
    pub alt_history: bool,

    /// At most six events, protected bucket first
    pub events: Vec<HistoricalEvent>,

    /// Display tags describing where the events came from
    pub context_tags: Vec<String>,

    pub provenance: Provenance,
}

impl Resolution {
    pub fn new(
        date: NaiveDate,
        alt_history: bool,
        events: Vec<HistoricalEvent>,
        context_tags: Vec<String>,
        provenance: Provenance,
    ) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            date,
            alt_history,
            events,
            context_tags,
            provenance,
        }
    }

    /// Count of events carrying the distinguished country tag.
    pub fn distinguished_count(&self) -> usize {
        self.events.iter().filter(|e| e.is_distinguished()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::event::{Category, DISTINGUISHED_COUNTRY};

    #[test]
    fn test_distinguished_count() {
        let date = NaiveDate::from_ymd_opt(1947, 8, 15).unwrap();
        let events = vec![
            HistoricalEvent::new("a", "A", "a", Category::Occurrence, 1947)
                .with_country(DISTINGUISHED_COUNTRY),
            HistoricalEvent::new("b", "B", "b", Category::Occurrence, 1947)
                .with_country("World"),
        ];
        let resolution = Resolution::new(
            date,
            false,
            events,
            vec!["Verified Indian History".to_string()],
            Provenance::VerifiedDistinguished,
        );

        assert_eq!(resolution.distinguished_count(), 1);
        assert!(!resolution.alt_history);
    }

    #[test]
    fn test_request_ids_are_unique() {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let a = Resolution::new(date, false, vec![], vec![], Provenance::Fallback);
        let b = Resolution::new(date, false, vec![], vec![], Provenance::Fallback);
        assert_ne!(a.request_id, b.request_id);
    }

    #[test]
    fn test_provenance_serde() {
        let json = serde_json::to_string(&Provenance::AltTimeline).unwrap();
        assert_eq!(json, "\"alt_timeline\"");
    }
}
