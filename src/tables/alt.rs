//! The fixed alternate-timeline event set.
//!
//! These three events are returned whenever the alternate-history flag is
//! set, stamped with the requested year so they read as contemporary to the
//! chosen date.

use crate::domain::event::{Category, HistoricalEvent};

/// Context tags shown with alternate-timeline resolutions.
pub const ALT_CONTEXT_TAGS: [&str; 3] = ["Alternative Timeline", "Steampunk Era", "What If History"];

/// The three fixed alternate-timeline events for a requested year.
pub fn alternate_events(year: i32) -> Vec<HistoricalEvent> {
    vec![
        HistoricalEvent::new(
            "alt-1",
            "Steam-Powered Internet Network",
            "Victorian engineers create the first mechanical network using steam pressure and brass tubes.",
            Category::Invention,
            year,
        ),
        HistoricalEvent::new(
            "alt-2",
            "Flying Carriage Racing Championship",
            "The first aerial vehicle racing competition draws crowds from across the empire.",
            Category::Culture,
            year,
        ),
        HistoricalEvent::new(
            "alt-3",
            "Tesla's Temporal Communication Device",
            "Nikola Tesla demonstrates his revolutionary time messaging apparatus.",
            Category::Invention,
            year,
        ),
    ]
}
