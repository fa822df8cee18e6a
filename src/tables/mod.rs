//! Static month-day keyed event tables.
//!
//! These are the curated records the resolver consults before (and instead
//! of, when the network is down) the live almanac feed:
//! - india: distinguished-country events, 5-year tolerance
//! - world: general fallback events, 10-year tolerance
//! - alt: the fixed alternate-timeline set

pub mod alt;
pub mod india;
pub mod world;

pub use alt::{alternate_events, ALT_CONTEXT_TAGS};
pub use india::distinguished_events;
pub use world::world_events;

/// Encyclopedia page URL for a title: whitespace runs become underscores.
pub fn reference_url_for(title: &str) -> String {
    let underscored: String = title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    format!("https://en.wikipedia.org/wiki/{}", underscored)
}

/// One row of a static table. The request-time fields (id, country,
/// reference URL) are attached during lookup.
pub(crate) struct TableEntry {
    pub year: i32,
    pub title: &'static str,
    pub description: &'static str,
    pub full_content: &'static str,
    pub source: &'static str,
    pub citation: &'static str,
    pub verification_url: &'static str,
    pub priority: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_url_underscores_whitespace() {
        assert_eq!(
            reference_url_for("Indian Independence Day"),
            "https://en.wikipedia.org/wiki/Indian_Independence_Day"
        );
        assert_eq!(
            reference_url_for("Republic Day of India - Constitution Adopted"),
            "https://en.wikipedia.org/wiki/Republic_Day_of_India_-_Constitution_Adopted"
        );
    }
}
