//! Conversion of almanac feed entries into event records.
//!
//! Each feed kind (events, births, deaths) is ranked and capped
//! independently, then converted with a shared running counter for ids.

use crate::adapters::{AlmanacDay, AlmanacEntry};
use crate::domain::event::{
    mentions_distinguished, Category, HistoricalEvent, DISTINGUISHED_COUNTRY, GENERAL_COUNTRY,
};

/// How many entries each feed kind may contribute.
const PER_KIND_CAP: usize = 3;

const TITLE_MAX: usize = 80;
const DESCRIPTION_MAX: usize = 200;

/// Convert one day of feed entries into ranked event records.
///
/// Ranking within a kind: entries whose text mentions "india" first, then
/// by distance from the requested year. Only entries with a page extract
/// qualify.
pub fn convert_day(day: &AlmanacDay, requested_year: i32) -> Vec<HistoricalEvent> {
    let mut events = Vec::new();

    for (kind, entries) in [
        ("events", &day.events),
        ("births", &day.births),
        ("deaths", &day.deaths),
    ] {
        let mut ranked: Vec<&AlmanacEntry> = entries
            .iter()
            .filter(|e| e.page_extract().is_some_and(|x| !x.is_empty()))
            .collect();

        ranked.sort_by(|a, b| {
            let a_mentions = text_mentions_india(a);
            let b_mentions = text_mentions_india(b);
            b_mentions
                .cmp(&a_mentions)
                .then_with(|| year_distance(a, requested_year).cmp(&year_distance(b, requested_year)))
        });

        for entry in ranked.into_iter().take(PER_KIND_CAP) {
            let sequence = events.len();
            events.push(convert_entry(entry, kind, requested_year, sequence));
        }
    }

    events
}

fn text_mentions_india(entry: &AlmanacEntry) -> bool {
    entry
        .text
        .as_deref()
        .unwrap_or_default()
        .to_lowercase()
        .contains("india")
}

fn year_distance(entry: &AlmanacEntry, requested_year: i32) -> i32 {
    (entry.year.unwrap_or(0) - requested_year).abs()
}

fn convert_entry(
    entry: &AlmanacEntry,
    kind: &str,
    requested_year: i32,
    sequence: usize,
) -> HistoricalEvent {
    let year = entry.year.unwrap_or(requested_year);

    let title = entry
        .text
        .as_deref()
        .or_else(|| entry.page_title())
        .unwrap_or("Historical Event");

    let is_distinguished = mentions_distinguished(title);

    let description_source = entry
        .page_extract()
        .or(entry.text.as_deref())
        .unwrap_or("A significant historical event.");

    let category = if kind == "events" {
        Category::Occurrence
    } else {
        Category::Person
    };

    let mut event = HistoricalEvent::new(
        format!("wikimedia-{}-{}-{}", kind, year, sequence),
        truncate_with_ellipsis(title, TITLE_MAX),
        format!("{}...", take_chars(description_source, DESCRIPTION_MAX)),
        category,
        year,
    )
    .with_source("Wikimedia Foundation - Wikipedia")
    .with_citation(format!(
        "Wikipedia contributors. \"{}.\" Wikipedia, The Free Encyclopedia.",
        title
    ))
    .with_country(if is_distinguished {
        DISTINGUISHED_COUNTRY
    } else {
        GENERAL_COUNTRY
    })
    .with_priority(if is_distinguished { 1 } else { 3 });

    if let Some(content) = entry.page_extract().or(entry.text.as_deref()) {
        event = event.with_full_content(content);
    }

    if let Some(url) = entry.page_url() {
        event = event.with_verification_url(url).with_reference_url(url);
    }

    event
}

fn take_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

fn truncate_with_ellipsis(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", take_chars(text, max))
    } else {
        text.to_string()
    }
}
