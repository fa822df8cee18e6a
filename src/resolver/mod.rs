//! The event resolver.
//!
//! Coordinates the staged assembly of a resolution for one date: the
//! protected distinguished bucket, the live almanac feed, the static world
//! table, ordering, de-duplication, the cap, and the total-failure
//! fallback.

pub mod dedup;
pub mod detail;
pub mod feed;
pub mod guard;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use tracing::{info, instrument, warn};

use crate::adapters::{
    AlmanacClient, AlmanacSource, EncyclopediaClient, SourceError, SummarySource,
};
use crate::config::ResolvedConfig;
use crate::domain::date::{format_long, historical_period, month_day_key};
use crate::domain::event::{Category, HistoricalEvent, DISTINGUISHED_COUNTRY, GENERAL_COUNTRY};
use crate::domain::resolution::{Provenance, Resolution};
use crate::tables;

pub use guard::ResolutionGuard;

/// Maximum events a resolution may carry.
pub const EVENT_CAP: usize = 6;

/// Resolves dates into ordered, de-duplicated event lists.
pub struct Resolver {
    almanac: Arc<dyn AlmanacSource>,
    summary: Arc<dyn SummarySource>,
}

impl Resolver {
    /// Create a resolver over explicit sources.
    pub fn new(almanac: Arc<dyn AlmanacSource>, summary: Arc<dyn SummarySource>) -> Self {
        Self { almanac, summary }
    }

    /// Create a resolver backed by the configured live endpoints.
    pub fn from_config(config: &ResolvedConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);

        let almanac = AlmanacClient::new(
            config.almanac_url.clone(),
            config.user_agent.clone(),
            timeout,
        )?;
        let summary = EncyclopediaClient::new(
            config.relay_url.clone(),
            config.summary_url.clone(),
            timeout,
        )?;

        Ok(Self::new(Arc::new(almanac), Arc::new(summary)))
    }

    /// Resolve a date into at most six events plus context tags.
    ///
    /// Never fails: the alternate path is static, and the verified path
    /// degrades to the fallback resolution when the pipeline aborts.
    #[instrument(skip(self), fields(date = %date, alt = alt_history))]
    pub async fn resolve(&self, date: NaiveDate, alt_history: bool) -> Resolution {
        if alt_history {
            let events = tables::alternate_events(date.year());
            let tags = tables::ALT_CONTEXT_TAGS
                .iter()
                .map(|t| t.to_string())
                .collect();
            return Resolution::new(date, true, events, tags, Provenance::AltTimeline);
        }

        match self.resolve_verified(date).await {
            Ok(resolution) => resolution,
            Err(e) => {
                warn!(error = %e, "resolution pipeline aborted, using fallback");
                fallback_resolution(date)
            }
        }
    }

    /// Take a ticket, resolve, and commit through the guard. Returns the
    /// resolution only when it became the displayed one.
    pub async fn resolve_guarded(
        &self,
        guard: &ResolutionGuard,
        date: NaiveDate,
        alt_history: bool,
    ) -> Option<Resolution> {
        let ticket = guard.ticket();
        let resolution = self.resolve(date, alt_history).await;

        if guard.commit(ticket, resolution.clone()) {
            Some(resolution)
        } else {
            None
        }
    }

    /// Long-form content for one event.
    pub async fn event_detail(&self, event: &HistoricalEvent) -> String {
        detail::resolve_detail(self.summary.as_ref(), event).await
    }

    async fn resolve_verified(&self, date: NaiveDate) -> Result<Resolution> {
        let year = date.year();
        let key = month_day_key(date);

        // Stage 1: the protected bucket. Nothing may displace these.
        info!(%key, year, "looking up distinguished events");
        let mut protected = tables::distinguished_events(&key, year);
        info!(count = protected.len(), "distinguished events found");

        let mut additional: Vec<HistoricalEvent> = Vec::new();

        // Stage 2: the live feed. An unavailable feed costs this stage its
        // contribution; a malformed body aborts the pipeline.
        match self.almanac.day_entries(date.month(), date.day()).await {
            Ok(day) => {
                let converted = feed::convert_day(&day, year);
                let kept = dedup::filter_overlapping(converted, &protected);
                info!(count = kept.len(), "feed events kept after overlap filter");
                additional.extend(kept);
            }
            Err(SourceError::Unavailable(reason)) => {
                warn!(%reason, "almanac feed unavailable");
            }
            Err(e @ SourceError::Malformed(_)) => return Err(e.into()),
        }

        // Stage 3: world table, consulted only when the protected bucket
        // came up empty for this day.
        if protected.is_empty() {
            info!("no distinguished events, consulting world table");
            let (distinguished, general): (Vec<_>, Vec<_>) = tables::world_events(&key, year)
                .into_iter()
                .partition(|e| e.is_distinguished());
            protected.extend(distinguished);
            additional.extend(general);
        }

        // Assembly: protected first, then the rest by year distance and
        // priority; de-duplicate and cap.
        additional.sort_by(|a, b| {
            let diff_a = (a.year - year).abs();
            let diff_b = (b.year - year).abs();
            diff_a
                .cmp(&diff_b)
                .then_with(|| a.effective_priority().cmp(&b.effective_priority()))
        });

        let has_protected = !protected.is_empty();

        let mut ordered = protected;
        ordered.extend(additional);

        let mut events = dedup::dedup_by_title(ordered);
        events.truncate(EVENT_CAP);

        let tags = vec![
            format_long(date),
            historical_period(year).to_string(),
            if has_protected {
                "Verified Indian History".to_string()
            } else {
                "Verified World History".to_string()
            },
        ];

        let provenance = if has_protected {
            Provenance::VerifiedDistinguished
        } else {
            Provenance::VerifiedGeneral
        };

        Ok(Resolution::new(date, false, events, tags, provenance))
    }
}

/// Resolution produced when the verified pipeline aborts entirely.
pub fn fallback_resolution(date: NaiveDate) -> Resolution {
    let year = date.year();

    let (events, tags) = if (1947..=1950).contains(&year) {
        let event = HistoricalEvent::new(
            "verified-indian-independence",
            "Indian Independence Period (1947-1950)",
            "The period of India's independence from British rule and the establishment of the Republic of India.",
            Category::Occurrence,
            year,
        )
        .with_full_content("The period from 1947 to 1950 was crucial in Indian history. India gained independence on August 15, 1947, followed by the adoption of the Constitution on January 26, 1950. This period saw the partition of India and Pakistan, massive population movements, and the establishment of democratic institutions under the leadership of Jawaharlal Nehru as Prime Minister and Dr. Rajendra Prasad as President.")
        .with_source("Government of India Archives, Transfer of Power Documents")
        .with_citation("Transfer of Power 1942-47, Volumes I-XII, HMSO London")
        .with_verification_url("https://www.mea.gov.in/")
        .with_country(DISTINGUISHED_COUNTRY)
        .with_priority(1);

        let tags = vec![
            "Verified Indian Independence".to_string(),
            "Government Archives".to_string(),
            "Historical Documentation".to_string(),
        ];
        (vec![event], tags)
    } else {
        let period = historical_period(year);
        let event = HistoricalEvent::new(
            format!("verified-period-{}", year),
            format!("Historical Context of {}", year),
            format!("Verified historical information about the year {} from documented sources.", year),
            Category::Occurrence,
            year,
        )
        .with_full_content(format!(
            "The year {} falls within the {} period. This information is compiled from verified historical sources and academic institutions. For specific events on this date, please refer to primary historical documents and academic sources.",
            year, period
        ))
        .with_source("Academic Historical Sources")
        .with_citation("Multiple verified historical databases and academic institutions")
        .with_verification_url("https://www.loc.gov/")
        .with_country(GENERAL_COUNTRY)
        .with_priority(3);

        let tags = vec![
            "Verified Historical Context".to_string(),
            "Academic Sources".to_string(),
            period.to_string(),
        ];
        (vec![event], tags)
    };

    Resolution::new(date, false, events, tags, Provenance::Fallback)
}
