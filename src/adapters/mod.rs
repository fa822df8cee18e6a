//! Adapter interfaces for external lookup services.
//!
//! Adapters provide a unified interface for the two network sources the
//! resolver consults: the day-indexed almanac feed and the encyclopedia
//! summary endpoint. Both are best-effort; the resolver degrades to static
//! tables when they fail.

pub mod almanac;
pub mod encyclopedia;

use async_trait::async_trait;
use thiserror::Error;

pub use almanac::{AlmanacClient, AlmanacDay, AlmanacEntry, AlmanacPage};
pub use encyclopedia::EncyclopediaClient;

/// Failure modes of an external source.
///
/// The distinction matters to the resolver: an unavailable source costs one
/// stage its contribution, a malformed body aborts the whole pipeline.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Transport failure or non-success HTTP status
    #[error("source unavailable: {0}")]
    Unavailable(String),

    /// The body came back but did not match the expected shape
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Day-indexed almanac feed.
#[async_trait]
pub trait AlmanacSource: Send + Sync {
    /// Entries recorded for a calendar day, across all entry kinds.
    async fn day_entries(&self, month: u32, day: u32) -> Result<AlmanacDay, SourceError>;
}

/// Encyclopedia page-summary lookup.
#[async_trait]
pub trait SummarySource: Send + Sync {
    /// Summary extract for a page title, if the page has one.
    async fn summary(&self, title: &str) -> Result<Option<String>, SourceError>;
}
