//! timescope - Date-keyed historical event resolver
//!
//! Given a calendar date, timescope assembles an ordered, de-duplicated
//! list of historical events from curated tables and a live almanac feed,
//! with an alternate-timeline mode and best-effort encyclopedia lookups.
//!
//! # Architecture
//!
//! Resolution is staged: a protected bucket of distinguished events is
//! filled first and can never be displaced, the live feed contributes
//! ranked extras, and static tables back everything up when the network
//! fails. A total pipeline failure still yields a usable resolution.
//!
//! # Modules
//!
//! - `adapters`: External lookup clients (almanac feed, encyclopedia)
//! - `resolver`: Staged assembly, de-duplication, the sequence guard
//! - `tables`: Curated month-day keyed event tables
//! - `domain`: Data structures (HistoricalEvent, Resolution)
//! - `moon`: Moon phase approximation
//! - `timeline`: Fixed milestones and era snapshots
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Resolve a date
//! timescope resolve 1947-08-15
//!
//! # Alternate timeline
//! timescope resolve 1888-05-01 --alt
//!
//! # Moon phase
//! timescope moon 2000-01-21
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod moon;
pub mod resolver;
pub mod tables;
pub mod timeline;

// Re-export main types at crate root for convenience
pub use adapters::{AlmanacClient, AlmanacSource, EncyclopediaClient, SourceError, SummarySource};
pub use domain::{Category, HistoricalEvent, Provenance, Resolution};
pub use moon::{moon_phase, MoonPhase, PhaseKind};
pub use resolver::{ResolutionGuard, Resolver};
pub use timeline::{era_snapshot, milestones, EraSnapshot, Milestone};
