//! Historical event records.
//!
//! An event is one display-ready fact tied to a calendar day. Events come
//! from the static tables, the almanac feed, or the fallback path, and are
//! assembled into a `Resolution` by the resolver.

use serde::{Deserialize, Serialize};

/// The country tag that receives guaranteed first-position placement and
/// protection from de-duplication.
pub const DISTINGUISHED_COUNTRY: &str = "India";

/// Country tag applied to everything else.
pub const GENERAL_COUNTRY: &str = "World";

/// Substrings that classify a title as distinguished-country material.
/// Substring matching is a deliberate heuristic, not exact matching.
pub const TRIGGER_SUBSTRINGS: [&str; 3] = ["india", "gandhi", "nehru"];

/// Priority assumed when an event carries none. Lower sorts first.
pub const DEFAULT_PRIORITY: u8 = 5;

/// One historical (or fictional, on the alternate timeline) fact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalEvent {
    /// Stable identifier, derived from the producing table or feed kind
    pub id: String,

    /// Display title
    pub title: String,

    /// Short description shown in lists
    pub description: String,

    /// Long-form content, lazily resolved via the detail path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_content: Option<String>,

    /// Event category
    pub category: Category,

    /// Origin year; may differ from the requested year within a table's
    /// tolerance window
    pub year: i32,

    /// Free-text country tag; `"India"` is the distinguished value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Sort priority, lower first; treated as 5 when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,

    /// Primary source attribution (display-only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Formal citation (display-only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,

    /// Link for verifying the claim (display-only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_url: Option<String>,

    /// Canonical encyclopedia page (display-only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_url: Option<String>,
}

impl HistoricalEvent {
    /// Create a minimal event; optional fields attach via `with_*`.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        year: i32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            full_content: None,
            category,
            year,
            country: None,
            priority: None,
            source: None,
            citation: None,
            verification_url: None,
            reference_url: None,
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_full_content(mut self, content: impl Into<String>) -> Self {
        self.full_content = Some(content.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_citation(mut self, citation: impl Into<String>) -> Self {
        self.citation = Some(citation.into());
        self
    }

    pub fn with_verification_url(mut self, url: impl Into<String>) -> Self {
        self.verification_url = Some(url.into());
        self
    }

    pub fn with_reference_url(mut self, url: impl Into<String>) -> Self {
        self.reference_url = Some(url.into());
        self
    }

    /// Whether this event carries the distinguished country tag.
    pub fn is_distinguished(&self) -> bool {
        self.country.as_deref() == Some(DISTINGUISHED_COUNTRY)
    }

    /// Effective sort priority (default 5 when absent).
    pub fn effective_priority(&self) -> u8 {
        self.priority.unwrap_or(DEFAULT_PRIORITY)
    }

    /// Title normalized for de-duplication: lowercase, ASCII alphanumerics
    /// only.
    pub fn normalized_title(&self) -> String {
        normalize_title(&self.title)
    }
}

/// Event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// A historical occurrence
    Occurrence,

    /// An invention or technological breakthrough
    Invention,

    /// A cultural phenomenon
    Culture,

    /// A notable person (births and deaths from the almanac feed)
    Person,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Category::Occurrence => "occurrence",
            Category::Invention => "invention",
            Category::Culture => "culture",
            Category::Person => "person",
        };
        write!(f, "{}", label)
    }
}

/// Lowercase a title and strip everything that is not an ASCII alphanumeric.
pub fn normalize_title(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Whether free text mentions any of the distinguished-country trigger
/// substrings.
pub fn mentions_distinguished(text: &str) -> bool {
    let lower = text.to_lowercase();
    TRIGGER_SUBSTRINGS.iter().any(|t| lower.contains(t))
}
