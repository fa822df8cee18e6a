//! Long-form content resolution for a single event.
//!
//! Network lookup is attempted only for distinguished material; everything
//! else goes straight to the stored content or a generated template.

use tracing::{debug, instrument};

use crate::adapters::SummarySource;
use crate::domain::event::{Category, HistoricalEvent};

/// Resolve the long-form content for an event.
///
/// Order: live encyclopedia summary (distinguished events and titles
/// mentioning "india" only), then the event's stored content, then a
/// generated template. Never fails; every error path degrades.
#[instrument(skip(source, event), fields(event_id = %event.id))]
pub async fn resolve_detail(source: &dyn SummarySource, event: &HistoricalEvent) -> String {
    let lookup_worthy =
        event.is_distinguished() || event.title.to_lowercase().contains("india");

    if lookup_worthy {
        match source.summary(&event.title).await {
            Ok(Some(extract)) => return extract,
            Ok(None) => debug!("summary had no extract"),
            Err(e) => debug!(error = %e, "summary lookup failed"),
        }
    }

    event
        .full_content
        .clone()
        .unwrap_or_else(|| generated_content(event))
}

/// Template content for events with nothing stored.
pub fn generated_content(event: &HistoricalEvent) -> String {
    if event.is_distinguished() {
        return format!(
            "{} represents a pivotal moment in Indian history that occurred in {}. This event was part of India's rich historical tapestry, shaped by centuries of cultural evolution, political changes, and social movements. The Indian subcontinent, with its diverse cultures, languages, and traditions, has always been a cradle of civilization. This particular event had profound implications not just for India, but for the entire world, as India's influence on global culture, philosophy, science, and politics has been immense throughout history. The legacy of this event continues to shape modern India and its role in the contemporary world, reflecting the enduring spirit and resilience of the Indian people. The historical significance of this moment extends beyond its immediate impact, influencing subsequent generations and contributing to the rich narrative of Indian civilization that spans thousands of years.",
            event.title, event.year
        );
    }

    match event.category {
        Category::Occurrence => format!(
            "The {} was a pivotal moment in history that occurred in {}. This significant event shaped the course of human civilization and had lasting impacts on society, politics, and culture. The circumstances leading to this event were complex, involving multiple factors including social tensions, economic pressures, and political changes of the era. The event unfolded through a series of interconnected developments that reflected the broader historical context of the time. Understanding this event requires examining the social, political, and economic conditions that preceded it, as well as the immediate and long-term consequences that followed. The impact of this event extended far beyond its immediate timeframe, creating ripple effects that influenced subsequent historical developments and shaped the world we know today.",
            event.title, event.year
        ),
        Category::Invention => format!(
            "The invention of {} in {} marked a revolutionary breakthrough in human technology and innovation. This groundbreaking development emerged from years of research, experimentation, and the brilliant minds of inventors who dared to push the boundaries of what was possible. The invention process involved overcoming numerous technical challenges and required innovative solutions to complex problems. The breakthrough came through a combination of scientific understanding, practical engineering, and creative problem-solving. The impact of this invention extended far beyond its immediate applications, fundamentally changing how people lived, worked, and interacted with their environment. It paved the way for future innovations and established new industries, creating economic opportunities and improving quality of life for millions of people around the world.",
            event.title, event.year
        ),
        Category::Culture => format!(
            "{} emerged as a defining cultural phenomenon of {}, capturing the spirit and zeitgeist of the era. This cultural movement reflected the values, aspirations, and artistic expressions of the time, resonating with people across different social classes and backgrounds. The cultural significance of this phenomenon extended beyond entertainment, influencing fashion, language, social norms, and artistic expression. It served as both a mirror of society and a catalyst for social change, inspiring new forms of creativity and self-expression. The movement brought people together, created new communities, and challenged existing conventions. Its influence spread through various media and social networks, leaving a lasting legacy that continues to influence contemporary culture and artistic endeavors.",
            event.title, event.year
        ),
        Category::Person => format!(
            "{} was a remarkable individual whose life and achievements in {} left an indelible mark on history. Born into circumstances that would shape their worldview, this person demonstrated exceptional qualities of leadership, innovation, or artistic genius that set them apart from their contemporaries. Their contributions to society, whether in politics, science, arts, or social reform, continue to influence and inspire people today. The legacy of their work extends far beyond their lifetime, establishing principles and ideas that remain relevant in modern times. Their story serves as an inspiration to future generations, demonstrating the power of individual determination and vision to create lasting change in the world.",
            event.title, event.year
        ),
    }
}
