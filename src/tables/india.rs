//! Curated distinguished-country events, keyed by month-day.

use crate::domain::event::{Category, HistoricalEvent, DISTINGUISHED_COUNTRY};

use super::{reference_url_for, TableEntry};

/// A table row matches when the origin year is within this many years of
/// the requested year.
pub const TOLERANCE_YEARS: i32 = 5;

fn entries(key: &str) -> &'static [TableEntry] {
    match key {
        "08-15" => &[TableEntry {
            year: 1947,
            title: "Indian Independence Day",
            description: "India gained independence from British colonial rule. Jawaharlal Nehru became the first Prime Minister.",
            full_content: "On August 15, 1947, India achieved independence from British colonial rule, ending nearly 200 years of British dominance. This historic moment was the culmination of decades of struggle led by Mahatma Gandhi, Jawaharlal Nehru, and the Indian National Congress. The independence came with the partition of British India into India and Pakistan, leading to one of the largest mass migrations in human history. Jawaharlal Nehru delivered his famous 'Tryst with Destiny' speech at the stroke of midnight, declaring India's awakening to life and freedom.",
            source: "Government of India Archives, Nehru Memorial Museum & Library",
            citation: "Transfer of Power 1942-47, Vol. XII, HMSO London",
            verification_url: "https://www.mea.gov.in/independence-day.htm",
            priority: 1,
        }],
        "01-26" => &[TableEntry {
            year: 1950,
            title: "Republic Day of India - Constitution Adopted",
            description: "India adopted its Constitution and became a republic, with Dr. Rajendra Prasad as the first President.",
            full_content: "On January 26, 1950, India adopted its Constitution and became a republic. This date was chosen to commemorate the Purna Swaraj (complete independence) declaration of January 26, 1930. Dr. Rajendra Prasad became the first President of India. The Constitution, drafted by Dr. B.R. Ambedkar and the Constituent Assembly over nearly three years, established India as a sovereign, socialist, secular, and democratic republic.",
            source: "Constituent Assembly Debates, Government of India",
            citation: "Constituent Assembly Debates, Volume XI, 24-26 January 1950",
            verification_url: "https://www.constitutionofindia.net/",
            priority: 1,
        }],
        "10-02" => &[TableEntry {
            year: 1869,
            title: "Birth of Mahatma Gandhi",
            description: "Mohandas Karamchand Gandhi was born in Porbandar, Gujarat. He became the Father of the Nation.",
            full_content: "Mohandas Karamchand Gandhi was born on October 2, 1869, in Porbandar, Gujarat. He would later become known as Mahatma Gandhi and lead India's struggle for independence through his philosophy of non-violent resistance (Satyagraha). His methods of peaceful protest inspired civil rights movements worldwide and earned him the title 'Father of the Nation' in India.",
            source: "Gandhi Heritage Portal, Government of Gujarat",
            citation: "The Collected Works of Mahatma Gandhi, Publications Division, Government of India",
            verification_url: "https://www.gandhiheritageportal.org/",
            priority: 1,
        }],
        "04-13" => &[TableEntry {
            year: 1919,
            title: "Jallianwala Bagh Massacre",
            description: "British troops opened fire on unarmed Indian civilians in Amritsar, Punjab, killing hundreds.",
            full_content: "On April 13, 1919, British Brigadier-General Reginald Dyer ordered troops to fire on an unarmed gathering in Jallianwala Bagh, Amritsar. The official British report acknowledged 379 deaths and 1,200 wounded, though Indian sources suggest higher casualties. This massacre became a turning point in India's independence struggle and was condemned by the Hunter Commission.",
            source: "Hunter Commission Report, 1920, British Parliamentary Papers",
            citation: "Report of the Committee appointed by the Government of India to investigate the disturbances in the Punjab, etc., Cmd. 681, 1920",
            verification_url: "https://www.jallianwalabagh.org/",
            priority: 1,
        }],
        "05-27" => &[TableEntry {
            year: 1964,
            title: "Death of Jawaharlal Nehru",
            description: "India's first Prime Minister and key architect of modern India passed away in New Delhi.",
            full_content: "Jawaharlal Nehru, India's first Prime Minister and one of the key architects of modern India, passed away on May 27, 1964, in New Delhi. Known as Pandit Nehru and Chacha Nehru, he served as Prime Minister from 1947 until his death, playing a crucial role in shaping India's democratic institutions and foreign policy of non-alignment.",
            source: "Nehru Memorial Museum & Library, Teen Murti House",
            citation: "Selected Works of Jawaharlal Nehru, Jawaharlal Nehru Memorial Fund",
            verification_url: "https://www.nehrumemorial.nic.in/",
            priority: 1,
        }],
        _ => &[],
    }
}

/// Distinguished-country events for a month-day key, filtered to the
/// tolerance window around the requested year.
pub fn distinguished_events(key: &str, year: i32) -> Vec<HistoricalEvent> {
    entries(key)
        .iter()
        .filter(|e| (e.year - year).abs() <= TOLERANCE_YEARS)
        .map(|e| {
            HistoricalEvent::new(
                format!("verified-indian-{}-{}", e.year, key),
                e.title,
                e.description,
                Category::Occurrence,
                e.year,
            )
            .with_full_content(e.full_content)
            .with_source(e.source)
            .with_citation(e.citation)
            .with_verification_url(e.verification_url)
            .with_country(DISTINGUISHED_COUNTRY)
            .with_priority(e.priority)
            .with_reference_url(reference_url_for(e.title))
        })
        .collect()
}
