//! Fixed timeline milestones and era comparison snapshots.

use serde::Serialize;

/// One milestone on the scrollable timeline.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Milestone {
    pub year: i32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

const REAL_MILESTONES: [Milestone; 6] = [
    Milestone {
        year: 1876,
        title: "Telephone Invented",
        description: "Alexander Graham Bell patents the telephone",
        category: "Technology",
    },
    Milestone {
        year: 1903,
        title: "First Flight",
        description: "Wright brothers achieve powered flight",
        category: "Transportation",
    },
    Milestone {
        year: 1945,
        title: "Computer Age Begins",
        description: "ENIAC, first electronic computer, completed",
        category: "Technology",
    },
    Milestone {
        year: 1969,
        title: "Moon Landing",
        description: "Apollo 11 lands on the moon",
        category: "Space",
    },
    Milestone {
        year: 1991,
        title: "World Wide Web",
        description: "Internet becomes publicly available",
        category: "Technology",
    },
    Milestone {
        year: 2007,
        title: "Smartphone Revolution",
        description: "iPhone launches, changing mobile computing",
        category: "Technology",
    },
];

const ALT_MILESTONES: [Milestone; 5] = [
    Milestone {
        year: 1850,
        title: "Steam Internet Invented",
        description: "Victorian engineers create mechanical network",
        category: "Technology",
    },
    Milestone {
        year: 1885,
        title: "Flying Carriage Patent",
        description: "First aerial vehicle design approved",
        category: "Transportation",
    },
    Milestone {
        year: 1920,
        title: "Tesla's Time Radio",
        description: "Temporal communication device demonstrated",
        category: "Science",
    },
    Milestone {
        year: 1955,
        title: "Atomic Flying Cars",
        description: "Nuclear-powered personal aircraft mass produced",
        category: "Transportation",
    },
    Milestone {
        year: 1980,
        title: "Holographic Television",
        description: "3D broadcasting becomes mainstream",
        category: "Entertainment",
    },
];

/// Milestones for the chosen timeline, already in year order.
pub fn milestones(alt_history: bool) -> &'static [Milestone] {
    if alt_history {
        &ALT_MILESTONES
    } else {
        &REAL_MILESTONES
    }
}

/// Snapshot of an era for side-by-side comparison.
#[derive(Debug, Clone, Serialize)]
pub struct EraSnapshot {
    pub year: i32,
    pub population: String,
    pub technology: Vec<&'static str>,
    pub culture: Vec<&'static str>,
    pub economy: &'static str,
}

/// Snapshot for a year on either timeline.
///
/// Alternate population is derived from the year so repeated calls agree.
pub fn era_snapshot(year: i32, alt_history: bool) -> EraSnapshot {
    if alt_history {
        let billions = 3 + year.rem_euclid(5);
        return EraSnapshot {
            year,
            population: format!("{}B (with sky cities)", billions),
            technology: vec![
                "Steam-powered computers",
                "Mechanical internet",
                "Flying carriages",
                "Time communication devices",
            ],
            culture: vec![
                "Victorian punk music",
                "Aerial racing sports",
                "Clockwork art movement",
                "Steam café culture",
            ],
            economy: "Gear-based currency system",
        };
    }

    if year <= 1950 {
        EraSnapshot {
            year,
            population: "2.5B".to_string(),
            technology: vec!["Radio", "Early computers", "Automobiles", "Telephone"],
            culture: vec!["Jazz music", "Cinema", "Radio shows", "Dance halls"],
            economy: "Post-war reconstruction",
        }
    } else if year <= 1980 {
        EraSnapshot {
            year,
            population: "4.4B".to_string(),
            technology: vec![
                "Television",
                "Personal computers",
                "Space technology",
                "Satellites",
            ],
            culture: vec!["Rock music", "Television", "Youth movements", "Pop art"],
            economy: "Industrial economy",
        }
    } else {
        EraSnapshot {
            year,
            population: "6.1B".to_string(),
            technology: vec![
                "Internet",
                "Mobile phones",
                "Personal computers",
                "Digital media",
            ],
            culture: vec!["Pop music", "MTV", "Video games", "Global culture"],
            economy: "Service economy",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milestones_are_year_ordered() {
        for set in [milestones(false), milestones(true)] {
            assert!(set.windows(2).all(|w| w[0].year < w[1].year));
        }
    }

    #[test]
    fn test_real_timeline_has_six_milestones() {
        assert_eq!(milestones(false).len(), 6);
        assert_eq!(milestones(true).len(), 5);
    }

    #[test]
    fn test_era_boundaries() {
        assert_eq!(era_snapshot(1950, false).population, "2.5B");
        assert_eq!(era_snapshot(1951, false).population, "4.4B");
        assert_eq!(era_snapshot(1980, false).population, "4.4B");
        assert_eq!(era_snapshot(1981, false).population, "6.1B");
    }

    #[test]
    fn test_alt_snapshot_is_deterministic() {
        let a = era_snapshot(1888, true);
        let b = era_snapshot(1888, true);
        assert_eq!(a.population, b.population);
        assert!(a.population.ends_with("(with sky cities)"));
        assert_eq!(a.economy, "Gear-based currency system");
    }

    #[test]
    fn test_alt_population_range() {
        for year in 1800..1900 {
            let snapshot = era_snapshot(year, true);
            let billions: i32 = snapshot
                .population
                .split('B')
                .next()
                .unwrap()
                .parse()
                .unwrap();
            assert!((3..=7).contains(&billions));
        }
    }
}
