//! Moon phase approximation.
//!
//! Bucketed approximation against a reference new moon, good enough for
//! display. Not an ephemeris.

use chrono::NaiveDate;
use serde::Serialize;

/// Synodic month length in days.
const CYCLE_DAYS: f64 = 29.53;

fn reference_new_moon() -> NaiveDate {
    // 2000-01-06 is always a valid date.
    NaiveDate::from_ymd_opt(2000, 1, 6).unwrap()
}

/// Phase bucket labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    NewMoon,
    WaxingCrescent,
    FullMoon,
    WaningCrescent,
}

impl std::fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PhaseKind::NewMoon => "New Moon",
            PhaseKind::WaxingCrescent => "Waxing Crescent",
            PhaseKind::FullMoon => "Full Moon",
            PhaseKind::WaningCrescent => "Waning Crescent",
        };
        write!(f, "{}", label)
    }
}

/// Phase and illumination for one date.
#[derive(Debug, Clone, Serialize)]
pub struct MoonPhase {
    pub date: NaiveDate,
    pub phase: PhaseKind,

    /// Illuminated fraction as a rounded percentage
    pub illumination: u8,
}

/// Compute the phase bucket for a date.
///
/// The cycle fraction keeps the sign of the day delta, so dates before the
/// reference new moon all land in the new-moon bucket.
pub fn moon_phase(date: NaiveDate) -> MoonPhase {
    let days = (date - reference_new_moon()).num_days() as f64;
    let fraction = (days % CYCLE_DAYS) / CYCLE_DAYS;

    let (phase, illumination) = if fraction < 0.125 {
        (PhaseKind::NewMoon, 0.0)
    } else if fraction < 0.375 {
        (PhaseKind::WaxingCrescent, fraction * 100.0)
    } else if fraction < 0.625 {
        (PhaseKind::FullMoon, 100.0)
    } else if fraction < 0.875 {
        (PhaseKind::WaningCrescent, (1.0 - fraction) * 100.0)
    } else {
        (PhaseKind::NewMoon, 0.0)
    };

    MoonPhase {
        date,
        phase,
        illumination: illumination.round() as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_reference_date_is_new_moon() {
        let phase = moon_phase(date(2000, 1, 6));
        assert_eq!(phase.phase, PhaseKind::NewMoon);
        assert_eq!(phase.illumination, 0);
    }

    #[test]
    fn test_full_moon_mid_cycle() {
        // Half a cycle after the reference lands in the full bucket.
        let phase = moon_phase(date(2000, 1, 21));
        assert_eq!(phase.phase, PhaseKind::FullMoon);
        assert_eq!(phase.illumination, 100);
    }

    #[test]
    fn test_waxing_crescent_illumination() {
        // Day 6 of the cycle: fraction ~0.203.
        let phase = moon_phase(date(2000, 1, 12));
        assert_eq!(phase.phase, PhaseKind::WaxingCrescent);
        assert_eq!(phase.illumination, 20);
    }

    #[test]
    fn test_dates_before_reference_collapse_to_new_moon() {
        // Negative fractions sort below every bucket threshold.
        assert_eq!(moon_phase(date(1999, 12, 20)).phase, PhaseKind::NewMoon);
        assert_eq!(moon_phase(date(1947, 8, 15)).phase, PhaseKind::NewMoon);
    }

    #[test]
    fn test_cycle_wraps() {
        // One full cycle later is a new moon again.
        let phase = moon_phase(date(2000, 2, 4));
        assert_eq!(phase.phase, PhaseKind::NewMoon);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(PhaseKind::WaningCrescent.to_string(), "Waning Crescent");
    }
}
