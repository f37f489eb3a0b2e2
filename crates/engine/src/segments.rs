//! Full-tank segments: the measurable intervals of the history.
use crate::entry::FuelEntry;

/// A chronologically adjacent pair of fill-ups reduced to what consumption
/// needs: how far the vehicle went and how much the closing fill poured in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub distance_km: i64,
    pub volume_l: f64,
}

/// Walks a date-descending view pairwise and keeps the measurable segments.
///
/// A pair qualifies only when its more recent member topped the tank off,
/// the odometer moved forward, and the fill has a positive volume. The
/// older member's flag is not consulted: the closing fill fixes the volume
/// burned since the previous stop, whatever the tank level was back then.
/// (Known gap: the segment closing the first fill after an unknown starting
/// level can over-count. Kept as recorded behavior pending a product call.)
///
/// Pairs failing the guards are dropped without error; a rolled-back or
/// corrected odometer surfaces here as a non-positive distance.
pub fn full_tank_segments(ordered: &[&FuelEntry]) -> Vec<Segment> {
    let mut segments = Vec::new();
    for pair in ordered.windows(2) {
        let (recent, older) = (pair[0], pair[1]);
        if !recent.is_full_tank {
            continue;
        }
        let distance_km = recent.odometer_km - older.odometer_km;
        if distance_km <= 0 || recent.volume_l <= 0.0 {
            tracing::debug!(
                entry = %recent.id,
                distance_km,
                volume_l = recent.volume_l,
                "dropping unmeasurable segment"
            );
            continue;
        }
        segments.push(Segment {
            distance_km,
            volume_l: recent.volume_l,
        });
    }
    segments
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;
    use crate::{Currency, EntrySource, Money};

    fn entry(date: &str, odometer_km: i64, volume_l: f64, is_full_tank: bool) -> FuelEntry {
        FuelEntry {
            id: format!("{date}-{odometer_km}"),
            vehicle_id: "v1".to_string(),
            date: date.parse().unwrap(),
            time: NaiveTime::MIN,
            location: String::new(),
            amount: Money::new(10_000),
            currency: Currency::Mad,
            volume_l,
            price_per_l: None,
            source: EntrySource::Manual,
            odometer_km,
            is_full_tank,
            coordinates: None,
            city: None,
            supplier: None,
        }
    }

    #[test]
    fn extracts_pairwise_segments() {
        let entries = vec![
            entry("2023-11-12", 45_600, 33.0, true),
            entry("2023-10-25", 45_050, 52.2, true),
            entry("2023-10-15", 44_200, 28.5, true),
        ];
        let view: Vec<&FuelEntry> = entries.iter().collect();

        let segments = full_tank_segments(&view);
        assert_eq!(
            segments,
            vec![
                Segment { distance_km: 550, volume_l: 33.0 },
                Segment { distance_km: 850, volume_l: 52.2 },
            ]
        );
    }

    #[test]
    fn partial_closing_fill_is_never_a_segment() {
        let entries = vec![
            entry("2023-11-12", 45_600, 33.0, false),
            entry("2023-10-25", 45_050, 52.2, true),
        ];
        let view: Vec<&FuelEntry> = entries.iter().collect();

        assert!(full_tank_segments(&view).is_empty());
    }

    #[test]
    fn older_boundary_flag_is_ignored() {
        let entries = vec![
            entry("2023-11-12", 45_600, 33.0, true),
            entry("2023-10-25", 45_050, 52.2, false),
        ];
        let view: Vec<&FuelEntry> = entries.iter().collect();

        assert_eq!(full_tank_segments(&view).len(), 1);
    }

    #[test]
    fn drops_backward_odometer_and_zero_volume() {
        let entries = vec![
            entry("2023-11-12", 45_000, 33.0, true),
            entry("2023-10-25", 45_050, 52.2, true),
            entry("2023-10-15", 44_200, 0.0, true),
        ];
        let view: Vec<&FuelEntry> = entries.iter().collect();

        // First pair goes backwards, second pair keeps the recent volume.
        let segments = full_tank_segments(&view);
        assert_eq!(
            segments,
            vec![Segment { distance_km: 850, volume_l: 52.2 }]
        );
    }

    #[test]
    fn fewer_than_two_entries_yield_nothing() {
        let single = entry("2023-11-12", 45_600, 33.0, true);
        let view = vec![&single];

        assert!(full_tank_segments(&view).is_empty());
        assert!(full_tank_segments(&[]).is_empty());
    }
}
