//! Calendar-period aggregation for the dashboard summary.
use chrono::{Datelike, NaiveDateTime};

use crate::entry::FuelEntry;

/// Fill-up activity for one calendar month.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MonthlySummary {
    pub fill_ups: usize,
    pub volume_l: f64,
    pub distance_km: i64,
}

/// Aggregates the fill-ups of `now`'s calendar month (same year, same
/// month: October of one year never pools with October of another).
///
/// Distance is the odometer delta between the month's chronologically first
/// and last entry. An odometer reading is a cumulative counter, never a
/// periodic quantity: summing raw readings would yield garbage at the scale
/// of the readings themselves. With one entry or none the month has no
/// measurable movement and the distance is 0.
pub fn monthly_summary(ordered: &[&FuelEntry], now: NaiveDateTime) -> MonthlySummary {
    let year = now.date().year();
    let month = now.date().month();

    let in_month: Vec<&&FuelEntry> = ordered
        .iter()
        .filter(|e| e.date.year() == year && e.date.month() == month)
        .collect();

    let volume_l = in_month.iter().map(|e| e.volume_l).sum();
    // The view is newest first, so first() closes the month and last()
    // opens it.
    let distance_km = match (in_month.first(), in_month.last()) {
        (Some(newest), Some(oldest)) if in_month.len() > 1 => {
            newest.odometer_km - oldest.odometer_km
        }
        _ => 0,
    };

    MonthlySummary {
        fill_ups: in_month.len(),
        volume_l,
        distance_km,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;
    use crate::{Currency, EntrySource, Money, entry};

    fn fuel(date: &str, odometer_km: i64, volume_l: f64) -> FuelEntry {
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
            is_full_tank: true,
            coordinates: None,
            city: None,
            supplier: None,
        }
    }

    fn noon(date: &str) -> NaiveDateTime {
        format!("{date}T12:00:00").parse().unwrap()
    }

    #[test]
    fn aggregates_only_the_current_month() {
        let entries = vec![
            fuel("2023-11-12", 45_600, 33.0),
            fuel("2023-10-25", 45_050, 52.2),
            fuel("2023-10-15", 44_200, 28.5),
        ];
        let ordered = entry::sorted_desc(&entries);

        let october = monthly_summary(&ordered, noon("2023-10-28"));
        assert_eq!(october.fill_ups, 2);
        assert!((october.volume_l - 80.7).abs() < 1e-9);
        assert_eq!(october.distance_km, 850);

        let november = monthly_summary(&ordered, noon("2023-11-20"));
        assert_eq!(november.fill_ups, 1);
        assert!((november.volume_l - 33.0).abs() < 1e-9);
        assert_eq!(november.distance_km, 0);
    }

    #[test]
    fn month_of_another_year_does_not_pool() {
        let entries = vec![
            fuel("2023-10-15", 44_200, 28.5),
            fuel("2022-10-15", 20_000, 30.0),
        ];
        let ordered = entry::sorted_desc(&entries);

        let summary = monthly_summary(&ordered, noon("2023-10-28"));
        assert_eq!(summary.fill_ups, 1);
        assert_eq!(summary.distance_km, 0);
    }

    #[test]
    fn distance_is_a_delta_not_a_sum_of_readings() {
        let entries = vec![
            fuel("2023-10-28", 45_300, 20.0),
            fuel("2023-10-20", 44_800, 25.0),
            fuel("2023-10-05", 44_200, 30.0),
        ];
        let ordered = entry::sorted_desc(&entries);

        let summary = monthly_summary(&ordered, noon("2023-10-30"));
        // 1100, nowhere near the ~134k a raw sum would produce.
        assert_eq!(summary.distance_km, 1_100);

        // Pairwise deltas across any split of the month add up to the same
        // figure.
        let deltas = (45_300 - 44_800) + (44_800 - 44_200);
        assert_eq!(summary.distance_km, deltas);
    }

    #[test]
    fn empty_month_is_all_zeroes() {
        let entries = vec![fuel("2023-08-15", 43_000, 30.0)];
        let ordered = entry::sorted_desc(&entries);

        let summary = monthly_summary(&ordered, noon("2023-10-28"));
        assert_eq!(summary, MonthlySummary::default());
    }
}
