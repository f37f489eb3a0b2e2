//! The module contains the `FuelEntry` type and its canonical ordering.
//!
//! Every derived figure starts from the same date-descending view of the
//! history, so the ordering lives here next to the entity.
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::{Currency, Money};

/// How the entry got into the log.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntrySource {
    #[default]
    Manual,
    Scanned,
}

/// Where the pump was, when the entry carries a position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One fuel purchase.
///
/// Entries are immutable once recorded; the lifecycle is append plus delete,
/// no in-place edits. A scanned receipt deserializes through this same
/// schema, so blanks default identically whichever way the entry was made:
/// `is_full_tank` in particular defaults to **not** full.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FuelEntry {
    pub id: String,
    pub vehicle_id: String,
    pub date: NaiveDate,
    #[serde(default = "midnight")]
    pub time: NaiveTime,
    #[serde(default)]
    pub location: String,
    /// Amount spent, in minor units.
    pub amount: Money,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub volume_l: f64,
    #[serde(default)]
    pub price_per_l: Option<f64>,
    #[serde(default)]
    pub source: EntrySource,
    /// Cumulative distance reading at the pump.
    pub odometer_km: i64,
    #[serde(default)]
    pub is_full_tank: bool,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub supplier: Option<String>,
}

fn midnight() -> NaiveTime {
    NaiveTime::MIN
}

/// Reorders a borrowed view most recent first.
///
/// Sorts on `date` only; same-day entries keep their incoming order, which
/// the record-newest-first lifecycle makes newest-first too. The tie-break
/// is observable downstream (segment pairing), so it must stay stable.
pub fn sort_desc(view: &mut [&FuelEntry]) {
    view.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Borrowed view of `entries`, most recent first.
pub fn sorted_desc(entries: &[FuelEntry]) -> Vec<&FuelEntry> {
    let mut view: Vec<&FuelEntry> = entries.iter().collect();
    sort_desc(&mut view);
    view
}

/// The vehicle's current odometer reading, taken from the newest entry.
pub fn latest_odometer_km(ordered: &[&FuelEntry]) -> Option<i64> {
    ordered.first().map(|entry| entry.odometer_km)
}
