//! Maintenance history and the oil-change outlook derived from it.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Money;

/// What kind of work or paperwork a maintenance entry records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceKind {
    OilChange,
    Tires,
    Insurance,
    TechnicalVisit,
    Repair,
    RoadTax,
}

impl MaintenanceKind {
    /// Display label for lists and reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OilChange => "Oil change",
            Self::Tires => "Tires",
            Self::Insurance => "Insurance",
            Self::TechnicalVisit => "Technical visit",
            Self::Repair => "Repair",
            Self::RoadTax => "Road tax",
        }
    }
}

/// One maintenance event.
///
/// Distance-based work (oil, tires) uses `next_due_odometer_km`;
/// calendar-based items (insurance, road tax) use `next_due_date`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MaintenanceEntry {
    pub id: String,
    pub vehicle_id: String,
    pub kind: MaintenanceKind,
    pub date: NaiveDate,
    #[serde(default)]
    pub odometer_km: Option<i64>,
    pub cost: Money,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub next_due_odometer_km: Option<i64>,
    #[serde(default)]
    pub next_due_date: Option<NaiveDate>,
}

/// Where the vehicle stands between two oil changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OilChangeOutlook {
    pub last_service_km: i64,
    pub due_km: i64,
    /// Negative once the due mark is passed.
    pub remaining_km: i64,
    /// Fraction of the interval already used, clamped to 0..=1.
    pub progress: f64,
}

/// Projects the next oil change from the latest recorded one.
///
/// The due mark comes from the entry itself when the workshop wrote one
/// down, otherwise from the vehicle's service interval. Entries without an
/// odometer reading cannot anchor a projection and are passed over.
pub fn oil_change_outlook(
    maintenance: &[&MaintenanceEntry],
    current_odometer_km: Option<i64>,
    interval_km: Option<i64>,
) -> Option<OilChangeOutlook> {
    let current = current_odometer_km?;
    let last = maintenance
        .iter()
        .filter(|m| m.kind == MaintenanceKind::OilChange && m.odometer_km.is_some())
        .max_by_key(|m| m.date)?;
    let last_service_km = last.odometer_km?;
    let due_km = last
        .next_due_odometer_km
        .or_else(|| interval_km.map(|interval| last_service_km + interval))?;
    if due_km <= last_service_km {
        return None;
    }

    let span = (due_km - last_service_km) as f64;
    let progress = ((current - last_service_km) as f64 / span).clamp(0.0, 1.0);
    Some(OilChangeOutlook {
        last_service_km,
        due_km,
        remaining_km: due_km - current,
        progress,
    })
}
