//! Carnet analytics engine.
//!
//! Turns a raw, unordered history of fuel and maintenance records into the
//! derived figures a dashboard shows: consumption, range, cost per
//! kilometre, spend aggregates and document alerts.
//!
//! The engine is pure and synchronous. One evaluation reads one immutable
//! [`Snapshot`] plus the caller's civil clock and returns a complete
//! [`Report`]; nothing is retained between calls and nothing blocks. Hosts
//! that cache a report must key it on the snapshot content *and* the `now`
//! they passed in, because expiry alerts and the month window move with the
//! clock. Incomplete or inconsistent history degrades into absent figures
//! and dropped segments, never into errors.
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub use costs::SupplierSpend;
pub use currency::Currency;
pub use documents::{
    Alert, AlertSeverity, DocumentKind, DocumentState, DocumentStatus, EXPIRY_WARNING_DAYS,
};
pub use entry::{Coordinates, EntrySource, FuelEntry};
pub use error::EngineError;
pub use maintenance::{MaintenanceEntry, MaintenanceKind, OilChangeOutlook};
pub use money::Money;
pub use period::MonthlySummary;
pub use segments::Segment;
pub use vehicle::{Vehicle, VehicleSpecs};

pub mod consumption;
pub mod costs;
mod currency;
pub mod documents;
pub mod entry;
mod error;
pub mod maintenance;
mod money;
pub mod period;
pub mod segments;
mod vehicle;

/// Complete input of one evaluation: the vehicle profile and its history.
///
/// Entries referencing a different vehicle are ignored, so the same
/// evaluation works unchanged once a store holds several vehicles.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub vehicle: Vehicle,
    #[serde(default)]
    pub fuel: Vec<FuelEntry>,
    #[serde(default)]
    pub maintenance: Vec<MaintenanceEntry>,
}

/// Everything derived from one snapshot at one instant.
///
/// Optional figures are genuinely undefined (too little history) and must
/// render as placeholders, not zeroes. `cost_per_km` is the one deliberate
/// exception: it falls back to `0.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub currency: Currency,
    pub consumption_l_per_100km: Option<f64>,
    pub autonomy_km: Option<i64>,
    pub cost_per_km: f64,
    pub total_fuel_cost: Money,
    pub total_maintenance_cost: Money,
    pub total_volume_l: f64,
    pub total_distance_km: Option<i64>,
    pub current_odometer_km: Option<i64>,
    pub suppliers: Vec<SupplierSpend>,
    pub alerts: Vec<Alert>,
    pub documents: Vec<DocumentStatus>,
    pub oil_change: Option<OilChangeOutlook>,
    pub month: MonthlySummary,
}

impl Snapshot {
    /// Evaluates every derived figure in one pass.
    ///
    /// `now` is the host's civil clock (the host picks the timezone); it
    /// anchors the expiry alerts and the month window.
    pub fn evaluate(&self, now: NaiveDateTime) -> Report {
        let mut fuel: Vec<&FuelEntry> = self
            .fuel
            .iter()
            .filter(|e| e.vehicle_id == self.vehicle.id)
            .collect();
        entry::sort_desc(&mut fuel);

        let maintenance: Vec<&MaintenanceEntry> = self
            .maintenance
            .iter()
            .filter(|m| m.vehicle_id == self.vehicle.id)
            .collect();

        let currency = fuel
            .first()
            .map(|e| e.currency)
            .unwrap_or_default();

        let segments = segments::full_tank_segments(&fuel);
        let consumption_l_per_100km = consumption::average_consumption(&segments);
        let autonomy_km =
            consumption::estimated_range_km(consumption_l_per_100km, self.vehicle.tank_capacity_l);

        let total_fuel_cost = costs::total_fuel_cost(&fuel);
        let total_maintenance_cost = costs::total_maintenance_cost(&maintenance);
        let total_distance_km = costs::total_distance_km(&fuel);
        let cost_per_km = costs::cost_per_km(
            total_fuel_cost,
            total_maintenance_cost,
            total_distance_km,
            currency,
        );

        let current_odometer_km = entry::latest_odometer_km(&fuel);

        Report {
            currency,
            consumption_l_per_100km,
            autonomy_km,
            cost_per_km,
            total_fuel_cost,
            total_maintenance_cost,
            total_volume_l: costs::total_volume_l(&fuel),
            total_distance_km,
            current_odometer_km,
            suppliers: costs::supplier_ranking(&fuel),
            alerts: documents::document_alerts(&self.vehicle, now),
            documents: documents::document_statuses(&self.vehicle, now),
            oil_change: maintenance::oil_change_outlook(
                &maintenance,
                current_odometer_km,
                self.vehicle.oil_change_interval_km,
            ),
            month: period::monthly_summary(&fuel, now),
        }
    }
}
