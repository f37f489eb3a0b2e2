//! The vehicle profile and its cached technical sheet.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Generated technical sheet, cached on the profile.
///
/// Free-form strings on purpose: the values are estimates for display, the
/// analytics never read them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleSpecs {
    pub engine: Option<String>,
    pub power: Option<String>,
    pub transmission: Option<String>,
    pub fuel_tank: Option<String>,
    pub tires: Option<String>,
    pub oil_type: Option<String>,
    pub battery: Option<String>,
    pub dimensions: Option<String>,
    pub weight: Option<String>,
    pub top_speed: Option<String>,
    pub acceleration: Option<String>,
    pub consumption: Option<String>,
    pub torque: Option<String>,
}

/// The single vehicle profile everything in a snapshot belongs to.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    pub model: String,
    pub year: i32,
    pub fuel_type: String,
    #[serde(default)]
    pub plate: Option<String>,
    /// Litres; absent or non-positive means no range estimate.
    #[serde(default)]
    pub tank_capacity_l: Option<f64>,
    /// Kilometres between oil changes, used when a service entry carries no
    /// explicit due mark.
    #[serde(default)]
    pub oil_change_interval_km: Option<i64>,
    #[serde(default)]
    pub insurance_expiry: Option<NaiveDate>,
    #[serde(default)]
    pub road_tax_expiry: Option<NaiveDate>,
    #[serde(default)]
    pub tech_visit_expiry: Option<NaiveDate>,
    #[serde(default)]
    pub specs: Option<VehicleSpecs>,
}
