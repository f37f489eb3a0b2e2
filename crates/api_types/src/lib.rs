use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Mad,
    Eur,
}

pub mod metrics {
    use super::*;

    /// Everything the dashboard needs, derived fresh from one snapshot.
    ///
    /// Monetary fields are integer minor units; the currency applies to all
    /// of them.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Report {
        pub currency: Currency,
        /// Litres per 100 km, one decimal. Absent with too little usable
        /// history: render a placeholder, not a zero.
        pub consumption_l_per_100km: Option<f64>,
        /// Estimated km on a full tank at current consumption.
        pub autonomy_km: Option<i64>,
        /// Major units per km. `0.0` is the defined fallback when the
        /// distance is unknown.
        pub cost_per_km: f64,
        pub total_fuel_minor: i64,
        pub total_maintenance_minor: i64,
        pub total_volume_l: f64,
        pub total_distance_km: Option<i64>,
        pub current_odometer_km: Option<i64>,
        pub suppliers: Vec<SupplierSpend>,
        pub alerts: Vec<Alert>,
        pub documents: Vec<DocumentStatus>,
        pub oil_change: Option<OilChangeOutlook>,
        pub month: MonthlySummary,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct SupplierSpend {
        pub supplier: String,
        pub total_minor: i64,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "kebab-case")]
    pub enum AlertSeverity {
        Expired,
        ExpiringSoon,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Alert {
        pub label: String,
        /// Day count for the template: days overdue or days left.
        pub detail: String,
        pub severity: AlertSeverity,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum DocumentKind {
        Insurance,
        RoadTax,
        TechnicalVisit,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum DocumentState {
        Valid,
        Expired,
        Unknown,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct DocumentStatus {
        pub kind: DocumentKind,
        pub state: DocumentState,
        pub days: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct OilChangeOutlook {
        pub last_service_km: i64,
        pub due_km: i64,
        pub remaining_km: i64,
        pub progress: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct MonthlySummary {
        pub fill_ups: usize,
        pub volume_l: f64,
        pub distance_km: i64,
    }
}

pub mod inference {
    use super::*;

    /// Receipt-understanding request: the photographed receipt only.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ReceiptScan {
        /// Image bytes, base64, without any data-URL prefix.
        pub image_base64: String,
        pub mime_type: Option<String>,
    }

    /// Technical-sheet request.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct SpecsRequest {
        pub model: String,
        pub year: i32,
        pub fuel_type: String,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Coordinates {
        pub latitude: f64,
        pub longitude: f64,
    }

    /// Structured receipt as the service returns it.
    ///
    /// Every field is optional and gets no special trust: whatever is
    /// missing is defaulted exactly like a manual form left blank, notably
    /// `is_full_tank`, which defaults to *not* full. Monetary values are
    /// decimal major units as printed on the receipt.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct ReceiptData {
        pub date: Option<NaiveDate>,
        pub time: Option<NaiveTime>,
        pub location: Option<String>,
        pub amount: Option<f64>,
        pub volume_l: Option<f64>,
        pub price_per_l: Option<f64>,
        pub currency: Option<Currency>,
        pub odometer_km: Option<i64>,
        pub is_full_tank: Option<bool>,
        pub coordinates: Option<Coordinates>,
        pub city: Option<String>,
        pub supplier: Option<String>,
    }

    /// Generated technical sheet.
    ///
    /// Free-form strings on purpose: the values are estimates for display,
    /// not inputs to any computation.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
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

}
