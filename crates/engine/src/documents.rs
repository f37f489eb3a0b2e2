//! Document expiry monitoring.
//!
//! Alerts are recomputed from scratch on every evaluation; there is no
//! acknowledgment or dismissal state to carry around.
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::vehicle::Vehicle;

/// Documents start alerting this many days before they lapse.
pub const EXPIRY_WARNING_DAYS: i64 = 30;

const SECONDS_PER_DAY: i64 = 86_400;

/// The three dated documents a vehicle carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Insurance,
    RoadTax,
    TechnicalVisit,
}

impl DocumentKind {
    /// Fixed evaluation order, so alert lists are deterministic.
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::Insurance,
        DocumentKind::RoadTax,
        DocumentKind::TechnicalVisit,
    ];

    /// Display label for alerts and status cards.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Insurance => "Insurance",
            Self::RoadTax => "Road tax",
            Self::TechnicalVisit => "Technical visit",
        }
    }
}

/// How urgent an alert is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertSeverity {
    Expired,
    ExpiringSoon,
}

/// One alert line for the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub label: String,
    /// Day count the presentation template interpolates: days overdue for
    /// an expired document, days left for one expiring soon.
    pub detail: String,
    pub severity: AlertSeverity,
}

/// Validity of one document, alert or not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentState {
    Valid,
    Expired,
    Unknown,
}

/// Status card for one document: state plus the day count behind it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStatus {
    pub kind: DocumentKind,
    pub state: DocumentState,
    /// Days to expiry while valid, days overdue once expired, 0 when the
    /// date is unknown.
    pub days: i64,
}

/// Fresh alerts for every dated document, in `DocumentKind::ALL` order.
///
/// A document with no recorded expiry produces nothing; that is missing
/// paperwork data, not a problem to alarm about.
pub fn document_alerts(vehicle: &Vehicle, now: NaiveDateTime) -> Vec<Alert> {
    let mut alerts = Vec::new();
    for kind in DocumentKind::ALL {
        let Some(expiry) = expiry_for(vehicle, kind) else {
            continue;
        };
        let days = days_remaining(expiry, now);
        if days < 0 {
            alerts.push(Alert {
                label: format!("{} expired", kind.label()),
                detail: days.abs().to_string(),
                severity: AlertSeverity::Expired,
            });
        } else if days < EXPIRY_WARNING_DAYS {
            alerts.push(Alert {
                label: format!("{} expires soon", kind.label()),
                detail: days.to_string(),
                severity: AlertSeverity::ExpiringSoon,
            });
        }
    }
    alerts
}

/// Status card for every document, expiry recorded or not.
pub fn document_statuses(vehicle: &Vehicle, now: NaiveDateTime) -> Vec<DocumentStatus> {
    DocumentKind::ALL
        .iter()
        .map(|&kind| match expiry_for(vehicle, kind) {
            None => DocumentStatus {
                kind,
                state: DocumentState::Unknown,
                days: 0,
            },
            Some(expiry) => {
                let days = days_remaining(expiry, now);
                if days < 0 {
                    DocumentStatus {
                        kind,
                        state: DocumentState::Expired,
                        days: days.abs(),
                    }
                } else {
                    DocumentStatus {
                        kind,
                        state: DocumentState::Valid,
                        days,
                    }
                }
            }
        })
        .collect()
}

fn expiry_for(vehicle: &Vehicle, kind: DocumentKind) -> Option<NaiveDate> {
    match kind {
        DocumentKind::Insurance => vehicle.insurance_expiry,
        DocumentKind::RoadTax => vehicle.road_tax_expiry,
        DocumentKind::TechnicalVisit => vehicle.tech_visit_expiry,
    }
}

/// Days until the document lapses, counting any started day as a full one.
///
/// The expiry date is taken at midnight, so the count is negative from the
/// first second of the day after.
fn days_remaining(expiry: NaiveDate, now: NaiveDateTime) -> i64 {
    let seconds = (expiry.and_time(NaiveTime::MIN) - now).num_seconds();
    let whole = seconds.div_euclid(SECONDS_PER_DAY);
    if seconds.rem_euclid(SECONDS_PER_DAY) == 0 {
        whole
    } else {
        whole + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(
        insurance: Option<&str>,
        road_tax: Option<&str>,
        tech_visit: Option<&str>,
    ) -> Vehicle {
        Vehicle {
            id: "v1".to_string(),
            name: "Test".to_string(),
            model: "Test".to_string(),
            year: 2022,
            fuel_type: "Diesel".to_string(),
            plate: None,
            tank_capacity_l: Some(53.0),
            oil_change_interval_km: None,
            insurance_expiry: insurance.map(|d| d.parse().unwrap()),
            road_tax_expiry: road_tax.map(|d| d.parse().unwrap()),
            tech_visit_expiry: tech_visit.map(|d| d.parse().unwrap()),
            specs: None,
        }
    }

    fn noon(date: &str) -> NaiveDateTime {
        format!("{date}T12:00:00").parse().unwrap()
    }

    #[test]
    fn expired_alert_carries_overdue_days() {
        let vehicle = vehicle(Some("2023-11-15"), None, None);
        let alerts = document_alerts(&vehicle, noon("2023-11-20"));

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Expired);
        assert_eq!(alerts[0].detail, "5");
        assert_eq!(alerts[0].label, "Insurance expired");
    }

    #[test]
    fn expiring_soon_alert_carries_days_left() {
        let vehicle = vehicle(None, Some("2023-11-30"), None);
        let alerts = document_alerts(&vehicle, noon("2023-11-20"));

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::ExpiringSoon);
        assert_eq!(alerts[0].detail, "10");
        assert_eq!(alerts[0].label, "Road tax expires soon");
    }

    #[test]
    fn far_expiries_stay_quiet() {
        let vehicle = vehicle(Some("2024-01-04"), None, None);
        // 45 days out.
        assert!(document_alerts(&vehicle, noon("2023-11-20")).is_empty());
    }

    #[test]
    fn missing_dates_produce_no_alerts() {
        let vehicle = vehicle(None, None, None);
        assert!(document_alerts(&vehicle, noon("2023-11-20")).is_empty());
    }

    #[test]
    fn threshold_is_exclusive_on_both_ends() {
        // Exactly 30 days out: still quiet.
        let quiet = vehicle(Some("2023-12-20"), None, None);
        assert!(document_alerts(&quiet, noon("2023-11-20")).is_empty());

        // On the expiry day itself the count is zero: still remaining.
        let today = vehicle(Some("2023-11-20"), None, None);
        let alerts = document_alerts(&today, noon("2023-11-20"));
        assert_eq!(alerts[0].severity, AlertSeverity::ExpiringSoon);
        assert_eq!(alerts[0].detail, "0");

        // From the day after, it is overdue.
        let alerts = document_alerts(&today, noon("2023-11-21"));
        assert_eq!(alerts[0].severity, AlertSeverity::Expired);
        assert_eq!(alerts[0].detail, "1");
    }

    #[test]
    fn statuses_cover_every_document() {
        let vehicle = vehicle(Some("2023-11-15"), Some("2024-03-15"), None);
        let statuses = document_statuses(&vehicle, noon("2023-11-20"));

        assert_eq!(statuses.len(), 3);
        assert_eq!(statuses[0].state, DocumentState::Expired);
        assert_eq!(statuses[0].days, 5);
        assert_eq!(statuses[1].state, DocumentState::Valid);
        assert_eq!(statuses[1].days, 116);
        assert_eq!(statuses[2].state, DocumentState::Unknown);
    }
}
