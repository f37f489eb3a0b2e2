//! Renders an engine report as text, or maps it onto the shared API views.
use std::fmt::Write;

use engine::{DocumentState, Report, Vehicle};

/// Placeholder for figures the history cannot support yet. Distinct from a
/// zero on purpose.
const NO_DATA: &str = "---";

pub fn render(vehicle: &Vehicle, report: &Report) -> String {
    let currency = report.currency;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} — {} ({}, {})",
        vehicle.name, vehicle.model, vehicle.year, vehicle.fuel_type
    );
    let _ = writeln!(
        out,
        "Odometer: {}",
        report
            .current_odometer_km
            .map_or_else(|| NO_DATA.to_string(), |km| format!("{km} km"))
    );
    let _ = writeln!(out);

    let consumption = report
        .consumption_l_per_100km
        .map_or_else(|| NO_DATA.to_string(), |c| format!("{c:.1}"));
    let autonomy = report
        .autonomy_km
        .map_or_else(|| NO_DATA.to_string(), |km| km.to_string());
    let distance = report
        .total_distance_km
        .map_or_else(|| NO_DATA.to_string(), |km| format!("{km} km"));

    let _ = writeln!(out, "Consumption:  {consumption} L/100km");
    let _ = writeln!(out, "Autonomy:     {autonomy} km");
    let _ = writeln!(out, "Cost/km:      {:.2} {}", report.cost_per_km, currency);
    let _ = writeln!(
        out,
        "Fuel:         {} ({:.1} L)",
        report.total_fuel_cost.format(currency),
        report.total_volume_l
    );
    let _ = writeln!(
        out,
        "Maintenance:  {}",
        report.total_maintenance_cost.format(currency)
    );
    let _ = writeln!(out, "Distance:     {distance}");

    if !report.suppliers.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Suppliers:");
        for (rank, spend) in report.suppliers.iter().enumerate() {
            let _ = writeln!(
                out,
                "  {}. {:<12} {}",
                rank + 1,
                spend.supplier,
                spend.total.format(currency)
            );
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Alerts ({}):", report.alerts.len());
    for alert in &report.alerts {
        let _ = writeln!(out, "  - {} ({} days)", alert.label, alert.detail);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Documents:");
    for status in &report.documents {
        let line = match status.state {
            DocumentState::Valid => format!("valid, {} days left", status.days),
            DocumentState::Expired => format!("expired {} days ago", status.days),
            DocumentState::Unknown => "no expiry recorded".to_string(),
        };
        let _ = writeln!(out, "  {:<16} {line}", status.kind.label());
    }

    if let Some(oil) = &report.oil_change {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Oil change:   {} km to go ({:.0}% of interval used, due at {} km)",
            oil.remaining_km,
            oil.progress * 100.0,
            oil.due_km
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "This month:   {} fill-ups · {:.1} L · {} km",
        report.month.fill_ups, report.month.volume_l, report.month.distance_km
    );

    out
}

/// Maps the engine report onto the shared presentation DTO.
pub fn to_api(report: &Report) -> api_types::metrics::Report {
    use api_types::metrics;

    metrics::Report {
        currency: currency_to_api(report.currency),
        consumption_l_per_100km: report.consumption_l_per_100km,
        autonomy_km: report.autonomy_km,
        cost_per_km: report.cost_per_km,
        total_fuel_minor: report.total_fuel_cost.minor(),
        total_maintenance_minor: report.total_maintenance_cost.minor(),
        total_volume_l: report.total_volume_l,
        total_distance_km: report.total_distance_km,
        current_odometer_km: report.current_odometer_km,
        suppliers: report
            .suppliers
            .iter()
            .map(|s| metrics::SupplierSpend {
                supplier: s.supplier.clone(),
                total_minor: s.total.minor(),
            })
            .collect(),
        alerts: report
            .alerts
            .iter()
            .map(|a| metrics::Alert {
                label: a.label.clone(),
                detail: a.detail.clone(),
                severity: match a.severity {
                    engine::AlertSeverity::Expired => metrics::AlertSeverity::Expired,
                    engine::AlertSeverity::ExpiringSoon => metrics::AlertSeverity::ExpiringSoon,
                },
            })
            .collect(),
        documents: report
            .documents
            .iter()
            .map(|d| metrics::DocumentStatus {
                kind: match d.kind {
                    engine::DocumentKind::Insurance => metrics::DocumentKind::Insurance,
                    engine::DocumentKind::RoadTax => metrics::DocumentKind::RoadTax,
                    engine::DocumentKind::TechnicalVisit => metrics::DocumentKind::TechnicalVisit,
                },
                state: match d.state {
                    DocumentState::Valid => metrics::DocumentState::Valid,
                    DocumentState::Expired => metrics::DocumentState::Expired,
                    DocumentState::Unknown => metrics::DocumentState::Unknown,
                },
                days: d.days,
            })
            .collect(),
        oil_change: report.oil_change.map(|oil| metrics::OilChangeOutlook {
            last_service_km: oil.last_service_km,
            due_km: oil.due_km,
            remaining_km: oil.remaining_km,
            progress: oil.progress,
        }),
        month: metrics::MonthlySummary {
            fill_ups: report.month.fill_ups,
            volume_l: report.month.volume_l,
            distance_km: report.month.distance_km,
        },
    }
}

fn currency_to_api(currency: engine::Currency) -> api_types::Currency {
    match currency {
        engine::Currency::Mad => api_types::Currency::Mad,
        engine::Currency::Eur => api_types::Currency::Eur,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use engine::{Currency, EntrySource, FuelEntry, Money, Snapshot};

    use super::*;

    fn snapshot() -> Snapshot {
        Snapshot {
            vehicle: Vehicle {
                id: "v1".to_string(),
                name: "Peugeot 3008 GT".to_string(),
                model: "3008 GT Line".to_string(),
                year: 2022,
                fuel_type: "Diesel".to_string(),
                plate: None,
                tank_capacity_l: Some(53.0),
                oil_change_interval_km: None,
                insurance_expiry: None,
                road_tax_expiry: None,
                tech_visit_expiry: None,
                specs: None,
            },
            fuel: vec![FuelEntry {
                id: "1".to_string(),
                vehicle_id: "v1".to_string(),
                date: "2023-10-15".parse().unwrap(),
                time: chrono::NaiveTime::MIN,
                location: String::new(),
                amount: Money::new(35_000),
                currency: Currency::Mad,
                volume_l: 28.5,
                price_per_l: None,
                source: EntrySource::Manual,
                odometer_km: 44_200,
                is_full_tank: true,
                coordinates: None,
                city: None,
                supplier: Some("Afriquia".to_string()),
            }],
            maintenance: Vec::new(),
        }
    }

    fn noon(date: &str) -> NaiveDateTime {
        format!("{date}T12:00:00").parse().unwrap()
    }

    #[test]
    fn undefined_figures_render_as_placeholders() {
        let snapshot = snapshot();
        let report = snapshot.evaluate(noon("2023-11-20"));
        let text = render(&snapshot.vehicle, &report);

        assert!(text.contains("Consumption:  --- L/100km"));
        assert!(text.contains("Autonomy:     --- km"));
        // The cost figure falls back to a real zero instead.
        assert!(text.contains("Cost/km:      0.00 MAD"));
    }

    #[test]
    fn api_view_keeps_minor_units_and_absences() {
        let snapshot = snapshot();
        let report = snapshot.evaluate(noon("2023-11-20"));
        let view = to_api(&report);

        assert_eq!(view.total_fuel_minor, 35_000);
        assert_eq!(view.consumption_l_per_100km, None);
        assert_eq!(view.total_distance_km, None);
        assert_eq!(view.suppliers[0].supplier, "Afriquia");

        let encoded = serde_json::to_string(&view).unwrap();
        assert!(encoded.contains("\"consumption_l_per_100km\":null"));
    }
}
