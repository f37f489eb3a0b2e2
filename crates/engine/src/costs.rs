//! Spend totals, cost per kilometre and the supplier ranking.
use std::collections::HashMap;

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::{Currency, Money, entry::FuelEntry, maintenance::MaintenanceEntry};

/// Total spent at one supplier, for the ranking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupplierSpend {
    pub supplier: String,
    pub total: Money,
}

/// Everything spent on fuel.
pub fn total_fuel_cost(entries: &[&FuelEntry]) -> Money {
    entries.iter().fold(Money::ZERO, |acc, e| acc + e.amount)
}

/// Everything spent on maintenance.
pub fn total_maintenance_cost(maintenance: &[&MaintenanceEntry]) -> Money {
    maintenance.iter().fold(Money::ZERO, |acc, m| acc + m.cost)
}

/// Litres purchased over the whole history.
pub fn total_volume_l(entries: &[&FuelEntry]) -> f64 {
    entries.iter().map(|e| e.volume_l).sum()
}

/// Distance covered by the recorded history: newest odometer reading minus
/// oldest. `None` with fewer than two entries, which is not the same thing
/// as a distance of zero.
pub fn total_distance_km(ordered: &[&FuelEntry]) -> Option<i64> {
    if ordered.len() < 2 {
        return None;
    }
    let newest = ordered.first()?;
    let oldest = ordered.last()?;
    Some(newest.odometer_km - oldest.odometer_km)
}

/// Combined fuel and maintenance spend per kilometre, in major units.
///
/// Returns exactly `0.0` when the distance is unknown or not positive: the
/// figure renders as an amount, and an amount has a zero, unlike
/// consumption.
pub fn cost_per_km(
    total_fuel: Money,
    total_maintenance: Money,
    total_distance_km: Option<i64>,
    currency: Currency,
) -> f64 {
    match total_distance_km {
        Some(distance) if distance > 0 => {
            (total_fuel + total_maintenance).major(currency) / distance as f64
        }
        _ => 0.0,
    }
}

/// Fuel spend grouped by supplier, biggest first, ties by name.
///
/// Grouping runs on a normalized key so case, accents and stray separators
/// do not split one brand into several rows; the first spelling seen is the
/// one displayed. Entries without a supplier are not ranked.
pub fn supplier_ranking(entries: &[&FuelEntry]) -> Vec<SupplierSpend> {
    let mut totals: HashMap<String, (String, Money)> = HashMap::new();
    for entry in entries {
        let Some(supplier) = entry.supplier.as_deref() else {
            continue;
        };
        let Some(key) = normalize_supplier_key(supplier) else {
            continue;
        };
        let slot = totals
            .entry(key)
            .or_insert_with(|| (supplier.trim().to_string(), Money::ZERO));
        slot.1 += entry.amount;
    }

    let mut ranking: Vec<SupplierSpend> = totals
        .into_values()
        .map(|(supplier, total)| SupplierSpend { supplier, total })
        .collect();
    ranking.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| a.supplier.cmp(&b.supplier))
    });
    ranking
}

/// Grouping key for supplier names: NFKD-fold combining marks, lowercase,
/// collapse runs of separators.
fn normalize_supplier_key(name: &str) -> Option<String> {
    let mut out = String::new();
    let mut prev_space = false;
    for ch in name.trim().nfkd() {
        if is_combining_mark(ch) {
            continue;
        }
        if ch.is_alphanumeric() {
            for lower in ch.to_lowercase() {
                out.push(lower);
            }
            prev_space = false;
        } else if !out.is_empty() && !prev_space {
            out.push(' ');
            prev_space = true;
        }
    }
    let normalized = out.trim();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized.to_string())
    }
}
