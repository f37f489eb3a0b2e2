//! CSV export of the fuel history.
use std::path::Path;

use serde::Serialize;

use engine::{FuelEntry, entry};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// One flattened CSV line per fill-up.
#[derive(Serialize)]
struct ExportRow<'a> {
    date: String,
    time: String,
    location: &'a str,
    supplier: Option<&'a str>,
    city: Option<&'a str>,
    amount_minor: i64,
    currency: &'static str,
    volume_l: f64,
    price_per_l: Option<f64>,
    odometer_km: i64,
    is_full_tank: bool,
    source: engine::EntrySource,
    latitude: Option<f64>,
    longitude: Option<f64>,
    id: &'a str,
}

/// Writes the history to `out`, most recent first.
pub fn write_csv(entries: &[FuelEntry], out: &Path) -> Result<usize> {
    let mut writer = csv::Writer::from_path(out)
        .map_err(|err| format!("cannot write {}: {err}", out.display()))?;

    let ordered = entry::sorted_desc(entries);
    for entry in &ordered {
        writer.serialize(ExportRow {
            date: entry.date.to_string(),
            time: entry.time.format("%H:%M").to_string(),
            location: &entry.location,
            supplier: entry.supplier.as_deref(),
            city: entry.city.as_deref(),
            amount_minor: entry.amount.minor(),
            currency: entry.currency.code(),
            volume_l: entry.volume_l,
            price_per_l: entry.price_per_l,
            odometer_km: entry.odometer_km,
            is_full_tank: entry.is_full_tank,
            source: entry.source,
            latitude: entry.coordinates.map(|c| c.latitude),
            longitude: entry.coordinates.map(|c| c.longitude),
            id: &entry.id,
        })?;
    }
    writer.flush()?;
    Ok(ordered.len())
}
