//! Turns a structured receipt payload into a fuel entry.
//!
//! The scan service gets no special trust: its response is just another
//! candidate entry, and every blank defaults the way a half-filled manual
//! form would. The only host-side conveniences are the fallbacks a person
//! would also get in the form: today's date and the last known odometer
//! reading.
use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use api_types::inference::ReceiptData;
use engine::{Coordinates, Currency, EngineError, EntrySource, FuelEntry, Money, Snapshot, entry};

pub fn entry_from_receipt(
    receipt: ReceiptData,
    snapshot: &Snapshot,
    today: NaiveDate,
) -> Result<FuelEntry, EngineError> {
    let currency = receipt.currency.map(currency_from_api).unwrap_or_default();
    let fallback_odometer = entry::latest_odometer_km(&entry::sorted_desc(&snapshot.fuel));

    Ok(FuelEntry {
        id: Uuid::new_v4().to_string(),
        vehicle_id: snapshot.vehicle.id.clone(),
        date: receipt.date.unwrap_or(today),
        time: receipt.time.unwrap_or(NaiveTime::MIN),
        location: receipt.location.unwrap_or_default(),
        amount: Money::from_major(receipt.amount.unwrap_or(0.0), currency)?,
        currency,
        volume_l: receipt.volume_l.unwrap_or(0.0),
        price_per_l: receipt.price_per_l,
        source: EntrySource::Scanned,
        odometer_km: receipt.odometer_km.or(fallback_odometer).unwrap_or(0),
        is_full_tank: receipt.is_full_tank.unwrap_or(false),
        coordinates: receipt.coordinates.map(|c| Coordinates {
            latitude: c.latitude,
            longitude: c.longitude,
        }),
        city: receipt.city,
        supplier: receipt.supplier,
    })
}

fn currency_from_api(currency: api_types::Currency) -> Currency {
    match currency {
        api_types::Currency::Mad => Currency::Mad,
        api_types::Currency::Eur => Currency::Eur,
    }
}
