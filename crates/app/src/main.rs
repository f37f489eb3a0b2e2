use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand};

mod export;
mod ingest;
mod report;
mod settings;
mod store;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Parser, Debug)]
#[command(name = "carnet")]
#[command(about = "Single-vehicle logbook: fuel, maintenance and paperwork")]
struct Cli {
    /// Snapshot file holding the vehicle and its history.
    #[arg(long, env = "CARNET_LOG", default_value = "carnet.json")]
    log: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate the history and print the cockpit report.
    Report(ReportArgs),
    /// Dump the fuel history as CSV.
    Export(ExportArgs),
    /// Record a scanned receipt payload as a new fill-up.
    Ingest(IngestArgs),
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Evaluate as of this instant instead of the wall clock
    /// (`YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS`).
    #[arg(long)]
    now: Option<String>,
    /// Emit the shared JSON view instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Destination CSV file.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct IngestArgs {
    /// Structured receipt payload (JSON) as returned by the scan service.
    #[arg(long)]
    receipt: PathBuf,
}

fn main() -> Result<()> {
    let settings = settings::Settings::new()?;
    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "carnet={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Report(args) => {
            let snapshot = store::load(&cli.log)?;
            let now = resolve_now(args.now.as_deref(), settings.app.timezone.as_deref())?;
            let report = snapshot.evaluate(now);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report::to_api(&report))?);
            } else {
                print!("{}", report::render(&snapshot.vehicle, &report));
            }
        }
        Command::Export(args) => {
            let snapshot = store::load(&cli.log)?;
            let exported = export::write_csv(&snapshot.fuel, &args.out)?;
            tracing::info!(entries = exported, file = %args.out.display(), "exported fuel history");
        }
        Command::Ingest(args) => {
            let mut snapshot = store::load(&cli.log)?;
            let raw = std::fs::read_to_string(&args.receipt)
                .map_err(|err| format!("cannot read {}: {err}", args.receipt.display()))?;
            let receipt: api_types::inference::ReceiptData = serde_json::from_str(&raw)?;

            let today = resolve_now(None, settings.app.timezone.as_deref())?.date();
            let entry = ingest::entry_from_receipt(receipt, &snapshot, today)?;
            tracing::info!(id = %entry.id, odometer_km = entry.odometer_km, "recording scanned fill-up");

            // Newest first, like the capture flow records them.
            snapshot.fuel.insert(0, entry);
            store::save(&cli.log, &snapshot)?;
        }
    }

    Ok(())
}

/// Resolves the evaluation instant: an explicit override, otherwise the
/// wall clock read in the configured timezone (UTC when unset).
fn resolve_now(explicit: Option<&str>, timezone: Option<&str>) -> Result<NaiveDateTime> {
    if let Some(raw) = explicit {
        if let Ok(instant) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
            return Ok(instant);
        }
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| format!("invalid --now value: {raw}"))?;
        return Ok(date.and_time(NaiveTime::MIN));
    }

    match timezone {
        None => Ok(Utc::now().naive_utc()),
        Some(name) => {
            let tz: Tz = name
                .parse()
                .map_err(|_| format!("unknown timezone: {name}"))?;
            Ok(Utc::now().with_timezone(&tz).naive_local())
        }
    }
}
