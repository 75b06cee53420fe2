use clap::Args;
use ecotrack_core::report::MAX_REPORT_HISTORY;

use crate::session::Session;

#[derive(Args)]
pub struct JsonArgs {
    /// Print JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
pub struct HistoryArgs {
    /// Number of entries (defaults to tracking.history_display_limit)
    #[arg(long)]
    limit: Option<usize>,
    /// Print JSON
    #[arg(long)]
    json: bool,
}

pub fn history(args: HistoryArgs) -> Result<(), Box<dyn std::error::Error>> {
    let session = Session::open()?;
    let limit = args
        .limit
        .unwrap_or(session.config.tracking.history_display_limit)
        .min(MAX_REPORT_HISTORY);
    let entries = session.tracker.history().list(Some(limit));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No history yet");
        return Ok(());
    }
    for entry in entries {
        println!(
            "{}  {:>5.1} kg CO₂  {}km, {}kWh, {}",
            entry.date, entry.footprint, entry.distance_km, entry.electricity_kwh, entry.diet
        );
    }
    Ok(())
}

pub fn week(args: JsonArgs) -> Result<(), Box<dyn std::error::Error>> {
    let session = Session::open()?;
    let week = session.tracker.week();

    if args.json {
        println!("{}", serde_json::to_string_pretty(week)?);
        return Ok(());
    }

    let target = session.tracker.target();
    for slot in week.slots() {
        let star = if target.earns_star(slot.footprint) { " ⭐" } else { "" };
        println!(
            "{} {}  {:>5.1} kg CO₂ ({}){star}",
            slot.day_label,
            slot.date,
            slot.footprint,
            target.band(slot.footprint).color()
        );
    }
    println!("Average: {:.1} kg CO₂, max: {:.1} kg CO₂", week.average(), week.max());
    Ok(())
}

pub fn achievements(args: JsonArgs) -> Result<(), Box<dyn std::error::Error>> {
    let session = Session::open()?;
    let a = session.tracker.achievements();

    if args.json {
        println!("{}", serde_json::to_string_pretty(a)?);
    } else {
        println!("Days tracked:  {}", a.days_tracked);
        println!("CO₂ reduction: {:.0}%", a.total_reduction_pct);
        println!("Green days:    {}", a.green_days);
    }
    Ok(())
}
