use clap::Args;
use ecotrack_core::{
    DietType, FootprintBand, FootprintBreakdown, FootprintInput, TargetComparison, Tracker,
};
use serde::Serialize;

use crate::session::Session;

#[derive(Args)]
pub struct CalcArgs {
    /// Distance traveled today, in km
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    distance: String,
    /// Electricity used today, in kWh
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    electricity: String,
    /// vegetarian, mixed or non-veg
    #[arg(long, default_value = "mixed")]
    diet: DietType,
    /// Print JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
pub struct SaveArgs {
    /// Distance traveled today, in km (keeps the current form when omitted)
    #[arg(long, allow_hyphen_values = true)]
    distance: Option<String>,
    /// Electricity used today, in kWh
    #[arg(long, allow_hyphen_values = true)]
    electricity: Option<String>,
    #[arg(long)]
    diet: Option<DietType>,
}

#[derive(Serialize)]
struct DayView {
    input: FootprintInput,
    breakdown: FootprintBreakdown,
    band: FootprintBand,
    progress_pct: f64,
    target_kg: f64,
    comparison: TargetComparison,
    badges: Vec<String>,
    tips: Vec<String>,
}

impl DayView {
    fn of(tracker: &Tracker) -> Self {
        let breakdown = tracker.breakdown();
        Self {
            input: *tracker.form(),
            breakdown,
            band: tracker.band(),
            progress_pct: tracker.progress_pct(),
            target_kg: tracker.target().kg(),
            comparison: tracker.target().compare(breakdown.total),
            badges: tracker.badges().iter().map(ToString::to_string).collect(),
            tips: tracker.tips().iter().map(ToString::to_string).collect(),
        }
    }

    fn print(&self) {
        let b = &self.breakdown;
        println!("Today's footprint: {:.1} kg CO₂ ({})", b.total, self.band.color());
        println!("  Transport:   {:.1} kg", b.transport);
        println!("  Electricity: {:.1} kg", b.electricity);
        println!("  Diet:        {:.1} kg", b.diet);
        println!(
            "Target: {} kg, {:.0}% used. {}",
            self.target_kg, self.progress_pct, self.comparison
        );
        if !self.badges.is_empty() {
            println!("Badges:");
            for badge in &self.badges {
                println!("  {badge}");
            }
        }
        println!("Tips:");
        for tip in &self.tips {
            println!("  • {tip}");
        }
    }
}

pub fn calc(args: CalcArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::open()?;
    session
        .tracker
        .edit_fields(&args.distance, &args.electricity, args.diet);
    session.commit()?;

    let view = DayView::of(&session.tracker);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        view.print();
    }
    Ok(())
}

pub fn save(args: SaveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::open()?;

    if args.distance.is_some() || args.electricity.is_some() || args.diet.is_some() {
        let current = *session.tracker.form();
        let distance = args.distance.unwrap_or_else(|| current.distance_km.to_string());
        let electricity = args
            .electricity
            .unwrap_or_else(|| current.electricity_kwh.to_string());
        let diet = args.diet.unwrap_or(current.diet);
        session.tracker.edit_fields(&distance, &electricity, diet);
    }

    let today = session.today;
    let outcome = session.tracker.save_entry(today);
    session.commit()?;

    println!(
        "{}: {} {:.1} kg CO₂",
        outcome.status(),
        outcome.entry.date,
        outcome.entry.footprint
    );
    if outcome.replaced {
        println!("(replaced the earlier entry for today)");
    }
    Ok(())
}
