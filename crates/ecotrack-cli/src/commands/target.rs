use clap::Subcommand;
use ecotrack_core::PersonalTarget;

use crate::session::Session;

#[derive(Subcommand)]
pub enum TargetAction {
    /// Show the daily target in kg CO₂
    Get,
    /// Set the daily target in kg CO₂
    Set {
        /// Positive number of kg
        value: f64,
    },
}

pub fn run(action: TargetAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::open()?;

    match action {
        TargetAction::Get => {
            println!("{}", session.tracker.target().kg());
        }
        TargetAction::Set { value } => {
            let target = PersonalTarget::new(value)?;
            session.tracker.set_target(target);
            session.commit()?;
            println!("target set to {} kg CO₂ per day", target.kg());
        }
    }
    Ok(())
}
