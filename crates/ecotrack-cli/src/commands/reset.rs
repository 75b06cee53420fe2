use clap::{Args, ValueEnum};
use ecotrack_core::{Confirmation, ResetLevel};

use crate::session::Session;

#[derive(Clone, Copy, ValueEnum)]
pub enum Level {
    /// Clear the input form
    Form,
    /// Remove today's entry
    Today,
    /// Clear all history and achievements
    History,
    /// Clear everything, including the target
    Factory,
}

impl From<Level> for ResetLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::Form => ResetLevel::ClearForm,
            Level::Today => ResetLevel::ResetToday,
            Level::History => ResetLevel::ClearHistory,
            Level::Factory => ResetLevel::FactoryReset,
        }
    }
}

#[derive(Args)]
pub struct ResetArgs {
    level: Level,
    /// Confirm a history or factory reset
    #[arg(long)]
    yes: bool,
}

pub fn run(args: ResetArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::open()?;
    let today = session.today;

    let status = session.tracker.reset(
        args.level.into(),
        Confirmation::from(args.yes),
        today,
        &mut session.placeholders,
    )?;
    session.commit()?;

    println!("{status}");
    Ok(())
}
