//! Load-run-save wrapper shared by the state-changing commands.

use chrono::{NaiveDate, Utc};
use ecotrack_core::{Config, RandomPlaceholders, StateStore, Tracker};
use tracing::debug;

pub struct Session {
    pub tracker: Tracker,
    pub config: Config,
    pub today: NaiveDate,
    pub placeholders: RandomPlaceholders,
    store: StateStore,
}

impl Session {
    /// Open the store and load the saved tracker, or start a fresh one.
    ///
    /// A window left over from an earlier day is rebuilt so today's save
    /// lands in it. Fresh and rebuilt windows are stored right away so the
    /// placeholders stay put between commands.
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        let config = Config::load_or_default();
        let store = StateStore::open()?;
        let today = Utc::now().date_naive();
        let mut placeholders = RandomPlaceholders::from_seed(config.placeholders.seed);

        let (tracker, changed) = match store.load()? {
            Some(state) => {
                let mut tracker = Tracker::from_state(state);
                let rebuilt = tracker.refresh_window(today, &mut placeholders);
                (tracker, rebuilt)
            }
            None => {
                debug!(%today, "no saved state, starting fresh");
                (Tracker::new(today, &mut placeholders), true)
            }
        };

        let session = Self {
            tracker,
            config,
            today,
            placeholders,
            store,
        };
        if changed {
            session.commit()?;
        }
        Ok(session)
    }

    /// Persist the tracker state.
    pub fn commit(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.store.save(self.tracker.state())?;
        Ok(())
    }
}
