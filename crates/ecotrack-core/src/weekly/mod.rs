mod placeholder;
mod window;

pub use placeholder::{FixedPlaceholders, PlaceholderRange, PlaceholderSource, RandomPlaceholders};
pub use window::{WeekSlot, WeeklyWindow, WINDOW_DAYS};
