//! Feedback derived from a single day: badges, tips and target bands.

mod badges;
mod target;
mod tips;

pub use badges::{evaluate_badges, Badge};
pub use target::{FootprintBand, PersonalTarget, TargetComparison, DEFAULT_TARGET_KG};
pub use tips::{evaluate_tips, Tip, MAX_TIPS};
