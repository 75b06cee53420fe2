//! # EcoTrack Core Library
//!
//! This library provides the core logic for EcoTrack, a personal daily carbon
//! footprint tracker. The engine is a plain synchronous state machine; the CLI
//! binary is a thin layer over the same library.
//!
//! ## Architecture
//!
//! - **Emission model**: pure function from a day's inputs to a kg CO₂ breakdown
//! - **Feedback**: badges, tips, and target comparison derived from the breakdown
//! - **Ledger and weekly window**: one history entry per date, plus a fixed
//!   seven-day view ending today
//! - **Tracker**: saves, resets (with a confirmation gate), and reports
//! - **Storage**: SQLite state snapshots and TOML configuration
//! - **Export**: async delivery of rendered reports to file or writer sinks
//!
//! ## Key Components
//!
//! - [`Tracker`]: orchestrates every state-changing operation
//! - [`TrackerState`]: the serde snapshot the caller persists
//! - [`StateStore`]: snapshot persistence
//! - [`Config`]: application configuration management

pub mod achievements;
pub mod emission;
pub mod error;
pub mod export;
pub mod feedback;
pub mod ledger;
pub mod report;
pub mod storage;
pub mod tracker;
pub mod weekly;

pub use achievements::AchievementState;
pub use emission::{compute, parse_quantity, DietType, FootprintBreakdown, FootprintInput};
pub use error::{
    ConfigError, CoreError, ExportError, InvariantViolation, ResetError, StorageError,
    ValidationError,
};
pub use export::{spawn_export, ExportDocument, ExportHandle, ExportKind, ExportSink, ExportStatus, FileSink, WriterSink};
pub use feedback::{Badge, FootprintBand, PersonalTarget, TargetComparison, Tip};
pub use ledger::{HistoryEntry, HistoryLedger};
pub use report::{build_report, Report};
pub use storage::{Config, StateStore};
pub use tracker::{Confirmation, ResetLevel, SaveOutcome, Tracker, TrackerState, TrackerStatus};
pub use weekly::{PlaceholderSource, RandomPlaceholders, WeekSlot, WeeklyWindow};
