pub mod config;
pub mod day;
pub mod export;
pub mod reset;
pub mod target;
pub mod view;
