//! Emission model.
//!
//! Maps a day's raw inputs to a footprint breakdown in kilograms of
//! CO₂-equivalent. The factors are fixed constants; there is no attempt at
//! physical accuracy.
//!
//! ```text
//! transport   = distance_km     * 0.21
//! electricity = electricity_kwh * 0.82
//! diet        = { vegetarian: 2.9, mixed: 4.7, non-veg: 7.2 }
//! total       = transport + electricity + diet
//! ```

use serde::{Deserialize, Serialize};

/// kg CO₂ per kilometre travelled.
pub const TRANSPORT_KG_PER_KM: f64 = 0.21;
/// kg CO₂ per kWh of electricity.
pub const ELECTRICITY_KG_PER_KWH: f64 = 0.82;

/// Diet category for the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietType {
    Vegetarian,
    #[default]
    Mixed,
    NonVeg,
}

impl DietType {
    /// Fixed daily footprint of the diet in kg CO₂.
    pub fn daily_kg(&self) -> f64 {
        match self {
            DietType::Vegetarian => 2.9,
            DietType::Mixed => 4.7,
            DietType::NonVeg => 7.2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DietType::Vegetarian => "vegetarian",
            DietType::Mixed => "mixed",
            DietType::NonVeg => "non-veg",
        }
    }
}

impl std::fmt::Display for DietType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DietType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vegetarian" | "veg" => Ok(DietType::Vegetarian),
            "mixed" => Ok(DietType::Mixed),
            "non-veg" | "nonveg" | "non_veg" => Ok(DietType::NonVeg),
            other => Err(format!("unknown diet type: {other}")),
        }
    }
}

/// One day's inputs, already clamped to non-negative finite values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FootprintInput {
    pub distance_km: f64,
    pub electricity_kwh: f64,
    #[serde(default)]
    pub diet: DietType,
}

impl FootprintInput {
    /// Build an input from numeric values, clamping anything negative or
    /// non-finite to zero.
    pub fn new(distance_km: f64, electricity_kwh: f64, diet: DietType) -> Self {
        Self {
            distance_km: clamp_quantity(distance_km),
            electricity_kwh: clamp_quantity(electricity_kwh),
            diet,
        }
    }

    /// Build an input from the raw text of the form fields.
    ///
    /// Unparsable text counts as zero; this never fails.
    pub fn from_fields(distance: &str, electricity: &str, diet: DietType) -> Self {
        Self {
            distance_km: parse_quantity(distance),
            electricity_kwh: parse_quantity(electricity),
            diet,
        }
    }
}

/// Footprint split by source, in kg CO₂.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FootprintBreakdown {
    pub transport: f64,
    pub electricity: f64,
    pub diet: f64,
    pub total: f64,
}

/// Compute the footprint breakdown for a day.
///
/// Pure and total. Inputs are expected to be clamped already (see
/// [`FootprintInput::new`] and [`parse_quantity`]).
pub fn compute(input: &FootprintInput) -> FootprintBreakdown {
    let transport = input.distance_km * TRANSPORT_KG_PER_KM;
    let electricity = input.electricity_kwh * ELECTRICITY_KG_PER_KWH;
    let diet = input.diet.daily_kg();

    FootprintBreakdown {
        transport,
        electricity,
        diet,
        total: transport + electricity + diet,
    }
}

/// Parse a form quantity. Empty, non-numeric, non-finite or negative input is 0.
pub fn parse_quantity(raw: &str) -> f64 {
    raw.trim().parse::<f64>().map(clamp_quantity).unwrap_or(0.0)
}

fn clamp_quantity(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
