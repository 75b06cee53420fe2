//! Eco tips derived from a single day's input.

use serde::{Deserialize, Serialize};

use crate::emission::{DietType, FootprintBreakdown, FootprintInput};

/// Maximum number of tips shown at once.
pub const MAX_TIPS: usize = 3;

const SUSTAINABLE_DAILY_KG: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tip {
    /// Over 30 km
    SharedTransport,
    /// Over 15 km
    ActiveTravel,
    /// Over 15 kWh
    UnplugDevices,
    /// Over 8 kWh
    AdjustThermostat,
    MeatlessMonday,
    LocalProduce,
    /// No band tip applied
    KeepItUp,
    /// Total under the sustainable daily level
    BelowSustainable,
}

impl Tip {
    pub fn text(&self) -> &'static str {
        match self {
            Tip::SharedTransport => "🚲 Consider carpooling or public transport for long trips",
            Tip::ActiveTravel => "🚶‍♂️ Try walking or biking for shorter distances",
            Tip::UnplugDevices => "💡 Unplug devices when not in use to save energy",
            Tip::AdjustThermostat => "🌡️ Adjust thermostat by 2°C to reduce energy consumption",
            Tip::MeatlessMonday => "🥗 Try 'Meatless Monday' to reduce your food footprint",
            Tip::LocalProduce => "🌱 Choose local and seasonal produce when possible",
            Tip::KeepItUp => "🌟 Excellent! You're maintaining a low carbon footprint",
            Tip::BelowSustainable => "🏆 You're below the daily sustainable target!",
        }
    }
}

impl std::fmt::Display for Tip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// Evaluate tips in fixed order (distance, electricity, diet, fallback,
/// bonus), keeping the first three.
pub fn evaluate_tips(input: &FootprintInput, breakdown: &FootprintBreakdown) -> Vec<Tip> {
    let mut tips = Vec::with_capacity(5);

    if input.distance_km > 30.0 {
        tips.push(Tip::SharedTransport);
    } else if input.distance_km > 15.0 {
        tips.push(Tip::ActiveTravel);
    }

    if input.electricity_kwh > 15.0 {
        tips.push(Tip::UnplugDevices);
    } else if input.electricity_kwh > 8.0 {
        tips.push(Tip::AdjustThermostat);
    }

    match input.diet {
        DietType::NonVeg => tips.push(Tip::MeatlessMonday),
        DietType::Mixed => tips.push(Tip::LocalProduce),
        DietType::Vegetarian => {}
    }

    if tips.is_empty() {
        tips.push(Tip::KeepItUp);
    }

    if breakdown.total < SUSTAINABLE_DAILY_KG {
        tips.push(Tip::BelowSustainable);
    }

    tips.truncate(MAX_TIPS);
    tips
}
