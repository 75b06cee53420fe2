//! Achievement badges for a single day.
//!
//! One tier badge at most (first match wins), plus independent situational
//! badges that may fire together.

use serde::{Deserialize, Serialize};

use super::target::PersonalTarget;
use crate::emission::{DietType, FootprintBreakdown, FootprintInput};

const ECO_CHAMPION_UNDER_KG: f64 = 8.0;
const GREEN_WARRIOR_UNDER_KG: f64 = 12.0;
const ENERGY_SAVER_UNDER_KWH: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    EcoChampion,
    GreenWarrior,
    TargetAchieved,
    CarFreeDay,
    PlantPowered,
    EnergySaver,
}

impl Badge {
    pub fn emoji(&self) -> &'static str {
        match self {
            Badge::EcoChampion => "🌟",
            Badge::GreenWarrior => "🌱",
            Badge::TargetAchieved => "🎯",
            Badge::CarFreeDay => "🚶‍♂️",
            Badge::PlantPowered => "🥗",
            Badge::EnergySaver => "💡",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Badge::EcoChampion => "Eco Champion",
            Badge::GreenWarrior => "Green Warrior",
            Badge::TargetAchieved => "Target Achieved",
            Badge::CarFreeDay => "Car-Free Day",
            Badge::PlantPowered => "Plant Powered",
            Badge::EnergySaver => "Energy Saver",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Badge::EcoChampion => "Under 8kg CO₂!",
            Badge::GreenWarrior => "Under 12kg CO₂!",
            Badge::TargetAchieved => "Met personal goal!",
            Badge::CarFreeDay => "Zero transport emissions!",
            Badge::PlantPowered => "Vegetarian choice!",
            Badge::EnergySaver => "Low electricity use!",
        }
    }

    /// Whether this is one of the mutually exclusive tier badges.
    pub fn is_tier(&self) -> bool {
        matches!(
            self,
            Badge::EcoChampion | Badge::GreenWarrior | Badge::TargetAchieved
        )
    }
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}: {}", self.emoji(), self.title(), self.description())
    }
}

/// Evaluate the day's badges, tier badge first.
pub fn evaluate_badges(
    input: &FootprintInput,
    breakdown: &FootprintBreakdown,
    target: PersonalTarget,
) -> Vec<Badge> {
    let mut badges = Vec::with_capacity(4);

    if let Some(tier) = tier_badge(breakdown.total, target) {
        badges.push(tier);
    }
    if input.distance_km == 0.0 {
        badges.push(Badge::CarFreeDay);
    }
    if input.diet == DietType::Vegetarian {
        badges.push(Badge::PlantPowered);
    }
    if input.electricity_kwh < ENERGY_SAVER_UNDER_KWH {
        badges.push(Badge::EnergySaver);
    }

    badges
}

fn tier_badge(total: f64, target: PersonalTarget) -> Option<Badge> {
    if total < ECO_CHAMPION_UNDER_KG {
        Some(Badge::EcoChampion)
    } else if total < GREEN_WARRIOR_UNDER_KG {
        Some(Badge::GreenWarrior)
    } else if total < target.kg() {
        Some(Badge::TargetAchieved)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emission::compute;

    fn badges_for(input: FootprintInput, target: f64) -> Vec<Badge> {
        let breakdown = compute(&input);
        evaluate_badges(&input, &breakdown, PersonalTarget::new(target).unwrap())
    }

    #[test]
    fn low_day_collects_everything() {
        let badges = badges_for(FootprintInput::new(0.0, 3.0, DietType::Vegetarian), 15.0);
        assert_eq!(
            badges,
            vec![
                Badge::EcoChampion,
                Badge::CarFreeDay,
                Badge::PlantPowered,
                Badge::EnergySaver
            ]
        );
    }

    #[test]
    fn green_warrior_between_8_and_12() {
        // 20 km * 0.21 + 4.7 = 8.9
        let badges = badges_for(FootprintInput::new(20.0, 0.0, DietType::Mixed), 15.0);
        assert_eq!(badges[0], Badge::GreenWarrior);
    }

    #[test]
    fn target_achieved_only_when_under_custom_target() {
        // 10 kWh * 0.82 + 7.2 = 15.4
        let input = FootprintInput::new(0.0, 10.0, DietType::NonVeg);
        assert!(badges_for(input, 20.0).contains(&Badge::TargetAchieved));
        assert!(!badges_for(input, 15.0).iter().any(Badge::is_tier));
    }

    #[test]
    fn at_most_one_tier_badge() {
        for total_km in [0.0, 10.0, 20.0, 40.0, 80.0] {
            let badges = badges_for(FootprintInput::new(total_km, 2.0, DietType::Mixed), 30.0);
            assert!(badges.iter().filter(|b| b.is_tier()).count() <= 1);
        }
    }

    #[test]
    fn display_includes_emoji_and_description() {
        assert_eq!(Badge::EnergySaver.to_string(), "💡 Energy Saver: Low electricity use!");
    }
}
