//! Species catalog: costs, nightly decay, preferred habitat, rarity.
//!
//! Every per-species difference in the engine is data in [`SpeciesProfile`];
//! the update operations on [`crate::animal::Animal`] are shared.

use serde::{Deserialize, Serialize};

use crate::habitat::HabitatType;

/// Animal species available for purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Species {
    Rabbit = 0,
    Tortoise = 1,
    Penguin = 2,
    Monkey = 3,
    Bear = 4,
    Lion = 5,
    Elephant = 6,
}

/// Visitor draw tier. Rarer animals attract more visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RarityTier {
    Common,
    Medium,
    Large,
    Flagship,
}

impl RarityTier {
    /// Extra visitors per animal of this tier.
    pub fn visitor_bonus(self) -> i64 {
        match self {
            Self::Common => 0,
            Self::Medium => 2,
            Self::Large => 4,
            Self::Flagship => 6,
        }
    }
}

/// Nightly change applied by species-specific decay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyDecay {
    /// Added to hunger.
    pub hunger: i32,
    /// Subtracted from happiness.
    pub happiness: i32,
    /// Subtracted from energy.
    pub energy: i32,
}

/// Fixed per-species tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesProfile {
    pub name: &'static str,
    pub purchase_cost: f64,
    pub feeding_cost: f64,
    pub maintenance_cost: f64,
    pub decay: DailyDecay,
    pub habitat: HabitatType,
    pub rarity: RarityTier,
    /// Inclusive age range at purchase.
    pub age_range: (u32, u32),
    pub sound: &'static str,
}

impl Species {
    /// All species, cheapest first.
    pub const ALL: [Species; 7] = [
        Species::Rabbit,
        Species::Tortoise,
        Species::Penguin,
        Species::Monkey,
        Species::Bear,
        Species::Lion,
        Species::Elephant,
    ];

    pub fn profile(self) -> SpeciesProfile {
        match self {
            Self::Rabbit => SpeciesProfile {
                name: "Rabbit",
                purchase_cost: 150.0,
                feeding_cost: 4.0,
                maintenance_cost: 6.0,
                decay: DailyDecay { hunger: 12, happiness: 4, energy: 8 },
                habitat: HabitatType::Grassland,
                rarity: RarityTier::Common,
                age_range: (1, 8),
                sound: "thumping",
            },
            Self::Tortoise => SpeciesProfile {
                name: "Tortoise",
                purchase_cost: 250.0,
                feeding_cost: 6.0,
                maintenance_cost: 12.0,
                decay: DailyDecay { hunger: 9, happiness: 6, energy: 5 },
                habitat: HabitatType::Grassland,
                rarity: RarityTier::Common,
                age_range: (10, 50),
                sound: "hissing",
            },
            Self::Penguin => SpeciesProfile {
                name: "Penguin",
                purchase_cost: 400.0,
                feeding_cost: 10.0,
                maintenance_cost: 20.0,
                decay: DailyDecay { hunger: 15, happiness: 8, energy: 10 },
                habitat: HabitatType::Arctic,
                rarity: RarityTier::Medium,
                age_range: (5, 20),
                sound: "squawking",
            },
            Self::Monkey => SpeciesProfile {
                name: "Monkey",
                purchase_cost: 600.0,
                feeding_cost: 12.0,
                maintenance_cost: 20.0,
                decay: DailyDecay { hunger: 12, happiness: 7, energy: 10 },
                habitat: HabitatType::Jungle,
                rarity: RarityTier::Medium,
                age_range: (3, 15),
                sound: "screeching",
            },
            Self::Bear => SpeciesProfile {
                name: "Bear",
                purchase_cost: 1000.0,
                feeding_cost: 32.0,
                maintenance_cost: 48.0,
                decay: DailyDecay { hunger: 8, happiness: 2, energy: 5 },
                habitat: HabitatType::Forest,
                rarity: RarityTier::Large,
                age_range: (3, 25),
                sound: "growling",
            },
            Self::Lion => SpeciesProfile {
                name: "Lion",
                purchase_cost: 1000.0,
                feeding_cost: 40.0,
                maintenance_cost: 60.0,
                decay: DailyDecay { hunger: 17, happiness: 10, energy: 8 },
                habitat: HabitatType::Savanna,
                rarity: RarityTier::Large,
                age_range: (4, 20),
                sound: "roaring",
            },
            Self::Elephant => SpeciesProfile {
                name: "Elephant",
                purchase_cost: 1200.0,
                feeding_cost: 50.0,
                maintenance_cost: 80.0,
                decay: DailyDecay { hunger: 15, happiness: 8, energy: 11 },
                habitat: HabitatType::Savanna,
                rarity: RarityTier::Flagship,
                age_range: (10, 60),
                sound: "trumpeting",
            },
        }
    }

    pub fn name(self) -> &'static str {
        self.profile().name
    }

    pub fn rarity(self) -> RarityTier {
        self.profile().rarity
    }

    pub fn preferred_habitat(self) -> HabitatType {
        self.profile().habitat
    }

    pub fn from_u8(val: u8) -> Option<Self> {
        match val {
            0 => Some(Self::Rabbit),
            1 => Some(Self::Tortoise),
            2 => Some(Self::Penguin),
            3 => Some(Self::Monkey),
            4 => Some(Self::Bear),
            5 => Some(Self::Lion),
            6 => Some(Self::Elephant),
            _ => None,
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowest purchase cost among the given species, or `None` if empty.
pub fn cheapest_of(species: impl IntoIterator<Item = Species>) -> Option<f64> {
    species
        .into_iter()
        .map(|s| s.profile().purchase_cost)
        .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_sorted_by_cost() {
        let costs: Vec<f64> = Species::ALL.iter().map(|s| s.profile().purchase_cost).collect();
        for pair in costs.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_heavier_animals_cost_more_to_keep() {
        let rabbit = Species::Rabbit.profile();
        let elephant = Species::Elephant.profile();
        assert!(elephant.feeding_cost > rabbit.feeding_cost);
        assert!(elephant.maintenance_cost > rabbit.maintenance_cost);
        assert!(elephant.decay.energy > rabbit.decay.energy);
    }

    #[test]
    fn test_preferred_habitats() {
        assert_eq!(Species::Rabbit.preferred_habitat(), HabitatType::Grassland);
        assert_eq!(Species::Tortoise.preferred_habitat(), HabitatType::Grassland);
        assert_eq!(Species::Penguin.preferred_habitat(), HabitatType::Arctic);
        assert_eq!(Species::Monkey.preferred_habitat(), HabitatType::Jungle);
        assert_eq!(Species::Bear.preferred_habitat(), HabitatType::Forest);
        assert_eq!(Species::Lion.preferred_habitat(), HabitatType::Savanna);
        assert_eq!(Species::Elephant.preferred_habitat(), HabitatType::Savanna);
    }

    #[test]
    fn test_rarity_bonus() {
        assert_eq!(Species::Rabbit.rarity().visitor_bonus(), 0);
        assert_eq!(Species::Monkey.rarity().visitor_bonus(), 2);
        assert_eq!(Species::Lion.rarity().visitor_bonus(), 4);
        assert_eq!(Species::Elephant.rarity().visitor_bonus(), 6);
    }

    #[test]
    fn test_from_u8_roundtrip() {
        for species in Species::ALL {
            assert_eq!(Species::from_u8(species as u8), Some(species));
        }
        assert_eq!(Species::from_u8(7), None);
    }

    #[test]
    fn test_cheapest_of() {
        assert_eq!(cheapest_of(Species::ALL), Some(150.0));
        assert_eq!(cheapest_of([Species::Monkey, Species::Penguin]), Some(400.0));
        assert_eq!(cheapest_of(Vec::<Species>::new()), None);
    }
}
