//! Habitat types and the exhibit catalog.

use serde::{Deserialize, Serialize};

/// Habitat an exhibit provides. Animals are happier in their preferred one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum HabitatType {
    Grassland = 0,
    Forest = 1,
    Jungle = 2,
    Savanna = 3,
    Arctic = 4,
}

/// Purchase terms for an exhibit of a given habitat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HabitatProfile {
    pub name: &'static str,
    pub purchase_cost: f64,
    pub maintenance_cost: f64,
    /// Inclusive capacity range at purchase.
    pub capacity_range: (u32, u32),
}

impl HabitatType {
    pub const ALL: [HabitatType; 5] = [
        HabitatType::Grassland,
        HabitatType::Forest,
        HabitatType::Jungle,
        HabitatType::Savanna,
        HabitatType::Arctic,
    ];

    pub fn profile(self) -> HabitatProfile {
        match self {
            Self::Grassland => HabitatProfile {
                name: "Grassland",
                purchase_cost: 300.0,
                maintenance_cost: 15.0,
                capacity_range: (2, 3),
            },
            Self::Forest => HabitatProfile {
                name: "Forest",
                purchase_cost: 600.0,
                maintenance_cost: 35.0,
                capacity_range: (3, 4),
            },
            Self::Jungle => HabitatProfile {
                name: "Jungle",
                purchase_cost: 800.0,
                maintenance_cost: 45.0,
                capacity_range: (4, 6),
            },
            Self::Savanna => HabitatProfile {
                name: "Savanna",
                purchase_cost: 1000.0,
                maintenance_cost: 50.0,
                capacity_range: (3, 5),
            },
            Self::Arctic => HabitatProfile {
                name: "Arctic",
                purchase_cost: 1200.0,
                maintenance_cost: 60.0,
                capacity_range: (4, 5),
            },
        }
    }

    pub fn name(self) -> &'static str {
        self.profile().name
    }

    pub fn from_u8(val: u8) -> Option<Self> {
        match val {
            0 => Some(Self::Grassland),
            1 => Some(Self::Forest),
            2 => Some(Self::Jungle),
            3 => Some(Self::Savanna),
            4 => Some(Self::Arctic),
            _ => None,
        }
    }
}

impl std::fmt::Display for HabitatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Cost of the cheapest exhibit on the catalog.
pub fn cheapest_exhibit_cost() -> f64 {
    HabitatType::ALL
        .iter()
        .map(|h| h.profile().purchase_cost)
        .fold(f64::INFINITY, f64::min)
}
