//! Exhibits: capacity-bounded membership and cleanliness.
//!
//! An exhibit records which animals are in it by [`AnimalId`]; it never owns
//! them. The [`crate::zoo::Zoo`] keeps the authoritative placement map and
//! is the only caller that should mutate membership, so the two stay in sync.

use serde::{Deserialize, Serialize};

use crate::animal::AnimalId;
use crate::constants::exhibits;
use crate::error::ZooError;
use crate::habitat::{HabitatProfile, HabitatType};

/// Stable handle for an exhibit owned by a [`crate::zoo::Zoo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ExhibitId(pub u32);

impl std::fmt::Display for ExhibitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "E{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exhibit {
    name: String,
    habitat: HabitatType,
    capacity: u32,
    cleanliness: i32,
    members: Vec<AnimalId>,
}

impl Exhibit {
    /// A spotless, empty exhibit. Costs come from the habitat catalog.
    pub fn new(name: impl Into<String>, habitat: HabitatType, capacity: u32) -> Self {
        Self {
            name: name.into(),
            habitat,
            capacity,
            cleanliness: exhibits::MAX_CLEANLINESS,
            members: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn habitat(&self) -> HabitatType {
        self.habitat
    }

    pub fn profile(&self) -> HabitatProfile {
        self.habitat.profile()
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn cleanliness(&self) -> i32 {
        self.cleanliness
    }

    pub fn purchase_cost(&self) -> f64 {
        self.profile().purchase_cost
    }

    pub fn maintenance_cost(&self) -> f64 {
        self.profile().maintenance_cost
    }

    /// Members in insertion order.
    pub fn members(&self) -> &[AnimalId] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn can_add(&self) -> bool {
        self.members.len() < self.capacity as usize
    }

    pub fn contains(&self, animal: AnimalId) -> bool {
        self.members.contains(&animal)
    }

    pub fn needs_cleaning(&self) -> bool {
        self.cleanliness < exhibits::DIRTY_THRESHOLD
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn add(&mut self, animal: AnimalId) -> Result<(), ZooError> {
        if self.contains(animal) {
            return Err(ZooError::AlreadyInExhibit);
        }
        if !self.can_add() {
            return Err(ZooError::ExhibitFull);
        }
        self.members.push(animal);
        Ok(())
    }

    pub(crate) fn remove(&mut self, animal: AnimalId) -> Result<(), ZooError> {
        let pos = self
            .members
            .iter()
            .position(|&m| m == animal)
            .ok_or(ZooError::NotInExhibit)?;
        self.members.remove(pos);
        Ok(())
    }

    pub(crate) fn clear(&mut self) -> Vec<AnimalId> {
        std::mem::take(&mut self.members)
    }

    pub fn update_cleanliness(&mut self, delta: i32) {
        self.cleanliness = self
            .cleanliness
            .saturating_add(delta)
            .clamp(0, exhibits::MAX_CLEANLINESS);
    }

    pub fn clean(&mut self) {
        self.cleanliness = exhibits::MAX_CLEANLINESS;
    }

    /// Nightly loss of cleanliness, floored at zero.
    pub fn degrade(&mut self) {
        self.update_cleanliness(-exhibits::NIGHTLY_DECAY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meadow(capacity: u32) -> Exhibit {
        Exhibit::new("Meadow", HabitatType::Grassland, capacity)
    }

    #[test]
    fn test_new_exhibit() {
        let e = meadow(2);
        assert_eq!(e.cleanliness(), 100);
        assert!(e.is_empty());
        assert!(e.can_add());
        assert!((e.purchase_cost() - 300.0).abs() < 0.01);
        assert!((e.maintenance_cost() - 15.0).abs() < 0.01);
    }

    #[test]
    fn test_add_until_full() {
        let mut e = meadow(2);
        assert!(e.add(AnimalId(1)).is_ok());
        assert!(e.add(AnimalId(2)).is_ok());
        assert!(!e.can_add());
        assert_eq!(e.add(AnimalId(3)), Err(ZooError::ExhibitFull));
        assert_eq!(e.len(), 2);
    }

    #[test]
    fn test_add_duplicate_rejected() {
        let mut e = meadow(3);
        e.add(AnimalId(1)).unwrap();
        assert_eq!(e.add(AnimalId(1)), Err(ZooError::AlreadyInExhibit));
        assert_eq!(e.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut e = meadow(3);
        e.add(AnimalId(1)).unwrap();
        e.add(AnimalId(2)).unwrap();
        e.remove(AnimalId(1)).unwrap();
        assert_eq!(e.members(), &[AnimalId(2)]);
        assert_eq!(e.remove(AnimalId(1)), Err(ZooError::NotInExhibit));
    }

    #[test]
    fn test_zero_capacity_never_accepts() {
        let mut e = meadow(0);
        assert_eq!(e.add(AnimalId(1)), Err(ZooError::ExhibitFull));
    }

    #[test]
    fn test_degrade_and_clean() {
        let mut e = meadow(2);
        e.degrade();
        assert_eq!(e.cleanliness(), 85);
        for _ in 0..10 {
            e.degrade();
        }
        assert_eq!(e.cleanliness(), 0);
        assert!(e.needs_cleaning());
        e.clean();
        assert_eq!(e.cleanliness(), 100);
        assert!(!e.needs_cleaning());
    }

    #[test]
    fn test_needs_cleaning_threshold() {
        let mut e = meadow(2);
        e.update_cleanliness(-50);
        assert!(!e.needs_cleaning());
        e.update_cleanliness(-1);
        assert!(e.needs_cleaning());
        e.update_cleanliness(500);
        assert_eq!(e.cleanliness(), 100);
    }
}
