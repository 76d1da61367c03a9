//! The zoo registry: owns every animal and exhibit, the balance and the day.
//!
//! Animals and exhibits live in id-keyed arenas. Placement is a single
//! `AnimalId -> ExhibitId` map; each exhibit's member list mirrors it. All
//! mutation of either side goes through this module so the two never
//! disagree. An animal missing from the placement map is homeless.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::animal::{Animal, AnimalId};
use crate::constants::economy;
use crate::error::ZooError;
use crate::exhibit::{Exhibit, ExhibitId};
use crate::species::Species;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zoo {
    name: String,
    day: u32,
    balance: f64,
    /// Mission rewards paid out over the whole run.
    bonus_earned: f64,
    next_animal_id: u32,
    next_exhibit_id: u32,
    animals: BTreeMap<AnimalId, Animal>,
    exhibits: BTreeMap<ExhibitId, Exhibit>,
    locations: BTreeMap<AnimalId, ExhibitId>,
}

impl Zoo {
    pub fn new(name: impl Into<String>, starting_balance: f64) -> Self {
        Self {
            name: name.into(),
            day: 1,
            balance: starting_balance,
            bonus_earned: 0.0,
            next_animal_id: 1,
            next_exhibit_id: 1,
            animals: BTreeMap::new(),
            exhibits: BTreeMap::new(),
            locations: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn bonus_earned(&self) -> f64 {
        self.bonus_earned
    }

    // ── Lookups ─────────────────────────────────────────────────────────

    pub fn animal(&self, id: AnimalId) -> Option<&Animal> {
        self.animals.get(&id)
    }

    pub(crate) fn animal_mut(&mut self, id: AnimalId) -> Result<&mut Animal, ZooError> {
        self.animals.get_mut(&id).ok_or(ZooError::UnknownAnimal(id))
    }

    pub fn exhibit(&self, id: ExhibitId) -> Option<&Exhibit> {
        self.exhibits.get(&id)
    }

    pub(crate) fn exhibit_mut(&mut self, id: ExhibitId) -> Result<&mut Exhibit, ZooError> {
        self.exhibits.get_mut(&id).ok_or(ZooError::UnknownExhibit(id))
    }

    /// All animals in purchase order.
    pub fn animals(&self) -> impl Iterator<Item = (AnimalId, &Animal)> {
        self.animals.iter().map(|(&id, a)| (id, a))
    }

    /// All exhibits in purchase order.
    pub fn exhibits(&self) -> impl Iterator<Item = (ExhibitId, &Exhibit)> {
        self.exhibits.iter().map(|(&id, e)| (id, e))
    }

    pub fn animal_ids(&self) -> Vec<AnimalId> {
        self.animals.keys().copied().collect()
    }

    pub fn exhibit_ids(&self) -> Vec<ExhibitId> {
        self.exhibits.keys().copied().collect()
    }

    pub fn animal_count(&self) -> usize {
        self.animals.len()
    }

    pub fn exhibit_count(&self) -> usize {
        self.exhibits.len()
    }

    /// Distinct species currently owned.
    pub fn species_owned(&self) -> BTreeSet<Species> {
        self.animals.values().map(|a| a.species()).collect()
    }

    pub fn species_count(&self) -> usize {
        self.species_owned().len()
    }

    pub fn owns_species(&self, species: Species) -> bool {
        self.animals.values().any(|a| a.species() == species)
    }

    pub fn animals_needing_attention(&self) -> Vec<AnimalId> {
        self.animals
            .iter()
            .filter(|(_, a)| a.needs_attention())
            .map(|(&id, _)| id)
            .collect()
    }

    pub fn sick_animals(&self) -> Vec<AnimalId> {
        self.animals
            .iter()
            .filter(|(_, a)| a.is_sick())
            .map(|(&id, _)| id)
            .collect()
    }

    pub fn homeless_animals(&self) -> Vec<AnimalId> {
        self.animals
            .keys()
            .filter(|id| !self.locations.contains_key(id))
            .copied()
            .collect()
    }

    /// Animals placed in an exhibit whose habitat they do not prefer.
    pub fn misplaced_animals(&self) -> Vec<AnimalId> {
        self.animals
            .iter()
            .filter(|(id, a)| {
                self.location_of(**id)
                    .and_then(|e| self.exhibits.get(&e))
                    .is_some_and(|e| e.habitat() != a.preferred_habitat())
            })
            .map(|(&id, _)| id)
            .collect()
    }

    pub fn exhibits_needing_cleaning(&self) -> Vec<ExhibitId> {
        self.exhibits
            .iter()
            .filter(|(_, e)| e.needs_cleaning())
            .map(|(&id, _)| id)
            .collect()
    }

    /// The exhibit an animal is placed in, if any.
    pub fn location_of(&self, animal: AnimalId) -> Option<ExhibitId> {
        self.locations.get(&animal).copied()
    }

    /// True if the animal is placed in an exhibit of its preferred habitat.
    pub fn in_preferred_habitat(&self, animal: AnimalId) -> bool {
        match (self.animals.get(&animal), self.location_of(animal)) {
            (Some(a), Some(e)) => self
                .exhibits
                .get(&e)
                .is_some_and(|ex| ex.habitat() == a.preferred_habitat()),
            _ => false,
        }
    }

    // ── Money ───────────────────────────────────────────────────────────

    /// Deduct `amount` if the balance covers it.
    pub fn spend(&mut self, amount: f64) -> Result<(), ZooError> {
        if self.balance < amount {
            return Err(ZooError::InsufficientFunds {
                needed: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }

    pub fn add_money(&mut self, amount: f64) {
        self.balance += amount;
    }

    /// Credit a mission reward and record it as bonus.
    pub fn earn_bonus(&mut self, amount: f64) {
        self.balance += amount;
        self.bonus_earned += amount;
    }

    // ── Purchases and sales ─────────────────────────────────────────────

    pub fn purchase_animal(&mut self, animal: Animal) -> Result<AnimalId, ZooError> {
        let cost = animal.purchase_cost();
        if let Err(e) = self.spend(cost) {
            log::warn!("Cannot afford {} the {} (${:.0})", animal.name(), animal.species(), cost);
            return Err(e);
        }
        let id = AnimalId(self.next_animal_id);
        self.next_animal_id += 1;
        log::info!("Purchased {} the {} for ${:.0}", animal.name(), animal.species(), cost);
        self.animals.insert(id, animal);
        Ok(id)
    }

    /// Sell an animal for half its purchase cost, removing it from its
    /// exhibit first. Returns the refund.
    pub fn sell_animal(&mut self, id: AnimalId) -> Result<f64, ZooError> {
        if !self.animals.contains_key(&id) {
            return Err(ZooError::UnknownAnimal(id));
        }
        self.detach(id);
        let animal = self.animals.remove(&id).ok_or(ZooError::UnknownAnimal(id))?;
        let refund = animal.purchase_cost() * economy::RESALE_FRACTION;
        self.balance += refund;
        log::info!("Sold {} the {} for ${:.0}", animal.name(), animal.species(), refund);
        Ok(refund)
    }

    pub fn purchase_exhibit(&mut self, exhibit: Exhibit) -> Result<ExhibitId, ZooError> {
        let cost = exhibit.purchase_cost();
        if let Err(e) = self.spend(cost) {
            log::warn!("Cannot afford exhibit {} (${:.0})", exhibit.name(), cost);
            return Err(e);
        }
        let id = ExhibitId(self.next_exhibit_id);
        self.next_exhibit_id += 1;
        log::info!("Purchased exhibit {} ({}) for ${:.0}", exhibit.name(), exhibit.habitat(), cost);
        self.exhibits.insert(id, exhibit);
        Ok(id)
    }

    /// Sell an exhibit for half its purchase cost. Its animals become homeless.
    pub fn sell_exhibit(&mut self, id: ExhibitId) -> Result<f64, ZooError> {
        let mut exhibit = self.exhibits.remove(&id).ok_or(ZooError::UnknownExhibit(id))?;
        for animal in exhibit.clear() {
            self.locations.remove(&animal);
        }
        let refund = exhibit.purchase_cost() * economy::RESALE_FRACTION;
        self.balance += refund;
        log::info!("Sold exhibit {} for ${:.0}", exhibit.name(), refund);
        Ok(refund)
    }

    pub fn rename_animal(&mut self, id: AnimalId, name: &str) -> Result<(), ZooError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ZooError::EmptyName);
        }
        self.animal_mut(id)?.set_name(name.to_string());
        Ok(())
    }

    pub fn rename_exhibit(&mut self, id: ExhibitId, name: &str) -> Result<(), ZooError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ZooError::EmptyName);
        }
        self.exhibit_mut(id)?.set_name(name.to_string());
        Ok(())
    }

    // ── Placement ───────────────────────────────────────────────────────

    /// Remove an animal from whatever exhibit holds it. No-op if homeless.
    fn detach(&mut self, animal: AnimalId) -> Option<ExhibitId> {
        let from = self.locations.remove(&animal)?;
        if let Some(exhibit) = self.exhibits.get_mut(&from) {
            // Membership mirrors `locations`, so this cannot miss.
            let _ = exhibit.remove(animal);
        }
        Some(from)
    }

    fn attach(&mut self, animal: AnimalId, to: ExhibitId) -> Result<(), ZooError> {
        self.exhibit_mut(to)?.add(animal)?;
        self.locations.insert(animal, to);
        Ok(())
    }

    fn check_known(&self, animal: AnimalId, exhibit: ExhibitId) -> Result<(), ZooError> {
        if !self.animals.contains_key(&animal) {
            return Err(ZooError::UnknownAnimal(animal));
        }
        if !self.exhibits.contains_key(&exhibit) {
            return Err(ZooError::UnknownExhibit(exhibit));
        }
        Ok(())
    }

    /// Place an animal in an exhibit, taking it out of any other exhibit
    /// first. Fails without side effects if the animal is already there or
    /// the exhibit is full.
    pub fn add_to_exhibit(&mut self, animal: AnimalId, exhibit: ExhibitId) -> Result<(), ZooError> {
        self.check_known(animal, exhibit)?;
        let target = &self.exhibits[&exhibit];
        if target.contains(animal) {
            return Err(ZooError::AlreadyInExhibit);
        }
        if !target.can_add() {
            log::warn!("Exhibit {} is at full capacity", target.name());
            return Err(ZooError::ExhibitFull);
        }
        self.detach(animal);
        self.attach(animal, exhibit)
    }

    pub fn remove_from_exhibit(
        &mut self,
        animal: AnimalId,
        exhibit: ExhibitId,
    ) -> Result<(), ZooError> {
        self.check_known(animal, exhibit)?;
        if self.location_of(animal) != Some(exhibit) {
            return Err(ZooError::NotInExhibit);
        }
        self.detach(animal);
        Ok(())
    }

    /// Move a placed animal to a different exhibit. Either the animal ends
    /// up in `to` only, or it stays where it was.
    pub fn move_to_exhibit(&mut self, animal: AnimalId, to: ExhibitId) -> Result<(), ZooError> {
        self.check_known(animal, to)?;
        let from = self.location_of(animal).ok_or(ZooError::NotPlaced)?;
        if from == to {
            return Err(ZooError::SameExhibit);
        }
        if !self.exhibits[&to].can_add() {
            return Err(ZooError::ExhibitFull);
        }
        self.relocate(animal, from, to)?;
        log::info!("Moved {} from {} to {}", animal, from, to);
        Ok(())
    }

    /// Detach from `from` and attach to `to`, reattaching to `from` if the
    /// second step fails.
    fn relocate(&mut self, animal: AnimalId, from: ExhibitId, to: ExhibitId) -> Result<(), ZooError> {
        self.detach(animal);
        let Err(e) = self.attach(animal, to) else {
            return Ok(());
        };
        if self.attach(animal, from).is_err() {
            log::error!("Could not return {} to {} after failed move", animal, from);
            return Err(ZooError::Stranded(animal));
        }
        Err(e)
    }

    // ── Day bookkeeping ─────────────────────────────────────────────────

    /// Remove every animal with health at zero, detaching it from its exhibit.
    /// Returns the removed animals.
    pub fn remove_dead_animals(&mut self) -> Vec<(AnimalId, Animal)> {
        let dead: Vec<AnimalId> = self
            .animals
            .iter()
            .filter(|(_, a)| !a.is_alive())
            .map(|(&id, _)| id)
            .collect();
        let mut removed = Vec::with_capacity(dead.len());
        for id in dead {
            self.detach(id);
            if let Some(animal) = self.animals.remove(&id) {
                log::info!("{} the {} has died", animal.name(), animal.species());
                removed.push((id, animal));
            }
        }
        removed
    }

    pub fn advance_day(&mut self) {
        self.day += 1;
    }

    pub(crate) fn exhibits_mut(&mut self) -> impl Iterator<Item = &mut Exhibit> {
        self.exhibits.values_mut()
    }

    /// Placement as seen from both sides agrees.
    pub fn placement_consistent(&self) -> bool {
        let forward = self.locations.iter().all(|(a, e)| {
            self.animals.contains_key(a) && self.exhibits.get(e).is_some_and(|ex| ex.contains(*a))
        });
        let backward = self.exhibits.iter().all(|(eid, ex)| {
            ex.len() <= ex.capacity() as usize
                && ex.members().iter().all(|a| self.locations.get(a) == Some(eid))
        });
        forward && backward
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habitat::HabitatType;

    fn rabbit(name: &str) -> Animal {
        Animal::new(name, Species::Rabbit, 3)
    }

    fn meadow(capacity: u32) -> Exhibit {
        Exhibit::new("Meadow", HabitatType::Grassland, capacity)
    }

    #[test]
    fn test_new_zoo() {
        let zoo = Zoo::new("SF Zoo", 5000.0);
        assert_eq!(zoo.name(), "SF Zoo");
        assert_eq!(zoo.day(), 1);
        assert!((zoo.balance() - 5000.0).abs() < 0.01);
        assert_eq!(zoo.animal_count(), 0);
        assert_eq!(zoo.exhibit_count(), 0);
    }

    #[test]
    fn test_purchase_animal_deducts_cost() {
        let mut zoo = Zoo::new("SF Zoo", 1000.0);
        let id = zoo.purchase_animal(rabbit("Judy")).unwrap();
        assert!((zoo.balance() - 850.0).abs() < 0.01);
        assert_eq!(zoo.animal(id).map(|a| a.name()), Some("Judy"));
        assert!(zoo.location_of(id).is_none());
    }

    #[test]
    fn test_purchase_animal_insufficient_funds() {
        let mut zoo = Zoo::new("SF Zoo", 100.0);
        let err = zoo.purchase_animal(rabbit("Judy")).unwrap_err();
        assert!(matches!(err, ZooError::InsufficientFunds { .. }));
        assert_eq!(zoo.animal_count(), 0);
        assert!((zoo.balance() - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_purchase_place_sell_example() {
        let mut zoo = Zoo::new("SF Zoo", 2000.0);
        let bear = zoo
            .purchase_animal(Animal::new("Winnie", Species::Bear, 8))
            .unwrap();
        let pen = zoo.purchase_exhibit(meadow(3)).unwrap();
        assert!((zoo.balance() - 700.0).abs() < 0.01);

        zoo.add_to_exhibit(bear, pen).unwrap();
        assert_eq!(zoo.exhibit(pen).unwrap().len(), 1);

        let refund = zoo.sell_animal(bear).unwrap();
        assert!((refund - 500.0).abs() < 0.01);
        assert!((zoo.balance() - 1200.0).abs() < 0.01);
        assert_eq!(zoo.exhibit(pen).unwrap().len(), 0);
        assert!(zoo.placement_consistent());
    }

    #[test]
    fn test_sell_unknown_animal() {
        let mut zoo = Zoo::new("SF Zoo", 1000.0);
        assert_eq!(zoo.sell_animal(AnimalId(42)), Err(ZooError::UnknownAnimal(AnimalId(42))));
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut zoo = Zoo::new("SF Zoo", 1000.0);
        let a = zoo.purchase_animal(rabbit("A")).unwrap();
        zoo.sell_animal(a).unwrap();
        let b = zoo.purchase_animal(rabbit("B")).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_sell_exhibit_makes_members_homeless() {
        let mut zoo = Zoo::new("SF Zoo", 2000.0);
        let a = zoo.purchase_animal(rabbit("A")).unwrap();
        let b = zoo.purchase_animal(rabbit("B")).unwrap();
        let pen = zoo.purchase_exhibit(meadow(3)).unwrap();
        zoo.add_to_exhibit(a, pen).unwrap();
        zoo.add_to_exhibit(b, pen).unwrap();

        let before = zoo.balance();
        let refund = zoo.sell_exhibit(pen).unwrap();
        assert!((refund - 150.0).abs() < 0.01);
        assert!((zoo.balance() - before - 150.0).abs() < 0.01);
        assert_eq!(zoo.homeless_animals(), vec![a, b]);
        assert!(zoo.placement_consistent());
    }

    #[test]
    fn test_add_to_full_exhibit_keeps_old_placement() {
        let mut zoo = Zoo::new("SF Zoo", 5000.0);
        let a = zoo.purchase_animal(rabbit("A")).unwrap();
        let b = zoo.purchase_animal(rabbit("B")).unwrap();
        let small = zoo.purchase_exhibit(meadow(1)).unwrap();
        let other = zoo.purchase_exhibit(meadow(2)).unwrap();
        zoo.add_to_exhibit(a, small).unwrap();
        zoo.add_to_exhibit(b, other).unwrap();

        assert_eq!(zoo.add_to_exhibit(b, small), Err(ZooError::ExhibitFull));
        assert_eq!(zoo.location_of(b), Some(other));
        assert!(zoo.placement_consistent());
    }

    #[test]
    fn test_add_to_same_exhibit_rejected() {
        let mut zoo = Zoo::new("SF Zoo", 5000.0);
        let a = zoo.purchase_animal(rabbit("A")).unwrap();
        let pen = zoo.purchase_exhibit(meadow(2)).unwrap();
        zoo.add_to_exhibit(a, pen).unwrap();
        assert_eq!(zoo.add_to_exhibit(a, pen), Err(ZooError::AlreadyInExhibit));
        assert_eq!(zoo.exhibit(pen).unwrap().len(), 1);
    }

    #[test]
    fn test_add_detaches_from_previous() {
        let mut zoo = Zoo::new("SF Zoo", 5000.0);
        let a = zoo.purchase_animal(rabbit("A")).unwrap();
        let first = zoo.purchase_exhibit(meadow(2)).unwrap();
        let second = zoo.purchase_exhibit(meadow(2)).unwrap();
        zoo.add_to_exhibit(a, first).unwrap();
        zoo.add_to_exhibit(a, second).unwrap();
        assert!(zoo.exhibit(first).unwrap().is_empty());
        assert_eq!(zoo.location_of(a), Some(second));
        assert!(zoo.placement_consistent());
    }

    #[test]
    fn test_remove_from_exhibit() {
        let mut zoo = Zoo::new("SF Zoo", 5000.0);
        let a = zoo.purchase_animal(rabbit("A")).unwrap();
        let pen = zoo.purchase_exhibit(meadow(2)).unwrap();
        let other = zoo.purchase_exhibit(meadow(2)).unwrap();
        assert_eq!(zoo.remove_from_exhibit(a, pen), Err(ZooError::NotInExhibit));
        zoo.add_to_exhibit(a, pen).unwrap();
        assert_eq!(zoo.remove_from_exhibit(a, other), Err(ZooError::NotInExhibit));
        zoo.remove_from_exhibit(a, pen).unwrap();
        assert_eq!(zoo.homeless_animals(), vec![a]);
    }

    #[test]
    fn test_move_to_exhibit() {
        let mut zoo = Zoo::new("SF Zoo", 5000.0);
        let a = zoo.purchase_animal(rabbit("A")).unwrap();
        let first = zoo.purchase_exhibit(meadow(2)).unwrap();
        let second = zoo.purchase_exhibit(meadow(2)).unwrap();
        zoo.add_to_exhibit(a, first).unwrap();
        zoo.move_to_exhibit(a, second).unwrap();
        assert_eq!(zoo.location_of(a), Some(second));
        assert!(zoo.exhibit(first).unwrap().is_empty());
        assert!(zoo.placement_consistent());
    }

    #[test]
    fn test_move_preconditions() {
        let mut zoo = Zoo::new("SF Zoo", 5000.0);
        let a = zoo.purchase_animal(rabbit("A")).unwrap();
        let b = zoo.purchase_animal(rabbit("B")).unwrap();
        let first = zoo.purchase_exhibit(meadow(2)).unwrap();
        let full = zoo.purchase_exhibit(meadow(1)).unwrap();

        assert_eq!(zoo.move_to_exhibit(a, first), Err(ZooError::NotPlaced));

        zoo.add_to_exhibit(a, first).unwrap();
        assert_eq!(zoo.move_to_exhibit(a, first), Err(ZooError::SameExhibit));

        zoo.add_to_exhibit(b, full).unwrap();
        assert_eq!(zoo.move_to_exhibit(a, full), Err(ZooError::ExhibitFull));
        assert_eq!(zoo.location_of(a), Some(first));
        assert_eq!(
            zoo.move_to_exhibit(a, ExhibitId(99)),
            Err(ZooError::UnknownExhibit(ExhibitId(99)))
        );
        assert_eq!(zoo.location_of(a), Some(first));
        assert!(zoo.placement_consistent());
    }

    #[test]
    fn test_relocate_rolls_back_failed_attach() {
        let mut zoo = Zoo::new("SF Zoo", 5000.0);
        let a = zoo.purchase_animal(rabbit("A")).unwrap();
        let b = zoo.purchase_animal(rabbit("B")).unwrap();
        let home = zoo.purchase_exhibit(meadow(2)).unwrap();
        let full = zoo.purchase_exhibit(meadow(1)).unwrap();
        zoo.add_to_exhibit(a, home).unwrap();
        zoo.add_to_exhibit(b, full).unwrap();

        assert_eq!(zoo.relocate(a, home, full), Err(ZooError::ExhibitFull));
        assert_eq!(zoo.location_of(a), Some(home));
        assert_eq!(zoo.exhibit(home).unwrap().members(), &[a]);
        assert!(zoo.placement_consistent());
    }

    #[test]
    fn test_relocate_reports_stranded_animal() {
        let mut zoo = Zoo::new("SF Zoo", 5000.0);
        let a = zoo.purchase_animal(rabbit("A")).unwrap();
        let b = zoo.purchase_animal(rabbit("B")).unwrap();
        let c = zoo.purchase_animal(rabbit("C")).unwrap();
        let home = zoo.purchase_exhibit(meadow(2)).unwrap();
        let full = zoo.purchase_exhibit(meadow(1)).unwrap();
        let crowded = zoo.purchase_exhibit(meadow(1)).unwrap();
        zoo.add_to_exhibit(a, home).unwrap();
        zoo.add_to_exhibit(b, full).unwrap();
        zoo.add_to_exhibit(c, crowded).unwrap();

        // Neither the destination nor the fallback has room.
        assert_eq!(zoo.relocate(a, crowded, full), Err(ZooError::Stranded(a)));
        assert_eq!(zoo.location_of(a), None);
    }

    #[test]
    fn test_remove_dead_animals() {
        let mut zoo = Zoo::new("SF Zoo", 5000.0);
        let a = zoo.purchase_animal(rabbit("A")).unwrap();
        let b = zoo.purchase_animal(rabbit("B")).unwrap();
        let pen = zoo.purchase_exhibit(meadow(2)).unwrap();
        zoo.add_to_exhibit(a, pen).unwrap();
        zoo.animal_mut(a).unwrap().update_health(-100);

        let dead = zoo.remove_dead_animals();
        assert_eq!(dead.len(), 1);
        assert_eq!(dead[0].0, a);
        assert_eq!(zoo.animal_ids(), vec![b]);
        assert!(zoo.exhibit(pen).unwrap().is_empty());
        assert!(zoo.placement_consistent());
    }

    #[test]
    fn test_spend_and_add_money() {
        let mut zoo = Zoo::new("SF Zoo", 100.0);
        assert!(zoo.spend(150.0).is_err());
        zoo.spend(40.0).unwrap();
        zoo.add_money(10.0);
        assert!((zoo.balance() - 70.0).abs() < 0.01);
        zoo.earn_bonus(100.0);
        assert!((zoo.balance() - 170.0).abs() < 0.01);
        assert!((zoo.bonus_earned() - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_species_queries() {
        let mut zoo = Zoo::new("SF Zoo", 5000.0);
        zoo.purchase_animal(rabbit("A")).unwrap();
        zoo.purchase_animal(rabbit("B")).unwrap();
        zoo.purchase_animal(Animal::new("Crush", Species::Tortoise, 30))
            .unwrap();
        assert_eq!(zoo.species_count(), 2);
        assert!(zoo.owns_species(Species::Tortoise));
        assert!(!zoo.owns_species(Species::Lion));
    }

    #[test]
    fn test_misplaced_and_preferred() {
        let mut zoo = Zoo::new("SF Zoo", 5000.0);
        let rabbit_id = zoo.purchase_animal(rabbit("A")).unwrap();
        let bear_id = zoo.purchase_animal(Animal::new("Winnie", Species::Bear, 8)).unwrap();
        let pen = zoo.purchase_exhibit(meadow(3)).unwrap();
        zoo.add_to_exhibit(rabbit_id, pen).unwrap();
        zoo.add_to_exhibit(bear_id, pen).unwrap();
        assert!(zoo.in_preferred_habitat(rabbit_id));
        assert!(!zoo.in_preferred_habitat(bear_id));
        assert_eq!(zoo.misplaced_animals(), vec![bear_id]);
    }

    #[test]
    fn test_rename() {
        let mut zoo = Zoo::new("SF Zoo", 5000.0);
        let a = zoo.purchase_animal(rabbit("A")).unwrap();
        let pen = zoo.purchase_exhibit(meadow(2)).unwrap();
        zoo.rename_animal(a, " Thumper ").unwrap();
        assert_eq!(zoo.animal(a).unwrap().name(), "Thumper");
        assert_eq!(zoo.rename_exhibit(pen, "   "), Err(ZooError::EmptyName));
        zoo.rename_exhibit(pen, "Burrow").unwrap();
        assert_eq!(zoo.exhibit(pen).unwrap().name(), "Burrow");
    }
}
