//! Animal vitals, care reactions and nightly decay.
//!
//! All four vitals live in `[0, 100]`. Health, happiness and energy are
//! "higher is better"; hunger is "lower is better". Every mutation goes
//! through the clamped `update_*` setters, so no sequence of deltas can
//! push a vital out of range.

use serde::{Deserialize, Serialize};

use crate::constants::{care, vitals};
use crate::error::ZooError;
use crate::habitat::HabitatType;
use crate::species::{Species, SpeciesProfile};

/// Stable handle for an animal owned by a [`crate::zoo::Zoo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AnimalId(pub u32);

impl std::fmt::Display for AnimalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "A{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    name: String,
    species: Species,
    age: u32,
    health: i32,
    hunger: i32,
    happiness: i32,
    energy: i32,
}

fn clamp_stat(value: i32, delta: i32) -> i32 {
    value
        .saturating_add(delta)
        .clamp(vitals::MIN_STAT, vitals::MAX_STAT)
}

impl Animal {
    /// A freshly purchased animal: full health, happiness and energy, not hungry.
    pub fn new(name: impl Into<String>, species: Species, age: u32) -> Self {
        Self {
            name: name.into(),
            species,
            age,
            health: vitals::START_HEALTH,
            hunger: vitals::START_HUNGER,
            happiness: vitals::START_HAPPINESS,
            energy: vitals::START_ENERGY,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn profile(&self) -> SpeciesProfile {
        self.species.profile()
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn hunger(&self) -> i32 {
        self.hunger
    }

    pub fn happiness(&self) -> i32 {
        self.happiness
    }

    pub fn energy(&self) -> i32 {
        self.energy
    }

    pub fn purchase_cost(&self) -> f64 {
        self.profile().purchase_cost
    }

    pub fn feeding_cost(&self) -> f64 {
        self.profile().feeding_cost
    }

    pub fn maintenance_cost(&self) -> f64 {
        self.profile().maintenance_cost
    }

    pub fn preferred_habitat(&self) -> HabitatType {
        self.species.preferred_habitat()
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn is_sick(&self) -> bool {
        self.health < vitals::SICK_THRESHOLD
    }

    /// True if any vital is past the default critical threshold.
    pub fn needs_attention(&self) -> bool {
        self.needs_attention_at(vitals::CRITICAL_THRESHOLD)
    }

    /// True if health, happiness or energy is below `threshold`, or hunger is
    /// above `MAX_STAT - threshold`.
    fn needs_attention_at(&self, threshold: i32) -> bool {
        self.health < threshold
            || self.hunger > vitals::MAX_STAT - threshold
            || self.happiness < threshold
            || self.energy < threshold
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn update_health(&mut self, delta: i32) {
        self.health = clamp_stat(self.health, delta);
    }

    pub fn update_hunger(&mut self, delta: i32) {
        self.hunger = clamp_stat(self.hunger, delta);
    }

    pub fn update_happiness(&mut self, delta: i32) {
        self.happiness = clamp_stat(self.happiness, delta);
    }

    pub fn update_energy(&mut self, delta: i32) {
        self.energy = clamp_stat(self.energy, delta);
    }

    /// Reduce hunger by `amount` with a small happiness and energy bonus.
    /// Non-positive amounts are rejected without touching any vital.
    pub fn eat(&mut self, amount: i32) -> Result<(), ZooError> {
        if amount <= 0 {
            return Err(ZooError::InvalidAmount(amount));
        }
        self.update_hunger(-amount);
        self.update_happiness(vitals::EAT_HAPPINESS_BONUS);
        self.update_energy(vitals::EAT_ENERGY_BONUS);
        Ok(())
    }

    /// Nightly recovery.
    pub fn sleep(&mut self) {
        self.update_energy(vitals::SLEEP_ENERGY);
        self.update_health(vitals::SLEEP_HEALTH);
        self.update_hunger(vitals::SLEEP_HUNGER);
    }

    /// Species-specific nightly decay: hunger up, happiness and energy down.
    pub fn end_of_day_decay(&mut self) {
        let decay = self.profile().decay;
        self.update_hunger(decay.hunger);
        self.update_happiness(-decay.happiness);
        self.update_energy(-decay.energy);
    }

    pub(crate) fn receive_play(&mut self) {
        self.update_energy(care::PLAY_ENERGY);
        self.update_happiness(care::PLAY_HAPPINESS);
        self.update_hunger(care::PLAY_HUNGER);
    }

    pub(crate) fn receive_exercise(&mut self) {
        self.update_energy(care::EXERCISE_ENERGY);
        self.update_health(care::EXERCISE_HEALTH);
        self.update_happiness(care::EXERCISE_HAPPINESS);
        self.update_hunger(care::EXERCISE_HUNGER);
    }

    pub(crate) fn receive_treatment(&mut self) {
        self.update_health(care::TREATMENT_HEALTH);
    }

    /// Display line such as "Dumbo the Elephant is trumpeting!".
    pub fn sound(&self) -> String {
        format!("{} the {} is {}!", self.name, self.species, self.profile().sound)
    }
}
