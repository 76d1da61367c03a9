//! The zookeeper's care actions.
//!
//! Each action validates its preconditions before touching anything, so a
//! rejected action leaves the zoo exactly as it was.

use serde::{Deserialize, Serialize};

use crate::animal::{Animal, AnimalId};
use crate::constants::care;
use crate::error::ZooError;
use crate::exhibit::ExhibitId;
use crate::zoo::Zoo;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keeper {
    name: String,
}

fn living(zoo: &Zoo, id: AnimalId) -> Result<&Animal, ZooError> {
    let animal = zoo.animal(id).ok_or(ZooError::UnknownAnimal(id))?;
    if !animal.is_alive() {
        return Err(ZooError::NotAlive);
    }
    Ok(animal)
}

fn ensure_funds(zoo: &Zoo, cost: f64) -> Result<(), ZooError> {
    if zoo.balance() < cost {
        return Err(ZooError::InsufficientFunds {
            needed: cost,
            available: zoo.balance(),
        });
    }
    Ok(())
}

fn ensure_energy(animal: &Animal, required: i32) -> Result<(), ZooError> {
    if animal.energy() < required {
        log::warn!("{} is too tired", animal.name());
        return Err(ZooError::TooTired {
            required,
            energy: animal.energy(),
        });
    }
    Ok(())
}

impl Keeper {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pay the species' feeding cost and give a standard portion.
    pub fn feed(&self, zoo: &mut Zoo, id: AnimalId) -> Result<(), ZooError> {
        let cost = living(zoo, id)?.feeding_cost();
        ensure_funds(zoo, cost)?;
        zoo.animal_mut(id)?.eat(care::FEED_AMOUNT)?;
        zoo.spend(cost)?;
        log::info!("{} fed {}", self.name, id);
        Ok(())
    }

    pub fn play(&self, zoo: &mut Zoo, id: AnimalId) -> Result<(), ZooError> {
        ensure_energy(living(zoo, id)?, care::PLAY_MIN_ENERGY)?;
        zoo.animal_mut(id)?.receive_play();
        log::info!("{} played with {}", self.name, id);
        Ok(())
    }

    pub fn exercise(&self, zoo: &mut Zoo, id: AnimalId) -> Result<(), ZooError> {
        ensure_energy(living(zoo, id)?, care::EXERCISE_MIN_ENERGY)?;
        zoo.animal_mut(id)?.receive_exercise();
        log::info!("{} exercised {}", self.name, id);
        Ok(())
    }

    /// Pay for a vet visit and restore some health.
    pub fn treat(&self, zoo: &mut Zoo, id: AnimalId) -> Result<(), ZooError> {
        living(zoo, id)?;
        ensure_funds(zoo, care::TREATMENT_COST)?;
        zoo.spend(care::TREATMENT_COST)?;
        zoo.animal_mut(id)?.receive_treatment();
        log::info!("{} treated {}", self.name, id);
        Ok(())
    }

    pub fn clean(&self, zoo: &mut Zoo, id: ExhibitId) -> Result<(), ZooError> {
        zoo.exhibit_mut(id)?.clean();
        log::info!("{} cleaned {}", self.name, id);
        Ok(())
    }
}
