//! Day-close settlement: nightly welfare, deaths, cleanliness decay, books.
//!
//! Order per animal: species decay → habitat adjustment → welfare health
//! penalties → sleep. Then dead animals are removed, exhibits get dirtier,
//! revenue and expenses are settled and the day counter moves on.

use serde::{Deserialize, Serialize};

use crate::animal::{Animal, AnimalId};
use crate::constants::welfare;
use crate::economy;
use crate::zoo::Zoo;

/// Health lost tonight from hunger.
pub fn hunger_penalty(hunger: i32) -> i32 {
    if hunger >= 90 {
        -30
    } else if hunger >= 75 {
        -20
    } else if hunger >= 60 {
        -15
    } else if hunger >= 45 {
        -5
    } else {
        0
    }
}

/// Health lost tonight from unhappiness.
pub fn happiness_penalty(happiness: i32) -> i32 {
    if happiness < 20 {
        -15
    } else if happiness < 40 {
        -5
    } else if happiness < 60 {
        -2
    } else {
        0
    }
}

/// Health lost tonight from exhaustion.
pub fn energy_penalty(energy: i32) -> i32 {
    if energy < 20 {
        -10
    } else if energy < 40 {
        -5
    } else {
        0
    }
}

/// Sum of the three penalty categories; each contributes independently.
pub fn welfare_penalty(animal: &Animal) -> i32 {
    hunger_penalty(animal.hunger())
        + happiness_penalty(animal.happiness())
        + energy_penalty(animal.energy())
}

/// Where an animal spends the night, relative to its preferred habitat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lodging {
    Preferred,
    Wrong,
    Homeless,
}

fn apply_habitat_adjustment(animal: &mut Animal, lodging: Lodging) {
    match lodging {
        Lodging::Preferred => animal.update_happiness(welfare::CORRECT_HABITAT_HAPPINESS),
        Lodging::Wrong => animal.update_happiness(welfare::WRONG_HABITAT_HAPPINESS),
        Lodging::Homeless => {
            animal.update_happiness(welfare::HOMELESS_HAPPINESS);
            animal.update_health(welfare::HOMELESS_HEALTH);
        }
    }
}

/// One animal's full night: decay, habitat, penalties, sleep. Deaths are
/// judged afterwards by `Zoo::settle_day`.
pub fn apply_night(animal: &mut Animal, lodging: Lodging) {
    animal.end_of_day_decay();
    apply_habitat_adjustment(animal, lodging);
    animal.update_health(welfare_penalty(animal));
    animal.sleep();
}

/// What happened overnight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementReport {
    /// Day that was closed.
    pub day: u32,
    /// `(id, name, species name)` of animals that died overnight.
    pub deaths: Vec<(AnimalId, String, String)>,
    pub visitors: i64,
    pub revenue: f64,
    pub expenses: f64,
    pub balance_after: f64,
}

impl SettlementReport {
    pub fn net(&self) -> f64 {
        self.revenue - self.expenses
    }
}

impl Zoo {
    fn lodging_of(&self, id: AnimalId) -> Lodging {
        match self.location_of(id) {
            None => Lodging::Homeless,
            Some(_) if self.in_preferred_habitat(id) => Lodging::Preferred,
            Some(_) => Lodging::Wrong,
        }
    }

    /// Run the nightly welfare pass over every animal without touching
    /// exhibits or money.
    pub fn apply_nightly_welfare(&mut self) {
        for id in self.animal_ids() {
            let lodging = self.lodging_of(id);
            let Ok(animal) = self.animal_mut(id) else {
                continue;
            };
            apply_night(animal, lodging);
            log::debug!(
                "{} {}: health {} hunger {} happiness {} energy {}",
                id,
                animal.name(),
                animal.health(),
                animal.hunger(),
                animal.happiness(),
                animal.energy()
            );
        }
    }

    /// Close the current day and open the next one.
    pub fn settle_day(&mut self) -> SettlementReport {
        let day = self.day();
        self.apply_nightly_welfare();

        let deaths = self
            .remove_dead_animals()
            .into_iter()
            .map(|(id, a)| (id, a.name().to_string(), a.species().name().to_string()))
            .collect();

        for exhibit in self.exhibits_mut() {
            exhibit.degrade();
        }

        let visitors = economy::visitor_count(self);
        let revenue = economy::revenue_for(visitors);
        let expenses = economy::daily_expenses(self);
        self.add_money(revenue - expenses);
        self.advance_day();

        log::info!(
            "Day {} settled: {} visitors, revenue ${:.0}, expenses ${:.0}, balance ${:.0}",
            day,
            visitors,
            revenue,
            expenses,
            self.balance()
        );

        SettlementReport {
            day,
            deaths,
            visitors,
            revenue,
            expenses,
            balance_after: self.balance(),
        }
    }
}
