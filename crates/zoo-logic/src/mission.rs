//! Mission records, their predicate kinds and the per-day action tracking
//! the predicates read.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::animal::AnimalId;
use crate::economy;
use crate::exhibit::ExhibitId;
use crate::species::{RarityTier, Species};
use crate::zoo::Zoo;

/// Closed set of things a mission can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionKind {
    /// At least one animal is placed in an exhibit.
    AddAnimalToExhibit,
    OwnAnimals,
    /// Distinct species owned.
    OwnSpecies,
    OwnExhibits,
    /// Distinct animals fed today.
    FeedAnimals,
    PlayWithAnimal,
    ExerciseAnimal,
    /// Distinct exhibits cleaned today.
    CleanExhibits,
    NoAnimalsNeedAttention,
    NoSickAnimals,
    NoHomelessAnimals,
    /// Every animal is placed in its preferred habitat.
    PreferredHabitats,
    ExhibitsCleanlinessAtLeast,
    /// Projected balance, not current balance.
    BalanceAtLeast,
    RatingAtLeast,
    AttractVisitors,
    OwnElephant,
    /// A penguin or a monkey.
    OwnMediumAnimal,
    /// A bear, lion or elephant.
    OwnSpecialAnimal,
}

/// Player actions recorded since the day began.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyTracking {
    pub fed: BTreeSet<AnimalId>,
    pub cleaned: BTreeSet<ExhibitId>,
    pub played: bool,
    pub exercised: bool,
}

impl DailyTracking {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Integer parameter of a mission template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    Fixed(u32),
    /// The number of animals owned when the day's slate is installed.
    AllAnimals,
}

impl Target {
    pub fn resolve(self, animal_count: usize) -> u32 {
        match self {
            Self::Fixed(n) => n,
            Self::AllAnimals => animal_count as u32,
        }
    }
}

/// Static description of a mission, before it is bound to a day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissionTemplate {
    pub description: &'static str,
    pub kind: MissionKind,
    pub required: bool,
    pub end_of_day: bool,
    pub target: Target,
    /// Rating or balance threshold.
    pub threshold: f64,
    pub reward: f64,
}

impl MissionTemplate {
    pub const fn required(description: &'static str, kind: MissionKind) -> Self {
        Self {
            description,
            kind,
            required: true,
            end_of_day: false,
            target: Target::Fixed(0),
            threshold: 0.0,
            reward: 0.0,
        }
    }

    pub const fn optional(description: &'static str, kind: MissionKind, reward: f64) -> Self {
        Self {
            description,
            kind,
            required: false,
            end_of_day: false,
            target: Target::Fixed(0),
            threshold: 0.0,
            reward,
        }
    }

    pub const fn count(mut self, n: u32) -> Self {
        self.target = Target::Fixed(n);
        self
    }

    pub const fn all_animals(mut self) -> Self {
        self.target = Target::AllAnimals;
        self
    }

    pub const fn threshold(mut self, value: f64) -> Self {
        self.threshold = value;
        self
    }

    pub const fn end_of_day(mut self) -> Self {
        self.end_of_day = true;
        self
    }

    pub fn instantiate(&self, animal_count: usize) -> Mission {
        Mission {
            description: self.description.to_string(),
            kind: self.kind,
            required: self.required,
            end_of_day: self.end_of_day,
            completed: false,
            condition_met: false,
            count: self.target.resolve(animal_count),
            threshold: self.threshold,
            reward: self.reward,
        }
    }
}

/// One objective on today's board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    description: String,
    kind: MissionKind,
    required: bool,
    end_of_day: bool,
    completed: bool,
    /// For end-of-day missions: predicate held at the last check.
    condition_met: bool,
    count: u32,
    threshold: f64,
    reward: f64,
}

impl Mission {
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> MissionKind {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_end_of_day(&self) -> bool {
        self.end_of_day
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn condition_met(&self) -> bool {
        self.condition_met
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn reward(&self) -> f64 {
        self.reward
    }

    /// Completed, or (for end-of-day missions) currently holding.
    pub fn is_satisfied(&self) -> bool {
        if self.end_of_day {
            self.completed || self.condition_met
        } else {
            self.completed
        }
    }

    pub(crate) fn set_condition_met(&mut self, met: bool) {
        self.condition_met = met;
    }

    pub(crate) fn mark_completed(&mut self) {
        self.completed = true;
    }

    /// Evaluate this mission's predicate against the zoo and today's actions.
    pub fn predicate_holds(&self, zoo: &Zoo, tracking: &DailyTracking) -> bool {
        let n = self.count as usize;
        match self.kind {
            MissionKind::AddAnimalToExhibit => {
                zoo.animal_ids().iter().any(|&id| zoo.location_of(id).is_some())
            }
            MissionKind::OwnAnimals => zoo.animal_count() >= n,
            MissionKind::OwnSpecies => zoo.species_count() >= n,
            MissionKind::OwnExhibits => zoo.exhibit_count() >= n,
            MissionKind::FeedAnimals => tracking.fed.len() >= n,
            MissionKind::PlayWithAnimal => tracking.played,
            MissionKind::ExerciseAnimal => tracking.exercised,
            MissionKind::CleanExhibits => tracking.cleaned.len() >= n,
            MissionKind::NoAnimalsNeedAttention => zoo.animals_needing_attention().is_empty(),
            MissionKind::NoSickAnimals => zoo.sick_animals().is_empty(),
            MissionKind::NoHomelessAnimals => zoo.homeless_animals().is_empty(),
            MissionKind::PreferredHabitats => {
                zoo.animal_ids().iter().all(|&id| zoo.in_preferred_habitat(id))
            }
            MissionKind::ExhibitsCleanlinessAtLeast => zoo
                .exhibits()
                .all(|(_, e)| e.cleanliness() >= self.count as i32),
            MissionKind::BalanceAtLeast => economy::projected_balance(zoo) >= self.threshold,
            MissionKind::RatingAtLeast => economy::zoo_rating(zoo) >= self.threshold,
            MissionKind::AttractVisitors => economy::visitor_count(zoo) >= self.count as i64,
            MissionKind::OwnElephant => zoo.owns_species(Species::Elephant),
            MissionKind::OwnMediumAnimal => zoo
                .species_owned()
                .iter()
                .any(|s| s.rarity() == RarityTier::Medium),
            MissionKind::OwnSpecialAnimal => zoo
                .species_owned()
                .iter()
                .any(|s| s.rarity() >= RarityTier::Large),
        }
    }
}
