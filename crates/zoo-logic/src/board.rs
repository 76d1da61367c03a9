//! Mission board: today's slate, completion, rewards, advance gating.
//!
//! Immediate missions complete and pay the moment their predicate holds.
//! End-of-day missions only cache whether they currently hold; they are
//! promoted to completed by [`MissionBoard::promote_end_of_day`], which the
//! day-close sequence calls once.

use serde::{Deserialize, Serialize};

use crate::animal::AnimalId;
use crate::constants::game;
use crate::economy;
use crate::exhibit::ExhibitId;
use crate::habitat::cheapest_exhibit_cost;
use crate::mission::{DailyTracking, Mission, MissionKind};
use crate::schedule::missions_for_day;
use crate::species::{cheapest_of, RarityTier, Species};
use crate::zoo::Zoo;

/// A mission that was just completed and the reward it paid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionCompletion {
    pub description: String,
    pub reward: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MissionBoard {
    missions: Vec<Mission>,
    tracking: DailyTracking,
}

impl MissionBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the slate with the one scheduled for the zoo's current day.
    pub fn install_day(&mut self, zoo: &Zoo) {
        let animals = zoo.animal_count();
        self.missions = missions_for_day(zoo.day())
            .iter()
            .map(|t| t.instantiate(animals))
            .collect();
        log::info!("Installed {} missions for day {}", self.missions.len(), zoo.day());
    }

    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    pub fn tracking(&self) -> &DailyTracking {
        &self.tracking
    }

    // ── Daily tracking ──────────────────────────────────────────────────

    pub fn track_fed(&mut self, animal: AnimalId) {
        self.tracking.fed.insert(animal);
    }

    pub fn track_cleaned(&mut self, exhibit: ExhibitId) {
        self.tracking.cleaned.insert(exhibit);
    }

    pub fn track_played(&mut self) {
        self.tracking.played = true;
    }

    pub fn track_exercised(&mut self) {
        self.tracking.exercised = true;
    }

    pub fn reset_tracking(&mut self) {
        self.tracking.reset();
    }

    // ── Evaluation ──────────────────────────────────────────────────────

    /// Evaluate every open mission. End-of-day missions are skipped unless
    /// `end_of_day` is set, and even then only their condition cache moves.
    /// Returns the immediate missions completed by this call.
    pub fn check_missions(&mut self, zoo: &mut Zoo, end_of_day: bool) -> Vec<MissionCompletion> {
        let mut completed = Vec::new();
        for i in 0..self.missions.len() {
            let mission = &self.missions[i];
            let deferred = mission.is_end_of_day();
            if mission.is_completed() || (deferred && !end_of_day) {
                continue;
            }
            let holds = mission.predicate_holds(zoo, &self.tracking);
            if deferred {
                self.missions[i].set_condition_met(holds);
            } else if holds {
                completed.push(self.complete_mission(i, zoo));
            }
        }
        completed
    }

    fn complete_mission(&mut self, index: usize, zoo: &mut Zoo) -> MissionCompletion {
        let mission = &mut self.missions[index];
        mission.mark_completed();
        if mission.reward() > 0.0 {
            zoo.earn_bonus(mission.reward());
        }
        log::info!("Mission complete: {}", mission.description());
        MissionCompletion {
            description: mission.description().to_string(),
            reward: mission.reward(),
        }
    }

    /// Complete every end-of-day mission whose condition held at the last
    /// day-close check. Only the day-close sequence should call this.
    pub fn promote_end_of_day(&mut self, zoo: &mut Zoo) -> Vec<MissionCompletion> {
        let ready: Vec<usize> = self
            .missions
            .iter()
            .enumerate()
            .filter(|(_, m)| m.is_end_of_day() && !m.is_completed() && m.condition_met())
            .map(|(i, _)| i)
            .collect();
        ready
            .into_iter()
            .map(|i| self.complete_mission(i, zoo))
            .collect()
    }

    /// True iff every required mission is completed or, for end-of-day
    /// missions, currently holds. Optional missions never block.
    pub fn can_advance_day(&self) -> bool {
        self.missions
            .iter()
            .filter(|m| m.is_required())
            .all(|m| m.is_satisfied())
    }

    /// First required, unfinished mission that can no longer be afforded.
    ///
    /// Lower-bound estimate only: kinds without a cost model are never
    /// reported.
    pub fn find_unwinnable(&self, zoo: &Zoo, action_points: u32) -> Option<&Mission> {
        self.missions
            .iter()
            .filter(|m| m.is_required() && !m.is_completed())
            .find(|m| mission_unaffordable(m, zoo, action_points))
    }

    pub fn check_missions_impossible(&self, zoo: &Zoo, action_points: u32) -> bool {
        self.find_unwinnable(zoo, action_points).is_some()
    }

    /// Short status suffix for display, e.g. `[2/3]` or `[1 homeless]`.
    pub fn progress(&self, mission: &Mission, zoo: &Zoo) -> String {
        mission_progress(mission, zoo, &self.tracking)
    }
}

/// Cheapest way to add `missing` new species to the zoo.
fn cost_of_new_species(zoo: &Zoo, missing: usize) -> f64 {
    let owned = zoo.species_owned();
    let mut unowned: Vec<f64> = Species::ALL
        .iter()
        .filter(|s| !owned.contains(s))
        .map(|s| s.profile().purchase_cost)
        .collect();
    unowned.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    if missing > unowned.len() {
        return f64::INFINITY;
    }
    unowned.iter().take(missing).sum()
}

fn mission_unaffordable(mission: &Mission, zoo: &Zoo, action_points: u32) -> bool {
    let balance = zoo.balance();
    let cheapest_animal = cheapest_of(Species::ALL).unwrap_or(0.0);
    let cheapest_exhibit = cheapest_exhibit_cost();
    let target = mission.count() as usize;

    match mission.kind() {
        MissionKind::AddAnimalToExhibit => {
            let mut needed = 0.0;
            if zoo.animal_count() == 0 {
                needed += cheapest_animal;
            }
            if zoo.exhibit_count() == 0 {
                needed += cheapest_exhibit;
            }
            balance < needed
        }
        MissionKind::OwnAnimals => {
            let missing = target.saturating_sub(zoo.animal_count());
            balance < missing as f64 * cheapest_animal
        }
        MissionKind::OwnSpecies => {
            let missing = target.saturating_sub(zoo.species_count());
            balance < cost_of_new_species(zoo, missing)
        }
        MissionKind::OwnExhibits => {
            let missing = target.saturating_sub(zoo.exhibit_count());
            balance < missing as f64 * cheapest_exhibit
        }
        MissionKind::NoAnimalsNeedAttention => {
            let needy = zoo.animals_needing_attention().len();
            action_points == 0 && balance < needy as f64 * game::CARE_ESTIMATE
        }
        MissionKind::NoSickAnimals => {
            let sick = zoo.sick_animals().len();
            action_points == 0 && balance < sick as f64 * game::CARE_ESTIMATE
        }
        MissionKind::OwnMediumAnimal => {
            let owns = zoo
                .species_owned()
                .iter()
                .any(|s| s.rarity() == RarityTier::Medium);
            let cheapest_medium = cheapest_of(
                Species::ALL
                    .into_iter()
                    .filter(|s| s.rarity() == RarityTier::Medium),
            )
            .unwrap_or(0.0);
            !owns && balance < cheapest_medium
        }
        _ => false,
    }
}

fn mission_progress(mission: &Mission, zoo: &Zoo, tracking: &DailyTracking) -> String {
    let target = mission.count();
    match mission.kind() {
        MissionKind::OwnAnimals => format!("[{}/{}]", zoo.animal_count(), target),
        MissionKind::OwnExhibits => format!("[{}/{}]", zoo.exhibit_count(), target),
        MissionKind::OwnSpecies => format!("[{}/{}]", zoo.species_count(), target),
        MissionKind::FeedAnimals if tracking.fed.len() < target as usize => {
            format!("[{}/{} fed]", tracking.fed.len(), target)
        }
        MissionKind::CleanExhibits => format!("[{}/{} cleaned]", tracking.cleaned.len(), target),
        MissionKind::NoAnimalsNeedAttention => match zoo.animals_needing_attention().len() {
            0 => String::new(),
            n => format!("[{}]", n),
        },
        MissionKind::NoSickAnimals => format!("[{} sick]", zoo.sick_animals().len()),
        MissionKind::NoHomelessAnimals => format!("[{} homeless]", zoo.homeless_animals().len()),
        MissionKind::PreferredHabitats => match zoo.misplaced_animals().len() {
            0 => String::new(),
            n => format!("[{} wrong habitat]", n),
        },
        MissionKind::ExhibitsCleanlinessAtLeast => match zoo.exhibits_needing_cleaning().len() {
            0 => String::new(),
            n => format!("[{} dirty]", n),
        },
        MissionKind::BalanceAtLeast => {
            format!("[${:.0}/${:.0}]", zoo.balance(), mission.threshold())
        }
        MissionKind::RatingAtLeast => format!("[{:.1}/5.0]", economy::zoo_rating(zoo)),
        MissionKind::AttractVisitors => {
            format!("[{}/{} visitors]", economy::visitor_count(zoo), target)
        }
        _ => String::new(),
    }
}
