//! Day cycle driver.
//!
//! [`Game`] wires the registry, the keeper, the mission board and the action
//! budget together. Every player operation goes through it so action points
//! are charged, daily tracking is recorded and immediate missions are
//! re-checked. [`Game::end_day`] runs the day-close sequence:
//!
//! 1. end-of-day mission check
//! 2. unwinnable check → game over
//! 3. advance gate → blocked
//! 4. end-of-day mission promotion
//! 5. settlement (welfare, deaths, cleanliness, books, day increment)
//! 6. bankruptcy / empty zoo → game over
//! 7. past the final day → final review, else next day's slate

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::actions::ActionBudget;
use crate::animal::AnimalId;
use crate::board::{MissionBoard, MissionCompletion};
use crate::config::{validate_config, ConfigError, GameConfig};
use crate::constants::game::LOW_FUNDS_WARNING;
use crate::economy::{self, DaySummary};
use crate::error::ZooError;
use crate::exhibit::ExhibitId;
use crate::generation;
use crate::habitat::HabitatType;
use crate::keeper::Keeper;
use crate::mission::Mission;
use crate::settlement::SettlementReport;
use crate::species::Species;
use crate::zoo::Zoo;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameOverReason {
    /// A required mission can no longer be afforded.
    MissionImpossible(String),
    Bankrupt,
    NoAnimalsLeft,
}

impl std::fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissionImpossible(m) => write!(f, "required mission failed: {}", m),
            Self::Bankrupt => f.write_str("went bankrupt"),
            Self::NoAnimalsLeft => f.write_str("no animals left"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RunStatus {
    Running,
    Over(GameOverReason),
    Completed,
}

/// Everything that happened when a day closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayReport {
    pub day: u32,
    /// The closed day's missions, as they stood at day close.
    pub missions: Vec<Mission>,
    /// End-of-day missions promoted at close.
    pub completed: Vec<MissionCompletion>,
    pub actions: Vec<String>,
    pub purchases: Vec<(String, f64)>,
    pub settlement: SettlementReport,
    /// State of the zoo the next morning.
    pub summary: DaySummary,
    pub low_funds: bool,
}

/// Performance tier of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ending {
    Perfect,
    Excellent,
    Good,
    Survival,
    Poor,
}

impl Ending {
    pub fn from_score(score: u32) -> Self {
        if score >= 9 {
            Self::Perfect
        } else if score >= 7 {
            Self::Excellent
        } else if score >= 5 {
            Self::Good
        } else if score >= 3 {
            Self::Survival
        } else {
            Self::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Perfect => "Perfect Ending",
            Self::Excellent => "Excellent Ending",
            Self::Good => "Good Ending",
            Self::Survival => "Survival Ending",
            Self::Poor => "Poor Ending",
        }
    }
}

/// Score out of 10 awarded when the last day closes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalReview {
    pub balance: f64,
    pub rating: f64,
    pub animals: usize,
    pub needing_attention: usize,
    pub finance_points: u32,
    pub rating_points: u32,
    pub collection_points: u32,
    pub welfare_points: u32,
    pub score: u32,
    pub ending: Ending,
}

fn finance_points(balance: f64) -> u32 {
    if balance >= 2000.0 {
        3
    } else if balance >= 1500.0 {
        2
    } else if balance >= 1000.0 {
        1
    } else {
        0
    }
}

fn rating_points(rating: f64) -> u32 {
    if rating >= 4.5 {
        3
    } else if rating >= 4.0 {
        2
    } else if rating >= 3.5 {
        1
    } else {
        0
    }
}

fn collection_points(animals: usize) -> u32 {
    match animals {
        n if n >= 6 => 2,
        n if n >= 4 => 1,
        _ => 0,
    }
}

fn welfare_points(needy: usize, animals: usize) -> u32 {
    if needy == 0 {
        2
    } else if (needy as f64) < animals as f64 * 0.5 {
        1
    } else {
        0
    }
}

impl FinalReview {
    pub fn assess(zoo: &Zoo) -> Self {
        let balance = zoo.balance();
        let rating = economy::zoo_rating(zoo);
        let animals = zoo.animal_count();
        let needing_attention = zoo.animals_needing_attention().len();

        let finance_points = finance_points(balance);
        let rating_points = rating_points(rating);
        let collection_points = collection_points(animals);
        let welfare_points = welfare_points(needing_attention, animals);
        let score = finance_points + rating_points + collection_points + welfare_points;

        Self {
            balance,
            rating,
            animals,
            needing_attention,
            finance_points,
            rating_points,
            collection_points,
            welfare_points,
            score,
            ending: Ending::from_score(score),
        }
    }
}

/// Result of trying to close the current day.
#[derive(Debug, Clone, PartialEq)]
pub enum DayOutcome {
    /// Required missions are still open; nothing else changed.
    Blocked { unmet: Vec<String> },
    GameOver(GameOverReason),
    Advanced(Box<DayReport>),
    Completed(FinalReview),
}

pub struct Game {
    config: GameConfig,
    keeper: Keeper,
    zoo: Zoo,
    board: MissionBoard,
    budget: ActionBudget,
    status: RunStatus,
    purchases: Vec<(String, f64)>,
    /// Immediate mission completions not yet collected by the caller.
    completions: Vec<MissionCompletion>,
    last_report: Option<DayReport>,
    /// Day that was being closed when the run ended.
    ended_on: Option<u32>,
    rng: StdRng,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, Vec<ConfigError>> {
        let errors = validate_config(&config);
        if !errors.is_empty() {
            return Err(errors);
        }
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let zoo = Zoo::new(config.zoo_name.clone(), config.starting_balance);
        let mut board = MissionBoard::new();
        board.install_day(&zoo);
        log::info!("{} opens with ${:.0}", zoo.name(), zoo.balance());
        Ok(Self {
            keeper: Keeper::new(config.keeper_name.clone()),
            budget: ActionBudget::new(config.base_action_points, config.max_action_points),
            config,
            zoo,
            board,
            status: RunStatus::Running,
            purchases: Vec::new(),
            completions: Vec::new(),
            last_report: None,
            ended_on: None,
            rng,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn zoo(&self) -> &Zoo {
        &self.zoo
    }

    pub fn keeper(&self) -> &Keeper {
        &self.keeper
    }

    pub fn board(&self) -> &MissionBoard {
        &self.board
    }

    pub fn budget(&self) -> &ActionBudget {
        &self.budget
    }

    pub fn status(&self) -> &RunStatus {
        &self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == RunStatus::Running
    }

    pub fn last_report(&self) -> Option<&DayReport> {
        self.last_report.as_ref()
    }

    pub fn ended_on(&self) -> Option<u32> {
        self.ended_on
    }

    /// Take the immediate mission completions recorded since the last call.
    pub fn drain_completions(&mut self) -> Vec<MissionCompletion> {
        std::mem::take(&mut self.completions)
    }

    fn ensure_running(&self) -> Result<(), ZooError> {
        if self.is_running() {
            Ok(())
        } else {
            Err(ZooError::RunOver)
        }
    }

    fn check_missions(&mut self) {
        let done = self.board.check_missions(&mut self.zoo, false);
        self.completions.extend(done);
    }

    fn after_roster_change(&mut self) {
        self.budget
            .recompute_max(self.zoo.animal_count(), self.zoo.exhibit_count());
        self.check_missions();
    }

    // ── Purchases and sales ─────────────────────────────────────────────

    pub fn purchase_animal(&mut self, species: Species, name: &str) -> Result<AnimalId, ZooError> {
        self.ensure_running()?;
        let animal = generation::generate_animal(species, name, &mut self.rng);
        let label = format!("{} the {}", animal.name(), species);
        let cost = animal.purchase_cost();
        let id = self.zoo.purchase_animal(animal)?;
        self.purchases.push((label, cost));
        self.after_roster_change();
        Ok(id)
    }

    pub fn sell_animal(&mut self, id: AnimalId) -> Result<f64, ZooError> {
        self.ensure_running()?;
        let refund = self.zoo.sell_animal(id)?;
        self.after_roster_change();
        Ok(refund)
    }

    pub fn purchase_exhibit(&mut self, habitat: HabitatType, name: &str) -> Result<ExhibitId, ZooError> {
        self.ensure_running()?;
        let exhibit = generation::generate_exhibit(habitat, name, &mut self.rng);
        let label = format!("{} ({} exhibit)", exhibit.name(), habitat);
        let cost = exhibit.purchase_cost();
        let id = self.zoo.purchase_exhibit(exhibit)?;
        self.purchases.push((label, cost));
        self.after_roster_change();
        Ok(id)
    }

    pub fn sell_exhibit(&mut self, id: ExhibitId) -> Result<f64, ZooError> {
        self.ensure_running()?;
        let refund = self.zoo.sell_exhibit(id)?;
        self.after_roster_change();
        Ok(refund)
    }

    // ── Placement and names ─────────────────────────────────────────────

    pub fn add_to_exhibit(&mut self, animal: AnimalId, exhibit: ExhibitId) -> Result<(), ZooError> {
        self.ensure_running()?;
        self.zoo.add_to_exhibit(animal, exhibit)?;
        self.check_missions();
        Ok(())
    }

    pub fn remove_from_exhibit(&mut self, animal: AnimalId, exhibit: ExhibitId) -> Result<(), ZooError> {
        self.ensure_running()?;
        self.zoo.remove_from_exhibit(animal, exhibit)?;
        self.check_missions();
        Ok(())
    }

    pub fn move_to_exhibit(&mut self, animal: AnimalId, to: ExhibitId) -> Result<(), ZooError> {
        self.ensure_running()?;
        self.zoo.move_to_exhibit(animal, to)?;
        self.check_missions();
        Ok(())
    }

    pub fn rename_animal(&mut self, id: AnimalId, name: &str) -> Result<(), ZooError> {
        self.ensure_running()?;
        self.zoo.rename_animal(id, name)
    }

    pub fn rename_exhibit(&mut self, id: ExhibitId, name: &str) -> Result<(), ZooError> {
        self.ensure_running()?;
        self.zoo.rename_exhibit(id, name)
    }

    // ── Care actions (one action point each) ────────────────────────────

    fn animal_name(&self, id: AnimalId) -> String {
        self.zoo
            .animal(id)
            .map(|a| a.name().to_string())
            .unwrap_or_else(|| id.to_string())
    }

    pub fn feed(&mut self, id: AnimalId) -> Result<(), ZooError> {
        self.ensure_running()?;
        self.budget.ensure_available()?;
        self.keeper.feed(&mut self.zoo, id)?;
        self.budget.use_point(format!("Fed {}", self.animal_name(id)))?;
        self.board.track_fed(id);
        self.check_missions();
        Ok(())
    }

    pub fn play(&mut self, id: AnimalId) -> Result<(), ZooError> {
        self.ensure_running()?;
        self.budget.ensure_available()?;
        self.keeper.play(&mut self.zoo, id)?;
        self.budget.use_point(format!("Played with {}", self.animal_name(id)))?;
        self.board.track_played();
        self.check_missions();
        Ok(())
    }

    pub fn exercise(&mut self, id: AnimalId) -> Result<(), ZooError> {
        self.ensure_running()?;
        self.budget.ensure_available()?;
        self.keeper.exercise(&mut self.zoo, id)?;
        self.budget.use_point(format!("Exercised {}", self.animal_name(id)))?;
        self.board.track_exercised();
        self.check_missions();
        Ok(())
    }

    pub fn treat(&mut self, id: AnimalId) -> Result<(), ZooError> {
        self.ensure_running()?;
        self.budget.ensure_available()?;
        self.keeper.treat(&mut self.zoo, id)?;
        self.budget.use_point(format!("Treated {}", self.animal_name(id)))?;
        self.check_missions();
        Ok(())
    }

    pub fn clean(&mut self, id: ExhibitId) -> Result<(), ZooError> {
        self.ensure_running()?;
        self.budget.ensure_available()?;
        self.keeper.clean(&mut self.zoo, id)?;
        let name = self
            .zoo
            .exhibit(id)
            .map(|e| e.name().to_string())
            .unwrap_or_else(|| id.to_string());
        self.budget.use_point(format!("Cleaned {}", name))?;
        self.board.track_cleaned(id);
        self.check_missions();
        Ok(())
    }

    // ── Day close ───────────────────────────────────────────────────────

    fn game_over(&mut self, day: u32, reason: GameOverReason) -> DayOutcome {
        log::info!("Game over on day {}: {}", day, reason);
        self.ended_on = Some(day);
        self.status = RunStatus::Over(reason.clone());
        DayOutcome::GameOver(reason)
    }

    pub fn end_day(&mut self) -> Result<DayOutcome, ZooError> {
        self.ensure_running()?;
        let day = self.zoo.day();

        let done = self.board.check_missions(&mut self.zoo, true);
        self.completions.extend(done);

        if let Some(mission) = self.board.find_unwinnable(&self.zoo, self.budget.remaining()) {
            let reason = GameOverReason::MissionImpossible(mission.description().to_string());
            return Ok(self.game_over(day, reason));
        }

        if !self.board.can_advance_day() {
            let unmet = self
                .board
                .missions()
                .iter()
                .filter(|m| m.is_required() && !m.is_satisfied())
                .map(|m| m.description().to_string())
                .collect();
            log::warn!("Day {} cannot close: required missions open", day);
            return Ok(DayOutcome::Blocked { unmet });
        }

        let completed = self.board.promote_end_of_day(&mut self.zoo);
        let missions = self.board.missions().to_vec();
        let actions = self.budget.log().to_vec();
        let purchases = std::mem::take(&mut self.purchases);
        self.board.reset_tracking();

        let settlement = self.zoo.settle_day();
        self.budget
            .recompute_max(self.zoo.animal_count(), self.zoo.exhibit_count());
        self.budget.reset();

        let report = DayReport {
            day,
            missions,
            completed,
            actions,
            purchases,
            settlement,
            summary: DaySummary::capture(&self.zoo),
            low_funds: self.zoo.balance() < LOW_FUNDS_WARNING,
        };
        self.last_report = Some(report.clone());

        let closed = report.settlement.day;
        if self.zoo.balance() <= 0.0 {
            return Ok(self.game_over(closed, GameOverReason::Bankrupt));
        }
        if self.zoo.animal_count() == 0 {
            return Ok(self.game_over(closed, GameOverReason::NoAnimalsLeft));
        }

        if self.zoo.day() > self.config.final_day {
            let review = FinalReview::assess(&self.zoo);
            log::info!(
                "Run complete: score {}/10 ({})",
                review.score,
                review.ending.label()
            );
            self.status = RunStatus::Completed;
            self.ended_on = Some(closed);
            return Ok(DayOutcome::Completed(review));
        }

        if report.low_funds {
            log::warn!("Low funds: ${:.0}", self.zoo.balance());
        }
        self.board.install_day(&self.zoo);
        self.check_missions();
        Ok(DayOutcome::Advanced(Box::new(report)))
    }
}
