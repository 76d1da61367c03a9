//! Tuning constants: thresholds, weights, prices, wages.
//!
//! One consistent tuning is used throughout the engine. Per-species and
//! per-habitat numbers live in [`crate::species`] and [`crate::habitat`].

pub mod vitals {
    pub const MIN_STAT: i32 = 0;
    pub const MAX_STAT: i32 = 100;
    /// Health/happiness/energy below this, or hunger above `MAX_STAT - this`,
    /// means an animal needs attention.
    pub const CRITICAL_THRESHOLD: i32 = 20;
    /// Health below this counts as sick.
    pub const SICK_THRESHOLD: i32 = 50;
    /// Happiness above this earns a visitor bonus.
    pub const HAPPY_THRESHOLD: i32 = 80;

    // Starting vitals for a newly purchased animal
    pub const START_HEALTH: i32 = 100;
    pub const START_HUNGER: i32 = 0;
    pub const START_HAPPINESS: i32 = 100;
    pub const START_ENERGY: i32 = 100;

    pub const EAT_HAPPINESS_BONUS: i32 = 5;
    pub const EAT_ENERGY_BONUS: i32 = 5;

    pub const SLEEP_ENERGY: i32 = 15;
    pub const SLEEP_HEALTH: i32 = 5;
    pub const SLEEP_HUNGER: i32 = 5;
}

pub mod care {
    /// Food given per feeding action.
    pub const FEED_AMOUNT: i32 = 20;
    pub const TREATMENT_COST: f64 = 50.0;
    pub const TREATMENT_HEALTH: i32 = 30;

    pub const PLAY_MIN_ENERGY: i32 = 20;
    pub const PLAY_ENERGY: i32 = -10;
    pub const PLAY_HAPPINESS: i32 = 15;
    pub const PLAY_HUNGER: i32 = 5;

    pub const EXERCISE_MIN_ENERGY: i32 = 30;
    pub const EXERCISE_ENERGY: i32 = -20;
    pub const EXERCISE_HEALTH: i32 = 10;
    pub const EXERCISE_HAPPINESS: i32 = 10;
    pub const EXERCISE_HUNGER: i32 = 10;
}

pub mod exhibits {
    pub const MAX_CLEANLINESS: i32 = 100;
    /// Cleanliness below this means the exhibit needs cleaning.
    pub const DIRTY_THRESHOLD: i32 = 50;
    /// Cleanliness lost every night.
    pub const NIGHTLY_DECAY: i32 = 15;
}

pub mod welfare {
    pub const CORRECT_HABITAT_HAPPINESS: i32 = 3;
    pub const WRONG_HABITAT_HAPPINESS: i32 = -2;
    pub const HOMELESS_HAPPINESS: i32 = -15;
    pub const HOMELESS_HEALTH: i32 = -5;
}

pub mod economy {
    pub const TICKET_PRICE: f64 = 15.0;
    /// Base visitors drawn by each animal before the rating multiplier.
    pub const VISITORS_PER_ANIMAL: i64 = 5;
    pub const HAPPY_ANIMAL_VISITORS: i64 = 2;
    pub const NEEDY_ANIMAL_VISITORS: i64 = 3;
    pub const DIRTY_EXHIBIT_VISITORS: i64 = 2;

    pub const BASE_WAGES: f64 = 30.0;
    pub const WAGES_PER_ANIMAL: f64 = 8.0;
    pub const WAGES_PER_EXHIBIT: f64 = 5.0;

    /// A sold animal or exhibit refunds this fraction of its purchase cost.
    pub const RESALE_FRACTION: f64 = 0.5;
}

pub mod rating {
    pub const MAX_RATING: f64 = 5.0;
    pub const HAPPINESS_WEIGHT: f64 = 2.5;
    pub const HEALTH_WEIGHT: f64 = 1.5;
    pub const CLEANLINESS_WEIGHT: f64 = 0.75;
    /// Cleanliness score when the zoo has no exhibits.
    pub const NO_EXHIBIT_CLEANLINESS_SCORE: f64 = 0.5;
}

pub mod game {
    pub const DEFAULT_STARTING_BALANCE: f64 = 10_000.0;
    pub const FINAL_DAY: u32 = 10;
    pub const BASE_ACTION_POINTS: u32 = 3;
    pub const MAX_ACTION_POINTS: u32 = 20;
    /// Balance below which the day report carries a low-funds warning.
    pub const LOW_FUNDS_WARNING: f64 = 500.0;
    /// Rough per-animal cost of treatment plus a feeding, used by the
    /// unwinnable check.
    pub const CARE_ESTIMATE: f64 = 100.0;
}
