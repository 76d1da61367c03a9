//! Pure economy logic: visitors, revenue, expenses, zoo rating.
//!
//! Everything here is a read-only function of the current [`Zoo`]. Settlement
//! calls these after nightly decay so visitors reflect the animals as they
//! wake up the next morning.

use serde::{Deserialize, Serialize};

use crate::constants::{economy, exhibits, rating, vitals};
use crate::zoo::Zoo;

/// Visitor multiplier for a given zoo rating.
pub fn rating_multiplier(rating: f64) -> f64 {
    if rating >= 4.0 {
        2.0
    } else if rating >= 3.5 {
        1.5
    } else if rating >= 3.0 {
        1.0
    } else if rating >= 2.5 {
        0.7
    } else if rating >= 2.0 {
        0.4
    } else {
        0.2
    }
}

/// Small rating bump for a healthy projected balance.
pub fn financial_bonus(balance: f64) -> f64 {
    if balance > 3000.0 {
        0.25
    } else if balance > 1500.0 {
        0.15
    } else if balance > 500.0 {
        0.05
    } else {
        0.0
    }
}

/// Human-readable band for a rating.
pub fn rating_label(rating: f64) -> &'static str {
    if rating >= 4.5 {
        "Outstanding"
    } else if rating >= 4.0 {
        "Excellent"
    } else if rating >= 3.5 {
        "Great"
    } else if rating >= 3.0 {
        "Good"
    } else if rating >= 2.5 {
        "Poor"
    } else if rating >= 2.0 {
        "Bad"
    } else {
        "Terrible"
    }
}

/// Each weighted term of the zoo rating together with the averages behind it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingBreakdown {
    pub avg_happiness: f64,
    pub avg_health: f64,
    /// `None` when the zoo has no exhibits.
    pub avg_cleanliness: Option<f64>,
    pub happiness_score: f64,
    pub health_score: f64,
    pub cleanliness_score: f64,
    pub financial_score: f64,
    pub total: f64,
}

pub fn rating_breakdown(zoo: &Zoo) -> RatingBreakdown {
    let n = zoo.animal_count();
    let (avg_happiness, avg_health) = if n == 0 {
        (0.0, 0.0)
    } else {
        let (happy, health) = zoo.animals().fold((0i64, 0i64), |(h, hp), (_, a)| {
            (h + a.happiness() as i64, hp + a.health() as i64)
        });
        (happy as f64 / n as f64, health as f64 / n as f64)
    };

    let avg_cleanliness = if zoo.exhibit_count() == 0 {
        None
    } else {
        let total: i64 = zoo.exhibits().map(|(_, e)| e.cleanliness() as i64).sum();
        Some(total as f64 / zoo.exhibit_count() as f64)
    };

    let max_stat = vitals::MAX_STAT as f64;
    let happiness_score = avg_happiness / max_stat * rating::HAPPINESS_WEIGHT;
    let health_score = avg_health / max_stat * rating::HEALTH_WEIGHT;
    let cleanliness_score = match avg_cleanliness {
        Some(c) => c / exhibits::MAX_CLEANLINESS as f64 * rating::CLEANLINESS_WEIGHT,
        None => rating::NO_EXHIBIT_CLEANLINESS_SCORE,
    };
    let financial_score = financial_bonus(projected_balance(zoo));
    let total = (happiness_score + health_score + cleanliness_score + financial_score)
        .clamp(0.0, rating::MAX_RATING);

    RatingBreakdown {
        avg_happiness,
        avg_health,
        avg_cleanliness,
        happiness_score,
        health_score,
        cleanliness_score,
        financial_score,
        total,
    }
}

/// Zoo rating in `[0, 5]`.
pub fn zoo_rating(zoo: &Zoo) -> f64 {
    rating_breakdown(zoo).total
}

/// Visitors drawn today, never negative.
pub fn visitor_count(zoo: &Zoo) -> i64 {
    let animals = zoo.animal_count() as i64;
    let scaled = (animals * economy::VISITORS_PER_ANIMAL) as f64 * rating_multiplier(zoo_rating(zoo));

    let diversity = zoo.species_count() as i64;
    let rarity: i64 = zoo
        .animals()
        .map(|(_, a)| a.species().rarity().visitor_bonus())
        .sum();
    let happy = zoo
        .animals()
        .filter(|(_, a)| a.happiness() > vitals::HAPPY_THRESHOLD)
        .count() as i64;
    let needy = zoo.animals_needing_attention().len() as i64;
    let dirty = zoo.exhibits_needing_cleaning().len() as i64;

    let total = scaled.floor() as i64
        + diversity
        + rarity
        + happy * economy::HAPPY_ANIMAL_VISITORS
        - needy * economy::NEEDY_ANIMAL_VISITORS
        - dirty * economy::DIRTY_EXHIBIT_VISITORS;
    total.max(0)
}

pub fn revenue_for(visitors: i64) -> f64 {
    visitors as f64 * economy::TICKET_PRICE
}

/// Staff wages: a base plus an increment per animal and per exhibit.
pub fn staff_wages(zoo: &Zoo) -> f64 {
    economy::BASE_WAGES
        + economy::WAGES_PER_ANIMAL * zoo.animal_count() as f64
        + economy::WAGES_PER_EXHIBIT * zoo.exhibit_count() as f64
}

pub fn daily_expenses(zoo: &Zoo) -> f64 {
    let animals: f64 = zoo.animals().map(|(_, a)| a.maintenance_cost()).sum();
    let exhibits: f64 = zoo.exhibits().map(|(_, e)| e.maintenance_cost()).sum();
    animals + exhibits + staff_wages(zoo)
}

/// Balance after tonight's settlement, estimated without the rating
/// multiplier. Balance missions and the rating's financial term read this.
pub fn projected_balance(zoo: &Zoo) -> f64 {
    let estimate = zoo.animal_count() as i64 * economy::VISITORS_PER_ANIMAL;
    zoo.balance() + revenue_for(estimate) - daily_expenses(zoo)
}

/// Snapshot of the zoo's condition for the end-of-day report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    pub day: u32,
    pub animals: usize,
    pub exhibits: usize,
    pub sick: usize,
    pub hungry: usize,
    pub unhappy: usize,
    pub tired: usize,
    pub needing_attention: usize,
    pub homeless: usize,
    pub dirty_exhibits: usize,
    pub visitors: i64,
    pub revenue: f64,
    pub expenses: f64,
    pub net: f64,
    pub bonus_earned: f64,
    pub balance: f64,
    pub rating: f64,
}

impl DaySummary {
    pub fn capture(zoo: &Zoo) -> Self {
        let mid = vitals::SICK_THRESHOLD;
        let count = |pred: &dyn Fn(&crate::animal::Animal) -> bool| {
            zoo.animals().filter(|(_, a)| pred(a)).count()
        };
        let visitors = visitor_count(zoo);
        let revenue = revenue_for(visitors);
        let expenses = daily_expenses(zoo);
        Self {
            day: zoo.day(),
            animals: zoo.animal_count(),
            exhibits: zoo.exhibit_count(),
            sick: count(&|a| a.is_sick()),
            hungry: count(&|a| a.hunger() > mid),
            unhappy: count(&|a| a.happiness() < mid),
            tired: count(&|a| a.energy() < mid),
            needing_attention: zoo.animals_needing_attention().len(),
            homeless: zoo.homeless_animals().len(),
            dirty_exhibits: zoo.exhibits_needing_cleaning().len(),
            visitors,
            revenue,
            expenses,
            net: revenue - expenses,
            bonus_earned: zoo.bonus_earned(),
            balance: zoo.balance(),
            rating: zoo_rating(zoo),
        }
    }
}
