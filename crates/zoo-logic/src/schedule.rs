//! The ten-day mission schedule.

use crate::mission::MissionKind::{self, *};
use crate::mission::MissionTemplate;

/// Last day that has a mission slate.
pub const LAST_SCHEDULED_DAY: u32 = 10;

const fn req(description: &'static str, kind: MissionKind) -> MissionTemplate {
    MissionTemplate::required(description, kind)
}

const fn opt(
    description: &'static str,
    kind: MissionKind,
    reward: f64,
) -> MissionTemplate {
    MissionTemplate::optional(description, kind, reward)
}

/// Slate installed at the start of `day`. Days outside `1..=10` get none.
pub fn missions_for_day(day: u32) -> Vec<MissionTemplate> {
    match day {
        1 => vec![
            req("Purchase your first animal", OwnAnimals).count(1),
            req("Purchase your first exhibit", OwnExhibits).count(1),
            req("Add your animal to the exhibit", AddAnimalToExhibit),
            opt("End day with balance of $1200+ (+$100)", BalanceAtLeast, 100.0)
                .threshold(1200.0)
                .end_of_day(),
        ],
        2 => vec![
            req("Own 2 different species", OwnSpecies).count(2),
            req("Feed an animal", FeedAnimals).count(1),
            req("End day with no homeless animals", NoHomelessAnimals).end_of_day(),
            opt("End day with zoo rating of 4.0+ (+$100)", RatingAtLeast, 100.0)
                .threshold(4.0)
                .end_of_day(),
        ],
        3 => vec![
            req("Own 3 different species", OwnSpecies).count(3),
            req("Own 2 exhibits", OwnExhibits).count(2),
            req("Feed 2 animals", FeedAnimals).count(2),
            opt("Clean an exhibit (+$100)", CleanExhibits, 100.0).count(1),
        ],
        4 => vec![
            req("Play with an animal", PlayWithAnimal),
            req("Feed all animals", FeedAnimals).all_animals(),
            req("All exhibits at 80+ cleanliness", ExhibitsCleanlinessAtLeast)
                .count(80)
                .end_of_day(),
            req("All animals in preferred habitats", PreferredHabitats).end_of_day(),
            opt("End day with zoo rating of 4.0+ (+$100)", RatingAtLeast, 100.0)
                .threshold(4.0)
                .end_of_day(),
        ],
        5 => vec![
            req("Own 4 different species", OwnSpecies).count(4),
            req("Own a penguin or monkey", OwnMediumAnimal),
            req("No homeless animals", NoHomelessAnimals).end_of_day(),
            opt("End day with balance of $800+ (+$100)", BalanceAtLeast, 100.0)
                .threshold(800.0)
                .end_of_day(),
            opt("End day with 40+ visitors (+$200)", AttractVisitors, 200.0)
                .count(40)
                .end_of_day(),
        ],
        6 => vec![
            req("Exercise an animal", ExerciseAnimal),
            req("Feed all animals", FeedAnimals).all_animals(),
            req("All exhibits at 80+ cleanliness", ExhibitsCleanlinessAtLeast)
                .count(80)
                .end_of_day(),
            opt("End the day with zoo rating of 4.0+ (+$100)", RatingAtLeast, 100.0)
                .threshold(4.0)
                .end_of_day(),
            opt("Own 5 animals (+$100)", OwnAnimals, 100.0).count(5),
        ],
        7 => vec![
            req("Own 3 exhibits", OwnExhibits).count(3),
            req("No animals need attention", NoAnimalsNeedAttention).end_of_day(),
            opt("End day with zoo rating of 4.0+ (+$200)", RatingAtLeast, 200.0)
                .threshold(4.0)
                .end_of_day(),
            opt("End day with balance of $1000+ (+$100)", BalanceAtLeast, 100.0)
                .threshold(1000.0)
                .end_of_day(),
            opt("All animals in preferred habitats (+$200)", PreferredHabitats, 200.0)
                .end_of_day(),
        ],
        8 => vec![
            req("Own 5 different species", OwnSpecies).count(5),
            req("Feed all animals", FeedAnimals).all_animals(),
            opt("End day with zoo rating of 4.0+ (+$200)", RatingAtLeast, 200.0)
                .threshold(4.0)
                .end_of_day(),
            opt("End day with balance of $1500+ (+$150)", BalanceAtLeast, 150.0)
                .threshold(1500.0)
                .end_of_day(),
            opt("Own a bear, lion or elephant (+$250)", OwnSpecialAnimal, 250.0),
        ],
        9 => vec![
            req("Own 6 different species", OwnSpecies).count(6),
            req("No animals need attention", NoAnimalsNeedAttention).end_of_day(),
            req("All exhibits at 80+ cleanliness", ExhibitsCleanlinessAtLeast)
                .count(80)
                .end_of_day(),
            opt("End day with zoo rating of 4.0+ (+$200)", RatingAtLeast, 200.0)
                .threshold(4.0)
                .end_of_day(),
            opt("End day with 60+ visitors (+$250)", AttractVisitors, 250.0)
                .count(60)
                .end_of_day(),
        ],
        10 => vec![
            req("No homeless animals", NoHomelessAnimals),
            req("All animals are in preferred habitats", PreferredHabitats).end_of_day(),
            req("No sick animals", NoSickAnimals).end_of_day(),
            req("No animals need attention", NoAnimalsNeedAttention).end_of_day(),
            opt("Own 7 different species (+$250)", OwnSpecies, 250.0).count(7),
            opt("Own an elephant (+$200)", OwnElephant, 200.0),
            opt("End day with zoo rating of 4.0+ (+$200)", RatingAtLeast, 200.0)
                .threshold(4.0)
                .end_of_day(),
            opt("End day with balance above $2000 (+$200)", BalanceAtLeast, 200.0)
                .threshold(2000.0)
                .end_of_day(),
        ],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mission::{MissionKind, Target};

    #[test]
    fn test_every_scheduled_day_has_required_missions() {
        for day in 1..=LAST_SCHEDULED_DAY {
            let slate = missions_for_day(day);
            assert!(!slate.is_empty(), "day {} empty", day);
            assert!(slate.iter().any(|m| m.required), "day {} has no required mission", day);
        }
    }

    #[test]
    fn test_days_outside_schedule_are_empty() {
        assert!(missions_for_day(0).is_empty());
        assert!(missions_for_day(11).is_empty());
        assert!(missions_for_day(u32::MAX).is_empty());
    }

    #[test]
    fn test_optional_missions_pay() {
        for day in 1..=LAST_SCHEDULED_DAY {
            for m in missions_for_day(day) {
                if !m.required {
                    assert!(m.reward > 0.0, "{} has no reward", m.description);
                }
            }
        }
    }

    #[test]
    fn test_day_one_slate() {
        let slate = missions_for_day(1);
        let kinds: Vec<MissionKind> = slate.iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            vec![
                MissionKind::OwnAnimals,
                MissionKind::OwnExhibits,
                MissionKind::AddAnimalToExhibit,
                MissionKind::BalanceAtLeast,
            ]
        );
        assert!(slate[3].end_of_day);
        assert!((slate[3].threshold - 1200.0).abs() < 0.01);
    }

    #[test]
    fn test_feed_all_uses_live_count() {
        let feed_all: Vec<_> = (1..=LAST_SCHEDULED_DAY)
            .flat_map(missions_for_day)
            .filter(|m| m.target == Target::AllAnimals)
            .collect();
        assert_eq!(feed_all.len(), 3);
        assert!(feed_all.iter().all(|m| m.kind == MissionKind::FeedAnimals));
    }

    #[test]
    fn test_day_ten_is_demanding() {
        let slate = missions_for_day(10);
        let required = slate.iter().filter(|m| m.required).count();
        assert_eq!(required, 4);
        assert!(slate
            .iter()
            .any(|m| m.kind == MissionKind::OwnElephant && !m.required));
    }
}
