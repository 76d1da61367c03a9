//! Randomized attributes at purchase time: ages, capacities, default names.

use rand::Rng;

use crate::animal::Animal;
use crate::exhibit::Exhibit;
use crate::habitat::HabitatType;
use crate::species::Species;

/// Age in years, uniform over the species' purchase range.
pub fn random_age(species: Species, rng: &mut impl Rng) -> u32 {
    let (lo, hi) = species.profile().age_range;
    rng.gen_range(lo..=hi)
}

/// Capacity, uniform over the habitat's purchase range.
pub fn random_capacity(habitat: HabitatType, rng: &mut impl Rng) -> u32 {
    let (lo, hi) = habitat.profile().capacity_range;
    rng.gen_range(lo..=hi)
}

/// Pick a name from the built-in list.
pub fn random_animal_name(rng: &mut impl Rng) -> &'static str {
    ANIMAL_NAMES[rng.gen_range(0..ANIMAL_NAMES.len())]
}

/// A ready-to-purchase animal with a random age.
pub fn generate_animal(species: Species, name: &str, rng: &mut impl Rng) -> Animal {
    Animal::new(name, species, random_age(species, rng))
}

/// A ready-to-purchase exhibit with a random capacity.
pub fn generate_exhibit(habitat: HabitatType, name: &str, rng: &mut impl Rng) -> Exhibit {
    Exhibit::new(name, habitat, random_capacity(habitat, rng))
}

static ANIMAL_NAMES: &[&str] = &[
    "Biscuit", "Clover", "Daisy", "Pepper", "Maple", "Mochi", "Hazel", "Juniper", "Nugget",
    "Pickles", "Olive", "Pumpkin", "Rosie", "Sprout", "Taffy", "Waffles", "Ziggy", "Bramble",
    "Copper", "Fig",
];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_ages_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for species in Species::ALL {
            let (lo, hi) = species.profile().age_range;
            for _ in 0..50 {
                let age = random_age(species, &mut rng);
                assert!(age >= lo && age <= hi, "{} age {}", species, age);
            }
        }
    }

    #[test]
    fn test_capacities_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for habitat in HabitatType::ALL {
            let (lo, hi) = habitat.profile().capacity_range;
            for _ in 0..50 {
                let cap = random_capacity(habitat, &mut rng);
                assert!(cap >= lo && cap <= hi);
            }
        }
    }

    #[test]
    fn test_generation_is_deterministic_per_seed() {
        let a = generate_animal(Species::Lion, "Simba", &mut StdRng::seed_from_u64(42));
        let b = generate_animal(Species::Lion, "Simba", &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
        assert_eq!(a.health(), 100);
    }

    #[test]
    fn test_generate_exhibit() {
        let mut rng = StdRng::seed_from_u64(3);
        let e = generate_exhibit(HabitatType::Jungle, "Canopy", &mut rng);
        assert_eq!(e.name(), "Canopy");
        assert!(e.capacity() >= 4 && e.capacity() <= 6);
        assert!(e.is_empty());
    }

    #[test]
    fn test_name_variety() {
        let mut rng = StdRng::seed_from_u64(99);
        let names: std::collections::HashSet<_> =
            (0..100).map(|_| random_animal_name(&mut rng)).collect();
        assert!(names.len() > 5);
    }
}
