//! Day-advance engine for an enclosure.
//!
//! A day runs four stages in a fixed order, each followed by a sweep of the
//! dead: aging, breeding, then feeding. Aging has to come before breeding so
//! that beings dying of old age cannot reproduce, and breeding comes before
//! feeding so newborns are already part of the food chain on their first day.

use crate::enclosure::Enclosure;
use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};
use zoo_core::{
    Animal, AnimalSpecie, Diet, EcosystemConfig, Gender, LivingBeing, Plant, Result, State,
    MAX_AGE,
};

/// Deaths caused by the aging stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingStats {
    pub animals_died: usize,
    pub plants_died: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedingStats {
    pub animals_born: usize,
    pub plants_spawned: usize,
}

/// How every animal was classified by the feeding stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedingStats {
    /// Skipped because already fed or already dead
    pub skipped: usize,
    pub carnivore_meals: usize,
    pub herbivore_meals: usize,
    pub prey_killed: usize,
    pub plants_destroyed: usize,
    pub starved: usize,
}

/// Everything that happened during one simulated day
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayOutcome {
    pub day: u64,
    pub aging: AgingStats,
    pub breeding: BreedingStats,
    pub feeding: FeedingStats,
    /// Beings removed by the three sweeps
    pub swept: usize,
    pub animals: usize,
    pub plants: usize,
}

pub struct Simulation<R = ChaCha8Rng> {
    config: EcosystemConfig,
    rng: R,
    day: u64,
}

impl Simulation<ChaCha8Rng> {
    /// Engine seeded from `config.seed`, or from entropy when no seed is set
    pub fn new(config: EcosystemConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Simulation<R> {
    pub fn with_rng(config: EcosystemConfig, rng: R) -> Self {
        Self { config, rng, day: 0 }
    }

    pub fn config(&self) -> &EcosystemConfig {
        &self.config
    }

    /// Number of days simulated so far
    pub fn day(&self) -> u64 {
        self.day
    }

    /// Run the whole pipeline once: age, breed, feed, sweeping after each stage
    #[instrument(skip(self, enclosure), fields(day = self.day + 1))]
    pub fn advance_one_day(&mut self, enclosure: &mut Enclosure) -> Result<DayOutcome> {
        self.day += 1;

        let aging = self.spend_time(enclosure)?;
        let mut swept = remove_dead(enclosure);

        let breeding = self.breed(enclosure)?;
        swept += remove_dead(enclosure);

        let feeding = self.let_animals_eat(enclosure)?;
        swept += remove_dead(enclosure);

        let outcome = DayOutcome {
            day: self.day,
            aging,
            breeding,
            feeding,
            swept,
            animals: enclosure.animals().len(),
            plants: enclosure.plants().len(),
        };

        info!(
            event = "day_complete",
            day = outcome.day,
            animals = outcome.animals,
            plants = outcome.plants,
            old_age_deaths = aging.animals_died + aging.plants_died,
            animals_born = breeding.animals_born,
            plants_spawned = breeding.plants_spawned,
            prey_killed = feeding.prey_killed,
            starved = feeding.starved,
            swept = outcome.swept,
            "Day complete"
        );

        Ok(outcome)
    }

    /// Advance `days` days in a row
    pub fn run_days(&mut self, enclosure: &mut Enclosure, days: u64) -> Result<Vec<DayOutcome>> {
        (0..days).map(|_| self.advance_one_day(enclosure)).collect()
    }

    /// Aging and attrition.
    ///
    /// Plants grow and animals lose life points. Anything already at the
    /// maximum age dies instead of getting older. Animal life points stop at
    /// zero: an exhausted animal is left alive and hungry for the feeding stage.
    pub fn spend_time(&self, enclosure: &mut Enclosure) -> Result<AgingStats> {
        let mut stats = AgingStats::default();

        // Dead beings are left as they are until the next sweep
        for plant in enclosure.plants_mut().iter_mut().filter(|p| p.is_alive()) {
            plant.gain_life_points(self.config.plant_growth);
            if age_one_day(plant)? {
                trace!(specie = %plant.specie(), "Plant died of old age");
                stats.plants_died += 1;
            }
        }

        for animal in enclosure.animals_mut().iter_mut().filter(|a| a.is_alive()) {
            let remaining = animal
                .life_points()
                .saturating_sub(self.config.animal_attrition);
            animal.set_life_points(i64::from(remaining))?;
            if age_one_day(animal)? {
                debug!(
                    event = "old_age_death",
                    name = animal.name(),
                    specie = %animal.specie(),
                    "Animal died of old age"
                );
                stats.animals_died += 1;
            }
        }

        Ok(stats)
    }

    /// Breeding.
    ///
    /// Within each species, well-fed males and females are paired in list
    /// order and every pair gets one newborn. Plants holding enough life
    /// points split in half and spawn a cutting.
    pub fn breed(&mut self, enclosure: &mut Enclosure) -> Result<BreedingStats> {
        let threshold = self.config.starvation_threshold;
        let mut newborns = Vec::new();

        for specie in AnimalSpecie::all() {
            let (males, females): (Vec<&Animal>, Vec<&Animal>) = enclosure
                .animals()
                .iter()
                .filter(|a| a.is_alive() && a.specie() == specie && !a.is_hungry(threshold))
                .partition(|a| a.gender() == Gender::Male);

            for (father, mother) in males.iter().zip(females.iter()) {
                let gender = if self.rng.gen_bool(0.5) {
                    Gender::Male
                } else {
                    Gender::Female
                };
                let parent = match gender {
                    Gender::Female => mother,
                    Gender::Male => father,
                };
                let newborn = Animal::newborn(format!("{} jr", parent.name()), gender, specie)?;

                debug!(
                    event = "animal_born",
                    specie = %specie,
                    father = father.name(),
                    mother = mother.name(),
                    name = newborn.name(),
                    gender = %gender,
                    "Animal born"
                );
                newborns.push(newborn);
            }
        }

        let mut cuttings = Vec::new();
        for plant in enclosure.plants_mut().iter_mut().filter(|p| p.is_alive()) {
            if plant.life_points() >= self.config.plant_breed_threshold {
                let half = plant.life_points() / 2;
                cuttings.push(Plant::offspring(plant, half));
                plant.set_life_points(i64::from(half))?;
                trace!(specie = %plant.specie(), life_points = half, "Plant spawned a cutting");
            }
        }

        let stats = BreedingStats {
            animals_born: newborns.len(),
            plants_spawned: cuttings.len(),
        };

        for animal in newborns {
            enclosure.add_animal(animal);
        }
        for plant in cuttings {
            enclosure.add_plant(plant);
        }

        Ok(stats)
    }

    /// Feeding, or the law of the jungle.
    ///
    /// Animals are visited once each, in shuffled order. Hungry carnivores
    /// bite the first living animal of another species, hungry herbivores
    /// graze the first living plant, and a hungry animal finding nothing to
    /// eat starves.
    pub fn let_animals_eat(&mut self, enclosure: &mut Enclosure) -> Result<FeedingStats> {
        let config = &self.config;
        let mut stats = FeedingStats::default();

        let mut queue: Vec<usize> = (0..enclosure.animals().len()).collect();
        queue.shuffle(&mut self.rng);

        for eater in queue {
            let (diet, name) = {
                let animal = &enclosure.animals()[eater];
                if !animal.is_alive() || !animal.is_hungry(config.starvation_threshold) {
                    stats.skipped += 1;
                    continue;
                }
                (animal.diet(), animal.name().to_string())
            };

            match diet {
                Diet::Carnivorous => match first_prey_index(enclosure.animals(), eater) {
                    Some(prey) => {
                        let animals = enclosure.animals_mut();
                        let killed =
                            animals[prey].lose_life_points(config.prey_loss, config.prey_lethal_at);
                        animals[eater].gain_life_points(config.carnivore_gain);

                        debug!(
                            event = "carnivore_meal",
                            eater = %name,
                            prey = animals[prey].name(),
                            killed,
                            "Carnivore ate"
                        );
                        stats.carnivore_meals += 1;
                        if killed {
                            stats.prey_killed += 1;
                        }
                    }
                    None => {
                        enclosure.animals_mut()[eater].set_state(State::Dead);
                        debug!(event = "starved", name = %name, "Carnivore found no prey");
                        stats.starved += 1;
                    }
                },
                Diet::Herbivorous => match first_living_plant_index(enclosure.plants()) {
                    Some(plant) => {
                        let destroyed = enclosure.plants_mut()[plant]
                            .lose_life_points(config.plant_loss, config.plant_lethal_at);
                        enclosure.animals_mut()[eater].gain_life_points(config.herbivore_gain);

                        debug!(event = "herbivore_meal", eater = %name, destroyed, "Herbivore ate");
                        stats.herbivore_meals += 1;
                        if destroyed {
                            stats.plants_destroyed += 1;
                        }
                    }
                    None => {
                        enclosure.animals_mut()[eater].set_state(State::Dead);
                        debug!(event = "starved", name = %name, "Herbivore found no plant");
                        stats.starved += 1;
                    }
                },
            }
        }

        Ok(stats)
    }
}

/// Remove every dead animal and plant, keeping survivors in order.
///
/// Returns how many beings were removed.
pub fn remove_dead(enclosure: &mut Enclosure) -> usize {
    let before = enclosure.len();

    let mut animals = enclosure.take_animals();
    animals.retain(|a| a.is_alive());
    enclosure.set_animals(animals);

    let mut plants = enclosure.take_plants();
    plants.retain(|p| p.is_alive());
    enclosure.set_plants(plants);

    let removed = before - enclosure.len();
    if removed > 0 {
        trace!(removed, "Swept dead beings");
    }
    removed
}

/// Index of the first living plant, in list order
pub fn first_living_plant_index(plants: &[Plant]) -> Option<usize> {
    plants.iter().position(|p| p.is_alive())
}

/// Index of the first living animal `eater` may prey on: anything alive that
/// is not itself and not of its own species.
pub fn first_prey_index(animals: &[Animal], eater: usize) -> Option<usize> {
    let specie = animals.get(eater)?.specie();
    animals
        .iter()
        .enumerate()
        .position(|(idx, a)| idx != eater && a.is_alive() && a.specie() != specie)
}

/// Returns whether the being died of old age
fn age_one_day<B: LivingBeing>(being: &mut B) -> Result<bool> {
    if being.age() >= MAX_AGE {
        being.set_state(State::Dead);
        Ok(true)
    } else {
        being.set_age(i64::from(being.age()) + 1)?;
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use zoo_core::PlantSpecie;

    fn seeded() -> Simulation {
        Simulation::new(EcosystemConfig {
            seed: Some(42),
            ..Default::default()
        })
    }

    fn animal(name: &str, gender: Gender, specie: AnimalSpecie, life_points: i64) -> Animal {
        let mut animal = Animal::new(name, gender, specie).unwrap();
        animal.set_life_points(life_points).unwrap();
        animal.set_age(5).unwrap();
        animal
    }

    fn seaweed(life_points: i64) -> Plant {
        let mut plant = Plant::new(PlantSpecie::Seaweed);
        plant.set_life_points(life_points).unwrap();
        plant.set_age(5).unwrap();
        plant
    }

    #[test]
    fn test_first_living_plant_index() {
        let mut dead = seaweed(10);
        dead.set_state(State::Dead);
        let alive = seaweed(10);

        assert_eq!(first_living_plant_index(&[dead.clone(), alive.clone()]), Some(1));
        assert_eq!(first_living_plant_index(&[alive]), Some(0));
        assert_eq!(first_living_plant_index(&[dead]), None);
        assert_eq!(first_living_plant_index(&[]), None);
    }

    #[test]
    fn test_first_prey_index_skips_own_species_and_dead() {
        let mut dead_giraffe = animal("Jimmy", Gender::Male, AnimalSpecie::Giraffe, 10);
        dead_giraffe.set_state(State::Dead);
        let animals = vec![
            animal("Simba", Gender::Male, AnimalSpecie::Lion, 1),
            animal("Nala", Gender::Female, AnimalSpecie::Lion, 10),
            dead_giraffe,
            animal("Melman", Gender::Male, AnimalSpecie::Giraffe, 10),
        ];

        assert_eq!(first_prey_index(&animals, 0), Some(3));
        assert_eq!(first_prey_index(&animals, 3), Some(0));
        assert_eq!(first_prey_index(&animals, 9), None);
    }

    #[test]
    fn test_remove_dead() {
        let mut enclosure = Enclosure::new();
        let mut lion = animal("Simba", Gender::Male, AnimalSpecie::Lion, 10);
        lion.set_state(State::Dead);
        enclosure.add_animal(lion);
        enclosure.add_animal(animal("Jimmy", Gender::Male, AnimalSpecie::Giraffe, 10));

        assert_eq!(enclosure.animals().len(), 2);
        assert_eq!(remove_dead(&mut enclosure), 1);
        assert_eq!(enclosure.animals().len(), 1);
        assert_eq!(enclosure.animals()[0].name(), "Jimmy");
    }

    #[test]
    fn test_spend_time() {
        let sim = seeded();
        let mut enclosure = Enclosure::new();
        enclosure.add_animal(animal("Simba", Gender::Male, AnimalSpecie::Lion, 10));
        let mut lilly = animal("Lilly", Gender::Female, AnimalSpecie::Lion, 10);
        lilly.set_age(20).unwrap();
        enclosure.add_animal(lilly);
        enclosure.add_plant(seaweed(10));

        let stats = sim.spend_time(&mut enclosure).unwrap();

        assert_eq!(enclosure.animals().len(), 2);
        assert_eq!(enclosure.animals()[0].life_points(), 9);
        assert_eq!(enclosure.animals()[0].age(), 6);
        assert_eq!(enclosure.plants()[0].life_points(), 11);
        assert_eq!(enclosure.plants()[0].age(), 6);

        // Lilly was too old to see another day
        assert_eq!(enclosure.animals()[1].state(), State::Dead);
        assert_eq!(enclosure.animals()[1].age(), 20);
        assert_eq!(stats.animals_died, 1);
    }

    #[test]
    fn test_spend_time_clamps_life_points_at_zero() {
        let sim = seeded();
        let mut enclosure = Enclosure::new();
        enclosure.add_animal(animal("Wile", Gender::Male, AnimalSpecie::Coyote, 0));

        sim.spend_time(&mut enclosure).unwrap();

        let coyote = &enclosure.animals()[0];
        assert_eq!(coyote.life_points(), 0);
        assert!(coyote.is_alive());
    }

    #[test]
    fn test_spend_time_leaves_the_dead_alone() {
        let sim = seeded();
        let mut enclosure = Enclosure::new();
        let mut ghost = animal("Mufasa", Gender::Male, AnimalSpecie::Lion, 7);
        ghost.set_state(State::Dead);
        enclosure.add_animal(ghost);
        let mut rotten = seaweed(3);
        rotten.set_state(State::Dead);
        enclosure.add_plant(rotten);

        let stats = sim.spend_time(&mut enclosure).unwrap();

        assert_eq!(stats, AgingStats::default());
        assert_eq!(enclosure.animals()[0].life_points(), 7);
        assert_eq!(enclosure.animals()[0].age(), 5);
        assert_eq!(enclosure.plants()[0].life_points(), 3);
        assert_eq!(enclosure.plants()[0].age(), 5);
    }

    #[test]
    fn test_breed() {
        let mut sim = seeded();
        let mut enclosure = Enclosure::new();
        enclosure.add_animal(animal("Simba", Gender::Male, AnimalSpecie::Lion, 10));
        enclosure.add_animal(animal("Nala", Gender::Female, AnimalSpecie::Lion, 10));
        enclosure.add_animal(animal("giraffe 1", Gender::Male, AnimalSpecie::Giraffe, 10));
        enclosure.add_animal(animal("giraffe 2", Gender::Male, AnimalSpecie::Lion, 10));
        enclosure.add_animal(animal("giraffe 3", Gender::Female, AnimalSpecie::Giraffe, 10));
        // Too hungry to breed
        enclosure.add_animal(animal("Flash", Gender::Female, AnimalSpecie::Tiger, 4));
        enclosure.add_animal(animal("Flash 2", Gender::Male, AnimalSpecie::Tiger, 1));
        enclosure.add_plant(seaweed(10));
        enclosure.add_plant(seaweed(8));

        let stats = sim.breed(&mut enclosure).unwrap();

        assert_eq!(stats.animals_born, 2);
        assert_eq!(stats.plants_spawned, 1);
        assert_eq!(enclosure.animals().len(), 9);
        assert_eq!(enclosure.plants().len(), 3);

        let cub = &enclosure.animals()[7];
        assert_eq!(cub.specie(), AnimalSpecie::Lion);
        assert_eq!(cub.age(), 0);
        assert_eq!(cub.life_points(), 10);
        let expected = match cub.gender() {
            Gender::Female => "Nala jr",
            Gender::Male => "Simba jr",
        };
        assert_eq!(cub.name(), expected);

        let calf = &enclosure.animals()[8];
        assert_eq!(calf.specie(), AnimalSpecie::Giraffe);
        let expected = match calf.gender() {
            Gender::Female => "giraffe 3 jr",
            Gender::Male => "giraffe 1 jr",
        };
        assert_eq!(calf.name(), expected);
    }

    #[test]
    fn test_plant_breeding_halves_parent() {
        let mut sim = seeded();
        let mut enclosure = Enclosure::new();
        enclosure.add_plant(seaweed(10));

        sim.breed(&mut enclosure).unwrap();

        assert_eq!(enclosure.plants().len(), 2);
        assert_eq!(enclosure.plants()[0].life_points(), 5);
        assert_eq!(enclosure.plants()[1].life_points(), 5);
        assert_eq!(enclosure.plants()[1].age(), 5);

        let mut enclosure = Enclosure::new();
        enclosure.add_plant(seaweed(13));
        sim.breed(&mut enclosure).unwrap();
        assert_eq!(enclosure.plants()[0].life_points(), 6);
        assert_eq!(enclosure.plants()[1].life_points(), 6);
    }

    #[test]
    fn test_each_animal_is_paired_once() {
        let mut sim = seeded();
        let mut enclosure = Enclosure::new();
        enclosure.add_animal(animal("Dumbo", Gender::Male, AnimalSpecie::Elephant, 10));
        enclosure.add_animal(animal("Ella", Gender::Female, AnimalSpecie::Elephant, 10));
        enclosure.add_animal(animal("Eve", Gender::Female, AnimalSpecie::Elephant, 10));

        let stats = sim.breed(&mut enclosure).unwrap();
        assert_eq!(stats.animals_born, 1);
        assert_eq!(enclosure.animals().len(), 4);
    }

    #[test]
    fn test_herbivore_grazes() {
        let mut sim = seeded();
        let mut enclosure = Enclosure::new();
        enclosure.add_animal(animal("Jimmy", Gender::Male, AnimalSpecie::Giraffe, 1));
        enclosure.add_plant(seaweed(10));

        let stats = sim.let_animals_eat(&mut enclosure).unwrap();

        assert_eq!(stats.herbivore_meals, 1);
        assert_eq!(enclosure.animals()[0].life_points(), 5);
        assert_eq!(enclosure.plants()[0].life_points(), 8);
        assert!(enclosure.animals()[0].is_alive());
        assert!(enclosure.plants()[0].is_alive());
    }

    #[test]
    fn test_grazing_kills_a_weak_plant() {
        let mut sim = seeded();
        let mut enclosure = Enclosure::new();
        enclosure.add_animal(animal("Jimmy", Gender::Male, AnimalSpecie::Giraffe, 4));
        enclosure.add_plant(seaweed(2));
        enclosure.add_plant(seaweed(10));

        sim.let_animals_eat(&mut enclosure).unwrap();

        assert_eq!(enclosure.animals()[0].life_points(), 8);
        assert_eq!(enclosure.plants()[0].state(), State::Dead);
        assert_eq!(enclosure.plants()[0].life_points(), 0);
        assert_eq!(enclosure.plants()[1].life_points(), 10);
    }

    #[test]
    fn test_carnivore_starves_without_prey() {
        let mut sim = seeded();
        let mut enclosure = Enclosure::new();
        enclosure.add_animal(animal("Simba", Gender::Male, AnimalSpecie::Lion, 1));
        enclosure.add_animal(animal("Nala", Gender::Female, AnimalSpecie::Lion, 10));

        let stats = sim.let_animals_eat(&mut enclosure).unwrap();

        assert_eq!(stats.starved, 1);
        assert_eq!(enclosure.animals()[0].state(), State::Dead);
        remove_dead(&mut enclosure);
        assert_eq!(enclosure.animals().len(), 1);
        assert_eq!(enclosure.animals()[0].name(), "Nala");
    }

    #[test]
    fn test_herbivore_starves_without_plants() {
        let mut sim = seeded();
        let mut enclosure = Enclosure::new();
        enclosure.add_animal(animal("Dumbo", Gender::Male, AnimalSpecie::Elephant, 3));

        sim.let_animals_eat(&mut enclosure).unwrap();
        assert_eq!(enclosure.animals()[0].state(), State::Dead);
    }

    #[test]
    fn test_carnivore_bites_first_prey_in_list_order() {
        let mut sim = seeded();
        let mut enclosure = Enclosure::new();
        enclosure.add_animal(animal("Simba", Gender::Male, AnimalSpecie::Lion, 1));
        enclosure.add_animal(animal("Jimmy", Gender::Male, AnimalSpecie::Giraffe, 10));
        enclosure.add_animal(animal("Gina", Gender::Female, AnimalSpecie::Giraffe, 10));

        let stats = sim.let_animals_eat(&mut enclosure).unwrap();

        assert_eq!(stats.carnivore_meals, 1);
        assert_eq!(stats.skipped, 2);
        assert_eq!(enclosure.animals()[0].life_points(), 6);
        assert_eq!(enclosure.animals()[1].life_points(), 6);
        assert_eq!(enclosure.animals()[2].life_points(), 10);
    }

    #[test]
    fn test_prey_dies_at_lethal_threshold_not_at_bite_size() {
        let mut sim = Simulation::new(EcosystemConfig {
            seed: Some(42),
            starvation_threshold: 2,
            prey_loss: 1,
            prey_lethal_at: 4,
            ..Default::default()
        });
        let mut enclosure = Enclosure::new();
        enclosure.add_animal(animal("Simba", Gender::Male, AnimalSpecie::Lion, 1));
        enclosure.add_animal(animal("Jimmy", Gender::Male, AnimalSpecie::Giraffe, 5));

        // Above the threshold the bite only takes one point
        let stats = sim.let_animals_eat(&mut enclosure).unwrap();
        assert_eq!(stats.prey_killed, 0);
        assert_eq!(enclosure.animals()[1].life_points(), 4);

        // At the threshold the same small bite kills
        enclosure.animals_mut()[0].set_life_points(1).unwrap();
        let stats = sim.let_animals_eat(&mut enclosure).unwrap();
        assert_eq!(stats.prey_killed, 1);
        assert!(!enclosure.animals()[1].is_alive());
        assert_eq!(enclosure.animals()[1].life_points(), 0);
    }

    #[test]
    fn test_hungry_carnivores_fight_once() {
        let mut sim = seeded();
        let mut enclosure = Enclosure::new();
        enclosure.add_animal(animal("Simba", Gender::Male, AnimalSpecie::Lion, 1));
        enclosure.add_animal(animal("Shere Khan", Gender::Male, AnimalSpecie::Tiger, 1));

        let stats = sim.let_animals_eat(&mut enclosure).unwrap();

        assert_eq!(stats.carnivore_meals, 1);
        assert_eq!(stats.prey_killed, 1);
        remove_dead(&mut enclosure);
        assert_eq!(enclosure.animals().len(), 1);
        assert_eq!(enclosure.animals()[0].life_points(), 6);
    }

    #[test]
    fn test_feeding_order_is_reproducible() {
        let build = || {
            let mut enclosure = Enclosure::new();
            enclosure.add_animal(animal("Simba", Gender::Male, AnimalSpecie::Lion, 1));
            enclosure.add_animal(animal("Jimmy", Gender::Male, AnimalSpecie::Giraffe, 4));
            enclosure.add_plant(seaweed(8));
            enclosure
        };

        let mut first = build();
        let mut second = build();
        seeded().let_animals_eat(&mut first).unwrap();
        seeded().let_animals_eat(&mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_advance_one_day_sweeps_dead() {
        let mut sim = seeded();
        let mut enclosure = Enclosure::new();
        enclosure.add_animal(animal("Simba", Gender::Male, AnimalSpecie::Lion, 1));
        let mut old = seaweed(10);
        old.set_age(20).unwrap();
        enclosure.add_plant(old);

        let outcome = sim.advance_one_day(&mut enclosure).unwrap();

        assert_eq!(outcome.day, 1);
        assert_eq!(sim.day(), 1);
        assert_eq!(outcome.aging.plants_died, 1);
        assert_eq!(outcome.feeding.starved, 1);
        assert_eq!(outcome.swept, 2);
        assert!(enclosure.is_empty());
    }

    #[test]
    fn test_run_days() {
        let mut sim = seeded();
        let mut enclosure = Enclosure::new();
        enclosure.add_plant(seaweed(3));

        let outcomes = sim.run_days(&mut enclosure, 3).unwrap();
        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[2].day, 3);
        assert_eq!(enclosure.plants()[0].life_points(), 6);
        assert_eq!(enclosure.plants()[0].age(), 8);
    }

    proptest! {
        #[test]
        fn prop_aging_never_exceeds_max(age in 0i64..=20, points in 0i64..30) {
            let sim = seeded();
            let mut enclosure = Enclosure::new();
            let mut plant = seaweed(points);
            plant.set_age(age).unwrap();
            enclosure.add_plant(plant);

            sim.spend_time(&mut enclosure).unwrap();

            let plant = &enclosure.plants()[0];
            if age == 20 {
                prop_assert_eq!(plant.state(), State::Dead);
                prop_assert_eq!(plant.age(), 20);
            } else {
                prop_assert!(plant.is_alive());
                prop_assert_eq!(i64::from(plant.age()), age + 1);
            }
        }

        #[test]
        fn prop_remove_dead_is_idempotent(states in proptest::collection::vec(any::<bool>(), 0..20)) {
            let mut enclosure = Enclosure::new();
            for alive in &states {
                let mut plant = seaweed(10);
                if !alive {
                    plant.set_state(State::Dead);
                }
                enclosure.add_plant(plant);
            }

            remove_dead(&mut enclosure);
            let once = enclosure.clone();
            prop_assert_eq!(remove_dead(&mut enclosure), 0);
            prop_assert_eq!(&enclosure, &once);
            prop_assert_eq!(enclosure.plants().len(), states.iter().filter(|a| **a).count());
        }
    }
}
