//! Human-readable reports on the population of an enclosure.

use crate::enclosure::Enclosure;
use serde::{Deserialize, Serialize};
use std::fmt;
use zoo_core::{Animal, AnimalSpecie, Gender, LivingBeing, Plant, PlantSpecie};

/// Head count of one animal species
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesCount {
    pub specie: AnimalSpecie,
    pub males: usize,
    pub females: usize,
}

impl SpeciesCount {
    pub fn total(&self) -> usize {
        self.males + self.females
    }
}

/// Composition of an enclosure at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    pub animals: usize,
    pub plants: usize,
    pub living_animals: usize,
    pub living_plants: usize,
    /// Species present, in declaration order
    pub species: Vec<SpeciesCount>,
    pub plant_species: Vec<(PlantSpecie, usize)>,
}

impl Census {
    pub fn from_enclosure(enclosure: &Enclosure) -> Self {
        let species = AnimalSpecie::all()
            .into_iter()
            .filter_map(|specie| {
                let members = enclosure.animals().iter().filter(|a| a.specie() == specie);
                let (males, females) = members.fold((0, 0), |(m, f), a| match a.gender() {
                    Gender::Male => (m + 1, f),
                    Gender::Female => (m, f + 1),
                });
                (males + females > 0).then_some(SpeciesCount {
                    specie,
                    males,
                    females,
                })
            })
            .collect();

        let plant_species = PlantSpecie::all()
            .into_iter()
            .map(|specie| {
                let count = enclosure
                    .plants()
                    .iter()
                    .filter(|p| p.specie() == specie)
                    .count();
                (specie, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect();

        Self {
            animals: enclosure.animals().len(),
            plants: enclosure.plants().len(),
            living_animals: enclosure.living_animals(),
            living_plants: enclosure.living_plants(),
            species,
            plant_species,
        }
    }
}

/// Renders every plant and animal, grouped by species
pub struct Report<'a> {
    enclosure: &'a Enclosure,
}

impl<'a> Report<'a> {
    pub fn new(enclosure: &'a Enclosure) -> Self {
        Self { enclosure }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let census = Census::from_enclosure(self.enclosure);

        writeln!(f, "You could find for now {} plants", census.plants)?;
        let mut plants: Vec<&Plant> = self.enclosure.plants().iter().collect();
        plants.sort_by_key(|p| p.specie());
        for group in plants.chunk_by(|a, b| a.specie() == b.specie()) {
            writeln!(f, "  - {} : {}", group[0].specie(), group.len())?;
            for plant in group {
                writeln!(
                    f,
                    "      * age {}, {} life points",
                    plant.age(),
                    plant.life_points()
                )?;
            }
        }

        if census.animals == 0 {
            return writeln!(f, "There is no animal at this stage.");
        }

        writeln!(f, "There is also the following {} animals:", census.animals)?;
        let mut animals: Vec<&Animal> = self.enclosure.animals().iter().collect();
        animals.sort_by_key(|a| a.specie());
        for (count, group) in census
            .species
            .iter()
            .zip(animals.chunk_by(|a, b| a.specie() == b.specie()))
        {
            writeln!(
                f,
                "  - {} : {} ({} male, {} female)",
                count.specie,
                count.total(),
                count.males,
                count.females
            )?;
            for animal in group {
                writeln!(
                    f,
                    "      * {}, {}, age {}, {} life points",
                    animal.name(),
                    animal.gender(),
                    animal.age(),
                    animal.life_points()
                )?;
            }
        }

        Ok(())
    }
}

/// Text summary of the enclosure. Never mutates it.
pub fn report_state(enclosure: &Enclosure) -> String {
    Report::new(enclosure).to_string()
}
