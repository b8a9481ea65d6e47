//! The enclosure: one population of animals and plants.

use zoo_core::{Animal, LivingBeing, Plant};

/// Aggregate owning the animals and plants of a single enclosure.
///
/// Both sequences keep insertion order; the engine relies on it when looking
/// for the first eligible prey or plant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enclosure {
    animals: Vec<Animal>,
    plants: Vec<Plant>,
}

impl Enclosure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn animals_mut(&mut self) -> &mut [Animal] {
        &mut self.animals
    }

    pub fn plants_mut(&mut self) -> &mut [Plant] {
        &mut self.plants
    }

    pub fn add_animal(&mut self, animal: Animal) {
        self.animals.push(animal);
    }

    pub fn add_plant(&mut self, plant: Plant) {
        self.plants.push(plant);
    }

    /// Replace every animal at once
    pub fn set_animals(&mut self, animals: Vec<Animal>) {
        self.animals = animals;
    }

    /// Replace every plant at once
    pub fn set_plants(&mut self, plants: Vec<Plant>) {
        self.plants = plants;
    }

    /// Move the animals out, leaving the enclosure without any until they are
    /// published again with [`Enclosure::set_animals`].
    pub fn take_animals(&mut self) -> Vec<Animal> {
        std::mem::take(&mut self.animals)
    }

    pub fn take_plants(&mut self) -> Vec<Plant> {
        std::mem::take(&mut self.plants)
    }

    /// Total number of beings, dead or alive
    pub fn len(&self) -> usize {
        self.animals.len() + self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty() && self.plants.is_empty()
    }

    pub fn living_animals(&self) -> usize {
        self.animals.iter().filter(|a| a.is_alive()).count()
    }

    pub fn living_plants(&self) -> usize {
        self.plants.iter().filter(|p| p.is_alive()).count()
    }
}
