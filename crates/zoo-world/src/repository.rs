//! Saving and loading an enclosure as a flat JSON document.

use crate::enclosure::Enclosure;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};
use zoo_core::{Animal, Error, LivingBeing, Plant, Result, State};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalRecord {
    pub name: String,
    pub gender: String,
    pub specie: String,
    pub age: i64,
    pub life_points: i64,
    pub state: String,
}

impl From<&Animal> for AnimalRecord {
    fn from(animal: &Animal) -> Self {
        Self {
            name: animal.name().to_string(),
            gender: animal.gender().to_string(),
            specie: animal.specie().to_string(),
            age: i64::from(animal.age()),
            life_points: i64::from(animal.life_points()),
            state: animal.state().to_string(),
        }
    }
}

impl AnimalRecord {
    /// Rebuild the animal through its validating constructor, then restore
    /// the persisted vitals over the random ones
    pub fn into_animal(self) -> Result<Animal> {
        let mut animal = Animal::parse(&self.name, &self.gender, &self.specie)?;
        animal.set_age(self.age)?;
        animal.set_life_points(self.life_points)?;
        animal.set_state(self.state.parse::<State>()?);
        Ok(animal)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantRecord {
    pub specie: String,
    pub age: i64,
    pub life_points: i64,
    pub state: String,
}

impl From<&Plant> for PlantRecord {
    fn from(plant: &Plant) -> Self {
        Self {
            specie: plant.specie().to_string(),
            age: i64::from(plant.age()),
            life_points: i64::from(plant.life_points()),
            state: plant.state().to_string(),
        }
    }
}

impl PlantRecord {
    pub fn into_plant(self) -> Result<Plant> {
        let mut plant = Plant::parse(&self.specie)?;
        plant.set_age(self.age)?;
        plant.set_life_points(self.life_points)?;
        plant.set_state(self.state.parse::<State>()?);
        Ok(plant)
    }
}

/// On-disk layout of an enclosure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnclosureRecord {
    pub animals: Vec<AnimalRecord>,
    pub plants: Vec<PlantRecord>,
}

impl From<&Enclosure> for EnclosureRecord {
    fn from(enclosure: &Enclosure) -> Self {
        Self {
            animals: enclosure.animals().iter().map(AnimalRecord::from).collect(),
            plants: enclosure.plants().iter().map(PlantRecord::from).collect(),
        }
    }
}

impl EnclosureRecord {
    pub fn into_enclosure(self) -> Result<Enclosure> {
        let animals = self
            .animals
            .into_iter()
            .map(AnimalRecord::into_animal)
            .collect::<Result<Vec<_>>>()?;
        let plants = self
            .plants
            .into_iter()
            .map(PlantRecord::into_plant)
            .collect::<Result<Vec<_>>>()?;

        let mut enclosure = Enclosure::new();
        enclosure.set_animals(animals);
        enclosure.set_plants(plants);
        Ok(enclosure)
    }
}

/// Write both sequences of the enclosure to `path`, creating parent directories
pub fn save_enclosure(enclosure: &Enclosure, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let record = EnclosureRecord::from(enclosure);
    let json = serde_json::to_string_pretty(&record)?;
    fs::write(path, json)?;

    info!(
        path = %path.display(),
        animals = record.animals.len(),
        plants = record.plants.len(),
        "Enclosure saved"
    );
    Ok(())
}

/// Read an enclosure back from `path`.
///
/// Fails with [`Error::FileNotFound`] when there is nothing at `path`, and with
/// [`Error::ConfigFormat`] for anything that does not describe valid beings.
pub fn load_enclosure(path: &Path) -> Result<Enclosure> {
    if !path.is_file() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    let enclosure = serde_json::from_str::<EnclosureRecord>(&contents)
        .map_err(|e| Error::ConfigFormat(e.to_string()))
        .and_then(|record| {
            record
                .into_enclosure()
                .map_err(|e| Error::ConfigFormat(e.to_string()))
        })
        .inspect_err(|e| warn!(path = %path.display(), error = %e, "Failed to load enclosure"))?;

    info!(
        path = %path.display(),
        animals = enclosure.animals().len(),
        plants = enclosure.plants().len(),
        "Enclosure loaded"
    );
    Ok(enclosure)
}
