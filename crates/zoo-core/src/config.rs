//! Configuration types for the simulation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Tunable amounts and thresholds of the day-advance pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EcosystemConfig {
    /// Animals below this many life points are hungry and may not breed
    pub starvation_threshold: u32,
    /// Life points an animal loses every day
    pub animal_attrition: u32,
    /// Life points a plant gains every day
    pub plant_growth: u32,
    /// Life points a carnivore gains from a meal
    pub carnivore_gain: u32,
    /// Life points a prey loses when bitten
    pub prey_loss: u32,
    /// A bitten prey holding this many life points or fewer is killed
    pub prey_lethal_at: u32,
    /// Life points a herbivore gains from a meal
    pub herbivore_gain: u32,
    /// Life points a plant loses when grazed
    pub plant_loss: u32,
    /// A grazed plant holding this many life points or fewer is destroyed
    pub plant_lethal_at: u32,
    /// Plants holding at least this many life points spawn a cutting
    pub plant_breed_threshold: u32,
    /// Random seed for reproducibility; entropy when unset
    pub seed: Option<u64>,
}

impl Default for EcosystemConfig {
    fn default() -> Self {
        Self {
            starvation_threshold: 5,
            animal_attrition: 1,
            plant_growth: 1,
            carnivore_gain: 5,
            prey_loss: 4,
            prey_lethal_at: 4,
            herbivore_gain: 4,
            plant_loss: 2,
            plant_lethal_at: 2,
            plant_breed_threshold: 10,
            seed: None,
        }
    }
}

/// Application configuration for the interactive simulator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the enclosure is saved to and loaded from
    pub data_path: PathBuf,
    /// Append-only log receiving a report after every day
    pub journal_path: PathBuf,
    pub ecosystem: EcosystemConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("./data/enclosure.json"),
            journal_path: PathBuf::from("./data/journal.log"),
            ecosystem: EcosystemConfig::default(),
        }
    }
}

impl AppConfig {
    /// Defaults overlaid with `ZOO_DATA_PATH`, `ZOO_JOURNAL_PATH` and `ZOO_SEED`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = lookup("ZOO_DATA_PATH") {
            config.data_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("ZOO_JOURNAL_PATH") {
            config.journal_path = PathBuf::from(path);
        }
        if let Some(seed) = lookup("ZOO_SEED") {
            let seed = seed.trim().parse::<u64>().map_err(|e| {
                Error::validation(format!("ZOO_SEED should be an unsigned integer: {}", e))
            })?;
            config.ecosystem.seed = Some(seed);
        }

        Ok(config)
    }
}
