//! Living beings: the shared vitals capability and the two concrete kinds.

use crate::error::{Error, Result};
use crate::types::{
    AnimalSpecie, Diet, Gender, PlantSpecie, State, DEFAULT_LIFE_POINTS, MAX_AGE, MIN_AGE,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// State, life points and age common to every living being
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    state: State,
    life_points: u32,
    age: u8,
}

impl Vitals {
    /// Vitals of a freshly created being, with a random age in `[0, 20]`
    pub fn fresh<R: Rng>(rng: &mut R) -> Self {
        Self {
            state: State::Alive,
            life_points: DEFAULT_LIFE_POINTS,
            age: rng.gen_range(MIN_AGE..=MAX_AGE),
        }
    }

    pub fn newborn() -> Self {
        Self {
            state: State::Alive,
            life_points: DEFAULT_LIFE_POINTS,
            age: MIN_AGE,
        }
    }
}

/// Capability shared by animals and plants.
///
/// Implementors only hand out their [`Vitals`]; every accessor and mutator is
/// provided here so both kinds validate values the same way.
pub trait LivingBeing {
    fn vitals(&self) -> &Vitals;
    fn vitals_mut(&mut self) -> &mut Vitals;

    fn state(&self) -> State {
        self.vitals().state
    }

    fn life_points(&self) -> u32 {
        self.vitals().life_points
    }

    fn age(&self) -> u8 {
        self.vitals().age
    }

    fn is_alive(&self) -> bool {
        self.state() == State::Alive
    }

    /// A being below `threshold` life points needs to eat
    fn is_hungry(&self, threshold: u32) -> bool {
        self.life_points() < threshold
    }

    fn set_state(&mut self, state: State) {
        self.vitals_mut().state = state;
    }

    fn set_life_points(&mut self, life_points: i64) -> Result<()> {
        let value = u32::try_from(life_points).map_err(|_| {
            Error::validation(format!(
                "`life_points` should be a non-negative integer, got {}",
                life_points
            ))
        })?;
        self.vitals_mut().life_points = value;
        Ok(())
    }

    fn set_age(&mut self, age: i64) -> Result<()> {
        let value = u8::try_from(age)
            .ok()
            .filter(|a| (MIN_AGE..=MAX_AGE).contains(a))
            .ok_or_else(|| {
                Error::validation(format!(
                    "`age` should be between {} and {}, got {}",
                    MIN_AGE, MAX_AGE, age
                ))
            })?;
        self.vitals_mut().age = value;
        Ok(())
    }

    fn kill(&mut self) {
        let vitals = self.vitals_mut();
        vitals.life_points = 0;
        vitals.state = State::Dead;
    }

    fn gain_life_points(&mut self, amount: u32) {
        let vitals = self.vitals_mut();
        vitals.life_points = vitals.life_points.saturating_add(amount);
    }

    /// Take `amount` life points away. A being holding `lethal_at` points or
    /// fewer does not survive the loss and is killed instead.
    ///
    /// Returns whether the being died.
    fn lose_life_points(&mut self, amount: u32, lethal_at: u32) -> bool {
        if self.life_points() <= lethal_at {
            self.kill();
            true
        } else {
            let vitals = self.vitals_mut();
            vitals.life_points = vitals.life_points.saturating_sub(amount);
            false
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    name: String,
    gender: Gender,
    specie: AnimalSpecie,
    diet: Diet,
    vitals: Vitals,
}

impl Animal {
    /// Create an animal with a random age
    pub fn new(name: impl Into<String>, gender: Gender, specie: AnimalSpecie) -> Result<Self> {
        Self::with_rng(name, gender, specie, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng>(
        name: impl Into<String>,
        gender: Gender,
        specie: AnimalSpecie,
        rng: &mut R,
    ) -> Result<Self> {
        let name = validate_name(name.into())?;
        Ok(Self {
            name,
            gender,
            specie,
            diet: specie.diet(),
            vitals: Vitals::fresh(rng),
        })
    }

    /// Create an animal from raw strings, as typed by a user or read from disk
    pub fn parse(name: &str, gender: &str, specie: &str) -> Result<Self> {
        let specie = specie.parse::<AnimalSpecie>()?;
        let gender = gender.parse::<Gender>()?;
        Self::new(name, gender, specie)
    }

    /// An animal born in the enclosure: age 0, full life points
    pub fn newborn(name: impl Into<String>, gender: Gender, specie: AnimalSpecie) -> Result<Self> {
        let name = validate_name(name.into())?;
        Ok(Self {
            name,
            gender,
            specie,
            diet: specie.diet(),
            vitals: Vitals::newborn(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn specie(&self) -> AnimalSpecie {
        self.specie
    }

    pub fn diet(&self) -> Diet {
        self.diet
    }
}

impl LivingBeing for Animal {
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plant {
    specie: PlantSpecie,
    vitals: Vitals,
}

impl Plant {
    /// Create a plant with a random age
    pub fn new(specie: PlantSpecie) -> Self {
        Self::with_rng(specie, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng>(specie: PlantSpecie, rng: &mut R) -> Self {
        Self {
            specie,
            vitals: Vitals::fresh(rng),
        }
    }

    pub fn parse(specie: &str) -> Result<Self> {
        Ok(Self::new(specie.parse::<PlantSpecie>()?))
    }

    /// A cutting taken from `parent`: same species and age, given `life_points`
    pub fn offspring(parent: &Plant, life_points: u32) -> Self {
        Self {
            specie: parent.specie,
            vitals: Vitals {
                state: State::Alive,
                life_points,
                age: parent.age(),
            },
        }
    }

    pub fn specie(&self) -> PlantSpecie {
        self.specie
    }
}

impl LivingBeing for Plant {
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }
}

fn validate_name(name: String) -> Result<String> {
    if name.trim().is_empty() {
        return Err(Error::validation("name should be a non-empty string"));
    }
    Ok(name)
}
