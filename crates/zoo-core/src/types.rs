//! Reference data shared by every living being: states, genders, species and diets.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Oldest age a being can reach. A being this old dies on its next day.
pub const MAX_AGE: u8 = 20;

/// Youngest possible age, given to newborns.
pub const MIN_AGE: u8 = 0;

/// Life points given to every freshly created being.
pub const DEFAULT_LIFE_POINTS: u32 = 10;

/// Whether a being still takes part in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    Alive,
    Dead,
}

impl State {
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Alive => "alive",
            State::Dead => "dead",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for State {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "alive" => Ok(State::Alive),
            "dead" => Ok(State::Dead),
            other => Err(Error::validation(format!(
                "`state` should be `alive` or `dead`, got `{}`",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn all() -> [Gender; 2] {
        [Gender::Male, Gender::Female]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(Error::validation(format!(
                "gender should be `male` or `female`, got `{}`",
                other
            ))),
        }
    }
}

/// What an animal feeds on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Diet {
    Carnivorous,
    Herbivorous,
}

impl Diet {
    pub fn as_str(&self) -> &'static str {
        match self {
            Diet::Carnivorous => "carnivorous",
            Diet::Herbivorous => "herbivorous",
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Animal species living in an enclosure
///
/// Declaration order is also the order species are visited when breeding
/// and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimalSpecie {
    Lion,
    Tiger,
    Coyote,
    Elephant,
    Antelope,
    Giraffe,
}

impl AnimalSpecie {
    pub fn all() -> [AnimalSpecie; 6] {
        [
            AnimalSpecie::Lion,
            AnimalSpecie::Tiger,
            AnimalSpecie::Coyote,
            AnimalSpecie::Elephant,
            AnimalSpecie::Antelope,
            AnimalSpecie::Giraffe,
        ]
    }

    /// Fixed species to diet table
    pub fn diet(&self) -> Diet {
        match self {
            AnimalSpecie::Lion | AnimalSpecie::Tiger | AnimalSpecie::Coyote => Diet::Carnivorous,
            AnimalSpecie::Elephant | AnimalSpecie::Antelope | AnimalSpecie::Giraffe => {
                Diet::Herbivorous
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimalSpecie::Lion => "lion",
            AnimalSpecie::Tiger => "tiger",
            AnimalSpecie::Coyote => "coyote",
            AnimalSpecie::Elephant => "elephant",
            AnimalSpecie::Antelope => "antelope",
            AnimalSpecie::Giraffe => "giraffe",
        }
    }

    fn names() -> String {
        Self::all()
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for AnimalSpecie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnimalSpecie {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::all()
            .into_iter()
            .find(|specie| specie.as_str() == wanted)
            .ok_or_else(|| {
                Error::validation(format!(
                    "`specie` should be among the following values [{}], got `{}`",
                    Self::names(),
                    wanted
                ))
            })
    }
}

/// Plant species living in an enclosure
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantSpecie {
    Seaweed,
}

impl PlantSpecie {
    pub fn all() -> [PlantSpecie; 1] {
        [PlantSpecie::Seaweed]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlantSpecie::Seaweed => "seaweed",
        }
    }
}

impl fmt::Display for PlantSpecie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlantSpecie {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::all()
            .into_iter()
            .find(|specie| specie.as_str() == wanted)
            .ok_or_else(|| {
                Error::validation(format!(
                    "plant `specie` should be `seaweed`, got `{}`",
                    wanted
                ))
            })
    }
}
