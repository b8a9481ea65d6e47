//! Interactive text menu driving an enclosure.

use crate::journal::Journal;
use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};
use zoo_core::{Animal, AnimalSpecie, AppConfig, Gender, Plant, PlantSpecie};
use zoo_world::{load_enclosure, report_state, save_enclosure, Enclosure, Simulation};

const CLEAR_CONSOLE: &str = "\x1B[2J\x1B[1;1H";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    AddAnimal,
    AddSeaweed,
    MoveForward,
    Save,
    Load,
    Exit,
}

impl FromStr for Choice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Choice::AddAnimal),
            "2" => Ok(Choice::AddSeaweed),
            "3" => Ok(Choice::MoveForward),
            "4" => Ok(Choice::Save),
            "5" => Ok(Choice::Load),
            "6" => Ok(Choice::Exit),
            other => Err(format!("unknown option `{}`", other)),
        }
    }
}

pub struct Menu<R, W> {
    input: R,
    output: W,
    enclosure: Enclosure,
    simulation: Simulation,
    journal: Journal,
    data_path: PathBuf,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(config: AppConfig, input: R, output: W) -> Self {
        Self {
            input,
            output,
            enclosure: Enclosure::new(),
            simulation: Simulation::new(config.ecosystem),
            journal: Journal::new(config.journal_path),
            data_path: config.data_path,
        }
    }

    pub fn enclosure(&self) -> &Enclosure {
        &self.enclosure
    }

    /// Show the menu until the user exits or input runs out
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "\n==== ZOO SIMULATOR ====\n")?;

        loop {
            let menu = self.menu_text();
            write!(self.output, "{}", menu)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };
            match line.parse::<Choice>() {
                Ok(Choice::Exit) => break,
                Ok(choice) => self.handle(choice)?,
                Err(_) => writeln!(self.output, "Invalid option, please try again!\n")?,
            }
        }

        writeln!(self.output, "\nCiao. Until soon")?;
        Ok(())
    }

    fn menu_text(&self) -> String {
        format!(
            "\n{}\n\
             Please select one of the following options:\n\n\
             1 -> Add an animal.\n\
             2 -> Add a seaweed.\n\
             3 -> Move forward in time.\n\
             4 -> Save the enclosure.\n\
             5 -> Load the enclosure.\n\
             6 -> Exit.\n\n\
             Your selection: ",
            report_state(&self.enclosure)
        )
    }

    fn handle(&mut self, choice: Choice) -> Result<()> {
        match choice {
            Choice::AddAnimal => self.add_animal(),
            Choice::AddSeaweed => self.add_seaweed(),
            Choice::MoveForward => self.move_forward(),
            Choice::Save => self.save(),
            Choice::Load => self.load(),
            Choice::Exit => Ok(()),
        }
    }

    fn add_animal(&mut self) -> Result<()> {
        self.clear_console()?;

        let species = AnimalSpecie::all().map(|s| s.to_string()).join(", ");
        let question = format!("Enter the animal's specie ({}): ", species);
        let Some(specie) = self.prompt(&question, |s| s.parse::<AnimalSpecie>())? else {
            return Ok(());
        };
        let Some(gender) = self.prompt("Enter the animal's gender (male, female): ", |s| {
            s.parse::<Gender>()
        })?
        else {
            return Ok(());
        };
        let Some(animal) = self.prompt("Enter the animal's name: ", |s| {
            Animal::new(s, gender, specie)
        })?
        else {
            return Ok(());
        };

        info!(name = animal.name(), specie = %specie, gender = %gender, "Animal added");
        writeln!(
            self.output,
            "\nA new {} {} named {} has been added to the enclosure\n",
            gender,
            specie,
            animal.name()
        )?;
        self.enclosure.add_animal(animal);
        self.ask_to_continue()
    }

    fn add_seaweed(&mut self) -> Result<()> {
        self.enclosure.add_plant(Plant::new(PlantSpecie::Seaweed));
        info!("Seaweed added");

        self.clear_console()?;
        writeln!(self.output, "\nA new seaweed has been added to the enclosure\n")?;
        self.ask_to_continue()
    }

    fn move_forward(&mut self) -> Result<()> {
        let outcome = self.simulation.advance_one_day(&mut self.enclosure)?;
        self.journal.record(&report_state(&self.enclosure));

        self.clear_console()?;
        writeln!(
            self.output,
            "\nDay {}: the sun has set and risen again. Let's see how it is going in there!\n\
             {} born, {} cuttings, {} eaten, {} starved, {} gone in total.\n",
            outcome.day,
            outcome.breeding.animals_born,
            outcome.breeding.plants_spawned,
            outcome.feeding.prey_killed,
            outcome.feeding.starved,
            outcome.swept
        )?;
        self.ask_to_continue()
    }

    fn save(&mut self) -> Result<()> {
        self.clear_console()?;
        match save_enclosure(&self.enclosure, &self.data_path) {
            Ok(()) => writeln!(
                self.output,
                "\nEnclosure saved to {}\n",
                self.data_path.display()
            )?,
            Err(e) => {
                warn!(error = %e, "Failed to save enclosure");
                writeln!(self.output, "\nCould not save the enclosure: {}\n", e)?;
            }
        }
        self.ask_to_continue()
    }

    fn load(&mut self) -> Result<()> {
        self.clear_console()?;
        match load_enclosure(&self.data_path) {
            Ok(enclosure) => {
                self.enclosure = enclosure;
                writeln!(
                    self.output,
                    "\nEnclosure loaded from {}\n",
                    self.data_path.display()
                )?;
            }
            Err(e) => writeln!(self.output, "\nCould not load the enclosure: {}\n", e)?,
        }
        self.ask_to_continue()
    }

    /// Ask `question` until `parse` accepts the answer.
    ///
    /// Validation errors are shown and the question asked again; `None` means
    /// input ran out before a valid answer came.
    fn prompt<T>(
        &mut self,
        question: &str,
        parse: impl Fn(&str) -> zoo_core::Result<T>,
    ) -> Result<Option<T>> {
        loop {
            write!(self.output, "{}", question)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) if e.is_validation() => writeln!(self.output, "{}", e)?,
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn ask_to_continue(&mut self) -> Result<()> {
        write!(self.output, "Hit Enter key to continue ...")?;
        self.output.flush()?;
        self.read_line()?;
        self.clear_console()
    }

    fn clear_console(&mut self) -> Result<()> {
        write!(self.output, "{}", CLEAR_CONSOLE)?;
        Ok(())
    }
}
