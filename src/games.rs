use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::GeneratorError;

const FEED_BASE_URL: &str = "https://raw.githubusercontent.com/eitchtee/loterias.json/refs/heads/main/data";

/// Rules of one lottery variant: number range and how many numbers a game takes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    name: String,
    source_url: Option<String>,
    lower: u32,
    upper: u32,
    min_count: usize,
    default_count: usize,
    max_count: usize,
    display_zero: bool,
}

impl GameConfig {
    pub fn new(
        name: &str,
        lower: u32,
        upper: u32,
        min_count: usize,
        default_count: usize,
        max_count: usize,
    ) -> Result<Self, GeneratorError> {
        if lower > upper {
            return Err(GeneratorError::InvalidConfig(format!(
                "lower bound {} is above upper bound {}",
                lower, upper
            )));
        }
        if !(min_count <= default_count && default_count <= max_count) {
            return Err(GeneratorError::InvalidConfig(format!(
                "counts must satisfy min <= default <= max, got {} / {} / {}",
                min_count, default_count, max_count
            )));
        }
        if min_count == 0 {
            return Err(GeneratorError::InvalidConfig(
                "a game needs at least one number".to_string(),
            ));
        }
        let range_size = (upper - lower) as usize + 1;
        if max_count > range_size {
            return Err(GeneratorError::InvalidConfig(format!(
                "{} numbers do not fit in {}..={}",
                max_count, lower, upper
            )));
        }

        Ok(Self {
            name: name.to_string(),
            source_url: None,
            lower,
            upper,
            min_count,
            default_count,
            max_count,
            display_zero: lower == 0,
        })
    }

    pub fn with_source_url(mut self, url: &str) -> Self {
        self.source_url = Some(url.to_string());
        self
    }

    /// Whether the value 0 is shown as "00". Only meaningful when the range starts at 0.
    pub fn with_display_zero(mut self, display_zero: bool) -> Self {
        self.display_zero = display_zero;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source_url(&self) -> Option<&str> {
        self.source_url.as_deref()
    }

    pub fn lower(&self) -> u32 {
        self.lower
    }

    pub fn upper(&self) -> u32 {
        self.upper
    }

    pub fn min_count(&self) -> usize {
        self.min_count
    }

    pub fn default_count(&self) -> usize {
        self.default_count
    }

    pub fn max_count(&self) -> usize {
        self.max_count
    }

    pub fn display_zero(&self) -> bool {
        self.display_zero
    }

    /// True when the amount of numbers per game cannot be chosen.
    pub fn has_fixed_count(&self) -> bool {
        self.min_count == self.max_count
    }

    pub fn contains(&self, number: u32) -> bool {
        (self.lower..=self.upper).contains(&number)
    }

    pub fn check_count(&self, count: usize) -> Result<(), GeneratorError> {
        if count < self.min_count || count > self.max_count {
            return Err(GeneratorError::InvalidCount {
                requested: count,
                min: self.min_count,
                max: self.max_count,
            });
        }
        Ok(())
    }
}

/// Built-in lottery variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Game {
    MegaSena,
    Lotofacil,
    Quina,
    Lotomania,
}

impl Game {
    pub const ALL: [Game; 4] = [Game::MegaSena, Game::Lotofacil, Game::Quina, Game::Lotomania];

    pub fn slug(&self) -> &'static str {
        match self {
            Game::MegaSena => "mega-sena",
            Game::Lotofacil => "lotofacil",
            Game::Quina => "quina",
            Game::Lotomania => "lotomania",
        }
    }

    pub fn config(&self) -> GameConfig {
        let (name, lower, upper, min_count, default_count, max_count) = match self {
            Game::MegaSena => ("Mega-Sena", 1, 60, 6, 6, 15),
            Game::Lotofacil => ("Lotofácil", 1, 25, 15, 15, 20),
            Game::Quina => ("Quina", 1, 80, 5, 5, 15),
            Game::Lotomania => ("Lotomania", 0, 99, 50, 50, 50),
        };

        GameConfig {
            name: name.to_string(),
            source_url: Some(format!("{}/{}.json", FEED_BASE_URL, self.slug())),
            lower,
            upper,
            min_count,
            default_count,
            max_count,
            display_zero: lower == 0,
        }
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Game {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Game::ALL
            .into_iter()
            .find(|game| game.slug() == wanted)
            .ok_or_else(|| GeneratorError::UnknownGame(s.to_string()))
    }
}
