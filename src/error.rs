use std::error::Error;
use std::fmt::{self, Display};

/// Failures raised while configuring or running the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// The sampler was asked for a value in an empty range.
    EmptyRange,
    /// Fewer numbers survive the active filter than the game needs.
    FilterTooRestrictive { requested: usize, available: usize },
    /// The requested amount of numbers is outside the game's bounds.
    InvalidCount {
        requested: usize,
        min: usize,
        max: usize,
    },
    UnknownGame(String),
    InvalidConfig(String),
    /// A formatted number could not be read back.
    InvalidNumber(String),
}

impl Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::EmptyRange => write!(f, "cannot sample from an empty range"),
            GeneratorError::FilterTooRestrictive {
                requested,
                available,
            } => write!(
                f,
                "filter too restrictive: {} numbers requested but only {} available, try a lighter filter",
                requested, available
            ),
            GeneratorError::InvalidCount {
                requested,
                min,
                max,
            } => write!(
                f,
                "invalid amount of numbers {}: this game accepts {} to {}",
                requested, min, max
            ),
            GeneratorError::UnknownGame(name) => write!(f, "game not configured: {}", name),
            GeneratorError::InvalidConfig(reason) => {
                write!(f, "invalid game configuration: {}", reason)
            }
            GeneratorError::InvalidNumber(raw) => write!(f, "invalid number: {:?}", raw),
        }
    }
}

impl Error for GeneratorError {}

/// Failures raised while loading the draw history.
#[derive(Debug)]
pub enum LoadError {
    Network(reqwest::Error),
    Status(reqwest::StatusCode),
    Io(std::io::Error),
    Malformed(String),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Network(e) => write!(f, "network error: {}", e),
            LoadError::Status(code) => write!(f, "results feed answered {}", code),
            LoadError::Io(e) => write!(f, "could not read history file: {}", e),
            LoadError::Malformed(reason) => write!(f, "malformed history: {}", reason),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Network(e) => Some(e),
            LoadError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(e: reqwest::Error) -> Self {
        LoadError::Network(e)
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Malformed(e.to_string())
    }
}
