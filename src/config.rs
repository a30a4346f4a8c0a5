use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::api::HistorySource;
use crate::exclusion::FilterWindows;
use crate::games::GameConfig;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub history_url: Option<String>,
    pub history_file: Option<PathBuf>,
    pub windows: FilterWindows,
}

impl Config {
    /// A local file wins over a URL override, which wins over the game's own feed.
    pub fn history_source(&self, game: &GameConfig) -> Option<HistorySource> {
        if let Some(path) = &self.history_file {
            return Some(HistorySource::File(path.clone()));
        }
        self.history_url
            .clone()
            .or_else(|| game.source_url().map(str::to_string))
            .map(HistorySource::Remote)
    }
}

pub fn load() -> Result<Config> {
    let history_url = env::var("LOTTERY_HISTORY_URL").ok();
    let history_file = env::var("LOTTERY_HISTORY_FILE").ok().map(PathBuf::from);

    let defaults = FilterWindows::default();
    let windows = FilterWindows {
        light: window_from_env("LOTTERY_LIGHT_WINDOW", defaults.light)?,
        heavy: window_from_env("LOTTERY_HEAVY_WINDOW", defaults.heavy)?,
    };

    Ok(Config {
        history_url,
        history_file,
        windows,
    })
}

fn window_from_env(key: &str, default: usize) -> Result<usize> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .with_context(|| format!("{} must be a number of draws, got {:?}", key, raw)),
        Err(_) => Ok(default),
    }
}
