use rand::RngCore;
use rand::rngs::ThreadRng;
use tracing::{info, warn};

use crate::api::{HistorySource, load_history};
use crate::duplicate::find_match;
use crate::error::{GeneratorError, LoadError};
use crate::exclusion::{Blocklists, Filter, FilterWindows};
use crate::games::GameConfig;
use crate::generator::{Combination, generate};
use crate::history::{DrawRecord, History};
use crate::sampler::IndexSampler;
use crate::utils::format_numbers;

/// Loading state of the draw history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryState {
    Pending,
    Ready(History),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedGame {
    pub combination: Combination,
    /// The most recent draw that already had these numbers.
    pub previous_draw: Option<DrawRecord>,
}

/// Everything one user session needs: game rules, history, blocklists and randomness.
pub struct GeneratorSession<R: RngCore = ThreadRng> {
    game: GameConfig,
    windows: FilterWindows,
    state: HistoryState,
    blocklists: Blocklists,
    sampler: IndexSampler<R>,
}

impl GeneratorSession<ThreadRng> {
    pub fn new(game: GameConfig, windows: FilterWindows) -> Self {
        Self::with_sampler(game, windows, IndexSampler::from_os_entropy())
    }
}

impl<R: RngCore> GeneratorSession<R> {
    pub fn with_sampler(game: GameConfig, windows: FilterWindows, sampler: IndexSampler<R>) -> Self {
        Self {
            game,
            windows,
            state: HistoryState::Pending,
            blocklists: Blocklists::default(),
            sampler,
        }
    }

    pub fn game(&self) -> &GameConfig {
        &self.game
    }

    pub fn state(&self) -> &HistoryState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, HistoryState::Ready(_))
    }

    pub fn history(&self) -> Option<&History> {
        match &self.state {
            HistoryState::Ready(history) => Some(history),
            _ => None,
        }
    }

    /// Loads the history once and rebuilds the blocklists.
    ///
    /// A failure is not fatal: the session switches to offline mode where
    /// numbers are still generated but without filters or duplicate checks.
    pub async fn initialize(&mut self, source: &HistorySource) -> Result<usize, LoadError> {
        match load_history(source).await {
            Ok(history) => {
                let draws = history.len();
                self.apply_history(history);
                Ok(draws)
            }
            Err(e) => {
                self.mark_failed(&e.to_string());
                Err(e)
            }
        }
    }

    pub fn apply_history(&mut self, history: History) {
        self.blocklists = Blocklists::build(&history, self.windows);
        info!(
            game = self.game.name(),
            draws = history.len(),
            latest = ?history.latest().map(|d| d.id),
            "✅ history loaded"
        );
        self.state = HistoryState::Ready(history);
    }

    pub fn mark_failed(&mut self, reason: &str) {
        warn!(game = self.game.name(), reason, "⚠️ history unavailable, running offline");
        self.blocklists = Blocklists::default();
        self.state = HistoryState::Failed(reason.to_string());
    }

    pub fn generate(&mut self, count: usize, filter: Option<Filter>) -> Result<Combination, GeneratorError> {
        self.game.check_count(count)?;
        let exclusion = filter.map(|f| self.blocklists.get(f));
        generate(&self.game, count, exclusion, &mut self.sampler)
    }

    /// Generates `games` combinations and flags the ones that were already drawn.
    /// Nothing is returned unless every combination could be generated.
    pub fn generate_games(
        &mut self,
        games: usize,
        count: usize,
        filter: Option<Filter>,
    ) -> Result<Vec<GeneratedGame>, GeneratorError> {
        let mut generated = Vec::with_capacity(games);
        for _ in 0..games {
            let combination = self.generate(count, filter)?;
            let previous_draw = self.find_match(&combination).cloned();
            generated.push(GeneratedGame {
                combination,
                previous_draw,
            });
        }
        Ok(generated)
    }

    /// Duplicate checks are only available once the history is loaded.
    pub fn find_match(&self, combination: &Combination) -> Option<&DrawRecord> {
        self.history().and_then(|history| find_match(combination, history))
    }

    /// Labels of the numbers a filter currently blocks, ascending.
    pub fn blocked_numbers(&self, filter: Filter) -> Vec<String> {
        let numbers: Vec<u32> = self.blocklists.get(filter).iter().collect();
        format_numbers(&numbers, self.game.display_zero())
    }

    pub fn recent_draws(&self, limit: usize) -> &[DrawRecord] {
        self.history().map(|h| h.recent(limit)).unwrap_or(&[])
    }

    pub fn status_message(&self) -> String {
        let name = self.game.name();
        match &self.state {
            HistoryState::Pending => format!("🔄 Downloading {} results...", name),
            HistoryState::Ready(history) => match history.latest() {
                Some(latest) => format!(
                    "✅ {} history: latest draw {} ({} draws loaded).",
                    name,
                    latest.id,
                    history.len()
                ),
                None => format!("✅ {} history is empty.", name),
            },
            HistoryState::Failed(reason) => format!(
                "⚠️ Could not download {} results ({}). Offline mode.",
                name, reason
            ),
        }
    }
}
