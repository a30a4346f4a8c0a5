pub mod api;
pub mod config;
pub mod duplicate;
pub mod error;
pub mod exclusion;
pub mod games;
pub mod generator;
pub mod history;
pub mod sampler;
pub mod session;
pub mod utils;

pub use api::{HistorySource, load_history};
pub use error::{GeneratorError, LoadError};
pub use exclusion::{ExclusionSet, Filter, FilterWindows};
pub use games::{Game, GameConfig};
pub use generator::Combination;
pub use history::{DrawRecord, History};
pub use session::{GeneratedGame, GeneratorSession, HistoryState};
