use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::LoadError;
use crate::history::History;

/// Where the draw history comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistorySource {
    Remote(String),
    File(PathBuf),
}

pub async fn fetch_history(url: &str) -> Result<History, LoadError> {
    let client = reqwest::Client::new();

    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(LoadError::Status(response.status()));
    }

    let body: Value = response.json().await?;
    History::from_value(&body)
}

pub async fn read_history_file(path: &Path) -> Result<History, LoadError> {
    let raw_json_string = tokio::fs::read_to_string(path).await?;
    History::from_json_str(&raw_json_string)
}

pub async fn load_history(source: &HistorySource) -> Result<History, LoadError> {
    let history = match source {
        HistorySource::Remote(url) => {
            info!("🔄 Downloading results from {}", url);
            fetch_history(url).await?
        }
        HistorySource::File(path) => {
            info!("📂 Reading results from {:?}", path);
            read_history_file(path).await?
        }
    };
    Ok(history)
}
