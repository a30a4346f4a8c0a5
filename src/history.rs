use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::LoadError;
use crate::utils::parse_number;

pub const UNKNOWN_DATE: &str = "unknown date";

// The results feed has renamed its fields over time; every known spelling is accepted.
const ID_FIELDS: [&str; 2] = ["concurso", "Concurso"];
const DATE_FIELDS: [&str; 2] = ["data", "Data"];
const NUMBERS_FIELDS: [&str; 3] = ["resultado", "dezenas", "Dezenas"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawRecord {
    pub id: u32,
    pub date: String,
    pub numbers: Vec<u32>,
}

impl DrawRecord {
    /// Builds a canonical record out of one raw feed entry. Never fails:
    /// missing or unreadable fields fall back to defaults.
    pub fn from_raw(raw: &Value) -> Self {
        let id = first_field(raw, &ID_FIELDS)
            .and_then(parse_number)
            .unwrap_or(0);

        let date = first_field(raw, &DATE_FIELDS)
            .and_then(|d| match d {
                Value::String(s) if !s.is_empty() => Some(s.clone()),
                _ => None,
            })
            .unwrap_or_else(|| UNKNOWN_DATE.to_string());

        let numbers = match first_field(raw, &NUMBERS_FIELDS) {
            Some(Value::Array(items)) => items.iter().filter_map(parse_number).collect(),
            Some(other) => {
                debug!(id, field = %other, "numbers field is not a list, ignoring it");
                Vec::new()
            }
            None => Vec::new(),
        };

        Self { id, date, numbers }
    }
}

fn first_field<'a>(raw: &'a Value, aliases: &[&str]) -> Option<&'a Value> {
    aliases
        .iter()
        .filter_map(|alias| raw.get(*alias))
        .find(|value| !value.is_null())
}

/// Normalized draws, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct History {
    draws: Vec<DrawRecord>,
}

impl History {
    pub fn from_records(mut draws: Vec<DrawRecord>) -> Self {
        draws.sort_by(|a, b| b.id.cmp(&a.id));
        Self { draws }
    }

    pub fn from_values(raw: &[Value]) -> Self {
        Self::from_records(raw.iter().map(DrawRecord::from_raw).collect())
    }

    /// Accepts the feed body as a whole; only a non-list top level is rejected.
    pub fn from_value(raw: &Value) -> Result<Self, LoadError> {
        let items = raw.as_array().ok_or_else(|| {
            LoadError::Malformed("expected a list of draws at the top level".to_string())
        })?;
        Ok(Self::from_values(items))
    }

    pub fn from_json_str(raw_json: &str) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_str(raw_json)?;
        Self::from_value(&value)
    }

    pub fn draws(&self) -> &[DrawRecord] {
        &self.draws
    }

    pub fn len(&self) -> usize {
        self.draws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }

    pub fn latest(&self) -> Option<&DrawRecord> {
        self.draws.first()
    }

    /// The `limit` newest draws, or all of them when there are fewer.
    pub fn recent(&self, limit: usize) -> &[DrawRecord] {
        &self.draws[..limit.min(self.draws.len())]
    }
}
