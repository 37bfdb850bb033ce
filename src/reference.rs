//! Data Dragon lookup tables, loaded once at startup and read-only afterwards.

use crate::api::endpoints;
use crate::config::Config;
use crate::error::AppError;
use serde::Deserialize;
use std::collections::HashMap;

pub const UNKNOWN_CHAMPION: &str = "Desconhecido";

#[derive(Debug, Deserialize)]
struct DataDragonTable {
    data: HashMap<String, DataDragonEntry>,
}

#[derive(Debug, Deserialize)]
struct DataDragonEntry {
    id: String,
    key: String,
}

#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub version: String,
    champions: HashMap<i64, String>,
    spells: HashMap<i64, String>,
}

impl ReferenceData {
    pub fn new(
        version: &str,
        champions: HashMap<i64, String>,
        spells: HashMap<i64, String>,
    ) -> Self {
        ReferenceData {
            version: version.to_string(),
            champions,
            spells,
        }
    }

    /// Fetches both tables. Any failure aborts startup.
    pub fn load(config: &Config) -> Result<Self, AppError> {
        let version = &config.ddragon_version;
        let champions = load_table(&endpoints::champion_data(version))?;
        let spells = load_table(&endpoints::spell_data(version))?;

        log::info!(
            "loaded {} champions and {} summoner spells (ddragon {})",
            champions.len(),
            spells.len(),
            version
        );

        Ok(ReferenceData::new(version, champions, spells))
    }

    pub fn champion_name(&self, champion_id: i64) -> &str {
        self.champions
            .get(&champion_id)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_CHAMPION)
    }

    pub fn spell_name(&self, spell_id: i64) -> Option<&str> {
        self.spells.get(&spell_id).map(String::as_str)
    }

    pub fn champion_count(&self) -> usize {
        self.champions.len()
    }

    pub fn spell_count(&self) -> usize {
        self.spells.len()
    }
}

fn load_table(url: &str) -> Result<HashMap<i64, String>, AppError> {
    fetch(url)
        .and_then(|body| parse_id_table(&body))
        .map_err(|e| AppError::Reference {
            url: url.to_string(),
            reason: e.to_string(),
        })
}

fn fetch(url: &str) -> Result<String, AppError> {
    ureq::get(url)
        .set("User-Agent", "data_legends/0.1.0")
        .call()
        .map_err(|e| AppError::HttpError(e.to_string()))?
        .into_string()
        .map_err(|e| AppError::HttpError(e.to_string()))
}

/// Maps the numeric `key` of every entry in a Data Dragon table to its `id`.
/// Entries with a non-numeric key are skipped.
pub fn parse_id_table(body: &str) -> Result<HashMap<i64, String>, AppError> {
    let table: DataDragonTable =
        serde_json::from_str(body).map_err(|e| AppError::JsonError(e.to_string()))?;

    Ok(table
        .data
        .into_values()
        .filter_map(|entry| match entry.key.parse::<i64>() {
            Ok(key) => Some((key, entry.id)),
            Err(_) => {
                log::debug!("skipping entry {} with key {:?}", entry.id, entry.key);
                None
            }
        })
        .collect())
}
