use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::{Error, Result};

/// Catalog compiled into the binary, used when no catalog path is configured.
const BUNDLED_CATALOG: &str = include_str!("../../assets/games.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(rename = "iframeUrl")]
    pub iframe_url: String,
}

/// Owns the master game list and the current search query. The list is set
/// once at load and never mutated; everything else is a derived view.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    games: Vec<GameRecord>,
    query: String,
}

impl Catalog {
    pub fn from_records(games: Vec<GameRecord>) -> Result<Self> {
        Self::validate(&games)?;
        Ok(Self {
            games,
            query: String::new(),
        })
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        let games: Vec<GameRecord> = serde_json::from_str(contents)?;
        Self::from_records(games)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let catalog = Self::from_json(&contents)?;
        log::info!("Loaded {} games from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Load from the configured catalog path, or the bundled catalog when no
    /// path is set.
    pub fn load(config: &Config) -> Result<Self> {
        match &config.catalog_path {
            Some(path) => Self::from_path(path),
            None => Self::bundled(),
        }
    }

    /// Load, degrading to an empty catalog on any failure. The failure is
    /// logged but never propagated; callers keep a usable (empty) grid.
    pub fn load_or_empty(config: &Config) -> Self {
        match Self::load(config) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::warn!("Failed to load catalog: {}", e);
                Self::default()
            }
        }
    }

    fn validate(games: &[GameRecord]) -> Result<()> {
        let mut seen = HashSet::new();
        for game in games {
            if game.id.is_empty() {
                return Err(Error::Catalog("record with empty id".to_string()));
            }
            if !seen.insert(game.id.as_str()) {
                return Err(Error::Catalog(format!("duplicate game id: {}", game.id)));
            }
            if game.title.is_empty() {
                return Err(Error::Catalog(format!("game {} has an empty title", game.id)));
            }
            if game.iframe_url.is_empty() {
                return Err(Error::Catalog(format!("game {} has no iframe URL", game.id)));
            }
        }
        Ok(())
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the search query. No validation; the empty string matches
    /// everything.
    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    /// Every game whose title or description contains the query,
    /// case-insensitively, in catalog order. Evaluated fresh on each call;
    /// catalogs are small enough that a linear scan is fine.
    pub fn filtered_games(&self) -> Vec<&GameRecord> {
        let needle = self.query.to_lowercase();
        self.games
            .iter()
            .filter(|game| {
                game.title.to_lowercase().contains(&needle)
                    || game.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&GameRecord> {
        self.games.iter().find(|game| game.id == id)
    }
}
