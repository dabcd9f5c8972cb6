use playhub::catalog::Catalog;
use playhub::config::Config;
use playhub::selection::{SelectionController, View, MAX_SUGGESTIONS};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const SAMPLE_CATALOG: &str = r#"[
  {"id": "a", "title": "Chess Master", "description": "Classic chess against the machine",
   "thumbnail": "https://cdn.example/a.jpg", "iframeUrl": "https://games.example/a/"},
  {"id": "b", "title": "Speed Run", "description": "Race the clock",
   "thumbnail": "https://cdn.example/b.jpg", "iframeUrl": "https://games.example/b/"},
  {"id": "c", "title": "Chess Puzzle", "description": "Daily tactics",
   "thumbnail": "https://cdn.example/c.jpg", "iframeUrl": "https://games.example/c/"}
]"#;

fn write_catalog(temp_dir: &TempDir, contents: &str) -> PathBuf {
    let path = temp_dir.path().join("games.json");
    fs::write(&path, contents).unwrap();
    path
}

/// Catalog loads from a JSON file and preserves source order
#[test]
fn test_catalog_loads_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_catalog(&temp_dir, SAMPLE_CATALOG);

    let catalog = Catalog::from_path(&path).unwrap();
    assert_eq!(catalog.len(), 3);
    let ids: Vec<&str> = catalog.games().iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

/// A configured catalog path is used by the config-driven loader
#[test]
fn test_catalog_load_uses_configured_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_catalog(&temp_dir, SAMPLE_CATALOG);

    let config = Config {
        catalog_path: Some(path),
        ..Default::default()
    };
    let catalog = Catalog::load(&config).unwrap();
    assert_eq!(catalog.len(), 3);
}

/// Searching, opening a game, and closing it again: the full user flow
#[test]
fn test_search_open_close_flow() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_catalog(&temp_dir, SAMPLE_CATALOG);
    let mut catalog = Catalog::from_path(&path).unwrap();
    let mut selection = SelectionController::default();

    // Search narrows the grid
    catalog.set_query("chess".to_string());
    let ids: Vec<&str> = catalog
        .filtered_games()
        .iter()
        .map(|g| g.id.as_str())
        .collect();
    assert_eq!(ids, vec!["a", "c"]);

    // Opening a game switches to the player and derives suggestions
    selection.select(&catalog, "b");
    assert_eq!(selection.view(), View::Player);
    assert_eq!(selection.selected(&catalog).unwrap().id, "b");
    let suggested: Vec<&str> = selection
        .suggestions(&catalog)
        .iter()
        .map(|g| g.id.as_str())
        .collect();
    assert_eq!(suggested, vec!["a", "c"]);

    // Closing returns to an unfiltered grid
    selection.clear(&mut catalog);
    assert_eq!(selection.view(), View::Grid);
    assert!(selection.selected(&catalog).is_none());
    assert_eq!(catalog.query(), "");
    assert_eq!(catalog.filtered_games().len(), 3);
}

/// Selecting an unknown id leaves all state untouched
#[test]
fn test_unknown_id_does_not_change_state() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_catalog(&temp_dir, SAMPLE_CATALOG);
    let catalog = Catalog::from_path(&path).unwrap();
    let mut selection = SelectionController::default();

    selection.select(&catalog, "zzz");
    assert_eq!(selection.view(), View::Grid);

    selection.select(&catalog, "a");
    selection.select(&catalog, "zzz");
    assert_eq!(selection.view(), View::Player);
    assert_eq!(selection.selected(&catalog).unwrap().id, "a");
}

/// A missing catalog file degrades to an empty, still-usable catalog
#[test]
fn test_missing_catalog_degrades_to_empty() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config {
        catalog_path: Some(temp_dir.path().join("nope.json")),
        ..Default::default()
    };

    let mut catalog = Catalog::load_or_empty(&config);
    assert!(catalog.is_empty());

    catalog.set_query("anything".to_string());
    assert!(catalog.filtered_games().is_empty());

    let selection = SelectionController::default();
    assert_eq!(selection.view(), View::Grid);
}

/// Malformed sources are load errors, not panics
#[test]
fn test_malformed_catalog_is_a_load_error() {
    let temp_dir = TempDir::new().unwrap();

    let path = write_catalog(&temp_dir, "not json at all");
    assert!(Catalog::from_path(&path).is_err());

    let path = write_catalog(
        &temp_dir,
        r#"[{"id": "a", "title": "One", "iframeUrl": "https://games.example/a/"},
            {"id": "a", "title": "Two", "iframeUrl": "https://games.example/b/"}]"#,
    );
    assert!(Catalog::from_path(&path).is_err());
}

/// Filtering always yields an order-preserving subsequence of the catalog
#[test]
fn test_filtered_is_an_ordered_subsequence() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_catalog(&temp_dir, SAMPLE_CATALOG);
    let mut catalog = Catalog::from_path(&path).unwrap();

    for query in ["", "e", "chess", "RUN", "no-hit-expected"] {
        catalog.set_query(query.to_string());
        let filtered = catalog.filtered_games();
        let mut source = catalog.games().iter();
        for game in &filtered {
            assert!(
                source.any(|g| g.id == game.id),
                "query {:?} broke catalog order",
                query
            );
        }
    }
}

/// Suggestions are capped at six and never include the open game
#[test]
fn test_suggestions_are_capped() {
    let records: Vec<String> = (0..10)
        .map(|i| {
            format!(
                r#"{{"id": "g{i}", "title": "Game {i}", "iframeUrl": "https://games.example/g{i}/"}}"#
            )
        })
        .collect();
    let catalog = Catalog::from_json(&format!("[{}]", records.join(","))).unwrap();

    let mut selection = SelectionController::default();
    selection.select(&catalog, "g3");

    let suggestions = selection.suggestions(&catalog);
    assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
    assert!(suggestions.iter().all(|g| g.id != "g3"));
}

/// Integration test for configuration management
#[test]
fn test_config_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let config = Config {
        catalog_path: Some(temp_dir.path().join("games.json")),
        ..Default::default()
    };

    let config_str = toml::to_string(&config).unwrap();
    fs::write(&config_path, config_str).unwrap();

    let loaded: Config = toml::from_str(&fs::read_to_string(&config_path).unwrap()).unwrap();
    assert_eq!(config.catalog_path, loaded.catalog_path);
    assert_eq!(config.log_level, loaded.log_level);
}
