use crate::catalog::{Catalog, GameRecord};

/// Maximum number of games shown in the "More Games" row.
pub const MAX_SUGGESTIONS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Grid,
    Player,
}

/// Tracks the single open game, if any. The visible view is derived from the
/// selection, so grid and player are mutually exclusive by construction.
#[derive(Debug, Default)]
pub struct SelectionController {
    selected: Option<String>,
}

impl SelectionController {
    pub fn view(&self) -> View {
        if self.selected.is_some() {
            View::Player
        } else {
            View::Grid
        }
    }

    pub fn selected<'a>(&self, catalog: &'a Catalog) -> Option<&'a GameRecord> {
        self.selected.as_deref().and_then(|id| catalog.get(id))
    }

    /// Open the game with the given id. Unknown ids are ignored: the UI only
    /// ever offers ids from the catalog, but the contract tolerates a stale
    /// one without faulting.
    pub fn select(&mut self, catalog: &Catalog, id: &str) {
        match catalog.get(id) {
            Some(game) => {
                log::info!("Selected game: {} ({})", game.title, game.id);
                self.selected = Some(game.id.clone());
            }
            None => {
                log::debug!("Ignoring selection of unknown game id: {}", id);
            }
        }
    }

    /// Close the open game and return to the grid. The search query is reset
    /// so the catalog always reopens unfiltered.
    pub fn clear(&mut self, catalog: &mut Catalog) {
        self.selected = None;
        catalog.set_query(String::new());
    }

    /// Up to [`MAX_SUGGESTIONS`] games from the catalog, excluding the open
    /// one, in catalog order.
    pub fn suggestions<'a>(&self, catalog: &'a Catalog) -> Vec<&'a GameRecord> {
        catalog
            .games()
            .iter()
            .filter(|game| Some(game.id.as_str()) != self.selected.as_deref())
            .take(MAX_SUGGESTIONS)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, title: &str) -> GameRecord {
        GameRecord {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            thumbnail: String::new(),
            iframe_url: format!("https://games.example/{}/", id),
        }
    }

    fn catalog_of(n: usize) -> Catalog {
        let games = (0..n)
            .map(|i| record(&format!("g{}", i), &format!("Game {}", i)))
            .collect();
        Catalog::from_records(games).unwrap()
    }

    #[test]
    fn test_initial_view_is_grid() {
        let controller = SelectionController::default();
        assert_eq!(controller.view(), View::Grid);
    }

    #[test]
    fn test_select_switches_to_player() {
        let catalog = catalog_of(3);
        let mut controller = SelectionController::default();
        controller.select(&catalog, "g1");
        assert_eq!(controller.view(), View::Player);
        assert_eq!(controller.selected(&catalog).unwrap().id, "g1");
    }

    #[test]
    fn test_select_unknown_id_is_a_no_op() {
        let catalog = catalog_of(3);
        let mut controller = SelectionController::default();
        controller.select(&catalog, "zzz");
        assert_eq!(controller.view(), View::Grid);
        assert!(controller.selected(&catalog).is_none());

        // Same from the player view: the current selection survives.
        controller.select(&catalog, "g0");
        controller.select(&catalog, "zzz");
        assert_eq!(controller.view(), View::Player);
        assert_eq!(controller.selected(&catalog).unwrap().id, "g0");
    }

    #[test]
    fn test_select_while_open_swaps_selection() {
        let catalog = catalog_of(3);
        let mut controller = SelectionController::default();
        controller.select(&catalog, "g0");
        controller.select(&catalog, "g2");
        assert_eq!(controller.view(), View::Player);
        assert_eq!(controller.selected(&catalog).unwrap().id, "g2");
    }

    #[test]
    fn test_clear_resets_selection_and_query() {
        let mut catalog = catalog_of(3);
        let mut controller = SelectionController::default();
        catalog.set_query("game".to_string());
        controller.select(&catalog, "g1");

        controller.clear(&mut catalog);
        assert_eq!(controller.view(), View::Grid);
        assert!(controller.selected(&catalog).is_none());
        assert_eq!(catalog.query(), "");
        assert_eq!(catalog.filtered_games().len(), 3);
    }

    #[test]
    fn test_suggestions_exclude_selected() {
        let catalog = catalog_of(10);
        let mut controller = SelectionController::default();
        controller.select(&catalog, "g2");

        let suggestions = controller.suggestions(&catalog);
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
        assert!(suggestions.iter().all(|g| g.id != "g2"));
        let ids: Vec<&str> = suggestions.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["g0", "g1", "g3", "g4", "g5", "g6"]);
    }

    #[test]
    fn test_suggestions_length_with_small_catalog() {
        let catalog = catalog_of(4);
        let mut controller = SelectionController::default();
        controller.select(&catalog, "g0");
        assert_eq!(controller.suggestions(&catalog).len(), 3);
    }

    #[test]
    fn test_scenario_select_b_from_chess_catalog() {
        let catalog = Catalog::from_records(vec![
            record("a", "Chess Master"),
            record("b", "Speed Run"),
            record("c", "Chess Puzzle"),
        ])
        .unwrap();
        let mut controller = SelectionController::default();
        controller.select(&catalog, "b");

        assert_eq!(controller.view(), View::Player);
        assert_eq!(controller.selected(&catalog).unwrap().id, "b");
        let ids: Vec<&str> = controller
            .suggestions(&catalog)
            .iter()
            .map(|g| g.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_empty_catalog_stays_on_grid() {
        let catalog = Catalog::default();
        let mut controller = SelectionController::default();
        controller.select(&catalog, "anything");
        assert_eq!(controller.view(), View::Grid);
        assert!(controller.suggestions(&catalog).is_empty());
    }
}
