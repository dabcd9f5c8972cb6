use egui::{RichText, ScrollArea};

use super::components::GameCard;
use super::styles;
use crate::catalog::Catalog;

#[derive(Default)]
pub struct GridView;

pub enum GridAction {
    Select(String),
}

impl GridView {
    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        catalog: &Catalog,
        loading: bool,
    ) -> Option<GridAction> {
        let mut action = None;

        ScrollArea::vertical().show(ui, |ui| {
            // Hero
            ui.add_space(16.0);
            ui.label(RichText::new("PLAY WITHOUT").size(36.0).strong());
            ui.label(
                RichText::new("LIMITS.")
                    .size(36.0)
                    .strong()
                    .color(styles::ACCENT),
            );
            ui.add_space(6.0);
            ui.label(
                RichText::new(
                    "A curated collection of web games that work anywhere. \
                     No downloads, just play.",
                )
                .size(15.0)
                .color(styles::TEXT_SECONDARY),
            );
            ui.add_space(24.0);

            let available_width = ui.available_width();
            let card_width = 280.0;
            let card_spacing = 15.0;
            let cards_per_row = (available_width / (card_width + card_spacing))
                .floor()
                .max(1.0) as usize;

            let games = catalog.filtered_games();

            if games.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(60.0);
                    if loading {
                        ui.add(egui::Spinner::new().size(28.0));
                        ui.add_space(10.0);
                        ui.label(
                            RichText::new("Loading catalog...")
                                .size(16.0)
                                .color(styles::TEXT_SECONDARY),
                        );
                    } else {
                        ui.label(
                            RichText::new("No games found")
                                .size(18.0)
                                .color(styles::TEXT_SECONDARY),
                        );
                        if catalog.query().is_empty() {
                            ui.label(
                                RichText::new("The catalog is empty or failed to load")
                                    .color(styles::TEXT_SECONDARY),
                            );
                        }
                    }
                });
            } else {
                for row_games in games.chunks(cards_per_row) {
                    ui.horizontal(|ui| {
                        for game in row_games {
                            if GameCard::show(ui, game) {
                                action = Some(GridAction::Select(game.id.clone()));
                            }
                            ui.add_space(card_spacing);
                        }
                    });
                    ui.add_space(15.0);
                }
            }
        });

        action
    }
}
