use egui::{Color32, RichText, ScrollArea, Vec2};

use super::components::GameCard;
use super::styles;
use crate::catalog::Catalog;
use crate::embed;
use crate::selection::SelectionController;

#[derive(Default)]
pub struct PlayerView;

pub enum PlayerAction {
    Close,
    OpenInBrowser,
    Select(String),
}

impl PlayerView {
    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        catalog: &Catalog,
        selection: &SelectionController,
    ) -> Option<PlayerAction> {
        let game = selection.selected(catalog)?;
        let mut action = None;

        ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(8.0);

            // Title row
            ui.horizontal(|ui| {
                if ui
                    .button(RichText::new("✕").size(18.0))
                    .on_hover_text("Back to the catalog")
                    .clicked()
                {
                    action = Some(PlayerAction::Close);
                }

                ui.add_space(8.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(&game.title).size(22.0).strong());
                    ui.label(
                        RichText::new(&game.description)
                            .size(13.0)
                            .color(styles::TEXT_SECONDARY),
                    );
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(RichText::new("Open in Browser ↗").size(14.0))
                        .clicked()
                    {
                        action = Some(PlayerAction::OpenInBrowser);
                    }
                });
            });

            ui.add_space(12.0);

            // Embed surface: a 16:9 frame for the game, played through the
            // system browser
            let frame_width = ui.available_width();
            let frame_height = (frame_width * 9.0 / 16.0).min(560.0);
            let (rect, _response) =
                ui.allocate_exact_size(Vec2::new(frame_width, frame_height), egui::Sense::hover());
            let rounding = egui::Rounding::same(12.0);

            let painter = ui.painter();
            painter.rect_filled(rect, rounding, Color32::from_rgb(6, 6, 8));
            painter.rect_stroke(rect, rounding, egui::Stroke::new(1.0, styles::CARD_STROKE));

            if !game.thumbnail.is_empty() {
                egui::Image::new(game.thumbnail.as_str())
                    .rounding(rounding)
                    .tint(Color32::from_rgb(90, 90, 90))
                    .paint_at(ui, rect);
            }

            let button_rect =
                egui::Rect::from_center_size(rect.center(), egui::vec2(200.0, 48.0));
            let play_button = egui::Button::new(
                RichText::new("▶ Play in Browser")
                    .size(16.0)
                    .strong()
                    .color(Color32::BLACK),
            )
            .fill(styles::ACCENT)
            .rounding(egui::Rounding::same(24.0));
            if ui.put(button_rect, play_button).clicked() {
                action = Some(PlayerAction::OpenInBrowser);
            }

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Frame permissions: {}", embed::allow_attribute()))
                    .size(11.0)
                    .color(styles::TEXT_SECONDARY),
            );

            // Suggestions
            let suggestions = selection.suggestions(catalog);
            if !suggestions.is_empty() {
                ui.add_space(24.0);
                ui.label(RichText::new("More Games").size(18.0).strong());
                ui.add_space(8.0);

                ui.horizontal_wrapped(|ui| {
                    for suggestion in suggestions {
                        if GameCard::show_compact(ui, suggestion) {
                            action = Some(PlayerAction::Select(suggestion.id.clone()));
                        }
                        ui.add_space(10.0);
                    }
                });
            }

            ui.add_space(12.0);
        });

        action
    }
}
