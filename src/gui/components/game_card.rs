use egui::{Color32, RichText, Vec2};

use crate::catalog::GameRecord;
use crate::gui::styles;

pub struct GameCard;

impl GameCard {
    /// Full-size grid card. Returns true when the card was clicked.
    pub fn show(ui: &mut egui::Ui, game: &GameRecord) -> bool {
        let mut clicked = false;

        egui::Frame::none()
            .fill(styles::CARD_BG)
            .stroke(egui::Stroke::new(1.0, styles::CARD_STROKE))
            .rounding(egui::Rounding::same(8.0))
            .inner_margin(egui::Margin::same(0.0))
            .show(ui, |ui| {
                ui.set_min_size(Vec2::new(280.0, 252.0));
                ui.set_max_size(Vec2::new(280.0, 252.0));

                ui.vertical(|ui| {
                    // Thumbnail area, painted placeholder until the image arrives
                    let (rect, response) =
                        ui.allocate_exact_size(Vec2::new(280.0, 158.0), egui::Sense::click());

                    let image_rounding = egui::Rounding {
                        nw: 8.0,
                        ne: 8.0,
                        sw: 0.0,
                        se: 0.0,
                    };

                    let painter = ui.painter();
                    painter.rect_filled(rect, image_rounding, Color32::from_rgb(26, 30, 34));
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        &game.title,
                        egui::FontId::proportional(16.0),
                        styles::TEXT_SECONDARY,
                    );

                    if !game.thumbnail.is_empty() {
                        egui::Image::new(game.thumbnail.as_str())
                            .rounding(image_rounding)
                            .paint_at(ui, rect);
                    }

                    if response.hovered() {
                        let painter = ui.painter();
                        painter.rect_filled(
                            rect,
                            image_rounding,
                            Color32::from_rgba_premultiplied(0, 0, 0, 80),
                        );
                        let badge_rect = egui::Rect::from_min_size(
                            rect.left_bottom() + egui::vec2(12.0, -34.0),
                            egui::vec2(92.0, 22.0),
                        );
                        painter.rect_filled(badge_rect, egui::Rounding::same(11.0), styles::ACCENT);
                        painter.text(
                            badge_rect.center(),
                            egui::Align2::CENTER_CENTER,
                            "PLAY NOW",
                            egui::FontId::proportional(12.0),
                            Color32::BLACK,
                        );
                    }

                    if response.clicked() {
                        clicked = true;
                    }

                    ui.add_space(10.0);

                    ui.horizontal(|ui| {
                        ui.add_space(12.0);
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(&game.title)
                                    .size(16.0)
                                    .strong()
                                    .color(Color32::WHITE),
                            );

                            ui.add_space(4.0);

                            ui.add(
                                egui::Label::new(
                                    RichText::new(&game.description)
                                        .size(12.0)
                                        .color(styles::TEXT_SECONDARY),
                                )
                                .truncate(),
                            );

                            ui.add_space(8.0);

                            let play_button = egui::Button::new(
                                RichText::new("▶ Play")
                                    .size(14.0)
                                    .strong()
                                    .color(Color32::BLACK),
                            )
                            .fill(styles::ACCENT)
                            .min_size(Vec2::new(110.0, 32.0));

                            if ui.add(play_button).clicked() {
                                clicked = true;
                            }
                        });
                    });
                });
            });

        clicked
    }

    /// Compact card for the suggestions row.
    pub fn show_compact(ui: &mut egui::Ui, game: &GameRecord) -> bool {
        let mut clicked = false;

        ui.vertical(|ui| {
            ui.set_width(160.0);

            let (rect, response) =
                ui.allocate_exact_size(Vec2::new(160.0, 90.0), egui::Sense::click());
            let rounding = egui::Rounding::same(6.0);

            ui.painter()
                .rect_filled(rect, rounding, Color32::from_rgb(26, 30, 34));

            if !game.thumbnail.is_empty() {
                egui::Image::new(game.thumbnail.as_str())
                    .rounding(rounding)
                    .paint_at(ui, rect);
            }

            if response.hovered() {
                ui.painter()
                    .rect_stroke(rect, rounding, egui::Stroke::new(1.5, styles::ACCENT_HOVER));
            }

            if response.clicked() {
                clicked = true;
            }

            let title_color = if response.hovered() {
                styles::ACCENT_HOVER
            } else {
                Color32::WHITE
            };
            ui.add(
                egui::Label::new(RichText::new(&game.title).size(12.0).color(title_color))
                    .truncate(),
            );
        });

        clicked
    }
}
