use egui::RichText;

use super::SearchBar;
use crate::gui::styles;

#[derive(Default)]
pub struct HeaderEvents {
    pub home_clicked: bool,
    pub query_changed: bool,
    pub fullscreen_clicked: bool,
}

pub struct Header;

impl Header {
    pub fn show(ui: &mut egui::Ui, search_query: &mut String) -> HeaderEvents {
        let mut events = HeaderEvents::default();

        ui.horizontal(|ui| {
            // Brand mark, clicking it returns to the grid
            let brand = ui.add(
                egui::Button::new(
                    RichText::new("PLAYHUB")
                        .size(22.0)
                        .strong()
                        .color(styles::ACCENT),
                )
                .frame(false),
            );
            if brand.on_hover_text("Back to the catalog").clicked() {
                events.home_clicked = true;
            }

            ui.add_space(20.0);
            events.query_changed = SearchBar::show(ui, search_query);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(RichText::new("⛶").size(16.0))
                    .on_hover_text("Toggle fullscreen")
                    .clicked()
                {
                    events.fullscreen_clicked = true;
                }
            });
        });

        events
    }
}
