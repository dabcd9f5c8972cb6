use egui::RichText;

use crate::gui::styles;

pub struct StatusBar;

impl StatusBar {
    pub fn show(ui: &mut egui::Ui, message: &str, on_clear: &mut bool) {
        if !message.is_empty() {
            ui.separator();
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(message)
                        .size(13.0)
                        .color(if message.contains("Opened") {
                            styles::SUCCESS_GREEN
                        } else if message.contains("Failed") || message.contains("Error") {
                            styles::ERROR_RED
                        } else {
                            egui::Color32::from_rgb(200, 200, 200)
                        }),
                );
                if ui.button(RichText::new("Clear").size(12.0)).clicked() {
                    *on_clear = true;
                }
            });
        }
    }
}
