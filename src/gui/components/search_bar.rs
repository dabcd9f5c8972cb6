use egui::RichText;

pub struct SearchBar;

impl SearchBar {
    /// Returns true when the query text was edited this frame.
    pub fn show(ui: &mut egui::Ui, search_query: &mut String) -> bool {
        let mut changed = false;

        ui.horizontal(|ui| {
            ui.label(RichText::new("🔍").size(16.0));
            ui.add_space(5.0);
            let search_edit = egui::TextEdit::singleline(search_query)
                .hint_text("Search games...")
                .desired_width(250.0);
            changed = ui.add(search_edit).changed();
        });

        changed
    }
}
