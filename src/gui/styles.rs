use egui::{Color32, Rounding, Stroke, Style, Visuals};

pub fn setup_custom_style(ctx: &egui::Context) {
    let mut style = Style {
        visuals: Visuals::dark(),
        ..Default::default()
    };

    // Near-black theme with an emerald accent
    style.visuals.window_fill = Color32::from_rgb(10, 10, 10);
    style.visuals.panel_fill = Color32::from_rgb(12, 12, 14);
    style.visuals.faint_bg_color = Color32::from_rgb(22, 22, 24);
    style.visuals.extreme_bg_color = Color32::from_rgb(6, 6, 8);

    style.visuals.override_text_color = Some(Color32::from_rgb(245, 245, 245));

    // Button styling
    style.visuals.widgets.inactive.bg_fill = Color32::from_rgb(32, 34, 36);
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, Color32::from_rgb(200, 200, 200));
    style.visuals.widgets.inactive.rounding = Rounding::same(6.0);

    style.visuals.widgets.hovered.bg_fill = Color32::from_rgb(44, 46, 48);
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, Color32::from_rgb(240, 240, 240));
    style.visuals.widgets.hovered.rounding = Rounding::same(6.0);

    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::BLACK);
    style.visuals.widgets.active.rounding = Rounding::same(6.0);

    // Selection color (emerald)
    style.visuals.selection.bg_fill = ACCENT;
    style.visuals.selection.stroke = Stroke::new(1.5, ACCENT);

    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);

    ctx.set_style(style);
}

// Palette
pub const CARD_BG: Color32 = Color32::from_rgb(22, 22, 24);
pub const CARD_STROKE: Color32 = Color32::from_rgb(40, 40, 44);
pub const ACCENT: Color32 = Color32::from_rgb(16, 185, 129);
pub const ACCENT_HOVER: Color32 = Color32::from_rgb(52, 211, 153);
pub const SUCCESS_GREEN: Color32 = Color32::from_rgb(76, 175, 80);
pub const ERROR_RED: Color32 = Color32::from_rgb(244, 67, 54);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 160, 170);
