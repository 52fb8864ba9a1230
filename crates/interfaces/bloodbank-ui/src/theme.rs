use bloodbank_core::BloodType;
use eframe::egui::{self, Color32, FontFamily, FontId, Stroke, TextStyle, Visuals};

pub const COL_BG: Color32 = Color32::from_rgb(249, 250, 251);
pub const COL_SURFACE: Color32 = Color32::from_rgb(255, 255, 255);
pub const COL_BORDER: Color32 = Color32::from_rgb(229, 231, 235);
pub const COL_TEXT: Color32 = Color32::from_rgb(17, 24, 39);
pub const COL_TEXT_DIM: Color32 = Color32::from_rgb(107, 114, 128);
pub const COL_ACCENT: Color32 = Color32::from_rgb(220, 38, 38);
pub const COL_TEAL: Color32 = Color32::from_rgb(20, 184, 166);
pub const COL_WARN: Color32 = Color32::from_rgb(234, 88, 12);
pub const COL_DANGER: Color32 = Color32::from_rgb(220, 38, 38);
pub const COL_SUCCESS: Color32 = Color32::from_rgb(22, 163, 74);

// Tile tints
pub const COL_INFO: Color32 = Color32::from_rgb(37, 99, 235);

pub fn setup(ctx: &egui::Context) {
    let mut visuals = Visuals::light();
    visuals.window_fill = COL_SURFACE;
    visuals.panel_fill = COL_BG;

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, COL_BORDER);
    visuals.widgets.inactive.bg_fill = COL_SURFACE;
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, COL_BORDER);

    visuals.widgets.hovered.bg_fill = COL_ACCENT.linear_multiply(0.08);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, COL_ACCENT);

    visuals.widgets.active.bg_fill = COL_ACCENT;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, COL_SURFACE);

    visuals.selection.bg_fill = COL_ACCENT.linear_multiply(0.25);
    visuals.selection.stroke = Stroke::new(1.0, COL_ACCENT);

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.text_styles = [
        (TextStyle::Heading, FontId::new(20.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
        (
            TextStyle::Monospace,
            FontId::new(13.0, FontFamily::Monospace),
        ),
        (TextStyle::Button, FontId::new(13.0, FontFamily::Proportional)),
        (TextStyle::Small, FontId::new(11.0, FontFamily::Proportional)),
    ]
    .into();
    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.visuals.button_frame = true;

    ctx.set_style(style);
}

/// One fixed colour per blood type, positive types lighter than negative.
pub fn blood_type_color(bt: BloodType) -> Color32 {
    match bt {
        BloodType::APositive => Color32::from_rgb(220, 38, 38),
        BloodType::ANegative => Color32::from_rgb(153, 27, 27),
        BloodType::BPositive => Color32::from_rgb(37, 99, 235),
        BloodType::BNegative => Color32::from_rgb(30, 64, 175),
        BloodType::AbPositive => Color32::from_rgb(147, 51, 234),
        BloodType::AbNegative => Color32::from_rgb(107, 33, 168),
        BloodType::OPositive => Color32::from_rgb(22, 163, 74),
        BloodType::ONegative => Color32::from_rgb(22, 101, 52),
    }
}

pub fn stock_color(status: bloodbank_core::StockStatus) -> Color32 {
    match status {
        bloodbank_core::StockStatus::Critical => COL_DANGER,
        bloodbank_core::StockStatus::Low => COL_WARN,
        bloodbank_core::StockStatus::Good => COL_SUCCESS,
    }
}
