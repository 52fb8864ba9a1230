use crate::theme::*;
use eframe::egui;
use eframe::egui::Color32;
use egui_taffy::bg::simple::TuiBackground;
use egui_taffy::taffy;
use egui_taffy::taffy::prelude::{auto, length, percent};

pub fn section_label(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(12.0)
            .color(COL_TEXT_DIM)
            .strong(),
    );
}

pub fn card_title(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).size(18.0).strong().color(COL_TEXT));
}

pub fn cmd_button(ui: &mut egui::Ui, label: &str, variant: &str, enabled: bool) -> egui::Response {
    let (fill, stroke_col, text_col) = match variant {
        "primary" => (COL_ACCENT, COL_ACCENT, COL_SURFACE),
        "teal" => (COL_TEAL, COL_TEAL, COL_SURFACE),
        "danger" => (Color32::TRANSPARENT, COL_DANGER, COL_DANGER),
        "outline" => (Color32::TRANSPARENT, COL_BORDER, COL_TEXT),
        _ => (Color32::TRANSPARENT, COL_ACCENT, COL_ACCENT),
    };

    let text = egui::RichText::new(label)
        .size(13.0)
        .color(if enabled { text_col } else { COL_TEXT_DIM });

    let btn = egui::Button::new(text)
        .min_size(egui::vec2(96.0, 30.0))
        .fill(if enabled { fill } else { COL_BORDER })
        .stroke(egui::Stroke::new(
            1.0,
            if enabled { stroke_col } else { COL_BORDER },
        ));

    ui.add_enabled(enabled, btn)
}

/// Wrapping paragraph for generated text, which can be long.
pub fn paragraph(ui: &mut egui::Ui, text: &str, color: Color32) {
    ui.add(egui::Label::new(egui::RichText::new(text).color(color)).wrap());
}

pub fn card_style() -> taffy::Style {
    taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        padding: length(16.0),
        gap: length(10.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    }
}

pub fn card_bg() -> TuiBackground<'static> {
    TuiBackground::new()
        .with_background_color(COL_SURFACE)
        .with_border_color(COL_BORDER)
        .with_border_width(1.0)
        .with_corner_radius(6.0)
}

/// Tinted panel for a single stock or summary cell.
pub fn tile_bg(tint: Color32) -> TuiBackground<'static> {
    TuiBackground::new()
        .with_background_color(tint.linear_multiply(0.08))
        .with_border_color(tint.linear_multiply(0.5))
        .with_border_width(1.0)
        .with_corner_radius(6.0)
}
