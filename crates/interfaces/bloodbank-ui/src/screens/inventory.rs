use crate::theme::*;
use crate::utils::{card_bg, card_style, card_title, tile_bg};
use bloodbank_app_core::viewmodel::StockVm;
use eframe::egui;
use egui_taffy::bg::simple::TuiBuilderLogicWithBackground;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, stock: &[StockVm]) {
    tui.style(card_style()).bg_add(card_bg(), |tui| {
        tui.ui(|ui| card_title(ui, "Blood Inventory Management"));

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            flex_wrap: taffy::FlexWrap::Wrap,
            gap: length(16.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .add(|tui| {
            for item in stock {
                let status_col = stock_color(item.status);
                tui.id(egui_taffy::tid(("stock_cell", item.blood_type.as_str())))
                    .style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Column,
                        align_items: Some(taffy::AlignItems::Center),
                        padding: length(20.0),
                        gap: length(4.0),
                        size: taffy::Size {
                            width: length(160.0),
                            height: auto(),
                        },
                        ..Default::default()
                    })
                    .bg_add(tile_bg(status_col), |tui| {
                        tui.label(
                            egui::RichText::new(item.blood_type.as_str())
                                .size(28.0)
                                .strong()
                                .color(blood_type_color(item.blood_type)),
                        );
                        tui.label(
                            egui::RichText::new(item.units.to_string())
                                .size(22.0)
                                .strong()
                                .color(COL_TEXT),
                        );
                        tui.label(egui::RichText::new("units").size(12.0).color(COL_TEXT_DIM));
                        tui.label(
                            egui::RichText::new(item.status_label)
                                .size(13.0)
                                .strong()
                                .color(status_col),
                        );
                    });
            }
        });
    });
}
