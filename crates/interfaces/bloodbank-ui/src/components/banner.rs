use crate::theme::*;
use crate::utils::cmd_button;
use bloodbank_app_core::BannerVm;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub struct BannerResponse {
    pub retry_clicked: bool,
}

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, vm: &BannerVm) -> BannerResponse {
    let mut retry_clicked = false;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        justify_content: Some(taffy::JustifyContent::SpaceBetween),
        align_items: Some(taffy::AlignItems::Center),
        padding: length(10.0),
        gap: length(12.0),
        flex_shrink: 0.0,
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_DANGER)
            .with_border_width(0.0),
        |tui| {
            tui.label(
                egui::RichText::new(format!("Connection error: {}", vm.message))
                    .strong()
                    .color(COL_SURFACE),
            );
            if tui
                .ui(|ui| cmd_button(ui, vm.retry_label, "outline", vm.can_retry))
                .clicked()
            {
                retry_clicked = true;
            }
        },
    );

    BannerResponse { retry_clicked }
}
