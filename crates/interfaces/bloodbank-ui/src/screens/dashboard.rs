use crate::theme::*;
use crate::utils::{card_bg, card_style, card_title, cmd_button, paragraph, tile_bg};
use bloodbank_app_core::viewmodel::{DashboardVm, StockVm};
use bloodbank_app_core::AppCommand;
use eframe::egui;
use egui_taffy::bg::simple::TuiBuilderLogicWithBackground;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, vm: &DashboardVm, cmds: &mut Vec<AppCommand>) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(16.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .add(|tui| {
        // Summary tiles
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            gap: length(16.0),
            size: taffy::Size {
                width: percent(1.),
                height: length(88.0),
            },
            ..Default::default()
        })
        .add(|tui| {
            summary_tile(&mut *tui, "Total Donors", vm.total_donors, COL_INFO);
            summary_tile(&mut *tui, "Eligible Donors", vm.eligible_donors, COL_SUCCESS);
            summary_tile(&mut *tui, "Low Stock Items", vm.low_stock_count, COL_WARN);
        });

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            gap: length(16.0),
            align_items: Some(taffy::AlignItems::FlexStart),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .add(|tui| {
            tui.style(taffy::Style {
                flex_grow: 2.0,
                flex_basis: length(0.0),
                ..card_style()
            })
            .bg_add(card_bg(), |tui| {
                tui.ui(|ui| card_title(ui, "Campaign Generator"));
                tui.label(
                    egui::RichText::new(
                        "Need inspiration for your next donation drive? Draft campaign ideas \
                         based on the blood types that are currently running low.",
                    )
                    .color(COL_TEXT_DIM),
                );
                if tui
                    .ui(|ui| {
                        cmd_button(ui, vm.campaign_button_label, "primary", vm.can_generate_campaign)
                    })
                    .clicked()
                {
                    cmds.push(AppCommand::GenerateCampaignIdeas);
                }
                if !vm.can_generate_campaign {
                    tui.ui_add(egui::Spinner::new());
                }
                if let Some(ideas) = &vm.campaign_ideas {
                    let color = if ideas.failed { COL_DANGER } else { COL_TEXT };
                    tui.style(taffy::Style {
                        padding: length(12.0),
                        size: taffy::Size {
                            width: percent(1.),
                            height: auto(),
                        },
                        ..Default::default()
                    })
                    .bg_add(tile_bg(COL_TEXT_DIM), |tui| {
                        tui.ui(|ui| paragraph(ui, &ideas.text, color));
                    });
                }
            });

            tui.style(taffy::Style {
                flex_grow: 1.0,
                flex_basis: length(0.0),
                ..card_style()
            })
            .bg_add(card_bg(), |tui| {
                tui.ui(|ui| card_title(ui, "Blood Inventory Status"));
                for row in &vm.stock {
                    stock_row(&mut *tui, row);
                }
            });
        });
    });
}

fn summary_tile<'a>(tui: impl TuiBuilderLogic<'a>, label: &str, value: usize, tint: egui::Color32) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        justify_content: Some(taffy::JustifyContent::Center),
        flex_grow: 1.0,
        flex_basis: length(0.0),
        padding: length(16.0),
        gap: length(4.0),
        ..Default::default()
    })
    .bg_add(tile_bg(tint), |tui| {
        tui.label(egui::RichText::new(label).size(13.0).strong().color(tint));
        tui.label(
            egui::RichText::new(value.to_string())
                .size(28.0)
                .strong()
                .color(COL_TEXT),
        );
    });
}

fn stock_row<'a>(tui: impl TuiBuilderLogic<'a>, row: &StockVm) {
    let status_col = stock_color(row.status);
    tui.id(egui_taffy::tid(("stock_row", row.blood_type.as_str())))
        .style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            justify_content: Some(taffy::JustifyContent::SpaceBetween),
            align_items: Some(taffy::AlignItems::Center),
            padding: length(10.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .bg_add(tile_bg(status_col), |tui| {
            tui.label(
                egui::RichText::new(row.blood_type.as_str())
                    .size(18.0)
                    .strong()
                    .color(blood_type_color(row.blood_type)),
            );
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Column,
                align_items: Some(taffy::AlignItems::FlexEnd),
                ..Default::default()
            })
            .add(|tui| {
                tui.label(
                    egui::RichText::new(format!("{} units", row.units))
                        .strong()
                        .color(COL_TEXT),
                );
                tui.label(egui::RichText::new(row.status_label).size(12.0).color(status_col));
            });
        });
}
