use crate::theme::*;
use crate::utils::{card_bg, card_style, card_title, tile_bg};
use bloodbank_app_core::viewmodel::{DonorListVm, DonorRowVm};
use bloodbank_app_core::AppCommand;
use eframe::egui;
use egui_taffy::bg::simple::TuiBuilderLogicWithBackground;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, vm: &DonorListVm, cmds: &mut Vec<AppCommand>) {
    tui.style(card_style()).bg_add(card_bg(), |tui| {
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            justify_content: Some(taffy::JustifyContent::SpaceBetween),
            align_items: Some(taffy::AlignItems::Center),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .add(|tui| {
            tui.ui(|ui| card_title(ui, "Registered Donors"));
            tui.label(
                egui::RichText::new(format!("{} of {}", vm.rows.len(), vm.total))
                    .color(COL_TEXT_DIM),
            );
        });

        let mut term = vm.search_term.clone();
        let resp = tui.ui_add(
            egui::TextEdit::singleline(&mut term)
                .hint_text("Search donors by name, email, or blood type...")
                .desired_width(f32::INFINITY),
        );
        if resp.changed() {
            cmds.push(AppCommand::SetSearchTerm(term));
        }

        if vm.rows.is_empty() {
            tui.label(egui::RichText::new("No donors to show.").color(COL_TEXT_DIM));
        }
        for (i, row) in vm.rows.iter().enumerate() {
            donor_row(&mut *tui, i, row);
        }
    });
}

fn donor_row<'a>(tui: impl TuiBuilderLogic<'a>, index: usize, row: &DonorRowVm) {
    tui.id(egui_taffy::tid(("donor_row", index)))
        .style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            align_items: Some(taffy::AlignItems::Center),
            padding: length(12.0),
            gap: length(12.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .bg_add(tile_bg(COL_BORDER), |tui| {
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Column,
                flex_grow: 2.0,
                flex_basis: length(0.0),
                gap: length(2.0),
                ..Default::default()
            })
            .add(|tui| {
                tui.label(egui::RichText::new(&row.name).size(16.0).strong().color(COL_TEXT));
                tui.label(egui::RichText::new(&row.email).size(12.0).color(COL_TEXT_DIM));
                tui.label(egui::RichText::new(&row.location).size(12.0).color(COL_TEXT_DIM));
            });

            tui.style(taffy::Style {
                flex_grow: 1.0,
                flex_basis: length(0.0),
                justify_content: Some(taffy::JustifyContent::Center),
                ..Default::default()
            })
            .add(|tui| {
                tui.label(
                    egui::RichText::new(row.blood_type.as_str())
                        .size(20.0)
                        .strong()
                        .color(blood_type_color(row.blood_type)),
                );
            });

            let badge = if row.eligible { COL_SUCCESS } else { COL_DANGER };
            tui.style(taffy::Style {
                flex_grow: 1.0,
                flex_basis: length(0.0),
                justify_content: Some(taffy::JustifyContent::FlexEnd),
                ..Default::default()
            })
            .add(|tui| {
                tui.style(taffy::Style {
                    padding: length(4.0),
                    ..Default::default()
                })
                .bg_add(tile_bg(badge), |tui| {
                    tui.label(
                        egui::RichText::new(row.eligibility_label)
                            .size(11.0)
                            .color(badge),
                    );
                });
            });
        });
}
