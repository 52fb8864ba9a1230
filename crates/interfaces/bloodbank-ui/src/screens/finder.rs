use crate::components::forms::text_field;
use crate::theme::*;
use crate::utils::{card_bg, card_style, card_title, cmd_button, paragraph, tile_bg};
use bloodbank_app_core::viewmodel::{FinderBodyVm, FinderRowVm, FinderVm};
use bloodbank_app_core::{AppCommand, CriteriaEdit};
use eframe::egui;
use egui_taffy::bg::simple::TuiBuilderLogicWithBackground;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, vm: &FinderVm, cmds: &mut Vec<AppCommand>) {
    tui.style(card_style()).bg_add(card_bg(), |tui| {
        tui.ui(|ui| card_title(ui, "Find Available Donors"));

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            align_items: Some(taffy::AlignItems::FlexEnd),
            gap: length(12.0),
            padding: length(12.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .bg_add(tile_bg(COL_BORDER), |tui| {
            tui.style(taffy::Style {
                flex_grow: 1.0,
                flex_basis: length(0.0),
                ..Default::default()
            })
            .add(|tui| {
                if let Some(v) = text_field(tui, "State", &vm.state, "e.g., CA") {
                    cmds.push(AppCommand::EditCriteria(CriteriaEdit::State(v)));
                }
            });
            tui.style(taffy::Style {
                flex_grow: 1.0,
                flex_basis: length(0.0),
                ..Default::default()
            })
            .add(|tui| {
                if let Some(v) = text_field(tui, "City", &vm.city, "e.g., Los Angeles") {
                    cmds.push(AppCommand::EditCriteria(CriteriaEdit::City(v)));
                }
            });
            if tui
                .ui(|ui| cmd_button(ui, vm.search_label, "primary", vm.can_search))
                .clicked()
            {
                cmds.push(AppCommand::SearchDonors);
            }
        });

        match &vm.body {
            FinderBodyVm::Prompt => {
                tui.label(
                    egui::RichText::new("Please enter a location to find donors.")
                        .color(COL_TEXT_DIM),
                );
            }
            FinderBodyVm::Searching => {
                tui.style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Row,
                    gap: length(8.0),
                    align_items: Some(taffy::AlignItems::Center),
                    ..Default::default()
                })
                .add(|tui| {
                    tui.ui_add(egui::Spinner::new());
                    tui.label("Searching...");
                });
            }
            FinderBodyVm::Results {
                heading,
                rows,
                outreach_button,
                outreach,
            } => {
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
                    tui.label(egui::RichText::new(heading).size(16.0).strong().color(COL_TEXT));
                    if let Some((label, enabled)) = outreach_button {
                        if tui
                            .ui(|ui| cmd_button(ui, label, "teal", *enabled))
                            .clicked()
                        {
                            cmds.push(AppCommand::GenerateOutreachMessage);
                        }
                    }
                });

                if let Some(message) = outreach {
                    let color = if message.failed { COL_DANGER } else { COL_TEXT };
                    tui.style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Column,
                        padding: length(12.0),
                        gap: length(8.0),
                        size: taffy::Size {
                            width: percent(1.),
                            height: auto(),
                        },
                        ..Default::default()
                    })
                    .bg_add(tile_bg(COL_TEXT_DIM), |tui| {
                        tui.ui(|ui| paragraph(ui, &message.text, color));
                        let copied = tui.ui(|ui| {
                            let clicked = cmd_button(ui, "Copy", "outline", true).clicked();
                            if clicked {
                                ui.ctx().copy_text(message.text.clone());
                            }
                            clicked
                        });
                        if copied {
                            cmds.push(AppCommand::OutreachCopied);
                        }
                    });
                }

                for (i, row) in rows.iter().enumerate() {
                    result_row(&mut *tui, i, row);
                }
            }
        }
    });
}

fn result_row<'a>(tui: impl TuiBuilderLogic<'a>, index: usize, row: &FinderRowVm) {
    tui.id(egui_taffy::tid(("finder_row", index)))
        .style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            justify_content: Some(taffy::JustifyContent::SpaceBetween),
            align_items: Some(taffy::AlignItems::Center),
            padding: length(12.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .bg_add(tile_bg(COL_SUCCESS), |tui| {
            tui.label(egui::RichText::new(&row.first_name).strong().color(COL_TEXT));
            tui.label(
                egui::RichText::new(row.blood_type.as_str())
                    .size(22.0)
                    .strong()
                    .color(blood_type_color(row.blood_type)),
            );
            tui.label(egui::RichText::new(&row.location).color(COL_TEXT_DIM));
        });
}
