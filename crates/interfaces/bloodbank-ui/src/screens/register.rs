use crate::components::forms::{choice_field, text_field};
use crate::utils::{card_bg, card_style, card_title, cmd_button};
use bloodbank_app_core::viewmodel::{DraftFieldVm, RegistrationVm};
use bloodbank_app_core::{AppCommand, DraftEdit};
use bloodbank_core::{BloodType, DraftField, Gender};
use egui_taffy::bg::simple::TuiBuilderLogicWithBackground;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, vm: &RegistrationVm, cmds: &mut Vec<AppCommand>) {
    tui.style(card_style()).bg_add(card_bg(), |tui| {
        tui.ui(|ui| card_title(ui, "Register New Donor"));

        // Two columns, wrapping
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            flex_wrap: taffy::FlexWrap::Wrap,
            gap: length(12.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .add(|tui| {
            for f in &vm.fields {
                field(&mut *tui, f, cmds);

                // Selects sit where the form has always shown them.
                match f.field {
                    DraftField::Phone => {
                        tui.id(egui_taffy::tid("draft_blood_type"))
                            .style(half_width())
                            .add(|tui| {
                                if let Some(bt) = choice_field(
                                    tui,
                                    "Blood Type",
                                    vm.blood_type,
                                    &BloodType::ALL,
                                    BloodType::as_str,
                                ) {
                                    cmds.push(AppCommand::EditDraft(DraftEdit::BloodType(bt)));
                                }
                            });
                    }
                    DraftField::DateOfBirth => {
                        tui.id(egui_taffy::tid("draft_gender"))
                            .style(half_width())
                            .add(|tui| {
                                if let Some(g) =
                                    choice_field(tui, "Gender", vm.gender, &Gender::ALL, Gender::as_str)
                                {
                                    cmds.push(AppCommand::EditDraft(DraftEdit::Gender(g)));
                                }
                            });
                    }
                    _ => {}
                }
            }
        });

        if tui
            .ui(|ui| cmd_button(ui, vm.submit_label, "primary", vm.can_submit))
            .clicked()
        {
            cmds.push(AppCommand::SubmitRegistration);
        }
    });
}

fn half_width() -> taffy::Style {
    taffy::Style {
        size: taffy::Size {
            width: percent(0.48),
            height: auto(),
        },
        flex_grow: 1.0,
        ..Default::default()
    }
}

fn field<'a>(tui: impl TuiBuilderLogic<'a>, f: &DraftFieldVm, cmds: &mut Vec<AppCommand>) {
    tui.id(egui_taffy::tid(("draft_field", f.field.label())))
        .style(half_width())
        .add(|tui| {
            if let Some(value) = text_field(tui, &f.label, &f.value, f.hint) {
                cmds.push(AppCommand::EditDraft(DraftEdit::Text(f.field, value)));
            }
        });
}
