use crate::utils::section_label;
use eframe::egui;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

/// Labelled single-line input. Returns the new text when the user edited it.
pub fn text_field<'a>(
    tui: impl TuiBuilderLogic<'a>,
    label: &str,
    value: &str,
    hint: &str,
) -> Option<String> {
    let mut edited = None;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(4.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.ui(|ui| section_label(ui, label));
        let mut buf = value.to_owned();
        let resp = tui.ui_add(
            egui::TextEdit::singleline(&mut buf)
                .hint_text(hint)
                .desired_width(f32::INFINITY),
        );
        if resp.changed() {
            edited = Some(buf);
        }
    });

    edited
}

/// Labelled drop-down over a fixed set of options.
pub fn choice_field<'a, T: Copy + PartialEq>(
    tui: impl TuiBuilderLogic<'a>,
    label: &str,
    current: T,
    options: &[T],
    name: impl Fn(T) -> &'static str,
) -> Option<T> {
    let mut picked = None;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(4.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.ui(|ui| section_label(ui, label));
        tui.ui(|ui| {
            let mut selected = current;
            egui::ComboBox::from_id_salt(label)
                .selected_text(name(current))
                .width(ui.available_width())
                .show_ui(ui, |ui| {
                    for option in options {
                        ui.selectable_value(&mut selected, *option, name(*option));
                    }
                });
            if selected != current {
                picked = Some(selected);
            }
        });
    });

    picked
}
