use crate::theme::*;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use bloodbank_app_core::View;

/// Tab strip; returns the tab clicked this frame.
pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, current: View) -> Option<View> {
    let mut selected = None;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        align_items: Some(taffy::AlignItems::Stretch),
        padding: taffy::Rect {
            left: length(12.0),
            right: length(12.0),
            top: length(0.0),
            bottom: length(0.0),
        },
        gap: length(4.0),
        size: taffy::Size {
            width: percent(1.),
            height: percent(1.),
        },
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_SURFACE)
            .with_border_color(COL_BORDER)
            .with_border_width(1.0),
        |tui| {
            for view in View::ALL {
                let active = view == current;
                let response = tui
                    .id(egui_taffy::tid(("nav", view.label())))
                    .style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Column,
                        justify_content: Some(taffy::JustifyContent::Center),
                        padding: taffy::Rect {
                            left: length(12.0),
                            right: length(12.0),
                            top: length(0.0),
                            bottom: length(0.0),
                        },
                        ..Default::default()
                    })
                    .bg_clickable(
                        TuiBackground::new()
                            .with_background_color(if active {
                                COL_ACCENT.linear_multiply(0.08)
                            } else {
                                COL_SURFACE
                            })
                            .with_border_color(if active { COL_ACCENT } else { COL_SURFACE })
                            .with_border_width(1.0),
                        |tui| {
                            tui.label(
                                egui::RichText::new(view.label())
                                    .size(13.0)
                                    .strong()
                                    .color(if active { COL_ACCENT } else { COL_TEXT_DIM }),
                            );
                        },
                    );

                if response.clicked() && !active {
                    selected = Some(view);
                }
            }
        },
    );

    selected
}
