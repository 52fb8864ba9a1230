use std::time::Duration;

use crate::components::{banner, header, nav, toast};
use crate::screens::{dashboard, donors, finder, inventory, register};
use bloodbank_app_core::{viewmodel, AppCommand, BloodbankApplication, View};
use eframe::egui;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, tui, TuiBuilderLogic};

const IDLE_REPAINT: Duration = Duration::from_millis(250);

pub struct BloodbankUiApp {
    core: BloodbankApplication,
    today: String,
}

impl BloodbankUiApp {
    pub fn new(mut core: BloodbankApplication) -> Self {
        core.dispatch(AppCommand::LoadInitialState);
        Self {
            core,
            today: viewmodel::today_label(),
        }
    }
}

impl eframe::App for BloodbankUiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.core.tick();
        let state = self.core.state();
        let mut cmds: Vec<AppCommand> = Vec::new();

        if let Some(max_passes) = std::num::NonZeroUsize::new(3) {
            ctx.options_mut(|options| options.max_passes = max_passes);
        }
        ctx.style_mut(|style| {
            // `Extend` keeps text measurement width-independent for egui_taffy's
            // multi-pass layout. Long paragraphs opt back into wrapping.
            style.wrap_mode = Some(egui::TextWrapMode::Extend);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            tui(ui, ui.id().with("root"))
                .reserve_available_space()
                .style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    size: percent(1.),
                    min_size: taffy::Size {
                        width: percent(1.),
                        height: length(0.0),
                    },
                    ..Default::default()
                })
                .show(|tui| {
                    if let Some(vm) = viewmodel::banner_vm(&state) {
                        if banner::draw(&mut *tui, &vm).retry_clicked {
                            cmds.push(AppCommand::Retry);
                        }
                    }

                    tui.style(taffy::Style {
                        size: taffy::Size {
                            width: percent(1.),
                            height: length(56.0),
                        },
                        flex_shrink: 0.0,
                        ..Default::default()
                    })
                    .add(|tui| header::draw(tui, &self.today));

                    tui.style(taffy::Style {
                        size: taffy::Size {
                            width: percent(1.),
                            height: length(44.0),
                        },
                        flex_shrink: 0.0,
                        ..Default::default()
                    })
                    .add(|tui| {
                        if let Some(view) = nav::draw(tui, state.view) {
                            cmds.push(AppCommand::Navigate(view));
                        }
                    });

                    tui.style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Column,
                        flex_grow: 1.0,
                        flex_basis: length(0.0),
                        size: taffy::Size {
                            width: percent(1.),
                            height: auto(),
                        },
                        min_size: taffy::Size {
                            width: length(0.0),
                            height: length(0.0),
                        },
                        overflow: taffy::Point {
                            x: taffy::Overflow::Hidden,
                            y: taffy::Overflow::Scroll,
                        },
                        padding: length(24.0),
                        ..Default::default()
                    })
                    .add(|tui| match state.view {
                        View::Dashboard => {
                            dashboard::draw(tui, &viewmodel::dashboard_vm(&state), &mut cmds)
                        }
                        View::Find => finder::draw(tui, &viewmodel::finder_vm(&state), &mut cmds),
                        View::Register => {
                            register::draw(tui, &viewmodel::registration_vm(&state), &mut cmds)
                        }
                        View::Donors => {
                            donors::draw(tui, &viewmodel::donor_list_vm(&state), &mut cmds)
                        }
                        View::Inventory => inventory::draw(tui, &viewmodel::inventory_vm(&state)),
                    });
                });
        });

        if let Some(n) = viewmodel::toast_vm(&state) {
            if toast::draw(ctx, &n).close_clicked {
                cmds.push(AppCommand::DismissNotification);
            }
        }

        let had_input = !cmds.is_empty();
        for cmd in cmds {
            self.core.dispatch(cmd);
        }

        // Background results only arrive through `tick`, so keep polling.
        if had_input {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(IDLE_REPAINT);
        }
    }
}
