use crate::theme::*;
use bloodbank_app_core::{Notification, NotificationKind};
use eframe::egui;

pub struct ToastResponse {
    pub close_clicked: bool,
}

/// Floats over the top-right corner, outside the taffy tree.
pub fn draw(ctx: &egui::Context, n: &Notification) -> ToastResponse {
    let mut close_clicked = false;
    let color = match n.kind {
        NotificationKind::Success => COL_SUCCESS,
        NotificationKind::Error => COL_DANGER,
    };

    egui::Area::new(egui::Id::new("notification_toast"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(color)
                .corner_radius(6.0)
                .inner_margin(egui::Margin::same(12))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&n.message).strong().color(COL_SURFACE));
                        let close = egui::Button::new(egui::RichText::new("x").color(COL_SURFACE))
                            .frame(false);
                        if ui.add(close).clicked() {
                            close_clicked = true;
                        }
                    });
                });
        });

    ToastResponse { close_clicked }
}
