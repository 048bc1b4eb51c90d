use eframe::egui;

use crate::gui::theme::Theme;

pub const ACK_MESSAGE: &str = "Thank you! Your feedback has been submitted.";

/// The transient "submitted" popup drawn over the form.
pub struct AckOverlay;

impl AckOverlay {
    pub fn show(ctx: &egui::Context, theme: &Theme, visible: bool) {
        if !visible {
            return;
        }

        egui::Window::new("ack_popup")
            .order(egui::Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .title_bar(false)
            .anchor(egui::Align2::CENTER_TOP, egui::Vec2::new(0.0, 48.0))
            .frame(
                egui::Frame::popup(&ctx.style()).stroke(egui::Stroke::new(2.0, theme.green(ctx))),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("✔").size(20.0).color(theme.green(ctx)));
                    ui.label(egui::RichText::new(ACK_MESSAGE).size(15.0));
                });
            });
    }
}
