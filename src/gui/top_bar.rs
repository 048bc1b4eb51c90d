use eframe::egui::{
    self,
    containers,
};

use super::settings::SettingsData;
use crate::game::Difficulty;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Feedback,
    Memory,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TopBarAction {
    ToggleDarkMode,
    SetZoom(f32),
    SetDefaultDifficulty(Difficulty),
}

pub struct TopBar;

impl TopBar {
    pub fn show(ctx: &egui::Context, tab: &mut Tab, settings: &SettingsData) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.button("Zoom In").clicked() {
                        action = Some(TopBarAction::SetZoom(settings.zoom + 0.1));
                    }
                    if ui.button("Zoom Out").clicked() {
                        action = Some(TopBarAction::SetZoom(settings.zoom - 0.1));
                    }
                    if ui.button("Reset Zoom").clicked() {
                        action = Some(TopBarAction::SetZoom(1.0));
                    }
                    ui.separator();
                    ui.label("Default difficulty");
                    for difficulty in Difficulty::ALL {
                        let selected = settings.default_difficulty == difficulty;
                        if ui.radio(selected, difficulty.label()).clicked() && !selected {
                            action = Some(TopBarAction::SetDefaultDifficulty(difficulty));
                        }
                    }
                });

                ui.separator();
                ui.selectable_value(tab, Tab::Feedback, "Feedback");
                ui.selectable_value(tab, Tab::Memory, "Memory game");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let icon = if settings.dark_mode { "☀" } else { "🌙" };
                    if ui.button(icon).on_hover_text("Toggle dark mode").clicked() {
                        action = Some(TopBarAction::ToggleDarkMode);
                    }
                });
            });
        });

        action
    }
}
