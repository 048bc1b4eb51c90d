use std::time::Instant;

use eframe::egui;
use tracing::{
    info,
    warn,
};

use super::{
    ack_overlay::AckOverlay,
    error_modal::ErrorModal,
    form_panel::form_panel,
    game_panel::game_panel,
    settings::{
        SettingsData,
        SETTINGS_FILE,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        Tab,
        TopBar,
        TopBarAction,
    },
};
use crate::{
    core::timer,
    form::FormValidator,
    game::MemoryGame,
    persistence::{
        save_json,
        FileStore,
    },
};

pub struct ArcadeApp {
    pub form: FormValidator,
    pub game: MemoryGame,

    // Configuration
    pub settings: SettingsData,

    // UI State
    pub theme: Theme,
    pub tab: Tab,
    pub error_modal: ErrorModal,
}

impl ArcadeApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: SettingsData) -> Self {
        let store = FileStore::open_default();
        info!(path = %store.path().display(), "using best score storage");

        let app = Self {
            form: FormValidator::new(),
            game: MemoryGame::new(Box::new(store), settings.default_difficulty),
            settings,
            theme: Theme::dracula(),
            tab: Tab::Feedback,
            error_modal: ErrorModal::default(),
        };

        set_theme(&cc.egui_ctx, &app.theme);
        app.apply_settings(&cc.egui_ctx);
        app
    }

    fn apply_settings(&self, ctx: &egui::Context) {
        ctx.set_theme(if self.settings.dark_mode { egui::Theme::Dark } else { egui::Theme::Light });
        ctx.set_zoom_factor(self.settings.zoom);
    }

    fn save_settings(&mut self) {
        if let Err(e) = save_json(&self.settings, SETTINGS_FILE) {
            warn!("Failed to save settings: {}", e);
            self.error_modal.report("Settings not saved", "Your preferences could not be written.", &e);
        }
    }

    fn handle_top_bar(&mut self, ctx: &egui::Context, action: TopBarAction) {
        match action {
            TopBarAction::ToggleDarkMode => self.settings.dark_mode = !self.settings.dark_mode,
            TopBarAction::SetZoom(zoom) => self.settings.set_zoom(zoom),
            TopBarAction::SetDefaultDifficulty(difficulty) => {
                self.settings.default_difficulty = difficulty
            }
        }
        self.apply_settings(ctx);
        self.save_settings();
    }

    /// Wakes the UI for the nearest pending timer even without input.
    fn schedule_repaint(&self, ctx: &egui::Context) {
        if let Some(deadline) = timer::earliest(self.form.next_deadline(), self.game.next_deadline())
        {
            ctx.request_repaint_after(deadline.saturating_duration_since(Instant::now()));
        }
    }
}

impl eframe::App for ArcadeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.form.poll(now);
        self.game.poll(now);

        if let Some(action) = TopBar::show(ctx, &mut self.tab, &self.settings) {
            self.handle_top_bar(ctx, action);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.tab {
                Tab::Feedback => form_panel(ui, &mut self.form, &self.theme, now),
                Tab::Memory => {
                    if let Err(e) = game_panel(ui, &mut self.game, &self.theme, now) {
                        warn!("Failed to store best score: {}", e);
                        self.error_modal.report(
                            "Best score not saved",
                            "The new best score is shown but could not be written to disk.",
                            &e,
                        );
                    }
                }
            });
        });

        AckOverlay::show(ctx, &self.theme, self.form.popup().is_visible());
        self.error_modal.show(ctx);
        self.schedule_repaint(ctx);
    }
}
