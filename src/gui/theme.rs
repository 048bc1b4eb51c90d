use eframe::egui::{
    self,
    Color32,
    RichText,
    Stroke,
    Visuals,
};

use crate::form::AverageBand;

#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dracula()
    }
}

impl Theme {
    pub fn dracula() -> Self {
        Theme { dark: ThemeDetails::dracula(), light: ThemeDetails::dracula_light() }
    }

    fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).purple)
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).red
    }

    pub fn orange(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).orange
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).green
    }

    pub fn cyan(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).cyan
    }

    pub fn card_back(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).selection
    }

    pub fn band_color(&self, ctx: &egui::Context, band: AverageBand) -> Color32 {
        match band {
            AverageBand::Low => self.red(ctx),
            AverageBand::Medium => self.orange(ctx),
            AverageBand::High => self.green(ctx),
        }
    }
}

#[derive(Clone)]
struct ThemeDetails {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    red: Color32,
    orange: Color32,
    green: Color32,
    purple: Color32,
    cyan: Color32,
    background_darker: Color32,
    background_dark: Color32,
    background_light: Color32,
}

impl ThemeDetails {
    //Colors from:
    //https://github.com/ShabbirHasan1/egui_dracula/blob/master/src/lib.rs
    fn dracula() -> Self {
        Self {
            background: Color32::from_rgb(0x28, 0x2a, 0x36),
            foreground: Color32::from_rgb(0xf8, 0xf8, 0xf2),
            selection: Color32::from_rgb(0x44, 0x47, 0x5a),
            red: Color32::from_rgb(0xff, 0x55, 0x55),
            orange: Color32::from_rgb(0xff, 0xb8, 0x6c),
            green: Color32::from_rgb(0x50, 0xfa, 0x7b),
            purple: Color32::from_rgb(189, 147, 249),
            cyan: Color32::from_rgb(139, 233, 253),
            background_darker: Color32::from_rgb(25, 26, 33),
            background_dark: Color32::from_rgb(33, 35, 53),
            background_light: Color32::from_rgb(52, 54, 66),
        }
    }

    fn dracula_light() -> Self {
        Self {
            background: Color32::from_rgb(248, 248, 242),
            foreground: Color32::from_rgb(40, 42, 54),
            selection: Color32::from_rgb(200, 200, 220),
            red: Color32::from_rgb(200, 80, 80),
            orange: Color32::from_rgb(220, 150, 90),
            green: Color32::from_rgb(80, 200, 120),
            purple: Color32::from_rgb(150, 120, 220),
            cyan: Color32::from_rgb(80, 190, 230),
            background_darker: Color32::from_rgb(235, 235, 230),
            background_dark: Color32::from_rgb(245, 245, 240),
            background_light: Color32::from_rgb(255, 255, 250),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails, is_dark: bool) {
    let (mut visuals, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    visuals.widgets.noninteractive.bg_fill = theme.background;
    visuals.widgets.noninteractive.fg_stroke.color = theme.foreground;
    visuals.widgets.inactive.bg_fill = theme.background_light;
    visuals.widgets.inactive.fg_stroke.color = theme.foreground;
    visuals.widgets.hovered.bg_fill = theme.selection;
    visuals.widgets.hovered.bg_stroke = Stroke { color: theme.cyan, ..visuals.widgets.hovered.bg_stroke };
    visuals.widgets.active.bg_fill = theme.selection;
    visuals.widgets.active.bg_stroke = Stroke { color: theme.cyan, ..visuals.widgets.active.bg_stroke };
    visuals.selection.bg_fill = theme.selection;
    visuals.hyperlink_color = theme.cyan;
    visuals.extreme_bg_color = theme.background_darker;
    visuals.error_fg_color = theme.red;
    visuals.warn_fg_color = theme.orange;
    visuals.window_fill = theme.background;
    visuals.panel_fill = theme.background_dark;

    ctx.set_visuals_of(variant, visuals);
}
