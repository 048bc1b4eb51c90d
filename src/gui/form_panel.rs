use std::time::Instant;

use eframe::egui::{
    self,
    RichText,
    Stroke,
};

use super::theme::Theme;
use crate::form::{
    FieldKind,
    FieldVisual,
    FormSnapshot,
    FormValidator,
    RATING_COUNT,
};

const FIELD_WIDTH: f32 = 300.0;

pub fn form_panel(ui: &mut egui::Ui, form: &mut FormValidator, theme: &Theme, now: Instant) {
    ui.heading(theme.heading(ui.ctx(), "Feedback"));
    ui.add_space(8.0);

    egui::Grid::new("feedback_form").num_columns(2).spacing([16.0, 10.0]).show(ui, |ui| {
        for kind in FieldKind::ALL {
            ui.label(kind.label());
            ui.vertical(|ui| text_field(ui, form, kind, theme));
            ui.end_row();
        }

        for index in 0..RATING_COUNT {
            ui.label(format!("Rating {}", index + 1));
            let mut rating = form.rating(index);
            if ui.add(egui::Slider::new(&mut rating, 1..=10)).changed() {
                form.set_rating(index, rating);
            }
            ui.end_row();
        }
    });

    ui.add_space(12.0);

    let control = form.submit_control();
    ui.scope(|ui| {
        ui.set_opacity(control.opacity);
        if ui.add_enabled(control.enabled, egui::Button::new("Submit")).clicked() {
            form.submit(now);
        }
    });

    if let Some(snapshot) = form.last_submission() {
        ui.add_space(16.0);
        ui.separator();
        results_block(ui, snapshot, theme);
    }
}

fn text_field(ui: &mut egui::Ui, form: &mut FormValidator, kind: FieldKind, theme: &Theme) {
    let field = form.field(kind);
    let mut text = field.value.clone();
    let outline = match field.visual() {
        FieldVisual::Untouched => None,
        FieldVisual::Valid => Some(theme.green(ui.ctx())),
        FieldVisual::Error => Some(theme.red(ui.ctx())),
    };

    let edit = match kind {
        FieldKind::Message => egui::TextEdit::multiline(&mut text).desired_rows(3),
        FieldKind::Phone => egui::TextEdit::singleline(&mut text).hint_text("+370 6XX XXXXX"),
        _ => egui::TextEdit::singleline(&mut text),
    };

    let response = ui
        .scope(|ui| {
            if let Some(color) = outline {
                let widgets = &mut ui.visuals_mut().widgets;
                widgets.inactive.bg_stroke = Stroke::new(1.5, color);
                widgets.hovered.bg_stroke = Stroke::new(1.5, color);
                ui.visuals_mut().selection.stroke = Stroke::new(1.5, color);
            }
            ui.add(edit.desired_width(FIELD_WIDTH))
        })
        .inner;

    if response.changed() {
        form.input(kind, &text);
    }

    if let Some(error) = form.field(kind).visual().error_text() {
        ui.label(RichText::new(error).small().color(theme.red(ui.ctx())));
    }
}

fn results_block(ui: &mut egui::Ui, snapshot: &FormSnapshot, theme: &Theme) {
    let average_color = theme.band_color(ui.ctx(), snapshot.band());

    egui::Grid::new("form_results").num_columns(2).spacing([16.0, 4.0]).show(ui, |ui| {
        for (label, value) in snapshot.result_rows() {
            ui.strong(format!("{label}:"));
            ui.label(value);
            ui.end_row();
        }

        ui.strong("Average:");
        ui.label(RichText::new(snapshot.average_text()).color(average_color).strong());
        ui.end_row();
    });

    ui.add_space(6.0);
    ui.label(RichText::new(snapshot.signature_line()).strong());
}
