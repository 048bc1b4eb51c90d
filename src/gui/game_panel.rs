use std::time::Instant;

use eframe::egui::{
    self,
    RichText,
};

use super::theme::Theme;
use crate::{
    core::AppError,
    game::{
        CardState,
        Difficulty,
        MemoryGame,
    },
};

const CARD_SIZE: f32 = 72.0;

pub fn game_panel(
    ui: &mut egui::Ui,
    game: &mut MemoryGame,
    theme: &Theme,
    now: Instant,
) -> Result<(), AppError> {
    ui.heading(theme.heading(ui.ctx(), "Memory game"));
    ui.add_space(8.0);

    controls(ui, game, now);
    ui.add_space(6.0);
    stats(ui, game);
    ui.add_space(10.0);

    let clicked = match board(ui, game, theme) {
        Some(index) => game.click(index, now).map(|_| ()),
        None => Ok(()),
    };

    // A failed best-score write still leaves a finished board to celebrate.
    if let Some(message) = game.completion_message() {
        ui.add_space(10.0);
        ui.label(RichText::new(message).size(18.0).color(theme.green(ui.ctx())).strong());
    }

    clicked
}

fn controls(ui: &mut egui::Ui, game: &mut MemoryGame, now: Instant) {
    ui.horizontal(|ui| {
        let mut selected = game.difficulty();
        egui::ComboBox::from_id_salt("memory_difficulty")
            .selected_text(selected.label())
            .show_ui(ui, |ui| {
                for difficulty in Difficulty::ALL {
                    ui.selectable_value(&mut selected, difficulty, difficulty.label());
                }
            });
        if selected != game.difficulty() {
            game.set_difficulty(selected, now);
        }

        if ui.button("Start").clicked() {
            game.start(now);
        }
        if ui.add_enabled(game.can_restart(), egui::Button::new("Restart")).clicked() {
            game.start(now);
        }
    });
}

fn stats(ui: &mut egui::Ui, game: &MemoryGame) {
    let stats = game.stats();
    let best = game.best_scores();

    ui.horizontal(|ui| {
        ui.label(format!("Moves: {}", stats.moves));
        ui.separator();
        ui.label(format!("Matches: {} / {}", stats.matches, stats.total_pairs));
        ui.separator();
        ui.label(format!("Time: {}", stats.elapsed));
    });
    ui.horizontal(|ui| {
        ui.label(format!("Best (easy): {}", best.display(Difficulty::Easy)));
        ui.separator();
        ui.label(format!("Best (hard): {}", best.display(Difficulty::Hard)));
    });
}

/// Draws the cards and returns the index of the one clicked this frame.
fn board(ui: &mut egui::Ui, game: &MemoryGame, theme: &Theme) -> Option<usize> {
    let session = game.session()?;
    let cols = session.grid().cols;
    let mut clicked = None;

    egui::Grid::new("memory_board").spacing([8.0, 8.0]).show(ui, |ui| {
        for (index, card) in session.cards().iter().enumerate() {
            let fill = match card.state {
                CardState::Hidden => theme.card_back(ui.ctx()),
                CardState::Flipped => theme.cyan(ui.ctx()).linear_multiply(0.35),
                CardState::Matched => theme.green(ui.ctx()).linear_multiply(0.35),
            };
            let button = egui::Button::new(RichText::new(card.face()).size(30.0))
                .min_size(egui::vec2(CARD_SIZE, CARD_SIZE))
                .fill(fill);

            if ui.add(button).clicked() {
                clicked = Some(index);
            }
            if (index + 1) % cols == 0 {
                ui.end_row();
            }
        }
    });

    clicked
}
