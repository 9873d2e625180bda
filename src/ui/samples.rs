// src/ui/samples.rs
use eframe::egui;

use crate::analysis::SampleKind;
use crate::state::AppState;

pub fn show_samples_view(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("🧪 Try Sample Texts");
    ui.add_space(4.0);

    ui.columns(3, |columns| {
        for (column, kind) in columns.iter_mut().zip(SampleKind::ALL) {
            let clicked = column
                .add_sized(
                    [column.available_width(), 28.0],
                    egui::Button::new(kind.label()),
                )
                .clicked();
            if clicked {
                state.select_sample(kind);
            }
        }
    });

    // Nothing is shown until a sample has been chosen at least once
    if let Some(text) = state.sample_text() {
        ui.add_space(8.0);
        ui.heading("📝 Sample Text Selected");

        let mut preview = text.to_string();
        ui.add_enabled(
            false,
            egui::TextEdit::multiline(&mut preview).desired_width(f32::INFINITY),
        );
    }
}
