// src/ui/help.rs
use eframe::egui;

pub fn show_help_view(ui: &mut egui::Ui) {
    ui.heading("📖 How to Interpret Results");
    ui.add_space(4.0);

    ui.collapsing("Click to learn more", |ui| {
        ui.strong("Polarity analysis:");
        ui.label("• Polarity: -1 (negative) to +1 (positive)");
        ui.label("• Subjectivity: 0 (objective) to 1 (subjective)");
        ui.add_space(4.0);
        ui.strong("Valence analysis:");
        ui.label("• Compound: -1 (negative) to +1 (positive)");
        ui.label("• Individual scores: 0 to 1 for pos/neg/neu");
    });
}
