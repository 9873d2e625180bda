// src/ui/analysis.rs
use eframe::egui;

use crate::analysis::{PolarityReport, ValenceReport};
use crate::state::AppState;

pub fn show_analysis_view(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Enter Text to Analyze");
    ui.add_space(4.0);

    ui.add_sized(
        [ui.available_width(), 120.0],
        egui::TextEdit::multiline(&mut state.input_text)
            .hint_text("Example: I love this new technology! It's amazing."),
    );

    ui.add_space(8.0);

    if ui.button("🔍 Analyze Sentiment").clicked() {
        state.run_analysis();
    }

    if let Some(warning) = &state.warning_message {
        ui.add_space(4.0);
        ui.colored_label(egui::Color32::YELLOW, warning);
    }

    // Clone the view so the column closures don't fight over state borrows
    let view = state.last_analysis.clone();
    if let Some(view) = view {
        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        ui.columns(2, |columns| {
            if let Some(report) = &view.polarity {
                show_polarity_report(&mut columns[0], report);
            }
            if let Some(report) = &view.valence {
                show_valence_report(&mut columns[1], report);
            }
        });

        ui.add_space(4.0);
        ui.label(format!("Last run: {}", view.timestamp.format("%H:%M:%S")));
    }
}

fn show_polarity_report(ui: &mut egui::Ui, report: &PolarityReport) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.heading("📊 Polarity Analysis");
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label("Sentiment:");
            ui.label(
                egui::RichText::new(report.sentiment.label())
                    .color(report.sentiment.color())
                    .strong(),
            );
        });

        ui.strong(format!("Polarity Score: {:.3}", report.scores.polarity));
        ui.strong(format!("Subjectivity Score: {:.3}", report.scores.subjectivity));

        ui.add_space(8.0);
        score_chart(
            ui,
            "polarity_chart",
            &[
                ("Polarity", report.scores.polarity, report.sentiment.color()),
                (
                    "Subjectivity",
                    report.scores.subjectivity,
                    egui::Color32::from_rgb(100, 150, 255),
                ),
            ],
        );
    });
}

fn show_valence_report(ui: &mut egui::Ui, report: &ValenceReport) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.heading("🎯 Valence Analysis");
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label("Sentiment:");
            ui.label(
                egui::RichText::new(report.sentiment.label())
                    .color(report.sentiment.color())
                    .strong(),
            );
        });

        ui.strong(format!("Compound Score: {:.3}", report.scores.compound));

        ui.collapsing("View Detailed Scores", |ui| {
            ui.label(format!("Positive: {:.3}", report.scores.pos));
            ui.label(format!("Negative: {:.3}", report.scores.neg));
            ui.label(format!("Neutral: {:.3}", report.scores.neu));
        });

        ui.add_space(8.0);
        score_chart(
            ui,
            "valence_chart",
            &[
                ("Compound", report.scores.compound, report.sentiment.color()),
                (
                    "Positive",
                    report.scores.pos,
                    egui::Color32::from_rgb(100, 200, 100),
                ),
                (
                    "Negative",
                    report.scores.neg,
                    egui::Color32::from_rgb(200, 100, 100),
                ),
                ("Neutral", report.scores.neu, egui::Color32::GRAY),
            ],
        );
    });
}

fn score_chart(ui: &mut egui::Ui, id: &str, scores: &[(&str, f64, egui::Color32)]) {
    let plot = egui_plot::Plot::new(id)
        .height(140.0)
        .allow_zoom(false)
        .allow_drag(false)
        .show_background(false)
        .show_axes([false, true])
        .include_y(-1.0)
        .include_y(1.0);

    plot.show(ui, |plot_ui| {
        let bars: Vec<egui_plot::Bar> = scores
            .iter()
            .enumerate()
            .map(|(i, (name, value, color))| {
                egui_plot::Bar::new(i as f64, *value)
                    .name(*name)
                    .width(0.6)
                    .fill(*color)
            })
            .collect();

        plot_ui.bar_chart(egui_plot::BarChart::new(bars));
    });
}
