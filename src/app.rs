// src/app.rs
use eframe::egui;

use crate::analysis::AnalysisMethod;
use crate::state::AppState;

pub struct SentiscopeApp {
    state: AppState,
}

impl SentiscopeApp {
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
        }
    }

    fn show_settings(&mut self, ui: &mut egui::Ui) {
        ui.heading("Analysis Settings");
        ui.add_space(8.0);

        ui.label("Choose Analysis Method:");
        egui::ComboBox::from_id_source("method_selector")
            .selected_text(self.state.method.label())
            .show_ui(ui, |ui| {
                for method in AnalysisMethod::ALL {
                    ui.selectable_value(&mut self.state.method, method, method.label());
                }
            });
    }
}

impl eframe::App for SentiscopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("💬 Sentiment Analysis");
            ui.strong("Analyze the sentiment of any text using multiple methods!");
            ui.add_space(4.0);
        });

        egui::SidePanel::left("settings_panel")
            .resizable(false)
            .default_width(180.0)
            .show(ctx, |ui| {
                self.show_settings(ui);
            });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.add_space(2.0);
            ui.label("Built with ❤ using Rust and egui");
            ui.add_space(2.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_source("main_scroll")
                .show(ui, |ui| {
                    crate::ui::analysis::show_analysis_view(ui, &mut self.state);

                    ui.add_space(8.0);
                    ui.separator();
                    ui.add_space(8.0);

                    crate::ui::samples::show_samples_view(ui, &mut self.state);

                    ui.add_space(8.0);
                    ui.separator();
                    ui.add_space(8.0);

                    crate::ui::help::show_help_view(ui);
                });
        });

        // Show error modal if needed
        let error_msg = self.state.error_message.clone(); // Clone first
        if let Some(error) = error_msg {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.state.error_message = None;
                    }
                });
        }
    }
}
