use eframe::egui::{
    self,
    containers,
};

use super::app::Mode;

pub struct TopBar;

impl TopBar {
    /// Mode selector across the top. Returns the mode the user clicked, if
    /// any; switching is left to the app so it can flush pending edits first.
    pub fn show(ctx: &egui::Context, current: Mode, wrong_count: usize) -> Option<Mode> {
        let mut clicked = None;

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                ui.add_space(4.0);

                let review_label = format!("Review ({})", wrong_count);
                let tabs = [
                    (Mode::Study, "Study"),
                    (Mode::Quiz, "Quiz"),
                    (Mode::Review, review_label.as_str()),
                ];

                for (mode, label) in tabs {
                    if ui.selectable_label(current == mode, label).clicked() {
                        clicked = Some(mode);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(4.0);
                    if ui.selectable_label(current == Mode::Settings, "🔧").clicked() {
                        clicked = Some(Mode::Settings);
                    }
                });
            });
        });

        clicked
    }
}
