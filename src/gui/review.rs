use eframe::egui;

use super::app::KanshuApp;

pub fn show(ctx: &egui::Context, app: &mut KanshuApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        if app.tracker.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label("No missed answers yet. Take a quiz first!");
            });
            return;
        }

        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            ui.label(app.theme.heading(ui.visuals(), "Wrong-answer notebook"));
            ui.add_space(20.0);

            match app.tracker.current_id().and_then(|id| app.store.get(id)) {
                Some(entry) => {
                    ui.label(egui::RichText::new(&entry.character).size(96.0));
                    ui.add_space(12.0);
                    ui.label(egui::RichText::new(&entry.reading).size(26.0));
                    if !entry.description.is_empty() {
                        ui.label(egui::RichText::new(&entry.description).color(app.theme.muted(ui.visuals())));
                    }

                    if !entry.related.is_empty() {
                        ui.add_space(10.0);
                        ui.separator();
                        ui.add_space(6.0);
                        ui.horizontal_wrapped(|ui| {
                            ui.label(egui::RichText::new("Related words:").color(app.theme.muted(ui.visuals())));
                            for (word, _) in &entry.related {
                                ui.label(egui::RichText::new(word).color(app.theme.accent(ui.visuals())));
                            }
                        });
                    }
                }
                None => {
                    // The id was wrong-answered but has since been removed by
                    // a raw edit or import.
                    ui.label("This entry is no longer in the dataset.");
                }
            }

            ui.add_space(24.0);
            ui.horizontal(|ui| {
                ui.add_space(ui.available_width() / 2.0 - 110.0);

                if ui
                    .add_enabled(app.tracker.has_previous(), egui::Button::new("◀ Prev"))
                    .clicked()
                {
                    app.tracker.previous();
                }

                ui.label(format!("{} / {}", app.tracker.cursor() + 1, app.tracker.len()));

                if ui.add_enabled(app.tracker.has_next(), egui::Button::new("Next ▶")).clicked() {
                    app.tracker.next();
                }
            });
        });
    });
}
