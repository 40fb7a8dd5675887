use eframe::egui;

use super::app::{
    KanshuApp,
    Mode,
};

enum EndAction {
    Stay,
    OpenReview,
    Restart,
}

pub fn show(ctx: &egui::Context, app: &mut KanshuApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let Some(session) = app.quiz.as_mut() else {
            ui.centered_and_justified(|ui| {
                ui.label("Open the Quiz tab to start a session.");
            });
            return;
        };

        if session.is_finished() {
            let score = session.score();
            let mut action = EndAction::Stay;

            ui.vertical_centered(|ui| {
                ui.add_space(48.0);
                ui.heading("Quiz finished!");
                ui.add_space(16.0);
                ui.label(
                    egui::RichText::new(format!("Known: {}", score.correct))
                        .color(app.theme.good(ui.visuals()))
                        .size(18.0),
                );
                ui.label(
                    egui::RichText::new(format!("Missed: {}", score.wrong))
                        .color(app.theme.bad(ui.visuals()))
                        .size(18.0),
                );
                ui.add_space(20.0);

                if score.wrong > 0 && ui.button("Open the wrong-answer notebook").clicked() {
                    action = EndAction::OpenReview;
                }
                if ui.button("Try again").clicked() {
                    action = EndAction::Restart;
                }
            });

            match action {
                EndAction::OpenReview => app.mode = Mode::Review,
                EndAction::Restart => app.start_quiz(),
                EndAction::Stay => {}
            }
            return;
        }

        let Some(id) = session.current_id().map(str::to_string) else {
            return;
        };
        let Some(entry) = app.store.get(&id).cloned() else {
            return;
        };

        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(format!("Card {} / {}", session.position() + 1, session.len()))
                    .color(app.theme.muted(ui.visuals())),
            );
            ui.add_space(28.0);
            ui.label(egui::RichText::new(&entry.character).size(110.0));
            ui.add_space(28.0);

            if !session.revealed() {
                if ui.button(egui::RichText::new("Show answer").size(18.0)).clicked() {
                    session.reveal();
                }
            } else {
                ui.label(egui::RichText::new(&entry.reading).size(28.0));
                if !entry.description.is_empty() {
                    ui.label(egui::RichText::new(&entry.description).color(app.theme.muted(ui.visuals())));
                }
                ui.add_space(20.0);

                ui.horizontal(|ui| {
                    ui.add_space(ui.available_width() / 2.0 - 120.0);
                    if ui
                        .button(egui::RichText::new("I knew it (O)").color(app.theme.good(ui.visuals())))
                        .clicked()
                    {
                        session.answer(true, &mut app.tracker);
                    }
                    if ui
                        .button(egui::RichText::new("I didn't (X)").color(app.theme.bad(ui.visuals())))
                        .clicked()
                    {
                        session.answer(false, &mut app.tracker);
                    }
                });
            }
        });
    });
}
