use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use super::app::KanshuApp;
use crate::core::{
    Bucket,
    EntryStore,
    PairColumn,
    TextField,
};

/// Editor cap for similar-kanji rows; storage itself has no limit.
const MAX_SIMILAR_ROWS: usize = 3;

#[derive(Default)]
pub struct StudyState {
    pub selected_id: Option<String>,
    pub show_sidebar: bool,
    pub filtered: bool,
    /// Edits not yet written to durable storage. Saving happens when the user
    /// navigates away from an entry, not on every keystroke.
    pub dirty: bool,
}

pub fn show(ctx: &egui::Context, app: &mut KanshuApp) {
    let dataset = app.active_store();

    let selection_ok = app.study.selected_id.as_deref().is_some_and(|id| dataset.contains(id));
    if !selection_ok {
        app.study.selected_id = dataset.first_id().map(str::to_string);
    }

    if app.study.show_sidebar {
        egui::SidePanel::left("entry_list").default_width(230.0).show(ctx, |ui| {
            sidebar(ui, app, &dataset);
        });
    }

    egui::TopBottomPanel::bottom("study_nav").show(ctx, |ui| {
        nav_bar(ui, app, &dataset);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| match app.study.selected_id.clone() {
            Some(id) if dataset.contains(&id) => detail_card(ui, app, &id),
            _ => {
                ui.centered_and_justified(|ui| {
                    ui.label("Select a kanji from the list, or add a new one.");
                });
            }
        });
    });
}

fn sidebar(ui: &mut egui::Ui, app: &mut KanshuApp, dataset: &EntryStore) {
    let text_height =
        egui::TextStyle::Body.resolve(ui.style()).size.max(ui.spacing().interact_size.y);
    let ids: Vec<String> = dataset.ids().to_vec();

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(38.0))
        .column(Column::auto().at_least(34.0))
        .column(Column::remainder())
        .body(|mut body| {
            body.rows(text_height + 6.0, ids.len(), |mut row| {
                let id = ids[row.index()].clone();
                let Some(entry) = dataset.get(&id) else {
                    return;
                };
                let selected = app.study.selected_id.as_deref() == Some(id.as_str());

                let mut clicked = false;
                row.col(|ui| {
                    ui.label(
                        egui::RichText::new(format!("{:0>3}", id))
                            .color(app.theme.muted(ui.visuals()))
                            .small(),
                    );
                });
                row.col(|ui| {
                    let glyph =
                        if entry.character.is_empty() { "ㅁ" } else { entry.character.as_str() };
                    clicked |= ui.selectable_label(selected, glyph).clicked();
                });
                row.col(|ui| {
                    let star = if entry.is_learned() { "★ " } else { "" };
                    let reading =
                        if entry.reading.is_empty() { "(unnamed)" } else { entry.reading.as_str() };
                    clicked |= ui.selectable_label(selected, format!("{}{}", star, reading)).clicked();
                });

                if clicked {
                    app.commit_study_edits();
                    app.study.selected_id = Some(id);
                    app.study.show_sidebar = false;
                }
            });
        });
}

fn detail_card(ui: &mut egui::Ui, app: &mut KanshuApp, id: &str) {
    let Some(entry) = app.store.get(id).cloned() else {
        return;
    };
    let editable = !app.study.filtered;

    ui.vertical_centered(|ui| {
        ui.add_space(10.0);
        let glyph = if entry.character.is_empty() { "ㅁ" } else { entry.character.as_str() };
        ui.label(egui::RichText::new(glyph).size(84.0));
    });

    // The glyph itself is only typed in once, while the entry is blank.
    if editable && entry.character.is_empty() {
        let mut character = entry.character.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut character)
                .hint_text("kanji")
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            let result = app.store.set_field(id, TextField::Character, &character);
            app.apply_store_edit(result);
        }
    }

    ui.add_space(8.0);

    if editable {
        let mut reading = entry.reading.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut reading)
                .hint_text("reading")
                .font(egui::TextStyle::Heading)
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            let result = app.store.set_field(id, TextField::Reading, &reading);
            app.apply_store_edit(result);
        }

        let mut description = entry.description.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut description)
                .hint_text("note")
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            let result = app.store.set_field(id, TextField::Description, &description);
            app.apply_store_edit(result);
        }
    } else {
        let reading = if entry.reading.is_empty() { "(unnamed)" } else { entry.reading.as_str() };
        ui.label(egui::RichText::new(reading).heading());
        if !entry.description.is_empty() {
            ui.label(egui::RichText::new(&entry.description).color(app.theme.muted(ui.visuals())));
        }
    }

    ui.add_space(12.0);
    pair_editor(
        ui,
        app,
        id,
        Bucket::Similar,
        &entry.similar,
        editable,
        "Similar kanji",
        "＋ similar kanji",
        Some(MAX_SIMILAR_ROWS),
    );

    ui.add_space(12.0);
    pair_editor(
        ui,
        app,
        id,
        Bucket::Related,
        &entry.related,
        editable,
        "Related words",
        "＋ related word",
        None,
    );
}

#[allow(clippy::too_many_arguments)]
fn pair_editor(
    ui: &mut egui::Ui,
    app: &mut KanshuApp,
    id: &str,
    bucket: Bucket,
    pairs: &[(String, String)],
    editable: bool,
    heading: &str,
    add_label: &str,
    cap: Option<usize>,
) {
    if !pairs.is_empty() {
        ui.label(app.theme.heading(ui.visuals(), heading));
    }

    for (row, (word, gloss)) in pairs.iter().enumerate() {
        ui.horizontal(|ui| {
            if editable {
                let mut word = word.clone();
                if ui.add(egui::TextEdit::singleline(&mut word).desired_width(120.0)).changed() {
                    let result = app.store.set_pair(id, bucket, row, PairColumn::Word, &word);
                    app.apply_store_edit(result);
                }

                let mut gloss = gloss.clone();
                if ui.add(egui::TextEdit::singleline(&mut gloss).desired_width(200.0)).changed() {
                    let result = app.store.set_pair(id, bucket, row, PairColumn::Gloss, &gloss);
                    app.apply_store_edit(result);
                }

                if ui.button("✖").clicked() {
                    let result = app.store.remove_pair(id, bucket, row);
                    app.apply_store_edit(result);
                }
            } else {
                ui.label(format!("{}　{}", word, gloss));
            }
        });
    }

    if editable && cap.is_none_or(|cap| pairs.len() < cap) && ui.button(add_label).clicked() {
        let result = app.store.push_pair(id, bucket);
        app.apply_store_edit(result);
    }
}

fn nav_bar(ui: &mut egui::Ui, app: &mut KanshuApp, dataset: &EntryStore) {
    ui.horizontal(|ui| {
        if ui.selectable_label(app.study.show_sidebar, "☰").clicked() {
            app.study.show_sidebar = !app.study.show_sidebar;
        }

        if ui.selectable_label(app.study.filtered, "★ learned only").clicked() {
            app.commit_study_edits();
            app.study.filtered = !app.study.filtered;
            // The old selection may not exist on the other side of the
            // toggle; jump to the first visible entry.
            app.study.selected_id = app.active_store().first_id().map(str::to_string);
        }

        if !app.study.filtered && ui.button("＋ Add").clicked() {
            app.commit_study_edits();
            let (next, new_id) = app.store.add_entry();
            app.store = next;
            app.study.dirty = true;
            app.study.selected_id = Some(new_id);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let index = app
                .study
                .selected_id
                .as_deref()
                .and_then(|id| dataset.ids().iter().position(|x| x == id));

            let next_enabled = index.is_some_and(|i| i + 1 < dataset.len());
            let prev_enabled = index.is_some_and(|i| i > 0);

            if ui.add_enabled(next_enabled, egui::Button::new("Next ▶")).clicked() {
                if let Some(i) = index {
                    app.commit_study_edits();
                    app.study.selected_id = dataset.ids().get(i + 1).cloned();
                }
            }
            if ui.add_enabled(prev_enabled, egui::Button::new("◀ Prev")).clicked() {
                if let Some(i) = index {
                    app.commit_study_edits();
                    app.study.selected_id = dataset.ids().get(i - 1).cloned();
                }
            }
            if let Some(i) = index {
                ui.label(
                    egui::RichText::new(format!("{} / {}", i + 1, dataset.len()))
                        .color(app.theme.muted(ui.visuals())),
                );
            }
        });
    });
}
