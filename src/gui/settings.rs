use eframe::egui;
use serde::{
    Deserialize,
    Serialize,
};

use super::app::{
    apply_font_family,
    KanshuApp,
};
use crate::core::EntryStore;

#[derive(Clone, Serialize, Deserialize)]
pub struct SettingsData {
    pub use_serif_font: bool,
    pub dark_mode: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { use_serif_font: false, dark_mode: true }
    }
}

/// State of the raw-dataset editor. The buffer is parsed only on an explicit
/// apply, never while typing, so half-finished JSON cannot disturb the store.
#[derive(Default)]
pub struct SettingsPanel {
    pub raw_buffer: String,
}

impl SettingsPanel {
    pub fn sync_from(&mut self, store: &EntryStore) {
        self.raw_buffer = store.to_json_pretty().unwrap_or_default();
    }
}

pub fn show(ctx: &egui::Context, app: &mut KanshuApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Settings");
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            ui.label("Font family:");
            let before = app.settings_data.use_serif_font;
            egui::ComboBox::from_id_salt("font_family")
                .selected_text(if before { "Serif" } else { "Sans" })
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut app.settings_data.use_serif_font, false, "Sans");
                    ui.selectable_value(&mut app.settings_data.use_serif_font, true, "Serif");
                });
            if app.settings_data.use_serif_font != before {
                apply_font_family(ctx, app.settings_data.use_serif_font);
                app.save_settings();
            }
        });

        let before = app.settings_data.dark_mode;
        ui.checkbox(&mut app.settings_data.dark_mode, "Dark mode");
        if app.settings_data.dark_mode != before {
            ctx.set_theme(if app.settings_data.dark_mode {
                egui::Theme::Dark
            } else {
                egui::Theme::Light
            });
            app.save_settings();
        }

        ui.add_space(10.0);
        ui.separator();

        ui.horizontal(|ui| {
            if ui.button("Export to file…").clicked() {
                app.task_manager.export_store(app.store.clone());
            }
            if ui.button("Import from file…").clicked() {
                let request = app.task_manager.import_store();
                app.pending_import.begin(request);
            }
        });

        ui.add_space(10.0);
        ui.separator();

        ui.label(app.theme.heading(ui.visuals(), "Raw dataset"));
        ui.label(
            egui::RichText::new(
                "Changes below take effect on Apply only; invalid JSON leaves the data untouched.",
            )
            .color(app.theme.muted(ui.visuals()))
            .small(),
        );
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            if ui.button("Apply").clicked() {
                match EntryStore::from_json(&app.settings_panel.raw_buffer) {
                    Ok(next) => app.replace_store(next),
                    Err(e) => app.error_modal.show_error(
                        "Invalid Dataset",
                        "The edited JSON was rejected. The current data is unchanged.",
                        Some(e.to_string()),
                    ),
                }
            }
            if ui.button("Revert").clicked() {
                app.settings_panel.sync_from(&app.store);
            }
        });

        ui.add_space(4.0);
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut app.settings_panel.raw_buffer)
                    .code_editor()
                    .desired_width(f32::INFINITY)
                    .desired_rows(24),
            );
        });
    });
}
