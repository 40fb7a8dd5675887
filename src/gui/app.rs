use std::fs;

use eframe::egui;

use super::{
    error_modal::ErrorModal,
    quiz,
    review,
    settings::{
        self,
        SettingsData,
        SettingsPanel,
    },
    study::{
        self,
        StudyState,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::TopBar,
};
use crate::{
    core::{
        tasks::{
            PendingImport,
            TaskManager,
            TaskResult,
        },
        EntryStore,
        KanshuError,
        QuizSession,
        ReviewTracker,
    },
    persistence::{
        self,
        load_json_or_default,
        save_json,
    },
};

const SANS_FAMILY: &str = "jp_sans";
const SERIF_FAMILY: &str = "jp_serif";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Study,
    Quiz,
    Review,
    Settings,
}

pub struct KanshuApp {
    // The dataset every mode works from.
    pub store: EntryStore,
    pub mode: Mode,

    // Configuration
    pub settings_data: SettingsData,

    // Mode state
    pub study: StudyState,
    pub quiz: Option<QuizSession>,
    pub tracker: ReviewTracker,
    pub settings_panel: SettingsPanel,

    // UI state
    pub theme: Theme,
    pub error_modal: ErrorModal,

    // Background file work
    pub task_manager: TaskManager,
    pub pending_import: PendingImport,
}

impl KanshuApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_data = load_json_or_default::<SettingsData>("settings.json");
        let store = persistence::load_store();

        let study = StudyState {
            selected_id: store.first_id().map(str::to_string),
            ..StudyState::default()
        };

        let app = Self {
            store,
            mode: Mode::Study,
            settings_data,
            study,
            quiz: None,
            tracker: ReviewTracker::default(),
            settings_panel: SettingsPanel::default(),
            theme: Theme::night(),
            error_modal: ErrorModal::default(),
            task_manager: TaskManager::new(),
            pending_import: PendingImport::default(),
        };

        setup_fonts(&cc.egui_ctx);
        set_theme(&cc.egui_ctx, app.theme.clone());
        apply_font_family(&cc.egui_ctx, app.settings_data.use_serif_font);

        cc.egui_ctx.set_theme(if app.settings_data.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });

        app
    }

    /// The dataset the current view operates on: the full store, or the
    /// learned-only subset while the study filter is active.
    pub fn active_store(&self) -> EntryStore {
        if self.study.filtered {
            self.store.filtered()
        } else {
            self.store.clone()
        }
    }

    /// Replaces the store with a mutated copy. The views only issue edits for
    /// ids and indices they just displayed, so a rejection here is a bug in
    /// the view, not user-facing; it is logged and the store stays as it was.
    pub fn apply_store_edit(&mut self, result: Result<EntryStore, KanshuError>) {
        match result {
            Ok(next) => {
                self.store = next;
                self.study.dirty = true;
            }
            Err(e) => eprintln!("Rejected store edit: {}", e),
        }
    }

    /// Writes the dataset to durable storage if study-mode edits are pending.
    /// Only ever fires from the unfiltered (editable) view; the filtered view
    /// is read-only and never triggers a save.
    pub fn commit_study_edits(&mut self) {
        if !self.study.dirty || self.study.filtered {
            return;
        }

        match persistence::save_store(&self.store) {
            Ok(()) => self.study.dirty = false,
            Err(e) => {
                // Keep the dirty flag so the next navigation retries.
                self.error_modal.show_error(
                    "Save Error",
                    "Could not write the dataset to local storage.",
                    Some(e.to_string()),
                );
            }
        }
    }

    pub fn switch_mode(&mut self, mode: Mode) {
        if self.mode == mode {
            return;
        }

        self.commit_study_edits();

        match mode {
            Mode::Quiz => self.start_quiz(),
            Mode::Settings => self.settings_panel.sync_from(&self.store),
            _ => {}
        }

        self.mode = mode;
    }

    /// Fresh shuffle over the active dataset; the wrong-answer log restarts
    /// with every session.
    pub fn start_quiz(&mut self) {
        self.tracker.reset();
        self.quiz = Some(QuizSession::new(&self.active_store()));
    }

    pub fn replace_store(&mut self, next: EntryStore) {
        self.store = next;
        self.study.selected_id = self.store.first_id().map(str::to_string);
        self.study.dirty = false;
        self.settings_panel.sync_from(&self.store);

        if let Err(e) = persistence::save_store(&self.store) {
            self.error_modal.show_error(
                "Save Error",
                "The dataset was replaced in memory but could not be written to local storage.",
                Some(e.to_string()),
            );
        }
    }

    pub fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, "settings.json") {
            eprintln!("Failed to save settings: {}", e);
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::ImportFinished { request, result } => {
                if !self.pending_import.accept(request) {
                    // A later import superseded this one while it was in
                    // flight; its payload must not overwrite the newer store.
                    println!("Discarding stale import completion (request {})", request);
                    return;
                }

                match result {
                    Ok(store) => self.replace_store(store),
                    Err(e) => self.error_modal.show_error(
                        "Import Error",
                        "The selected file is not a valid dataset. The current data is unchanged.",
                        Some(e),
                    ),
                }
            }

            TaskResult::ExportFinished(result) => match result {
                Ok(path) => println!("Dataset exported to: {}", path),
                Err(e) => self.error_modal.show_error(
                    "Export Error",
                    "Could not write the export file.",
                    Some(e),
                ),
            },
        }
    }
}

impl eframe::App for KanshuApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        if let Some(mode) = TopBar::show(ctx, self.mode, self.tracker.len()) {
            self.switch_mode(mode);
        }

        match self.mode {
            Mode::Study => study::show(ctx, self),
            Mode::Quiz => quiz::show(ctx, self),
            Mode::Review => review::show(ctx, self),
            Mode::Settings => settings::show(ctx, self),
        }

        self.error_modal.show(ctx);
    }
}

/// Registers Japanese-capable fonts from well-known system locations under
/// named families, with egui's defaults as fallback. Both named families
/// always exist so `apply_font_family` can point text styles at them even
/// when no system font was found.
fn setup_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();

    let default_proportional = fonts
        .families
        .get(&egui::FontFamily::Proportional)
        .cloned()
        .unwrap_or_default();

    for (key, candidates) in [
        (SANS_FAMILY, SANS_FONT_PATHS),
        (SERIF_FAMILY, SERIF_FONT_PATHS),
    ] {
        let family = fonts
            .families
            .entry(egui::FontFamily::Name(key.into()))
            .or_insert_with(|| default_proportional.clone());

        if let Some(data) = candidates.iter().find_map(|path| fs::read(path).ok()) {
            family.insert(0, key.to_owned());
            fonts
                .font_data
                .insert(key.to_owned(), std::sync::Arc::new(egui::FontData::from_owned(data)));
        }
    }

    // Kanji in lists and buttons should render even outside the named
    // families.
    if fonts.font_data.contains_key(SANS_FAMILY) {
        fonts
            .families
            .entry(egui::FontFamily::Proportional)
            .or_default()
            .insert(0, SANS_FAMILY.to_owned());
    }

    ctx.set_fonts(fonts);
}

pub fn apply_font_family(ctx: &egui::Context, use_serif: bool) {
    ctx.all_styles_mut(|style| {
        for (_text_style, font_id) in style.text_styles.iter_mut() {
            font_id.family = egui::FontFamily::Name(
                if use_serif { SERIF_FAMILY } else { SANS_FAMILY }.into(),
            );
        }
    });
}

const SANS_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-sans-cjk-fonts/NotoSansCJK-Regular.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    "C:\\Windows\\Fonts\\YuGothM.ttc",
    "C:\\Windows\\Fonts\\msgothic.ttc",
];

const SERIF_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSerifCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSerifCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-serif-cjk-fonts/NotoSerifCJK-Regular.ttc",
    "C:\\Windows\\Fonts\\yumin.ttf",
    "C:\\Windows\\Fonts\\msmincho.ttc",
];
