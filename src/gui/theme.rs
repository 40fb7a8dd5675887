use eframe::egui::{
    self,
    Color32,
    RichText,
    Stroke,
    Visuals,
};
use egui::{
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
};

#[derive(Clone)]
pub struct Theme {
    dark: Palette,
    light: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::night()
    }
}

impl Theme {
    pub fn night() -> Self {
        Theme { dark: Palette::night(), light: Palette::paper() }
    }

    /// Accent colors come from whichever palette matches the visuals in
    /// effect, so light mode gets its own reds and greens.
    fn palette(&self, visuals: &Visuals) -> &Palette {
        if visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn heading(&self, visuals: &Visuals, content: &str) -> RichText {
        RichText::new(content).color(self.palette(visuals).violet)
    }

    pub fn good(&self, visuals: &Visuals) -> Color32 {
        self.palette(visuals).green
    }

    pub fn bad(&self, visuals: &Visuals) -> Color32 {
        self.palette(visuals).red
    }

    pub fn accent(&self, visuals: &Visuals) -> Color32 {
        self.palette(visuals).orange
    }

    pub fn muted(&self, visuals: &Visuals) -> Color32 {
        self.palette(visuals).comment
    }
}

#[derive(Clone)]
struct Palette {
    background: Color32,
    surface: Color32,
    surface_raised: Color32,
    shadow: Color32,
    foreground: Color32,
    selection: Color32,
    comment: Color32,
    red: Color32,
    orange: Color32,
    green: Color32,
    violet: Color32,
    cyan: Color32,
}

impl Palette {
    fn night() -> Self {
        Self {
            background: Color32::from_rgb(24, 25, 38),
            surface: Color32::from_rgb(30, 32, 48),
            surface_raised: Color32::from_rgb(45, 47, 68),
            shadow: Color32::from_rgb(18, 19, 30),
            foreground: Color32::from_rgb(205, 205, 210),
            selection: Color32::from_rgb(68, 71, 90),
            comment: Color32::from_rgb(108, 118, 160),
            red: Color32::from_rgb(247, 118, 118),
            orange: Color32::from_rgb(255, 158, 100),
            green: Color32::from_rgb(96, 211, 128),
            violet: Color32::from_rgb(187, 154, 247),
            cyan: Color32::from_rgb(112, 180, 239),
        }
    }

    fn paper() -> Self {
        Self {
            background: Color32::from_rgb(243, 243, 250),
            surface: Color32::from_rgb(234, 234, 244),
            surface_raised: Color32::from_rgb(250, 250, 255),
            shadow: Color32::from_rgb(222, 222, 236),
            foreground: Color32::from_rgb(44, 44, 52),
            selection: Color32::from_rgb(202, 204, 230),
            comment: Color32::from_rgb(140, 150, 190),
            red: Color32::from_rgb(198, 84, 84),
            orange: Color32::from_rgb(214, 138, 70),
            green: Color32::from_rgb(84, 172, 106),
            violet: Color32::from_rgb(146, 118, 208),
            cyan: Color32::from_rgb(80, 154, 202),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, p: &Palette, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: WidgetVisuals {
                    bg_fill: p.background,
                    weak_bg_fill: p.surface_raised,
                    bg_stroke: Stroke {
                        color: p.surface,
                        ..default.widgets.noninteractive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: p.foreground,
                        ..default.widgets.noninteractive.fg_stroke
                    },
                    ..default.widgets.noninteractive
                },
                inactive: WidgetVisuals {
                    bg_fill: p.surface_raised,
                    weak_bg_fill: p.surface_raised,
                    bg_stroke: Stroke { color: p.surface, ..default.widgets.inactive.bg_stroke },
                    fg_stroke: Stroke {
                        color: p.foreground,
                        ..default.widgets.inactive.fg_stroke
                    },
                    ..default.widgets.inactive
                },
                hovered: WidgetVisuals {
                    bg_fill: p.selection,
                    weak_bg_fill: p.surface_raised,
                    bg_stroke: Stroke { color: p.cyan, ..default.widgets.hovered.bg_stroke },
                    fg_stroke: Stroke { color: p.foreground, ..default.widgets.hovered.fg_stroke },
                    ..default.widgets.hovered
                },
                active: WidgetVisuals {
                    bg_fill: p.selection,
                    weak_bg_fill: p.surface_raised,
                    bg_stroke: Stroke { color: p.cyan, ..default.widgets.active.bg_stroke },
                    fg_stroke: Stroke { color: p.foreground, ..default.widgets.active.fg_stroke },
                    ..default.widgets.active
                },
                open: WidgetVisuals {
                    bg_fill: p.surface,
                    weak_bg_fill: p.surface_raised,
                    bg_stroke: Stroke { color: p.violet, ..default.widgets.open.bg_stroke },
                    fg_stroke: Stroke { color: p.foreground, ..default.widgets.open.fg_stroke },
                    ..default.widgets.open
                },
            },
            selection: Selection {
                bg_fill: p.selection,
                stroke: Stroke { color: p.foreground, ..default.selection.stroke },
            },
            hyperlink_color: p.cyan,
            faint_bg_color: match is_dark {
                true => p.shadow,
                false => p.surface_raised,
            },
            extreme_bg_color: p.shadow,
            code_bg_color: p.surface,
            error_fg_color: p.red,
            warn_fg_color: p.orange,
            window_shadow: Shadow { color: p.shadow, ..default.window_shadow },
            window_fill: p.background,
            window_stroke: Stroke { color: p.surface_raised, ..default.window_stroke },
            panel_fill: p.surface,
            popup_shadow: Shadow { color: p.surface, ..default.popup_shadow },
            ..default
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accents_switch_with_the_active_visuals() {
        let theme = Theme::night();
        let dark = Visuals::dark();
        let light = Visuals::light();

        assert_ne!(theme.good(&dark), theme.good(&light));
        assert_ne!(theme.bad(&dark), theme.bad(&light));
        assert_ne!(theme.accent(&dark), theme.accent(&light));
        assert_ne!(theme.muted(&dark), theme.muted(&light));
    }
}
