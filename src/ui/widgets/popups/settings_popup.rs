use crate::errors::Error;
use crate::i18n::{I18N, LangKey, Language};
use crate::state::{DEFAULT_ROWS_PER_CHUNK, Event, Message, Preferences, Theme};
use crate::ui;
use egui::{Context, Vec2b};
use std::sync::Arc;
use std::sync::mpsc::Sender;

pub struct SettingsPopup {
    pub open: bool,
    language_idx: usize,
    languages: Vec<Language>,
    theme_idx: usize,
    themes: Vec<Theme>,
    rows_per_chunk: usize,
}

impl Default for SettingsPopup {
    fn default() -> Self {
        Self {
            open: false,
            language_idx: 0,
            languages: Language::vector(),
            theme_idx: 0,
            themes: Theme::vector(),
            rows_per_chunk: DEFAULT_ROWS_PER_CHUNK,
        }
    }
}

impl SettingsPopup {
    /// Mirrors the current preferences into the form fields. Called right
    /// before the popup opens so stale edits never carry over.
    pub fn sync(&mut self, prefs: &Preferences) {
        self.language_idx = self
            .languages
            .iter()
            .position(|&l| l == prefs.language)
            .unwrap_or(0);
        self.theme_idx = self
            .themes
            .iter()
            .position(|&t| t == prefs.theme)
            .unwrap_or(0);
        self.rows_per_chunk = prefs.rows_per_chunk;
    }

    fn apply(&self, sender: &Arc<Sender<Message>>) {
        self.send(sender, Event::SetLanguage(self.languages[self.language_idx]));
        self.send(sender, Event::SetTheme(self.themes[self.theme_idx]));
        self.send(sender, Event::SetRowsPerChunk(self.rows_per_chunk));
    }

    fn send(&self, sender: &Arc<Sender<Message>>, event: Event) {
        sender
            .send(Message::Event(Arc::new(event)))
            .unwrap_or_else(|e| {
                Error::from(e).show_error_dialog(sender.clone());
            });
    }
}

fn theme_label(i18n: &I18N, theme: Theme) -> String {
    match theme {
        Theme::Dark => i18n.get(LangKey::Dark),
        Theme::Light => i18n.get(LangKey::Light),
    }
}

impl ui::Widget for SettingsPopup {
    fn show(
        &mut self,
        ctx: &Context,
        sender: Arc<Sender<Message>>,
        i18n: Arc<I18N>,
    ) -> Result<(), Error> {
        if !self.open {
            return Ok(());
        }
        let mut apply_clicked = false;
        let mut close_clicked = false;

        egui::Window::new(i18n.get(LangKey::Settings))
            .id(egui::Id::new("settings"))
            .min_width(480.0)
            .collapsible(false)
            .resizable(Vec2b { x: false, y: false })
            .open(&mut self.open)
            .show(ctx, |ui| {
                ui.label(i18n.get(LangKey::Language));
                egui::ComboBox::from_label(i18n.get(LangKey::SelectLanguage))
                    .selected_text(self.languages[self.language_idx].to_string())
                    .show_ui(ui, |ui| {
                        for (i, option) in self.languages.iter().enumerate() {
                            ui.selectable_value(&mut self.language_idx, i, option.to_string());
                        }
                    });
                ui.separator();
                ui.label(i18n.get(LangKey::Theme));
                egui::ComboBox::from_id_salt("theme_select")
                    .selected_text(theme_label(&i18n, self.themes[self.theme_idx]))
                    .show_ui(ui, |ui| {
                        for (i, option) in self.themes.iter().enumerate() {
                            ui.selectable_value(
                                &mut self.theme_idx,
                                i,
                                theme_label(&i18n, *option),
                            );
                        }
                    });
                ui.separator();
                ui.label(i18n.get(LangKey::RowsPerLoad));
                ui.add(egui::DragValue::new(&mut self.rows_per_chunk).range(1..=500));
                ui.separator();
                ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                    ui.horizontal(|ui| {
                        egui::Sides::new().show(
                            ui,
                            |_| {},
                            |ui| {
                                if ui.button(i18n.get(LangKey::Apply)).clicked() {
                                    apply_clicked = true;
                                }
                                if ui.button(i18n.get(LangKey::Close)).clicked() {
                                    close_clicked = true;
                                }
                            },
                        );
                    });
                });
            });

        if apply_clicked {
            self.apply(&sender);
        }
        if close_clicked {
            self.open = false;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_mirrors_preferences() {
        let mut prefs = Preferences::default();
        prefs.language = Language::German;
        prefs.theme = Theme::Light;
        prefs.rows_per_chunk = 50;

        let mut popup = SettingsPopup::default();
        popup.sync(&prefs);

        assert_eq!(popup.languages[popup.language_idx], Language::German);
        assert_eq!(popup.themes[popup.theme_idx], Theme::Light);
        assert_eq!(popup.rows_per_chunk, 50);
    }
}
