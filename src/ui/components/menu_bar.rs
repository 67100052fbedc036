use crate::errors::Error;
use crate::i18n::LangKey;
use crate::state::{AppState, Event, Message, SplitOrientation, Theme};
use crate::ui::Component;
use egui::Context;
use std::sync::Arc;

#[derive(Default)]
pub struct MenuBar;

impl Component for MenuBar {
    fn show(&mut self, ctx: &Context, state: &mut AppState) -> Result<(), Error> {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.label(egui::RichText::new(crate::APP_NAME).strong());
                ui.separator();
                ui.menu_button(state.i18n().get(LangKey::Window), |ui| {
                    if ui
                        .button(if state.sidebar_open {
                            state.i18n().get(LangKey::HideSidebar)
                        } else {
                            state.i18n().get(LangKey::ShowSidebar)
                        })
                        .clicked()
                    {
                        state.set_state(Message::ToggleSidebar);
                        ui.close();
                    }
                    if ui.button(state.i18n().get(LangKey::Quit)).clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        ui.close();
                    }
                });
                ui.menu_button(state.i18n().get(LangKey::Edit), |ui| {
                    if ui.button(state.i18n().get(LangKey::Settings)).clicked() {
                        state.set_state(Message::OpenSettings);
                        ui.close();
                    }
                });
                ui.menu_button(state.i18n().get(LangKey::Help), |ui| {
                    if ui.button(state.i18n().get(LangKey::About)).clicked() {
                        state.show_about = true;
                        ui.close();
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    // Shows the theme you would switch to, not the active one.
                    let theme_glyph = match state.prefs.theme {
                        Theme::Dark => "☀",
                        Theme::Light => "🌙",
                    };
                    if ui
                        .button(theme_glyph)
                        .on_hover_text(state.i18n().get(LangKey::ToggleTheme))
                        .clicked()
                    {
                        state.set_state(Message::Event(Arc::new(Event::ToggleTheme)));
                    }

                    let split_glyph = match state.prefs.orientation {
                        SplitOrientation::Horizontal => "↕",
                        SplitOrientation::Vertical => "↔",
                    };
                    if ui
                        .button(split_glyph)
                        .on_hover_text(state.i18n().get(LangKey::ToggleSplitDirection))
                        .clicked()
                    {
                        state.set_state(Message::Event(Arc::new(Event::ToggleSplitOrientation)));
                    }
                });
            });
        });
        Ok(())
    }
}
