use crate::errors::Error;
use crate::i18n::LangKey;
use crate::state::{AppState, Event, Message};
use crate::ui::View;
use egui::Key;
use std::sync::Arc;
use std::sync::mpsc::Sender;

#[derive(Default)]
pub struct EditorPanel;

impl View for EditorPanel {
    fn ui(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        let sender = state.get_sender();
        let i18n = state.i18n();

        ui.vertical(|ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(format!("{}:", i18n.get(LangKey::Input)))
                        .strong()
                        .size(14.0),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(format!("▶ {}", i18n.get(LangKey::Run))).clicked() {
                        send(&sender, Event::RunQuery);
                    }
                    if ui
                        .button(format!("📋 {}", i18n.get(LangKey::Copy)))
                        .clicked()
                    {
                        ui.ctx().copy_text(state.workbench.editor_text.clone());
                        send(
                            &sender,
                            Event::ShowToast(i18n.get(LangKey::CopiedToClipboard)),
                        );
                    }
                    if ui.button(i18n.get(LangKey::Save)).clicked() {
                        send(
                            &sender,
                            Event::SaveQuery(state.workbench.editor_text.clone()),
                        );
                    }
                });
            });
            ui.add_space(4.0);

            let response = ui.add_sized(
                ui.available_size(),
                egui::TextEdit::multiline(&mut state.workbench.editor_text)
                    .id(ui.id().with("query_editor"))
                    .font(egui::TextStyle::Monospace),
            );

            // Plain Enter inserts a newline; only the modifier chord runs.
            if response.has_focus()
                && ui.input(|i| i.key_pressed(Key::Enter) && i.modifiers.command)
            {
                send(&sender, Event::RunQuery);
            }
        });
    }
}

fn send(sender: &Arc<Sender<Message>>, event: Event) {
    sender
        .send(Message::Event(Arc::new(event)))
        .unwrap_or_else(|e| {
            Error::from(e).show_error_dialog(sender.clone());
        });
}
