use crate::errors::Error;
use crate::i18n::{I18N, LangKey};
use crate::state::{AppState, Event, Message};
use crate::ui::Component;
use egui::Context;
use std::sync::Arc;
use std::sync::mpsc::Sender;

/// List of saved queries with inline rename. At most one row is in edit mode
/// at a time; the draft lives here, the store is only touched on commit.
#[derive(Default)]
pub struct QuerySidebar {
    editing: Option<(u64, String)>,
    focus_pending: bool,
}

impl Component for QuerySidebar {
    fn show(&mut self, ctx: &Context, state: &mut AppState) -> Result<(), Error> {
        let sender = state.get_sender();
        let i18n = state.i18n();
        let active = state.store.active_id();
        let entries: Vec<(u64, String)> = state
            .store
            .iter()
            .map(|q| (q.id, q.title.clone()))
            .collect();

        egui::SidePanel::left("query_sidebar")
            .min_width(160.0)
            .max_width(320.0)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(i18n.get(LangKey::SavedQueries))
                        .strong()
                        .size(14.0),
                );
                ui.separator();

                ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                    if ui
                        .add_sized(
                            [ui.available_width(), 0.0],
                            egui::Button::new(i18n.get(LangKey::CreateNewQuery)),
                        )
                        .clicked()
                    {
                        send(&sender, Event::CreateQuery);
                    }
                    ui.separator();
                    ui.with_layout(egui::Layout::top_down_justified(egui::Align::Min), |ui| {
                        egui::ScrollArea::vertical()
                            .id_salt("query_list")
                            .auto_shrink([false, false])
                            .show(ui, |ui| {
                                for (id, title) in &entries {
                                    self.query_row(
                                        ui,
                                        &sender,
                                        &i18n,
                                        *id,
                                        title,
                                        active == Some(*id),
                                    );
                                }
                            });
                    });
                });
            });
        Ok(())
    }
}

impl QuerySidebar {
    fn query_row(
        &mut self,
        ui: &mut egui::Ui,
        sender: &Arc<Sender<Message>>,
        i18n: &Arc<I18N>,
        id: u64,
        title: &str,
        selected: bool,
    ) {
        let is_editing = matches!(&self.editing, Some((editing_id, _)) if *editing_id == id);
        if is_editing {
            let mut commit = false;
            if let Some((_, draft)) = self.editing.as_mut() {
                let response = ui.add_sized(
                    [ui.available_width(), 0.0],
                    egui::TextEdit::singleline(draft),
                );
                if self.focus_pending {
                    response.request_focus();
                    self.focus_pending = false;
                }
                // Fires on Enter as well as on clicking elsewhere.
                commit = response.lost_focus();
            }
            if commit {
                if let Some((_, draft)) = self.editing.take() {
                    send(sender, Event::RenameQuery(id, draft));
                }
            }
            return;
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button("🗑")
                .on_hover_text(i18n.get(LangKey::Delete))
                .clicked()
            {
                send(sender, Event::DeleteQuery(id));
            }
            if ui
                .button("✏")
                .on_hover_text(i18n.get(LangKey::Rename))
                .clicked()
            {
                self.editing = Some((id, title.to_owned()));
                self.focus_pending = true;
            }
            if ui
                .add_sized(
                    [ui.available_width(), 0.0],
                    egui::Button::new(title)
                        .selected(selected)
                        .wrap_mode(egui::TextWrapMode::Truncate),
                )
                .clicked()
            {
                send(sender, Event::SelectQuery(id));
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
